//! Profile summary shown by `profile`, `whoami`, and `/home/nishanth/profile.txt`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength {
    pub name: &'static str,
    pub proof: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthArea {
    pub name: &'static str,
    pub action: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillLevel {
    pub skill: &'static str,
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub strengths: &'static [Strength],
    pub growth_areas: &'static [GrowthArea],
    pub levels: &'static [SkillLevel],
}

pub const PROFILE: Profile = Profile {
    name: "Nishanth Gopinath",
    title: "Data Scientist & AI/ML Engineer",
    strengths: &[
        Strength {
            name: "System Thinking",
            proof: "Distributed booking platform stabilized under peak load.",
        },
        Strength {
            name: "Applied ML",
            proof: "Shipped usable AI workflows with measurable time savings.",
        },
        Strength {
            name: "Research + Build",
            proof: "Published work while translating ideas into engineering artifacts.",
        },
    ],
    growth_areas: &[
        GrowthArea {
            name: "Tracing at scale",
            action: "Building deeper observability patterns across services.",
        },
        GrowthArea {
            name: "Evaluation automation",
            action: "Standardizing model quality benchmarks per release.",
        },
    ],
    levels: &[
        SkillLevel { skill: "ML Engineering", level: 7 },
        SkillLevel { skill: "Data Systems", level: 7 },
        SkillLevel { skill: "Distributed Platforms", level: 6 },
        SkillLevel { skill: "Frontend Product", level: 5 },
    ],
};
