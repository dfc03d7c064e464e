//! Static portfolio content: project records, journey stories, and the
//! profile summary.
//!
//! Everything here is fixed at compile time. Records are never mutated;
//! the shell and the virtual filesystem consume them read-only. Ids are
//! unique within each collection.

mod profile;
mod projects;
mod stories;

pub use profile::{GrowthArea, Profile, SkillLevel, Strength, PROFILE};
pub use projects::{Phase, Project, PROJECTS};
pub use stories::{Story, StoryCategory, STORIES};

/// Look up a project by exact id.
pub fn project_by_id(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// Look up a story by exact id.
pub fn story_by_id(id: &str) -> Option<&'static Story> {
    STORIES.iter().find(|s| s.id == id)
}

/// Resolve a `project` command argument to a record.
///
/// A positive integer is a 1-based index into the declaration order;
/// anything else matches the first project whose id, title, or domain
/// contains the query as a case-insensitive substring.
pub fn find_project(query: &str) -> Option<&'static Project> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    if let Ok(index) = needle.parse::<usize>() {
        if index > 0 {
            return PROJECTS.get(index - 1);
        }
    }
    PROJECTS.iter().find(|p| {
        p.id.to_lowercase().contains(&needle)
            || p.title.to_lowercase().contains(&needle)
            || p.domain.to_lowercase().contains(&needle)
    })
}

/// Resolve a `story` command argument to a record.
///
/// Same contract as [`find_project`], except the substring match covers
/// id, title, and tags.
pub fn find_story(query: &str) -> Option<&'static Story> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    if let Ok(index) = needle.parse::<usize>() {
        if index > 0 {
            return STORIES.get(index - 1);
        }
    }
    STORIES.iter().find(|s| {
        s.id.to_lowercase().contains(&needle)
            || s.title.to_lowercase().contains(&needle)
            || s.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn project_ids_are_unique() {
        let ids: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn story_ids_are_unique() {
        let ids: HashSet<_> = STORIES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), STORIES.len());
    }

    #[test]
    fn find_project_by_number_is_one_based() {
        let first = find_project("1").expect("project 1 exists");
        assert_eq!(first.id, PROJECTS[0].id);
        assert!(find_project("0").is_none());
        assert!(find_project(&format!("{}", PROJECTS.len() + 1)).is_none());
    }

    #[test]
    fn find_project_matches_id_title_and_domain() {
        assert_eq!(
            find_project("rag").unwrap().id,
            "supplier-quotation-rag-pipeline"
        );
        assert_eq!(find_project("VISIONARY").unwrap().id, "visionary-ai");
        assert_eq!(
            find_project("quantum ml research").unwrap().id,
            "pssqfl"
        );
    }

    #[test]
    fn find_story_matches_tags() {
        let story = find_story("cockroachdb").expect("tag match");
        assert_eq!(story.id, "traffic-booking-distributed");
    }

    #[test]
    fn find_with_blank_query_is_none() {
        assert!(find_project("   ").is_none());
        assert!(find_story("").is_none());
    }

    #[test]
    fn every_project_has_a_full_timeline() {
        for project in PROJECTS {
            assert!(project.phases.len() >= 2, "{}", project.id);
            for phase in project.phases {
                assert!(!phase.label.is_empty());
                assert!(!phase.snapshot.is_empty());
                assert!(!phase.note.is_empty());
                assert!(!phase.metric_delta.is_empty());
            }
            assert!(!project.strengths.is_empty());
            assert!(!project.growth_edge.is_empty());
        }
    }

    #[test]
    fn every_story_carries_actions_and_lessons() {
        for story in STORIES {
            assert!(!story.actions.is_empty(), "{}", story.id);
            assert!(!story.lessons.is_empty(), "{}", story.id);
            assert!(!story.tags.is_empty(), "{}", story.id);
        }
    }

    #[test]
    fn profile_skill_levels_are_on_a_ten_scale() {
        assert!(!PROFILE.growth_areas.is_empty());
        assert!(!PROFILE.levels.is_empty());
        assert!(PROFILE.levels.iter().all(|l| (1..=10).contains(&l.level)));
    }

    #[test]
    fn non_numeric_query_falls_back_to_substring() {
        // "2fast" is not an index; it matches nothing either.
        assert!(find_project("2fast").is_none());
        assert!(find_project("2").is_some());
    }
}
