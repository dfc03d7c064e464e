//! Virtual filesystem classification over the static content.
//!
//! There is no mutable tree: a path is classified by a pure function.
//! Directories and plain files are fixed finite sets; record files under
//! `/projects` and `/journey` exist exactly when a matching record does.

use crate::content::{self, Project, Story, PROFILE, PROJECTS, STORIES};
use crate::shell::output::OutputLine;

pub const STATIC_DIRS: &[&str] = &["/", "/home", "/home/nishanth", "/projects", "/journey"];

pub const STATIC_FILES: &[&str] = &[
    "/home/nishanth/readme.txt",
    "/home/nishanth/profile.txt",
    "/home/nishanth/resume.txt",
    "/home/nishanth/contact.txt",
    "/projects/list.txt",
    "/journey/list.txt",
];

/// What an absolute path denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Directory,
    StaticFile,
    ProjectFile(&'static Project),
    StoryFile(&'static Story),
    Missing,
}

impl PathKind {
    pub fn is_directory(self) -> bool {
        matches!(self, PathKind::Directory)
    }

    pub fn is_file(self) -> bool {
        matches!(
            self,
            PathKind::StaticFile | PathKind::ProjectFile(_) | PathKind::StoryFile(_)
        )
    }
}

/// Classify an absolute path.
pub fn classify(path: &str) -> PathKind {
    if STATIC_DIRS.contains(&path) {
        return PathKind::Directory;
    }
    if STATIC_FILES.contains(&path) {
        return PathKind::StaticFile;
    }
    if let Some(id) = record_id(path, "/projects/") {
        if let Some(project) = content::project_by_id(id) {
            return PathKind::ProjectFile(project);
        }
    }
    if let Some(id) = record_id(path, "/journey/") {
        if let Some(story) = content::story_by_id(id) {
            return PathKind::StoryFile(story);
        }
    }
    PathKind::Missing
}

/// Extract `<id>` from `<prefix><id>.md`, rejecting nested paths.
fn record_id<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let id = path.strip_prefix(prefix)?.strip_suffix(".md")?;
    if id.is_empty() || id.contains('/') {
        return None;
    }
    Some(id)
}

/// List a directory's children: fixed entries first, then one synthetic
/// `<id>.md` per record in declaration order. Directories carry a
/// trailing slash. Returns `None` for non-directories.
pub fn list_dir(path: &str) -> Option<Vec<String>> {
    let entries = match path {
        "/" => vec!["home/".into(), "projects/".into(), "journey/".into()],
        "/home" => vec!["nishanth/".into()],
        "/home/nishanth" => vec![
            "readme.txt".into(),
            "profile.txt".into(),
            "resume.txt".into(),
            "contact.txt".into(),
        ],
        "/projects" => {
            let mut entries = vec!["list.txt".to_string()];
            entries.extend(PROJECTS.iter().map(|p| format!("{}.md", p.id)));
            entries
        }
        "/journey" => {
            let mut entries = vec!["list.txt".to_string()];
            entries.extend(STORIES.iter().map(|s| format!("{}.md", s.id)));
            entries
        }
        _ => return None,
    };
    Some(entries)
}

/// Render a file's contents as toned lines. Returns `None` when the
/// path is not a file.
pub fn read_file(path: &str) -> Option<Vec<OutputLine>> {
    let lines = match path {
        "/home/nishanth/readme.txt" => vec![
            OutputLine::accent("NISHANTH.OS terminal portfolio"),
            OutputLine::new("Use Linux-like commands for navigation and data exploration."),
            OutputLine::new("Try: ls, cd /projects, cat list.txt, open rag, man project"),
        ],
        "/home/nishanth/profile.txt" => {
            let mut lines = vec![
                OutputLine::accent(PROFILE.name),
                OutputLine::new(PROFILE.title),
                OutputLine::new("strengths:"),
            ];
            lines.extend(
                PROFILE
                    .strengths
                    .iter()
                    .map(|s| OutputLine::new(format!("  - {}: {}", s.name, s.proof))),
            );
            lines
        }
        "/home/nishanth/resume.txt" => vec![
            OutputLine::accent("Resume summary"),
            OutputLine::new("- Role focus: AI/ML Engineer, Data Scientist"),
            OutputLine::new("- Specialties: RAG systems, distributed systems, vision, research"),
            OutputLine::success("- Download PDF: /resume.pdf"),
        ],
        "/home/nishanth/contact.txt" => vec![
            OutputLine::accent("Contact channels"),
            OutputLine::new("- email: nishanthgopi2002@gmail.com"),
            OutputLine::new("- github: github.com/GNishanth7"),
            OutputLine::new("- linkedin: linkedin.com/in/nishanth-gopinath"),
        ],
        "/projects/list.txt" => {
            let mut lines = vec![OutputLine::accent(format!("projects ({})", PROJECTS.len()))];
            lines.extend(PROJECTS.iter().enumerate().map(|(i, p)| {
                OutputLine::new(format!("{}. {}.md  # {}", i + 1, p.id, p.title))
            }));
            lines
        }
        "/journey/list.txt" => {
            let mut lines = vec![OutputLine::accent(format!("stories ({})", STORIES.len()))];
            lines.extend(STORIES.iter().enumerate().map(|(i, s)| {
                OutputLine::new(format!("{}. {}.md  # {}", i + 1, s.id, s.title))
            }));
            lines
        }
        _ => match classify(path) {
            PathKind::ProjectFile(project) => project_lines(project),
            PathKind::StoryFile(story) => story_lines(story),
            _ => return None,
        },
    };
    Some(lines)
}

/// Structured field lines for one project, shared by `cat` and the
/// `project` command.
pub fn project_lines(project: &Project) -> Vec<OutputLine> {
    let mut lines = vec![
        OutputLine::accent(format!("title: {}", project.title)),
        OutputLine::new(format!("domain: {}", project.domain)),
        OutputLine::new(format!("role: {}", project.role)),
        OutputLine::new(format!("duration: {}", project.duration)),
        OutputLine::new(format!("challenge: {}", project.challenge)),
        OutputLine::success(format!("outcome: {}", project.headline_metric)),
        OutputLine::new(format!("stack: {}", project.stack.join(", "))),
        OutputLine::new("timeline:"),
    ];
    lines.extend(project.phases.iter().enumerate().map(|(i, phase)| {
        OutputLine::new(format!("  - T{} {}: {}", i, phase.label, phase.metric_delta))
    }));
    lines
}

/// Structured field lines for one story, shared by `cat` and the
/// `story` command.
pub fn story_lines(story: &Story) -> Vec<OutputLine> {
    let mut lines = vec![
        OutputLine::accent(format!("title: {}", story.title)),
        OutputLine::new(format!("category: {}", story.category.label())),
        OutputLine::new(format!("period: {}", story.period)),
        OutputLine::new(format!("context: {}", story.context)),
        OutputLine::new(format!("challenge: {}", story.challenge)),
        OutputLine::new(format!("role: {}", story.role)),
        OutputLine::success(format!("result: {}", story.result)),
        OutputLine::new(format!("tags: {}", story.tags.join(", "))),
        OutputLine::new("lessons:"),
    ];
    lines.extend(
        story
            .lessons
            .iter()
            .map(|lesson| OutputLine::new(format!("  - {lesson}"))),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_dirs_classify_as_directories() {
        for dir in STATIC_DIRS {
            assert_eq!(classify(dir), PathKind::Directory, "{dir}");
        }
    }

    #[test]
    fn static_files_classify_as_files() {
        for file in STATIC_FILES {
            assert!(classify(file).is_file(), "{file}");
        }
    }

    #[test]
    fn project_file_exists_iff_record_exists() {
        assert!(matches!(
            classify("/projects/visionary-ai.md"),
            PathKind::ProjectFile(p) if p.id == "visionary-ai"
        ));
        assert_eq!(classify("/projects/nonexistent.md"), PathKind::Missing);
        // Wrong extension and wrong directory both miss.
        assert_eq!(classify("/projects/visionary-ai.txt"), PathKind::Missing);
        assert_eq!(classify("/journey/visionary-ai.md"), PathKind::Missing);
    }

    #[test]
    fn story_file_exists_iff_record_exists() {
        assert!(matches!(
            classify("/journey/kittykat-internship.md"),
            PathKind::StoryFile(s) if s.id == "kittykat-internship"
        ));
        assert_eq!(classify("/journey/unknown.md"), PathKind::Missing);
    }

    #[test]
    fn nested_record_paths_are_missing() {
        assert_eq!(classify("/projects/a/b.md"), PathKind::Missing);
        assert_eq!(classify("/projects/.md"), PathKind::Missing);
    }

    #[test]
    fn projects_listing_starts_with_list_txt_in_declaration_order() {
        let entries = list_dir("/projects").unwrap();
        assert_eq!(entries[0], "list.txt");
        for (entry, project) in entries[1..].iter().zip(PROJECTS) {
            assert_eq!(entry, &format!("{}.md", project.id));
        }
        assert_eq!(entries.len(), PROJECTS.len() + 1);
    }

    #[test]
    fn journey_listing_starts_with_list_txt() {
        let entries = list_dir("/journey").unwrap();
        assert_eq!(entries[0], "list.txt");
        assert_eq!(entries.len(), STORIES.len() + 1);
    }

    #[test]
    fn list_dir_rejects_files_and_missing_paths() {
        assert!(list_dir("/projects/list.txt").is_none());
        assert!(list_dir("/nope").is_none());
    }

    #[test]
    fn read_file_covers_every_file() {
        for file in STATIC_FILES {
            assert!(read_file(file).is_some(), "{file}");
        }
        assert!(read_file("/projects/pssqfl.md").is_some());
        assert!(read_file("/projects").is_none());
        assert!(read_file("/missing.txt").is_none());
    }

    #[test]
    fn record_file_contents_match_detail_lines() {
        let project = &PROJECTS[0];
        let via_cat = read_file(&format!("/projects/{}.md", project.id)).unwrap();
        assert_eq!(via_cat, project_lines(project));
        assert_eq!(via_cat[0].text, format!("title: {}", project.title));
    }

    #[test]
    fn timeline_lines_are_indexed_from_t0() {
        let lines = project_lines(&PROJECTS[0]);
        let timeline: Vec<_> = lines
            .iter()
            .filter(|l| l.text.starts_with("  - T"))
            .collect();
        assert_eq!(timeline.len(), PROJECTS[0].phases.len());
        assert!(timeline[0].text.starts_with("  - T0 Baseline:"));
    }
}
