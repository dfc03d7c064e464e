//! End-to-end flows through the session, the way a visitor would type them.

use chronoterm::config::Theme;
use chronoterm::content::{PROJECTS, STORIES};
use chronoterm::shell::complete::{complete, Completion};
use chronoterm::shell::output::Tone;
use chronoterm::shell::session::Session;

fn session() -> Session {
    Session::new(Theme::Night)
}

fn last_text(session: &Session) -> Vec<String> {
    session
        .entries()
        .last()
        .expect("an entry")
        .lines
        .iter()
        .map(|line| line.text.clone())
        .collect()
}

#[test]
fn browse_projects_and_read_one() {
    let mut s = session();

    s.execute("cd /projects");
    assert_eq!(s.cwd_path(), "/projects");

    s.execute("ls");
    let listing = last_text(&s).join(" ");
    assert!(listing.contains("list.txt"));
    assert!(listing.contains("supplier-quotation-rag-pipeline.md"));

    s.execute("cat supplier-quotation-rag-pipeline.md");
    let detail = last_text(&s);
    assert_eq!(
        detail[0],
        "title: Multi-Agent Supplier Quotation Processing Pipeline"
    );
    assert!(detail.iter().any(|line| line == "timeline:"));
}

#[test]
fn listing_projects_shows_list_txt_first_in_declaration_order() {
    let mut s = session();
    s.execute("ls /projects");
    let listing = last_text(&s)[0].clone();
    let entries: Vec<&str> = listing.split("  ").collect();
    assert_eq!(entries[0], "list.txt");
    for (entry, project) in entries[1..].iter().zip(PROJECTS) {
        assert_eq!(*entry, format!("{}.md", project.id));
    }
}

#[test]
fn projects_command_numbers_every_record() {
    let mut s = session();
    s.execute("projects");
    let lines = last_text(&s);
    assert_eq!(lines[0], format!("projects ({})", PROJECTS.len()));
    assert!(lines[1].starts_with("1. "));
    assert_eq!(lines.len(), PROJECTS.len() + 1);
}

#[test]
fn journey_and_story_by_index_agree() {
    let mut s = session();
    s.execute("journey");
    assert_eq!(last_text(&s)[0], format!("stories ({})", STORIES.len()));

    s.execute("story 3");
    assert_eq!(last_text(&s)[0], format!("title: {}", STORIES[2].title));
}

#[test]
fn open_prefers_projects_and_falls_back_to_stories() {
    let mut s = session();

    s.execute("open rag");
    assert_eq!(
        last_text(&s)[0],
        "title: Multi-Agent Supplier Quotation Processing Pipeline"
    );

    s.execute("open volleyball");
    assert!(last_text(&s)[0].starts_with("title:"));
    assert!(last_text(&s).iter().any(|line| line.starts_with("result:")));
}

#[test]
fn relative_navigation_clamps_at_root() {
    let mut s = session();
    s.execute("cd ..");
    assert_eq!(s.cwd_path(), "/home");
    s.execute("cd ../../../..");
    assert_eq!(s.cwd_path(), "/");
    s.execute("cd home/nishanth");
    assert_eq!(s.cwd_path(), "/home/nishanth");
}

#[test]
fn invalid_theme_is_rejected_with_the_option_list() {
    let mut s = session();
    s.execute("theme banana");
    let entry = s.entries().last().unwrap();
    assert_eq!(entry.lines[0].tone, Tone::Error);
    assert_eq!(
        entry.lines[0].text,
        "invalid theme 'banana', use: vibrant, night, mint, sunset"
    );
    assert_eq!(s.theme(), Theme::Night);
}

#[test]
fn clear_resets_the_log_but_not_the_session() {
    let mut s = session();
    s.execute("cd /journey");
    s.execute("theme mint");
    s.execute("clear");
    assert!(s.entries().is_empty());
    assert_eq!(s.cwd_path(), "/journey");
    assert_eq!(s.theme(), Theme::Mint);
    assert_eq!(s.history().len(), 3);
}

#[test]
fn completion_round_trip_through_a_session() {
    let mut s = session();
    s.execute("cd /projects");

    // In /projects a unique prefix completes to the local entry.
    let done = complete("cat supplier-q", s.cwd_segments());
    assert_eq!(
        done,
        Completion::Replace("cat supplier-quotation-rag-pipeline.md ".to_string())
    );

    // Ambiguous prefixes surface candidates instead of guessing.
    match complete("cat p", s.cwd_segments()) {
        Completion::Candidates { token, matches } => {
            assert_eq!(token, "cat");
            assert!(matches.len() > 1);
        }
        other => panic!("expected candidates, got {other:?}"),
    }
}

#[test]
fn every_documented_command_produces_output() {
    let inputs = [
        "help", "man ls", "whoami", "neofetch", "pwd", "ls", "cd /projects", "cat list.txt",
        "projects", "project 1", "journey", "story 1", "open rag", "profile", "resume", "contact",
        "theme night", "sudo hire nishanth",
    ];
    let mut s = session();
    for input in inputs {
        s.execute(input);
        assert!(
            !s.entries().last().unwrap().lines.is_empty(),
            "no output for {input}"
        );
    }
}
