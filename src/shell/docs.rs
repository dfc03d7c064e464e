//! The built-in command table: usage strings, descriptions, and examples
//! backing `help`, `man`, and command-name completion.

use crate::shell::output::OutputLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDoc {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

pub const COMMAND_DOCS: &[CommandDoc] = &[
    CommandDoc {
        name: "help",
        usage: "help",
        description: "Show all commands and short explanations.",
        examples: &["help"],
    },
    CommandDoc {
        name: "man",
        usage: "man <command>",
        description: "Show detailed help for a specific command.",
        examples: &["man project", "man cd"],
    },
    CommandDoc {
        name: "clear",
        usage: "clear",
        description: "Clear terminal output.",
        examples: &[],
    },
    CommandDoc {
        name: "whoami",
        usage: "whoami",
        description: "Print current user name.",
        examples: &[],
    },
    CommandDoc {
        name: "neofetch",
        usage: "neofetch",
        description: "Show system-style portfolio information.",
        examples: &[],
    },
    CommandDoc {
        name: "pwd",
        usage: "pwd",
        description: "Print current working directory.",
        examples: &[],
    },
    CommandDoc {
        name: "ls",
        usage: "ls [path]",
        description: "List directory contents.",
        examples: &["ls", "ls /projects"],
    },
    CommandDoc {
        name: "cd",
        usage: "cd <path>",
        description: "Change current directory.",
        examples: &["cd /projects", "cd ..", "cd /home/nishanth"],
    },
    CommandDoc {
        name: "cat",
        usage: "cat <file>",
        description: "Read a file and print its content.",
        examples: &["cat profile.txt", "cat /projects/list.txt"],
    },
    CommandDoc {
        name: "projects",
        usage: "projects",
        description: "List all project files.",
        examples: &[],
    },
    CommandDoc {
        name: "project",
        usage: "project <id|number|keyword>",
        description: "Open one project in detailed view.",
        examples: &["project rag", "project 2", "project visionary"],
    },
    CommandDoc {
        name: "journey",
        usage: "journey",
        description: "List all journey story files.",
        examples: &[],
    },
    CommandDoc {
        name: "story",
        usage: "story <id|number|keyword>",
        description: "Open one journey story in detailed view.",
        examples: &["story internship", "story 3"],
    },
    CommandDoc {
        name: "open",
        usage: "open <keyword>",
        description: "Shortcut to open either a project or journey story.",
        examples: &["open rag", "open hackathon"],
    },
    CommandDoc {
        name: "profile",
        usage: "profile",
        description: "Print profile summary.",
        examples: &[],
    },
    CommandDoc {
        name: "resume",
        usage: "resume",
        description: "Print resume quick summary.",
        examples: &[],
    },
    CommandDoc {
        name: "contact",
        usage: "contact",
        description: "Show contact channels.",
        examples: &[],
    },
    CommandDoc {
        name: "theme",
        usage: "theme <vibrant|night|mint|sunset>",
        description: "Switch portfolio color theme.",
        examples: &["theme night"],
    },
    CommandDoc {
        name: "sudo",
        usage: "sudo <command>",
        description: "Hacker-style easter egg.",
        examples: &["sudo hire nishanth", "sudo rm -rf /"],
    },
];

/// All command names, in table order.
pub fn command_names() -> impl Iterator<Item = &'static str> {
    COMMAND_DOCS.iter().map(|doc| doc.name)
}

pub fn doc_for(name: &str) -> Option<&'static CommandDoc> {
    let name = name.to_lowercase();
    COMMAND_DOCS.iter().find(|doc| doc.name == name)
}

/// The `help` output: one usage/description line per command.
pub fn help_lines() -> Vec<OutputLine> {
    let mut lines = vec![OutputLine::accent("commands:")];
    for doc in COMMAND_DOCS {
        lines.push(OutputLine::muted(format!(
            "- {} -> {}",
            doc.usage, doc.description
        )));
    }
    lines.push(OutputLine::success("Use: man <command> for examples."));
    lines
}

/// The `man <command>` output.
pub fn man_lines(command: &str) -> Vec<OutputLine> {
    let Some(doc) = doc_for(command) else {
        return vec![OutputLine::error(format!(
            "man: no manual entry for {command}"
        ))];
    };
    let mut lines = vec![
        OutputLine::accent(format!("{} MANUAL", doc.name.to_uppercase())),
        OutputLine::new(format!("usage: {}", doc.usage)),
        OutputLine::new(format!("description: {}", doc.description)),
    ];
    if !doc.examples.is_empty() {
        lines.push(OutputLine::new("examples:"));
        lines.extend(
            doc.examples
                .iter()
                .map(|example| OutputLine::muted(format!("  - {example}"))),
        );
    }
    lines
}
