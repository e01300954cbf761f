//! Command-line snippets shown on the Instructions tab.

/// One titled CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub title: &'static str,
    pub command: String,
}

/// CLI commands for working with an experiment from a terminal.
pub fn experiment_instructions(cli: &str, id: u64) -> Vec<Instruction> {
    let base = format!("{} experiment -xp {}", cli, id);
    [
        ("Get experiment info", "get"),
        ("Stream logs", "logs"),
        ("List jobs", "jobs"),
        ("Show status history", "statuses"),
        ("Show metrics", "metrics"),
        ("Restart with the same config", "restart"),
        ("Stop", "stop"),
        ("Bookmark", "bookmark"),
    ]
    .into_iter()
    .map(|(title, sub)| Instruction {
        title,
        command: format!("{} {}", base, sub),
    })
    .collect()
}
