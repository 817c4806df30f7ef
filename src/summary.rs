use std::io::{self, Write};

use crate::github::{Event, EventKind};

/// One-line description of an event. Never fails: missing payload data shows up as empty
/// strings or zero counts.
pub fn describe(event: &Event) -> String {
    let repo = &event.repo;
    let payload = &event.payload;

    match event.kind() {
        EventKind::Push => format!("Pushed {} commits to {}", payload.commits.len(), repo),
        EventKind::Create => format!("Created {} in {}", payload.ref_type, repo.name),
        EventKind::Watch => format!("Starred {}", repo.name),
        EventKind::Fork => format!("Forked {}", repo.name),
        EventKind::Other(r#type) => format!("{} in {}", r#type, repo.name),
    }
}

pub fn format_events(events: &[Event]) -> Vec<String> {
    events.iter().map(describe).collect()
}

pub fn print_events<W: Write>(out: &mut W, events: &[Event]) -> io::Result<()> {
    for line in format_events(events) {
        writeln!(out, "- {}", line)?;
    }

    Ok(())
}
