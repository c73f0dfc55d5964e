//! Quick-pick dashboard and the HH:MM input box.
//!
//! Both read from any `BufRead` so they can be driven by stdin or a test buffer.
//! A blank answer or end of input means the user cancelled.

use crate::core::track::TrackAction;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Track(TrackAction),
    ShowStatus,
}

/// Fixed list of entries, in display order.
pub const MENU: [(&str, MenuAction); 7] = [
    ("Set arrival time", MenuAction::Track(TrackAction::Arrival)),
    ("Set lunch start time", MenuAction::Track(TrackAction::LunchStart)),
    ("Set lunch end time", MenuAction::Track(TrackAction::LunchEnd)),
    ("Start a break", MenuAction::Track(TrackAction::BreakStart)),
    ("End the current break", MenuAction::Track(TrackAction::BreakEnd)),
    ("Set departure time", MenuAction::Track(TrackAction::Departure)),
    ("Show remaining time", MenuAction::ShowStatus),
];

/// Prompt shown before asking the time of a tracking action.
pub fn time_prompt(action: TrackAction) -> &'static str {
    match action {
        TrackAction::Arrival => "Enter your arrival time (HH:MM)",
        TrackAction::Departure => "Enter your departure time (HH:MM)",
        TrackAction::LunchStart => "Enter your lunch start time (HH:MM)",
        TrackAction::LunchEnd => "Enter your lunch end time (HH:MM)",
        TrackAction::BreakStart | TrackAction::BreakEnd => "",
    }
}

fn read_answer<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let answer = line.trim();
    if answer.is_empty() {
        Ok(None)
    } else {
        Ok(Some(answer.to_string()))
    }
}

/// Show the numbered menu and return the chosen entry.
/// An answer that is not one of the numbers counts as a cancel.
pub fn quick_pick<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<MenuAction>> {
    writeln!(out, "📋 What do you want to do?")?;
    for (i, (label, _)) in MENU.iter().enumerate() {
        writeln!(out, "  {}) {}", i + 1, label)?;
    }
    write!(out, "> ")?;
    out.flush()?;

    let Some(answer) = read_answer(input)? else {
        return Ok(None);
    };

    Ok(answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| MENU.get(idx))
        .map(|(_, action)| *action))
}

/// Ask for a free-form answer; `None` when cancelled.
pub fn input_box<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<String>> {
    write!(out, "{}: ", prompt)?;
    out.flush()?;
    read_answer(input)
}
