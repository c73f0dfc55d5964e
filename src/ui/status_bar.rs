//! Terminal rendition of the status bar slot: a text, a tooltip and the
//! command to run to open the dashboard.
//!
//! The item is an owned value created by the command that displays it and
//! passed explicitly to whoever refreshes it.

use crate::models::daily_record::DailyRecord;
use crate::models::remaining::Remaining;
use crate::utils::colors::{GREY, RESET, color_for_remaining};
use crate::utils::time::format_clock;

pub const DASHBOARD_COMMAND: &str = "menu";

const ICON: &str = "⏱";

#[derive(Debug, Default, Clone)]
pub struct StatusBarItem {
    text: String,
    tooltip: String,
    command: String,
    overtime: bool,
    visible: bool,
}

impl StatusBarItem {
    pub fn new() -> Self {
        Self {
            command: DASHBOARD_COMMAND.to_string(),
            ..Self::default()
        }
    }

    pub fn update(&mut self, record: &DailyRecord, remaining: Remaining) {
        self.text = format!("{ICON} {remaining}");
        self.tooltip = format!(
            "Work since {} today - run 'worktrack {}' to open the dashboard",
            format_clock(Some(record.arrival)),
            self.command
        );
        self.overtime = remaining.overtime;
        self.visible = true;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn render(&self) -> String {
        format!(
            "{}{}{}  {}{}{}",
            color_for_remaining(self.overtime),
            self.text,
            RESET,
            GREY,
            self.tooltip,
            RESET
        )
    }

    /// Print the item; nothing is printed before the first update.
    pub fn show(&self) {
        if self.visible {
            println!("{}", self.render());
        }
    }
}
