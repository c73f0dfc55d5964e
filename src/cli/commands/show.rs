use super::{CliTracker, open_tracker};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::breaks::total_break_ms;
use crate::core::clock::Clock;
use crate::errors::{AppError, AppResult};
use crate::models::daily_record::DailyRecord;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_optional;
use crate::utils::date::parse_date;
use crate::utils::formatting::{bold, pad_right};
use crate::utils::ms2readable;
use crate::utils::time::format_clock;
use chrono::NaiveDate;

const LABEL_W: usize = 20;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date, json } = cmd {
        let tracker = open_tracker(cfg)?;

        let day = match date {
            Some(d) => parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?,
            None => tracker.today(),
        };

        match tracker.peek_record(day)? {
            None => info(format!("No record for {}", day)),
            Some(record) if *json => println!("{}", serde_json::to_string_pretty(&record)?),
            Some(record) => print_record(&tracker, day, &record)?,
        }
    }

    Ok(())
}

fn line(label: &str, value: &str) {
    println!("{} {}", bold(&pad_right(label, LABEL_W)), colorize_optional(value));
}

fn print_record(tracker: &CliTracker, day: NaiveDate, record: &DailyRecord) -> AppResult<()> {
    let now = tracker.clock().now_ms();
    let lunch = tracker.lunch_duration(record);
    let nominal = tracker.expected_departure(record);
    let break_total = total_break_ms(record, now);

    let adjusted = if tracker.settings().deduct_breaks {
        nominal.saturating_add(lunch).saturating_add(break_total)
    } else {
        nominal.saturating_add(lunch)
    };

    header(format!("Work day {} ({})", day, tracker.key_for(day)?));

    line("Arrival", &format_clock(Some(record.arrival)));
    line(
        "Lunch",
        &format!(
            "{} → {}",
            format_clock(record.lunch_start),
            format_clock(record.lunch_end)
        ),
    );
    line("Lunch duration", &ms2readable(lunch, false));

    if record.breaks.is_empty() {
        line("Breaks", "--:--");
    } else {
        for (i, b) in record.breaks.iter().enumerate() {
            let label = format!("Break #{}", i + 1);
            let value = format!(
                "{} → {} ({})",
                format_clock(Some(b.start)),
                format_clock(b.end),
                ms2readable(b.duration_until(now), false)
            );
            line(&label, &value);
        }
        line("Breaks total", &ms2readable(break_total, false));
    }

    line("Nominal departure", &format_clock(Some(nominal)));
    line("Adjusted departure", &format_clock(Some(adjusted)));
    line("Recorded departure", &format_clock(record.departure));
    line("State", &record.break_state().to_string());

    Ok(())
}
