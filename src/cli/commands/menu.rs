use super::{open_tracker, status, track};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::menu::{MenuAction, input_box, quick_pick, time_prompt};
use crate::ui::messages::info;
use crate::utils::time::parse_time_on;
use std::io::{self, BufRead, Write};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Menu) {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut out = io::stdout();
        run(cfg, &mut input, &mut out)?;
    }

    Ok(())
}

/// Dashboard flow: pick an entry, ask for the time when the entry needs one.
/// Cancelling at any prompt leaves the record untouched.
pub fn run<R: BufRead, W: Write>(cfg: &Config, input: &mut R, out: &mut W) -> AppResult<()> {
    let Some(choice) = quick_pick(input, out)? else {
        info("Nothing selected.");
        return Ok(());
    };

    let mut tracker = open_tracker(cfg)?;

    match choice {
        MenuAction::ShowStatus => status::render(&mut tracker),
        MenuAction::Track(action) if action.takes_time() => {
            let Some(answer) = input_box(time_prompt(action), input, out)? else {
                info("Cancelled.");
                return Ok(());
            };

            let at = parse_time_on(Some(answer.as_str()), tracker.today())?;
            track::perform(&mut tracker, action, at)
        }
        MenuAction::Track(action) => track::perform(&mut tracker, action, None),
    }
}
