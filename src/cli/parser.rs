use clap::{Parser, Subcommand};

/// Command-line interface definition for worktrack
/// CLI status line counting down to today's departure time
#[derive(Parser)]
#[command(
    name = "worktrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track today's arrival, lunch and breaks and count down to departure",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, information)
    Db {
        #[arg(
            long = "migrate",
            help = "Run pending migrations and upgrade legacy day values"
        )]
        migrate: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Set today's arrival time (now when omitted)
    Arrival {
        /// Time of arrival (HH:MM)
        time: Option<String>,
    },

    /// Set today's departure time (now when omitted)
    Departure {
        /// Time of departure (HH:MM)
        time: Option<String>,
    },

    /// Set today's lunch start time (now when omitted)
    LunchStart {
        /// Lunch start (HH:MM)
        time: Option<String>,
    },

    /// Set today's lunch end time (now when omitted)
    LunchEnd {
        /// Lunch end (HH:MM)
        time: Option<String>,
    },

    /// Start or end an ad-hoc break
    Break {
        #[command(subcommand)]
        action: BreakCommand,
    },

    /// Print the status line once
    Status,

    /// Keep the status line refreshed until Ctrl-C
    Watch {
        #[arg(long = "ticks", help = "Stop after this many refreshes")]
        ticks: Option<u64>,
    },

    /// Open the interactive dashboard menu
    Menu,

    /// Show a day's record without creating it
    Show {
        #[arg(long, help = "Day to show (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long, help = "Print the raw stored record as JSON")]
        json: bool,
    },
}

#[derive(Subcommand, Clone, Copy)]
pub enum BreakCommand {
    /// Start a break now
    Start,
    /// End the current break now
    End,
}
