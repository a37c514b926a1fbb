use clap::{Parser, Subcommand};

/// Command-line interface definition for cucostatus
#[derive(Parser)]
#[command(
    name = "cucostatus",
    version = env!("CARGO_PKG_VERSION"),
    about = "Cuco360 work-time status: presence, theoretical exit and whether you can leave",
    long_about = None
)]
pub struct Cli {
    /// Override config file path (useful for tests or multiple profiles)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Enable debug logging on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Run in test mode (no config or state file is written by init)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file
    Init,

    /// Show today's work status
    Status {
        /// Portal detail string ("HH:MM:SS E 001 | HH:MM:SS S 001 ...")
        #[arg(long, conflicts_with_all = ["detail_file", "debug", "debug_file"])]
        detail: Option<String>,

        /// File holding the portal detail string
        #[arg(long = "detail-file", value_name = "FILE", conflicts_with_all = ["debug", "debug_file"])]
        detail_file: Option<String>,

        /// Hand-entered marcajes (text or JSON), sorted and collapsed
        #[arg(long, conflicts_with = "debug_file")]
        debug: Option<String>,

        /// File holding hand-entered marcajes
        #[arg(long = "debug-file", value_name = "FILE")]
        debug_file: Option<String>,

        /// Evaluate as of this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Evaluate as of this time (HH:MM or HH:MM:SS)
        #[arg(long)]
        now: Option<String>,

        /// Bypass any cached snapshot
        #[arg(long = "force-refresh")]
        force_refresh: bool,

        /// Print the status as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute the theoretical exit for an entry time
    Exit {
        /// Entry time (HH:MM)
        entry: String,

        /// Working hours set id (defaults to the configured one)
        #[arg(long = "set")]
        set: Option<String>,

        /// Date the entry belongs to (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Current time used for the remaining minutes (HH:MM or HH:MM:SS)
        #[arg(long)]
        now: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// List the available working hours sets
    Sets {
        /// Date used for the August auto-detection (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Parse a marcaje string and print entries and exits
    Parse {
        raw: String,

        /// Use the tolerant parser for hand-entered data (text or JSON)
        #[arg(long)]
        debug: bool,

        #[arg(long)]
        json: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "set-active", value_name = "ID", help = "Select the working hours set")]
        set_active: Option<String>,

        #[arg(
            long = "auto-intensive",
            value_name = "BOOL",
            help = "Force the intensive set during August (true/false)"
        )]
        auto_intensive: Option<bool>,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Dismiss today's "time to leave" alert
    Ack {
        /// Day to acknowledge (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Time of the acknowledgement (HH:MM, defaults to now)
        #[arg(long)]
        now: Option<String>,

        /// Remove the acknowledgement instead
        #[arg(long)]
        clear: bool,
    },
}
