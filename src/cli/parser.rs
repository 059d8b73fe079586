use crate::config::OvertimeModel;
use clap::{Parser, Subcommand};

/// Command-line interface definition for worktime
/// CLI application to track work days, breaks and overtime in a CSV ledger
#[derive(Parser)]
#[command(
    name = "worktime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track the work day, its breaks and the resulting overtime in a CSV ledger",
    long_about = None
)]
pub struct Cli {
    /// Override ledger path (balance and internal log follow it)
    #[arg(global = true, long = "ledger", value_name = "FILE")]
    pub ledger: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Without a subcommand the interactive session starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration and create an empty ledger
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Interactive session: start day, breaks, end day, ...
    Session,

    /// Add a free day (DD.MM.YYYY) or an inclusive range (DD.MM.YYYY-DD.MM.YYYY)
    FreeDay {
        /// Date or range of the free day(s)
        dates: String,

        #[arg(long, short, default_value = "", help = "Comment, e.g. 'Vacation'")]
        comment: String,
    },

    /// Record overtime taken on a date (e.g. -8 for a full day)
    TakeOvertime {
        /// Date (DD.MM.YYYY)
        date: String,

        /// Signed hours, `,` or `.` as decimal separator
        #[arg(allow_hyphen_values = true)]
        hours: String,
    },

    /// Sort the ledger rows by date
    Sort,

    /// Show the current overtime balance
    Overtime {
        #[arg(long, help = "Recompute the running balance from the ledger")]
        rebuild: bool,

        #[arg(long, value_enum, help = "Derivation to report (default from config)")]
        model: Option<OvertimeModel>,
    },

    /// List ledger rows
    List {
        #[arg(
            long,
            short,
            help = "Filter by DD.MM.YYYY, MM.YYYY, YYYY or DD.MM.YYYY-DD.MM.YYYY"
        )]
        period: Option<String>,
    },

    /// Print the internal log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log")]
        print: bool,
    },
}
