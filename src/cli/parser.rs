use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTeamcal
/// CLI application to keep a shared team calendar in a CSV file
#[derive(Parser)]
#[command(
    name = "rteamcal",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small team calendar CLI: register vacations, trips and half-days and publish them as calendar events",
    long_about = None
)]
pub struct Cli {
    /// Override data file path (useful for tests or a shared file)
    #[arg(global = true, long = "data", value_name = "CSV")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty data file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Rename legacy keys and add missing fields")]
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

    /// Manage the data file (schema migration, consistency checks, info)
    Data {
        #[arg(long = "migrate", help = "Upgrade the data file to the current schema")]
        migrate: bool,

        #[arg(long = "check", help = "Report rows with bad dates or unknown categories")]
        check: bool,

        #[arg(long = "info", help = "Show data file information")]
        info: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log")]
        print: bool,
    },

    /// Register a new schedule entry
    Add {
        /// Person the entry belongs to
        owner: String,

        #[arg(long = "start", help = "First day (YYYY-MM-DD)")]
        start: String,

        #[arg(long = "end", help = "Last day, inclusive (YYYY-MM-DD, default: start)")]
        end: Option<String>,

        #[arg(
            long = "category",
            short = 'c',
            help = "Category label or code (see `rteamcal categories`)"
        )]
        category: Option<String>,

        #[arg(long = "desc", short = 'd', default_value = "", help = "Description")]
        description: String,

        #[arg(
            long = "progress",
            value_parser = clap::value_parser!(u8).range(0..=100),
            help = "Progress percentage (0-100)"
        )]
        progress: Option<u8>,

        #[arg(long = "memo", help = "Free-text memo")]
        memo: Option<String>,
    },

    /// Update fields of an existing entry
    Edit {
        /// Entry id (or a unique prefix of it)
        id: String,

        #[arg(long = "owner")]
        owner: Option<String>,

        #[arg(long = "start", help = "First day (YYYY-MM-DD)")]
        start: Option<String>,

        #[arg(long = "end", help = "Last day, inclusive (YYYY-MM-DD)")]
        end: Option<String>,

        #[arg(long = "category", short = 'c')]
        category: Option<String>,

        #[arg(long = "desc", short = 'd')]
        description: Option<String>,

        #[arg(
            long = "progress",
            value_parser = clap::value_parser!(u8).range(0..=100),
            help = "Progress percentage (0-100)"
        )]
        progress: Option<u8>,

        #[arg(
            long = "clear-progress",
            conflicts_with = "progress",
            help = "Remove the progress value"
        )]
        clear_progress: bool,

        #[arg(long = "memo", help = "Free-text memo (empty string clears it)")]
        memo: Option<String>,
    },

    /// Delete an entry by id
    Del {
        /// Entry id (or a unique prefix of it)
        id: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List entries
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day, a range A:B, or 'all' (default: current month)"
        )]
        period: Option<String>,

        #[arg(long = "owner")]
        owner: Option<String>,

        #[arg(long = "category", short = 'c')]
        category: Option<String>,
    },

    /// Print calendar events as JSON (FullCalendar event objects)
    Events {
        #[arg(long, short, help = "Filter by period (default: all)")]
        period: Option<String>,

        #[arg(long = "out", value_name = "FILE", help = "Write to FILE instead of stdout")]
        out: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite FILE without asking")]
        force: bool,
    },

    /// Progress bar chart of entries that track a progress value
    Dashboard {
        #[arg(long, short, help = "Filter by period (default: all)")]
        period: Option<String>,

        #[arg(long = "owner")]
        owner: Option<String>,
    },

    /// Show the category legend (labels, codes, colors)
    Categories,

    /// Create a backup copy of the data file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export entries or calendar events
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'e', help = "Export projected calendar events")]
        events: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
