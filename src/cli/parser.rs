use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rDosePlan
#[derive(Parser)]
#[command(
    name = "rdoseplan",
    version = env!("CARGO_PKG_VERSION"),
    about = "A medication planner CLI: see which doses are due today, what is next, and plan the weeks ahead",
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

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a medication
    Add {
        /// Medication name
        name: String,

        #[arg(
            long = "freq",
            default_value = "once_daily",
            help = "once_daily, twice_daily, three_times_daily, four_times_daily, every_other_day, weekly, as_needed, custom:<hours>"
        )]
        frequency: String,

        #[arg(long = "at", help = "Time of the first dose (HH:MM or H:MM AM/PM)")]
        at: String,

        #[arg(long = "from", help = "First day (YYYY-MM-DD, default today)")]
        from: Option<String>,

        #[arg(
            long = "days",
            default_value = "ongoing",
            help = "Number of days, or 'ongoing'"
        )]
        days: String,

        #[arg(long = "mode", help = "Next-day rollover: restart or continue")]
        mode: Option<String>,

        #[arg(long = "dosage", default_value = "", help = "Dosage text, e.g. '50mg'")]
        dosage: String,

        #[arg(long = "category", help = "Grouping category for the planner")]
        category: Option<String>,
    },

    /// Delete a medication and its dose log
    Del {
        /// Medication id
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List stored medications
    List,

    /// Show the doses of a day with taken marks and progress
    Today {
        #[arg(long = "date", help = "Day to show (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long = "json", help = "Print the day summary as JSON")]
        json: bool,
    },

    /// Show the next pending dose
    Next {
        #[arg(long = "date", help = "Day to look at (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Mark a dose as taken (or untaken with --undo)
    Take {
        /// Medication id
        id: i64,

        #[arg(long = "dose", help = "Dose number within the day (default: first pending)")]
        dose: Option<u32>,

        #[arg(long = "date", help = "Day of the dose (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long = "undo", help = "Remove the taken mark instead")]
        undo: bool,
    },

    /// Show the upcoming schedule, grouped by category
    Plan {
        #[arg(long = "from", help = "First day (YYYY-MM-DD, default today)")]
        from: Option<String>,

        #[arg(long = "days", help = "Number of days (default from config)")]
        days: Option<u32>,

        #[arg(long = "export", value_name = "FILE", help = "Write the plan to a file")]
        export: Option<String>,

        #[arg(long, value_enum, default_value = "csv", help = "Export format")]
        format: ExportFormat,

        #[arg(long, short = 'f', help = "Overwrite the export file without asking")]
        force: bool,
    },
}
