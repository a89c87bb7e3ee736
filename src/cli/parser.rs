use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn raw badge-reader swipe logs into per-shift attendance reports",
    long_about = None
)]
pub struct Cli {
    /// Rule file to use instead of ~/.rattendance/rule.yaml
    #[arg(global = true, long = "config", value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default rule file (shifts A/B/C)
    Init {
        /// Overwrite an existing rule file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Inspect, validate or edit the rule file
    Config {
        #[arg(long = "print", help = "Print the effective rules as YAML")]
        print_config: bool,

        #[arg(long = "check", help = "Load and validate the rule file")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the rule file (default editor: $EDITOR, $VISUAL, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Build the attendance report from a swipe log
    Process {
        /// Swipe log, .csv or .xlsx/.xls (columns ID, Name, Date, Time, Status)
        input: String,

        /// Report file; the extension picks the format unless --format is given
        output: String,

        /// Output format
        #[arg(long, value_enum, value_name = "FORMAT")]
        format: Option<ExportFormat>,

        /// Overwrite the output file instead of writing a timestamped copy
        #[arg(long, short = 'f')]
        force: bool,

        /// Also print the records as a table
        #[arg(long)]
        print: bool,
    },

    /// Extract ID, Name, Date, Time, Type, Status from a raw device CSV into XLSX
    Convert {
        /// Raw device export (.csv)
        input: String,

        /// Destination workbook (.xlsx)
        output: String,

        /// Overwrite the output file instead of writing a timestamped copy
        #[arg(long, short = 'f')]
        force: bool,
    },
}
