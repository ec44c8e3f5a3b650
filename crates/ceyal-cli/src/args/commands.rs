use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Summarize an event log: frequencies, timing and conformance")]
    Analyze {
        #[arg(help = "CSV event log (event,timestamp,resource,cost,duration)")]
        file: PathBuf,

        #[arg(long, help = "Sort records by timestamp before analysis")]
        sort: bool,

        #[arg(long, help = "Process to check conformance against")]
        expected_process: Option<String>,
    },

    #[command(about = "List the records of an event log")]
    Show {
        file: PathBuf,

        #[arg(
            long,
            value_name = "TEXT",
            help = "Keep records whose event, resource, cost or duration contain TEXT"
        )]
        filter: Option<String>,

        #[arg(long, help = "Sort records by timestamp")]
        sort: bool,
    },

    #[command(about = "Write the event frequency table to a CSV file")]
    Export {
        file: PathBuf,

        #[arg(long, short)]
        output: PathBuf,
    },

    #[command(about = "Print the effective configuration")]
    Config,
}
