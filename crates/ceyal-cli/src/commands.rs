use super::args::{Cli, Commands};
use super::handlers::{self, HandlerContext};
use crate::config::Config;
use crate::logging;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config = Config::resolve(cli.config.as_deref())?;
    tracing::debug!(?config, "configuration loaded");

    let ctx = HandlerContext {
        config,
        format: cli.format,
    };

    match cli.command {
        Commands::Analyze {
            file,
            sort,
            expected_process,
        } => handlers::analyze::handle(&ctx, &file, sort, expected_process),

        Commands::Show { file, filter, sort } => {
            handlers::show::handle(&ctx, &file, filter.as_deref(), sort)
        }

        Commands::Export { file, output } => handlers::export::handle(&ctx, &file, &output),

        Commands::Config => handlers::config::handle(&ctx),
    }
}
