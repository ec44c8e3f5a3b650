use super::HandlerContext;
use crate::args::OutputFormat;
use anyhow::Result;

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ctx.config)?),
        OutputFormat::Plain | OutputFormat::Csv => print!("{}", toml::to_string_pretty(&ctx.config)?),
    }
    Ok(())
}
