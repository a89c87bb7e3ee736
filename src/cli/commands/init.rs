use crate::cli::parser::{Cli, Commands};
use crate::config::RuleConfig;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: write the default rule file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = RuleConfig::resolve_path(cli.config.as_deref());

        info(format!("Initializing rAttendance rules at {}", path.display()));
        RuleConfig::init_default(&path, *force)?;

        success(format!("Rule file written: {}", path.display()));
        info("Edit the users section before processing a swipe log.");
    }
    Ok(())
}
