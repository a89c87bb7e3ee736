use crate::cli::parser::{Cli, Commands};
use crate::config::RuleConfig;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = &cli.command
    {
        let path = RuleConfig::resolve_path(cli.config.as_deref());

        if !*print_config && !*check && !*edit_config {
            warning("Nothing to do: use --print, --check or --edit.");
            return Ok(());
        }

        if *edit_config {
            ConfigLogic::edit(&path, editor)?;
        }

        if *check {
            ConfigLogic::check(&path)?;
        }

        if *print_config {
            ConfigLogic::print(&path)?;
        }
    }

    Ok(())
}
