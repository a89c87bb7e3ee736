use crate::cli::parser::{Cli, Commands};
use crate::config::RuleConfig;
use crate::core::process::{ProcessLogic, ProcessRequest};
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Process {
        input,
        output,
        format,
        force,
        print,
    } = &cli.command
    {
        let cfg = RuleConfig::load(&RuleConfig::resolve_path(cli.config.as_deref()))?;

        let input = expand_tilde(input);
        let output = expand_tilde(output);

        ProcessLogic::run(
            &cfg,
            &ProcessRequest {
                input: &input,
                output: &output,
                format: *format,
                force: *force,
                print: *print,
            },
        )?;
    }
    Ok(())
}
