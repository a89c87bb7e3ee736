use crate::cli::parser::{Cli, Commands};
use crate::convert::convert_csv_to_xlsx;
use crate::errors::{AppError, AppResult};
use crate::export::resolve_output;
use crate::ui::messages::{info, success};
use crate::utils::path::{expand_tilde, has_extension};

pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Convert {
        input,
        output,
        force,
    } = &cli.command
    {
        let input = expand_tilde(input);
        let output = expand_tilde(output);

        // Checked before resolving so a wrong extension is never renamed
        if !has_extension(&output, "xlsx") {
            return Err(AppError::Convert(format!(
                "output file must be a .xlsx file: {}",
                output.display()
            )));
        }

        let target = resolve_output(&output, *force)?;

        info(format!(
            "Converting {} → {}",
            input.display(),
            target.display()
        ));

        let rows = convert_csv_to_xlsx(&input, &target)?;
        success(format!("{rows} rows converted to {}", target.display()));
    }
    Ok(())
}
