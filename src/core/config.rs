use crate::config::RuleConfig;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective (parsed and validated) rule file.
    pub fn print(path: &Path) -> AppResult<()> {
        let cfg = RuleConfig::load(path)?;
        println!("📄 Current rules ({}):\n", path.display());
        println!("{}", cfg.to_yaml()?);
        Ok(())
    }

    pub fn check(path: &Path) -> AppResult<RuleConfig> {
        let cfg = RuleConfig::load(path)?;

        success(format!(
            "Rule file is valid: {} shifts, {} users, burst threshold {} min",
            cfg.shifts.len(),
            cfg.users.len(),
            cfg.burst_threshold_minutes
        ));

        for shift in cfg.shifts.values() {
            info(format!(
                "{} ({}): check-in {}, check-out {}, break search {}{}",
                shift.code,
                shift.display_name,
                shift.check_in_window,
                shift.check_out_window,
                shift.break_search_window,
                if shift.crosses_midnight() {
                    ", crosses midnight"
                } else {
                    ""
                }
            ));
        }

        if cfg.users.is_empty() {
            warning("No users mapped: every swipe will be filtered out.");
        }

        Ok(cfg)
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let ed = editor
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(|| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot launch editor '{ed}': {e}")))?;

        if !status.success() {
            return Err(AppError::Config(format!("editor '{ed}' exited with {status}")));
        }

        // Re-validate so a broken edit is caught right away
        Self::check(path)?;
        Ok(())
    }
}
