use crate::errors::{AppError, AppResult};
use crate::models::TimeWindow;
use crate::utils::path::expand_tilde;
use crate::utils::time::hms;
use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

mod template;

pub use template::DEFAULT_RULES;

/// Complete rule file: burst threshold, accepted users, shift catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub burst_threshold_minutes: u32,
    #[serde(default = "default_status_filter")]
    pub status_filter: String,
    #[serde(default)]
    pub users: BTreeMap<String, UserMapping>,
    pub shifts: BTreeMap<String, ShiftConfig>,
}

/// Raw badge name → name/ID printed in the report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserMapping {
    pub output_name: String,
    pub output_id: String,
}

/// How to choose among several qualifying break gaps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum GapPolicy {
    /// Earliest qualifying gap.
    #[default]
    First,
    /// Gap whose break-out is closest to `break_out_checkpoint`.
    NearestCheckpoint,
    /// Gap whose break-in is closest to `break_end + break_grace_period`.
    NearestBreakEnd,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftConfig {
    /// Filled from the map key after loading.
    #[serde(skip)]
    pub code: String,
    pub display_name: String,
    pub check_in_window: TimeWindow,
    pub check_out_window: TimeWindow,
    pub break_search_window: TimeWindow,
    #[serde(with = "hms")]
    pub break_midpoint: NaiveTime,
    pub minimum_break_gap_minutes: u32,
    #[serde(with = "hms")]
    pub shift_start: NaiveTime,
    pub grace_period_seconds: u32,
    #[serde(with = "hms")]
    pub break_end: NaiveTime,
    pub break_grace_period_seconds: u32,
    #[serde(default)]
    pub gap_policy: GapPolicy,
    #[serde(
        default,
        with = "hms::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub break_out_checkpoint: Option<NaiveTime>,
}

fn default_status_filter() -> String {
    "Success".to_string()
}

impl ShiftConfig {
    /// The check-out window closes "earlier" than the check-in window opens,
    /// so the activity window ends on the day after the check-in.
    pub fn crosses_midnight(&self) -> bool {
        self.check_out_window.end < self.check_in_window.start
    }

    /// The break itself happens after midnight relative to the shift start.
    pub fn break_on_next_day(&self) -> bool {
        self.crosses_midnight() && self.break_end < self.check_in_window.start
    }

    pub fn minimum_break_gap(&self) -> TimeDelta {
        TimeDelta::minutes(self.minimum_break_gap_minutes as i64)
    }

    pub fn grace_period(&self) -> TimeDelta {
        TimeDelta::seconds(self.grace_period_seconds as i64)
    }

    pub fn break_grace_period(&self) -> TimeDelta {
        TimeDelta::seconds(self.break_grace_period_seconds as i64)
    }

    /// Last time of day at which a break-in is still on time.
    pub fn break_in_cutoff(&self) -> NaiveTime {
        self.break_end.overflowing_add_signed(self.break_grace_period()).0
    }

    fn validate(&self) -> AppResult<()> {
        let code = &self.code;

        if self.display_name.trim().is_empty() {
            return Err(AppError::Config(format!(
                "shift '{code}': display_name must not be empty"
            )));
        }

        if self.minimum_break_gap_minutes == 0 {
            return Err(AppError::Config(format!(
                "shift '{code}': minimum_break_gap_minutes must be greater than zero"
            )));
        }

        if !self.break_search_window.contains(self.break_midpoint) {
            return Err(AppError::Config(format!(
                "shift '{code}': break_midpoint {} is outside break_search_window {}",
                self.break_midpoint.format("%H:%M:%S"),
                self.break_search_window
            )));
        }

        match (self.gap_policy, self.break_out_checkpoint) {
            (GapPolicy::NearestCheckpoint, None) => {
                return Err(AppError::Config(format!(
                    "shift '{code}': gap_policy nearest_checkpoint requires break_out_checkpoint"
                )));
            }
            (_, Some(cp)) if !self.break_search_window.contains(cp) => {
                return Err(AppError::Config(format!(
                    "shift '{code}': break_out_checkpoint {} is outside break_search_window {}",
                    cp.format("%H:%M:%S"),
                    self.break_search_window
                )));
            }
            _ => {}
        }

        Ok(())
    }
}

impl RuleConfig {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rattendance")
        }
    }

    /// Return the full path of the default rule file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rule.yaml")
    }

    /// Resolve `--config` (with `~/` expansion) or fall back to the default location.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load and validate a rule file. Any missing field or inconsistent
    /// window is reported here, before a single swipe is processed.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::ConfigNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        let mut cfg: RuleConfig = serde_yaml::from_str(content)?;

        for (code, shift) in cfg.shifts.iter_mut() {
            shift.code = code.clone();
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.shifts.is_empty() {
            return Err(AppError::Config("at least one shift must be defined".into()));
        }

        if self.status_filter.trim().is_empty() {
            return Err(AppError::Config("status_filter must not be empty".into()));
        }

        for (username, mapping) in &self.users {
            if mapping.output_id.trim().is_empty() {
                return Err(AppError::Config(format!(
                    "user '{username}': output_id must not be empty"
                )));
            }
        }

        for (code, shift) in &self.shifts {
            if shift.code != *code {
                return Err(AppError::Config(format!(
                    "shift '{code}' is not bound to its code"
                )));
            }
            shift.validate()?;
        }

        Ok(())
    }

    pub fn burst_threshold(&self) -> TimeDelta {
        TimeDelta::minutes(self.burst_threshold_minutes as i64)
    }

    pub fn shift(&self, code: &str) -> Option<&ShiftConfig> {
        self.shifts.get(code)
    }

    /// First shift (in code order) whose check-in window contains `t`.
    pub fn matching_shift(&self, t: NaiveTime) -> Option<&ShiftConfig> {
        self.shifts.values().find(|s| s.check_in_window.contains(t))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the bundled default rule file.
    pub fn init_default(path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        fs::write(path, DEFAULT_RULES)?;
        Ok(())
    }
}
