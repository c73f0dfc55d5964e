use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Millis;
use crate::models::break_state::BreakPolicy;
use crate::utils::time::minutes_to_ms;

/// Tracker knobs resolved from the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerSettings {
    pub workday_ms: Millis,
    pub default_lunch_ms: Millis,
    pub deduct_breaks: bool,
    pub break_policy: BreakPolicy,
    pub key_format: String,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            workday_ms: minutes_to_ms(7 * 60),
            default_lunch_ms: minutes_to_ms(60),
            deduct_breaks: false,
            break_policy: BreakPolicy::Permissive,
            key_format: "%-m/%-d/%Y".to_string(),
        }
    }
}

impl TrackerSettings {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        cfg.validate()?;

        Ok(Self {
            workday_ms: minutes_to_ms(cfg.workday_minutes),
            default_lunch_ms: minutes_to_ms(cfg.default_lunch_minutes),
            deduct_breaks: cfg.deduct_breaks,
            break_policy: cfg.break_policy,
            key_format: cfg.date_key_format.clone(),
        })
    }
}
