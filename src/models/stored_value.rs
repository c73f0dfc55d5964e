use super::Millis;
use super::daily_record::DailyRecord;
use serde::Deserialize;
use serde_json::Value;

/// Shape of a value found under a date key.
///
/// Older releases stored only the arrival instant as a bare number;
/// current releases store the full record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StoredValue {
    Record(DailyRecord),
    Legacy(Millis),
}

impl StoredValue {
    /// `None` when the value matches neither shape.
    pub fn decode(value: &Value) -> Option<Self> {
        StoredValue::deserialize(value).ok()
    }

    pub fn is_legacy(&self) -> bool {
        matches!(self, StoredValue::Legacy(_))
    }
}
