//! Selectable options and the closed set of transition ids

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendering hint for an option button. Carries no transition semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OptionVariant {
    #[default]
    Secondary,
    Outline,
    Plain,
}

/// A selectable branch offered alongside a bot message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatOption {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub variant: OptionVariant,
}

impl ChatOption {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        icon: impl Into<String>,
        variant: OptionVariant,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
            variant,
        }
    }
}

// ============================================================================
// Option ids
// ============================================================================

/// Top-level report categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Sales,
    Users,
    Db,
}

/// Reporting periods offered under the sales category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Monthly,
    Quarterly,
    Annual,
}

/// User analytics views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserMetric {
    Active,
    New,
    Behavior,
}

/// Database health views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DbMetric {
    Status,
    Performance,
    Backup,
}

/// Which report is currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "view", rename_all = "snake_case")]
pub enum Report {
    Sales(Period),
    Users(UserMetric),
    Db(DbMetric),
}

/// Parsed option id.
///
/// Every string maps to exactly one variant: the fifteen known ids are
/// matched exactly (case-sensitive), anything else lands in `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionId {
    Category(Category),
    Period(Period),
    UserMetric(UserMetric),
    DbMetric(DbMetric),
    Download,
    Back,
    Restart,
    Unknown(String),
}

impl OptionId {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "sales" => OptionId::Category(Category::Sales),
            "users" => OptionId::Category(Category::Users),
            "db" => OptionId::Category(Category::Db),
            "monthly" => OptionId::Period(Period::Monthly),
            "quarterly" => OptionId::Period(Period::Quarterly),
            "annual" => OptionId::Period(Period::Annual),
            "active" => OptionId::UserMetric(UserMetric::Active),
            "new" => OptionId::UserMetric(UserMetric::New),
            "behavior" => OptionId::UserMetric(UserMetric::Behavior),
            "status" => OptionId::DbMetric(DbMetric::Status),
            "performance" => OptionId::DbMetric(DbMetric::Performance),
            "backup" => OptionId::DbMetric(DbMetric::Backup),
            "download" => OptionId::Download,
            "back" => OptionId::Back,
            "restart" => OptionId::Restart,
            other => OptionId::Unknown(other.to_string()),
        }
    }

    /// The wire key for this id
    pub fn as_str(&self) -> &str {
        match self {
            OptionId::Category(Category::Sales) => "sales",
            OptionId::Category(Category::Users) => "users",
            OptionId::Category(Category::Db) => "db",
            OptionId::Period(Period::Monthly) => "monthly",
            OptionId::Period(Period::Quarterly) => "quarterly",
            OptionId::Period(Period::Annual) => "annual",
            OptionId::UserMetric(UserMetric::Active) => "active",
            OptionId::UserMetric(UserMetric::New) => "new",
            OptionId::UserMetric(UserMetric::Behavior) => "behavior",
            OptionId::DbMetric(DbMetric::Status) => "status",
            OptionId::DbMetric(DbMetric::Performance) => "performance",
            OptionId::DbMetric(DbMetric::Backup) => "backup",
            OptionId::Download => "download",
            OptionId::Back => "back",
            OptionId::Restart => "restart",
            OptionId::Unknown(raw) => raw,
        }
    }

    /// `back` and `restart` replace the transcript instead of appending
    pub fn is_reset(&self) -> bool {
        matches!(self, OptionId::Back | OptionId::Restart)
    }
}

impl From<&str> for OptionId {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All fifteen ids the dispatch table recognizes
pub const KNOWN_IDS: [&str; 15] = [
    "sales",
    "users",
    "db",
    "monthly",
    "quarterly",
    "annual",
    "active",
    "new",
    "behavior",
    "status",
    "performance",
    "backup",
    "download",
    "back",
    "restart",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ids_round_trip_through_parse() {
        for raw in KNOWN_IDS {
            let id = OptionId::parse(raw);
            assert!(!matches!(id, OptionId::Unknown(_)), "{raw} parsed as unknown");
            assert_eq!(id.as_str(), raw);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(
            OptionId::parse("Sales"),
            OptionId::Unknown("Sales".to_string())
        );
        assert_eq!(
            OptionId::parse(" back"),
            OptionId::Unknown(" back".to_string())
        );
    }

    #[test]
    fn test_only_back_and_restart_reset() {
        let resets: Vec<_> = KNOWN_IDS
            .iter()
            .filter(|raw| OptionId::parse(raw).is_reset())
            .collect();
        assert_eq!(resets, vec![&"back", &"restart"]);
    }
}
