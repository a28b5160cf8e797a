//! Domain Models
//!
//! Read-only records as delivered by the upstream API (camelCase JSON).
//! Amounts are integer minor units (cents).

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like a missing field
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// How a tier is priced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AmountType {
    /// Fixed price, `amount` governs
    #[default]
    Fixed,
    /// Contributor picks an amount at or above `minAmount`
    Flexible,
}

/// Recurrence of a contribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Month,
    Year,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Month => "month",
            Interval::Year => "year",
        }
    }
}

/// Account type of a collective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectiveType {
    #[default]
    Collective,
    Event,
    Organization,
    User,
    Fund,
    Project,
}

/// Contributor counts for a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContributorsStats {
    #[serde(deserialize_with = "null_as_default")]
    pub all: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub users: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub organizations: u32,
}

/// Aggregates computed upstream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TierStats {
    #[serde(deserialize_with = "null_as_default")]
    pub total_donated: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_recurring_donations: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub contributors: ContributorsStats,
}

/// Someone who contributed to a tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub collective_slug: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub contributor_type: CollectiveType,
}

/// A priced contribution option offered by a collective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tier {
    pub id: u64,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_long_description: bool,
    #[serde(default)]
    pub button: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount_type: AmountType,
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub min_amount: Option<i64>,
    #[serde(default)]
    pub interval: Option<Interval>,
    #[serde(default)]
    pub goal: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: TierStats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contributors: Vec<Contributor>,
}

impl Tier {
    /// Create a fixed-price tier with empty stats
    pub fn new(id: u64, slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            slug: slug.into(),
            name: name.into(),
            description: None,
            has_long_description: false,
            button: None,
            currency: None,
            amount_type: AmountType::Fixed,
            amount: None,
            min_amount: None,
            interval: None,
            goal: None,
            stats: TierStats::default(),
            contributors: Vec::new(),
        }
    }

    /// The fundraising goal, if one is set.
    ///
    /// A zero or negative goal counts as no goal.
    pub fn active_goal(&self) -> Option<i64> {
        self.goal.filter(|goal| *goal > 0)
    }
}

/// Host reference embedded in a collective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRef {
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CollectiveSettings {
    /// Terms of fiscal sponsorship URL
    pub tos: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectiveStats {
    #[serde(deserialize_with = "null_as_default")]
    pub total_amount_spent: i64,
}

/// The entity receiving contributions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collective {
    pub id: u64,
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub collective_type: CollectiveType,
    pub currency: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub twitter_handle: Option<String>,
    #[serde(default)]
    pub github_handle: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_host: bool,
    #[serde(default)]
    pub host_fee_percent: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub settings: CollectiveSettings,
    #[serde(default)]
    pub host: Option<HostRef>,
    #[serde(default)]
    pub stats: Option<CollectiveStats>,
}

impl Collective {
    pub fn new(id: u64, slug: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            id,
            slug: slug.into(),
            name: String::new(),
            collective_type: CollectiveType::Collective,
            currency: currency.into(),
            company: None,
            description: None,
            background_image: None,
            twitter_handle: None,
            github_handle: None,
            website: None,
            is_host: false,
            host_fee_percent: None,
            tags: Vec::new(),
            settings: CollectiveSettings::default(),
            host: None,
            stats: None,
        }
    }
}

/// Fiscal host displayed next to a collective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Host {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

/// Which call-to-action buttons a page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CallsToAction {
    #[serde(deserialize_with = "null_as_default")]
    pub has_contact: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_submit_expense: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_apply: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_dashboard: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_deserializes_from_api_json() {
        let json = r#"{
            "id": 7,
            "slug": "backers",
            "name": "Backer",
            "amountType": "FLEXIBLE",
            "minAmount": 500,
            "interval": "month",
            "stats": { "totalDonated": 9000, "totalRecurringDonations": 300,
                       "contributors": { "all": 3, "users": 2, "organizations": 1 } }
        }"#;
        let tier: Tier = serde_json::from_str(json).unwrap();
        assert_eq!(tier.amount_type, AmountType::Flexible);
        assert_eq!(tier.interval, Some(Interval::Month));
        assert_eq!(tier.stats.total_recurring_donations, 300);
        assert_eq!(tier.stats.contributors.organizations, 1);
        assert!(tier.currency.is_none());
        assert!(!tier.has_long_description);
    }

    #[test]
    fn test_active_goal_ignores_zero() {
        let mut tier = Tier::new(1, "t", "T");
        assert_eq!(tier.active_goal(), None);
        tier.goal = Some(0);
        assert_eq!(tier.active_goal(), None);
        tier.goal = Some(200);
        assert_eq!(tier.active_goal(), Some(200));
    }

    #[test]
    fn test_collective_defaults() {
        let json = r#"{ "id": 1, "slug": "webpack", "currency": "USD" }"#;
        let collective: Collective = serde_json::from_str(json).unwrap();
        assert_eq!(collective.collective_type, CollectiveType::Collective);
        assert!(collective.tags.is_empty());
        assert!(collective.settings.tos.is_none());
    }

    #[test]
    fn test_explicit_nulls_read_as_defaults() {
        let json = r#"{
            "id": 7, "slug": "backers", "name": "Backer",
            "hasLongDescription": null, "amountType": null, "contributors": null,
            "goal": null, "interval": null,
            "stats": { "totalDonated": null, "totalRecurringDonations": 120,
                       "contributors": { "all": null, "users": 1 } }
        }"#;
        let tier: Tier = serde_json::from_str(json).unwrap();
        assert!(!tier.has_long_description);
        assert_eq!(tier.amount_type, AmountType::Fixed);
        assert!(tier.contributors.is_empty());
        assert_eq!(tier.stats.total_donated, 0);
        assert_eq!(tier.stats.total_recurring_donations, 120);
        assert_eq!(tier.stats.contributors.all, 0);
        assert_eq!(tier.stats.contributors.users, 1);

        let json = r#"{
            "id": 1, "slug": "webpack", "currency": "USD", "name": null, "type": null,
            "isHost": null, "tags": null, "settings": null, "host": null,
            "stats": { "totalAmountSpent": null }
        }"#;
        let collective: Collective = serde_json::from_str(json).unwrap();
        assert!(collective.name.is_empty());
        assert_eq!(collective.collective_type, CollectiveType::Collective);
        assert!(!collective.is_host);
        assert!(collective.tags.is_empty());
        assert_eq!(collective.settings, CollectiveSettings::default());
        assert_eq!(collective.stats.map(|s| s.total_amount_spent), Some(0));
    }
}
