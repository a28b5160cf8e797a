//! Tier Presenter
//!
//! Derives a rendering-ready [`TierView`] from a tier and its collective.
//! Pure: every formatting collaborator is passed in.

use serde::Serialize;

use crate::config::PresenterOptions;
use crate::error::ViewResult;
use crate::intl::{ids, Intl, MessageArgs, MoneyAmount};
use crate::models::{AmountType, Collective, Contributor, ContributorsStats, Interval, Tier};
use crate::routes::{names, RouteParams, RouteTable};
use crate::truncate::truncate;

/// Header category of a contribute card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContributionType {
    FinancialGoal,
    FinancialRecurring,
    FinancialOneTime,
}

impl ContributionType {
    /// Message id of the card header label
    pub fn label_id(&self) -> &'static str {
        match self {
            ContributionType::FinancialGoal => ids::TYPE_GOAL,
            ContributionType::FinancialRecurring => ids::TYPE_RECURRING,
            ContributionType::FinancialOneTime => ids::TYPE_ONE_TIME,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ContributionType::FinancialGoal => "financial-goal",
            ContributionType::FinancialRecurring => "financial-recurring",
            ContributionType::FinancialOneTime => "financial-one-time",
        }
    }
}

/// Goal takes priority over recurrence
pub fn classify_contribution_type(tier: &Tier) -> ContributionType {
    if tier.active_goal().is_some() {
        ContributionType::FinancialGoal
    } else if tier.interval.is_some() {
        ContributionType::FinancialRecurring
    } else {
        ContributionType::FinancialOneTime
    }
}

pub fn resolve_currency<'a>(tier: &'a Tier, collective: &'a Collective) -> &'a str {
    tier.currency.as_deref().unwrap_or(&collective.currency)
}

/// `minAmount` for flexible tiers, the fixed `amount` otherwise
pub fn resolve_minimum_amount(tier: &Tier) -> Option<i64> {
    match tier.amount_type {
        AmountType::Flexible => tier.min_amount,
        AmountType::Fixed => tier.amount,
    }
}

/// Recurring total for tiers with an interval, all-time total otherwise
pub fn resolve_raised_amount(tier: &Tier) -> i64 {
    if tier.interval.is_some() {
        tier.stats.total_recurring_donations
    } else {
        tier.stats.total_donated
    }
}

/// Percent of `goal` reached, half rounds up. `None` when there is no positive goal.
pub fn compute_goal_progress(raised: i64, goal: i64) -> Option<u32> {
    if goal <= 0 {
        log::debug!("no goal progress for goal {}", goal);
        return None;
    }
    let percent = (raised.max(0) as f64 / goal as f64 * 100.0 + 0.5).floor();
    Some(percent.min(u32::MAX as f64) as u32)
}

/// Progress bar fill in `[0, 1]`
pub fn progress_fraction(raised: i64, goal: i64) -> Option<f64> {
    if goal <= 0 {
        return None;
    }
    Some((raised as f64 / goal as f64).clamp(0.0, 1.0))
}

/// Truncated description, or a sentence built from name, minimum amount and interval
pub fn derive_description(
    tier: &Tier,
    currency: &str,
    intl: &Intl,
    options: &PresenterOptions,
) -> String {
    if let Some(description) = tier.description.as_deref().filter(|d| !d.is_empty()) {
        let max_len = if tier.has_long_description {
            options.short_description_length
        } else {
            options.description_length
        };
        return truncate(description, max_len, &options.omission);
    }

    let name = match tier.name.trim() {
        "" => tier.slug.as_str(),
        name => name,
    };
    let min_amount = resolve_minimum_amount(tier).filter(|amount| *amount > 0);
    let args = MessageArgs::new()
        .with("tierName", name)
        .with("tierKind", name.to_lowercase())
        .with("minAmount", min_amount.unwrap_or(0))
        .with_opt(
            "minAmountWithCurrency",
            min_amount.map(|amount| intl.format_currency(amount, currency)),
        )
        .with_opt("interval", tier.interval.map(|i| i.as_str()));
    intl.format_message(ids::TIER_DEFAULT_DESCRIPTION, &args)
}

/// Goal block of a tier card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalView {
    pub goal: MoneyAmount,
    pub raised: MoneyAmount,
    pub percent: u32,
    pub fraction: f64,
}

/// What a tier card shows above the description
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TierKind {
    Goal(GoalView),
    Recurring { interval: Interval, raised: MoneyAmount },
    OneTime { raised: MoneyAmount },
}

impl TierKind {
    pub fn contribution_type(&self) -> ContributionType {
        match self {
            TierKind::Goal(_) => ContributionType::FinancialGoal,
            TierKind::Recurring { .. } => ContributionType::FinancialRecurring,
            TierKind::OneTime { .. } => ContributionType::FinancialOneTime,
        }
    }
}

/// Everything a tier card renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierView {
    pub id: u64,
    pub title: String,
    pub kind: TierKind,
    pub contribution_type: ContributionType,
    pub currency: String,
    pub description: String,
    pub read_more_url: Option<String>,
    pub starts_at: Option<MoneyAmount>,
    pub button_text: String,
    pub contribute_url: String,
    pub contributors: Vec<Contributor>,
    pub contributors_summary: Option<String>,
}

fn tier_route_params(tier: &Tier, collective: &Collective) -> RouteParams {
    RouteParams::new()
        .with("collectiveSlug", &collective.slug)
        .with("verb", "contribute")
        .with("tierSlug", &tier.slug)
        .with("tierId", tier.id)
}

fn tier_kind(tier: &Tier, currency: &str) -> TierKind {
    let raised = resolve_raised_amount(tier);
    let raised_money = MoneyAmount::new(raised, currency, tier.interval);

    if let Some(goal) = tier.active_goal() {
        if let (Some(percent), Some(fraction)) =
            (compute_goal_progress(raised, goal), progress_fraction(raised, goal))
        {
            return TierKind::Goal(GoalView {
                goal: MoneyAmount::new(goal, currency, tier.interval),
                raised: raised_money,
                percent,
                fraction,
            });
        }
    }

    match tier.interval {
        Some(interval) => TierKind::Recurring {
            interval,
            raised: raised_money,
        },
        None => TierKind::OneTime { raised: raised_money },
    }
}

/// "2 individuals and 1 organization have contributed", `None` without contributors
pub fn contributors_summary(stats: &ContributorsStats, intl: &Intl) -> Option<String> {
    let total = stats.users + stats.organizations;
    if total == 0 {
        return None;
    }
    let both = stats.users > 0 && stats.organizations > 0;
    let args = MessageArgs::new()
        .with("userCount", stats.users)
        .with("orgCount", stats.organizations)
        .with("totalCount", total)
        .with("both", if both { "true" } else { "false" });
    Some(intl.format_message(ids::CONTRIBUTORS_SUMMARY, &args))
}

/// Derive the full card view for `tier`
pub fn present_tier(
    tier: &Tier,
    collective: &Collective,
    intl: &Intl,
    routes: &RouteTable,
    options: &PresenterOptions,
) -> ViewResult<TierView> {
    let currency = resolve_currency(tier, collective);
    let params = tier_route_params(tier, collective);
    let kind = tier_kind(tier, currency);

    let read_more_url = if tier.has_long_description {
        Some(routes.resolve(names::TIER, &params)?)
    } else {
        None
    };

    let starts_at = resolve_minimum_amount(tier)
        .filter(|amount| *amount > 0)
        .map(|amount| MoneyAmount::new(amount, currency, tier.interval));

    let button_text = match tier.button.as_deref() {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => intl.format_message(ids::CONTRIBUTE_BUTTON, &MessageArgs::new()),
    };

    Ok(TierView {
        id: tier.id,
        title: tier.name.clone(),
        contribution_type: kind.contribution_type(),
        kind,
        currency: currency.to_string(),
        description: derive_description(tier, currency, intl, options),
        read_more_url,
        starts_at,
        button_text,
        contribute_url: routes.resolve(names::ORDER_TIER, &params)?,
        contributors: tier.contributors.iter().take(options.max_contributors).cloned().collect(),
        contributors_summary: contributors_summary(&tier.stats.contributors, intl),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TierStats;
    use proptest::prelude::*;

    fn collective() -> Collective {
        Collective::new(1, "webpack", "USD")
    }

    fn tier() -> Tier {
        Tier::new(42, "backers", "Backer")
    }

    #[test]
    fn test_goal_wins_over_interval() {
        let mut t = tier();
        t.goal = Some(100_000);
        t.interval = Some(Interval::Month);
        assert_eq!(classify_contribution_type(&t), ContributionType::FinancialGoal);
    }

    #[test]
    fn test_zero_goal_is_not_a_goal() {
        let mut t = tier();
        t.goal = Some(0);
        t.interval = Some(Interval::Year);
        assert_eq!(classify_contribution_type(&t), ContributionType::FinancialRecurring);
    }

    #[test]
    fn test_resolve_currency() {
        let mut t = tier();
        t.currency = Some("EUR".to_string());
        assert_eq!(resolve_currency(&t, &collective()), "EUR");
        t.currency = None;
        assert_eq!(resolve_currency(&t, &collective()), "USD");
    }

    #[test]
    fn test_resolve_minimum_amount() {
        let mut t = tier();
        t.amount_type = AmountType::Flexible;
        t.min_amount = Some(500);
        t.amount = Some(1000);
        assert_eq!(resolve_minimum_amount(&t), Some(500));

        t.amount_type = AmountType::Fixed;
        t.min_amount = Some(9999);
        assert_eq!(resolve_minimum_amount(&t), Some(1000));

        t.amount_type = AmountType::Flexible;
        t.min_amount = None;
        assert_eq!(resolve_minimum_amount(&t), None);
    }

    #[test]
    fn test_resolve_raised_amount() {
        let mut t = tier();
        t.stats = TierStats {
            total_donated: 9000,
            total_recurring_donations: 300,
            ..Default::default()
        };
        t.interval = Some(Interval::Month);
        assert_eq!(resolve_raised_amount(&t), 300);
        t.interval = None;
        assert_eq!(resolve_raised_amount(&t), 9000);
        // Selection ignores the goal
        t.goal = Some(50_000);
        assert_eq!(resolve_raised_amount(&t), 9000);
    }

    #[test]
    fn test_goal_progress() {
        assert_eq!(compute_goal_progress(50, 200), Some(25));
        assert_eq!(compute_goal_progress(50, 0), None);
        assert_eq!(compute_goal_progress(50, -10), None);
        assert_eq!(compute_goal_progress(1, 200), Some(1)); // 0.5 rounds up
        assert_eq!(compute_goal_progress(300, 200), Some(150));
        assert_eq!(progress_fraction(300, 200), Some(1.0));
        assert_eq!(progress_fraction(50, 200), Some(0.25));
        assert_eq!(progress_fraction(50, 0), None);
    }

    #[test]
    fn test_long_description_is_cut_to_short_length() {
        let intl = Intl::en();
        let options = PresenterOptions::default();
        let mut t = tier();
        t.description = Some("x".repeat(300));
        t.has_long_description = true;
        let description = derive_description(&t, "USD", &intl, &options);
        assert_eq!(description.chars().count(), 60);
        assert!(description.ends_with("..."));

        t.has_long_description = false;
        let description = derive_description(&t, "USD", &intl, &options);
        assert_eq!(description.chars().count(), 256);
    }

    #[test]
    fn test_fallback_description() {
        let intl = Intl::en();
        let options = PresenterOptions::default();
        let mut t = Tier::new(3, "gold", "Gold Sponsor");
        t.amount = Some(10_000);
        t.interval = Some(Interval::Month);
        assert_eq!(
            derive_description(&t, "USD", &intl, &options),
            "Join us as Gold Sponsor for $100 per month and help us sustain our activities!"
        );

        let mut backer = tier();
        backer.amount_type = AmountType::Flexible;
        assert_eq!(
            derive_description(&backer, "EUR", &intl, &options),
            "Become a Backer and help us sustain our activities!"
        );

        backer.min_amount = Some(550);
        assert_eq!(
            derive_description(&backer, "EUR", &intl, &options),
            "Become a Backer for €5.50 and help us sustain our activities!"
        );
    }

    #[test]
    fn test_fallback_description_with_blank_name_uses_slug() {
        let intl = Intl::en();
        let options = PresenterOptions::default();
        let mut t = Tier::new(4, "supporters", "   ");
        t.amount = Some(500);
        assert_eq!(
            derive_description(&t, "USD", &intl, &options),
            "Join us as supporters for $5 and help us sustain our activities!"
        );
    }

    #[test]
    fn test_present_goal_tier() {
        let intl = Intl::en();
        let routes = RouteTable::default();
        let mut t = tier();
        t.goal = Some(200);
        t.amount = Some(1000);
        t.currency = Some("EUR".to_string());
        t.has_long_description = true;
        t.description = Some("Short".to_string());
        t.stats.total_donated = 50;

        let view = present_tier(&t, &collective(), &intl, &routes, &PresenterOptions::default()).unwrap();
        assert_eq!(view.contribution_type, ContributionType::FinancialGoal);
        match &view.kind {
            TierKind::Goal(goal) => {
                assert_eq!(goal.percent, 25);
                assert_eq!(goal.goal, MoneyAmount::new(200, "EUR", None));
                assert_eq!(goal.raised.amount, 50);
            }
            other => panic!("expected goal, got {:?}", other),
        }
        assert_eq!(view.read_more_url.as_deref(), Some("/webpack/contribute/backers-42"));
        assert_eq!(view.contribute_url, "/webpack/contribute/backers-42/checkout");
        assert_eq!(view.starts_at, Some(MoneyAmount::new(1000, "EUR", None)));
        assert_eq!(view.button_text, "Contribute");
    }

    #[test]
    fn test_present_recurring_tier_without_minimum() {
        let intl = Intl::en();
        let routes = RouteTable::default();
        let mut t = tier();
        t.amount_type = AmountType::Flexible;
        t.min_amount = Some(0);
        t.interval = Some(Interval::Year);
        t.button = Some("Donate yearly".to_string());
        t.stats.total_recurring_donations = 300;

        let view = present_tier(&t, &collective(), &intl, &routes, &PresenterOptions::default()).unwrap();
        assert_eq!(
            view.kind,
            TierKind::Recurring {
                interval: Interval::Year,
                raised: MoneyAmount::new(300, "USD", Some(Interval::Year)),
            }
        );
        assert_eq!(view.starts_at, None);
        assert_eq!(view.read_more_url, None);
        assert_eq!(view.button_text, "Donate yearly");
    }

    #[test]
    fn test_contributors_are_capped() {
        let intl = Intl::en();
        let routes = RouteTable::default();
        let mut t = tier();
        t.contributors = (0..10)
            .map(|id| Contributor {
                id,
                name: format!("User {}", id),
                image: None,
                collective_slug: None,
                contributor_type: Default::default(),
            })
            .collect();
        let options = PresenterOptions {
            max_contributors: 3,
            ..Default::default()
        };
        let view = present_tier(&t, &collective(), &intl, &routes, &options).unwrap();
        assert_eq!(view.contributors.len(), 3);
    }

    #[test]
    fn test_contributors_summary() {
        let intl = Intl::en();
        let stats = |users, organizations| ContributorsStats {
            all: users + organizations,
            users,
            organizations,
        };
        assert_eq!(contributors_summary(&stats(0, 0), &intl), None);
        assert_eq!(
            contributors_summary(&stats(1, 0), &intl).as_deref(),
            Some("1 individual has contributed")
        );
        assert_eq!(
            contributors_summary(&stats(2, 1), &intl).as_deref(),
            Some("2 individuals and 1 organization have contributed")
        );
        assert_eq!(
            contributors_summary(&stats(0, 3), &intl).as_deref(),
            Some("3 organizations have contributed")
        );
    }

    fn arb_interval() -> impl Strategy<Value = Option<Interval>> {
        prop_oneof![Just(None), Just(Some(Interval::Month)), Just(Some(Interval::Year))]
    }

    proptest! {
        /// Any positive goal classifies as a goal, interval or not.
        #[test]
        fn goal_always_classifies_as_goal(goal in 1i64..10_000_000, interval in arb_interval()) {
            let mut t = tier();
            t.goal = Some(goal);
            t.interval = interval;
            prop_assert_eq!(classify_contribution_type(&t), ContributionType::FinancialGoal);
        }

        /// Without a goal, the interval alone decides.
        #[test]
        fn interval_decides_without_goal(interval in arb_interval()) {
            let mut t = tier();
            t.interval = interval;
            let expected = if interval.is_some() {
                ContributionType::FinancialRecurring
            } else {
                ContributionType::FinancialOneTime
            };
            prop_assert_eq!(classify_contribution_type(&t), expected);
        }

        /// The view kind always agrees with the classifier.
        #[test]
        fn view_kind_matches_classification(
            goal in prop::option::of(0i64..1_000_000),
            interval in arb_interval(),
            donated in 0i64..1_000_000,
        ) {
            let mut t = tier();
            t.goal = goal;
            t.interval = interval;
            t.stats.total_donated = donated;
            t.stats.total_recurring_donations = donated / 2;
            let view = present_tier(
                &t, &collective(), &Intl::en(), &RouteTable::default(), &PresenterOptions::default(),
            ).unwrap();
            prop_assert_eq!(view.contribution_type, classify_contribution_type(&t));
        }

        /// Progress is finite and defined exactly when the goal is positive.
        #[test]
        fn progress_defined_iff_goal_positive(raised in 0i64..1_000_000_000, goal in -10i64..1_000_000) {
            let progress = compute_goal_progress(raised, goal);
            prop_assert_eq!(progress.is_some(), goal > 0);
            if let Some(fraction) = progress_fraction(raised, goal) {
                prop_assert!((0.0..=1.0).contains(&fraction));
            }
        }

        /// Descriptions never exceed the configured length.
        #[test]
        fn description_respects_limit(text in ".{1,400}", long in any::<bool>()) {
            let options = PresenterOptions::default();
            let mut t = tier();
            t.description = Some(text);
            t.has_long_description = long;
            let limit = if long { options.short_description_length } else { options.description_length };
            let description = derive_description(&t, "USD", &Intl::en(), &options);
            prop_assert!(description.chars().count() <= limit);
        }
    }
}
