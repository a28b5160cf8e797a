//! Contribute Tier Component
//!
//! Tier card: goal progress, description with "Read more", "Starts at".

use collective_view::intl::ids;
use collective_view::models::{Collective, Tier};
use collective_view::presenter::{present_tier, GoalView, TierKind};
use collective_view::{MessageArgs, MoneyAmount};
use leptos::prelude::*;

use super::contribute::Contribute;
use super::formatted_message::splice_message;
use super::formatted_money_amount::FormattedMoneyAmount;
use super::progress_bar::ProgressBar;
use crate::context::use_page_context;

const AMOUNT_SLOT: &str = "amountWithInterval";

/// "{amount} goal" style line with the amount spliced in
fn amount_message(id: &str, money: MoneyAmount, amount_class: &'static str) -> Vec<AnyView> {
    let ctx = use_page_context();
    let parts = ctx.intl.format_parts(id, &MessageArgs::new().slot(AMOUNT_SLOT));
    splice_message(parts, move |_| {
        view! { <FormattedMoneyAmount money=money.clone() amount_class=amount_class /> }.into_any()
    })
}

#[component]
fn TierGoal(goal: GoalView) -> impl IntoView {
    let goal_line = amount_message(ids::TIER_AMOUNT_GOAL, goal.goal, "amount-goal");
    let raised_line = amount_message(ids::TIER_AMOUNT_RAISED, goal.raised, "amount-raised");

    view! {
        <div class="tier-goal">
            <p class="tier-goal-amount">{goal_line}</p>
            <p class="tier-goal-raised">
                {raised_line}
                {format!(" ({}%)", goal.percent)}
            </p>
            <ProgressBar fraction=goal.fraction />
        </div>
    }
}

#[component]
pub fn ContributeTier(collective: Collective, tier: Tier) -> impl IntoView {
    let ctx = use_page_context();
    let card = match present_tier(&tier, &collective, &ctx.intl, &ctx.routes, &ctx.config.presenter) {
        Ok(card) => card,
        Err(e) => {
            log::error!("[TIER] Cannot render tier {}: {}", tier.id, e);
            return ().into_any();
        }
    };

    let goal = match card.kind {
        TierKind::Goal(goal) => Some(view! { <TierGoal goal=goal /> }),
        TierKind::Recurring { .. } | TierKind::OneTime { .. } => None,
    };

    let read_more = card.read_more_url.map(|url| {
        let label = ctx.intl.format_message(ids::READ_MORE, &MessageArgs::new());
        view! {
            <a class="read-more" href=url>
                <span class="read-more-label">{label}</span>
            </a>
        }
    });

    let starts_at = card.starts_at.map(|money| {
        let label = ctx.intl.format_message(ids::TIER_STARTS_AT, &MessageArgs::new());
        view! {
            <div class="tier-starts-at">
                <p class="tier-starts-at-label">{label}</p>
                <p class="tier-starts-at-amount">
                    <FormattedMoneyAmount money=money amount_class="amount-min" />
                </p>
            </div>
        }
    });

    view! {
        <Contribute
            contribution_type=card.contribution_type
            title=card.title
            button_text=card.button_text
            url=card.contribute_url
            contributors=card.contributors
            summary=card.contributors_summary
        >
            <div class="tier-card-content">
                <div>
                    {goal}
                    <p class="tier-description">
                        {card.description}
                        " "
                        {read_more}
                    </p>
                </div>
                {starts_at}
            </div>
        </Contribute>
    }
    .into_any()
}
