//! Presenters
//!
//! Pure derivations from domain records to view models.

mod hero;
mod hosts;
mod tier;

pub use hero::{
    collective_main_tag, present_hero, CallToAction, CallToActionKind, HeroView, HostLine, HostTerms, MainTag,
    SocialKind, SocialLink,
};
pub use hosts::{present_hosts_cover, HostsCoverView, FIND_OUT_MORE_SLOT};
pub use tier::{
    classify_contribution_type, compute_goal_progress, contributors_summary, derive_description, present_tier,
    progress_fraction, resolve_currency, resolve_minimum_amount, resolve_raised_amount, ContributionType, GoalView,
    TierKind, TierView,
};
