//! UI Components
//!
//! Leptos components for the collective and hosts pages.

mod calls_to_action;
mod collective_cover;
mod contribute;
mod contribute_tier;
mod defined_term;
mod external_link;
mod formatted_message;
mod formatted_money_amount;
mod hero;
mod hosts_cover;
mod progress_bar;

pub use contribute_tier::ContributeTier;
pub use hero::Hero;
pub use hosts_cover::HostsCover;
