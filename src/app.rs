//! Collective Page App
//!
//! Mounts the page described by the server-provided page data.

use collective_view::intl::ids;
use collective_view::models::{CallsToAction, Collective, Host, Tier};
use collective_view::{Intl, MessageArgs};
use leptos::prelude::*;

use crate::components::{ContributeTier, Hero, HostsCover};
use crate::context::PageContext;
use crate::page_data::{load_page_data, Page};

/// Collective profile: hero banner followed by tier cards
#[component]
fn CollectivePage(
    collective: Collective,
    host: Option<Host>,
    tiers: Vec<Tier>,
    is_admin: bool,
    calls_to_action: CallsToAction,
) -> impl IntoView {
    let cards = tiers
        .into_iter()
        .map(|tier| view! { <ContributeTier collective=collective.clone() tier=tier /> })
        .collect_view();

    view! {
        <div class="collective-page">
            <Hero
                collective=collective
                host=host
                is_admin=is_admin
                calls_to_action=calls_to_action
            />
            <section class="contribute-cards">{cards}</section>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let data = match load_page_data() {
        Ok(data) => data,
        Err(e) => {
            log::error!("[APP] {}", e);
            let message = Intl::en().format_message(ids::PAGE_LOAD_ERROR, &MessageArgs::new());
            return view! { <p class="page-load-error">{message}</p> }.into_any();
        }
    };

    log::set_max_level(data.config.log_level_filter());
    provide_context(PageContext::from_page_data(&data));

    match data.page {
        Page::Collective {
            collective,
            host,
            tiers,
            is_admin,
            calls_to_action,
        } => {
            log::info!("[APP] Mounting collective page {} with {} tiers", collective.slug, tiers.len());
            view! {
                <CollectivePage
                    collective=collective
                    host=host
                    tiers=tiers
                    is_admin=is_admin
                    calls_to_action=calls_to_action
                />
            }
            .into_any()
        }
        Page::Hosts { title } => {
            log::info!("[APP] Mounting hosts page");
            view! { <HostsCover title=title /> }.into_any()
        }
    }
}
