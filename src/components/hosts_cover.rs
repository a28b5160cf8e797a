//! Hosts Cover Component
//!
//! Banner on the hosts page explaining what a fiscal host is.

use collective_view::presenter::{present_hosts_cover, FIND_OUT_MORE_SLOT};
use leptos::prelude::*;

use super::collective_cover::CollectiveCover;
use super::formatted_message::splice_message;
use crate::context::use_page_context;

#[component]
pub fn HostsCover(title: Option<String>) -> impl IntoView {
    let ctx = use_page_context();
    let cover = present_hosts_cover(title.as_deref(), &ctx.intl, &ctx.config.links);

    let label = cover.find_out_more_label;
    let url = cover.find_out_more_url;
    let description = splice_message(cover.description, move |slot| {
        if slot == FIND_OUT_MORE_SLOT {
            view! {
                <span class="cover-small-cta">
                    <a href=url.clone()>{label.clone()}</a>
                </span>
            }
            .into_any()
        } else {
            log::warn!("[HOSTS] Unknown slot {}", slot);
            ().into_any()
        }
    });

    view! {
        <CollectiveCover title=cover.title class="small">
            {description}
        </CollectiveCover>
    }
}
