//! Contribute Card Component
//!
//! Generic container for contribution options: type header, title,
//! custom body, call-to-action button and contributors.

use collective_view::models::Contributor;
use collective_view::presenter::ContributionType;
use collective_view::routes::names;
use collective_view::{MessageArgs, RouteParams};
use leptos::prelude::*;

use crate::context::use_page_context;

/// Small avatar linking to the contributor's profile
#[component]
fn ContributorAvatar(contributor: Contributor) -> impl IntoView {
    let ctx = use_page_context();
    let profile_url = contributor.collective_slug.as_ref().and_then(|slug| {
        ctx.routes
            .resolve(names::COLLECTIVE, &RouteParams::new().with("slug", slug))
            .ok()
    });
    let initial = contributor.name.chars().next().unwrap_or('?').to_uppercase().to_string();
    let avatar = match contributor.image {
        Some(src) => view! { <img class="avatar" src=src alt=contributor.name.clone() /> }.into_any(),
        None => view! { <span class="avatar avatar-initial">{initial}</span> }.into_any(),
    };

    view! {
        <a class="contributor" href=profile_url title=contributor.name>
            {avatar}
        </a>
    }
}

#[component]
pub fn Contribute(
    contribution_type: ContributionType,
    #[prop(into)] title: String,
    #[prop(into)] button_text: String,
    #[prop(into)] url: String,
    contributors: Vec<Contributor>,
    summary: Option<String>,
    children: Children,
) -> impl IntoView {
    let ctx = use_page_context();
    let type_label = ctx.intl.format_message(contribution_type.label_id(), &MessageArgs::new());

    let avatars = (!contributors.is_empty()).then(|| {
        view! {
            <div class="contribute-card-contributors">
                {contributors
                    .into_iter()
                    .map(|contributor| view! { <ContributorAvatar contributor=contributor /> })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <div class=format!("contribute-card {}", contribution_type.css_class())>
            <div class="contribute-card-header">
                <span class="contribute-card-type">{type_label}</span>
            </div>
            <div class="contribute-card-body">
                <h3 class="contribute-card-title">{title}</h3>
                <div class="contribute-card-content">{children()}</div>
            </div>
            <div class="contribute-card-footer">
                <a class="contribute-card-button" href=url>{button_text}</a>
                {avatars}
                {summary.map(|summary| view! { <p class="contribute-card-summary">{summary}</p> })}
            </div>
        </div>
    }
}
