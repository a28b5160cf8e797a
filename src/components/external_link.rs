//! External Link Component

use leptos::prelude::*;

/// Link opening in a new tab
#[component]
pub fn ExternalLink(
    #[prop(into)] href: String,
    #[prop(into)] title: String,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href title=title class=class target="_blank" rel="noopener noreferrer">
            {children()}
        </a>
    }
}
