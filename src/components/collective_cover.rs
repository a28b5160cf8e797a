//! Collective Cover Component
//!
//! Generic banner with a title and a rich description.

use leptos::prelude::*;

#[component]
pub fn CollectiveCover(
    #[prop(into)] title: String,
    /// Size modifier, e.g. "small"
    #[prop(into, optional)]
    class: String,
    /// Description content
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("CollectiveCover {}", class)>
            <div class="cover">
                <div class="content">
                    <h1 class="title">{title}</h1>
                    <div class="description">{children()}</div>
                </div>
            </div>
        </div>
    }
}
