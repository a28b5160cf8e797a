//! Collective Calls To Action Component

use collective_view::presenter::{CallToAction, CallToActionKind};
use leptos::prelude::*;

fn action_class(kind: CallToActionKind) -> &'static str {
    match kind {
        CallToActionKind::Contact => "cta cta-contact",
        CallToActionKind::SubmitExpense => "cta cta-submit-expense",
        CallToActionKind::Apply => "cta cta-apply",
        CallToActionKind::Dashboard => "cta cta-dashboard",
    }
}

/// Row of action buttons, shown on mobile where the nav bar has none
#[component]
pub fn CollectiveCallsToAction(actions: Vec<CallToAction>) -> impl IntoView {
    view! {
        <div class="collective-calls-to-action">
            {actions
                .into_iter()
                .map(|action| {
                    view! {
                        <a class=action_class(action.kind) href=action.url>{action.label}</a>
                    }
                })
                .collect_view()}
        </div>
    }
}
