//! Progress Bar Component

use leptos::prelude::*;

/// Horizontal bar filled to `fraction` (0 to 1)
#[component]
pub fn ProgressBar(fraction: f64) -> impl IntoView {
    let width = (fraction.clamp(0.0, 1.0) * 100.0).round();

    view! {
        <div class="progress-bar">
            <div class="progress-bar-fill" style=format!("width: {}%;", width)></div>
        </div>
    }
}
