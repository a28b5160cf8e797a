//! Rich Message Splicing
//!
//! Turns formatted message parts into views, filling placeholders with
//! caller-supplied children (links, styled amounts, defined terms).

use collective_view::MessagePart;
use leptos::prelude::*;

/// Render `parts`, asking `slot` for the view of each placeholder
pub fn splice_message(parts: Vec<MessagePart>, mut slot: impl FnMut(&str) -> AnyView) -> Vec<AnyView> {
    parts
        .into_iter()
        .map(|part| match part {
            MessagePart::Text(text) => text.into_any(),
            MessagePart::Placeholder(name) => slot(&name),
        })
        .collect()
}
