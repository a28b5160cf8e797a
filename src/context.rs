//! Page Context
//!
//! Formatting collaborators provided via Leptos Context API. Components read
//! them once and hand them explicitly to the presenters.

use std::sync::Arc;

use collective_view::{Intl, RouteTable, ViewConfig};
use leptos::prelude::*;

use crate::page_data::PageData;

#[derive(Clone)]
pub struct PageContext {
    pub intl: Arc<Intl>,
    pub routes: Arc<RouteTable>,
    pub config: Arc<ViewConfig>,
}

impl PageContext {
    pub fn new(intl: Intl, routes: RouteTable, config: ViewConfig) -> Self {
        Self {
            intl: Arc::new(intl),
            routes: Arc::new(routes),
            config: Arc::new(config),
        }
    }

    /// Build from page data, falling back to the English catalog on bad overrides
    pub fn from_page_data(data: &PageData) -> Self {
        let intl = if data.messages.is_empty() {
            Intl::en()
        } else {
            let locale = data.locale.clone().unwrap_or_else(|| "en".to_string());
            let overrides = data.messages.iter().map(|(id, pattern)| (id.as_str(), pattern.as_str()));
            Intl::en().with_messages(locale, overrides).unwrap_or_else(|e| {
                log::error!("[CONTEXT] Ignoring message overrides: {}", e);
                Intl::en()
            })
        };
        Self::new(intl, RouteTable::default(), data.config.clone())
    }
}

/// Get the page context provided by `App`
pub fn use_page_context() -> PageContext {
    expect_context::<PageContext>()
}
