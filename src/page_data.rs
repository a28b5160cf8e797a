//! Page Data
//!
//! Pre-fetched records the server places on `window.__COLLECTIVE_PAGE__`.

use std::collections::HashMap;

use collective_view::models::{null_as_default, CallsToAction, Collective, Host, Tier};
use collective_view::ViewConfig;
use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Global the server assigns before the bundle loads
pub const PAGE_DATA_GLOBAL: &str = "__COLLECTIVE_PAGE__";

/// Which page to mount
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Page {
    Collective {
        collective: Collective,
        #[serde(default)]
        host: Option<Host>,
        #[serde(default, deserialize_with = "null_as_default")]
        tiers: Vec<Tier>,
        #[serde(default, deserialize_with = "null_as_default")]
        is_admin: bool,
        #[serde(default, deserialize_with = "null_as_default")]
        calls_to_action: CallsToAction,
    },
    Hosts {
        #[serde(default)]
        title: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub page: Page,
    #[serde(default, deserialize_with = "null_as_default")]
    pub config: ViewConfig,
    #[serde(default)]
    pub locale: Option<String>,
    /// Message pattern overrides by id
    #[serde(default, deserialize_with = "null_as_default")]
    pub messages: HashMap<String, String>,
}

impl PageData {
    pub fn from_js(value: JsValue) -> Result<Self, String> {
        serde_wasm_bindgen::from_value(value).map_err(|e| format!("Failed to parse page data: {}", e))
    }
}

/// Read page data from the window global
pub fn load_page_data() -> Result<PageData, String> {
    let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(PAGE_DATA_GLOBAL))
        .map_err(|e| format!("Failed to read window.{}: {:?}", PAGE_DATA_GLOBAL, e))?;
    if value.is_undefined() || value.is_null() {
        return Err(format!("window.{} is not set", PAGE_DATA_GLOBAL));
    }
    PageData::from_js(value)
}
