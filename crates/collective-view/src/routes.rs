//! Named Routes
//!
//! Maps a route name plus params to a URL path. Patterns use `:param`
//! placeholders; params not consumed by the pattern become the query string.

use std::collections::{BTreeMap, HashMap};

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};

use crate::error::RouteError;

pub mod names {
    pub const COLLECTIVE: &str = "collective";
    pub const EDIT_COLLECTIVE: &str = "editCollective";
    pub const TIER: &str = "tier";
    pub const ORDER_TIER: &str = "orderCollectiveTierNew";
    pub const CONTACT: &str = "contactCollective";
    pub const CREATE_EXPENSE: &str = "createExpense";
    pub const APPLY: &str = "createCollective";
    pub const DASHBOARD: &str = "hostDashboard";
}

const DEFAULT_ROUTES: &[(&str, &str)] = &[
    (names::COLLECTIVE, "/:slug"),
    (names::EDIT_COLLECTIVE, "/:slug/edit"),
    (names::TIER, "/:collectiveSlug/:verb/:tierSlug-:tierId"),
    (names::ORDER_TIER, "/:collectiveSlug/:verb/:tierSlug-:tierId/checkout"),
    (names::CONTACT, "/:slug/contact"),
    (names::CREATE_EXPENSE, "/:slug/expenses/new"),
    (names::APPLY, "/:slug/apply"),
    (names::DASHBOARD, "/:slug/dashboard"),
];

const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}');

const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

fn compile(pattern: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c != ':' {
            literal.push(c);
            continue;
        }
        let mut name = String::new();
        while let Some(&next) = chars.peek() {
            if next.is_ascii_alphanumeric() || next == '_' {
                name.push(next);
                chars.next();
            } else {
                break;
            }
        }
        if name.is_empty() {
            literal.push(':');
        } else {
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Param(name));
        }
    }
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}

/// Route parameters, ordered by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    values: BTreeMap<String, String>,
}

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl ToString) -> Self {
        self.values.insert(name.to_string(), value.to_string());
        self
    }
}

/// Compiled route table
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: HashMap<String, Vec<Segment>>,
}

impl Default for RouteTable {
    fn default() -> Self {
        let mut table = Self {
            routes: HashMap::new(),
        };
        for (name, pattern) in DEFAULT_ROUTES {
            table.insert(name, pattern);
        }
        table
    }
}

impl RouteTable {
    pub fn insert(&mut self, name: &str, pattern: &str) {
        self.routes.insert(name.to_string(), compile(pattern));
    }

    /// Resolve `route` to a URL. Absolute `http(s)://` routes pass through.
    pub fn resolve(&self, route: &str, params: &RouteParams) -> Result<String, RouteError> {
        if is_absolute(route) {
            return Ok(route.to_string());
        }

        let segments = self
            .routes
            .get(route)
            .ok_or_else(|| RouteError::UnknownRoute(route.to_string()))?;

        let mut url = String::new();
        let mut consumed = Vec::new();
        for segment in segments {
            match segment {
                Segment::Literal(text) => url.push_str(text),
                Segment::Param(name) => {
                    let value = params.values.get(name).ok_or_else(|| RouteError::MissingParam {
                        route: route.to_string(),
                        param: name.clone(),
                    })?;
                    url.extend(utf8_percent_encode(value, PATH_SEGMENT_ENCODE_SET));
                    consumed.push(name.as_str());
                }
            }
        }

        let query: Vec<String> = params
            .values
            .iter()
            .filter(|(name, _)| !consumed.contains(&name.as_str()))
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(name, QUERY_ENCODE_SET),
                    utf8_percent_encode(value, QUERY_ENCODE_SET)
                )
            })
            .collect();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.join("&"));
        }
        Ok(url)
    }
}

pub fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// `https://twitter.com/<handle>`, a leading `@` is dropped
pub fn twitter_profile_url(base: &str, handle: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), handle.trim_start_matches('@'))
}

pub fn github_profile_url(base: &str, handle: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), handle.trim_start_matches('@'))
}
