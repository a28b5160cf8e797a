//! Hero Presenter
//!
//! Derives the collective banner: name, tag, social links, host line,
//! host terms and calls to action.

use serde::Serialize;

use crate::config::ViewConfig;
use crate::error::ViewResult;
use crate::intl::{format_number, ids, Intl, MessageArgs};
use crate::models::{CallsToAction, Collective, CollectiveType, Host};
use crate::routes::{github_profile_url, names, twitter_profile_url, RouteParams, RouteTable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MainTag {
    OpenSource,
    Custom(String),
}

/// Main tag of a collective; other account types have none
pub fn collective_main_tag(
    host_id: Option<u64>,
    tags: &[String],
    collective_type: CollectiveType,
    open_source_host_id: u64,
) -> Option<MainTag> {
    if collective_type != CollectiveType::Collective {
        return None;
    }
    if host_id == Some(open_source_host_id) || tags.iter().any(|t| t.eq_ignore_ascii_case("open source")) {
        return Some(MainTag::OpenSource);
    }
    tags.first().map(|t| MainTag::Custom(t.clone()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SocialKind {
    Twitter,
    Github,
    Website,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostLine {
    pub name: String,
    pub url: String,
}

/// Shown when the collective itself is a host
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostTerms {
    pub tos_url: Option<String>,
    pub fee_percent: f64,
    /// e.g. `10%`
    pub fee_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CallToActionKind {
    Contact,
    SubmitExpense,
    Apply,
    Dashboard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub kind: CallToActionKind,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroView {
    pub display_name: String,
    pub company: Option<String>,
    pub description: Option<String>,
    pub background_image: Option<String>,
    pub main_tag: Option<String>,
    pub settings_url: Option<String>,
    pub social_links: Vec<SocialLink>,
    pub host: Option<HostLine>,
    pub host_terms: Option<HostTerms>,
    pub show_edit_controls: bool,
    pub total_contributions: Option<String>,
    pub calls_to_action: Vec<CallToAction>,
}

fn social_links(collective: &Collective, intl: &Intl, config: &ViewConfig) -> Vec<SocialLink> {
    let mut links = Vec::new();
    if let Some(handle) = collective.twitter_handle.as_deref().filter(|h| !h.is_empty()) {
        links.push(SocialLink {
            kind: SocialKind::Twitter,
            href: twitter_profile_url(&config.links.twitter_base, handle),
            title: "Twitter".to_string(),
        });
    }
    if let Some(handle) = collective.github_handle.as_deref().filter(|h| !h.is_empty()) {
        links.push(SocialLink {
            kind: SocialKind::Github,
            href: github_profile_url(&config.links.github_base, handle),
            title: "Github".to_string(),
        });
    }
    if let Some(website) = collective.website.as_deref().filter(|w| !w.is_empty()) {
        links.push(SocialLink {
            kind: SocialKind::Website,
            href: website.to_string(),
            title: intl.format_message(ids::WEBSITE, &MessageArgs::new()),
        });
    }
    links
}

fn calls_to_action(
    collective: &Collective,
    calls: &CallsToAction,
    intl: &Intl,
    routes: &RouteTable,
) -> ViewResult<Vec<CallToAction>> {
    let params = RouteParams::new().with("slug", &collective.slug);
    let wanted = [
        (calls.has_contact, CallToActionKind::Contact, ids::CTA_CONTACT, names::CONTACT),
        (calls.has_submit_expense, CallToActionKind::SubmitExpense, ids::CTA_SUBMIT_EXPENSE, names::CREATE_EXPENSE),
        (calls.has_apply, CallToActionKind::Apply, ids::CTA_APPLY, names::APPLY),
        (calls.has_dashboard, CallToActionKind::Dashboard, ids::CTA_DASHBOARD, names::DASHBOARD),
    ];

    let mut actions = Vec::new();
    for (enabled, kind, label_id, route) in wanted {
        if enabled {
            actions.push(CallToAction {
                kind,
                label: intl.format_message(label_id, &MessageArgs::new()),
                url: routes.resolve(route, &params)?,
            });
        }
    }
    Ok(actions)
}

pub fn present_hero(
    collective: &Collective,
    host: Option<&Host>,
    is_admin: bool,
    calls: &CallsToAction,
    intl: &Intl,
    routes: &RouteTable,
    config: &ViewConfig,
) -> ViewResult<HeroView> {
    let is_collective = collective.collective_type == CollectiveType::Collective;

    let display_name = if collective.name.trim().is_empty() {
        collective.slug.clone()
    } else {
        collective.name.clone()
    };

    let main_tag = collective_main_tag(
        collective.host.map(|h| h.id),
        &collective.tags,
        collective.collective_type,
        config.open_source_host_id,
    )
    .map(|tag| match tag {
        MainTag::OpenSource => intl.format_message(ids::TAG_OPEN_SOURCE, &MessageArgs::new()),
        MainTag::Custom(tag) => tag,
    });

    let settings_url = if is_admin {
        Some(routes.resolve(names::EDIT_COLLECTIVE, &RouteParams::new().with("slug", &collective.slug))?)
    } else {
        None
    };

    let host = match host {
        Some(h) => Some(HostLine {
            name: h.name.clone(),
            url: routes.resolve(names::COLLECTIVE, &RouteParams::new().with("slug", &h.slug))?,
        }),
        None => None,
    };

    let host_terms = collective.is_host.then(|| {
        let fee_percent = collective.host_fee_percent.unwrap_or(0.0);
        HostTerms {
            tos_url: collective.settings.tos.clone().filter(|t| !t.is_empty()),
            fee_percent,
            fee_label: format!("{}%", format_number(fee_percent)),
        }
    });

    let total_contributions = if !is_collective && !collective.is_host {
        collective.stats.as_ref().map(|stats| {
            let amount = intl.format_currency(stats.total_amount_spent, &collective.currency);
            intl.format_message(ids::TOTAL_CONTRIBUTED, &MessageArgs::new().with("amount", amount))
        })
    } else {
        None
    };

    Ok(HeroView {
        display_name,
        company: collective.company.clone().filter(|c| !c.is_empty()),
        description: collective.description.clone().filter(|d| !d.is_empty()),
        background_image: collective.background_image.clone(),
        main_tag,
        settings_url,
        social_links: social_links(collective, intl, config),
        host,
        host_terms,
        show_edit_controls: is_admin,
        total_contributions,
        calls_to_action: calls_to_action(collective, calls, intl, routes)?,
    })
}
