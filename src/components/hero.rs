//! Hero Component
//!
//! Collective page banner: avatar, name, tags, social links, host info,
//! description and calls to action.

use collective_view::intl::ids;
use collective_view::models::{CallsToAction, Collective, Host};
use collective_view::presenter::{present_hero, HeroView, HostTerms, SocialKind};
use collective_view::MessageArgs;
use leptos::prelude::*;

use super::calls_to_action::CollectiveCallsToAction;
use super::defined_term::{DefinedTerm, Term};
use super::external_link::ExternalLink;
use super::formatted_message::splice_message;
use crate::context::use_page_context;

fn social_icon_class(kind: SocialKind) -> &'static str {
    match kind {
        SocialKind::Twitter => "icon icon-twitter",
        SocialKind::Github => "icon icon-github",
        SocialKind::Website => "icon icon-external-link",
    }
}

#[component]
fn HostTermsLine(terms: HostTerms) -> impl IntoView {
    let ctx = use_page_context();
    let tos_label = ctx.intl.format_message(ids::HOST_TOS, &MessageArgs::new());
    let tos = terms.tos_url.map(|url| {
        view! {
            <a class="host-tos" href=url target="_blank" rel="noopener noreferrer">{tos_label}</a>
        }
    });

    let fee_label = terms.fee_label;
    let parts = ctx.intl.format_parts(ids::HOST_FEE, &MessageArgs::new().slot("fee"));
    let fee = splice_message(parts, move |_| {
        let fee_label = fee_label.clone();
        view! { <DefinedTerm term=Term::HostFee>{fee_label}</DefinedTerm> }.into_any()
    });

    view! {
        {tos}
        <span class="host-fee">{fee}</span>
    }
}

#[component]
pub fn Hero(
    collective: Collective,
    host: Option<Host>,
    is_admin: bool,
    calls_to_action: CallsToAction,
    /// Opens the cover editor
    #[prop(optional, into)]
    on_edit_cover: Option<Callback<()>>,
    /// Opens the color picker
    #[prop(optional, into)]
    on_edit_color: Option<Callback<()>>,
) -> impl IntoView {
    let ctx = use_page_context();
    let hero = match present_hero(
        &collective,
        host.as_ref(),
        is_admin,
        &calls_to_action,
        &ctx.intl,
        &ctx.routes,
        &ctx.config,
    ) {
        Ok(hero) => hero,
        Err(e) => {
            log::error!("[HERO] Cannot render hero for {}: {}", collective.slug, e);
            return ().into_any();
        }
    };

    let HeroView {
        display_name,
        company,
        description,
        background_image,
        main_tag,
        settings_url,
        social_links,
        host,
        host_terms,
        show_edit_controls,
        total_contributions,
        calls_to_action,
    } = hero;

    let edit_controls = show_edit_controls.then(|| {
        let edit_cover = ctx.intl.format_message(ids::EDIT_COVER, &MessageArgs::new());
        let edit_color = ctx.intl.format_message(ids::EDIT_COLOR, &MessageArgs::new());
        view! {
            <div class="hero-edit-controls">
                <button
                    class="hero-edit-btn"
                    on:click=move |_| {
                        if let Some(cb) = on_edit_cover {
                            cb.run(());
                        }
                    }
                >
                    {edit_cover}
                </button>
                <button
                    class="hero-edit-btn"
                    on:click=move |_| {
                        if let Some(cb) = on_edit_color {
                            cb.run(());
                        }
                    }
                >
                    {edit_color}
                </button>
            </div>
        }
    });

    let settings = settings_url.map(|url| {
        let title = ctx.intl.format_message(ids::SETTINGS, &MessageArgs::new());
        view! {
            <a class="round-button" href=url title=title>
                <span class="icon icon-settings"></span>
            </a>
        }
    });

    let social = social_links
        .into_iter()
        .map(|link| {
            view! {
                <ExternalLink href=link.href title=link.title class="round-button">
                    <span class=social_icon_class(link.kind)></span>
                </ExternalLink>
            }
        })
        .collect_view();

    let host_line = host.map(|host| {
        let parts = ctx
            .intl
            .format_parts(ids::HERO_HOST, &MessageArgs::new().slot("FiscalHost").slot("hostName"));
        let line = splice_message(parts, move |slot| match slot {
            "FiscalHost" => view! { <DefinedTerm term=Term::FiscalHost /> }.into_any(),
            _ => view! {
                <a href=host.url.clone()>
                    <span class="host-name">{host.name.clone()}</span>
                </a>
            }
            .into_any(),
        });
        view! { <div class="hero-host">{line}</div> }
    });

    let terms = host_terms.map(|terms| view! { <HostTermsLine terms=terms /> });

    view! {
        <div class="hero">
            <div
                class="hero-background"
                style=background_image.map(|url| format!("background-image: url('{}');", url))
            ></div>
            {edit_controls}
            <div class="hero-content">
                <h1 class="hero-name">{display_name}</h1>
                {company.map(|company| view! { <p class="hero-company">{company}</p> })}
                <div class="hero-meta">
                    {main_tag.map(|tag| view! { <span class="styled-tag">{tag}</span> })}
                    <div class="hero-links">
                        {settings}
                        {social}
                    </div>
                    {host_line}
                    {terms}
                </div>
                {description.map(|description| view! { <h2 class="hero-short-description">{description}</h2> })}
                {total_contributions.map(|total| view! { <p class="hero-total-contributions">{total}</p> })}
                <CollectiveCallsToAction actions=calls_to_action />
            </div>
        </div>
    }
    .into_any()
}
