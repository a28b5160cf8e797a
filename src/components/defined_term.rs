//! Defined Term Component
//!
//! Underlined term with its definition as tooltip.

use collective_view::intl::ids;
use collective_view::MessageArgs;
use leptos::prelude::*;

use crate::context::use_page_context;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Term {
    FiscalHost,
    HostFee,
}

impl Term {
    fn label_id(&self) -> &'static str {
        match self {
            Term::FiscalHost => ids::TERM_FISCAL_HOST,
            Term::HostFee => ids::TERM_HOST_FEE,
        }
    }

    fn definition_id(&self) -> &'static str {
        match self {
            Term::FiscalHost => ids::TERM_FISCAL_HOST_DEFINITION,
            Term::HostFee => ids::TERM_HOST_FEE_DEFINITION,
        }
    }
}

/// Shows `children` when given, the term label otherwise
#[component]
pub fn DefinedTerm(term: Term, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let ctx = use_page_context();
    let definition = ctx.intl.format_message(term.definition_id(), &MessageArgs::new());
    let content = match children {
        Some(children) => children(),
        None => ctx.intl.format_message(term.label_id(), &MessageArgs::new()).into_any(),
    };

    view! {
        <span class="defined-term" title=definition>{content}</span>
    }
}
