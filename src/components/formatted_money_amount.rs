//! Formatted Money Amount Component

use collective_view::MoneyAmount;
use leptos::prelude::*;

use crate::context::use_page_context;

/// `$10 USD / month` with the amount emphasized
#[component]
pub fn FormattedMoneyAmount(
    money: MoneyAmount,
    /// Extra class for the emphasized amount
    #[prop(into, optional)]
    amount_class: String,
) -> impl IntoView {
    let ctx = use_page_context();
    let suffix = ctx.intl.money_suffix(&money);

    view! {
        <span class="formatted-money-amount">
            <span class=format!("amount {}", amount_class)>{money.formatted_amount()}</span>
            " "
            <span class="currency">{suffix}</span>
        </span>
    }
}
