//! Saved-portfolio list for the dashboard.

#[cfg(test)]
#[path = "portfolio_list_test.rs"]
mod portfolio_list_test;

use leptos::prelude::*;

use crate::net::types::Portfolio;
use crate::state::portfolios::PortfoliosState;

/// Comma-joined tags, or an em dash placeholder when there are none.
fn join_tags(tags: Option<&[String]>) -> String {
    match tags {
        Some(tags) if !tags.is_empty() => tags.join(", "),
        _ => "\u{2014}".to_owned(),
    }
}

#[component]
pub fn PortfolioList(state: RwSignal<PortfoliosState>) -> impl IntoView {
    view! {
        <section class="portfolio-list">
            <h2 class="portfolio-list__title">"Saved portfolios"</h2>
            <Show
                when=move || !state.get().loading
                fallback=move || view! { <p class="portfolio-list__status">"Loading portfolios..."</p> }
            >
                <Show when=move || state.get().error.is_some()>
                    <p class="portfolio-list__error">{move || state.get().error.unwrap_or_default()}</p>
                </Show>
                <Show when=move || state.get().is_empty()>
                    <p class="portfolio-list__status">"No saved portfolios yet."</p>
                </Show>
                <ul class="portfolio-list__items">
                    {move || {
                        state
                            .get()
                            .items
                            .into_iter()
                            .map(|p| view! { <PortfolioRow portfolio=p/> })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn PortfolioRow(portfolio: Portfolio) -> impl IntoView {
    let label = portfolio.label();
    let created = portfolio.created_date().to_owned();
    let sectors = join_tags(portfolio.sectors.as_deref());
    let commodities = join_tags(portfolio.commodities.as_deref());

    view! {
        <li class="portfolio-row">
            <span class="portfolio-row__name">{label}</span>
            <span class="portfolio-row__date">{created}</span>
            <span class="portfolio-row__tags">"Sectors: " {sectors}</span>
            <span class="portfolio-row__tags">"Commodities: " {commodities}</span>
        </li>
    }
}
