//! Site header: home link with the site title, plus fixed navigation

use leptos::prelude::*;
use shared::{HOME_ROUTE, NAV_LINKS};

const HEADER_STYLE: &str = "background: rebeccapurple; margin-bottom: 1.45rem";
const INNER_STYLE: &str = "margin: 0 auto; display: flex; justify-content: space-between; \
                           align-items: center; max-width: 960px; padding: 1.45rem 1.0875rem";
const NAV_STYLE: &str =
    "display: grid; grid-template-columns: 1fr 1fr; grid-gap: 8px; align-content: center";
const HEADING_STYLE: &str = "margin: 0";
const LINK_STYLE: &str = "color: white; text-decoration: none";

#[component]
pub fn Header(
    /// text of the home link; empty when not supplied
    #[prop(into, optional)]
    site_title: String,
) -> impl IntoView {
    let nav = NAV_LINKS
        .iter()
        .map(|link| {
            view! {
                <h4 style=HEADING_STYLE>
                    <a href=link.to style=LINK_STYLE>{link.label}</a>
                </h4>
            }
        })
        .collect_view();

    view! {
        <header style=HEADER_STYLE>
            <div style=INNER_STYLE>
                <h1 style=HEADING_STYLE>
                    <a href=HOME_ROUTE style=LINK_STYLE>{site_title}</a>
                </h1>
                <div style=NAV_STYLE>{nav}</div>
            </div>
        </header>
    }
}
