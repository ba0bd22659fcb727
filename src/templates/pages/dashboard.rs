use crate::domain::catalog::Catalog;
use crate::domain::overlay::Overlay;
use crate::errors::ServerError;
use crate::templates::components::{listing_card, overlay};
use crate::templates::desktop_layout;
use maud::{html, Markup, PreEscaped};

pub fn dashboard_page(catalog: &Catalog) -> Result<Markup, ServerError> {
    let embedded = catalog
        .to_embedded_json()
        .map_err(|_| ServerError::InternalError)?;

    Ok(desktop_layout(
        "Listings Dashboard",
        html! {
            main class="container" {
                h1 { "Listings Dashboard" }

                @if catalog.is_empty() {
                    p { "No listings found." }
                } @else {
                    section class="cards" {
                        @for listing in catalog.listings() {
                            (listing_card(listing))
                        }
                    }
                }

                p id="total" { "Total products scraped: " (catalog.len()) }

                script type="application/json" id="listings-data" { (PreEscaped(embedded)) }

                (overlay(&Overlay::default()))
            }
        },
    ))
}
