use crate::domain::overlay::Overlay;
use maud::{html, Markup};

/// The shared overlay. Rendered hidden on the dashboard and swapped in,
/// filled, when a card is clicked.
pub fn overlay(state: &Overlay) -> Markup {
    let slots = state.slots();

    html! {
        div id="overlay" class="overlay" hidden[!state.is_visible()] {
            div class="overlay-content" {
                button
                    type="button"
                    class="overlay-close"
                    hx-get="/overlay"
                    hx-target="#overlay"
                    hx-swap="outerHTML"
                { "Close" }

                @if let Some(slots) = slots {
                    h2 id="overlay-title" { (slots.title) }
                    img
                        id="overlay-image"
                        src=[slots.image.as_deref()]
                        alt=(slots.title)
                        hidden[slots.image.is_none()];
                    dl {
                        dt { "Price" } dd id="overlay-price" { (slots.price) }
                        dt { "Location" } dd id="overlay-location" { (slots.location) }
                        dt { "Posted" } dd id="overlay-date" { (slots.date) }
                        dt { "Seller" } dd id="overlay-seller-name" { (slots.seller_name) }
                        dt { "Rating" } dd id="overlay-seller-rating" { (slots.seller_rating) }
                        dt { "Shipping" } dd id="overlay-shipping" { (slots.shipping) }
                    }
                    p id="overlay-description" { (slots.description) }
                    a id="overlay-link" href=(slots.link) target="_blank" rel="noopener" { "Open listing" }
                } @else {
                    h2 id="overlay-title" {}
                    img id="overlay-image" alt="" hidden;
                    dl {
                        dt { "Price" } dd id="overlay-price" {}
                        dt { "Location" } dd id="overlay-location" {}
                        dt { "Posted" } dd id="overlay-date" {}
                        dt { "Seller" } dd id="overlay-seller-name" {}
                        dt { "Rating" } dd id="overlay-seller-rating" {}
                        dt { "Shipping" } dd id="overlay-shipping" {}
                    }
                    p id="overlay-description" {}
                    a id="overlay-link" href="#" { "Open listing" }
                }
            }
        }
    }
}
