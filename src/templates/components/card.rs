use crate::domain::listing::Listing;
use crate::domain::overlay::{CardData, FALLBACK};
use maud::{html, Markup};

/// One listing card. Every overlay field rides along as a `data-*`
/// attribute; clicking asks the server for the filled overlay.
pub fn listing_card(listing: &Listing) -> Markup {
    let data = CardData::from_listing(listing);

    html! {
        div
            class="card"
            data-listing-id=(listing.id)
            data-title=[data.title.as_deref()]
            data-price=[data.price.as_deref()]
            data-url=[data.url.as_deref()]
            data-location=[data.location.as_deref()]
            data-date=[data.date.as_deref()]
            data-seller-name=[data.seller_name.as_deref()]
            data-seller-rating=[data.seller_rating.as_deref()]
            data-shipping=[data.shipping.as_deref()]
            data-description=[data.description.as_deref()]
            data-image=[data.image.as_deref()]
            hx-get=(format!("/listings/{}", listing.id))
            hx-target="#overlay"
            hx-swap="outerHTML"
        {
            @match &listing.image_url {
                Some(src) => {
                    img src=(src) alt=(listing.title) loading="lazy";
                }
                None => {
                    div class="no-image" { (FALLBACK) }
                }
            }
            h4 { (listing.title) }
            p class="price" { (listing.price) }
            p class="location" { (listing.location.as_deref().unwrap_or(FALLBACK)) }
            a href=(listing.url) target="_blank" rel="noopener" { "View" }
        }
    }
}
