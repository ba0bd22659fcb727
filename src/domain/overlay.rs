use crate::domain::listing::{Listing, PRICE_UNKNOWN};

pub const FALLBACK: &str = "N/A";
pub const NO_DESCRIPTION: &str = "No description available";
pub const SHIPPING_SEPARATOR: &str = ", ";

/// What a card carries in its `data-*` attributes. Every field is already in
/// display form; `None` means the attribute was absent or empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardData {
    pub id: Option<String>,
    pub title: Option<String>,
    pub price: Option<String>,
    pub url: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub seller_name: Option<String>,
    pub seller_rating: Option<String>,
    pub shipping: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl CardData {
    pub fn from_listing(listing: &Listing) -> Self {
        let shipping = listing.shipping_names().join(SHIPPING_SEPARATOR);
        let price = Some(listing.price.clone()).filter(|p| p != PRICE_UNKNOWN);

        Self {
            id: Some(listing.id.clone()),
            title: Some(listing.title.clone()),
            price,
            url: Some(listing.url.clone()),
            location: listing.location.clone(),
            date: listing.start_date.clone(),
            seller_name: listing.seller_name().map(str::to_string),
            seller_rating: listing.seller_rating().map(|r| r.to_string()),
            shipping: Some(shipping),
            description: listing.description.clone(),
            image: listing.image_url.clone(),
        }
        .normalized()
    }

    /// Read a card element's `data-*` attributes.
    #[cfg(test)]
    pub fn from_attributes<'a>(attr: impl Fn(&str) -> Option<&'a str>) -> Self {
        let get = |name: &str| attr(name).map(str::to_string);

        Self {
            id: get("data-listing-id"),
            title: get("data-title"),
            price: get("data-price"),
            url: get("data-url"),
            location: get("data-location"),
            date: get("data-date"),
            seller_name: get("data-seller-name"),
            seller_rating: get("data-seller-rating"),
            shipping: get("data-shipping"),
            description: get("data-description"),
            image: get("data-image"),
        }
        .normalized()
    }

    fn normalized(self) -> Self {
        fn clean(v: Option<String>) -> Option<String> {
            v.filter(|s| !s.trim().is_empty())
        }

        Self {
            id: clean(self.id),
            title: clean(self.title),
            price: clean(self.price),
            url: clean(self.url),
            location: clean(self.location),
            date: clean(self.date),
            seller_name: clean(self.seller_name),
            seller_rating: clean(self.seller_rating),
            shipping: clean(self.shipping),
            description: clean(self.description),
            image: clean(self.image),
        }
    }
}

/// The overlay's fixed slots, fallbacks applied. `image` is `None` when the
/// image element should be hidden.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySlots {
    pub title: String,
    pub price: String,
    pub location: String,
    pub date: String,
    pub seller_name: String,
    pub seller_rating: String,
    pub shipping: String,
    pub description: String,
    pub image: Option<String>,
    pub link: String,
}

impl From<&CardData> for OverlaySlots {
    fn from(card: &CardData) -> Self {
        let or_fallback = |v: &Option<String>| v.clone().unwrap_or_else(|| FALLBACK.to_string());

        Self {
            title: or_fallback(&card.title),
            price: or_fallback(&card.price),
            location: or_fallback(&card.location),
            date: or_fallback(&card.date),
            seller_name: or_fallback(&card.seller_name),
            seller_rating: or_fallback(&card.seller_rating),
            shipping: or_fallback(&card.shipping),
            description: card
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            image: card.image.clone(),
            link: card.url.clone().unwrap_or_else(|| "#".to_string()),
        }
    }
}

impl From<&Listing> for OverlaySlots {
    fn from(listing: &Listing) -> Self {
        OverlaySlots::from(&CardData::from_listing(listing))
    }
}

/// The single shared detail view. Hidden until a card fills it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    slots: Option<OverlaySlots>,
    visible: bool,
}

impl Overlay {
    pub fn show(&mut self, slots: OverlaySlots) {
        self.slots = Some(slots);
        self.visible = true;
    }

    #[cfg(test)]
    pub fn show_card(&mut self, card: &CardData) {
        self.show(OverlaySlots::from(card));
    }

    pub fn show_listing(&mut self, listing: &Listing) {
        self.show(OverlaySlots::from(listing));
    }

    /// The overlay's own close control. Slots keep their last content.
    #[cfg(test)]
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn slots(&self) -> Option<&OverlaySlots> {
        self.slots.as_ref()
    }
}
