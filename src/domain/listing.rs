use serde::{Deserialize, Serialize};

pub const PRICE_UNKNOWN: &str = "N/A";

/// One scraped product. Built once per scrape pass and never mutated after
/// it leaves the scraper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub price: String,
    pub url: String,

    pub location: Option<String>,
    pub start_date: Option<String>,
    pub seller: Option<Seller>,
    #[serde(default)]
    pub shipping_options: Vec<ShippingOption>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub name: Option<String>,
    pub review_average: Option<f64>,
    pub review_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingOption {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Seller {
    /// Review average wins over review score when both are present.
    pub fn rating(&self) -> Option<f64> {
        self.review_average.or(self.review_score)
    }
}

impl Listing {
    pub fn seller_name(&self) -> Option<&str> {
        self.seller.as_ref().and_then(|s| s.name.as_deref())
    }

    pub fn seller_rating(&self) -> Option<f64> {
        self.seller.as_ref().and_then(Seller::rating)
    }

    /// Shipping option names in original order, duplicates included.
    pub fn shipping_names(&self) -> Vec<&str> {
        self.shipping_options.iter().map(|o| o.name.as_str()).collect()
    }

    /// True when the search result left out something a listing page could
    /// supply.
    pub fn is_incomplete(&self) -> bool {
        self.description.is_none()
            || self.seller_name().is_none()
            || self.seller_rating().is_none()
            || self.start_date.is_none()
            || self.shipping_options.is_empty()
            || self.attributes.is_empty()
    }

    /// Copy over only the fields this listing does not already have.
    pub fn fill_missing(&mut self, details: ListingDetails) {
        if self.description.is_none() {
            self.description = details.description;
        }
        if self.start_date.is_none() {
            self.start_date = details.start_date;
        }
        if self.shipping_options.is_empty() {
            self.shipping_options = details.shipping_options;
        }
        if self.attributes.is_empty() {
            self.attributes = details.attributes;
        }

        match (&mut self.seller, details.seller) {
            (None, Some(seller)) => self.seller = Some(seller),
            (Some(current), Some(seller)) => {
                if current.name.is_none() {
                    current.name = seller.name;
                }
                if current.rating().is_none() {
                    current.review_average = seller.review_average;
                    current.review_score = seller.review_score;
                }
            }
            _ => {}
        }
    }
}

/// The extra fields a listing page contributes.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ListingDetails {
    pub description: Option<String>,
    pub seller: Option<Seller>,
    pub start_date: Option<String>,
    pub shipping_options: Vec<ShippingOption>,
    pub attributes: Vec<Attribute>,
}
