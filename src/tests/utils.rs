use crate::domain::listing::{Attribute, Listing, Seller, ShippingOption, PRICE_UNKNOWN};
use crate::scraper::{PageSource, ScraperError};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::HashMap;

pub const SEARCH: &str = "https://www.marktplaats.nl/q/solis";

/// Canned pages keyed by URL. Records every request in order.
#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, Result<String, String>>,
    requests: RefCell<Vec<String>>,
}

impl FakeSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, html: String) -> Self {
        self.pages.insert(url.to_string(), Ok(html));
        self
    }

    pub fn failing(mut self, url: &str, msg: &str) -> Self {
        self.pages.insert(url.to_string(), Err(msg.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl PageSource for FakeSite {
    fn fetch_html(&self, url: &str) -> Result<String, ScraperError> {
        self.requests.borrow_mut().push(url.to_string());

        match self.pages.get(url) {
            Some(Ok(html)) => Ok(html.clone()),
            Some(Err(msg)) => Err(ScraperError::Network(msg.clone())),
            None => Err(ScraperError::Network(format!("HTTP 404 Not Found for {url}"))),
        }
    }
}

pub fn page_url(page: u32) -> String {
    if page == 1 {
        SEARCH.to_string()
    } else {
        format!("{SEARCH}?p={page}")
    }
}

pub fn next_data_html(data: &Value) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><title>Marktplaats</title></head><body><div id="__next"></div><script id="__NEXT_DATA__" type="application/json">{data}</script></body></html>"#
    )
}

pub fn search_page(listings: Vec<Value>) -> String {
    next_data_html(&json!({
        "props": { "pageProps": { "searchRequestAndResponse": { "listings": listings } } }
    }))
}

pub fn search_page_with_total(listings: Vec<Value>, total: u64) -> String {
    next_data_html(&json!({
        "props": { "pageProps": { "searchRequestAndResponse": {
            "listings": listings,
            "totalResultCount": total
        } } }
    }))
}

pub fn detail_page(listing: Value) -> String {
    next_data_html(&json!({
        "props": { "pageProps": { "initialState": { "listing": listing } } }
    }))
}

/// A search result with every field filled in.
pub fn raw_listing(id: &str) -> Value {
    json!({
        "itemId": id,
        "title": format!("Solis Grind & Infuse {id}"),
        "description": "Werkt prima, weinig gebruikt.",
        "priceInfo": { "priceCents": 15000, "priceType": "FIXED" },
        "location": { "locationName": "Utrecht", "cityName": "Utrecht" },
        "vipUrl": format!("/v/witgoed/koffiemachines/{id}-solis"),
        "imageUrls": [format!("//images.marktplaats.com/api/v1/{id}.jpg")],
        "sellerInformation": {
            "sellerId": 42,
            "sellerName": "Jan",
            "sellerReviewAverage": 4.5,
            "sellerReviewScore": 9.0
        },
        "startDate": "2026-10-01T10:00:00Z",
        "shippingOptions": [{ "name": "Ophalen" }, { "name": "Verzenden" }],
        "attributes": [{ "key": "condition", "value": "Gebruikt" }]
    })
}

pub fn raw_listings(prefix: &str, n: usize) -> Vec<Value> {
    (1..=n).map(|i| raw_listing(&format!("{prefix}{i}"))).collect()
}

pub fn full_listing(id: &str) -> Listing {
    Listing {
        id: id.to_string(),
        title: format!("Solis Barista {id}"),
        price: "€150.00".to_string(),
        url: format!("https://www.marktplaats.nl/v/witgoed/{id}-solis"),
        location: Some("Utrecht".to_string()),
        start_date: Some("2026-10-01T10:00:00Z".to_string()),
        seller: Some(Seller {
            name: Some("Jan".to_string()),
            review_average: Some(4.5),
            review_score: Some(9.0),
        }),
        shipping_options: vec![
            ShippingOption { name: "Ophalen".to_string() },
            ShippingOption { name: "Verzenden".to_string() },
        ],
        description: Some("Werkt prima.".to_string()),
        image_url: Some(format!("https://images.marktplaats.com/{id}.jpg")),
        attributes: vec![Attribute {
            key: "condition".to_string(),
            value: "Gebruikt".to_string(),
        }],
    }
}

/// Only the required fields.
pub fn bare_listing(id: &str) -> Listing {
    Listing {
        id: id.to_string(),
        title: format!("Kale advertentie {id}"),
        price: PRICE_UNKNOWN.to_string(),
        url: format!("https://www.marktplaats.nl/v/{id}"),
        location: None,
        start_date: None,
        seller: None,
        shipping_options: Vec::new(),
        description: None,
        image_url: None,
        attributes: Vec::new(),
    }
}
