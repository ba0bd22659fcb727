use serde::Deserialize;
use serde_json::Value;

// props
//  └── pageProps
//       ├── searchRequestAndResponse      (search pages)
//       │    ├── listings[]
//       │    └── totalResultCount
//       └── initialState                  (listing pages)
//            └── listing
//
// Search results and listing pages share the listing shape below; a listing
// page just fills in more of it.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequestAndResponse {
    #[serde(default)]
    pub listings: Vec<RawListing>,
    pub total_result_count: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListing {
    pub item_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price_info: Option<PriceInfo>,
    pub location: Option<RawLocation>,
    pub vip_url: Option<String>,
    pub image_urls: Option<Vec<String>>,
    pub seller_information: Option<SellerInformation>,

    // Either an ISO string or epoch millis depending on the page.
    pub start_date: Option<Value>,
    pub date: Option<Value>,

    pub shipping_options: Option<Vec<RawShippingOption>>,
    pub attributes: Option<Vec<RawAttribute>>,

    // Present on paid placements only
    pub admarkt_info: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceInfo {
    pub price_cents: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLocation {
    pub location_name: Option<String>,
    pub city_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerInformation {
    pub seller_name: Option<String>,
    pub seller_review_average: Option<f64>,
    pub seller_review_score: Option<f64>,
    pub show_website_url: Option<bool>,
    pub seller_website_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawShippingOption {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawAttribute {
    pub key: Option<String>,
    #[serde(default)]
    pub value: Value,
}

impl RawListing {
    /// Paid placements: the seller advertises a website, or the item is an
    /// admarkt ad.
    pub fn is_commercial(&self) -> bool {
        let advertises_site = self.seller_information.as_ref().is_some_and(|s| {
            s.show_website_url.unwrap_or(false)
                || s.seller_website_url.as_deref().is_some_and(|u| !u.is_empty())
        });

        advertises_site || self.admarkt_info.as_ref().is_some_and(is_present)
    }
}

/// `null`, `{}`, `[]`, `""` and `false` all mean "not set" in these payloads.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(m) => !m.is_empty(),
        Value::Number(_) => true,
    }
}
