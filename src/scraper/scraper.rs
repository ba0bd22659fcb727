// scraper.rs
use crate::domain::listing::{
    Attribute, Listing, ListingDetails, Seller, ShippingOption, PRICE_UNKNOWN,
};
use crate::scraper::models::{RawListing, SearchRequestAndResponse};
use crate::scraper::{PageSource, ScraperError, SearchQuery};
use chrono::{DateTime, Utc};
use scraper::{Html, Selector};
use serde::Deserialize;
use serde_json::Value;
use std::collections::{HashSet, VecDeque};
use tracing::{debug, info, warn};
use url::Url;

#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    /// Fetch a listing's own page when the search result left fields out.
    pub enrich_details: bool,
    pub max_pages: Option<u32>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            enrich_details: true,
            max_pages: None,
        }
    }
}

pub struct ScrapeSummary {
    pub listings: Vec<Listing>,
    pub pages_fetched: usize,
}

pub struct MarktplaatsScraper<S> {
    source: S,
    options: ScrapeOptions,
}

impl<S: PageSource> MarktplaatsScraper<S> {
    pub fn new(source: S, options: ScrapeOptions) -> Self {
        Self { source, options }
    }

    #[cfg(test)]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Lazily walks every result page of `query`. Each call starts over from
    /// page 1 with a fresh set of seen ids.
    pub fn listings<'a>(&'a self, query: &'a SearchQuery) -> Listings<'a, S> {
        Listings {
            scraper: self,
            query,
            origin: query.origin(),
            next_page: 1,
            pages_fetched: 0,
            raw_count: 0,
            seen: HashSet::new(),
            pending: VecDeque::new(),
            finished: false,
        }
    }

    /// Runs the whole pagination loop, stopping at the first failure.
    pub fn fetch_all(&self, query: &SearchQuery) -> Result<ScrapeSummary, ScraperError> {
        let mut pages = self.listings(query);
        let listings = pages.by_ref().collect::<Result<Vec<_>, _>>()?;

        Ok(ScrapeSummary {
            listings,
            pages_fetched: pages.pages_fetched(),
        })
    }

    /// Extra fields from a listing's own page. A page without `__NEXT_DATA__`
    /// contributes nothing.
    pub fn fetch_listing_details(&self, url: &str) -> Result<ListingDetails, ScraperError> {
        debug!("🔎 Fetching details from {url}");
        let html = self.source.fetch_html(url)?;

        let data = match extract_next_data(&html) {
            Ok(data) => data,
            Err(ScraperError::MissingNextData) => return Ok(ListingDetails::default()),
            Err(e) => return Err(e),
        };

        extract_details(&data)
    }
}

/// Iterator over one scrape run. Yields each listing as its page is parsed;
/// after an `Err` it yields nothing more.
pub struct Listings<'a, S> {
    scraper: &'a MarktplaatsScraper<S>,
    query: &'a SearchQuery,
    origin: Url,
    next_page: u32,
    pages_fetched: usize,
    raw_count: u64,
    seen: HashSet<String>,
    pending: VecDeque<Listing>,
    finished: bool,
}

impl<'a, S: PageSource> Listings<'a, S> {
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    fn advance(&mut self) -> Result<(), ScraperError> {
        if let Some(max) = self.scraper.options.max_pages {
            if self.pages_fetched >= max as usize {
                info!("🏁 Reached page limit ({max}), stopping");
                self.finished = true;
                return Ok(());
            }
        }

        let page = self.next_page;
        let page_url = self.query.page_url(page);

        info!("📄 Scraping page {page}: {page_url}");

        let html = self.scraper.source.fetch_html(&page_url)?;
        self.pages_fetched += 1;

        let data = extract_next_data(&html)?;
        let search = extract_search(&data)?;

        if search.listings.is_empty() {
            info!("🏁 No listings on page {page}, stopping");
            self.finished = true;
            return Ok(());
        }

        self.raw_count += search.listings.len() as u64;
        let mut fresh = 0;

        for raw in search.listings {
            let Some(id) = raw.item_id.clone().filter(|id| !id.is_empty()) else {
                warn!("⚠️ Skipping listing without itemId on page {page}");
                continue;
            };
            if !self.seen.insert(id.clone()) {
                continue;
            }

            if raw.is_commercial() {
                debug!("Skipping commercial listing {id}");
                continue;
            }
            fresh += 1;

            let mut listing = normalize_listing(id, raw, &self.origin);

            if self.scraper.options.enrich_details && listing.is_incomplete() {
                let details = self.scraper.fetch_listing_details(&listing.url)?;
                listing.fill_missing(details);
            }

            self.pending.push_back(listing);
        }

        if fresh == 0 {
            info!("🔁 Page {page} had no new private listings, stopping");
            self.finished = true;
            return Ok(());
        }

        info!("✅ Page {page} parsed ({} listings)", self.pending.len());

        if let Some(total) = search.total_result_count {
            if self.raw_count >= total {
                info!("🏁 All {total} results seen, stopping");
                self.finished = true;
            }
        }

        self.next_page += 1;
        Ok(())
    }
}

impl<'a, S: PageSource> Iterator for Listings<'a, S> {
    type Item = Result<Listing, ScraperError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(listing) = self.pending.pop_front() {
                return Some(Ok(listing));
            }
            if self.finished {
                return None;
            }
            if let Err(e) = self.advance() {
                warn!("❌ Page {} failed: {e}", self.next_page);
                self.finished = true;
                self.pending.clear();
                return Some(Err(e));
            }
        }
    }
}

fn extract_next_data(html: &str) -> Result<Value, ScraperError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(r#"script[id="__NEXT_DATA__"]"#)
        .map_err(|e| ScraperError::HtmlParse(e.to_string()))?;

    let element = document
        .select(&selector)
        .next()
        .ok_or(ScraperError::MissingNextData)?;

    let json_text: String = element.text().collect();
    if json_text.trim().is_empty() {
        return Err(ScraperError::MissingNextData);
    }

    serde_json::from_str(&json_text).map_err(|e| ScraperError::JsonParse(e.to_string()))
}

fn extract_search(data: &Value) -> Result<SearchRequestAndResponse, ScraperError> {
    let search = data
        .pointer("/props/pageProps/searchRequestAndResponse")
        .ok_or_else(|| {
            ScraperError::UnexpectedShape("searchRequestAndResponse missing".to_string())
        })?;

    SearchRequestAndResponse::deserialize(search)
        .map_err(|e| ScraperError::UnexpectedShape(e.to_string()))
}

fn extract_details(data: &Value) -> Result<ListingDetails, ScraperError> {
    let Some(listing) = data.pointer("/props/pageProps/initialState/listing") else {
        return Ok(ListingDetails::default());
    };

    let raw =
        RawListing::deserialize(listing).map_err(|e| ScraperError::UnexpectedShape(e.to_string()))?;

    Ok(ListingDetails {
        seller: seller_of(&raw),
        start_date: start_date_of(&raw),
        shipping_options: shipping_of(&raw),
        attributes: attributes_of(&raw),
        description: non_empty(raw.description),
    })
}

/// Flatten one search result into a `Listing`.
fn normalize_listing(id: String, raw: RawListing, origin: &Url) -> Listing {
    let price = raw
        .price_info
        .as_ref()
        .and_then(|p| p.price_cents)
        .map(format_price)
        .unwrap_or_else(|| PRICE_UNKNOWN.to_string());

    let url = raw
        .vip_url
        .as_deref()
        .and_then(|path| origin.join(path).ok())
        .unwrap_or_else(|| origin.clone())
        .to_string();

    let image_url = raw
        .image_urls
        .as_ref()
        .and_then(|urls| urls.first())
        .filter(|u| !u.is_empty())
        .map(|u| {
            if u.starts_with("//") {
                format!("https:{u}")
            } else {
                u.clone()
            }
        });

    let location = raw
        .location
        .as_ref()
        .and_then(|l| l.location_name.clone().or_else(|| l.city_name.clone()));

    Listing {
        seller: seller_of(&raw),
        start_date: start_date_of(&raw),
        shipping_options: shipping_of(&raw),
        attributes: attributes_of(&raw),
        id,
        title: raw.title.unwrap_or_default(),
        price,
        url,
        location: non_empty(location),
        description: non_empty(raw.description),
        image_url,
    }
}

/// 1995 -> "€19.95"
pub fn format_price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{sign}€{}.{:02}", cents / 100, cents % 100)
}

fn seller_of(raw: &RawListing) -> Option<Seller> {
    let info = raw.seller_information.as_ref()?;
    let seller = Seller {
        name: non_empty(info.seller_name.clone()),
        review_average: info.seller_review_average,
        review_score: info.seller_review_score,
    };

    if seller.name.is_none() && seller.rating().is_none() {
        return None;
    }
    Some(seller)
}

fn start_date_of(raw: &RawListing) -> Option<String> {
    raw.start_date
        .as_ref()
        .and_then(date_text)
        .or_else(|| raw.date.as_ref().and_then(date_text))
}

/// Dates arrive as text or as epoch millis.
fn date_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|dt| dt.to_rfc3339()),
        _ => None,
    }
}

fn shipping_of(raw: &RawListing) -> Vec<ShippingOption> {
    raw.shipping_options
        .iter()
        .flatten()
        .filter_map(|o| o.name.clone())
        .filter(|name| !name.is_empty())
        .map(|name| ShippingOption { name })
        .collect()
}

fn attributes_of(raw: &RawListing) -> Vec<Attribute> {
    raw.attributes
        .iter()
        .flatten()
        .filter_map(|a| {
            let key = a.key.clone()?;
            let value = match &a.value {
                Value::Null => return None,
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Some(Attribute { key, value })
        })
        .collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
