use crate::domain::listing::Listing;
use std::collections::HashMap;

/// Read-only collection of one scrape run's listings, in scrape order and
/// keyed by listing id.
#[derive(Debug, Default)]
pub struct Catalog {
    listings: Vec<Listing>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Later duplicates of an id are dropped; the first occurrence wins.
    pub fn new(listings: Vec<Listing>) -> Self {
        let mut kept = Vec::with_capacity(listings.len());
        let mut by_id = HashMap::with_capacity(listings.len());

        for listing in listings {
            if by_id.contains_key(&listing.id) {
                continue;
            }
            by_id.insert(listing.id.clone(), kept.len());
            kept.push(listing);
        }

        Self {
            listings: kept,
            by_id,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.by_id.get(id).map(|&i| &self.listings[i])
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// JSON for embedding in a `<script type="application/json">` element.
    /// `</` is escaped so a title can't close the script tag early.
    pub fn to_embedded_json(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(&self.listings)?;
        Ok(json.replace("</", "<\\/"))
    }
}
