use url::Url;

pub const SITE_URL: &str = "https://www.marktplaats.nl";

/// A search to walk page by page. Page 1 is the search URL itself, page N
/// adds `p=N`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    url: Url,
    filters: Vec<(String, String)>,
}

impl SearchQuery {
    pub fn from_url(search_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            url: Url::parse(search_url)?,
            filters: Vec::new(),
        })
    }

    /// `from_terms(SITE_URL, "solis espresso")` searches `/q/solis+espresso`.
    pub fn from_terms(site_url: &str, terms: &str) -> Result<Self, url::ParseError> {
        let mut url = Url::parse(site_url)?;
        let joined = terms.split_whitespace().collect::<Vec<_>>().join("+");

        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .push("q")
            .push(&joined);

        Ok(Self {
            url,
            filters: Vec::new(),
        })
    }

    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((key.into(), value.into()));
        self
    }

    pub fn page_url(&self, page: u32) -> String {
        let mut url = self.url.clone();

        if page > 1 || !self.filters.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.filters {
                pairs.append_pair(key, value);
            }
            if page > 1 {
                pairs.append_pair("p", &page.to_string());
            }
        }

        url.into()
    }

    /// Scheme and host of the search, used to absolutize listing paths.
    pub fn origin(&self) -> Url {
        let mut origin = self.url.clone();
        origin.set_path("/");
        origin.set_query(None);
        origin.set_fragment(None);
        origin
    }
}
