pub mod models;
mod query;
mod scraper;
mod scraper_error;
mod source;

pub use query::{SearchQuery, SITE_URL};
#[cfg(test)]
pub use self::scraper::format_price;
pub use self::scraper::{MarktplaatsScraper, ScrapeOptions};
pub use scraper_error::ScraperError;
#[cfg(test)]
pub use source::check_status;
pub use source::{HttpSource, PageSource};
