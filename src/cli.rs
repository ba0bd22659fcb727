use crate::config::{Config, ConfigError};
use crate::scraper::{ScrapeOptions, SearchQuery, SITE_URL};
use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(
    name = "listing_scout",
    about = "Scrape Marktplaats search results and browse them in a dashboard"
)]
pub struct Cli {
    /// Without a subcommand, runs `scrape` with the default search
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk every result page and print each listing
    Scrape {
        #[command(flatten)]
        search: SearchArgs,

        /// Print the listings as JSON instead of one line each
        #[arg(long)]
        json: bool,
    },
    /// Scrape once, then serve the listings dashboard
    Serve {
        #[command(flatten)]
        search: SearchArgs,

        /// Address to listen on (default: LISTING_SCOUT_ADDR or 127.0.0.1:3000)
        #[arg(long)]
        addr: Option<SocketAddr>,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct SearchArgs {
    /// Full search URL to paginate
    #[arg(long, conflicts_with = "query")]
    pub url: Option<String>,

    /// Search terms, e.g. "solis espresso apparaat"
    #[arg(short, long)]
    pub query: Option<String>,

    /// Extra query parameter, repeatable (e.g. --filter postcode=1011AB)
    #[arg(long = "filter", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,

    /// Stop after this many result pages
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_pages: Option<u32>,

    /// Don't open listing pages to fill in missing details
    #[arg(long)]
    pub no_details: bool,
}

impl SearchArgs {
    pub fn search_query(&self, config: &Config) -> Result<SearchQuery, ConfigError> {
        let query = match (&self.query, &self.url) {
            (Some(terms), _) => SearchQuery::from_terms(SITE_URL, terms)
                .map_err(|e| ConfigError::invalid("--query", terms, e))?,
            (None, Some(url)) => {
                SearchQuery::from_url(url).map_err(|e| ConfigError::invalid("--url", url, e))?
            }
            (None, None) => SearchQuery::from_url(&config.search_url).map_err(|e| {
                ConfigError::invalid("LISTING_SCOUT_SEARCH_URL", &config.search_url, e)
            })?,
        };

        Ok(self
            .filters
            .iter()
            .fold(query, |q, (k, v)| q.with_filter(k.as_str(), v.as_str())))
    }

    pub fn scrape_options(&self) -> ScrapeOptions {
        ScrapeOptions {
            enrich_details: !self.no_details,
            max_pages: self.max_pages,
        }
    }
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected key=value, got {raw:?}")),
    }
}
