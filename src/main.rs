use crate::cli::{Cli, Commands, SearchArgs};
use crate::config::Config;
use crate::domain::catalog::Catalog;
use crate::router::handle;
use crate::scraper::{HttpSource, MarktplaatsScraper};
use anyhow::Context;
use astra::Server;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

mod cli;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod scraper;
mod templates;

#[cfg(test)]
mod tests;

fn main() -> anyhow::Result<()> {
    // stdout carries the listings, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        None => scrape(&config, &SearchArgs::default(), false),
        Some(Commands::Scrape { search, json }) => scrape(&config, &search, json),
        Some(Commands::Serve { search, addr }) => {
            serve(&config, &search, addr.unwrap_or(config.bind_addr))
        }
    }
}

fn build_scraper(
    config: &Config,
    search: &SearchArgs,
) -> anyhow::Result<MarktplaatsScraper<HttpSource>> {
    let source = HttpSource::new(&config.user_agent, config.timeout)?;
    Ok(MarktplaatsScraper::new(source, search.scrape_options()))
}

fn scrape(config: &Config, search: &SearchArgs, json: bool) -> anyhow::Result<()> {
    let query = search.search_query(config)?;
    let scraper = build_scraper(config, search)?;

    if json {
        let summary = scraper.fetch_all(&query).context("scrape failed")?;
        info!(
            "✅ Scraped {} listings from {} pages",
            summary.listings.len(),
            summary.pages_fetched
        );
        serde_json::to_writer_pretty(std::io::stdout().lock(), &summary.listings)?;
        println!();
        return Ok(());
    }

    let mut total = 0;
    for listing in scraper.listings(&query) {
        let listing = listing.context("scrape failed")?;
        println!("{} - {} - {}", listing.title, listing.price, listing.url);
        total += 1;
    }
    println!("Total products scraped: {total}");

    Ok(())
}

fn serve(config: &Config, search: &SearchArgs, addr: SocketAddr) -> anyhow::Result<()> {
    let query = search.search_query(config)?;
    let scraper = build_scraper(config, search)?;

    let summary = scraper.fetch_all(&query).context("scrape failed")?;
    info!(
        "✅ Scraped {} listings from {} pages",
        summary.listings.len(),
        summary.pages_fetched
    );

    let catalog = Arc::new(Catalog::new(summary.listings));

    info!("Starting server at http://{addr}");
    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &catalog) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
        return Err(e.into());
    }

    info!("Server shut down cleanly.");
    Ok(())
}
