// PawMart command-line front end

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pawmart_client::{decode_listings, BackendClient};
use pawmart_core::access::{authorize_path, menu_for, Role};
use pawmart_core::listings::{
    filter_and_sort, is_adoption, price_label, Listing, ListingPage, ListingQuery,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "pawmart", about = "Browse PawMart listings and check route access")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search, filter and page through listings
    Browse {
        /// Read listings from a JSON file instead of the backend
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long, default_value = "")]
        search: String,
        /// Pets, "Pet Food", Accessories, "Pet Care Products" (anything else means all)
        #[arg(long, default_value = "")]
        category: String,
        /// any, free, low, mid, high
        #[arg(long, default_value = "any")]
        price: String,
        /// newest, oldest, priceAsc, priceDesc, nameAsc
        #[arg(long, default_value = "newest")]
        sort: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },
    /// Decide whether a role may open a path
    Access {
        #[arg(long)]
        role: String,
        #[arg(long)]
        path: String,
        #[arg(long)]
        json: bool,
    },
    /// Show the dashboard menu a role would see
    Menu {
        #[arg(long)]
        role: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pawmart_core=debug,pawmart_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Browse {
            file,
            search,
            category,
            price,
            sort,
            page,
            json,
        } => {
            let listings = load_listings(file).await?;
            let query = ListingQuery::from_params(&search, &category, &price, &sort, page);
            let result = filter_and_sort(&listings, &query);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_page(&result, &query);
            }
        }
        Command::Access { role, path, json } => {
            let role = Role::from_session(&role);
            let decision = authorize_path(role, &path);

            if json {
                println!("{}", serde_json::to_string_pretty(&decision)?);
            } else if decision.allowed {
                println!("{} {} may open {}", "ALLOW".green().bold(), role.label(), path);
            } else {
                let redirect = decision.redirect_to.map(|r| r.path()).unwrap_or("-");
                let reason = decision
                    .reason
                    .map(|r| format!("{r:?}"))
                    .unwrap_or_default();
                println!(
                    "{} {} may not open {} ({}, needs {}) -> {}",
                    "DENY".red().bold(),
                    role.label(),
                    path,
                    reason,
                    decision.required,
                    redirect
                );
            }
        }
        Command::Menu { role } => {
            let role = Role::from_session(&role);
            let sections = menu_for(role);
            println!("{} {}", "Dashboard for".dimmed(), role.label().bold());
            if sections.is_empty() {
                println!("{}", "No dashboard for guests".dimmed());
            }
            for section in sections {
                println!("{}", section.kind.title().bold());
                for item in section.items {
                    println!("  {:<16} {}", item.label, item.to.dimmed());
                }
            }
        }
    }

    Ok(())
}

async fn load_listings(file: Option<PathBuf>) -> Result<Vec<Listing>> {
    if let Some(path) = file {
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let records: Vec<serde_json::Value> = serde_json::from_str(&raw)
            .with_context(|| format!("{} is not a JSON array", path.display()))?;
        let listings = decode_listings(records);
        tracing::info!(count = listings.len(), path = %path.display(), "Loaded listings from file");
        return Ok(listings);
    }

    let config = Config::from_env().context("Failed to load configuration")?;
    let client = BackendClient::with_timeout(&config.api_url, config.http_timeout)
        .context("Failed to build backend client")?;

    client
        .fetch_listings()
        .await
        .with_context(|| format!("Failed to fetch listings from {}", config.api_url))
}

fn print_page(page: &ListingPage, query: &ListingQuery) {
    if page.is_empty() {
        println!("{}", "No results found. Try adjusting your filters.".dimmed());
    }

    for listing in &page.items {
        let badge = if is_adoption(listing) {
            " [Adoption]".magenta().to_string()
        } else {
            String::new()
        };
        println!(
            "{:<28} {:<18} {:>10}{}",
            listing.name.bold(),
            listing.category.label(),
            price_label(listing.price),
            badge
        );
    }

    println!();
    println!(
        "Page {} of {} ({} matches, {}, {})",
        page.page,
        page.total_pages.max(1),
        page.total_matches,
        query.price_bucket.label(),
        query.sort_key.label()
    );
    if page.is_out_of_range() {
        println!(
            "{}",
            format!(
                "Page {} is past the end; try --page {}",
                page.page,
                page.total_pages.max(1)
            )
            .yellow()
        );
    }
}
