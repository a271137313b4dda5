//! `storefront` - browse marketplace products from the command line.

use clap::Parser;
use shared::{format_price, ProductSortBy};
use std::process::ExitCode;
use storefront::config::{install_config, ClientConfig};
use storefront::debug;
use storefront::paging::{ApplyResult, LoadStatus, PagedCollectionLoader, Pager, QueryParameters};
use storefront::services::api::ApiClient;
use storefront::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    App(#[from] AppError),

    /// First page failed; the message is already the error's display text.
    #[error("{0}")]
    InitialLoad(String),
}

#[derive(Parser, Debug)]
#[command(name = "storefront", version, about = "Browse marketplace products page by page")]
struct Args {
    /// Only products in this category id
    #[arg(long)]
    category: Option<String>,

    #[arg(long)]
    min_price: Option<f64>,

    #[arg(long)]
    max_price: Option<f64>,

    /// Minimum commission rate (percent)
    #[arg(long)]
    min_commission: Option<f64>,

    /// Free-text search
    #[arg(long)]
    search: Option<String>,

    /// relevance, price_asc, price_desc, commission, rating, sales, recent, popular
    #[arg(long, default_value = "relevance", value_parser = parse_sort)]
    sort: ProductSortBy,

    /// How many pages to walk
    #[arg(long, default_value_t = 1)]
    pages: u32,

    /// Items per page (overrides STOREFRONT_PAGE_SIZE)
    #[arg(long)]
    page_size: Option<u32>,
}

fn parse_sort(s: &str) -> std::result::Result<ProductSortBy, String> {
    s.parse()
}

impl Args {
    fn query(&self) -> QueryParameters {
        QueryParameters::new()
            .with_category(self.category.clone())
            .with_price_range(self.min_price, self.max_price)
            .with_min_commission(self.min_commission)
            .with_search(self.search.clone())
            .with_sort(self.sort)
    }

    /// Apply command-line overrides to the environment configuration.
    fn apply_overrides(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        config
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    debug::init();

    let args = Args::parse();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "storefront failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<(), CliError> {
    let config = install_config(args.apply_overrides(ClientConfig::from_env()?))?;
    let params = args.query();

    let client = ApiClient::new(&config)?;
    let loader = PagedCollectionLoader::new(client, config.page_size)?;
    let pager = Pager::new(loader, params)?;

    tracing::info!(
        api = %config.api_base_url,
        page_size = config.page_size,
        pages = args.pages,
        "Loading products"
    );

    if let ApplyResult::Failed = pager.refresh().await {
        return Err(initial_load_error(pager.snapshot().status));
    }

    let mut pages_loaded = 1;
    while pages_loaded < args.pages {
        match pager.load_next().await {
            Some(ApplyResult::Applied { .. }) => pages_loaded += 1,
            Some(ApplyResult::Failed) => {
                if let LoadStatus::Error { message, .. } = pager.snapshot().status {
                    eprintln!("Warning: page {} failed: {}", pages_loaded + 1, message);
                }
                break;
            }
            Some(ApplyResult::Discarded) | None => break,
        }
    }

    let snapshot = pager.snapshot();
    for (index, product) in snapshot.items.iter().enumerate() {
        let discount = product
            .discount_percentage()
            .map(|d| format!(" (-{}%)", d))
            .unwrap_or_default();
        println!(
            "{:>4}. {:<40} {:>12}{}  commission {}",
            index + 1,
            product.name,
            format_price(product.selling_price, &product.currency),
            discount,
            format_price(product.estimated_commission(), &product.currency),
        );
    }

    let filtered = if pager.params().has_filters() { " (filtered)" } else { "" };
    let more = if snapshot.next_key.is_some() { ", more available" } else { "" };
    println!(
        "\n{} products{} from {} page(s), sorted by {}{}",
        snapshot.items.len(),
        filtered,
        pages_loaded,
        args.sort,
        more
    );

    Ok(())
}

fn initial_load_error(status: LoadStatus) -> CliError {
    match status {
        LoadStatus::Error { message, .. } => CliError::InitialLoad(message),
        other => CliError::InitialLoad(format!("initial load ended in state {:?}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_build_query() {
        let args = Args::parse_from([
            "storefront",
            "--search",
            "  lamp ",
            "--min-price",
            "5",
            "--sort",
            "newest",
        ]);
        let query = args.query();
        assert_eq!(query.search.as_deref(), Some("lamp"));
        assert_eq!(query.min_price, Some(5.0));
        assert_eq!(query.sort_by, ProductSortBy::Recent);
        assert_eq!(args.pages, 1);
    }

    #[test]
    fn test_rejects_unknown_sort() {
        assert!(Args::try_parse_from(["storefront", "--sort", "cheapest"]).is_err());
    }

    #[test]
    fn test_page_size_override_replaces_env_value() {
        let from_env = ClientConfig { page_size: 500, ..ClientConfig::default() };
        assert!(from_env.validate().is_err());

        let args = Args::parse_from(["storefront", "--page-size", "50"]);
        let config = args.apply_overrides(from_env.clone());
        assert_eq!(config.page_size, 50);
        assert!(config.validate().is_ok());

        let args = Args::parse_from(["storefront"]);
        assert_eq!(args.apply_overrides(from_env).page_size, 500);
    }

    #[test]
    fn test_initial_load_error_keeps_message() {
        let status = LoadStatus::Error {
            kind: storefront::paging::LoadKind::Refresh,
            message: "Network error: connection refused".to_string(),
        };
        assert_eq!(initial_load_error(status).to_string(), "Network error: connection refused");
    }
}
