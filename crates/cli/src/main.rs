//! SportShop CLI - interactive shop and one-shot commands.
//!
//! # Usage
//!
//! ```bash
//! # Interactive shop (registers first if no profile is stored)
//! sportshop
//!
//! # One-shot registration
//! sportshop register --name Ari --dob 2000-01-01 --country India \
//!     --email ari@example.com --phone "98765 43210" --sport Running --brand Nike
//!
//! # List products for the stored profile
//! sportshop products --query shoe --sort price-asc
//!
//! # Inspect or forget the stored profile
//! sportshop profile show
//! sportshop profile reset
//!
//! # Print the registration country list
//! sportshop --offline countries
//! ```
//!
//! # Commands
//!
//! - `shop` - Interactive shell (default)
//! - `register` - Register a shopper
//! - `products` - Print visible products
//! - `profile` - Show or reset the stored profile
//! - `countries` - Print the country list

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sportshop_core::SortMode;
use sportshop_storefront::{DEFAULT_LOG_FILTER, LogFormat, StorefrontConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "sportshop")]
#[command(author, version, about = "SportShop personalized sports store")]
struct Cli {
    /// Directory for stored data (overrides `SPORTSHOP_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Skip the country list fetch and use the built-in list
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive shop
    Shop,
    /// Register a shopper and store the profile
    Register {
        #[arg(long)]
        name: String,

        /// Date of birth, `YYYY-MM-DD`
        #[arg(long)]
        dob: String,

        #[arg(long)]
        country: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,

        /// Preferred sport (repeatable)
        #[arg(long = "sport")]
        sports: Vec<String>,

        /// Preferred brand (repeatable)
        #[arg(long = "brand")]
        brands: Vec<String>,
    },
    /// Print the products visible for the stored profile
    Products {
        /// Free-text search over name, brand and sport
        #[arg(long)]
        query: Option<String>,

        /// Brand filter (repeatable); defaults to the profile's brands
        #[arg(long = "brand")]
        brands: Vec<String>,

        /// Sport filter (repeatable); defaults to the profile's sports
        #[arg(long = "sport")]
        sports: Vec<String>,

        /// `personalized`, `price-asc`, `price-desc` or `name-asc`
        #[arg(long)]
        sort: Option<SortMode>,
    },
    /// Manage the stored profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Print the registration country list
    Countries,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Print the stored profile as JSON
    Show,
    /// Delete the stored profile
    Reset,
}

/// Initialize tracing to stderr. `RUST_LOG` overrides the default filter.
fn init_tracing(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::default());
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    init_tracing(config.log_format);

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, config).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, mut config: StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    config.countries.offline |= cli.offline;

    match cli.command.unwrap_or(Commands::Shop) {
        Commands::Shop => commands::shop::run(&config).await?,
        Commands::Register {
            name,
            dob,
            country,
            email,
            phone,
            sports,
            brands,
        } => {
            let form = sportshop_core::RegistrationForm {
                name,
                dob,
                country,
                email,
                phone,
                sports,
                brands,
            };
            commands::register::run(&config, &form)?;
        }
        Commands::Products {
            query,
            brands,
            sports,
            sort,
        } => {
            let request = commands::products::ProductsRequest {
                query,
                brands,
                sports,
                sort,
            };
            commands::products::run(&config, &request)?;
        }
        Commands::Profile { action } => match action {
            ProfileAction::Show => commands::profile::show(&config)?,
            ProfileAction::Reset => commands::profile::reset(&config)?,
        },
        Commands::Countries => commands::countries::run(&config).await?,
    }
    Ok(())
}
