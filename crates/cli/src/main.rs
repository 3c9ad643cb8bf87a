//! Atelier CLI - scripted access to the storefront API.
//!
//! # Usage
//!
//! ```bash
//! # Exchange admin credentials for a token
//! atelier-cli login -e admin@shop.test -p secret
//!
//! # Catalog
//! atelier-cli products list
//! atelier-cli products remove 65f0a1
//!
//! # Orders (token from --token or ATELIER_TOKEN)
//! atelier-cli orders list --date 2024-05-02
//! atelier-cli orders status 65f0a1 "Out for Delivery"
//!
//! # Invoices and users
//! atelier-cli invoices search alice
//! atelier-cli invoices url 65f0a1
//! atelier-cli users list
//! ```
//!
//! # Environment Variables
//!
//! - `STORE_API_URL` - Base URL of the storefront REST API
//! - `ATELIER_TOKEN` - Admin token for authenticated commands
//! - `ATELIER_PASSWORD` - Password for `login`

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::time::Duration;

use atelier_admin::api::ApiClient;
use atelier_admin::config::StoreApiConfig;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use secrecy::SecretString;

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "atelier-cli")]
#[command(author, version, about = "Atelier storefront admin tools")]
struct Cli {
    /// Storefront API base URL
    #[arg(long, env = "STORE_API_URL", global = true, default_value = "http://localhost:4000")]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "STORE_API_TIMEOUT_SECS", global = true, default_value_t = 30)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

/// Admin token for authenticated commands.
#[derive(Args)]
struct TokenArg {
    #[arg(long, env = "ATELIER_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

impl TokenArg {
    fn require(self) -> Result<SecretString, CliError> {
        self.token
            .filter(|t| !t.trim().is_empty())
            .map(SecretString::from)
            .ok_or(CliError::MissingToken)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and print the admin token
    Login {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin password
        #[arg(short, long, env = "ATELIER_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Manage catalog products
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Inspect and advance orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
    /// Search invoices
    Invoices {
        #[command(subcommand)]
        action: InvoicesAction,
    },
    /// List registered customers
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List every product
    List,
    /// Delete a product
    Remove {
        /// Product id
        id: String,
        #[command(flatten)]
        token: TokenArg,
    },
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List orders, optionally only those placed on one day (UTC)
    List {
        /// Day in `YYYY-MM-DD` form
        #[arg(long)]
        date: Option<NaiveDate>,
        #[command(flatten)]
        token: TokenArg,
    },
    /// Move an order to a new status
    Status {
        /// Order id
        id: String,
        /// Status label, e.g. "Shipping"
        status: String,
        #[command(flatten)]
        token: TokenArg,
    },
}

#[derive(Subcommand)]
enum InvoicesAction {
    /// Invoices whose customer name or email contains TERM
    Search {
        /// Case-insensitive search term; omit to list all
        #[arg(default_value = "")]
        term: String,
    },
    /// Print the PDF download URL for an invoice
    Url {
        /// Invoice id
        id: String,
    },
}

#[derive(Subcommand)]
enum UsersAction {
    /// List every user
    List {
        #[command(flatten)]
        token: TokenArg,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atelier_cli=info,atelier_admin=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = StoreApiConfig::new(&cli.api_url, Duration::from_secs(cli.timeout))?;
    let api = ApiClient::new(&config)?;

    let lines = match cli.command {
        Commands::Login { email, password } => {
            commands::session::login(&api, &email, SecretString::from(password)).await?
        }
        Commands::Products { action } => match action {
            ProductsAction::List => commands::catalog::list(&api).await?,
            ProductsAction::Remove { id, token } => {
                commands::catalog::remove(&api, &token.require()?, id.into()).await?
            }
        },
        Commands::Orders { action } => match action {
            OrdersAction::List { date, token } => {
                commands::orders::list(&api, &token.require()?, date).await?
            }
            OrdersAction::Status { id, status, token } => {
                commands::orders::set_status(&api, &token.require()?, id.into(), &status).await?
            }
        },
        Commands::Invoices { action } => match action {
            InvoicesAction::Search { term } => commands::invoices::search(&api, &term).await?,
            InvoicesAction::Url { id } => commands::invoices::url(&api, &id.into())?,
        },
        Commands::Users { action } => match action {
            UsersAction::List { token } => commands::users::list(&api, &token.require()?).await?,
        },
    };

    commands::emit(&lines);
    Ok(())
}
