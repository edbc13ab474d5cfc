//! Firefly CLI - record transactions in a Firefly III server

mod commands;
mod config;
mod error;
mod form;

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use firefly_definitions::accounts::AccountTypeFilter;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use commands::transaction::{self, Flow};
use config::{API_KEY_ENV, BASE_URL_ENV, Settings};
use error::CliError;
use form::TransactionForm;

#[derive(Parser)]
#[command(name = "firefly")]
#[command(about = "Record withdrawals, deposits and transfers in Firefly III", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    log_verbosity: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json: bool,

    /// API root of the server, including its path (e.g. https://firefly.example.com/api)
    #[arg(long, env = BASE_URL_ENV, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Personal access token
    #[arg(long, env = API_KEY_ENV, global = true, hide_env_values = true, value_name = "TOKEN")]
    api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30, value_name = "SECS")]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record money leaving an asset account for an expense account
    Withdraw(TransactionArgs),

    /// Record money arriving in an asset account from a revenue account
    Deposit(TransactionArgs),

    /// Move money between two asset accounts
    Transfer(TransactionArgs),

    /// List accounts as id and name
    Accounts {
        /// Account type to list
        #[arg(short = 't', long = "type", default_value = "asset", value_name = "TYPE")]
        kind: AccountTypeFilter,
    },

    /// Suggest transaction descriptions starting from INPUT
    Suggest {
        #[arg(value_name = "INPUT")]
        input: String,
    },

    /// Show server version information
    About,
}

#[derive(Args)]
struct TransactionArgs {
    /// What the transaction was for
    #[arg(short, long, default_value = "")]
    description: String,

    /// Account the money comes from (name or id)
    #[arg(short, long, default_value = "")]
    source: String,

    /// Account the money goes to (name or id)
    #[arg(short, long, default_value = "")]
    target: String,

    /// Amount, e.g. 12.50
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    amount: String,

    /// Booking date (RFC 3339 or YYYY-MM-DD) [default: now]
    #[arg(long, value_parser = transaction::parse_date)]
    date: Option<String>,
}

impl TransactionArgs {
    fn into_form(self) -> (TransactionForm, Option<String>) {
        let form = TransactionForm {
            description: self.description,
            source: self.source,
            target: self.target,
            amount: self.amount,
        };
        (form, self.date)
    }
}

/// Initialize tracing subscriber based on verbosity and output format
fn init_tracing(verbose: u8, json: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            // -v: one line per request
            1 => "warn,firefly=info,firefly_client=info".to_string(),
            2 => "info,firefly=debug,firefly_client=debug".to_string(),
            _ => "debug,firefly=trace,firefly_client=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_thread_ids(false)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let settings = || {
        Settings::resolve(
            cli.base_url.as_deref(),
            cli.api_key.as_deref(),
            Duration::from_secs(cli.timeout),
        )
    };

    match cli.command {
        Commands::Withdraw(args) => submit(Flow::Withdraw, args, settings).await,
        Commands::Deposit(args) => submit(Flow::Deposit, args, settings).await,
        Commands::Transfer(args) => submit(Flow::Transfer, args, settings).await,
        Commands::Accounts { kind } => {
            let client = settings()?.client()?;
            commands::accounts::run(&client, kind).await
        }
        Commands::Suggest { input } => {
            let client = settings()?.client()?;
            commands::suggest::run(&client, &input).await
        }
        Commands::About => {
            let client = settings()?.client()?;
            commands::about::run(&client).await
        }
    }
}

/// Validates the form before the settings so bad input never reaches the network.
async fn submit(
    flow: Flow,
    args: TransactionArgs,
    settings: impl FnOnce() -> Result<Settings, CliError>,
) -> Result<(), CliError> {
    let (form, date) = args.into_form();
    form.validate()?;
    let client = settings()?.client()?;
    transaction::submit(&client, flow, &form, date).await
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_verbosity, cli.json);

    tracing::debug!("Firefly CLI starting");

    if let Err(e) = run(cli).await {
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }
}
