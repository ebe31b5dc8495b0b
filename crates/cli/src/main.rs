use std::{io, sync::Arc, time::Duration};

use anyhow::{Result, anyhow, bail};
use clap::{Args, Parser, Subcommand};
use common::{
    auth::StaticToken,
    branch_form::{BranchField, BranchForm},
    models::SearchPage,
    network::{DEFAULT_API_URL, NetworkClient},
    notice::Notice,
    payment::{CardField, PaymentForm},
    services::{DEFAULT_PAGE_SIZE, Outcome, SearchParams},
};
use tabled::{
    Table, Tabled,
    settings::{Alignment, Color, Style, object::Rows},
};
use tracing_subscriber::EnvFilter;

fn print_table(rows: &[impl Tabled]) {
    if rows.is_empty() {
        println!("No entries");
    } else {
        let mut table = Table::new(rows);
        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Alignment::center());
        table.modify(Rows::first(), Color::FG_CYAN);
        println!("{}", table);
    }
}

fn print_page<R: Tabled>(outcome: Outcome<SearchPage<R>>) -> Result<()> {
    match outcome {
        Outcome::Success(page) => {
            print_table(&page.results);
            println!("Page {} of {}", page.current_page, page.total_pages);
            Ok(())
        }
        Outcome::ServerError => bail!("The server failed to answer the search"),
        Outcome::RequestError(_) => bail!("The server rejected the search"),
        Outcome::UnknownError => bail!("The search failed for an unknown reason"),
    }
}

fn report(notice: Notice) -> Result<()> {
    if notice.is_failure() {
        Err(anyhow!("{}", notice.message()))
    } else {
        println!("{}", notice.message());
        Ok(())
    }
}

/// Command line front end for the retail management api
#[derive(Debug, Parser)]
#[command(name = "Retail Cli")]
#[command(version = "0.1.0")]
#[command(about = "Search products and store branches, register branches and take payments", long_about = None)]
struct Cli {
    /// Base url of the api
    #[arg(long, env = "RETAIL_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
    /// Session token for mutating calls
    #[arg(long, env = "RETAIL_API_TOKEN", hide_env_values = true)]
    token: Option<String>,
    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Args)]
struct SearchArgs {
    #[arg(default_value = "")]
    keyword: String,
    #[arg(short, long, default_value_t = 1)]
    page: u32,
    #[arg(short, long, default_value_t = DEFAULT_PAGE_SIZE)]
    max_results: u32,
}

impl From<SearchArgs> for SearchParams {
    fn from(value: SearchArgs) -> Self {
        SearchParams::new(value.keyword, value.max_results, value.page)
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    Products(SearchArgs),
    Branches(SearchArgs),
    CreateBranch {
        name: String,
        address: String,
        #[arg(allow_hyphen_values = true)]
        latitude: String,
        #[arg(allow_hyphen_values = true)]
        longitude: String,
        opening_hours: String,
        closing_hours: String,
    },
    /// Fields are masked the same way the console masks keystrokes
    Pay {
        card_number: String,
        card_name: String,
        expiration: String,
        cvv: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("retail_cli=info,common=warn")),
        )
        .init();

    let args = Cli::parse();

    let network = NetworkClient::http(
        &args.api_url,
        Arc::new(StaticToken::new(args.token)),
        args.timeout.map(Duration::from_secs),
    )?;

    match args.command {
        Commands::Products(search) => {
            print_page(network.search_products(&search.into()).await?)?;
        }
        Commands::Branches(search) => {
            print_page(network.search_store_branches(&search.into()).await?)?;
        }
        Commands::CreateBranch {
            name,
            address,
            latitude,
            longitude,
            opening_hours,
            closing_hours,
        } => {
            let mut form = BranchForm::new();
            form.input(BranchField::Name, name);
            form.input(BranchField::Address, address);
            form.input(BranchField::Latitude, latitude);
            form.input(BranchField::Longitude, longitude);
            form.input(BranchField::OpeningHours, opening_hours);
            form.input(BranchField::ClosingHours, closing_hours);

            let pending = form.begin_submit()?;
            let result = network
                .register_store_branch(&pending)
                .await
                .map(|outcome| {
                    if let Outcome::Success(Some(created)) = &outcome {
                        print_table(std::slice::from_ref(created));
                    }
                    outcome.kind()
                })
                .map_err(|e| format!("{:#}", e));
            report(form.finish_submit(result))?;
        }
        Commands::Pay {
            card_number,
            card_name,
            expiration,
            cvv,
        } => {
            let mut form = PaymentForm::new();
            form.input(CardField::Number, &card_number);
            form.input(CardField::Name, &card_name);
            form.input(CardField::Expiration, &expiration);
            form.input(CardField::Cvv, &cvv);

            let payment = form.begin_submit()?;
            let result = network
                .submit_payment(&payment)
                .await
                .map(|outcome| outcome.kind())
                .map_err(|e| format!("{:#}", e));
            report(form.finish_submit(result))?;
        }
    }

    Ok(())
}
