use anyhow::Result;
use std::{fs, io, path::PathBuf, str::FromStr, sync::Arc, time::Duration};
use tracing::info;

use app::App;
use clap::Parser;
use common::{auth::StaticToken, network::NetworkClient};
use iced::Theme;
use settings::keymap::{Config, DEFAULT_CONFIG};
use tracing_subscriber::EnvFilter;

mod app;
mod branch_form;
mod icons;
mod listing;
mod payment;
mod settings;

const DARK_THEME: Theme = Theme::TokyoNight;
const LIGHT_THEME: Theme = Theme::Light;

#[derive(Parser, Debug)]
#[command(
    version,
    name = "Retail Console",
    about = "Administrative console for products, store branches and payments."
)]
struct Args {
    #[arg(long, short)]
    config: Option<PathBuf>,
    /// Overrides the config file's SetServer
    #[arg(long, env = "RETAIL_API_URL")]
    api_url: Option<String>,
    #[arg(long, env = "RETAIL_API_TOKEN", hide_env_values = true)]
    token: Option<String>,
    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stdout)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("retail_gui=info,common=info")),
        )
        .init();

    let args = Args::parse();
    let source = match &args.config {
        Some(p) => fs::read_to_string(p)?,
        None => DEFAULT_CONFIG.to_string(),
    };
    // Parsed once up front so a broken file is reported before the window opens.
    let config = Config::from_str(&source)?;

    let api_url = args
        .api_url
        .or(config.server.clone())
        .unwrap_or_else(|| common::network::DEFAULT_API_URL.to_string());
    info!("Using api at {}", api_url);
    let network = Arc::new(NetworkClient::http(
        &api_url,
        Arc::new(StaticToken::new(args.token)),
        args.timeout.map(Duration::from_secs),
    )?);

    iced::application(
        move || {
            let config = Config::from_str(&source).unwrap_or_else(|_| Config::new());
            App::boot(config, network.clone())
        },
        App::update,
        App::view,
    )
    .antialiasing(true)
    .window_size((1200.0, 800.0))
    .theme(theme)
    .subscription(App::subscription)
    .title("Retail Console")
    .run()?;

    Ok(())
}

pub fn theme(app: &App) -> Theme {
    match app.dark_mode {
        true => DARK_THEME,
        false => LIGHT_THEME,
    }
}
