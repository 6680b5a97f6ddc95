use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{CustomType, Password, PasswordDisplayMode};
use tracing::warn;
use wardrobe_core::{
    Config, Coordinates, DirectResolver, Dispatcher, LocationInput, provider_from_config,
    recommend,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wardrobe", version, about = "Current weather and what to wear for it")]
pub struct Cli {
    /// Log debug output to stderr (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the weather provider access key and HTTP settings.
    Configure {
        /// Access key; prompted for when omitted.
        #[arg(long)]
        api_key: Option<String>,

        /// Request timeout in seconds; 0 uses the transport default.
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Show weather and an outfit for a place, e.g. "Dhaka, Bangladesh".
    Show {
        location: String,
    },

    /// Show weather and an outfit for a coordinate pair.
    Here {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },

    /// Suggest an outfit without contacting the weather provider.
    Outfit {
        /// Temperature in °C.
        #[arg(long, allow_negative_numbers = true)]
        temp: i32,

        /// Condition text, e.g. "Light rain".
        #[arg(long, default_value = "")]
        condition: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { api_key, timeout } => configure(api_key, timeout),
            Command::Show { location } => lookup(LocationInput::Search(location)).await,
            Command::Here { lat, lon } => {
                let coordinates = Coordinates::new(lat, lon)?;
                lookup(LocationInput::Device(coordinates)).await
            }
            Command::Outfit { temp, condition } => {
                print!("{}", render::outfit(&recommend(temp, &condition)));
                Ok(())
            }
        }
    }
}

fn configure(api_key: Option<String>, timeout: Option<u64>) -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = match api_key {
        Some(key) => key,
        None => Password::new("weatherstack access key:")
            .without_confirmation()
            .with_display_mode(PasswordDisplayMode::Masked)
            .prompt()
            .context("Failed to read access key")?,
    };
    config.set_api_key(api_key);

    let timeout = match timeout {
        Some(secs) => secs,
        None => CustomType::<u64>::new("HTTP timeout in seconds (0 = transport default):")
            .with_default(config.http.timeout_secs.unwrap_or(0))
            .prompt()
            .context("Failed to read timeout")?,
    };
    config.set_timeout_secs((timeout > 0).then_some(timeout));

    config.api_key()?;
    let path = config.save()?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}

async fn lookup(input: LocationInput) -> anyhow::Result<()> {
    let config = Config::load()?;
    let dispatcher = Dispatcher::new(provider_from_config(&config)?);

    let Some(result) = dispatcher.lookup_input(&DirectResolver, &input).await.into_current()
    else {
        warn!("lookup superseded before completion");
        return Ok(());
    };

    match result {
        Ok(report) => {
            print!("{}", render::report(&report));
            Ok(())
        }
        Err(err) => bail!("{}", err.message()),
    }
}
