//! Thin glue binary: parse one customer input and route it against a
//! warehouse fixture.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use shiproute_core::{load_warehouses, Carrier};
use shiproute_parser::{normalize_customer, parse_customer_input, validate_customer};
use shiproute_router::route_order;

#[derive(Debug, Parser)]
#[command(name = "shiproute")]
#[command(about = "Parse customer text and route orders to a shipping platform")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse and normalize one customer input, printing the record as JSON.
    Parse {
        /// Raw customer text; read from stdin when omitted.
        text: Vec<String>,
    },
    /// Parse, normalize, and route one order against the warehouse fixture.
    Route {
        /// Path to the warehouse fixture file.
        #[arg(
            long,
            env = "SHIPROUTE_WAREHOUSES",
            default_value = "config/warehouses.yaml"
        )]
        warehouses: PathBuf,
        /// Explicit carrier selection applied after routing (FEDEX, UPS, DHL, USPS).
        #[arg(long)]
        carrier: Option<String>,
        /// Raw customer text; read from stdin when omitted.
        text: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Parse { text } => {
            let customer = parse_input(&text)?;
            println!("{}", serde_json::to_string_pretty(&customer)?);
        }
        Commands::Route {
            warehouses,
            carrier,
            text,
        } => {
            let customer = parse_input(&text)?;

            for warning in validate_customer(&customer) {
                tracing::warn!(%warning, "customer data incomplete");
            }

            let fixture = load_warehouses(&warehouses)
                .with_context(|| format!("loading warehouse fixture {}", warehouses.display()))?;

            let mut decision = route_order(&customer, &fixture.warehouses);
            if let Some(code) = carrier {
                let selected = Carrier::parse(&code)
                    .with_context(|| format!("unknown carrier override '{code}'"))?;
                decision = decision.with_override(selected);
            }

            println!("{}", serde_json::to_string_pretty(&decision)?);
        }
    }

    Ok(())
}

/// Join CLI words, or read stdin when none were given, then parse and
/// normalize.
fn parse_input(text: &[String]) -> anyhow::Result<shiproute_core::CustomerRecord> {
    let raw = if text.is_empty() {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("reading customer text from stdin")?;
        buffer
    } else {
        text.join(" ")
    };

    let Some(customer) = parse_customer_input(&raw) else {
        bail!("could not extract a customer record from the input");
    };
    Ok(normalize_customer(customer))
}
