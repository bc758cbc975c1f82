use std::cell::RefCell;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ticker_predict::platform::cli::{EndpointConfig, detect_endpoint};
use ticker_predict::{
    FormView, PredictionRequest, ReqwestPredictionService, SubmissionHandler, Ticker,
};

#[derive(Parser)]
#[command(name = "ticker-predict")]
#[command(about = "Ask a prediction endpoint for the next price of a ticker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Prediction endpoint URL (overrides $TICKER_PREDICT_ENDPOINT and Predict.toml)
    #[arg(long, global = true)]
    endpoint: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit one ticker and print the result
    Predict {
        /// Ticker symbol, e.g. AAPL
        ticker: String,
    },

    /// Read one ticker per line from stdin and submit each
    Form,

    /// Send the request and dump the raw response
    Raw {
        /// Ticker symbol, e.g. AAPL
        ticker: String,
    },

    /// Show which endpoint would be used and where it came from
    Config,
}

/// Prints every display update on its own line.
#[derive(Default)]
struct TerminalView {
    input: RefCell<String>,
}

impl TerminalView {
    fn fill(&self, input: &str) {
        *self.input.borrow_mut() = input.to_owned();
    }
}

impl FormView for TerminalView {
    fn ticker_input(&self) -> String {
        self.input.borrow().clone()
    }

    fn show_result(&self, text: &str) {
        println!("{}", text);
    }
}

fn main() -> Result<()> {
    // Display text goes to stdout; keep logs quiet unless RUST_LOG asks
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = match cli.endpoint {
        Some(url) => EndpointConfig::explicit(url),
        None => detect_endpoint(),
    };
    log::debug!("endpoint {} ({})", config.url, config.source);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    match cli.command {
        Commands::Predict { ticker } => {
            let handler = SubmissionHandler::new(
                ReqwestPredictionService::new(&config.url),
                TerminalView::default(),
            );
            handler.view().fill(&ticker);
            match rt.block_on(handler.submit()) {
                Some(outcome) if outcome.is_price() => {}
                Some(_) => std::process::exit(1),
                None => {
                    eprintln!("Nothing to predict: ticker is empty");
                    std::process::exit(2);
                }
            }
        }

        Commands::Form => {
            let handler = SubmissionHandler::new(
                ReqwestPredictionService::new(&config.url),
                TerminalView::default(),
            );
            let stdin = io::stdin();
            prompt()?;
            for line in stdin.lock().lines() {
                let line = line.context("Failed to read ticker from stdin")?;
                handler.view().fill(&line);
                rt.block_on(handler.submit());
                prompt()?;
            }
        }

        Commands::Raw { ticker } => {
            let Some(ticker) = Ticker::parse(&ticker) else {
                eprintln!("Nothing to predict: ticker is empty");
                std::process::exit(2);
            };
            let service = ReqwestPredictionService::new(&config.url);
            let reply = rt.block_on(service.probe(&PredictionRequest::new(&ticker)))?;

            println!("HTTP {}", reply.status);
            match reply.json() {
                Some(json) => println!("{}", serde_json::to_string_pretty(&json)?),
                None => println!(
                    "Failed to decode JSON. Response content: {}",
                    reply.body
                ),
            }
        }

        Commands::Config => {
            println!("Endpoint: {}", config.url);
            println!("Source: {}", config.source);
        }
    }

    Ok(())
}

fn prompt() -> Result<()> {
    print!("ticker> ");
    io::stdout().flush().context("Failed to flush stdout")
}
