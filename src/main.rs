use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
#[cfg(feature = "web")]
use tracing::info;

#[cfg(feature = "web")]
use hudsum::config::Config;
use hudsum::digest::{self, KeywordSummarizer, Summarizer};
use hudsum::output::terminal;

/// hudsum: keyword digests of live speech for heads-up displays.
///
/// Reduces an utterance (Korean, English, or mixed) to a single short line
/// of its most telling keywords.
#[derive(Parser)]
#[command(name = "hudsum", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize text into one display line
    Summarize {
        /// Text to summarize (reads stdin when omitted)
        text: Option<String>,

        /// Print only the summary line
        #[arg(long)]
        plain: bool,
    },

    /// List the top keywords of a text
    Keywords {
        /// Text to analyze (reads stdin when omitted)
        text: Option<String>,

        /// Number of keywords to show (default: 6)
        #[arg(long, default_value = "6")]
        top_k: usize,

        /// Show counts and scores
        #[arg(long)]
        scores: bool,
    },

    /// Serve the host platform webhook API
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (overrides HUDSUM_BIND)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging on stderr so summaries can be piped
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hudsum=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summarize { text, plain } => {
            let text = text_or_stdin(text)?;
            let summary = KeywordSummarizer::default().summarize(&text);
            if plain {
                println!("{summary}");
            } else {
                terminal::display_summary(&text, &summary);
            }
        }

        Commands::Keywords {
            text,
            top_k,
            scores,
        } => {
            let text = text_or_stdin(text)?;
            let mut ranked = digest::score_keywords(&text);
            ranked.truncate(top_k);
            terminal::display_keywords(&ranked, scores);
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let mut config = Config::load()?;
            config.require_package_name()?;
            config.require_api_key()?;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind = bind;
            }

            info!(
                port = config.port,
                echo = config.display.echo_transcript,
                "Starting hudsum server"
            );
            hudsum::web::run_server(config).await?;
        }
    }

    Ok(())
}

/// Use the argument if given, otherwise read all of stdin.
fn text_or_stdin(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            Ok(buf)
        }
    }
}
