//! CLI frontend for Celestial Hand.

mod commands;

use std::net::SocketAddr;
use std::process;

use clap::{Parser, Subcommand};

use ch_core::Language;

#[derive(Parser)]
#[command(
    name = "ch",
    about = "Celestial Hand: tarot readings from the aether",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the fortune HTTP API
    Serve {
        /// Address to listen on
        #[arg(short, long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,

        /// Pause before fallback answers, in milliseconds
        #[arg(long, default_value = "0")]
        thinking_ms: u64,
    },

    /// Ask for a single fortune
    Fortune {
        /// Card name (English or Chinese)
        card: String,

        /// Reading language: en or zh
        #[arg(short, long, default_value = "en")]
        lang: Language,

        /// RNG seed for reproducible fallback fortunes
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// List the cards in the deck
    Cards,

    /// Start an interactive reveal session
    Reveal {
        /// Reading language: en or zh
        #[arg(short, long, default_value = "en")]
        lang: Language,

        /// Base URL of a running server (default: answer in process)
        #[arg(long)]
        server: Option<String>,

        /// Seconds to wait for the server before showing the placeholder
        #[arg(long, default_value = "30")]
        timeout_secs: u64,

        /// RNG seed for reproducible draws
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { addr, thinking_ms } => commands::serve::run(addr, thinking_ms).await,
        Commands::Fortune { card, lang, seed } => commands::fortune::run(&card, lang, seed).await,
        Commands::Cards => commands::cards::run(),
        Commands::Reveal {
            lang,
            server,
            timeout_secs,
            seed,
        } => commands::reveal::run(lang, server.as_deref(), timeout_secs, seed).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
