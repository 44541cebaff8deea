use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use flashcard_tools::{
    CipherConfig, ExtractConfig, IconConfig, ServerConfig,
    config,
    data::models::CipherError,
    features::{cipher, icons, vocab},
    server, utils,
};

#[derive(Parser)]
#[command(
    name = "flashcard-tools",
    version,
    about = "Local tooling for the flashcard PWA: dev server, vocabulary extraction, icons"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve static files and forward POST /api/* to the upstream API
    Serve {
        #[arg(long)]
        bind: Option<String>,
        #[arg(long)]
        static_dir: Option<PathBuf>,
        #[arg(long)]
        upstream: Option<String>,
    },
    /// Merge vocabulary from Markdown notes into the JSON list
    ExtractVocab {
        #[arg(long)]
        source_dir: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Render icon-192.png and icon-512.png
    Icons {
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Font tried before the system CJK fonts
        #[arg(long)]
        font: Option<PathBuf>,
    },
    /// Encrypt the vocabulary JSON for the PWA
    EncryptVocab {
        input: Option<PathBuf>,
        output: Option<PathBuf>,
    },
}

// Single-threaded runtime
#[tokio::main(flavor = "current_thread")]
async fn main() {
    config::load_dotenv();
    utils::init_logging();

    let cli = Cli::parse();
    if let Err(e) = run(cli.cmd).await {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(cmd: Command) -> anyhow::Result<()> {
    match cmd {
        Command::Serve { bind, static_dir, upstream } => {
            let mut cfg = ServerConfig::from_env();
            if let Some(bind) = bind {
                cfg.bind_addr = bind;
            }
            if let Some(dir) = static_dir {
                cfg.static_dir = dir;
            }
            if let Some(upstream) = upstream {
                cfg.upstream_base = upstream;
            }
            server::serve(cfg).await
        }
        Command::ExtractVocab { source_dir, output } => {
            let mut cfg = ExtractConfig::from_env();
            if let Some(dir) = source_dir {
                cfg.source_dir = dir;
            }
            if let Some(output) = output {
                cfg.output = output;
            }
            vocab::run_extraction(&cfg)
                .with_context(|| format!("Vocabulary extraction into {} failed", cfg.output.display()))?;
            Ok(())
        }
        Command::Icons { out_dir, font } => {
            let mut cfg = IconConfig::from_env();
            if let Some(dir) = out_dir {
                cfg.out_dir = dir;
            }
            if let Some(font) = font {
                cfg.font_candidates.insert(0, font);
            }
            icons::generate_icons(&cfg).context("Icon generation failed")?;
            Ok(())
        }
        Command::EncryptVocab { input, output } => {
            let mut cfg = CipherConfig::from_env();
            if let Some(input) = input {
                cfg.input = input;
            }
            if let Some(output) = output {
                cfg.output = output;
            }
            let key_hex = cfg.key_hex.as_deref().ok_or(CipherError::MissingKey)?;
            let key = cipher::parse_key(key_hex)?;
            cipher::encrypt_file(&cfg.input, &cfg.output, &key)?;
            Ok(())
        }
    }
}
