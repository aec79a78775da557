//! Vistoria command-line driver
//!
//! Runs the headless application core against a live gateway. Each
//! subcommand drives the same screen controller a mobile frontend would,
//! with alerts printed to the terminal and navigation logged.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vistoria_app::AppConfig;
use vistoria_core::{CategoriaVistoria, TipoVistoria};

mod effects;
mod handlers;

#[derive(Parser)]
#[command(name = "vistoria")]
#[command(about = "Vistoria - field inspection client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, default_value = "vistoria.toml")]
    config: PathBuf,

    /// Override the gateway base URL
    #[arg(long, global = true)]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or upgrade the local database
    Migrate,

    /// Check credentials against the built-in account
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Client operations
    #[command(subcommand)]
    Clients(ClientsCommand),

    /// Inspection operations
    #[command(subcommand)]
    Vistorias(VistoriasCommand),
}

#[derive(Subcommand)]
pub enum ClientsCommand {
    /// List clients, optionally filtered
    List {
        /// Case-insensitive search over name, email and phone
        #[arg(short, long)]
        search: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Register a client
    Add {
        #[arg(long)]
        nome: String,

        #[arg(long)]
        email: String,

        /// Any formatting; only digits are sent
        #[arg(long)]
        telefone: String,
    },
}

#[derive(Subcommand)]
pub enum VistoriasCommand {
    /// List inspections, optionally filtered
    List {
        /// Case-insensitive search over observation, anomaly and category
        #[arg(short, long)]
        search: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Show one inspection
    Show { id: i64 },

    /// Register an inspection and upload its photos
    New {
        /// ENDOGENA, EXOGENA or FUNCIONAL
        #[arg(long, value_parser = parse_tipo)]
        tipo: TipoVistoria,

        /// ALTA, MEDIA or BAIXA
        #[arg(long, value_parser = parse_categoria)]
        categoria: CategoriaVistoria,

        /// Anomaly id; flags the inspection
        #[arg(long)]
        anomalia: Option<i64>,

        #[arg(long)]
        observacao: String,

        /// Photo URI, repeatable
        #[arg(long = "foto")]
        fotos: Vec<String>,
    },

    /// Edit an inspection
    Edit {
        id: i64,

        #[arg(long)]
        observacao: Option<String>,

        #[arg(long, value_parser = parse_tipo)]
        tipo: Option<TipoVistoria>,

        #[arg(long, value_parser = parse_categoria)]
        categoria: Option<CategoriaVistoria>,

        #[arg(long)]
        anomalia: Option<i64>,
    },
}

fn parse_tipo(raw: &str) -> Result<TipoVistoria, String> {
    TipoVistoria::parse(raw)
        .ok_or_else(|| format!("unknown tipo {raw}, expected ENDOGENA, EXOGENA or FUNCIONAL"))
}

fn parse_categoria(raw: &str) -> Result<CategoriaVistoria, String> {
    CategoriaVistoria::parse(raw)
        .ok_or_else(|| format!("unknown categoria {raw}, expected ALTA, MEDIA or BAIXA"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, source) = AppConfig::load_with_source(&cli.config)?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }

    let log_level = if cli.verbose {
        "debug".to_string()
    } else {
        config.log_level.clone()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        path = %cli.config.display(),
        source = source.as_str(),
        api_url = %config.api_url,
        "configuration loaded"
    );
    config.validate()?;
    let store = handlers::migrate::open_store(&config)?;

    match cli.command {
        Commands::Migrate => {
            handlers::migrate::report(&store)?;
        }

        Commands::Login { email, password } => {
            let app = handlers::build_app(&config)?;
            handlers::login::run(&app, email, password).await?;
        }

        Commands::Clients(cmd) => {
            let app = handlers::build_app(&config)?;
            handlers::clients::run(&app, cmd).await?;
        }

        Commands::Vistorias(cmd) => {
            let app = handlers::build_app(&config)?;
            handlers::vistorias::run(&app, cmd).await?;
        }
    }

    Ok(())
}
