use std::io::{self, Write};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use transit_server::logging::init_logging;
use transit_server::requests::{
    RequestDocument, RequestError, build_catalogue, load_document, process_document,
    read_document,
};
use transit_server::web::{AppState, create_router};

#[derive(Parser, Debug)]
#[command(version, about = "Bus network statistics and journey planning")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Answer the stat requests of a JSON document and print the responses.
    Process {
        /// Request document; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Load the network from a JSON document and serve queries over HTTP.
    Serve {
        /// Request document holding the network and routing settings
        #[arg(long)]
        input: PathBuf,

        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Process { input } => process(input),
        Command::Serve { input, addr } => serve(input, addr).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn process(input: Option<PathBuf>) -> Result<(), RequestError> {
    let document = match input {
        Some(path) => load_document(&path)?,
        None => read_document(io::stdin().lock())?,
    };
    let responses = process_document(&document)?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &responses)?;
    writeln!(stdout)?;
    Ok(())
}

async fn serve(input: PathBuf, addr: SocketAddr) -> Result<(), RequestError> {
    let RequestDocument {
        base_requests,
        routing_settings,
        ..
    } = load_document(&input)?;

    let catalogue = build_catalogue(&base_requests)?;
    let settings = routing_settings.unwrap_or_default();
    settings.validate()?;

    let app = create_router(AppState::new(catalogue, settings));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "transit server listening");
    info!("  GET /health");
    info!("  GET /buses/:name");
    info!("  GET /stops/:name");
    info!("  GET /route?from=&to=");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("transit server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
