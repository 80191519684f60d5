//! Local development server for the MapleQuest RPG client.
//!
//! Serves the project root on port 8000 until Ctrl+C.

use maplequest_server::{
    AccessLog, Server, ServerConfig, ServerError, banner::banner, cli::Cli, config::project_root,
    server::shutdown_signal,
};
use std::{path::Path, process::ExitCode};
use tracing::Level;

#[tokio::main]
async fn main() -> ExitCode {
    let cli: Cli = argh::from_env();

    let level = if cli.verbose { Level::INFO } else { Level::WARN };
    tracing_subscriber::fmt().with_max_level(level).init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), ServerError> {
    let entry_point = Path::new(env!("CARGO_MANIFEST_DIR")).join(file!());
    let root = project_root(&entry_point)?;

    let access_log = if cli.verbose {
        AccessLog::Tracing
    } else {
        AccessLog::Silent
    };
    let server = Server::bind(ServerConfig::new(root).with_access_log(access_log)).await?;

    println!("{}", banner(server.local_addr()?.port(), server.root()));

    server.run_until(shutdown_signal()).await?;

    println!("\n\nServer stopped.");
    Ok(())
}
