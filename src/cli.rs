use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use commands::serve;

#[derive(Parser)]
#[command(name = "cashflow")]
#[command(about = "Hosts the Cash Flow Dashboard frontend bundle")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the compiled dashboard
    Serve {
        /// Directory produced by `trunk build`
        ///
        /// Must contain an index.html; every path without a matching file
        /// is answered with it so client-side routes resolve.
        #[arg(short, long, env = "DASHBOARD_DIST_DIR", default_value = "workspace/frontend/dist")]
        dist_dir: PathBuf,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { dist_dir, bind_address } => {
                serve(dist_dir, &bind_address).await?;
            }
        }
        Ok(())
    }
}
