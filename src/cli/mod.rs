use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod render;
pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "3000")]
        port: String,
    },
    /// Print the calendar for a timetable to stdout
    Render {
        /// Read the timetable from a local HTML file instead of fetching it
        #[arg(long)]
        file: Option<PathBuf>,

        /// Query parameter passed to the timetable site, as key=value
        #[arg(long = "param", value_parser = render::parse_param)]
        params: Vec<(String, String)>,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await?;
        }
        Some(Command::Render { file, params }) => {
            render::run(file, params).await?;
        }
        None => {}
    }

    Ok(())
}
