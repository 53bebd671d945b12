use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::query::QueryArgs;

mod file_utils;
mod query;
mod request_handler;
mod responses;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Answers the stat requests of a transit document
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },
    /// Prints the JSON schema of the transit document
    Schema,
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Query { args } => query::run(args)?,
        Commands::Schema => {
            println!("{}", wayfarer_core::json::schema::generate_json_schema()?)
        }
    }

    Ok(())
}
