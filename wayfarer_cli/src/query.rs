use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;
use wayfarer_core::json::types::JsonTransitDocument;
use wayfarer_routing::{stopwatch::Stopwatch, transit::transit_router::TransitRouter};

use crate::{file_utils, request_handler::RequestHandler, responses::JsonStatResponse};

#[derive(Args)]
pub struct QueryArgs {
    /// Transit document to read, stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// File receiving the JSON responses, stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long)]
    pretty: bool,
}

pub fn run(args: QueryArgs) -> Result<(), anyhow::Error> {
    let document = file_utils::read_document(args.input.as_deref())?;
    let responses = answer(&document)?;
    file_utils::write_json(args.output.as_deref(), &responses, args.pretty)
}

pub fn answer(document: &JsonTransitDocument) -> Result<Vec<JsonStatResponse>, anyhow::Error> {
    let stopwatch = Stopwatch::new("query");

    let catalogue = document
        .to_catalogue()
        .context("Failed to build the transit catalogue")?;
    let router = TransitRouter::new(&catalogue).context("Failed to build the transit router")?;

    let responses = RequestHandler::new(&catalogue, &router).handle_all(&document.stat_requests);

    info!(
        requests = document.stat_requests.len(),
        elapsed = ?stopwatch.elapsed(),
        "Answered stat requests"
    );

    Ok(responses)
}
