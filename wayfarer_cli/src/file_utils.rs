use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use serde::Serialize;
use wayfarer_core::json::types::JsonTransitDocument;

/// Reads a transit document from `path`, or from stdin when no path is given.
pub fn read_document(path: Option<&Path>) -> Result<JsonTransitDocument, anyhow::Error> {
    match path {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
            JsonTransitDocument::from_reader(BufReader::new(file))
                .with_context(|| format!("Invalid transit document {}", path.display()))
        }
        None => JsonTransitDocument::from_reader(io::stdin().lock())
            .context("Invalid transit document on stdin"),
    }
}

/// Writes `value` as JSON to `path`, or to stdout when no path is given.
pub fn write_json<T: Serialize>(path: Option<&Path>, value: &T, pretty: bool) -> Result<(), anyhow::Error> {
    let writer: Box<dyn Write> = match path {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Cannot create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
