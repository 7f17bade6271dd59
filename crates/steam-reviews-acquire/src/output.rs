use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use steam_reviews_model::ReviewCollection;

/// Where `fetch` writes when no path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "app/reviews.json";

const INDENT: &[u8] = b"    ";

/// Serialize the collection as 4-space indented JSON.
///
/// Non-ASCII review text is written as-is; there is no trailing newline.
pub fn to_json_pretty(collection: &ReviewCollection) -> Result<String> {
    let mut buf = Vec::new();
    write_json(collection, &mut buf)?;
    String::from_utf8(buf).context("Serialized JSON was not UTF-8")
}

fn write_json<W: Write>(collection: &ReviewCollection, writer: W) -> serde_json::Result<()> {
    let mut serializer =
        serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    collection.serialize(&mut serializer)
}

/// Write the collection to `path`, replacing any existing file.
///
/// The parent directory is created if it doesn't exist.
pub fn write_collection(collection: &ReviewCollection, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_json(collection, &mut writer)
        .with_context(|| format!("Failed to serialize reviews to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        apps = collection.len(),
        reviews = collection.review_count(),
        "Wrote reviews JSON"
    );
    Ok(())
}
