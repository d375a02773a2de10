// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use crate::catalog::{Catalog, RawEntry};
use crate::error::{Error, Result};
use crate::palette::Palette;
use crate::types::Ordinal;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::path::Path;
use strum_macros::{Display, EnumIter};

const LIST_SEPARATOR: char = ';';

/// The generated data files, named as the gallery front end expects them.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, EnumIter, Display)]
pub enum DataFile {
    #[strum(to_string = "similar-styles.json")]
    SimilarStyles,
    #[strum(to_string = "style-colors.json")]
    StyleColours,
    #[strum(to_string = "style-fits.json")]
    StyleFits,
}

/// Loads and validates a catalog, picking the parser from the file extension
/// (`.csv` or `.json`).
pub async fn load_catalog(path: &Path) -> Result<Catalog> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let parse: fn(&str) -> Result<Vec<RawEntry>> = match extension.as_deref() {
        Some("csv") => parse_csv_rows,
        Some("json") => parse_json_rows,
        _ => {
            return Err(Error::malformed(
                0,
                format!("unsupported catalog format: {}", path.display()),
            ));
        }
    };

    let content = tokio::fs::read_to_string(path).await?;
    let rows = parse(&content)?;

    let catalog = Catalog::from_rows(rows)?;
    log::info!(
        "Loaded {} entries from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

fn split_list(field: &str) -> Vec<String> {
    field
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parses CSV catalog rows. The header row names the columns; list columns
/// (`tags`, `perfect_for`) are `;`-separated.
pub fn parse_csv_rows(content: &str) -> Result<Vec<RawEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let column = |names: &[&str]| {
        headers
            .iter()
            .position(|h| names.iter().any(|n| h.eq_ignore_ascii_case(n)))
    };
    let ordinal = column(&["num", "ordinal"]);
    let name = column(&["name"]);
    let blend = column(&["blend"]);
    let tags = column(&["tags"]);
    let temperature = column(&["temp", "temperature"]);
    let formality = column(&["formality"]);
    let file = column(&["file"]);
    let preview = column(&["preview"]);
    let perfect_for = column(&["perfect_for", "perfectFor"]);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let text = |index: Option<usize>| {
            index
                .and_then(|i| record.get(i))
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
        };

        rows.push(RawEntry {
            ordinal: text(ordinal),
            name: text(name),
            blend: text(blend),
            tags: text(tags).map(|t| split_list(&t)),
            temperature: text(temperature),
            formality: text(formality),
            file: text(file),
            preview: text(preview),
            perfect_for: text(perfect_for).map(|p| split_list(&p)),
        });
    }
    Ok(rows)
}

fn scalar(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|k| object.get(*k))
        .and_then(|value| match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
}

fn string_list(
    object: &Map<String, Value>,
    keys: &[&str],
    row: usize,
) -> Result<Option<Vec<String>>> {
    let Some((key, value)) = keys
        .iter()
        .find_map(|k| object.get(*k).map(|v| (*k, v)))
    else {
        return Ok(None);
    };

    match value {
        Value::Null => Ok(None),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_owned).ok_or_else(|| {
                    Error::malformed(row, format!("'{key}' must hold strings only, found {item}"))
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(Some),
        other => Err(Error::malformed(
            row,
            format!("'{key}' must be an array of strings, found {other}"),
        )),
    }
}

/// Parses a JSON catalog: a top-level array of objects.
pub fn parse_json_rows(content: &str) -> Result<Vec<RawEntry>> {
    let value: Value = serde_json::from_str(content)?;
    let items = value
        .as_array()
        .ok_or_else(|| Error::malformed(0, "expected a top-level array of entries"))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let row = index + 1;
            let object = item
                .as_object()
                .ok_or_else(|| Error::malformed(row, "entry is not an object"))?;
            Ok(RawEntry {
                ordinal: scalar(object, &["num", "ordinal"]),
                name: scalar(object, &["name"]),
                blend: scalar(object, &["blend"]),
                tags: string_list(object, &["tags"], row)?,
                temperature: scalar(object, &["temp", "temperature"]),
                formality: scalar(object, &["formality"]),
                file: scalar(object, &["file"]),
                preview: scalar(object, &["preview"]),
                perfect_for: string_list(object, &["perfectFor", "perfect_for"], row)?,
            })
        })
        .collect()
}

/// Writes `value` as two-space indented JSON to `dir/file`, creating `dir`.
pub async fn write_data_file<T: Serialize>(dir: &Path, file: DataFile, value: &T) -> Result<()> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(file.to_string());
    let json = serde_json::to_string_pretty(value)?;
    tokio::fs::write(&path, json).await?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

/// Reads an existing colours file as raw JSON, if any.
///
/// Values are not interpreted, so hand-edited entries survive a merge as
/// written. A file that is not a JSON object is ignored with a warning and
/// every palette is regenerated.
pub async fn load_existing_colours(dir: &Path) -> Result<Map<String, Value>> {
    let path = dir.join(DataFile::StyleColours.to_string());
    if !tokio::fs::try_exists(&path).await? {
        return Ok(Map::new());
    }

    let content = tokio::fs::read(&path).await?;
    match serde_json::from_slice::<Map<String, Value>>(&content) {
        Ok(colours) => {
            log::debug!("Read {} existing colour entries", colours.len());
            Ok(colours)
        }
        Err(e) => {
            log::warn!(
                "Ignoring unreadable colours file {}: {e}",
                path.display()
            );
            Ok(Map::new())
        }
    }
}

/// Numeric keys first in ascending order, then any other keys.
fn colour_key_order(a: &str, b: &str) -> Ordering {
    match (a.parse::<Ordinal>(), b.parse::<Ordinal>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Adds `generated` palettes for ordinals missing from `existing`. A key
/// holding `null` counts as missing. Existing values are kept untouched.
///
/// Returns the merged colours ordered by ordinal and how many were added.
pub fn merge_colours(
    existing: Map<String, Value>,
    generated: impl IntoIterator<Item = (Ordinal, Palette)>,
) -> Result<(IndexMap<String, Value>, usize)> {
    let mut merged: IndexMap<String, Value> = existing.into_iter().collect();
    let mut added = 0;

    for (ordinal, palette) in generated {
        let slot = merged.entry(ordinal.to_string()).or_insert(Value::Null);
        if slot.is_null() {
            *slot = serde_json::to_value(palette)?;
            added += 1;
        }
    }

    merged.sort_by(|a, _, b, _| colour_key_order(a, b));
    Ok((merged, added))
}
