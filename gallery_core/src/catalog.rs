// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::types::Ordinal;
use indexmap::IndexMap;

/// A catalog row as extracted from storage, before any validation.
///
/// Every field is optional and textual so that CSV and JSON sources can share
/// one conversion path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntry {
    pub ordinal: Option<String>,
    pub name: Option<String>,
    pub blend: Option<String>,
    pub tags: Option<Vec<String>>,
    pub temperature: Option<String>,
    pub formality: Option<String>,
    pub file: Option<String>,
    pub preview: Option<String>,
    pub perfect_for: Option<Vec<String>>,
}

fn required<'a>(value: Option<&'a String>, field: &str) -> std::result::Result<&'a str, String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| format!("missing field '{field}'"))
}

fn parse_int<T: std::str::FromStr>(
    value: Option<&String>,
    field: &str,
) -> std::result::Result<T, String> {
    let text = required(value, field)?;
    text.parse()
        .map_err(|_| format!("field '{field}' is not an integer: '{text}'"))
}

impl RawEntry {
    fn parse_ordinal(&self) -> std::result::Result<Ordinal, String> {
        let ordinal: Ordinal = parse_int(self.ordinal.as_ref(), "num")?;
        if ordinal == 0 {
            return Err("field 'num' must be positive".to_owned());
        }
        Ok(ordinal)
    }
}

impl TryFrom<RawEntry> for Entry {
    type Error = Error;

    fn try_from(raw: RawEntry) -> Result<Self> {
        let ordinal = raw.parse_ordinal().map_err(|e| Error::invalid(0, e))?;
        let invalid = |reason: String| Error::invalid(ordinal, reason);

        let name = required(raw.name.as_ref(), "name").map_err(invalid)?;
        let blend = required(raw.blend.as_ref(), "blend").map_err(invalid)?;
        let file = required(raw.file.as_ref(), "file").map_err(invalid)?;
        let temperature = parse_int(raw.temperature.as_ref(), "temp").map_err(invalid)?;
        let formality = parse_int(raw.formality.as_ref(), "formality").map_err(invalid)?;

        let tags: Vec<String> = raw
            .tags
            .as_deref()
            .ok_or_else(|| invalid("missing field 'tags'".to_owned()))?
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        if tags.is_empty() {
            return Err(invalid("field 'tags' has no usable tag".to_owned()));
        }

        let perfect_for = raw
            .perfect_for
            .unwrap_or_default()
            .into_iter()
            .map(|p| p.trim().to_owned())
            .filter(|p| !p.is_empty())
            .collect();

        Ok(Self {
            ordinal,
            name: name.to_owned(),
            blend: blend.to_owned(),
            tags,
            temperature,
            formality,
            file: file.to_owned(),
            preview: raw
                .preview
                .map(|p| p.trim().to_owned())
                .filter(|p| !p.is_empty()),
            perfect_for,
        })
    }
}

/// The validated, read-only set of gallery entries, ordered by ordinal.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: IndexMap<Ordinal, Entry>,
}

impl Catalog {
    /// Validates raw rows and builds the catalog.
    ///
    /// Any row that cannot become an [`Entry`], and any repeated ordinal, fails
    /// the whole load with [`Error::MalformedCatalog`].
    pub fn from_rows(rows: impl IntoIterator<Item = RawEntry>) -> Result<Self> {
        let entries = rows
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                Entry::try_from(raw).map_err(|e| match e {
                    Error::InvalidEntry { reason, .. } => Error::malformed(index + 1, reason),
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_entries(entries)
    }

    /// Builds a catalog from already-typed entries, checking ordinal uniqueness.
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Result<Self> {
        let mut map = IndexMap::new();
        for (index, entry) in entries.into_iter().enumerate() {
            if map.contains_key(&entry.ordinal) {
                return Err(Error::malformed(
                    index + 1,
                    format!("duplicate ordinal {}", entry.ordinal),
                ));
            }
            map.insert(entry.ordinal, entry);
        }

        map.sort_keys();
        log::debug!("Loaded catalog with {} entries", map.len());
        Ok(Self { entries: map })
    }

    pub fn get(&self, ordinal: Ordinal) -> Option<&Entry> {
        self.entries.get(&ordinal)
    }

    /// Entries in ascending ordinal order.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &Entry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
