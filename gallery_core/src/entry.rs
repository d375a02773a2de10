// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use crate::error::{Error, Result};
use crate::types::Ordinal;
use serde::{Deserialize, Serialize};

/// One gallery item: a design style page and the attributes used to relate it
/// to the others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Entry {
    pub ordinal: Ordinal,
    pub name: String,
    /// Descriptive category label. Not used for scoring.
    pub blend: String,
    /// The first tag is the primary one.
    pub tags: Vec<String>,
    /// Warm/cool axis, nominally 0-10.
    pub temperature: i32,
    /// Casual/formal axis, nominally 0-10.
    pub formality: i32,
    /// Page this entry stands for, e.g. `style-1-heritage-luxe.html`.
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub perfect_for: Vec<String>,
}

impl Entry {
    pub fn new(
        ordinal: Ordinal,
        name: impl Into<String>,
        tags: &[&str],
        temperature: i32,
        formality: i32,
    ) -> Self {
        let name = name.into();
        Self {
            ordinal,
            file: format!("style-{ordinal}.html"),
            name,
            tags: tags.iter().map(|&t| t.to_owned()).collect(),
            temperature,
            formality,
            ..Default::default()
        }
    }

    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    /// Checks the parts of an entry the ranking relies on.
    ///
    /// An empty tag list is accepted; it simply never matches anything.
    pub fn validate(&self) -> Result<()> {
        if self.ordinal == 0 {
            return Err(Error::invalid(self.ordinal, "ordinal must be positive"));
        }
        if let Some(index) = self.tags.iter().position(|t| t.trim().is_empty()) {
            return Err(Error::invalid(
                self.ordinal,
                format!("tag at position {index} is blank"),
            ));
        }
        Ok(())
    }
}
