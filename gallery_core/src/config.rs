// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use crate::error::Result;
use crate::fits::DEFAULT_FITS_LIMIT;
use crate::similarity::DEFAULT_NEIGHBOURS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for a data generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    pub neighbours: usize,
    pub fits_limit: usize,
    pub output_dir: PathBuf,
    /// Keep palettes already present in the colours file and only fill gaps.
    pub preserve_existing_colours: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            neighbours: DEFAULT_NEIGHBOURS,
            fits_limit: DEFAULT_FITS_LIMIT,
            output_dir: PathBuf::from("data"),
            preserve_existing_colours: true,
        }
    }
}

impl GenerateConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let config = Self::from_json(&content)?;
        log::debug!("Loaded config from {}: {config:?}", path.display());
        Ok(config)
    }
}
