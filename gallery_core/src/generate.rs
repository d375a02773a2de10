// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
use crate::batch;
use crate::catalog::Catalog;
use crate::config::GenerateConfig;
use crate::error::Result;
use crate::file_io::{DataFile, load_existing_colours, merge_colours, write_data_file};
use serde_json::Map;

/// What a generation run produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub entries: usize,
    pub similar_failures: usize,
    pub palettes_added: usize,
    pub palettes_total: usize,
}

/// Computes every data file for `catalog` and writes them to
/// `config.output_dir`.
///
/// Entries that fail are left out of their file and counted; only I/O errors
/// abort the run. Existing colours are merged unless
/// `preserve_existing_colours` is off.
pub async fn generate_data_files(
    catalog: &Catalog,
    config: &GenerateConfig,
) -> Result<GenerateSummary> {
    let dir = config.output_dir.as_path();

    // Read before any output is written.
    let existing = if config.preserve_existing_colours {
        load_existing_colours(dir).await?
    } else {
        Map::new()
    };

    let similar = batch::similar_styles(catalog, config.neighbours);
    let fits = batch::style_fits(catalog, config.fits_limit);
    let (palettes, palettes_added) = merge_colours(existing, batch::palettes(catalog).results)?;
    log::info!(
        "Added {palettes_added} palette(s), {} in total",
        palettes.len()
    );

    write_data_file(dir, DataFile::SimilarStyles, &similar.results).await?;
    write_data_file(dir, DataFile::StyleFits, &fits.results).await?;
    write_data_file(dir, DataFile::StyleColours, &palettes).await?;

    Ok(GenerateSummary {
        entries: catalog.len(),
        similar_failures: similar.failure_count(),
        palettes_added,
        palettes_total: palettes.len(),
    })
}
