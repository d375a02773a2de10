// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
//! Regenerates the gallery's data files (similar styles, colour palettes,
//! "perfect for" lists) from the style catalog, and inspects single entries.
use clap::{Parser, Subcommand};
use gallery_core::catalog::Catalog;
use gallery_core::config::GenerateConfig;
use gallery_core::entry::Entry;
use gallery_core::file_io::{DataFile, load_catalog};
use gallery_core::fits::recommend;
use gallery_core::generate::generate_data_files;
use gallery_core::palette::palette;
use gallery_core::similarity::rank_scored;
use gallery_core::types::Ordinal;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator as _;

#[derive(Parser, Debug)]
#[command(name = "gallery", about = "Design gallery data generator", version)]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write similar-styles, style-colors and style-fits data files.
    Generate {
        /// Catalog file (.csv or .json)
        #[arg(long)]
        catalog: PathBuf,
        /// Path to config file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output directory, overrides the config file
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Neighbours per entry, overrides the config file
        #[arg(long)]
        neighbours: Option<usize>,
    },

    /// Show the entries most similar to one entry.
    Similar {
        #[arg(long)]
        catalog: PathBuf,
        #[arg(long)]
        ordinal: Ordinal,
        #[arg(long, default_value_t = gallery_core::similarity::DEFAULT_NEIGHBOURS)]
        neighbours: usize,
    },

    /// Show the generated palette for an ordinal.
    Palette {
        #[arg(long)]
        ordinal: Ordinal,
    },

    /// Show the "perfect for" recommendations for one entry.
    Fits {
        #[arg(long)]
        catalog: PathBuf,
        #[arg(long)]
        ordinal: Ordinal,
        #[arg(long, default_value_t = gallery_core::fits::DEFAULT_FITS_LIMIT)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    simple_logger::init_with_level(level)?;

    match cli.command {
        Commands::Generate {
            catalog,
            config,
            out_dir,
            neighbours,
        } => generate(&catalog, config.as_deref(), out_dir, neighbours).await,
        Commands::Similar {
            catalog,
            ordinal,
            neighbours,
        } => {
            let catalog = load_catalog(&catalog).await?;
            let source = find_entry(&catalog, ordinal)?;
            let source_tags: HashSet<&str> = source.tags.iter().map(String::as_str).collect();

            println!("{} {} [{}]", source.ordinal, source.name, source.tags.join(", "));
            for neighbour in rank_scored(source, catalog.entries(), neighbours)? {
                let Some(entry) = catalog.get(neighbour.ordinal) else {
                    continue;
                };
                let shared: Vec<&str> = entry
                    .tags
                    .iter()
                    .map(String::as_str)
                    .filter(|t| source_tags.contains(t))
                    .collect();
                println!(
                    "  {:>4}  score {:>3}  {}  (shared: {})",
                    entry.ordinal,
                    neighbour.score,
                    entry.name,
                    shared.join(", ")
                );
            }
            Ok(())
        }
        Commands::Palette { ordinal } => {
            let palette = palette(ordinal);
            println!("primary    {}", palette.primary);
            println!("accent     {}", palette.accent);
            println!("background {}", palette.background);
            println!("text       {}", palette.text);
            Ok(())
        }
        Commands::Fits {
            catalog,
            ordinal,
            limit,
        } => {
            let catalog = load_catalog(&catalog).await?;
            let entry = find_entry(&catalog, ordinal)?;
            for fit in recommend(entry, limit) {
                println!("{fit}");
            }
            Ok(())
        }
    }
}

fn find_entry(catalog: &Catalog, ordinal: Ordinal) -> Result<&Entry, Box<dyn std::error::Error>> {
    catalog
        .get(ordinal)
        .ok_or_else(|| format!("no entry with ordinal {ordinal} in catalog").into())
}

async fn generate(
    catalog_path: &Path,
    config_path: Option<&Path>,
    out_dir: Option<PathBuf>,
    neighbours: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match config_path {
        Some(path) => GenerateConfig::load(path).await?,
        None => GenerateConfig::default(),
    };
    if let Some(out_dir) = out_dir {
        config.output_dir = out_dir;
    }
    if let Some(neighbours) = neighbours {
        config.neighbours = neighbours;
    }

    log::info!("Generating gallery data files...");
    let catalog = load_catalog(catalog_path).await?;
    let summary = generate_data_files(&catalog, &config).await?;

    for file in DataFile::iter() {
        log::info!("  {}", config.output_dir.join(file.to_string()).display());
    }
    if summary.similar_failures > 0 {
        log::warn!(
            "{} of {} entries could not be ranked",
            summary.similar_failures,
            summary.entries
        );
    }
    log::info!(
        "Done: {} entries, {} new palette(s), {} palette(s) in total",
        summary.entries,
        summary.palettes_added,
        summary.palettes_total
    );

    Ok(())
}
