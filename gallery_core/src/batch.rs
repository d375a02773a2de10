// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
//! Whole-catalog runs of the per-entry computations.
//!
//! Each entry is computed independently. A failure is recorded against its
//! ordinal and the run carries on with the remaining entries.
use crate::catalog::Catalog;
use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::fits::recommend;
use crate::palette::{Palette, palette};
use crate::similarity::rank;
use crate::types::Ordinal;
use std::collections::BTreeMap;

/// Results of one batch, keyed by ordinal, plus the entries that failed.
#[derive(Debug)]
pub struct BatchReport<T> {
    pub results: BTreeMap<Ordinal, T>,
    pub failures: Vec<(Ordinal, Error)>,
}

impl<T> Default for BatchReport<T> {
    fn default() -> Self {
        Self {
            results: BTreeMap::new(),
            failures: Vec::new(),
        }
    }
}

impl<T> BatchReport<T> {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    fn log_summary(&self, label: &str) {
        if self.is_complete() {
            log::info!("{label}: computed {} entries", self.results.len());
        } else {
            log::info!(
                "{label}: computed {} entries, {} failed",
                self.results.len(),
                self.failure_count()
            );
        }
    }
}

/// Runs `compute` for every entry of `catalog`.
pub fn run<T, F>(catalog: &Catalog, label: &str, mut compute: F) -> BatchReport<T>
where
    F: FnMut(&Entry) -> Result<T>,
{
    let mut report = BatchReport::default();

    for entry in catalog.entries() {
        match compute(entry) {
            Ok(value) => {
                report.results.insert(entry.ordinal, value);
            }
            Err(e) => {
                log::warn!("{label}: skipping entry {}: {e}", entry.ordinal);
                report.failures.push((entry.ordinal, e));
            }
        }
    }

    report.log_summary(label);
    report
}

pub fn similar_styles(catalog: &Catalog, neighbours: usize) -> BatchReport<Vec<Ordinal>> {
    run(catalog, "similar styles", |entry| {
        rank(entry, catalog.entries(), neighbours)
    })
}

pub fn palettes(catalog: &Catalog) -> BatchReport<Palette> {
    run(catalog, "palettes", |entry| Ok(palette(entry.ordinal)))
}

pub fn style_fits(catalog: &Catalog, limit: usize) -> BatchReport<Vec<String>> {
    run(catalog, "style fits", |entry| Ok(recommend(entry, limit)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_entries(vec![
            Entry::new(1, "Heritage Luxe", &["luxury", "heritage"], 5, 8),
            Entry::new(2, "Quiet Luxury", &["luxury", "minimal"], 4, 6),
            Entry::new(3, "Neon Grid", &["tech"], 8, 2),
        ])
        .unwrap()
    }

    #[test]
    fn test_similar_styles() {
        let report = similar_styles(&catalog(), 4);
        assert!(report.is_complete());
        assert_eq!(report.results[&1], vec![2]);
        assert_eq!(report.results[&2], vec![1]);
        assert!(report.results[&3].is_empty());
    }

    #[test]
    fn test_failure_does_not_abort_batch() {
        let catalog = Catalog::from_entries(vec![
            Entry::new(1, "Heritage Luxe", &["luxury", "heritage"], 5, 8),
            Entry::new(2, "Broken", &["luxury", " "], 4, 6),
            Entry::new(3, "Gilded", &["luxury"], 5, 8),
        ])
        .unwrap();

        let report = similar_styles(&catalog, 4);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.failures[0].0, 2);
        assert!(matches!(report.failures[0].1, Error::InvalidEntry { .. }));
        assert!(!report.results.contains_key(&2));
        assert_eq!(report.results[&1], vec![3, 2]);
    }

    #[test]
    fn test_palettes_cover_catalog() {
        let report = palettes(&catalog());
        assert_eq!(report.results.len(), 3);
        assert_eq!(report.results[&2], palette(2));
    }

    #[test]
    fn test_style_fits() {
        let report = style_fits(&catalog(), 5);
        assert_eq!(report.results[&1][0], "Heritage societies");
        assert!(report.results[&3].contains(&"Casual, approachable brands".to_owned()));
    }

    #[test]
    fn test_run_collects_errors() {
        let report: BatchReport<()> = run(&catalog(), "odd only", |entry| {
            if entry.ordinal % 2 == 0 {
                Err(Error::invalid(entry.ordinal, "even"))
            } else {
                Ok(())
            }
        });
        assert_eq!(report.results.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(report.failure_count(), 1);
    }
}
