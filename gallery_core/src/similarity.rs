// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
//! Nearest-neighbour ranking of gallery entries by shared tags.
use crate::entry::Entry;
use crate::error::Result;
use crate::types::Ordinal;
use std::collections::HashSet;

/// Number of neighbours kept per entry unless configured otherwise.
pub const DEFAULT_NEIGHBOURS: usize = 4;

const SHARED_TAG_WEIGHT: i64 = 10;
const PRIMARY_MATCH_WEIGHT: i64 = 5;

/// A candidate that survived the shared-tag filter, with its score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbour {
    pub ordinal: Ordinal,
    pub score: i64,
    /// Distinct tags the candidate has in common with the source.
    pub shared_tags: usize,
    pub primary_match: bool,
}

/// Scores `candidate` against `source`.
///
/// Returns `None` when the two share no tag; such candidates are never ranked,
/// whatever their temperature and formality.
pub fn score(source: &Entry, candidate: &Entry) -> Option<Neighbour> {
    let source_tags: HashSet<&str> = source.tags.iter().map(String::as_str).collect();
    let candidate_tags: HashSet<&str> = candidate.tags.iter().map(String::as_str).collect();

    let shared_tags = source_tags.intersection(&candidate_tags).count();
    if shared_tags == 0 {
        return None;
    }

    let primary_match = matches!(
        (source.primary_tag(), candidate.primary_tag()),
        (Some(a), Some(b)) if a == b
    );

    let temperature_delta = (i64::from(candidate.temperature) - i64::from(source.temperature)).abs();
    let formality_delta = (i64::from(candidate.formality) - i64::from(source.formality)).abs();

    let score = shared_tags as i64 * SHARED_TAG_WEIGHT
        + i64::from(primary_match) * PRIMARY_MATCH_WEIGHT
        - temperature_delta
        - formality_delta;

    Some(Neighbour {
        ordinal: candidate.ordinal,
        score,
        shared_tags,
        primary_match,
    })
}

/// Ranks the catalog against `source` and keeps the best `k`, with scores.
///
/// Order is by descending score, then ascending ordinal. The source itself is
/// identified by ordinal and never appears in the result.
pub fn rank_scored<'a>(
    source: &Entry,
    catalog: impl IntoIterator<Item = &'a Entry>,
    k: usize,
) -> Result<Vec<Neighbour>> {
    source.validate()?;

    let mut neighbours: Vec<Neighbour> = catalog
        .into_iter()
        .filter(|candidate| candidate.ordinal != source.ordinal)
        .filter_map(|candidate| score(source, candidate))
        .collect();

    neighbours.sort_by(|a, b| b.score.cmp(&a.score).then(a.ordinal.cmp(&b.ordinal)));
    neighbours.truncate(k);

    log::debug!(
        "Entry {} has {} neighbour(s): {:?}",
        source.ordinal,
        neighbours.len(),
        neighbours.iter().map(|n| n.ordinal).collect::<Vec<_>>()
    );

    Ok(neighbours)
}

/// Ordinals of the `k` entries most similar to `source`.
///
/// An entry with no tags has no neighbours. Fails with
/// [`crate::error::Error::InvalidEntry`] if `source` is malformed.
pub fn rank<'a>(
    source: &Entry,
    catalog: impl IntoIterator<Item = &'a Entry>,
    k: usize,
) -> Result<Vec<Ordinal>> {
    Ok(rank_scored(source, catalog, k)?
        .into_iter()
        .map(|n| n.ordinal)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn scenario() -> Vec<Entry> {
        vec![
            Entry::new(1, "Heritage Luxe", &["luxury", "heritage"], 5, 8),
            Entry::new(2, "Quiet Luxury", &["luxury", "minimal"], 4, 6),
            Entry::new(3, "Neon Grid", &["tech"], 8, 2),
        ]
    }

    fn fixture() -> Vec<Entry> {
        vec![
            Entry::new(1, "Heritage Luxe", &["luxury", "heritage", "premium"], 5, 8),
            Entry::new(2, "Quiet Luxury", &["luxury", "minimal"], 4, 6),
            Entry::new(3, "Neon Grid", &["tech", "gaming"], 8, 2),
            Entry::new(4, "Old Library", &["heritage", "academic"], 6, 9),
            Entry::new(5, "Gilded Hall", &["luxury", "heritage"], 5, 8),
            Entry::new(6, "Gold Standard", &["premium", "finance", "luxury"], 4, 9),
            Entry::new(7, "Arcade", &["gaming", "tech"], 9, 1),
            Entry::new(8, "Bare Page", &[], 5, 5),
            Entry::new(9, "Cloud Desk", &["tech", "minimal"], 3, 5),
            Entry::new(10, "Velvet Room", &["luxury", "hospitality"], 7, 7),
        ]
    }

    #[test]
    fn test_rank_scenario() {
        let catalog = scenario();
        let result = rank(&catalog[0], &catalog, DEFAULT_NEIGHBOURS).unwrap();
        assert_eq!(result, vec![2]);

        // Both primaries are "luxury": 10 + 5 - 1 - 2.
        let neighbour = score(&catalog[0], &catalog[1]).unwrap();
        assert_eq!(neighbour.score, 12);
        assert_eq!(neighbour.shared_tags, 1);
        assert!(neighbour.primary_match);
    }

    #[test]
    fn test_score_primary_match_bonus() {
        let a = Entry::new(1, "A", &["luxury", "heritage"], 5, 5);
        let b = Entry::new(2, "B", &["luxury", "minimal"], 5, 5);
        let neighbour = score(&a, &b).unwrap();
        assert!(neighbour.primary_match);
        assert_eq!(neighbour.score, 15);
    }

    #[test]
    fn test_score_zero_overlap_is_filtered() {
        let a = Entry::new(1, "A", &["luxury"], 5, 5);
        let b = Entry::new(2, "B", &["tech"], 5, 5);
        assert!(score(&a, &b).is_none());
    }

    #[test]
    fn test_score_can_be_negative() {
        let a = Entry::new(1, "A", &["luxury"], 0, 0);
        let b = Entry::new(2, "B", &["minimal", "luxury"], 10, 10);
        let neighbour = score(&a, &b).unwrap();
        assert_eq!(neighbour.score, 10 - 10 - 10);
    }

    #[test]
    fn test_shared_tags_count_duplicates_once() {
        let a = Entry::new(1, "A", &["luxury", "luxury"], 5, 5);
        let b = Entry::new(2, "B", &["luxury", "luxury", "luxury"], 5, 5);
        let neighbour = score(&a, &b).unwrap();
        assert_eq!(neighbour.shared_tags, 1);
        assert_eq!(neighbour.score, 15);
    }

    #[test]
    fn test_rank_orders_by_score_then_ordinal() {
        let catalog = fixture();
        let scored = rank_scored(&catalog[0], &catalog, 10).unwrap();

        for pair in scored.windows(2) {
            assert!(
                pair[0].score > pair[1].score
                    || (pair[0].score == pair[1].score && pair[0].ordinal < pair[1].ordinal)
            );
        }
        // Entry 5 shares two tags plus the primary one with no axis penalty.
        assert_eq!(scored[0].ordinal, 5);
        assert_eq!(scored[0].score, 25);
    }

    #[test]
    fn test_rank_tie_broken_by_ordinal() {
        let catalog = vec![
            Entry::new(1, "Source", &["luxury"], 5, 5),
            Entry::new(9, "Late", &["luxury"], 5, 5),
            Entry::new(4, "Early", &["luxury"], 5, 5),
        ];
        assert_eq!(rank(&catalog[0], &catalog, 4).unwrap(), vec![4, 9]);
    }

    #[test]
    fn test_rank_properties_over_fixture() {
        let catalog = fixture();
        for entry in &catalog {
            let result = rank(entry, &catalog, DEFAULT_NEIGHBOURS).unwrap();

            assert!(result.len() <= DEFAULT_NEIGHBOURS);
            assert!(!result.contains(&entry.ordinal));
            for ordinal in &result {
                let other = catalog.iter().find(|e| e.ordinal == *ordinal).unwrap();
                assert!(other.tags.iter().any(|t| entry.tags.contains(t)));
            }
            assert_eq!(result, rank(entry, &catalog, DEFAULT_NEIGHBOURS).unwrap());
        }
    }

    #[test]
    fn test_rank_respects_k() {
        let catalog = fixture();
        assert_eq!(rank(&catalog[0], &catalog, 2).unwrap().len(), 2);
        assert!(rank(&catalog[0], &catalog, 0).unwrap().is_empty());
    }

    #[test]
    fn test_rank_empty_tags_yields_nothing() {
        let catalog = fixture();
        let bare = &catalog[7];
        assert!(bare.tags.is_empty());
        assert!(rank(bare, &catalog, 4).unwrap().is_empty());
    }

    #[test]
    fn test_rank_only_self() {
        let catalog = vec![Entry::new(1, "Alone", &["luxury"], 5, 5)];
        assert!(rank(&catalog[0], &catalog, 4).unwrap().is_empty());
    }

    #[test]
    fn test_rank_invalid_source() {
        let catalog = fixture();
        let broken = Entry::new(11, "Broken", &["luxury", ""], 5, 5);
        let err = rank(&broken, &catalog, 4).unwrap_err();
        assert!(matches!(err, Error::InvalidEntry { ordinal: 11, .. }));
    }
}
