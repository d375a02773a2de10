// Copyright (C) 2025 aidan-es. Licensed under the GNU AGPLv3.
//! "Perfect for" audience recommendations.
use crate::entry::Entry;
use indexmap::IndexSet;

pub const DEFAULT_FITS_LIMIT: usize = 5;

const WARM_THRESHOLD: i32 = 7;
const FORMAL_THRESHOLD: i32 = 8;
const CASUAL_THRESHOLD: i32 = 4;

const TAG_FITS: &[(&str, [&str; 3])] = &[
    ("premium", ["Luxury membership organizations", "Executive boards", "VIP services"]),
    ("professional", ["Corporate associations", "Professional societies", "B2B platforms"]),
    ("creative", ["Design agencies", "Art galleries", "Creative studios"]),
    ("technology", ["Tech startups", "SaaS platforms", "Digital products"]),
    ("heritage", ["Heritage societies", "Historical organizations", "Cultural institutions"]),
    ("hospitality", ["Hotels & resorts", "Restaurants", "Wellness centers"]),
    ("academic", ["Universities", "Research institutions", "Think tanks"]),
    ("media", ["Publishers", "Broadcasting", "Entertainment"]),
    ("association", ["Trade associations", "Chambers of commerce", "Professional networks"]),
    ("finance", ["Investment firms", "Banking", "Wealth management"]),
    ("health", ["Healthcare networks", "Medical associations", "Wellness brands"]),
    ("legal", ["Law firms", "Bar associations", "Legal services"]),
    ("real-estate", ["Real estate agencies", "Property developers", "HOAs"]),
    ("sports", ["Sports leagues", "Athletic clubs", "Fitness centers"]),
    ("nonprofit", ["Foundations", "Charities", "NGOs"]),
    ("government", ["Government agencies", "Civic organizations", "Public services"]),
    ("religious", ["Religious organizations", "Faith communities", "Spiritual centers"]),
    ("education", ["Schools", "Training centers", "Educational platforms"]),
    ("energy", ["Energy companies", "Sustainability orgs", "Clean tech"]),
    ("aerospace", ["Aviation companies", "Space industry", "Defense contractors"]),
    ("automotive", ["Auto manufacturers", "Motorsports", "Dealerships"]),
    ("food", ["Culinary guilds", "Food industry", "Restaurant groups"]),
    ("fashion", ["Fashion houses", "Boutiques", "Style councils"]),
    ("art", ["Art institutions", "Museums", "Cultural foundations"]),
    ("music", ["Music labels", "Orchestras", "Conservatories"]),
    ("gaming", ["Esports", "Gaming platforms", "Entertainment tech"]),
    ("web3", ["DAOs", "Crypto projects", "Blockchain platforms"]),
];

fn fits_for_tag(tag: &str) -> &'static [&'static str] {
    TAG_FITS
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, fits)| fits.as_slice())
        .unwrap_or_default()
}

/// Audiences `entry` suits, at most `limit` of them.
///
/// Curated `perfect_for` values win; otherwise they are derived from the tags
/// and the temperature/formality axes.
pub fn recommend(entry: &Entry, limit: usize) -> Vec<String> {
    let mut fits: IndexSet<&str> = IndexSet::new();

    if entry.perfect_for.is_empty() {
        for tag in &entry.tags {
            fits.extend(fits_for_tag(tag));
        }
        if entry.temperature >= WARM_THRESHOLD {
            fits.insert("Warm, inviting brands");
        }
        if entry.formality >= FORMAL_THRESHOLD {
            fits.insert("Formal institutional identity");
        }
        if entry.formality <= CASUAL_THRESHOLD {
            fits.insert("Casual, approachable brands");
        }
    } else {
        fits.extend(entry.perfect_for.iter().map(String::as_str));
    }

    fits.into_iter().take(limit).map(str::to_owned).collect()
}
