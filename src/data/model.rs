use std::collections::BTreeMap;
use std::fmt;

use super::stats::{spec_ranges, SpecRange};

// ---------------------------------------------------------------------------
// Canonical brands
// ---------------------------------------------------------------------------

/// The fixed set of recognized brands, in sorted order.  Rows whose brand
/// matches one of these case-insensitively are rewritten to the canonical
/// casing; anything else passes through untouched.
pub const BRANDS: [&str; 12] = [
    "Babolat",
    "Dunlop",
    "Gamma",
    "Genesis",
    "Head",
    "Pacific",
    "Prince",
    "ProKennex",
    "Tecnifibre",
    "Volkl",
    "Wilson",
    "Yonex",
];

/// Look up the canonical casing for a brand, case-insensitively.
pub fn canonical_brand(raw: &str) -> Option<&'static str> {
    BRANDS
        .iter()
        .find(|b| b.eq_ignore_ascii_case(raw.trim()))
        .copied()
}

// ---------------------------------------------------------------------------
// SpecKey – the comparable attributes of a racquet
// ---------------------------------------------------------------------------

/// The seven numeric attributes shown on the radar chart and comparison
/// table, and over which global ranges are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpecKey {
    Price,
    HeadSize,
    Weight,
    Swingweight,
    Flex,
    PowerLevel,
    Length,
}

impl SpecKey {
    pub const ALL: [SpecKey; 7] = [
        SpecKey::Price,
        SpecKey::HeadSize,
        SpecKey::Weight,
        SpecKey::Swingweight,
        SpecKey::Flex,
        SpecKey::PowerLevel,
        SpecKey::Length,
    ];

    /// Human-readable label for table rows and radar axes.
    pub fn label(self) -> &'static str {
        match self {
            SpecKey::Price => "Price",
            SpecKey::HeadSize => "Head Size",
            SpecKey::Weight => "Weight",
            SpecKey::Swingweight => "Swingweight",
            SpecKey::Flex => "Flex (RA)",
            SpecKey::PowerLevel => "Power Level",
            SpecKey::Length => "Length",
        }
    }

    /// Unit suffix appended to displayed raw values.
    pub fn suffix(self) -> &'static str {
        match self {
            SpecKey::Price => " $",
            SpecKey::HeadSize => " sq.in",
            SpecKey::Weight => " g",
            SpecKey::Length => " in",
            SpecKey::Swingweight | SpecKey::Flex | SpecKey::PowerLevel => "",
        }
    }

    /// Read this attribute off a record.
    pub fn value(self, r: &Racquet) -> Option<f64> {
        match self {
            SpecKey::Price => r.price,
            SpecKey::HeadSize => r.head_size,
            SpecKey::Weight => r.weight,
            SpecKey::Swingweight => r.swing_weight,
            SpecKey::Flex => r.flex,
            SpecKey::PowerLevel => r.power_level,
            SpecKey::Length => r.length,
        }
    }
}

impl fmt::Display for SpecKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Racquet – one row of the source CSV
// ---------------------------------------------------------------------------

/// A single racquet record.  Numeric fields that were absent or unparseable
/// in the source are `None`; filters treat a missing field needed by an
/// active predicate as a failed match.
#[derive(Debug, Clone, PartialEq)]
pub struct Racquet {
    /// Brand name, canonicalized where recognized.
    pub brand: String,
    pub model_name: String,
    /// Price in dollars, stripped of currency formatting.
    pub price: Option<f64>,
    /// Head size in square inches.
    pub head_size: Option<f64>,
    /// Static weight in grams.
    pub weight: Option<f64>,
    pub swing_weight: Option<f64>,
    /// Stiffness rating (RA); lower is more flexible.
    pub flex: Option<f64>,
    /// Coarse 1–3 power rating.
    pub power_level: Option<f64>,
    /// Length in inches.
    pub length: Option<f64>,
    /// Swing-speed category, 1 (slow) to 3 (fast).
    pub swing_speed: Option<f64>,
    /// Synthetic id, unique within one load only.
    pub id: String,
}

// ---------------------------------------------------------------------------
// RacquetDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with global per-attribute ranges computed once
/// at construction (they normalize the radar chart and must not track the
/// current filter).
#[derive(Debug, Clone, Default)]
pub struct RacquetDataset {
    /// All records, in source order.
    pub racquets: Vec<Racquet>,
    /// Global min/max per attribute; attributes with no valid value are absent.
    pub spec_ranges: BTreeMap<SpecKey, SpecRange>,
}

impl RacquetDataset {
    pub fn from_racquets(racquets: Vec<Racquet>) -> Self {
        let spec_ranges = spec_ranges(&racquets);
        RacquetDataset {
            racquets,
            spec_ranges,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.racquets.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.racquets.is_empty()
    }

    /// Look a record up by its synthetic id.
    pub fn by_id(&self, id: &str) -> Option<&Racquet> {
        self.racquets.iter().find(|r| r.id == id)
    }
}
