use std::collections::BTreeMap;

use super::model::{Racquet, SpecKey};

// ---------------------------------------------------------------------------
// Global per-attribute ranges
// ---------------------------------------------------------------------------

/// Inclusive min/max of one attribute across the full dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecRange {
    pub min: f64,
    pub max: f64,
}

impl SpecRange {
    /// Normalize a raw value into [0, 1] against this range, clamped.
    /// A degenerate range (max ≤ min) maps everything to 0.
    pub fn normalize(&self, value: f64) -> f64 {
        let denom = self.max - self.min;
        if denom <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / denom).clamp(0.0, 1.0)
    }
}

/// Compute the global min/max of every [`SpecKey`] attribute, ignoring
/// missing and NaN values.  An attribute with no valid value at all is
/// absent from the map rather than present with a degenerate range.
pub fn spec_ranges(racquets: &[Racquet]) -> BTreeMap<SpecKey, SpecRange> {
    let mut ranges = BTreeMap::new();
    for key in SpecKey::ALL {
        let mut valid = racquets
            .iter()
            .filter_map(|r| key.value(r))
            .filter(|v| !v.is_nan());
        let Some(first) = valid.next() else {
            continue;
        };
        let (min, max) = valid.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        ranges.insert(key, SpecRange { min, max });
    }
    ranges
}

// ---------------------------------------------------------------------------
// Brand histogram
// ---------------------------------------------------------------------------

/// Count records per brand, sorted descending by count.  Ties keep the
/// order in which each brand was first seen (the sort is stable over
/// insertion order).
pub fn brand_counts<'a>(racquets: impl IntoIterator<Item = &'a Racquet>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for r in racquets {
        match counts.iter_mut().find(|(brand, _)| *brand == r.brand) {
            Some((_, n)) => *n += 1,
            None => counts.push((r.brand.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn racquet(brand: &str, price: Option<f64>) -> Racquet {
        Racquet {
            brand: brand.into(),
            model_name: String::new(),
            price,
            head_size: Some(100.0),
            weight: Some(300.0),
            swing_weight: Some(320.0),
            flex: Some(65.0),
            power_level: Some(2.0),
            length: Some(27.0),
            swing_speed: Some(2.0),
            id: format!("{brand}-x"),
        }
    }

    #[test]
    fn range_ignores_missing_values() {
        let racquets = vec![
            racquet("Wilson", Some(100.0)),
            racquet("Head", None),
            racquet("Yonex", Some(250.0)),
            racquet("Dunlop", Some(180.0)),
            racquet("Prince", Some(220.0)),
        ];
        let ranges = spec_ranges(&racquets);
        let price = ranges[&SpecKey::Price];
        assert_eq!(price.min, 100.0);
        assert_eq!(price.max, 250.0);
    }

    #[test]
    fn attribute_with_no_valid_value_is_absent() {
        let racquets = vec![racquet("Wilson", None), racquet("Head", None)];
        let ranges = spec_ranges(&racquets);
        assert!(!ranges.contains_key(&SpecKey::Price));
        assert!(ranges.contains_key(&SpecKey::Weight));
    }

    #[test]
    fn empty_dataset_yields_no_ranges() {
        assert!(spec_ranges(&[]).is_empty());
    }

    #[test]
    fn normalize_clamps_and_handles_degenerate_range() {
        let r = SpecRange {
            min: 100.0,
            max: 200.0,
        };
        assert_eq!(r.normalize(150.0), 0.5);
        assert_eq!(r.normalize(50.0), 0.0);
        assert_eq!(r.normalize(400.0), 1.0);
        let flat = SpecRange {
            min: 27.0,
            max: 27.0,
        };
        assert_eq!(flat.normalize(27.0), 0.0);
    }

    #[test]
    fn brand_counts_sorted_desc_with_first_seen_ties() {
        let racquets = vec![
            racquet("Head", None),
            racquet("Wilson", None),
            racquet("Wilson", None),
            racquet("Yonex", None),
            racquet("Head", None),
        ];
        let counts = brand_counts(&racquets);
        // Head and Wilson tie at 2; Head was seen first.
        assert_eq!(
            counts,
            vec![
                ("Head".to_string(), 2),
                ("Wilson".to_string(), 2),
                ("Yonex".to_string(), 1),
            ]
        );
    }
}
