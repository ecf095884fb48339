use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::{canonical_brand, Racquet, RacquetDataset};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Discontinued brand label still present in the source data.
const LEGACY_BRAND: &str = "Pro";
/// Current label the legacy brand is rewritten to.
const LEGACY_BRAND_REPLACEMENT: &str = "ProKennex";
/// One Gamma row in the source carries this impossible swingweight; it is
/// dropped as a literal data cleanup, not generalized into a rule.
const KNOWN_BAD_SWINGWEIGHT: f64 = 412.0;

/// Load the racquet dataset from a CSV file with a header row.
///
/// Rows without a brand are discarded; recognized brands are rewritten to
/// their canonical casing; currency-formatted prices are reduced to plain
/// numbers; every other numeric column parses fail-soft to `None`.
pub fn load_csv(path: &Path) -> Result<RacquetDataset> {
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    parse_records(reader).with_context(|| format!("parsing {}", path.display()))
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Column positions resolved from the normalized header row.  Any column
/// may be absent; its field is then `None` on every record.
struct Columns {
    brand: Option<usize>,
    model_name: Option<usize>,
    price: Option<usize>,
    head_size: Option<usize>,
    weight: Option<usize>,
    swing_weight: Option<usize>,
    flex: Option<usize>,
    power_level: Option<usize>,
    length: Option<usize>,
    swing_speed: Option<usize>,
}

impl Columns {
    fn resolve(headers: &[String]) -> Self {
        let find = |name: &str| headers.iter().position(|h| h == name);
        Columns {
            brand: find("brand"),
            model_name: find("model_name"),
            price: find("price_num"),
            head_size: find("head_size_in2"),
            weight: find("weight_g"),
            swing_weight: find("swing_weight"),
            flex: find("flex_ra"),
            power_level: find("power_lv_num"),
            length: find("length_in"),
            swing_speed: find("swing_sp_num"),
        }
    }
}

/// Parse racquet records from an open CSV reader.
pub fn parse_records<R: Read>(mut reader: csv::Reader<R>) -> Result<RacquetDataset> {
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(normalize_header)
        .collect();
    let cols = Columns::resolve(&headers);

    let mut racquets = Vec::new();
    let mut kept = 0usize;

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let field = |col: Option<usize>| col.and_then(|i| record.get(i)).map(str::trim);

        // Row inclusion hinges on the brand alone.
        let Some(raw_brand) = field(cols.brand).filter(|b| !b.is_empty()) else {
            continue;
        };

        let renamed = if raw_brand.eq_ignore_ascii_case(LEGACY_BRAND) {
            LEGACY_BRAND_REPLACEMENT
        } else {
            raw_brand
        };
        let brand = canonical_brand(renamed).unwrap_or(renamed).to_string();

        let price = field(cols.price).and_then(parse_price);
        let id = synth_id(&brand, price, kept);
        kept += 1;

        racquets.push(Racquet {
            model_name: field(cols.model_name).unwrap_or_default().to_string(),
            price,
            head_size: field(cols.head_size).and_then(parse_num),
            weight: field(cols.weight).and_then(parse_num),
            swing_weight: field(cols.swing_weight).and_then(parse_num),
            flex: field(cols.flex).and_then(parse_num),
            power_level: field(cols.power_level).and_then(parse_num),
            length: field(cols.length).and_then(parse_num),
            swing_speed: field(cols.swing_speed).and_then(parse_num),
            brand,
            id,
        });
    }

    racquets.retain(|r| {
        !(r.brand == "Gamma" && r.swing_weight == Some(KNOWN_BAD_SWINGWEIGHT))
    });

    Ok(RacquetDataset::from_racquets(racquets))
}

/// Lower-case a header and join whitespace runs with underscores, so that
/// `"Head Size In2"` and `"head_size_in2"` address the same column.
fn normalize_header(h: &str) -> String {
    h.to_lowercase().split_whitespace().collect::<Vec<_>>().join("_")
}

/// Strip currency formatting from a price field and parse what is left.
/// An empty result maps to `None`, never zero.
fn parse_price(raw: &str) -> Option<f64> {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Fail-soft numeric parse: malformed or empty cells become `None`.
fn parse_num(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    raw.parse().ok()
}

/// Deterministic id from brand, normalized price, and the positional index
/// among kept rows.  Unique within one load pass only.
fn synth_id(brand: &str, price: Option<f64>, index: usize) -> String {
    match price {
        Some(p) => format!("{brand}-{p}-{index}"),
        None => format!("{brand}-na-{index}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(csv_text: &str) -> RacquetDataset {
        let reader = csv::Reader::from_reader(csv_text.as_bytes());
        parse_records(reader).unwrap()
    }

    const HEADER: &str =
        "Brand,Model Name,Price Num,Head Size In2,Weight G,Swing Weight,Flex RA,Power Lv Num,Length In,Swing Sp Num";

    #[test]
    fn headers_are_normalized_case_and_whitespace() {
        let ds = parse(&format!(
            "{HEADER}\nWilson,Blade 98,$219.00,98,305,321,62,1,27,3\n"
        ));
        assert_eq!(ds.len(), 1);
        let r = &ds.racquets[0];
        assert_eq!(r.brand, "Wilson");
        assert_eq!(r.model_name, "Blade 98");
        assert_eq!(r.head_size, Some(98.0));
        assert_eq!(r.swing_weight, Some(321.0));
    }

    #[test]
    fn rows_without_a_brand_are_dropped() {
        let ds = parse(&format!(
            "{HEADER}\n,Orphan,100,98,305,321,62,1,27,3\nHead,Radical,100,98,305,321,62,1,27,3\n"
        ));
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.racquets[0].brand, "Head");
    }

    #[test]
    fn legacy_brand_is_rewritten_then_canonicalized() {
        let ds = parse(&format!(
            "{HEADER}\nPro,Ki Q+,129,100,295,315,64,2,27,2\npro,Lowercase legacy,129,100,295,315,64,2,27,2\n"
        ));
        assert_eq!(ds.racquets[0].brand, "ProKennex");
        assert_eq!(ds.racquets[1].brand, "ProKennex");
    }

    #[test]
    fn unrecognized_brands_pass_through() {
        let ds = parse(&format!("{HEADER}\nAcme,Test,100,98,305,321,62,1,27,3\n"));
        assert_eq!(ds.racquets[0].brand, "Acme");
    }

    #[test]
    fn price_strips_currency_and_empty_maps_to_none() {
        let ds = parse(&format!(
            "{HEADER}\nWilson,A,\"$1,299.95\",98,305,321,62,1,27,3\nWilson,B,$,98,305,321,62,1,27,3\nWilson,C,,98,305,321,62,1,27,3\n"
        ));
        assert_eq!(ds.racquets[0].price, Some(1299.95));
        assert_eq!(ds.racquets[1].price, None);
        assert_eq!(ds.racquets[2].price, None);
    }

    #[test]
    fn malformed_numeric_cells_become_none() {
        let ds = parse(&format!(
            "{HEADER}\nWilson,A,100,n/a,305,unknown,62,1,27,3\n"
        ));
        let r = &ds.racquets[0];
        assert_eq!(r.head_size, None);
        assert_eq!(r.swing_weight, None);
        assert_eq!(r.weight, Some(305.0));
    }

    #[test]
    fn ids_are_unique_within_a_load() {
        let ds = parse(&format!(
            "{HEADER}\nWilson,A,219,98,305,321,62,1,27,3\nWilson,B,219,98,305,321,62,1,27,3\n"
        ));
        assert_eq!(ds.racquets[0].id, "Wilson-219-0");
        assert_eq!(ds.racquets[1].id, "Wilson-219-1");
    }

    #[test]
    fn known_bad_gamma_row_is_removed() {
        let ds = parse(&format!(
            "{HEADER}\nGamma,Bad,100,98,305,412,62,1,27,3\nGamma,Good,100,98,305,320,62,1,27,3\nWilson,Tall,100,98,305,412,62,1,27,3\n"
        ));
        // Only the Gamma/412 combination is dropped.
        let ids: Vec<&str> = ds.racquets.iter().map(|r| r.model_name.as_str()).collect();
        assert_eq!(ids, vec!["Good", "Tall"]);
    }

    #[test]
    fn missing_columns_yield_none_fields() {
        let ds = parse("brand,weight_g\nWilson,305\n");
        let r = &ds.racquets[0];
        assert_eq!(r.weight, Some(305.0));
        assert_eq!(r.price, None);
        assert_eq!(r.swing_weight, None);
        assert_eq!(r.model_name, "");
    }

    #[test]
    fn global_ranges_are_built_at_load() {
        use crate::data::model::SpecKey;
        let ds = parse(&format!(
            "{HEADER}\nWilson,A,100,98,290,300,62,1,27,3\nHead,B,300,104,310,340,70,3,27.5,1\n"
        ));
        let w = ds.spec_ranges[&SpecKey::Weight];
        assert_eq!((w.min, w.max), (290.0, 310.0));
        let p = ds.spec_ranges[&SpecKey::Price];
        assert_eq!((p.min, p.max), (100.0, 300.0));
    }
}
