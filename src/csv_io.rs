// 📄 CSV I/O - Record source and sink around the normalization engine
// Headers are matched by alias (case-insensitive, trimmed); unrelated columns are ignored.

use crate::reconcile::RawRecord;
use crate::variant::{CanonicalVariant, OUTPUT_COLUMNS};
use anyhow::{bail, Context, Result};
use csv::{ReaderBuilder, StringRecord, Writer};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Accepted header names for the merchant SKU
pub const SKU_ALIASES: [&str; 3] = ["merchantsku", "merchant_sku", "sku"];

/// Accepted header names for an explicit size
pub const SIZE_ALIASES: [&str; 3] = ["variant_size", "size", "variant size"];

/// Accepted header names for an explicit color
pub const COLOR_ALIASES: [&str; 3] = ["variant_color", "color", "variant color"];

// ============================================================================
// COLUMN MAP
// ============================================================================

/// Column indexes of the fields the engine consumes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub sku: Option<usize>,
    pub size: Option<usize>,
    pub color: Option<usize>,
}

impl ColumnMap {
    /// Resolve columns from a header row.
    ///
    /// The first SKU header wins. For size and color the last matching
    /// header wins, even when its cell turns out blank.
    pub fn from_headers(headers: &StringRecord) -> Self {
        let mut map = ColumnMap::default();

        for (index, header) in headers.iter().enumerate() {
            let name = header.trim().to_lowercase();
            let is = |aliases: &[&str]| aliases.iter().any(|alias| *alias == name);

            if map.sku.is_none() && is(&SKU_ALIASES[..]) {
                map.sku = Some(index);
            } else if is(&SIZE_ALIASES[..]) {
                map.size = Some(index);
            } else if is(&COLOR_ALIASES[..]) {
                map.color = Some(index);
            }
        }

        map
    }

    pub fn has_sku(&self) -> bool {
        self.sku.is_some()
    }

    /// Build a record from one row. None when the row has no usable SKU.
    ///
    /// The SKU is kept as written; only the explicit columns are trimmed.
    pub fn record(&self, row: &StringRecord) -> Option<RawRecord> {
        let raw_sku = row.get(self.sku?)?;
        if raw_sku.trim().is_empty() {
            return None;
        }

        Some(RawRecord {
            raw_sku: raw_sku.to_string(),
            explicit_size: cell(row, self.size),
            explicit_color: cell(row, self.color),
        })
    }
}

/// Trimmed cell value; missing column, missing cell and blank all map to None
fn cell(row: &StringRecord, index: Option<usize>) -> Option<String> {
    let value = row.get(index?)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

// ============================================================================
// READING
// ============================================================================

/// Records read from a source, plus the rows dropped for lack of a SKU
#[derive(Debug, Clone, Default)]
pub struct RecordBatch {
    pub records: Vec<RawRecord>,
    pub skipped_missing_sku: usize,
}

/// Read records from a CSV file
pub fn read_records(path: &Path) -> Result<RecordBatch> {
    if !path.exists() {
        bail!("input file not found: {}", path.display());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;

    read_records_from_reader(file)
        .with_context(|| format!("Failed to read records from {}", path.display()))
}

/// Read records from any CSV source with a header row
pub fn read_records_from_reader<R: Read>(reader: R) -> Result<RecordBatch> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers().context("Failed to read CSV header")?.clone();
    let columns = ColumnMap::from_headers(&headers);
    debug!(?columns, "resolved input columns");

    if !columns.has_sku() {
        warn!(
            headers = ?headers.iter().collect::<Vec<_>>(),
            "no SKU column found (expected one of: {}); every row will be skipped",
            SKU_ALIASES.join(", ")
        );
    }

    let mut batch = RecordBatch::default();

    for (line_num, result) in reader.records().enumerate() {
        let row = result.with_context(|| {
            // +2 because: 1-indexed + header row
            format!("Failed to parse CSV line {}", line_num + 2)
        })?;

        match columns.record(&row) {
            Some(record) => batch.records.push(record),
            None => {
                debug!(line = line_num + 2, "row has no SKU, skipped");
                batch.skipped_missing_sku += 1;
            }
        }
    }

    Ok(batch)
}

// ============================================================================
// WRITING
// ============================================================================

/// Write variants to a CSV file, header first
pub fn write_variants(path: &Path, variants: &[CanonicalVariant]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    write_variants_to_writer(file, variants)
        .with_context(|| format!("Failed to write variants to {}", path.display()))
}

/// Write variants to any sink, header first
pub fn write_variants_to_writer<W: Write>(writer: W, variants: &[CanonicalVariant]) -> Result<()> {
    let mut writer = Writer::from_writer(writer);

    if variants.is_empty() {
        // serialize() emits the header with the first row, so write it by hand
        writer
            .write_record(OUTPUT_COLUMNS)
            .context("Failed to write CSV header")?;
    }

    for variant in variants {
        writer
            .serialize(variant)
            .with_context(|| format!("Failed to write variant {}", variant.sku))?;
    }

    writer.flush().context("Failed to flush CSV output")?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconcile::VariantKey;

    fn headers(names: &[&str]) -> StringRecord {
        StringRecord::from(names.to_vec())
    }

    #[test]
    fn test_column_map_aliases_case_insensitive() {
        let map = ColumnMap::from_headers(&headers(&[" MerchantSKU ", "Variant Size", "COLOR"]));
        assert_eq!(map.sku, Some(0));
        assert_eq!(map.size, Some(1));
        assert_eq!(map.color, Some(2));
    }

    #[test]
    fn test_column_map_first_sku_last_size_and_color() {
        let map = ColumnMap::from_headers(&headers(&[
            "name",
            "sku",
            "merchant_sku",
            "size",
            "variant_size",
            "color",
            "Variant Color",
        ]));
        assert_eq!(map.sku, Some(1));
        assert_eq!(map.size, Some(4));
        assert_eq!(map.color, Some(6));
    }

    #[test]
    fn test_later_blank_size_column_overrides() {
        let map = ColumnMap::from_headers(&headers(&["sku", "size", "variant_size"]));
        let record = map.record(&headers(&["TS001-S-WHT", "M", ""]));
        assert_eq!(record, Some(RawRecord::new("TS001-S-WHT")));
    }

    #[test]
    fn test_column_map_without_sku() {
        let map = ColumnMap::from_headers(&headers(&["product", "size"]));
        assert!(!map.has_sku());
    }

    #[test]
    fn test_record_trims_and_drops_blank() {
        let map = ColumnMap::from_headers(&headers(&["sku", "size", "color"]));

        let record = map.record(&headers(&["  TS001-S-WHT ", "  ", " Red "]));
        assert_eq!(
            record,
            Some(RawRecord {
                raw_sku: "  TS001-S-WHT ".to_string(),
                explicit_size: None,
                explicit_color: Some("Red".to_string()),
            })
        );

        assert_eq!(map.record(&headers(&["   ", "M", "Red"])), None);
    }

    #[test]
    fn test_short_row_has_no_explicit_fields() {
        let map = ColumnMap::from_headers(&headers(&["sku", "size", "color"]));
        let record = map.record(&headers(&["HD-L"]));
        assert_eq!(record, Some(RawRecord::new("HD-L")));
    }

    #[test]
    fn test_read_records_from_reader() {
        let input = "merchantSku,other\nTS001-S-WHT,x\n,y\nHD-L,z\n";
        let batch = read_records_from_reader(input.as_bytes()).unwrap();

        assert_eq!(batch.records.len(), 2);
        assert_eq!(batch.skipped_missing_sku, 1);
        assert_eq!(batch.records[0].raw_sku, "TS001-S-WHT");
        assert_eq!(batch.records[1].raw_sku, "HD-L");
    }

    #[test]
    fn test_read_without_sku_column_skips_everything() {
        let input = "product,size\nTS001,S\nTS002,M\n";
        let batch = read_records_from_reader(input.as_bytes()).unwrap();
        assert!(batch.records.is_empty());
        assert_eq!(batch.skipped_missing_sku, 2);
    }

    #[test]
    fn test_read_missing_file_fails() {
        let err = read_records(Path::new("/nonexistent/pim-input.csv")).unwrap_err();
        assert!(err.to_string().contains("input file not found"));
    }

    #[test]
    fn test_write_variants() {
        let variants = vec![
            CanonicalVariant::from(VariantKey::new("TS001", "S", "White")),
            CanonicalVariant::from(VariantKey::new("TS002", "M", "Navy, Dark")),
        ];
        let mut out = Vec::new();
        write_variants_to_writer(&mut out, &variants).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "sku,variant_size,variant_color,price_excl_vat,stock\n\
             TS001,S,White,1.00,0\n\
             TS002,M,\"Navy, Dark\",1.00,0\n"
        );
    }

    #[test]
    fn test_write_empty_still_has_header() {
        let mut out = Vec::new();
        write_variants_to_writer(&mut out, &[]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "sku,variant_size,variant_color,price_excl_vat,stock\n"
        );
    }
}
