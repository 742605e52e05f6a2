// 🔁 Import Pipeline - One pass over raw records → sorted canonical variants

use crate::csv_io::RecordBatch;
use crate::reconcile::RawRecord;
use crate::variant::{CanonicalVariant, VariantCatalog};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, trace};

// ============================================================================
// SUMMARY
// ============================================================================

/// Counters for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Rows that reached the engine. Rows without a SKU are not included.
    pub rows_processed: usize,

    /// Rows with no usable SKU, excluded from every other counter
    pub skipped_missing_sku: usize,

    /// Rows whose variant was already emitted
    pub duplicates_dropped: usize,

    pub variants_written: usize,

    /// Variant count per product code
    pub products: BTreeMap<String, usize>,
}

impl ImportSummary {
    pub fn product_count(&self) -> usize {
        self.products.len()
    }
}

/// Result of [`normalize_records`]
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    /// Sorted by (sku, variant_size, variant_color)
    pub variants: Vec<CanonicalVariant>,
    pub summary: ImportSummary,
}

/// Machine-readable run report (written as JSON by the CLI)
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub generated_at: DateTime<Utc>,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    pub summary: ImportSummary,
}

impl ImportReport {
    pub fn new(input: String, output: Option<String>, summary: ImportSummary) -> Self {
        ImportReport {
            generated_at: Utc::now(),
            input,
            output,
            summary,
        }
    }
}

// ============================================================================
// PIPELINE
// ============================================================================

/// Normalize, deduplicate and sort a sequence of raw records.
///
/// Rows without a SKU are skipped and do not count toward the totals.
pub fn normalize_records<I>(records: I) -> ImportOutcome
where
    I: IntoIterator<Item = RawRecord>,
{
    let mut catalog = VariantCatalog::new();
    let mut summary = ImportSummary::default();

    for (index, record) in records.into_iter().enumerate() {
        if !record.has_sku() {
            debug!(row = index + 1, "skipping row without SKU");
            summary.skipped_missing_sku += 1;
            continue;
        }

        summary.rows_processed += 1;

        let key = record.reconcile();
        trace!(
            row = index + 1,
            raw_sku = %record.raw_sku,
            resolution = record.resolution().as_str(),
            product_code = %key.product_code,
            size = %key.size,
            color = %key.color,
            "reconciled row"
        );

        if !catalog.insert(key) {
            debug!(row = index + 1, raw_sku = %record.raw_sku, "duplicate variant dropped");
            summary.duplicates_dropped += 1;
        }
    }

    summary.products = catalog.product_counts();
    let variants = catalog.into_sorted_variants();
    summary.variants_written = variants.len();

    info!(
        rows = summary.rows_processed,
        variants = summary.variants_written,
        products = summary.product_count(),
        skipped = summary.skipped_missing_sku,
        duplicates = summary.duplicates_dropped,
        "normalized records"
    );

    ImportOutcome { variants, summary }
}

/// Normalize a batch from the record source.
///
/// Rows the source already dropped for lack of a SKU only add to `skipped_missing_sku`.
pub fn normalize_batch(batch: RecordBatch) -> ImportOutcome {
    let mut outcome = normalize_records(batch.records);
    outcome.summary.skipped_missing_sku += batch.skipped_missing_sku;
    outcome
}

// ============================================================================
// TESTS
// ============================================================================
