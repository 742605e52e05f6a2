// PIM Import - Core Library
// SKU normalization engine plus the CSV wrappers used by the CLI

pub mod color;
pub mod sku;
pub mod reconcile;
pub mod variant;
pub mod pipeline;
pub mod csv_io;
pub mod logging;
pub mod cli;

// Re-export commonly used types
pub use color::{
    normalize_color, normalize_optional_color, lookup_color_code, color_codes, DEFAULT_COLOR,
};
pub use sku::{ParsedSku, parse_sku, product_code_prefix, SKU_DELIMITER};
pub use reconcile::{RawRecord, VariantKey, Resolution, reconcile, ONE_SIZE};
pub use variant::{
    CanonicalVariant, VariantCatalog,
    PLACEHOLDER_PRICE, PLACEHOLDER_STOCK, OUTPUT_COLUMNS,
};
pub use pipeline::{
    ImportOutcome, ImportReport, ImportSummary,
    normalize_records, normalize_batch,
};
pub use csv_io::{
    ColumnMap, RecordBatch,
    read_records, read_records_from_reader, write_variants, write_variants_to_writer,
    SKU_ALIASES, SIZE_ALIASES, COLOR_ALIASES,
};
