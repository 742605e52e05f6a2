// 📦 Canonical Variants - Deduplicated, sorted import rows
// Identity is the exact (sku, size, color) triple; price and stock are placeholders.

use crate::reconcile::VariantKey;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Placeholder price, real prices are set downstream
pub const PLACEHOLDER_PRICE: &str = "1.00";

/// Placeholder stock, real stock comes from a separate import
pub const PLACEHOLDER_STOCK: &str = "0";

/// Output column order
pub const OUTPUT_COLUMNS: [&str; 5] = [
    "sku",
    "variant_size",
    "variant_color",
    "price_excl_vat",
    "stock",
];

// ============================================================================
// CANONICAL VARIANT
// ============================================================================

/// One row of the catalog import table.
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalVariant {
    /// Product code
    pub sku: String,
    pub variant_size: String,
    pub variant_color: String,
    pub price_excl_vat: String,
    pub stock: String,
}

impl CanonicalVariant {
    pub fn from_key(key: VariantKey) -> Self {
        CanonicalVariant {
            sku: key.product_code,
            variant_size: key.size,
            variant_color: key.color,
            price_excl_vat: PLACEHOLDER_PRICE.to_string(),
            stock: PLACEHOLDER_STOCK.to_string(),
        }
    }

    /// Uniqueness key
    pub fn key(&self) -> VariantKey {
        VariantKey::new(&self.sku, &self.variant_size, &self.variant_color)
    }
}

impl From<VariantKey> for CanonicalVariant {
    fn from(key: VariantKey) -> Self {
        CanonicalVariant::from_key(key)
    }
}

// ============================================================================
// VARIANT CATALOG
// ============================================================================

/// Accumulator for one run.
///
/// Keys are case-sensitive exact matches; the first occurrence wins.
/// Iteration order is the sorted (sku, size, color) order.
#[derive(Debug, Default)]
pub struct VariantCatalog {
    keys: BTreeSet<VariantKey>,
}

impl VariantCatalog {
    pub fn new() -> Self {
        VariantCatalog::default()
    }

    /// Add a variant. Returns false when the key was already present.
    pub fn insert(&mut self, key: VariantKey) -> bool {
        self.keys.insert(key)
    }

    /// Variant count per product code, in product-code order
    pub fn product_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for key in &self.keys {
            *counts.entry(key.product_code.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Consume the catalog into output rows, sorted by (sku, size, color)
    pub fn into_sorted_variants(self) -> Vec<CanonicalVariant> {
        self.keys.into_iter().map(CanonicalVariant::from).collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
