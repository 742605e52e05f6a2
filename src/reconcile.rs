// 🔀 Field Reconciliation - Explicit columns vs. values parsed from the SKU
// Explicit size/color columns win per field; the SKU text fills whatever is missing.

use crate::color::normalize_color;
use crate::sku::{parse_sku, product_code_prefix};

/// "One Size" sentinel used when no size can be derived
pub const ONE_SIZE: &str = "OS";

// ============================================================================
// INPUT RECORD
// ============================================================================

/// One input row: the merchant SKU plus optional explicit columns
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRecord {
    pub raw_sku: String,
    pub explicit_size: Option<String>,
    pub explicit_color: Option<String>,
}

impl RawRecord {
    /// Record carrying only a SKU
    pub fn new(raw_sku: impl Into<String>) -> Self {
        RawRecord {
            raw_sku: raw_sku.into(),
            explicit_size: None,
            explicit_color: None,
        }
    }

    /// Builder pattern: add explicit size
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.explicit_size = Some(size.into());
        self
    }

    /// Builder pattern: add explicit color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.explicit_color = Some(color.into());
        self
    }

    /// False when the SKU is empty or whitespace only. Such rows are skipped.
    pub fn has_sku(&self) -> bool {
        !self.raw_sku.trim().is_empty()
    }

    /// Which reconciliation path this record takes
    pub fn resolution(&self) -> Resolution {
        Resolution::classify(
            present(self.explicit_size.as_deref()),
            present(self.explicit_color.as_deref()),
        )
    }

    pub fn reconcile(&self) -> VariantKey {
        reconcile(
            &self.raw_sku,
            self.explicit_size.as_deref(),
            self.explicit_color.as_deref(),
        )
    }
}

// ============================================================================
// RESULT
// ============================================================================

/// Canonical variant identity.
///
/// Field order matters: the derived `Ord` is the output sort order
/// (product code, then size, then color).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VariantKey {
    pub product_code: String,
    pub size: String,
    pub color: String,
}

impl VariantKey {
    pub fn new(
        product_code: impl Into<String>,
        size: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        VariantKey {
            product_code: product_code.into(),
            size: size.into(),
            color: color.into(),
        }
    }
}

/// Where size and color come from for a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Both explicit columns set: SKU only supplies the product code
    Explicit,

    /// One explicit column set: SKU parse fills the other
    Partial,

    /// No explicit columns: everything comes from the SKU
    SkuOnly,
}

impl Resolution {
    fn classify(size: Option<&str>, color: Option<&str>) -> Self {
        match (size, color) {
            (Some(_), Some(_)) => Resolution::Explicit,
            (None, None) => Resolution::SkuOnly,
            _ => Resolution::Partial,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::Explicit => "explicit",
            Resolution::Partial => "partial",
            Resolution::SkuOnly => "sku-only",
        }
    }
}

/// Blank explicit values count as absent
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

// ============================================================================
// RECONCILIATION
// ============================================================================

/// Derive (product code, size, color) for one row.
///
/// # Policy (in order):
/// 1. size and color both explicit → product code is the untrimmed SKU text
///    before the first '-', size verbatim, color normalized
/// 2. one explicit → full SKU parse, explicit value wins for its field, the
///    parsed value (or "OS" for an empty size) fills the other
/// 3. none explicit → full SKU parse, empty size becomes "OS"
///
/// Never fails: malformed SKUs degrade to pass-through values.
pub fn reconcile(
    raw_sku: &str,
    explicit_size: Option<&str>,
    explicit_color: Option<&str>,
) -> VariantKey {
    let explicit_size = present(explicit_size);
    let explicit_color = present(explicit_color);

    if let (Some(size), Some(color)) = (explicit_size, explicit_color) {
        return VariantKey {
            product_code: product_code_prefix(raw_sku).to_string(),
            size: size.to_string(),
            color: normalize_color(color),
        };
    }

    let parsed = parse_sku(raw_sku);

    let size = match explicit_size {
        Some(size) => size.to_string(),
        None if parsed.has_size() => parsed.size,
        None => ONE_SIZE.to_string(),
    };

    let color = normalize_color(explicit_color.unwrap_or(&parsed.color));

    VariantKey {
        product_code: parsed.product_code,
        size,
        color,
    }
}

// ============================================================================
// TESTS
// ============================================================================
