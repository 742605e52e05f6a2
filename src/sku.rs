// 🏷️ SKU Parser - Split merchant SKUs into product / size / color
// Merchant SKUs loosely follow PRODUCT-SIZE-COLOR, but nothing guarantees it.

/// Segment separator inside a merchant SKU
pub const SKU_DELIMITER: char = '-';

// ============================================================================
// PARSED SKU
// ============================================================================

/// Result of splitting a merchant SKU.
///
/// `size` and `color` are empty when the SKU does not carry them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSku {
    pub product_code: String,
    pub size: String,
    pub color: String,
}

impl ParsedSku {
    pub fn has_size(&self) -> bool {
        !self.size.is_empty()
    }

    pub fn has_color(&self) -> bool {
        !self.color.is_empty()
    }
}

/// Trim surrounding whitespace, then drop one trailing comma
fn clean_sku(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.strip_suffix(',').unwrap_or(trimmed)
}

/// Parse a merchant SKU.
///
/// # Rules:
/// - 3+ segments: first segment, second-to-last, last
/// - 2 segments: product + size, no color
/// - no delimiter: the cleaned SKU is the product code
///
/// Segments are not trimmed individually.
///
/// # Examples:
/// ```
/// use pim_import::parse_sku;
///
/// let parsed = parse_sku("TS001-S-WHT");
/// assert_eq!(parsed.product_code, "TS001");
/// assert_eq!(parsed.size, "S");
/// assert_eq!(parsed.color, "WHT");
/// ```
pub fn parse_sku(raw: &str) -> ParsedSku {
    let cleaned = clean_sku(raw);
    let parts: Vec<&str> = cleaned.split(SKU_DELIMITER).collect();

    match parts.as_slice() {
        [product, .., size, color] => ParsedSku {
            product_code: product.to_string(),
            size: size.to_string(),
            color: color.to_string(),
        },
        [product, size] => ParsedSku {
            product_code: product.to_string(),
            size: size.to_string(),
            color: String::new(),
        },
        _ => ParsedSku {
            product_code: cleaned.to_string(),
            size: String::new(),
            color: String::new(),
        },
    }
}

/// Text before the first delimiter, or the whole SKU when there is none.
///
/// Used when size and color arrive in their own columns, so only the
/// product code is needed from the SKU.
pub fn product_code_prefix(raw: &str) -> &str {
    match raw.split_once(SKU_DELIMITER) {
        Some((prefix, _)) => prefix,
        None => raw,
    }
}

// ============================================================================
// TESTS
// ============================================================================
