// 🎨 Color Normalizer - Short color codes → display names
// The table is part of the output contract: downstream catalogs key off these exact names.

// ============================================================================
// COLOR TABLE
// ============================================================================

/// Name returned when no color information is available
pub const DEFAULT_COLOR: &str = "Default";

/// Fixed code → name table.
///
/// Single letters are overloaded across unrelated colors in merchant data,
/// each one resolves to exactly one name here and context is never inferred.
/// "B" and "BL" both mean Blue, "BR" is Brown.
static COLOR_CODES: &[(&str, &str)] = &[
    ("WHT", "White"),
    ("BLK", "Black"),
    ("GRY", "Grey"),
    ("NAV", "Navy"),
    ("PNK", "Pink"),
    ("BL", "Blue"),
    ("OL", "Olive"),
    ("FL", "Floral"),
    ("DE", "Denim"),
    ("RE", "Red"),
    ("WH", "White"),
    ("GR", "Green"),
    ("BR", "Brown"),
    ("WI", "Wine"),
    ("B", "Blue"),
    ("V", "Violet"),
    ("F", "Floral"),
    ("L", "Lavender"),
    ("G", "Green"),
    ("N", "Navy"),
    ("D", "Denim"),
    ("C", "Cream"),
    ("E", "Ecru"),
    ("R", "Red"),
    ("H", "Honey"),
    ("I", "Ivory"),
    ("O", "Orange"),
    ("S", "Silver"),
    ("T", "Tan"),
    ("W", "White"),
];

/// All known (code, name) pairs, in table order
pub fn color_codes() -> impl Iterator<Item = (&'static str, &'static str)> {
    COLOR_CODES.iter().copied()
}

/// Look up an uppercase code. Exact match only.
pub fn lookup_color_code(code: &str) -> Option<&'static str> {
    COLOR_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Convert a color code to its display name.
///
/// - empty → "Default"
/// - contains a space or longer than 3 chars → already a full name, returned as-is
/// - known code (case-insensitive) → mapped name
/// - anything else → returned unchanged
///
/// # Examples:
/// ```
/// use pim_import::normalize_color;
///
/// assert_eq!(normalize_color("wht"), "White");
/// assert_eq!(normalize_color("Light Blue"), "Light Blue");
/// assert_eq!(normalize_color("ZZ"), "ZZ");
/// assert_eq!(normalize_color(""), "Default");
/// ```
pub fn normalize_color(code_or_name: &str) -> String {
    if code_or_name.is_empty() {
        return DEFAULT_COLOR.to_string();
    }

    if code_or_name.contains(' ') || code_or_name.chars().count() > 3 {
        return code_or_name.to_string();
    }

    let upper = code_or_name.to_uppercase();
    match lookup_color_code(&upper) {
        Some(name) => name.to_string(),
        None => code_or_name.to_string(),
    }
}

/// Same as [`normalize_color`], with an absent value treated as empty
pub fn normalize_optional_color(code_or_name: Option<&str>) -> String {
    normalize_color(code_or_name.unwrap_or(""))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() {
        assert_eq!(normalize_color(""), "Default");
        assert_eq!(normalize_optional_color(None), "Default");
        assert_eq!(normalize_optional_color(Some("")), "Default");
    }

    #[test]
    fn test_known_codes_case_insensitive() {
        assert_eq!(normalize_color("WHT"), "White");
        assert_eq!(normalize_color("wht"), "White");
        assert_eq!(normalize_color("Blk"), "Black");
        assert_eq!(normalize_color("nav"), "Navy");
    }

    #[test]
    fn test_ambiguous_codes_have_one_meaning() {
        assert_eq!(normalize_color("B"), "Blue");
        assert_eq!(normalize_color("BL"), "Blue");
        assert_eq!(normalize_color("BR"), "Brown");
        assert_eq!(normalize_color("N"), "Navy");
        assert_eq!(normalize_color("NAV"), "Navy");
        assert_eq!(normalize_color("S"), "Silver");
        assert_eq!(normalize_color("W"), "White");
        assert_eq!(normalize_color("WH"), "White");
    }

    #[test]
    fn test_unknown_short_code_passes_through() {
        assert_eq!(normalize_color("ZZ"), "ZZ");
        assert_eq!(normalize_color("zz"), "zz");
        assert_eq!(normalize_color("X1"), "X1");
    }

    #[test]
    fn test_full_names_untouched() {
        assert_eq!(normalize_color("Red"), "Red");
        assert_eq!(normalize_color("Navy Blue"), "Navy Blue");
        assert_eq!(normalize_color("white"), "white");
        // Short but with a space: still a name
        assert_eq!(normalize_color("B W"), "B W");
    }

    #[test]
    fn test_full_names_are_fixed_points() {
        for name in ["White", "Light Grey", "burgundy", "A B"] {
            let once = normalize_color(name);
            assert_eq!(normalize_color(&once), once);
        }
    }

    #[test]
    fn test_every_mapped_name_is_stable() {
        // Mapped names are all longer than 3 chars, so normalizing again is a no-op
        for (code, name) in color_codes() {
            assert_eq!(normalize_color(code), name);
            assert_eq!(normalize_color(name), name);
        }
    }

    #[test]
    fn test_table_codes_are_short_uppercase_and_unique() {
        let codes: Vec<&str> = color_codes().map(|(c, _)| c).collect();
        for code in &codes {
            assert!((1..=3).contains(&code.len()), "bad code length: {}", code);
            assert_eq!(code.to_uppercase(), *code);
        }
        let mut sorted = codes.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), codes.len());
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(lookup_color_code("WHT"), Some("White"));
        assert_eq!(lookup_color_code("wht"), None);
        assert_eq!(lookup_color_code("PUR"), None);
    }
}
