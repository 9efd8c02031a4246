// ucd/mod.rs - Built-in Unicode Character Database lookups.
//
// Binary search over the compact range tables in tables.rs. These are the
// terminal implementations behind UnicodeFuncs::builtin(); they can also
// be called directly when no provider chain is involved.

mod tables;

pub(crate) use tables::{COMPOSITIONS, COMPOSITION_EXCLUSIONS, DECOMPOSITIONS};

use crate::category::GeneralCategory;
use crate::script::Script;
use crate::Codepoint;

fn range_value<T: Copy>(ranges: &[(Codepoint, Codepoint, T)], cp: Codepoint) -> Option<T> {
    let idx = ranges.partition_point(|&(first, _, _)| first <= cp);
    if idx == 0 {
        return None;
    }
    let (first, last, value) = ranges[idx - 1];
    (first <= cp && cp <= last).then_some(value)
}

/// Canonical combining class; 0 for codepoints with no table entry.
pub fn combining_class(cp: Codepoint) -> u8 {
    range_value(tables::COMBINING_CLASS_RANGES, cp).unwrap_or(0)
}

/// General category; `Unassigned` for codepoints with no table entry.
pub fn general_category(cp: Codepoint) -> GeneralCategory {
    range_value(tables::GENERAL_CATEGORY_RANGES, cp).unwrap_or(GeneralCategory::Unassigned)
}

/// Mirroring partner; the codepoint itself when it does not mirror.
pub fn mirroring(cp: Codepoint) -> Codepoint {
    match tables::MIRRORING_PAIRS.binary_search_by_key(&cp, |&(from, _)| from) {
        Ok(idx) => tables::MIRRORING_PAIRS[idx].1,
        Err(_) => cp,
    }
}

/// Script; `Unknown` for codepoints with no table entry.
pub fn script(cp: Codepoint) -> Script {
    range_value(tables::SCRIPT_RANGES, cp).unwrap_or(Script::Unknown)
}

/// Whether `cp` is a Default_Ignorable_Code_Point.
///
/// Four Default_Ignorable codepoints are deliberately excepted: U+115F,
/// U+1160, U+3164 and U+FFA0 are implemented with regular spacing glyphs
/// by the fonts in circulation, so hiding them would break rendering.
pub fn is_default_ignorable(cp: Codepoint) -> bool {
    let plane = cp >> 16;
    if plane == 0 {
        match cp >> 8 {
            0x00 => cp == 0x00AD,
            0x03 => cp == 0x034F,
            0x06 => cp == 0x061C,
            0x17 => (0x17B4..=0x17B5).contains(&cp),
            0x18 => (0x180B..=0x180E).contains(&cp),
            0x20 => {
                (0x200B..=0x200F).contains(&cp)
                    || (0x202A..=0x202E).contains(&cp)
                    || (0x2060..=0x206F).contains(&cp)
            }
            0xFE => (0xFE00..=0xFE0F).contains(&cp) || cp == 0xFEFF,
            0xFF => (0xFFF0..=0xFFF8).contains(&cp),
            _ => false,
        }
    } else {
        match plane {
            0x01 => (0x1D173..=0x1D17A).contains(&cp),
            0x0E => (0xE0000..=0xE0FFF).contains(&cp),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted_ranges<T: Copy>(ranges: &[(Codepoint, Codepoint, T)]) {
        for window in ranges.windows(2) {
            let (_, prev_last, _) = window[0];
            let (next_first, _, _) = window[1];
            assert!(prev_last < next_first, "overlap near {:#06X}", next_first);
        }
        for &(first, last, _) in ranges {
            assert!(first <= last, "inverted range at {:#06X}", first);
        }
    }

    #[test]
    fn tables_are_sorted_and_disjoint() {
        assert_sorted_ranges(tables::COMBINING_CLASS_RANGES);
        assert_sorted_ranges(tables::GENERAL_CATEGORY_RANGES);
        assert_sorted_ranges(tables::SCRIPT_RANGES);

        for window in tables::MIRRORING_PAIRS.windows(2) {
            assert!(window[0].0 < window[1].0);
        }
        for window in tables::DECOMPOSITIONS.windows(2) {
            assert!(window[0].0 < window[1].0);
        }
        for window in tables::COMPOSITIONS.windows(2) {
            assert!((window[0].0, window[0].1) < (window[1].0, window[1].1));
        }
        for window in tables::COMPOSITION_EXCLUSIONS.windows(2) {
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn mirroring_is_involutive() {
        for &(from, to) in tables::MIRRORING_PAIRS {
            assert_eq!(mirroring(to), from, "partner of {:#06X}", to);
        }
    }

    #[test]
    fn lookup_edges() {
        // First and last entries of a range.
        assert_eq!(combining_class(0x0300), 230);
        assert_eq!(combining_class(0x0314), 230);
        // Gap between ranges.
        assert_eq!(combining_class(0x05BE), 0);
        // Below the first range and beyond the last.
        assert_eq!(combining_class(0x0041), 0);
        assert_eq!(combining_class(0x0fff_ffff), 0);

        assert_eq!(general_category(0x0378), GeneralCategory::Unassigned);
        assert_eq!(script(0x0378), Script::Unknown);
        assert_eq!(mirroring(0x0041), 0x0041);
    }

    #[test]
    fn default_ignorables() {
        assert!(is_default_ignorable(0x00AD));
        assert!(is_default_ignorable(0x200D));
        assert!(is_default_ignorable(0xFE0F));
        assert!(is_default_ignorable(0xE0100));
        // The spacing-glyph exceptions.
        assert!(!is_default_ignorable(0x115F));
        assert!(!is_default_ignorable(0x1160));
        assert!(!is_default_ignorable(0x3164));
        assert!(!is_default_ignorable(0xFFA0));
        assert!(!is_default_ignorable(0x0041));
    }
}
