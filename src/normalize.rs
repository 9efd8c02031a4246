// normalize.rs - Canonical composition and decomposition.
//
// The two primitives NFC/NFD are built from, independent of any provider
// chain: table lookups for the general case plus the arithmetic rule for
// the Hangul syllable block. Composition is deliberately not a pure
// inverse of decomposition; excluded composites decompose but are never
// re-formed.

use crate::ucd::{COMPOSITIONS, COMPOSITION_EXCLUSIONS, DECOMPOSITIONS};
use crate::Codepoint;

// === Hangul syllable arithmetic (Unicode ch. 3.12) ===

const S_BASE: Codepoint = 0xAC00;
const L_BASE: Codepoint = 0x1100;
const V_BASE: Codepoint = 0x1161;
const T_BASE: Codepoint = 0x11A7;
const L_COUNT: Codepoint = 19;
const V_COUNT: Codepoint = 21;
const T_COUNT: Codepoint = 28;
const N_COUNT: Codepoint = V_COUNT * T_COUNT;
const S_COUNT: Codepoint = L_COUNT * N_COUNT;

fn compose_hangul(a: Codepoint, b: Codepoint) -> Option<Codepoint> {
    if (L_BASE..L_BASE + L_COUNT).contains(&a) && (V_BASE..V_BASE + V_COUNT).contains(&b) {
        // L + V -> LV
        let l = a - L_BASE;
        let v = b - V_BASE;
        return Some(S_BASE + (l * V_COUNT + v) * T_COUNT);
    }
    // LV + T -> LVT. Only an LV syllable (trailing index 0) accepts a
    // trailing consonant, and T_BASE itself is the "no trailing
    // consonant" index, which never composes.
    if (S_BASE..S_BASE + S_COUNT).contains(&a)
        && (a - S_BASE) % T_COUNT == 0
        && (T_BASE + 1..T_BASE + T_COUNT).contains(&b)
    {
        return Some(a + (b - T_BASE));
    }
    None
}

fn decompose_hangul(ab: Codepoint) -> Option<(Codepoint, Codepoint)> {
    if !(S_BASE..S_BASE + S_COUNT).contains(&ab) {
        return None;
    }
    let s = ab - S_BASE;
    if s % T_COUNT == 0 {
        // LV -> L + V
        Some((L_BASE + s / N_COUNT, V_BASE + (s % N_COUNT) / T_COUNT))
    } else {
        // LVT -> LV + T
        Some((S_BASE + (s / T_COUNT) * T_COUNT, T_BASE + s % T_COUNT))
    }
}

/// Canonically compose a pair of codepoints.
///
/// Returns `None` for pairs with no canonical composition. That includes
/// every pair whose second component is 0 (composition always takes two
/// components) and every pair whose composite is in the composition
/// exclusion set, such as U+0308 + U+0301, which is never re-formed into
/// U+0344 even though U+0344 decomposes to that pair.
///
/// ```
/// use glifo::normalize::compose;
///
/// assert_eq!(compose(0x0041, 0x030A), Some(0x00C5));
/// assert_eq!(compose(0x0308, 0x0301), None);
/// ```
pub fn compose(a: Codepoint, b: Codepoint) -> Option<Codepoint> {
    if b == 0 {
        return None;
    }
    if let Some(ab) = compose_hangul(a, b) {
        return Some(ab);
    }
    let idx = COMPOSITIONS
        .binary_search_by_key(&(a, b), |&(x, y, _)| (x, y))
        .ok()?;
    let ab = COMPOSITIONS[idx].2;
    if COMPOSITION_EXCLUSIONS.binary_search(&ab).is_ok() {
        return None;
    }
    Some(ab)
}

/// Canonically decompose a codepoint.
///
/// Returns the decomposition pair, with a `None` second component for
/// singleton decompositions; returns `None` altogether when `ab` has no
/// canonical decomposition. Compatibility decompositions (like U+FB01
/// "fi") are not canonical and do not decompose here.
///
/// ```
/// use glifo::normalize::decompose;
///
/// assert_eq!(decompose(0x00C5), Some((0x0041, Some(0x030A))));
/// assert_eq!(decompose(0x212B), Some((0x00C5, None)));
/// assert_eq!(decompose(0x0041), None);
/// ```
pub fn decompose(ab: Codepoint) -> Option<(Codepoint, Option<Codepoint>)> {
    if let Some((a, b)) = decompose_hangul(ab) {
        return Some((a, Some(b)));
    }
    let idx = DECOMPOSITIONS
        .binary_search_by_key(&ab, |&(c, _, _)| c)
        .ok()?;
    let (_, a, b) = DECOMPOSITIONS[idx];
    Some((a, (b != 0).then_some(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hangul_lv() {
        assert_eq!(compose(0x1111, 0x1171), Some(0xD4CC));
        assert_eq!(decompose(0xD4CC), Some((0x1111, Some(0x1171))));
    }

    #[test]
    fn hangul_lvt() {
        assert_eq!(compose(0xD4CC, 0x11B6), Some(0xD4DB));
        assert_eq!(decompose(0xD4DB), Some((0xD4CC, Some(0x11B6))));
    }

    #[test]
    fn hangul_filler_never_composes() {
        assert_eq!(compose(0xAC00, 0x11A7), None);
        assert_eq!(compose(0xAC00, 0x11A8), Some(0xAC01));
    }

    #[test]
    fn hangul_lvt_takes_no_further_trailing() {
        assert_eq!(compose(0xAC01, 0x11A8), None);
    }

    #[test]
    fn hangul_block_edges() {
        // First and last syllables of the block.
        assert_eq!(decompose(0xAC00), Some((0x1100, Some(0x1161))));
        assert_eq!(decompose(0xD7A3), Some((0xD788, Some(0x11C2))));
        // Just outside the block.
        assert_eq!(decompose(0xABFF), None);
        assert_eq!(decompose(0xD7A4), None);
    }

    #[test]
    fn second_component_required() {
        assert_eq!(compose(0x0041, 0), None);
        assert_eq!(compose(0x212B, 0), None);
    }

    #[test]
    fn round_trip_non_excluded() {
        for &(a, b, ab) in COMPOSITIONS {
            if COMPOSITION_EXCLUSIONS.binary_search(&ab).is_ok() {
                assert_eq!(compose(a, b), None, "{:#06X} is excluded", ab);
            } else {
                assert_eq!(compose(a, b), Some(ab));
                assert_eq!(decompose(ab), Some((a, Some(b))));
            }
        }
    }

    #[test]
    fn singletons_decompose_but_never_compose() {
        assert_eq!(decompose(0x212B), Some((0x00C5, None)));
        assert_eq!(decompose(0x2126), Some((0x03A9, None)));
        assert_eq!(compose(0x212B, 0x0041), None);
    }
}
