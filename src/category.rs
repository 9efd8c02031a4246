// category.rs - General category classification.
//
// The enum order follows the UCD short-name groups (Cc, Cf, Cn, Co, Cs,
// L*, M*, N*, P*, S*, Z*); the discriminants double as bit positions in
// GeneralCategoryMask.

use bitflags::bitflags;

/// The primary classification of a codepoint, per the Unicode Character
/// Database `General_Category` property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GeneralCategory {
    Control,
    Format,
    Unassigned,
    PrivateUse,
    Surrogate,
    LowercaseLetter,
    ModifierLetter,
    OtherLetter,
    TitlecaseLetter,
    UppercaseLetter,
    SpacingMark,
    EnclosingMark,
    NonSpacingMark,
    DecimalNumber,
    LetterNumber,
    OtherNumber,
    ConnectPunctuation,
    DashPunctuation,
    ClosePunctuation,
    FinalPunctuation,
    InitialPunctuation,
    OtherPunctuation,
    OpenPunctuation,
    CurrencySymbol,
    ModifierSymbol,
    MathSymbol,
    OtherSymbol,
    LineSeparator,
    ParagraphSeparator,
    SpaceSeparator,
}

bitflags! {
    /// Bit-set over [`GeneralCategory`] values, for queries that test
    /// several categories at once (mark? letter? ...).
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct GeneralCategoryMask: u32 {
        const CONTROL = 1 << GeneralCategory::Control as u32;
        const FORMAT = 1 << GeneralCategory::Format as u32;
        const UNASSIGNED = 1 << GeneralCategory::Unassigned as u32;
        const PRIVATE_USE = 1 << GeneralCategory::PrivateUse as u32;
        const SURROGATE = 1 << GeneralCategory::Surrogate as u32;
        const LOWERCASE_LETTER = 1 << GeneralCategory::LowercaseLetter as u32;
        const MODIFIER_LETTER = 1 << GeneralCategory::ModifierLetter as u32;
        const OTHER_LETTER = 1 << GeneralCategory::OtherLetter as u32;
        const TITLECASE_LETTER = 1 << GeneralCategory::TitlecaseLetter as u32;
        const UPPERCASE_LETTER = 1 << GeneralCategory::UppercaseLetter as u32;
        const SPACING_MARK = 1 << GeneralCategory::SpacingMark as u32;
        const ENCLOSING_MARK = 1 << GeneralCategory::EnclosingMark as u32;
        const NON_SPACING_MARK = 1 << GeneralCategory::NonSpacingMark as u32;
        const DECIMAL_NUMBER = 1 << GeneralCategory::DecimalNumber as u32;
        const LETTER_NUMBER = 1 << GeneralCategory::LetterNumber as u32;
        const OTHER_NUMBER = 1 << GeneralCategory::OtherNumber as u32;
        const CONNECT_PUNCTUATION = 1 << GeneralCategory::ConnectPunctuation as u32;
        const DASH_PUNCTUATION = 1 << GeneralCategory::DashPunctuation as u32;
        const CLOSE_PUNCTUATION = 1 << GeneralCategory::ClosePunctuation as u32;
        const FINAL_PUNCTUATION = 1 << GeneralCategory::FinalPunctuation as u32;
        const INITIAL_PUNCTUATION = 1 << GeneralCategory::InitialPunctuation as u32;
        const OTHER_PUNCTUATION = 1 << GeneralCategory::OtherPunctuation as u32;
        const OPEN_PUNCTUATION = 1 << GeneralCategory::OpenPunctuation as u32;
        const CURRENCY_SYMBOL = 1 << GeneralCategory::CurrencySymbol as u32;
        const MODIFIER_SYMBOL = 1 << GeneralCategory::ModifierSymbol as u32;
        const MATH_SYMBOL = 1 << GeneralCategory::MathSymbol as u32;
        const OTHER_SYMBOL = 1 << GeneralCategory::OtherSymbol as u32;
        const LINE_SEPARATOR = 1 << GeneralCategory::LineSeparator as u32;
        const PARAGRAPH_SEPARATOR = 1 << GeneralCategory::ParagraphSeparator as u32;
        const SPACE_SEPARATOR = 1 << GeneralCategory::SpaceSeparator as u32;
    }
}

impl GeneralCategoryMask {
    /// All five letter categories (Ll, Lm, Lo, Lt, Lu).
    pub const LETTERS: Self = Self::LOWERCASE_LETTER
        .union(Self::MODIFIER_LETTER)
        .union(Self::OTHER_LETTER)
        .union(Self::TITLECASE_LETTER)
        .union(Self::UPPERCASE_LETTER);

    /// All three mark categories (Mc, Me, Mn).
    pub const MARKS: Self = Self::SPACING_MARK
        .union(Self::ENCLOSING_MARK)
        .union(Self::NON_SPACING_MARK);

    /// All three number categories (Nd, Nl, No).
    pub const NUMBERS: Self = Self::DECIMAL_NUMBER
        .union(Self::LETTER_NUMBER)
        .union(Self::OTHER_NUMBER);

    /// All seven punctuation categories.
    pub const PUNCTUATION: Self = Self::CONNECT_PUNCTUATION
        .union(Self::DASH_PUNCTUATION)
        .union(Self::CLOSE_PUNCTUATION)
        .union(Self::FINAL_PUNCTUATION)
        .union(Self::INITIAL_PUNCTUATION)
        .union(Self::OTHER_PUNCTUATION)
        .union(Self::OPEN_PUNCTUATION);

    /// All four symbol categories (Sc, Sk, Sm, So).
    pub const SYMBOLS: Self = Self::CURRENCY_SYMBOL
        .union(Self::MODIFIER_SYMBOL)
        .union(Self::MATH_SYMBOL)
        .union(Self::OTHER_SYMBOL);

    /// All three separator categories (Zl, Zp, Zs).
    pub const SEPARATORS: Self = Self::LINE_SEPARATOR
        .union(Self::PARAGRAPH_SEPARATOR)
        .union(Self::SPACE_SEPARATOR);
}

impl GeneralCategory {
    /// The single-bit mask for this category.
    pub const fn mask(self) -> GeneralCategoryMask {
        GeneralCategoryMask::from_bits_truncate(1 << self as u32)
    }

    pub fn is_letter(self) -> bool {
        GeneralCategoryMask::LETTERS.contains(self.mask())
    }

    pub fn is_mark(self) -> bool {
        GeneralCategoryMask::MARKS.contains(self.mask())
    }

    pub fn is_number(self) -> bool {
        GeneralCategoryMask::NUMBERS.contains(self.mask())
    }

    pub fn is_punctuation(self) -> bool {
        GeneralCategoryMask::PUNCTUATION.contains(self.mask())
    }

    pub fn is_symbol(self) -> bool {
        GeneralCategoryMask::SYMBOLS.contains(self.mask())
    }

    pub fn is_separator(self) -> bool {
        GeneralCategoryMask::SEPARATORS.contains(self.mask())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_queries() {
        assert!(GeneralCategory::LowercaseLetter.is_letter());
        assert!(GeneralCategory::TitlecaseLetter.is_letter());
        assert!(!GeneralCategory::NonSpacingMark.is_letter());

        assert!(GeneralCategory::NonSpacingMark.is_mark());
        assert!(GeneralCategory::SpacingMark.is_mark());
        assert!(GeneralCategory::EnclosingMark.is_mark());
        assert!(!GeneralCategory::Unassigned.is_mark());

        assert!(GeneralCategory::DecimalNumber.is_number());
        assert!(GeneralCategory::OpenPunctuation.is_punctuation());
        assert!(GeneralCategory::CurrencySymbol.is_symbol());
        assert!(GeneralCategory::SpaceSeparator.is_separator());
    }

    #[test]
    fn masks_are_disjoint() {
        let groups = [
            GeneralCategoryMask::LETTERS,
            GeneralCategoryMask::MARKS,
            GeneralCategoryMask::NUMBERS,
            GeneralCategoryMask::PUNCTUATION,
            GeneralCategoryMask::SYMBOLS,
            GeneralCategoryMask::SEPARATORS,
        ];
        for (i, a) in groups.iter().enumerate() {
            for b in &groups[i + 1..] {
                assert!(a.intersection(*b).is_empty());
            }
        }
    }
}
