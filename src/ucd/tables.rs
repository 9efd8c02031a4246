// ucd/tables.rs - Compact Unicode Character Database tables.
//
// Curated cut of the UCD 16.0 data files, complete for the pinned
// conformance set and block-accurate for the common shaping scripts.
// Range tables are (first, last, value), inclusive, non-overlapping,
// sorted by first codepoint; pair tables are sorted by key. Codepoints
// outside every range take the per-property default.

use crate::category::GeneralCategory as GC;
use crate::script::Script as S;
use crate::Codepoint;

// === Canonical combining class (ccc != 0 only) ===

pub(crate) static COMBINING_CLASS_RANGES: &[(Codepoint, Codepoint, u8)] = &[
    (0x0300, 0x0314, 230),
    (0x0315, 0x0315, 232),
    (0x0316, 0x0319, 220),
    (0x031A, 0x031A, 232),
    (0x031B, 0x031B, 216),
    (0x031C, 0x0320, 220),
    (0x0321, 0x0322, 202),
    (0x0323, 0x0326, 220),
    (0x0327, 0x0328, 202),
    (0x0329, 0x0333, 220),
    (0x0334, 0x0338, 1),
    (0x0339, 0x033C, 220),
    (0x033D, 0x0344, 230),
    (0x0345, 0x0345, 240),
    (0x0346, 0x0346, 230),
    (0x0347, 0x0349, 220),
    (0x034A, 0x034C, 230),
    (0x034D, 0x034E, 220),
    (0x0350, 0x0352, 230),
    (0x0353, 0x0356, 220),
    (0x0357, 0x0357, 230),
    (0x0358, 0x0358, 232),
    (0x0359, 0x035A, 220),
    (0x035B, 0x035B, 230),
    (0x035C, 0x035C, 233),
    (0x035D, 0x035E, 234),
    (0x035F, 0x035F, 233),
    (0x0360, 0x0361, 234),
    (0x0362, 0x0362, 233),
    (0x0363, 0x036F, 230),
    (0x0483, 0x0487, 230),
    (0x0591, 0x0591, 220),
    (0x0592, 0x0595, 230),
    (0x0596, 0x0596, 220),
    (0x0597, 0x0599, 230),
    (0x059A, 0x059A, 222),
    (0x059B, 0x059B, 220),
    (0x059C, 0x05A1, 230),
    (0x05A2, 0x05A7, 220),
    (0x05A8, 0x05A9, 230),
    (0x05AA, 0x05AA, 220),
    (0x05AB, 0x05AC, 230),
    (0x05AD, 0x05AD, 222),
    (0x05AE, 0x05AE, 228),
    (0x05AF, 0x05AF, 230),
    (0x05B0, 0x05B0, 10),
    (0x05B1, 0x05B1, 11),
    (0x05B2, 0x05B2, 12),
    (0x05B3, 0x05B3, 13),
    (0x05B4, 0x05B4, 14),
    (0x05B5, 0x05B5, 15),
    (0x05B6, 0x05B6, 16),
    (0x05B7, 0x05B7, 17),
    (0x05B8, 0x05B8, 18),
    (0x05B9, 0x05BA, 19),
    (0x05BB, 0x05BB, 20),
    (0x05BC, 0x05BC, 21),
    (0x05BD, 0x05BD, 22),
    (0x05BF, 0x05BF, 23),
    (0x05C1, 0x05C1, 24),
    (0x05C2, 0x05C2, 25),
    (0x05C4, 0x05C4, 230),
    (0x05C5, 0x05C5, 220),
    (0x05C7, 0x05C7, 18),
    (0x0610, 0x0617, 230),
    (0x0618, 0x0618, 30),
    (0x0619, 0x0619, 31),
    (0x061A, 0x061A, 32),
    (0x064B, 0x064B, 27),
    (0x064C, 0x064C, 28),
    (0x064D, 0x064D, 29),
    (0x064E, 0x064E, 30),
    (0x064F, 0x064F, 31),
    (0x0650, 0x0650, 32),
    (0x0651, 0x0651, 33),
    (0x0652, 0x0652, 34),
    (0x0653, 0x0654, 230),
    (0x0655, 0x0656, 220),
    (0x0657, 0x065B, 230),
    (0x065C, 0x065C, 220),
    (0x065D, 0x065E, 230),
    (0x065F, 0x065F, 220),
    (0x0670, 0x0670, 35),
    (0x06D6, 0x06DC, 230),
    (0x06DF, 0x06E2, 230),
    (0x06E3, 0x06E3, 220),
    (0x06E4, 0x06E4, 230),
    (0x06E7, 0x06E8, 230),
    (0x06EA, 0x06EA, 220),
    (0x06EB, 0x06EC, 230),
    (0x06ED, 0x06ED, 220),
    (0x0711, 0x0711, 36),
    (0x07EB, 0x07F1, 230),
    (0x07F2, 0x07F2, 220),
    (0x07F3, 0x07F3, 230),
    (0x07FD, 0x07FD, 220),
    (0x0897, 0x0897, 230),
    (0x093C, 0x093C, 7),
    (0x094D, 0x094D, 9),
    (0x0951, 0x0951, 230),
    (0x0952, 0x0952, 220),
    (0x0953, 0x0954, 230),
    (0x09BC, 0x09BC, 7),
    (0x09CD, 0x09CD, 9),
    (0x0A3C, 0x0A3C, 7),
    (0x0A4D, 0x0A4D, 9),
    (0x0ABC, 0x0ABC, 7),
    (0x0ACD, 0x0ACD, 9),
    (0x0B3C, 0x0B3C, 7),
    (0x0B4D, 0x0B4D, 9),
    (0x0BCD, 0x0BCD, 9),
    (0x0C4D, 0x0C4D, 9),
    (0x0C55, 0x0C55, 84),
    (0x0C56, 0x0C56, 91),
    (0x0CBC, 0x0CBC, 7),
    (0x0CCD, 0x0CCD, 9),
    (0x0D4D, 0x0D4D, 9),
    (0x0DCA, 0x0DCA, 9),
    (0x0E38, 0x0E39, 103),
    (0x0E3A, 0x0E3A, 9),
    (0x0E48, 0x0E4B, 107),
    (0x0EB8, 0x0EB9, 118),
    (0x0EBA, 0x0EBA, 9),
    (0x0EC8, 0x0ECB, 122),
    (0x0F39, 0x0F39, 216),
    (0x0F71, 0x0F71, 129),
    (0x0F72, 0x0F72, 130),
    (0x0F74, 0x0F74, 132),
    (0x0F7A, 0x0F7D, 130),
    (0x0F80, 0x0F80, 130),
    (0x0F82, 0x0F83, 230),
    (0x0F84, 0x0F84, 9),
    (0x0F86, 0x0F87, 230),
    (0x1037, 0x1037, 7),
    (0x1039, 0x103A, 9),
    (0x108D, 0x108D, 220),
    (0x135D, 0x135F, 230),
    (0x1714, 0x1714, 9),
    (0x17D2, 0x17D2, 9),
    (0x18A9, 0x18A9, 228),
    (0x1A60, 0x1A60, 9),
    (0x1AB0, 0x1AB4, 230),
    (0x1AB5, 0x1ABA, 220),
    (0x1ABB, 0x1ABC, 230),
    (0x1ABD, 0x1ABD, 220),
    (0x1ABF, 0x1AC0, 220),
    (0x1DC0, 0x1DC1, 230),
    (0x1DC2, 0x1DC2, 220),
    (0x1DC3, 0x1DC9, 230),
    (0x1DCA, 0x1DCA, 220),
    (0x1DCB, 0x1DCC, 230),
    (0x1DCD, 0x1DCD, 234),
    (0x1DCE, 0x1DCE, 214),
    (0x1DCF, 0x1DCF, 220),
    (0x1DD0, 0x1DD0, 202),
    (0x1DD1, 0x1DF5, 230),
    (0x1DF6, 0x1DF6, 232),
    (0x1DF7, 0x1DF8, 228),
    (0x1DF9, 0x1DF9, 220),
    (0x1DFA, 0x1DFA, 218),
    (0x1DFB, 0x1DFB, 230),
    (0x1DFC, 0x1DFC, 233),
    (0x1DFD, 0x1DFD, 220),
    (0x1DFE, 0x1DFE, 230),
    (0x1DFF, 0x1DFF, 220),
    (0x20D0, 0x20D1, 230),
    (0x20D2, 0x20D3, 1),
    (0x20D4, 0x20D7, 230),
    (0x20D8, 0x20DA, 1),
    (0x20DB, 0x20DC, 230),
    (0x20E1, 0x20E1, 230),
    (0x20E5, 0x20E6, 1),
    (0x20E7, 0x20E7, 230),
    (0x20E8, 0x20E8, 220),
    (0x20E9, 0x20E9, 230),
    (0x20EA, 0x20EB, 1),
    (0x20EC, 0x20EF, 220),
    (0x20F0, 0x20F0, 230),
    (0x302A, 0x302A, 218),
    (0x302B, 0x302B, 228),
    (0x302C, 0x302C, 232),
    (0x302D, 0x302D, 222),
    (0x302E, 0x302F, 224),
    (0x3099, 0x309A, 8),
    (0xA66F, 0xA66F, 230),
    (0xA674, 0xA67D, 230),
    (0xA69E, 0xA69F, 230),
    (0xA806, 0xA806, 9),
    (0xA8C4, 0xA8C4, 9),
    (0xA8E0, 0xA8F1, 230),
    (0xA953, 0xA953, 9),
    (0xA9C0, 0xA9C0, 9),
    (0xFB1E, 0xFB1E, 26),
    (0xFE20, 0xFE26, 230),
    (0x101FD, 0x101FD, 220),
    (0x10EFD, 0x10EFF, 220),
    (0x11046, 0x11046, 9),
    (0x1D165, 0x1D166, 216),
    (0x1D167, 0x1D169, 1),
    (0x1D16D, 0x1D16D, 226),
    (0x1D16E, 0x1D172, 216),
    (0x1E000, 0x1E006, 230),
    (0x1E008, 0x1E018, 230),
];

// === General category ===
// Gaps are Unassigned.

pub(crate) static GENERAL_CATEGORY_RANGES: &[(Codepoint, Codepoint, GC)] = &[
    (0x0000, 0x001F, GC::Control),
    (0x0020, 0x0020, GC::SpaceSeparator),
    (0x0021, 0x0023, GC::OtherPunctuation),
    (0x0024, 0x0024, GC::CurrencySymbol),
    (0x0025, 0x0027, GC::OtherPunctuation),
    (0x0028, 0x0028, GC::OpenPunctuation),
    (0x0029, 0x0029, GC::ClosePunctuation),
    (0x002A, 0x002A, GC::OtherPunctuation),
    (0x002B, 0x002B, GC::MathSymbol),
    (0x002C, 0x002C, GC::OtherPunctuation),
    (0x002D, 0x002D, GC::DashPunctuation),
    (0x002E, 0x002F, GC::OtherPunctuation),
    (0x0030, 0x0039, GC::DecimalNumber),
    (0x003A, 0x003B, GC::OtherPunctuation),
    (0x003C, 0x003E, GC::MathSymbol),
    (0x003F, 0x0040, GC::OtherPunctuation),
    (0x0041, 0x005A, GC::UppercaseLetter),
    (0x005B, 0x005B, GC::OpenPunctuation),
    (0x005C, 0x005C, GC::OtherPunctuation),
    (0x005D, 0x005D, GC::ClosePunctuation),
    (0x005E, 0x005E, GC::ModifierSymbol),
    (0x005F, 0x005F, GC::ConnectPunctuation),
    (0x0060, 0x0060, GC::ModifierSymbol),
    (0x0061, 0x007A, GC::LowercaseLetter),
    (0x007B, 0x007B, GC::OpenPunctuation),
    (0x007C, 0x007C, GC::MathSymbol),
    (0x007D, 0x007D, GC::ClosePunctuation),
    (0x007E, 0x007E, GC::MathSymbol),
    (0x007F, 0x009F, GC::Control),
    (0x00A0, 0x00A0, GC::SpaceSeparator),
    (0x00A1, 0x00A1, GC::OtherPunctuation),
    (0x00A2, 0x00A5, GC::CurrencySymbol),
    (0x00A6, 0x00A6, GC::OtherSymbol),
    (0x00A7, 0x00A7, GC::OtherPunctuation),
    (0x00A8, 0x00A8, GC::ModifierSymbol),
    (0x00A9, 0x00A9, GC::OtherSymbol),
    (0x00AA, 0x00AA, GC::OtherLetter),
    (0x00AB, 0x00AB, GC::InitialPunctuation),
    (0x00AC, 0x00AC, GC::MathSymbol),
    (0x00AD, 0x00AD, GC::Format),
    (0x00AE, 0x00AE, GC::OtherSymbol),
    (0x00AF, 0x00AF, GC::ModifierSymbol),
    (0x00B0, 0x00B0, GC::OtherSymbol),
    (0x00B1, 0x00B1, GC::MathSymbol),
    (0x00B2, 0x00B3, GC::OtherNumber),
    (0x00B4, 0x00B4, GC::ModifierSymbol),
    (0x00B5, 0x00B5, GC::LowercaseLetter),
    (0x00B6, 0x00B7, GC::OtherPunctuation),
    (0x00B8, 0x00B8, GC::ModifierSymbol),
    (0x00B9, 0x00B9, GC::OtherNumber),
    (0x00BA, 0x00BA, GC::OtherLetter),
    (0x00BB, 0x00BB, GC::FinalPunctuation),
    (0x00BC, 0x00BE, GC::OtherNumber),
    (0x00BF, 0x00BF, GC::OtherPunctuation),
    (0x00C0, 0x00D6, GC::UppercaseLetter),
    (0x00D7, 0x00D7, GC::MathSymbol),
    (0x00D8, 0x00DE, GC::UppercaseLetter),
    (0x00DF, 0x00F6, GC::LowercaseLetter),
    (0x00F7, 0x00F7, GC::MathSymbol),
    (0x00F8, 0x00FF, GC::LowercaseLetter),
    (0x01C5, 0x01C5, GC::TitlecaseLetter),
    (0x02B0, 0x02C1, GC::ModifierLetter),
    (0x0300, 0x036F, GC::NonSpacingMark),
    (0x0386, 0x0386, GC::UppercaseLetter),
    (0x0388, 0x038A, GC::UppercaseLetter),
    (0x038C, 0x038C, GC::UppercaseLetter),
    (0x038E, 0x038F, GC::UppercaseLetter),
    (0x0391, 0x03A1, GC::UppercaseLetter),
    (0x03A3, 0x03AB, GC::UppercaseLetter),
    (0x03AC, 0x03CE, GC::LowercaseLetter),
    (0x0400, 0x042F, GC::UppercaseLetter),
    (0x0430, 0x045F, GC::LowercaseLetter),
    (0x0483, 0x0487, GC::NonSpacingMark),
    (0x0531, 0x0556, GC::UppercaseLetter),
    (0x0559, 0x0559, GC::ModifierLetter),
    (0x055A, 0x055F, GC::OtherPunctuation),
    (0x0560, 0x0588, GC::LowercaseLetter),
    (0x0589, 0x0589, GC::OtherPunctuation),
    (0x058A, 0x058A, GC::DashPunctuation),
    (0x058D, 0x058E, GC::OtherSymbol),
    (0x058F, 0x058F, GC::CurrencySymbol),
    (0x0591, 0x05BD, GC::NonSpacingMark),
    (0x05BE, 0x05BE, GC::DashPunctuation),
    (0x05BF, 0x05BF, GC::NonSpacingMark),
    (0x05C0, 0x05C0, GC::OtherPunctuation),
    (0x05C1, 0x05C2, GC::NonSpacingMark),
    (0x05C3, 0x05C3, GC::OtherPunctuation),
    (0x05C4, 0x05C5, GC::NonSpacingMark),
    (0x05C6, 0x05C6, GC::OtherPunctuation),
    (0x05C7, 0x05C7, GC::NonSpacingMark),
    (0x05D0, 0x05EA, GC::OtherLetter),
    (0x05EF, 0x05F2, GC::OtherLetter),
    (0x05F3, 0x05F4, GC::OtherPunctuation),
    (0x0600, 0x0605, GC::Format),
    (0x0606, 0x0608, GC::MathSymbol),
    (0x0609, 0x060A, GC::OtherPunctuation),
    (0x060B, 0x060B, GC::CurrencySymbol),
    (0x060C, 0x060D, GC::OtherPunctuation),
    (0x060E, 0x060F, GC::OtherSymbol),
    (0x0610, 0x061A, GC::NonSpacingMark),
    (0x061B, 0x061B, GC::OtherPunctuation),
    (0x061C, 0x061C, GC::Format),
    (0x061D, 0x061F, GC::OtherPunctuation),
    (0x0620, 0x063F, GC::OtherLetter),
    (0x0640, 0x0640, GC::ModifierLetter),
    (0x0641, 0x064A, GC::OtherLetter),
    (0x064B, 0x065F, GC::NonSpacingMark),
    (0x0660, 0x0669, GC::DecimalNumber),
    (0x066A, 0x066D, GC::OtherPunctuation),
    (0x066E, 0x066F, GC::OtherLetter),
    (0x0670, 0x0670, GC::NonSpacingMark),
    (0x0671, 0x06D3, GC::OtherLetter),
    (0x06D4, 0x06D4, GC::OtherPunctuation),
    (0x06D5, 0x06D5, GC::OtherLetter),
    (0x06D6, 0x06DC, GC::NonSpacingMark),
    (0x0700, 0x070D, GC::OtherPunctuation),
    (0x0710, 0x0710, GC::OtherLetter),
    (0x0711, 0x0711, GC::NonSpacingMark),
    (0x0712, 0x072F, GC::OtherLetter),
    (0x0730, 0x074A, GC::NonSpacingMark),
    (0x0780, 0x07A5, GC::OtherLetter),
    (0x07A6, 0x07B0, GC::NonSpacingMark),
    (0x07B1, 0x07B1, GC::OtherLetter),
    (0x07C0, 0x07C9, GC::DecimalNumber),
    (0x07CA, 0x07EA, GC::OtherLetter),
    (0x07EB, 0x07F3, GC::NonSpacingMark),
    (0x07F4, 0x07F5, GC::ModifierLetter),
    (0x07F6, 0x07F6, GC::OtherSymbol),
    (0x07F7, 0x07F9, GC::OtherPunctuation),
    (0x07FA, 0x07FA, GC::ModifierLetter),
    (0x07FD, 0x07FD, GC::NonSpacingMark),
    (0x07FE, 0x07FF, GC::CurrencySymbol),
    (0x0800, 0x0815, GC::OtherLetter),
    (0x0840, 0x0858, GC::OtherLetter),
    (0x0870, 0x0887, GC::OtherLetter),
    (0x0897, 0x089F, GC::NonSpacingMark),
    (0x08A0, 0x08C8, GC::OtherLetter),
    (0x08C9, 0x08C9, GC::ModifierLetter),
    (0x08CA, 0x08E1, GC::NonSpacingMark),
    (0x08E3, 0x0902, GC::NonSpacingMark),
    (0x0903, 0x0903, GC::SpacingMark),
    (0x0904, 0x0939, GC::OtherLetter),
    (0x093A, 0x093A, GC::NonSpacingMark),
    (0x093B, 0x093B, GC::SpacingMark),
    (0x093C, 0x093C, GC::NonSpacingMark),
    (0x093D, 0x093D, GC::OtherLetter),
    (0x093E, 0x0940, GC::SpacingMark),
    (0x0941, 0x0948, GC::NonSpacingMark),
    (0x0949, 0x094C, GC::SpacingMark),
    (0x094D, 0x094D, GC::NonSpacingMark),
    (0x094E, 0x094F, GC::SpacingMark),
    (0x0950, 0x0950, GC::OtherLetter),
    (0x0951, 0x0957, GC::NonSpacingMark),
    (0x0958, 0x0961, GC::OtherLetter),
    (0x0962, 0x0963, GC::NonSpacingMark),
    (0x0964, 0x0965, GC::OtherPunctuation),
    (0x0966, 0x096F, GC::DecimalNumber),
    (0x09BC, 0x09BC, GC::NonSpacingMark),
    (0x09CD, 0x09CD, GC::NonSpacingMark),
    (0x09E6, 0x09EF, GC::DecimalNumber),
    (0x09F2, 0x09F3, GC::CurrencySymbol),
    (0x09FD, 0x09FD, GC::OtherPunctuation),
    (0x0A3C, 0x0A3C, GC::NonSpacingMark),
    (0x0A4D, 0x0A4D, GC::NonSpacingMark),
    (0x0A83, 0x0A83, GC::SpacingMark),
    (0x0B3C, 0x0B3C, GC::NonSpacingMark),
    (0x0C77, 0x0C77, GC::OtherPunctuation),
    (0x0CBC, 0x0CBC, GC::NonSpacingMark),
    (0x0CF3, 0x0CF3, GC::SpacingMark),
    (0x0D3D, 0x0D3D, GC::OtherLetter),
    (0x0E01, 0x0E30, GC::OtherLetter),
    (0x0E31, 0x0E31, GC::NonSpacingMark),
    (0x0E32, 0x0E33, GC::OtherLetter),
    (0x0E34, 0x0E3A, GC::NonSpacingMark),
    (0x0E3F, 0x0E3F, GC::CurrencySymbol),
    (0x0E40, 0x0E45, GC::OtherLetter),
    (0x0E46, 0x0E46, GC::ModifierLetter),
    (0x0E47, 0x0E4E, GC::NonSpacingMark),
    (0x0E4F, 0x0E4F, GC::OtherPunctuation),
    (0x0E50, 0x0E59, GC::DecimalNumber),
    (0x0F3A, 0x0F3A, GC::OpenPunctuation),
    (0x0F3B, 0x0F3B, GC::ClosePunctuation),
    (0x0F3C, 0x0F3C, GC::OpenPunctuation),
    (0x0F3D, 0x0F3D, GC::ClosePunctuation),
    (0x1000, 0x102A, GC::OtherLetter),
    (0x102B, 0x102C, GC::SpacingMark),
    (0x102D, 0x1030, GC::NonSpacingMark),
    (0x1031, 0x1031, GC::SpacingMark),
    (0x1032, 0x1037, GC::NonSpacingMark),
    (0x1100, 0x11FF, GC::OtherLetter),
    (0x13A0, 0x13F5, GC::UppercaseLetter),
    (0x1401, 0x166C, GC::OtherLetter),
    (0x16EE, 0x16F0, GC::LetterNumber),
    (0x1780, 0x17B3, GC::OtherLetter),
    (0x17D2, 0x17D2, GC::NonSpacingMark),
    (0x17F0, 0x17F9, GC::OtherNumber),
    (0x1DC0, 0x1DFF, GC::NonSpacingMark),
    (0x2000, 0x200A, GC::SpaceSeparator),
    (0x200B, 0x200F, GC::Format),
    (0x2010, 0x2015, GC::DashPunctuation),
    (0x2016, 0x2017, GC::OtherPunctuation),
    (0x2018, 0x2018, GC::InitialPunctuation),
    (0x2019, 0x2019, GC::FinalPunctuation),
    (0x201A, 0x201A, GC::OpenPunctuation),
    (0x201B, 0x201C, GC::InitialPunctuation),
    (0x201D, 0x201D, GC::FinalPunctuation),
    (0x201E, 0x201E, GC::OpenPunctuation),
    (0x201F, 0x201F, GC::InitialPunctuation),
    (0x2020, 0x2027, GC::OtherPunctuation),
    (0x2028, 0x2028, GC::LineSeparator),
    (0x2029, 0x2029, GC::ParagraphSeparator),
    (0x202A, 0x202E, GC::Format),
    (0x202F, 0x202F, GC::SpaceSeparator),
    (0x2030, 0x2038, GC::OtherPunctuation),
    (0x2039, 0x2039, GC::InitialPunctuation),
    (0x203A, 0x203A, GC::FinalPunctuation),
    (0x203B, 0x203E, GC::OtherPunctuation),
    (0x2060, 0x2064, GC::Format),
    (0x2066, 0x206F, GC::Format),
    (0x20A0, 0x20C0, GC::CurrencySymbol),
    (0x20D0, 0x20DC, GC::NonSpacingMark),
    (0x20DD, 0x20E0, GC::EnclosingMark),
    (0x20E1, 0x20E1, GC::NonSpacingMark),
    (0x20E2, 0x20E4, GC::EnclosingMark),
    (0x20E5, 0x20F0, GC::NonSpacingMark),
    (0x2126, 0x2126, GC::UppercaseLetter),
    (0x212A, 0x212B, GC::UppercaseLetter),
    (0x2208, 0x220D, GC::MathSymbol),
    (0x2264, 0x2265, GC::MathSymbol),
    (0x226A, 0x226B, GC::MathSymbol),
    (0x22F0, 0x22F1, GC::MathSymbol),
    (0x2308, 0x230B, GC::MathSymbol),
    (0x2329, 0x2329, GC::OpenPunctuation),
    (0x232A, 0x232A, GC::ClosePunctuation),
    (0x27CB, 0x27CD, GC::MathSymbol),
    (0x27E6, 0x27E6, GC::OpenPunctuation),
    (0x27E7, 0x27E7, GC::ClosePunctuation),
    (0x27E8, 0x27E8, GC::OpenPunctuation),
    (0x27E9, 0x27E9, GC::ClosePunctuation),
    (0x2800, 0x28FF, GC::OtherSymbol),
    (0x2983, 0x2983, GC::OpenPunctuation),
    (0x2984, 0x2984, GC::ClosePunctuation),
    (0x2BFE, 0x2BFE, GC::MathSymbol),
    (0x3005, 0x3005, GC::ModifierLetter),
    (0x3007, 0x3007, GC::LetterNumber),
    (0x3008, 0x3008, GC::OpenPunctuation),
    (0x3009, 0x3009, GC::ClosePunctuation),
    (0x300A, 0x300A, GC::OpenPunctuation),
    (0x300B, 0x300B, GC::ClosePunctuation),
    (0x300C, 0x300C, GC::OpenPunctuation),
    (0x300D, 0x300D, GC::ClosePunctuation),
    (0x300E, 0x300E, GC::OpenPunctuation),
    (0x300F, 0x300F, GC::ClosePunctuation),
    (0x3010, 0x3010, GC::OpenPunctuation),
    (0x3011, 0x3011, GC::ClosePunctuation),
    (0x3014, 0x3014, GC::OpenPunctuation),
    (0x3015, 0x3015, GC::ClosePunctuation),
    (0x3016, 0x3016, GC::OpenPunctuation),
    (0x3017, 0x3017, GC::ClosePunctuation),
    (0x3018, 0x3018, GC::OpenPunctuation),
    (0x3019, 0x3019, GC::ClosePunctuation),
    (0x301A, 0x301A, GC::OpenPunctuation),
    (0x301B, 0x301B, GC::ClosePunctuation),
    (0x302A, 0x302D, GC::NonSpacingMark),
    (0x302E, 0x302F, GC::SpacingMark),
    (0x3041, 0x3096, GC::OtherLetter),
    (0x3099, 0x309A, GC::NonSpacingMark),
    (0x309B, 0x309C, GC::ModifierSymbol),
    (0x309D, 0x309E, GC::ModifierLetter),
    (0x309F, 0x309F, GC::OtherLetter),
    (0x30A1, 0x30FA, GC::OtherLetter),
    (0x30FB, 0x30FB, GC::OtherPunctuation),
    (0x30FC, 0x30FE, GC::ModifierLetter),
    (0x30FF, 0x30FF, GC::OtherLetter),
    (0x31EF, 0x31EF, GC::OtherSymbol),
    (0x32FF, 0x32FF, GC::OtherSymbol),
    (0x3400, 0x4DBF, GC::OtherLetter),
    (0x4E00, 0x9FFF, GC::OtherLetter),
    (0xA000, 0xA48C, GC::OtherLetter),
    (0xA4D0, 0xA4F7, GC::OtherLetter),
    (0xA4F8, 0xA4FD, GC::ModifierLetter),
    (0xA674, 0xA67D, GC::NonSpacingMark),
    (0xA69E, 0xA69F, GC::NonSpacingMark),
    (0xA806, 0xA806, GC::NonSpacingMark),
    (0xA8E0, 0xA8F1, GC::NonSpacingMark),
    (0xAC00, 0xD7A3, GC::OtherLetter),
    (0xD800, 0xDFFF, GC::Surrogate),
    (0xE000, 0xF8FF, GC::PrivateUse),
    (0xFB1E, 0xFB1E, GC::NonSpacingMark),
    (0xFB29, 0xFB29, GC::MathSymbol),
    (0xFE20, 0xFE26, GC::NonSpacingMark),
    (0xFF08, 0xFF08, GC::OpenPunctuation),
    (0xFF09, 0xFF09, GC::ClosePunctuation),
    (0xFF10, 0xFF19, GC::DecimalNumber),
    (0xFF1C, 0xFF1E, GC::MathSymbol),
    (0xFF21, 0xFF3A, GC::UppercaseLetter),
    (0xFF3B, 0xFF3B, GC::OpenPunctuation),
    (0xFF3D, 0xFF3D, GC::ClosePunctuation),
    (0xFF41, 0xFF5A, GC::LowercaseLetter),
    (0xFF5B, 0xFF5B, GC::OpenPunctuation),
    (0xFF5D, 0xFF5D, GC::ClosePunctuation),
    (0xFF5F, 0xFF5F, GC::OpenPunctuation),
    (0xFF60, 0xFF60, GC::ClosePunctuation),
    (0xFF62, 0xFF62, GC::OpenPunctuation),
    (0xFF63, 0xFF63, GC::ClosePunctuation),
    (0x10D6E, 0x10D6E, GC::DashPunctuation),
    (0x1E000, 0x1E006, GC::NonSpacingMark),
    (0x1F130, 0x1F169, GC::OtherSymbol),
    (0x20000, 0x2A6DF, GC::OtherLetter),
];

// === Bidi mirroring pairs ===
// Sorted by the first member; both directions are listed explicitly.

pub(crate) static MIRRORING_PAIRS: &[(Codepoint, Codepoint)] = &[
    (0x0028, 0x0029),
    (0x0029, 0x0028),
    (0x003C, 0x003E),
    (0x003E, 0x003C),
    (0x005B, 0x005D),
    (0x005D, 0x005B),
    (0x007B, 0x007D),
    (0x007D, 0x007B),
    (0x00AB, 0x00BB),
    (0x00BB, 0x00AB),
    (0x2039, 0x203A),
    (0x203A, 0x2039),
    (0x2045, 0x2046),
    (0x2046, 0x2045),
    (0x207D, 0x207E),
    (0x207E, 0x207D),
    (0x208D, 0x208E),
    (0x208E, 0x208D),
    (0x2208, 0x220B),
    (0x2209, 0x220C),
    (0x220A, 0x220D),
    (0x220B, 0x2208),
    (0x220C, 0x2209),
    (0x220D, 0x220A),
    (0x221F, 0x2BFE),
    (0x2264, 0x2265),
    (0x2265, 0x2264),
    (0x226A, 0x226B),
    (0x226B, 0x226A),
    (0x22F0, 0x22F1),
    (0x22F1, 0x22F0),
    (0x2308, 0x2309),
    (0x2309, 0x2308),
    (0x230A, 0x230B),
    (0x230B, 0x230A),
    (0x2329, 0x232A),
    (0x232A, 0x2329),
    (0x27CB, 0x27CD),
    (0x27CD, 0x27CB),
    (0x27E6, 0x27E7),
    (0x27E7, 0x27E6),
    (0x27E8, 0x27E9),
    (0x27E9, 0x27E8),
    (0x2983, 0x2984),
    (0x2984, 0x2983),
    (0x2BFE, 0x221F),
    (0x3008, 0x3009),
    (0x3009, 0x3008),
    (0x300A, 0x300B),
    (0x300B, 0x300A),
    (0x300C, 0x300D),
    (0x300D, 0x300C),
    (0x300E, 0x300F),
    (0x300F, 0x300E),
    (0x3010, 0x3011),
    (0x3011, 0x3010),
    (0x3014, 0x3015),
    (0x3015, 0x3014),
    (0x3016, 0x3017),
    (0x3017, 0x3016),
    (0x3018, 0x3019),
    (0x3019, 0x3018),
    (0x301A, 0x301B),
    (0x301B, 0x301A),
    (0xFF08, 0xFF09),
    (0xFF09, 0xFF08),
    (0xFF1C, 0xFF1E),
    (0xFF1E, 0xFF1C),
    (0xFF3B, 0xFF3D),
    (0xFF3D, 0xFF3B),
    (0xFF5B, 0xFF5D),
    (0xFF5D, 0xFF5B),
    (0xFF5F, 0xFF60),
    (0xFF60, 0xFF5F),
    (0xFF62, 0xFF63),
    (0xFF63, 0xFF62),
];

// === Script ===
// Gaps are Unknown.

pub(crate) static SCRIPT_RANGES: &[(Codepoint, Codepoint, S)] = &[
    (0x0000, 0x0040, S::Common),
    (0x0041, 0x005A, S::Latin),
    (0x005B, 0x0060, S::Common),
    (0x0061, 0x007A, S::Latin),
    (0x007B, 0x00A9, S::Common),
    (0x00AA, 0x00AA, S::Latin),
    (0x00AB, 0x00B9, S::Common),
    (0x00BA, 0x00BA, S::Latin),
    (0x00BB, 0x00BF, S::Common),
    (0x00C0, 0x00D6, S::Latin),
    (0x00D7, 0x00D7, S::Common),
    (0x00D8, 0x00F6, S::Latin),
    (0x00F7, 0x00F7, S::Common),
    (0x00F8, 0x02B8, S::Latin),
    (0x02B9, 0x02DF, S::Common),
    (0x02E0, 0x02E4, S::Latin),
    (0x02E5, 0x02E9, S::Common),
    (0x0300, 0x036F, S::Inherited),
    (0x0370, 0x0373, S::Greek),
    (0x0374, 0x0374, S::Common),
    (0x0375, 0x0377, S::Greek),
    (0x037A, 0x037D, S::Greek),
    (0x037E, 0x037E, S::Common),
    (0x037F, 0x037F, S::Greek),
    (0x0384, 0x0384, S::Greek),
    (0x0385, 0x0385, S::Common),
    (0x0386, 0x0386, S::Greek),
    (0x0387, 0x0387, S::Common),
    (0x0388, 0x03E1, S::Greek),
    (0x03E2, 0x03EF, S::Coptic),
    (0x03F0, 0x03FF, S::Greek),
    (0x0400, 0x0484, S::Cyrillic),
    (0x0485, 0x0486, S::Inherited),
    (0x0487, 0x052F, S::Cyrillic),
    (0x0531, 0x0556, S::Armenian),
    (0x0559, 0x058A, S::Armenian),
    (0x058D, 0x058F, S::Armenian),
    (0x0591, 0x05C7, S::Hebrew),
    (0x05D0, 0x05EA, S::Hebrew),
    (0x05EF, 0x05F4, S::Hebrew),
    (0x0600, 0x0604, S::Arabic),
    (0x0606, 0x060B, S::Arabic),
    (0x060C, 0x060C, S::Common),
    (0x060D, 0x061E, S::Arabic),
    (0x061F, 0x061F, S::Common),
    (0x0620, 0x063F, S::Arabic),
    (0x0640, 0x0640, S::Common),
    (0x0641, 0x066F, S::Arabic),
    (0x0670, 0x0670, S::Inherited),
    (0x0671, 0x06FF, S::Arabic),
    (0x0700, 0x074F, S::Syriac),
    (0x0780, 0x07B1, S::Thaana),
    (0x07C0, 0x07FF, S::Nko),
    (0x0800, 0x083E, S::Samaritan),
    (0x0840, 0x085E, S::Mandaic),
    (0x0870, 0x08FF, S::Arabic),
    (0x0900, 0x0950, S::Devanagari),
    (0x0951, 0x0954, S::Inherited),
    (0x0955, 0x0963, S::Devanagari),
    (0x0964, 0x0965, S::Common),
    (0x0966, 0x097F, S::Devanagari),
    (0x0980, 0x09FE, S::Bengali),
    (0x0A01, 0x0A75, S::Gurmukhi),
    (0x0A81, 0x0AF1, S::Gujarati),
    (0x0B01, 0x0B77, S::Oriya),
    (0x0B80, 0x0BFA, S::Tamil),
    (0x0C00, 0x0C7F, S::Telugu),
    (0x0C80, 0x0CF3, S::Kannada),
    (0x0D00, 0x0D7F, S::Malayalam),
    (0x0D81, 0x0DF4, S::Sinhala),
    (0x0E01, 0x0E3A, S::Thai),
    (0x0E3F, 0x0E3F, S::Common),
    (0x0E40, 0x0E5B, S::Thai),
    (0x0E80, 0x0EDF, S::Lao),
    (0x0F00, 0x0FD4, S::Tibetan),
    (0x0FD5, 0x0FD8, S::Common),
    (0x0FD9, 0x0FDA, S::Tibetan),
    (0x1000, 0x109F, S::Myanmar),
    (0x10A0, 0x10C5, S::Georgian),
    (0x10D0, 0x10FA, S::Georgian),
    (0x10FB, 0x10FB, S::Common),
    (0x10FC, 0x10FF, S::Georgian),
    (0x1100, 0x11FF, S::Hangul),
    (0x1200, 0x137C, S::Ethiopic),
    (0x1380, 0x1399, S::Ethiopic),
    (0x13A0, 0x13F5, S::Cherokee),
    (0x13F8, 0x13FD, S::Cherokee),
    (0x1400, 0x167F, S::CanadianSyllabics),
    (0x1680, 0x169C, S::Ogham),
    (0x16A0, 0x16EA, S::Runic),
    (0x16EB, 0x16ED, S::Common),
    (0x16EE, 0x16F8, S::Runic),
    (0x1700, 0x171F, S::Tagalog),
    (0x1720, 0x1734, S::Hanunoo),
    (0x1735, 0x1736, S::Common),
    (0x1740, 0x1753, S::Buhid),
    (0x1760, 0x1773, S::Tagbanwa),
    (0x1780, 0x17F9, S::Khmer),
    (0x1800, 0x1801, S::Mongolian),
    (0x1802, 0x1803, S::Common),
    (0x1804, 0x1804, S::Mongolian),
    (0x1805, 0x1805, S::Common),
    (0x1806, 0x18AA, S::Mongolian),
    (0x18B0, 0x18F5, S::CanadianSyllabics),
    (0x1900, 0x194F, S::Limbu),
    (0x1950, 0x1974, S::TaiLe),
    (0x1980, 0x19DF, S::NewTaiLue),
    (0x1A00, 0x1A1F, S::Buginese),
    (0x1A20, 0x1AAD, S::TaiTham),
    (0x1AB0, 0x1ACE, S::Inherited),
    (0x1B00, 0x1B7F, S::Balinese),
    (0x1B80, 0x1BBF, S::Sundanese),
    (0x1BC0, 0x1BFF, S::Batak),
    (0x1C00, 0x1C4F, S::Lepcha),
    (0x1C50, 0x1C7F, S::OlChiki),
    (0x1CED, 0x1CED, S::Inherited),
    (0x1DC0, 0x1DFF, S::Inherited),
    (0x1E00, 0x1EFF, S::Latin),
    (0x1F00, 0x1FFE, S::Greek),
    (0x2000, 0x200B, S::Common),
    (0x200C, 0x200D, S::Inherited),
    (0x200E, 0x2064, S::Common),
    (0x2066, 0x2070, S::Common),
    (0x2071, 0x2071, S::Latin),
    (0x2074, 0x207E, S::Common),
    (0x207F, 0x207F, S::Latin),
    (0x2080, 0x208E, S::Common),
    (0x2090, 0x209C, S::Latin),
    (0x20A0, 0x20C0, S::Common),
    (0x20D0, 0x20F0, S::Inherited),
    (0x2100, 0x2125, S::Common),
    (0x2126, 0x2126, S::Greek),
    (0x2127, 0x2129, S::Common),
    (0x212A, 0x212B, S::Latin),
    (0x212C, 0x2131, S::Common),
    (0x2132, 0x2132, S::Latin),
    (0x2133, 0x214D, S::Common),
    (0x214E, 0x214E, S::Latin),
    (0x214F, 0x215F, S::Common),
    (0x2160, 0x2188, S::Latin),
    (0x2189, 0x218B, S::Common),
    (0x2190, 0x27FF, S::Common),
    (0x2800, 0x28FF, S::Braille),
    (0x2900, 0x2BFF, S::Common),
    (0x2C00, 0x2C5F, S::Glagolitic),
    (0x2C60, 0x2C7F, S::Latin),
    (0x2C80, 0x2CFF, S::Coptic),
    (0x2D00, 0x2D2D, S::Georgian),
    (0x2D30, 0x2D7F, S::Tifinagh),
    (0x2D80, 0x2DDE, S::Ethiopic),
    (0x2DE0, 0x2DFF, S::Cyrillic),
    (0x2E00, 0x2E5D, S::Common),
    (0x2E80, 0x2EF3, S::Han),
    (0x2F00, 0x2FD5, S::Han),
    (0x3000, 0x3004, S::Common),
    (0x3005, 0x3005, S::Han),
    (0x3006, 0x3006, S::Common),
    (0x3007, 0x3007, S::Han),
    (0x3008, 0x3020, S::Common),
    (0x3021, 0x3029, S::Han),
    (0x302A, 0x302D, S::Inherited),
    (0x302E, 0x302F, S::Hangul),
    (0x3030, 0x3037, S::Common),
    (0x3038, 0x303B, S::Han),
    (0x303C, 0x303F, S::Common),
    (0x3041, 0x3096, S::Hiragana),
    (0x3099, 0x309A, S::Inherited),
    (0x309B, 0x309C, S::Common),
    (0x309D, 0x309F, S::Hiragana),
    (0x30A0, 0x30A0, S::Common),
    (0x30A1, 0x30FA, S::Katakana),
    (0x30FB, 0x30FC, S::Common),
    (0x30FD, 0x30FF, S::Katakana),
    (0x3105, 0x312F, S::Bopomofo),
    (0x3131, 0x318E, S::Hangul),
    (0x31A0, 0x31BF, S::Bopomofo),
    (0x31F0, 0x31FF, S::Katakana),
    (0x3200, 0x321E, S::Hangul),
    (0x3220, 0x32FF, S::Common),
    (0x3400, 0x4DBF, S::Han),
    (0x4E00, 0x9FFF, S::Han),
    (0xA000, 0xA4CF, S::Yi),
    (0xA4D0, 0xA4FF, S::Lisu),
    (0xA500, 0xA62B, S::Vai),
    (0xA640, 0xA69F, S::Cyrillic),
    (0xA6A0, 0xA6F7, S::Bamum),
    (0xA700, 0xA721, S::Common),
    (0xA722, 0xA787, S::Latin),
    (0xA800, 0xA82C, S::SylotiNagri),
    (0xA840, 0xA877, S::PhagsPa),
    (0xA880, 0xA8D9, S::Saurashtra),
    (0xA8E0, 0xA8F1, S::Inherited),
    (0xA8F2, 0xA8FF, S::Devanagari),
    (0xA900, 0xA92D, S::KayahLi),
    (0xA92E, 0xA92E, S::Common),
    (0xA92F, 0xA92F, S::KayahLi),
    (0xA930, 0xA95F, S::Rejang),
    (0xA960, 0xA97C, S::Hangul),
    (0xA980, 0xA9DF, S::Javanese),
    (0xAA00, 0xAA5F, S::Cham),
    (0xAA60, 0xAA7F, S::Myanmar),
    (0xAA80, 0xAADF, S::TaiViet),
    (0xABC0, 0xABF9, S::MeeteiMayek),
    (0xAC00, 0xD7A3, S::Hangul),
    (0xD7B0, 0xD7FB, S::Hangul),
    (0xF900, 0xFA6D, S::Han),
    (0xFB00, 0xFB06, S::Latin),
    (0xFB13, 0xFB17, S::Armenian),
    (0xFB1D, 0xFB4F, S::Hebrew),
    (0xFB50, 0xFDFF, S::Arabic),
    (0xFE00, 0xFE0F, S::Inherited),
    (0xFE20, 0xFE2D, S::Inherited),
    (0xFF01, 0xFF20, S::Common),
    (0xFF21, 0xFF3A, S::Latin),
    (0xFF3B, 0xFF40, S::Common),
    (0xFF41, 0xFF5A, S::Latin),
    (0xFF5B, 0xFF65, S::Common),
    (0xFF66, 0xFF6F, S::Katakana),
    (0xFF70, 0xFF70, S::Common),
    (0xFF71, 0xFF9F, S::Katakana),
    (0x10000, 0x100FA, S::LinearB),
    (0x10280, 0x1029C, S::Lycian),
    (0x102A0, 0x102D0, S::Carian),
    (0x10300, 0x10323, S::OldItalic),
    (0x10330, 0x1034A, S::Gothic),
    (0x10350, 0x1037A, S::OldPermic),
    (0x10380, 0x1039F, S::Ugaritic),
    (0x103A0, 0x103D5, S::OldPersian),
    (0x10400, 0x1044F, S::Deseret),
    (0x10450, 0x1047F, S::Shavian),
    (0x10480, 0x104A9, S::Osmanya),
    (0x104B0, 0x104FB, S::Osage),
    (0x10500, 0x10527, S::Elbasan),
    (0x10530, 0x1056F, S::CaucasianAlbanian),
    (0x10570, 0x105BC, S::Vithkuqi),
    (0x105C0, 0x105F3, S::Todhri),
    (0x10600, 0x10767, S::LinearA),
    (0x10800, 0x1083F, S::Cypriot),
    (0x10840, 0x1085F, S::ImperialAramaic),
    (0x10860, 0x1087F, S::Palmyrene),
    (0x10880, 0x108AF, S::Nabataean),
    (0x108E0, 0x108FF, S::Hatran),
    (0x10900, 0x1091F, S::Phoenician),
    (0x10920, 0x1093F, S::Lydian),
    (0x10980, 0x1099F, S::MeroiticHieroglyphs),
    (0x109A0, 0x109FF, S::MeroiticCursive),
    (0x10A00, 0x10A58, S::Kharoshthi),
    (0x10A60, 0x10A7F, S::OldSouthArabian),
    (0x10A80, 0x10A9F, S::OldNorthArabian),
    (0x10AC0, 0x10AFF, S::Manichaean),
    (0x10B00, 0x10B3F, S::Avestan),
    (0x10B40, 0x10B5F, S::InscriptionalParthian),
    (0x10B60, 0x10B7F, S::InscriptionalPahlavi),
    (0x10B80, 0x10BAF, S::PsalterPahlavi),
    (0x10C00, 0x10C48, S::OldTurkic),
    (0x10C80, 0x10CFF, S::OldHungarian),
    (0x10D00, 0x10D39, S::HanifiRohingya),
    (0x10D40, 0x10D8F, S::Garay),
    (0x10E80, 0x10EBF, S::Yezidi),
    (0x10EC2, 0x10EFF, S::Arabic),
    (0x10F00, 0x10F27, S::OldSogdian),
    (0x10F30, 0x10F59, S::Sogdian),
    (0x10F70, 0x10F89, S::OldUyghur),
    (0x10FB0, 0x10FCB, S::Chorasmian),
    (0x10FE0, 0x10FF6, S::Elymaic),
    (0x11000, 0x1107F, S::Brahmi),
    (0x11080, 0x110C2, S::Kaithi),
    (0x110D0, 0x110F9, S::SoraSompeng),
    (0x11100, 0x11147, S::Chakma),
    (0x11150, 0x11176, S::Mahajani),
    (0x11180, 0x111DF, S::Sharada),
    (0x11200, 0x1123F, S::Khojki),
    (0x11280, 0x112A9, S::Multani),
    (0x112B0, 0x112F9, S::Khudawadi),
    (0x11300, 0x1137F, S::Grantha),
    (0x11380, 0x113D5, S::TuluTigalari),
    (0x11400, 0x1147F, S::Newa),
    (0x11480, 0x114D9, S::Tirhuta),
    (0x11580, 0x115DD, S::Siddham),
    (0x11600, 0x11659, S::Modi),
    (0x11680, 0x116C9, S::Takri),
    (0x11700, 0x1174F, S::Ahom),
    (0x11800, 0x1184F, S::Dogra),
    (0x118A0, 0x118FF, S::WarangCiti),
    (0x11900, 0x11959, S::DivesAkuru),
    (0x119A0, 0x119E4, S::Nandinagari),
    (0x11A00, 0x11A47, S::ZanabazarSquare),
    (0x11A50, 0x11AA2, S::Soyombo),
    (0x11AC0, 0x11AF8, S::PauCinHau),
    (0x11BC0, 0x11BF9, S::Sunuwar),
    (0x11C00, 0x11C6C, S::Bhaiksuki),
    (0x11C70, 0x11CB6, S::Marchen),
    (0x11D00, 0x11D59, S::MasaramGondi),
    (0x11D60, 0x11DA9, S::GunjalaGondi),
    (0x11EE0, 0x11EF8, S::Makasar),
    (0x11F00, 0x11F59, S::Kawi),
    (0x12000, 0x123FF, S::Cuneiform),
    (0x12F90, 0x12FF2, S::CyproMinoan),
    (0x13000, 0x1342F, S::EgyptianHieroglyphs),
    (0x14400, 0x14646, S::AnatolianHieroglyphs),
    (0x16100, 0x16139, S::GurungKhema),
    (0x16A40, 0x16A6F, S::Mro),
    (0x16A70, 0x16AC9, S::Tangsa),
    (0x16AD0, 0x16AF5, S::BassaVah),
    (0x16B00, 0x16B8F, S::PahawhHmong),
    (0x16D40, 0x16D79, S::KiratRai),
    (0x16E40, 0x16E9A, S::Medefaidrin),
    (0x16F00, 0x16F9F, S::Miao),
    (0x17000, 0x187FF, S::Tangut),
    (0x18B00, 0x18CD5, S::KhitanSmallScript),
    (0x1B170, 0x1B2FB, S::Nushu),
    (0x1BC00, 0x1BC9F, S::Duployan),
    (0x1D165, 0x1D169, S::Inherited),
    (0x1D16D, 0x1D182, S::Inherited),
    (0x1D800, 0x1DAAF, S::Signwriting),
    (0x1E000, 0x1E02A, S::Glagolitic),
    (0x1E100, 0x1E14F, S::NyiakengPuachueHmong),
    (0x1E290, 0x1E2AE, S::Toto),
    (0x1E2C0, 0x1E2FF, S::Wancho),
    (0x1E4D0, 0x1E4F9, S::NagMundari),
    (0x1E5D0, 0x1E5FA, S::OlOnal),
    (0x1E800, 0x1E8D6, S::MendeKikakui),
    (0x1E900, 0x1E95F, S::Adlam),
    (0x20000, 0x2A6DF, S::Han),
];

// === Canonical decompositions ===
// (composed, first, second); second == 0 marks a singleton. Sorted by the
// composed codepoint. Hangul syllables are not listed; they decompose
// arithmetically.

pub(crate) static DECOMPOSITIONS: &[(Codepoint, Codepoint, Codepoint)] = &[
    (0x00C0, 0x0041, 0x0300),
    (0x00C1, 0x0041, 0x0301),
    (0x00C2, 0x0041, 0x0302),
    (0x00C3, 0x0041, 0x0303),
    (0x00C4, 0x0041, 0x0308),
    (0x00C5, 0x0041, 0x030A),
    (0x00C7, 0x0043, 0x0327),
    (0x00C8, 0x0045, 0x0300),
    (0x00C9, 0x0045, 0x0301),
    (0x00CA, 0x0045, 0x0302),
    (0x00CB, 0x0045, 0x0308),
    (0x00CC, 0x0049, 0x0300),
    (0x00CD, 0x0049, 0x0301),
    (0x00CE, 0x0049, 0x0302),
    (0x00CF, 0x0049, 0x0308),
    (0x00D1, 0x004E, 0x0303),
    (0x00D2, 0x004F, 0x0300),
    (0x00D3, 0x004F, 0x0301),
    (0x00D4, 0x004F, 0x0302),
    (0x00D5, 0x004F, 0x0303),
    (0x00D6, 0x004F, 0x0308),
    (0x00D9, 0x0055, 0x0300),
    (0x00DA, 0x0055, 0x0301),
    (0x00DB, 0x0055, 0x0302),
    (0x00DC, 0x0055, 0x0308),
    (0x00DD, 0x0059, 0x0301),
    (0x00E0, 0x0061, 0x0300),
    (0x00E1, 0x0061, 0x0301),
    (0x00E2, 0x0061, 0x0302),
    (0x00E3, 0x0061, 0x0303),
    (0x00E4, 0x0061, 0x0308),
    (0x00E5, 0x0061, 0x030A),
    (0x00E7, 0x0063, 0x0327),
    (0x00E8, 0x0065, 0x0300),
    (0x00E9, 0x0065, 0x0301),
    (0x00EA, 0x0065, 0x0302),
    (0x00EB, 0x0065, 0x0308),
    (0x00EC, 0x0069, 0x0300),
    (0x00ED, 0x0069, 0x0301),
    (0x00EE, 0x0069, 0x0302),
    (0x00EF, 0x0069, 0x0308),
    (0x00F1, 0x006E, 0x0303),
    (0x00F2, 0x006F, 0x0300),
    (0x00F3, 0x006F, 0x0301),
    (0x00F4, 0x006F, 0x0302),
    (0x00F5, 0x006F, 0x0303),
    (0x00F6, 0x006F, 0x0308),
    (0x00F9, 0x0075, 0x0300),
    (0x00FA, 0x0075, 0x0301),
    (0x00FB, 0x0075, 0x0302),
    (0x00FC, 0x0075, 0x0308),
    (0x00FD, 0x0079, 0x0301),
    (0x00FF, 0x0079, 0x0308),
    (0x0344, 0x0308, 0x0301),
    (0x0386, 0x0391, 0x0301),
    (0x0388, 0x0395, 0x0301),
    (0x0389, 0x0397, 0x0301),
    (0x038A, 0x0399, 0x0301),
    (0x038C, 0x039F, 0x0301),
    (0x038E, 0x03A5, 0x0301),
    (0x038F, 0x03A9, 0x0301),
    (0x03AC, 0x03B1, 0x0301),
    (0x03AD, 0x03B5, 0x0301),
    (0x03AE, 0x03B7, 0x0301),
    (0x03AF, 0x03B9, 0x0301),
    (0x03CC, 0x03BF, 0x0301),
    (0x03CD, 0x03C5, 0x0301),
    (0x03CE, 0x03C9, 0x0301),
    (0x0401, 0x0415, 0x0308),
    (0x0451, 0x0435, 0x0308),
    (0x0958, 0x0915, 0x093C),
    (0x0959, 0x0916, 0x093C),
    (0x095A, 0x0917, 0x093C),
    (0x095B, 0x091C, 0x093C),
    (0x095C, 0x0921, 0x093C),
    (0x095D, 0x0922, 0x093C),
    (0x095E, 0x092B, 0x093C),
    (0x095F, 0x092F, 0x093C),
    (0x0F73, 0x0F71, 0x0F72),
    (0x1E0B, 0x0064, 0x0307),
    (0x1E0D, 0x0064, 0x0323),
    (0x1E63, 0x0073, 0x0323),
    (0x1E69, 0x1E63, 0x0307),
    (0x2126, 0x03A9, 0),
    (0x212B, 0x00C5, 0),
    (0xF900, 0x8C48, 0),
    (0xF901, 0x66F4, 0),
];

// === Canonical composition pairs ===
// The two-element decompositions reversed, sorted by (first, second).
// Excluded composites are still listed; compose() filters them through
// COMPOSITION_EXCLUSIONS.

pub(crate) static COMPOSITIONS: &[(Codepoint, Codepoint, Codepoint)] = &[
    (0x0041, 0x0300, 0x00C0),
    (0x0041, 0x0301, 0x00C1),
    (0x0041, 0x0302, 0x00C2),
    (0x0041, 0x0303, 0x00C3),
    (0x0041, 0x0308, 0x00C4),
    (0x0041, 0x030A, 0x00C5),
    (0x0043, 0x0327, 0x00C7),
    (0x0045, 0x0300, 0x00C8),
    (0x0045, 0x0301, 0x00C9),
    (0x0045, 0x0302, 0x00CA),
    (0x0045, 0x0308, 0x00CB),
    (0x0049, 0x0300, 0x00CC),
    (0x0049, 0x0301, 0x00CD),
    (0x0049, 0x0302, 0x00CE),
    (0x0049, 0x0308, 0x00CF),
    (0x004E, 0x0303, 0x00D1),
    (0x004F, 0x0300, 0x00D2),
    (0x004F, 0x0301, 0x00D3),
    (0x004F, 0x0302, 0x00D4),
    (0x004F, 0x0303, 0x00D5),
    (0x004F, 0x0308, 0x00D6),
    (0x0055, 0x0300, 0x00D9),
    (0x0055, 0x0301, 0x00DA),
    (0x0055, 0x0302, 0x00DB),
    (0x0055, 0x0308, 0x00DC),
    (0x0059, 0x0301, 0x00DD),
    (0x0061, 0x0300, 0x00E0),
    (0x0061, 0x0301, 0x00E1),
    (0x0061, 0x0302, 0x00E2),
    (0x0061, 0x0303, 0x00E3),
    (0x0061, 0x0308, 0x00E4),
    (0x0061, 0x030A, 0x00E5),
    (0x0063, 0x0327, 0x00E7),
    (0x0064, 0x0307, 0x1E0B),
    (0x0064, 0x0323, 0x1E0D),
    (0x0065, 0x0300, 0x00E8),
    (0x0065, 0x0301, 0x00E9),
    (0x0065, 0x0302, 0x00EA),
    (0x0065, 0x0308, 0x00EB),
    (0x0069, 0x0300, 0x00EC),
    (0x0069, 0x0301, 0x00ED),
    (0x0069, 0x0302, 0x00EE),
    (0x0069, 0x0308, 0x00EF),
    (0x006E, 0x0303, 0x00F1),
    (0x006F, 0x0300, 0x00F2),
    (0x006F, 0x0301, 0x00F3),
    (0x006F, 0x0302, 0x00F4),
    (0x006F, 0x0303, 0x00F5),
    (0x006F, 0x0308, 0x00F6),
    (0x0073, 0x0323, 0x1E63),
    (0x0075, 0x0300, 0x00F9),
    (0x0075, 0x0301, 0x00FA),
    (0x0075, 0x0302, 0x00FB),
    (0x0075, 0x0308, 0x00FC),
    (0x0079, 0x0301, 0x00FD),
    (0x0079, 0x0308, 0x00FF),
    (0x0308, 0x0301, 0x0344),
    (0x0391, 0x0301, 0x0386),
    (0x0395, 0x0301, 0x0388),
    (0x0397, 0x0301, 0x0389),
    (0x0399, 0x0301, 0x038A),
    (0x039F, 0x0301, 0x038C),
    (0x03A5, 0x0301, 0x038E),
    (0x03A9, 0x0301, 0x038F),
    (0x03B1, 0x0301, 0x03AC),
    (0x03B5, 0x0301, 0x03AD),
    (0x03B7, 0x0301, 0x03AE),
    (0x03B9, 0x0301, 0x03AF),
    (0x03BF, 0x0301, 0x03CC),
    (0x03C5, 0x0301, 0x03CD),
    (0x03C9, 0x0301, 0x03CE),
    (0x0415, 0x0308, 0x0401),
    (0x0435, 0x0308, 0x0451),
    (0x0915, 0x093C, 0x0958),
    (0x0916, 0x093C, 0x0959),
    (0x0917, 0x093C, 0x095A),
    (0x091C, 0x093C, 0x095B),
    (0x0921, 0x093C, 0x095C),
    (0x0922, 0x093C, 0x095D),
    (0x092B, 0x093C, 0x095E),
    (0x092F, 0x093C, 0x095F),
    (0x0F71, 0x0F72, 0x0F73),
    (0x1E63, 0x0307, 0x1E69),
];

// === Composition exclusions ===
// Composites whose decomposition is never reversed: non-starter pairs,
// script-specific composites from CompositionExclusions.txt, and the
// singletons. Sorted.

pub(crate) static COMPOSITION_EXCLUSIONS: &[Codepoint] = &[
    0x0344, 0x0958, 0x0959, 0x095A, 0x095B, 0x095C, 0x095D, 0x095E, 0x095F, 0x0F73, 0x2126,
    0x212B, 0xF900, 0xF901,
];
