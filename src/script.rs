// script.rs - Script identifiers and the ISO 15924 tag codec.
//
// One canonical four-letter tag per script. Decoding is lenient: tags are
// case-normalized first, the retired private-use aliases Qaai/Qaac still
// decode, anything unrecognized becomes Unknown, and the zero tag is the
// Invalid sentinel (which round-trips to itself).

use std::fmt;

/// A four-byte ISO 15924 script tag, packed big-endian.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag(pub u32);

impl Tag {
    /// The all-zero tag; decodes to [`Script::Invalid`].
    pub const NONE: Tag = Tag(0);

    pub const fn from_bytes(bytes: &[u8; 4]) -> Tag {
        Tag(u32::from_be_bytes(*bytes))
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_bytes();
        if bytes.iter().all(|b| b.is_ascii_graphic()) {
            write!(f, "Tag(")?;
            for b in bytes {
                write!(f, "{}", b as char)?;
            }
            write!(f, ")")
        } else {
            write!(f, "Tag({:#010x})", self.0)
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.to_bytes() {
            let c = if b.is_ascii_graphic() { b as char } else { '.' };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

macro_rules! scripts {
    ($($name:ident = $tag:literal,)+) => {
        /// The writing system a codepoint belongs to.
        ///
        /// The list is append-only: tags assigned by later ISO 15924 /
        /// Unicode revisions are added at the end without renumbering.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum Script {
            /// Sentinel for the zero tag; round-trips to itself.
            Invalid,
            $($name,)+
        }

        impl Script {
            /// Every script with a canonical tag, plus `Invalid`.
            pub const ALL: &'static [Script] = &[Script::Invalid, $(Script::$name,)+];

            /// The canonical ISO 15924 tag for this script.
            pub fn iso15924_tag(self) -> Tag {
                match self {
                    Script::Invalid => Tag::NONE,
                    $(Script::$name => Tag::from_bytes($tag),)+
                }
            }

            fn from_canonical_tag(tag: Tag) -> Option<Script> {
                match &tag.to_bytes() {
                    $($tag => Some(Script::$name),)+
                    _ => None,
                }
            }
        }
    };
}

scripts! {
    Common = b"Zyyy",
    Inherited = b"Zinh",
    Unknown = b"Zzzz",

    Arabic = b"Arab",
    Armenian = b"Armn",
    Bengali = b"Beng",
    Bopomofo = b"Bopo",
    Braille = b"Brai",
    Buginese = b"Bugi",
    Buhid = b"Buhd",
    CanadianSyllabics = b"Cans",
    Carian = b"Cari",
    Cherokee = b"Cher",
    Coptic = b"Copt",
    Cuneiform = b"Xsux",
    Cypriot = b"Cprt",
    Cyrillic = b"Cyrl",
    Deseret = b"Dsrt",
    Devanagari = b"Deva",
    Ethiopic = b"Ethi",
    Georgian = b"Geor",
    Glagolitic = b"Glag",
    Gothic = b"Goth",
    Greek = b"Grek",
    Gujarati = b"Gujr",
    Gurmukhi = b"Guru",
    Han = b"Hani",
    Hangul = b"Hang",
    Hanunoo = b"Hano",
    Hebrew = b"Hebr",
    Hiragana = b"Hira",
    Kannada = b"Knda",
    Katakana = b"Kana",
    KayahLi = b"Kali",
    Kharoshthi = b"Khar",
    Khmer = b"Khmr",
    Lao = b"Laoo",
    Latin = b"Latn",
    Lepcha = b"Lepc",
    Limbu = b"Limb",
    LinearB = b"Linb",
    Lycian = b"Lyci",
    Lydian = b"Lydi",
    Malayalam = b"Mlym",
    Mongolian = b"Mong",
    Myanmar = b"Mymr",
    NewTaiLue = b"Talu",
    Nko = b"Nkoo",
    Ogham = b"Ogam",
    OlChiki = b"Olck",
    OldItalic = b"Ital",
    OldPersian = b"Xpeo",
    Oriya = b"Orya",
    Osmanya = b"Osma",
    PhagsPa = b"Phag",
    Phoenician = b"Phnx",
    Rejang = b"Rjng",
    Runic = b"Runr",
    Saurashtra = b"Saur",
    Shavian = b"Shaw",
    Sinhala = b"Sinh",
    Sundanese = b"Sund",
    SylotiNagri = b"Sylo",
    Syriac = b"Syrc",
    Tagalog = b"Tglg",
    Tagbanwa = b"Tagb",
    TaiLe = b"Tale",
    Tamil = b"Taml",
    Telugu = b"Telu",
    Thaana = b"Thaa",
    Thai = b"Thai",
    Tibetan = b"Tibt",
    Tifinagh = b"Tfng",
    Ugaritic = b"Ugar",
    Vai = b"Vaii",
    Yi = b"Yiii",

    // Unicode 5.2
    Avestan = b"Avst",
    Bamum = b"Bamu",
    Cham = b"Cham",
    EgyptianHieroglyphs = b"Egyp",
    ImperialAramaic = b"Armi",
    InscriptionalPahlavi = b"Phli",
    InscriptionalParthian = b"Prti",
    Javanese = b"Java",
    Kaithi = b"Kthi",
    Lisu = b"Lisu",
    MeeteiMayek = b"Mtei",
    OldSouthArabian = b"Sarb",
    OldTurkic = b"Orkh",
    Samaritan = b"Samr",
    TaiTham = b"Lana",
    TaiViet = b"Tavt",

    // Unicode 6.0
    Balinese = b"Bali",
    Batak = b"Batk",
    Brahmi = b"Brah",
    Mandaic = b"Mand",

    // Unicode 6.1
    Chakma = b"Cakm",
    MeroiticCursive = b"Merc",
    MeroiticHieroglyphs = b"Mero",
    Miao = b"Plrd",
    Sharada = b"Shrd",
    SoraSompeng = b"Sora",
    Takri = b"Takr",

    // Unicode 7.0
    BassaVah = b"Bass",
    CaucasianAlbanian = b"Aghb",
    Duployan = b"Dupl",
    Elbasan = b"Elba",
    Grantha = b"Gran",
    Khojki = b"Khoj",
    Khudawadi = b"Sind",
    LinearA = b"Lina",
    Mahajani = b"Mahj",
    Manichaean = b"Mani",
    MendeKikakui = b"Mend",
    Modi = b"Modi",
    Mro = b"Mroo",
    Nabataean = b"Nbat",
    OldNorthArabian = b"Narb",
    OldPermic = b"Perm",
    PahawhHmong = b"Hmng",
    Palmyrene = b"Palm",
    PauCinHau = b"Pauc",
    PsalterPahlavi = b"Phlp",
    Siddham = b"Sidd",
    Tirhuta = b"Tirh",
    WarangCiti = b"Wara",

    // Unicode 8.0
    Ahom = b"Ahom",
    AnatolianHieroglyphs = b"Hluw",
    Hatran = b"Hatr",
    Multani = b"Mult",
    OldHungarian = b"Hung",
    Signwriting = b"Sgnw",

    // Unicode 9.0
    Adlam = b"Adlm",
    Bhaiksuki = b"Bhks",
    Marchen = b"Marc",
    Newa = b"Newa",
    Osage = b"Osge",
    Tangut = b"Tang",

    // Unicode 10.0
    MasaramGondi = b"Gonm",
    Nushu = b"Nshu",
    Soyombo = b"Soyo",
    ZanabazarSquare = b"Zanb",

    // Unicode 11.0
    Dogra = b"Dogr",
    GunjalaGondi = b"Gong",
    HanifiRohingya = b"Rohg",
    Makasar = b"Maka",
    Medefaidrin = b"Medf",
    OldSogdian = b"Sogo",
    Sogdian = b"Sogd",

    // Unicode 12.0
    Elymaic = b"Elym",
    Nandinagari = b"Nand",
    NyiakengPuachueHmong = b"Hmnp",
    Wancho = b"Wcho",

    // Unicode 13.0
    Chorasmian = b"Chrs",
    DivesAkuru = b"Diak",
    KhitanSmallScript = b"Kits",
    Yezidi = b"Yezi",

    // Unicode 14.0
    CyproMinoan = b"Cpmn",
    OldUyghur = b"Ougr",
    Tangsa = b"Tnsa",
    Toto = b"Toto",
    Vithkuqi = b"Vith",

    // Unicode 15.0
    Kawi = b"Kawi",
    NagMundari = b"Nagm",

    // Unicode 16.0
    Garay = b"Gara",
    GurungKhema = b"Gukh",
    KiratRai = b"Krai",
    OlOnal = b"Onao",
    Sunuwar = b"Sunu",
    Todhri = b"Todr",
    TuluTigalari = b"Tutg",
}

impl Script {
    /// Decode an ISO 15924 tag, leniently.
    ///
    /// Unrecognized tags decode to [`Script::Unknown`]; the zero tag
    /// decodes to [`Script::Invalid`].
    pub fn from_iso15924_tag(tag: Tag) -> Script {
        if tag == Tag::NONE {
            return Script::Invalid;
        }

        // Adjust case: one capital letter followed by three small letters.
        let tag = Tag((tag.0 & 0xDFFF_FFFF) | 0x0020_2020);

        // Retired private-use aliases that predate dedicated tags.
        match &tag.to_bytes() {
            b"Qaai" => return Script::Inherited,
            b"Qaac" => return Script::Coptic,
            _ => {}
        }

        Script::from_canonical_tag(tag).unwrap_or(Script::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_round_trip() {
        for &script in Script::ALL {
            assert_eq!(Script::from_iso15924_tag(script.iso15924_tag()), script);
        }
    }

    #[test]
    fn zero_tag_is_invalid() {
        assert_eq!(Script::from_iso15924_tag(Tag::NONE), Script::Invalid);
        assert_eq!(Script::Invalid.iso15924_tag(), Tag::NONE);
    }

    #[test]
    fn lenient_case() {
        assert_eq!(Script::from_iso15924_tag(Tag::from_bytes(b"arab")), Script::Arabic);
        assert_eq!(Script::from_iso15924_tag(Tag::from_bytes(b"ARAB")), Script::Arabic);
        assert_eq!(Script::from_iso15924_tag(Tag::from_bytes(b"aRaB")), Script::Arabic);
    }

    #[test]
    fn retired_aliases() {
        assert_eq!(Script::from_iso15924_tag(Tag::from_bytes(b"Qaai")), Script::Inherited);
        assert_eq!(Script::from_iso15924_tag(Tag::from_bytes(b"Qaac")), Script::Coptic);
    }

    #[test]
    fn unrecognized_tag_is_unknown() {
        assert_eq!(Script::from_iso15924_tag(Tag::from_bytes(b"Wxyz")), Script::Unknown);
        assert_eq!(Script::from_iso15924_tag(Tag(0x0101_0101)), Script::Unknown);
    }

    #[test]
    fn tag_formatting() {
        assert_eq!(format!("{}", Script::Latin.iso15924_tag()), "Latn");
        assert_eq!(format!("{:?}", Script::Latin.iso15924_tag()), "Tag(Latn)");
        assert_eq!(format!("{}", Tag::NONE), "....");
    }
}
