//! # Glifo
//!
//! Pluggable Unicode character property provider for text-shaping engines.
//!
//! A shaping engine asks four questions about every codepoint it lays out:
//! its canonical combining class, its general category, its mirroring
//! partner, and its script. [`UnicodeFuncs`](funcs::UnicodeFuncs) answers
//! all four from compact built-in Unicode Character Database tables, and
//! lets embedders override any subset of them with their own logic while
//! falling back to a parent provider for everything else.
//!
//! On top of that, the crate ships the two table-driven primitives NFC/NFD
//! normalization is built from ([`compose`](normalize::compose) /
//! [`decompose`](normalize::decompose)) and the ISO 15924 script tag codec
//! ([`Script`](script::Script) / [`Tag`](script::Tag)).
//!
//! ## Quick Start
//!
//! ```rust
//! use glifo::prelude::*;
//!
//! let funcs = UnicodeFuncs::builtin();
//! assert_eq!(funcs.script('a' as u32), Script::Latin);
//! assert_eq!(funcs.combining_class(0x0300), 230);
//! assert_eq!(funcs.mirroring('(' as u32), ')' as u32);
//! ```
//!
//! ## Overriding a property
//!
//! Providers chain: an installed callback receives the provider itself and
//! may consult the parent for codepoints it does not special-case.
//!
//! ```rust
//! use glifo::prelude::*;
//!
//! let funcs = UnicodeFuncs::new(Some(&UnicodeFuncs::builtin()));
//! funcs.set_script_func(|f, cp| {
//!     if cp == 'a' as u32 {
//!         Script::Arabic
//!     } else {
//!         f.parent().script(cp)
//!     }
//! });
//! funcs.make_immutable();
//!
//! assert_eq!(funcs.script('a' as u32), Script::Arabic);
//! assert_eq!(funcs.script('b' as u32), Script::Latin);
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`funcs`] | The chainable property provider registry |
//! | [`ucd`] | Built-in Unicode Character Database tables and lookups |
//! | [`normalize`] | Canonical composition/decomposition primitives |
//! | [`script`] | Script identifiers and the ISO 15924 tag codec |
//! | [`category`] | General category classification |

pub mod category;
pub mod funcs;
pub mod normalize;
pub mod prelude;
pub mod script;
pub mod ucd;

/// An integer identifying a Unicode character.
///
/// Any `u32` is accepted everywhere a codepoint is expected; values outside
/// the Unicode range simply have no data and map to the per-property
/// defaults.
pub type Codepoint = u32;
