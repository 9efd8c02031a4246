// prelude.rs - Convenient re-exports.
//
//! # Prelude
//!
//! ```
//! use glifo::prelude::*;
//!
//! let funcs = UnicodeFuncs::builtin();
//! assert_eq!(funcs.general_category('5' as u32), GeneralCategory::DecimalNumber);
//! ```

pub use crate::category::{GeneralCategory, GeneralCategoryMask};
pub use crate::funcs::UnicodeFuncs;
pub use crate::normalize::{compose, decompose};
pub use crate::script::{Script, Tag};
pub use crate::Codepoint;
