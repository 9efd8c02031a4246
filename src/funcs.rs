// funcs.rs - The chainable property provider registry.
//
// A UnicodeFuncs is a cheaply cloneable handle to a set of per-codepoint
// property functions. Each of the four properties can be overridden with a
// caller-supplied closure; everything else falls through to the parent
// provider, terminating at one of two process-wide singletons: empty()
// (fixed defaults) or builtin() (UCD table lookups).
//
// Mutation is a construction-time affair: once a provider is frozen with
// make_immutable(), or is used as a parent, setters stop installing and
// merely dispose of what they were handed.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, LazyLock, RwLock};

use crate::category::GeneralCategory;
use crate::script::Script;
use crate::ucd;
use crate::Codepoint;

// === Combining class constants ===

/// Named canonical combining classes the shaping pipeline cares about.
#[allow(missing_docs)]
pub mod combining_class {
    pub const NOT_REORDERED: u8 = 0;
    pub const OVERLAY: u8 = 1;
    pub const NUKTA: u8 = 7;
    pub const KANA_VOICING: u8 = 8;
    pub const VIRAMA: u8 = 9;
    pub const ATTACHED_BELOW_LEFT: u8 = 200;
    pub const ATTACHED_BELOW: u8 = 202;
    pub const ATTACHED_ABOVE: u8 = 214;
    pub const ATTACHED_ABOVE_RIGHT: u8 = 216;
    pub const BELOW_LEFT: u8 = 218;
    pub const BELOW: u8 = 220;
    pub const BELOW_RIGHT: u8 = 222;
    pub const LEFT: u8 = 224;
    pub const RIGHT: u8 = 226;
    pub const ABOVE_LEFT: u8 = 228;
    pub const ABOVE: u8 = 230;
    pub const ABOVE_RIGHT: u8 = 232;
    pub const DOUBLE_BELOW: u8 = 233;
    pub const DOUBLE_ABOVE: u8 = 234;
    pub const IOTA_SUBSCRIPT: u8 = 240;
}

// === Callback slots ===

type PropertyFn<T> = Arc<dyn Fn(&UnicodeFuncs, Codepoint) -> T + Send + Sync>;

#[derive(Default)]
struct Slots {
    combining_class: Option<PropertyFn<u8>>,
    general_category: Option<PropertyFn<GeneralCategory>>,
    mirroring: Option<PropertyFn<Codepoint>>,
    script: Option<PropertyFn<Script>>,
}

struct Inner {
    // None only for the two singletons; every provider built through
    // UnicodeFuncs::new chains up to one of them.
    parent: Option<UnicodeFuncs>,
    immutable: AtomicBool,
    slots: RwLock<Slots>,
}

/// A chainable, reference-counted set of Unicode property functions.
///
/// Cloning the handle is cheap and shares the same provider. A provider
/// stays alive as long as any handle to it exists, including the parent
/// references held by its children, so a chain keeps working after the
/// code that built it has dropped its own handles.
///
/// Build and mutate a provider on one thread, then freeze it with
/// [`make_immutable`](UnicodeFuncs::make_immutable) (or by using it as a
/// parent) before publishing it; after that, concurrent lookups from any
/// number of threads are fine.
///
/// ```
/// use glifo::funcs::UnicodeFuncs;
/// use glifo::script::Script;
///
/// let funcs = UnicodeFuncs::new(None);
/// funcs.set_script_func(|_, cp| {
///     if (0x61..=0x7A).contains(&cp) { Script::Latin } else { Script::Unknown }
/// });
/// assert_eq!(funcs.script('q' as u32), Script::Latin);
/// assert_eq!(funcs.script('!' as u32), Script::Unknown);
/// ```
#[derive(Clone)]
pub struct UnicodeFuncs {
    inner: Arc<Inner>,
}

static EMPTY: LazyLock<UnicodeFuncs> = LazyLock::new(|| UnicodeFuncs {
    inner: Arc::new(Inner {
        parent: None,
        immutable: AtomicBool::new(true),
        slots: RwLock::new(Slots::default()),
    }),
});

static BUILTIN: LazyLock<UnicodeFuncs> = LazyLock::new(|| UnicodeFuncs {
    inner: Arc::new(Inner {
        parent: Some(UnicodeFuncs::empty()),
        immutable: AtomicBool::new(true),
        slots: RwLock::new(Slots {
            combining_class: Some(Arc::new(|_, cp| ucd::combining_class(cp))),
            general_category: Some(Arc::new(|_, cp| ucd::general_category(cp))),
            mirroring: Some(Arc::new(|_, cp| ucd::mirroring(cp))),
            script: Some(Arc::new(|_, cp| ucd::script(cp))),
        }),
    }),
});

impl UnicodeFuncs {
    /// Create a new, mutable provider chained to `parent`.
    ///
    /// With no explicit parent the provider chains to [`empty`], so the
    /// chain is always terminated. Using a provider as a parent freezes
    /// it, as if [`make_immutable`] had been called on it.
    ///
    /// [`empty`]: UnicodeFuncs::empty
    /// [`make_immutable`]: UnicodeFuncs::make_immutable
    pub fn new(parent: Option<&UnicodeFuncs>) -> UnicodeFuncs {
        let parent = match parent {
            Some(p) => p.clone(),
            None => UnicodeFuncs::empty(),
        };
        parent.make_immutable();
        UnicodeFuncs {
            inner: Arc::new(Inner {
                parent: Some(parent),
                immutable: AtomicBool::new(false),
                slots: RwLock::new(Slots::default()),
            }),
        }
    }

    /// The singleton that answers every query with the fixed defaults:
    /// combining class 0, `GeneralCategory::Unassigned`, the codepoint
    /// itself for mirroring, and `Script::Unknown`.
    pub fn empty() -> UnicodeFuncs {
        EMPTY.clone()
    }

    /// The singleton backed by the built-in UCD tables.
    pub fn builtin() -> UnicodeFuncs {
        BUILTIN.clone()
    }

    /// The parent provider. Total: the singletons report [`empty`] as
    /// their parent, so walking up the chain always terminates there.
    ///
    /// [`empty`]: UnicodeFuncs::empty
    pub fn parent(&self) -> UnicodeFuncs {
        match &self.inner.parent {
            Some(parent) => parent.clone(),
            None => UnicodeFuncs::empty(),
        }
    }

    /// Freeze the provider. Idempotent; never reversed.
    pub fn make_immutable(&self) {
        self.inner.immutable.store(true, Ordering::Release);
    }

    pub fn is_immutable(&self) -> bool {
        self.inner.immutable.load(Ordering::Acquire)
    }

    // Swap a slot. The previous occupant (and any state its closure owns)
    // is dropped after the lock is released, so caller destructors never
    // run under our lock. On an immutable provider the slot is untouched
    // and `func` itself is dropped instead, honoring the ownership
    // transfer without installing anything.
    fn install<T>(
        &self,
        func: Option<PropertyFn<T>>,
        select: fn(&mut Slots) -> &mut Option<PropertyFn<T>>,
    ) {
        let _old;
        {
            let mut slots = self.inner.slots.write().unwrap();
            if self.is_immutable() {
                return;
            }
            _old = std::mem::replace(select(&mut slots), func);
        }
    }

    fn slot<T>(&self, select: fn(&Slots) -> &Option<PropertyFn<T>>) -> Option<PropertyFn<T>> {
        select(&self.inner.slots.read().unwrap()).clone()
    }

    // === Setters ===

    /// Install the combining-class callback.
    ///
    /// The closure owns whatever state it captures. That state is dropped
    /// exactly once: when the slot is overwritten or cleared, when the
    /// provider is dropped, or immediately if the provider is already
    /// immutable (in which case nothing is installed).
    pub fn set_combining_class_func<F>(&self, func: F)
    where
        F: Fn(&UnicodeFuncs, Codepoint) -> u8 + Send + Sync + 'static,
    {
        self.install(Some(Arc::new(func)), |s| &mut s.combining_class);
    }

    /// Remove the combining-class callback, restoring parent fall-through.
    pub fn clear_combining_class_func(&self) {
        self.install::<u8>(None, |s| &mut s.combining_class);
    }

    /// Install the general-category callback. Ownership of the captured
    /// state follows the same contract as
    /// [`set_combining_class_func`](UnicodeFuncs::set_combining_class_func).
    pub fn set_general_category_func<F>(&self, func: F)
    where
        F: Fn(&UnicodeFuncs, Codepoint) -> GeneralCategory + Send + Sync + 'static,
    {
        self.install(Some(Arc::new(func)), |s| &mut s.general_category);
    }

    /// Remove the general-category callback.
    pub fn clear_general_category_func(&self) {
        self.install::<GeneralCategory>(None, |s| &mut s.general_category);
    }

    /// Install the mirroring callback. Ownership of the captured state
    /// follows the same contract as
    /// [`set_combining_class_func`](UnicodeFuncs::set_combining_class_func).
    pub fn set_mirroring_func<F>(&self, func: F)
    where
        F: Fn(&UnicodeFuncs, Codepoint) -> Codepoint + Send + Sync + 'static,
    {
        self.install(Some(Arc::new(func)), |s| &mut s.mirroring);
    }

    /// Remove the mirroring callback.
    pub fn clear_mirroring_func(&self) {
        self.install::<Codepoint>(None, |s| &mut s.mirroring);
    }

    /// Install the script callback. Ownership of the captured state
    /// follows the same contract as
    /// [`set_combining_class_func`](UnicodeFuncs::set_combining_class_func).
    pub fn set_script_func<F>(&self, func: F)
    where
        F: Fn(&UnicodeFuncs, Codepoint) -> Script + Send + Sync + 'static,
    {
        self.install(Some(Arc::new(func)), |s| &mut s.script);
    }

    /// Remove the script callback.
    pub fn clear_script_func(&self) {
        self.install::<Script>(None, |s| &mut s.script);
    }

    // === Getters ===
    //
    // An installed callback receives the provider itself, not the parent,
    // so override logic can consult self.parent() per codepoint. That is
    // what makes chains of overriding providers compose to any depth.

    /// Canonical combining class of `cp`.
    pub fn combining_class(&self, cp: Codepoint) -> u8 {
        if let Some(f) = self.slot(|s| &s.combining_class) {
            return f(self, cp);
        }
        match &self.inner.parent {
            Some(parent) => parent.combining_class(cp),
            None => 0,
        }
    }

    /// General category of `cp`.
    pub fn general_category(&self, cp: Codepoint) -> GeneralCategory {
        if let Some(f) = self.slot(|s| &s.general_category) {
            return f(self, cp);
        }
        match &self.inner.parent {
            Some(parent) => parent.general_category(cp),
            None => GeneralCategory::Unassigned,
        }
    }

    /// Mirroring partner of `cp`; `cp` itself when it does not mirror.
    pub fn mirroring(&self, cp: Codepoint) -> Codepoint {
        if let Some(f) = self.slot(|s| &s.mirroring) {
            return f(self, cp);
        }
        match &self.inner.parent {
            Some(parent) => parent.mirroring(cp),
            None => cp,
        }
    }

    /// Script of `cp`.
    pub fn script(&self, cp: Codepoint) -> Script {
        if let Some(f) = self.slot(|s| &s.script) {
            return f(self, cp);
        }
        match &self.inner.parent {
            Some(parent) => parent.script(cp),
            None => Script::Unknown,
        }
    }

    // === Shaping helpers ===

    /// Combining class remapped for mark reordering during shaping.
    ///
    /// Routed through [`combining_class`](UnicodeFuncs::combining_class),
    /// so installed overrides are honored before the remap is applied.
    pub fn modified_combining_class(&self, cp: Codepoint) -> u8 {
        // Reorder SAKOT to ensure it comes after any tone marks.
        if cp == 0x1A60 {
            return 254;
        }
        // Reorder PADMA to ensure it comes after any vowel marks.
        if cp == 0x0FC6 {
            return 254;
        }
        // Reorder TSA -PHRU to ensure it comes before attached marks.
        if cp == 0x0F39 {
            return 127;
        }
        MODIFIED_COMBINING_CLASS[self.combining_class(cp) as usize]
    }

    /// Whether `cp` is a Default_Ignorable_Code_Point; see
    /// [`ucd::is_default_ignorable`].
    pub fn is_default_ignorable(&self, cp: Codepoint) -> bool {
        ucd::is_default_ignorable(cp)
    }
}

impl fmt::Debug for UnicodeFuncs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnicodeFuncs")
            .field("immutable", &self.is_immutable())
            .finish_non_exhaustive()
    }
}

// Remap of the canonical combining classes for shaping. Hebrew points
// follow the SBL Hebrew manual order, Arabic moves shadda before the
// vowel marks, Telugu length marks are zeroed so they keep their place
// relative to the halant, Thai sara u/uu sorts before phinthu, and the
// Tibetan vowel signs keep u before i when several are stacked.
#[rustfmt::skip]
static MODIFIED_COMBINING_CLASS: [u8; 256] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9,
    // Hebrew (ccc 10-26)
    22, 15, 16, 17, 23, 18, 19, 20, 21, 14,
    24, 12, 25, 13, 10, 11, 26,
    // Arabic (ccc 27-35)
    28, 29, 30, 31, 32, 33, 27, 34, 35,
    // Syriac (ccc 36)
    36,
    37, 38, 39,
    40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59,
    60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75, 76, 77, 78, 79,
    80, 81, 82, 83,
    // Telugu length marks (ccc 84, 91)
    0, 85, 86, 87, 88, 89, 90, 0,
    92, 93, 94, 95, 96, 97, 98, 99, 100, 101, 102,
    // Thai sara u / sara uu (ccc 103)
    3, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114, 115, 116, 117,
    // Lao (ccc 118, 122 keep their values)
    118, 119, 120, 121, 122, 123, 124, 125, 126, 127, 128,
    // Tibetan vowel signs (ccc 129, 130, 132)
    129, 132, 131, 131, 133, 134, 135, 136, 137, 138, 139,
    140, 141, 142, 143, 144, 145, 146, 147, 148, 149,
    150, 151, 152, 153, 154, 155, 156, 157, 158, 159,
    160, 161, 162, 163, 164, 165, 166, 167, 168, 169,
    170, 171, 172, 173, 174, 175, 176, 177, 178, 179,
    180, 181, 182, 183, 184, 185, 186, 187, 188, 189,
    190, 191, 192, 193, 194, 195, 196, 197, 198, 199,
    200, 201, 202, 203, 204, 205, 206, 207, 208, 209,
    210, 211, 212, 213, 214, 215, 216, 217, 218, 219,
    220, 221, 222, 223, 224, 225, 226, 227, 228, 229,
    230, 231, 232, 233, 234, 235, 236, 237, 238, 239,
    240, 241, 242, 243, 244, 245, 246, 247, 248, 249,
    250, 251, 252, 253, 254, 255,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_are_immutable() {
        assert!(UnicodeFuncs::empty().is_immutable());
        assert!(UnicodeFuncs::builtin().is_immutable());
    }

    #[test]
    fn parent_is_total() {
        let empty = UnicodeFuncs::empty();
        // The chain terminates at empty, which is its own parent.
        assert!(empty.parent().is_immutable());
        let funcs = UnicodeFuncs::new(None);
        assert_eq!(funcs.parent().combining_class(0x0300), 0);
    }

    #[test]
    fn creating_a_child_freezes_the_parent() {
        let parent = UnicodeFuncs::new(None);
        assert!(!parent.is_immutable());
        let child = UnicodeFuncs::new(Some(&parent));
        assert!(parent.is_immutable());
        assert!(!child.is_immutable());
    }

    #[test]
    fn make_immutable_is_idempotent() {
        let funcs = UnicodeFuncs::new(None);
        funcs.make_immutable();
        funcs.make_immutable();
        assert!(funcs.is_immutable());
    }

    #[test]
    fn clear_restores_fall_through() {
        let funcs = UnicodeFuncs::new(Some(&UnicodeFuncs::builtin()));
        funcs.set_combining_class_func(|_, _| 99);
        assert_eq!(funcs.combining_class(0x0300), 99);
        funcs.clear_combining_class_func();
        assert_eq!(funcs.combining_class(0x0300), 230);
    }

    #[test]
    fn modified_combining_class_remaps() {
        let funcs = UnicodeFuncs::builtin();
        // Hebrew sheva (ccc 10) moves to 22; Arabic shadda (ccc 33) to 27.
        assert_eq!(funcs.modified_combining_class(0x05B0), 22);
        assert_eq!(funcs.modified_combining_class(0x0651), 27);
        // Telugu length mark is zeroed.
        assert_eq!(funcs.modified_combining_class(0x0C55), 0);
        // Thai sara u sorts before the virama.
        assert_eq!(funcs.modified_combining_class(0x0E38), 3);
        // The positional hacks.
        assert_eq!(funcs.modified_combining_class(0x1A60), 254);
        assert_eq!(funcs.modified_combining_class(0x0FC6), 254);
        assert_eq!(funcs.modified_combining_class(0x0F39), 127);
        // Unremapped classes pass through.
        assert_eq!(funcs.modified_combining_class(0x0300), 230);
    }

    #[test]
    fn modified_combining_class_sees_overrides() {
        let funcs = UnicodeFuncs::new(Some(&UnicodeFuncs::builtin()));
        funcs.set_combining_class_func(|_, _| 10);
        assert_eq!(funcs.modified_combining_class(0x0041), 22);
    }
}
