// funcs_test.rs - Integration tests for the provider registry: chaining,
// immutability, and the ownership contract of callback state.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use glifo::category::GeneralCategory;
use glifo::funcs::UnicodeFuncs;
use glifo::script::Script;

// Callback state with an observable destructor. The drop count is read
// through the shared counter after the state has been moved into a
// closure.
struct TrackedState {
    drops: Arc<AtomicUsize>,
}

impl TrackedState {
    fn new() -> (TrackedState, Arc<AtomicUsize>) {
        let drops = Arc::new(AtomicUsize::new(0));
        (TrackedState { drops: drops.clone() }, drops)
    }
}

impl Drop for TrackedState {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

fn simple_script(cp: u32) -> Script {
    if (0x61..=0x7A).contains(&cp) {
        Script::Latin
    } else {
        Script::Unknown
    }
}

// === Setter ownership contract ===

#[test]
fn clear_destroys_state_exactly_once() {
    let funcs = UnicodeFuncs::new(None);
    let (state, drops) = TrackedState::new();

    funcs.set_script_func(move |_, cp| {
        let _ = &state.drops;
        simple_script(cp)
    });
    assert_eq!(funcs.script('a' as u32), Script::Latin);
    assert_eq!(funcs.script('0' as u32), Script::Unknown);
    assert_eq!(drops.load(Ordering::SeqCst), 0);

    funcs.clear_script_func();
    assert_eq!(drops.load(Ordering::SeqCst), 1);
    assert_eq!(funcs.script('a' as u32), Script::Unknown);

    drop(funcs);
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}

#[test]
fn overwrite_destroys_previous_state_exactly_once() {
    let funcs = UnicodeFuncs::new(None);
    let (first, first_drops) = TrackedState::new();
    let (second, second_drops) = TrackedState::new();

    funcs.set_script_func(move |_, cp| {
        let _ = &first.drops;
        simple_script(cp)
    });
    funcs.set_script_func(move |_, _| {
        let _ = &second.drops;
        Script::Arabic
    });

    // The first state went down with the overwrite, the second is live.
    assert_eq!(first_drops.load(Ordering::SeqCst), 1);
    assert_eq!(second_drops.load(Ordering::SeqCst), 0);
    assert_eq!(funcs.script('a' as u32), Script::Arabic);

    drop(funcs);
    assert_eq!(first_drops.load(Ordering::SeqCst), 1);
    assert_eq!(second_drops.load(Ordering::SeqCst), 1);
}

#[test]
fn setter_on_immutable_destroys_state_and_changes_nothing() {
    let funcs = UnicodeFuncs::new(None);
    let (kept, kept_drops) = TrackedState::new();

    funcs.set_script_func(move |_, cp| {
        let _ = &kept.drops;
        simple_script(cp)
    });
    funcs.make_immutable();
    assert!(funcs.is_immutable());

    let (rejected, rejected_drops) = TrackedState::new();
    funcs.set_script_func(move |_, _| {
        let _ = &rejected.drops;
        Script::Arabic
    });

    // The rejected state was disposed of synchronously; the installed
    // callback is untouched.
    assert_eq!(rejected_drops.load(Ordering::SeqCst), 1);
    assert_eq!(kept_drops.load(Ordering::SeqCst), 0);
    assert_eq!(funcs.script('a' as u32), Script::Latin);

    drop(funcs);
    assert_eq!(kept_drops.load(Ordering::SeqCst), 1);
    assert_eq!(rejected_drops.load(Ordering::SeqCst), 1);
}

#[test]
fn clear_on_immutable_keeps_installed_state() {
    let funcs = UnicodeFuncs::new(None);
    let (state, drops) = TrackedState::new();

    funcs.set_script_func(move |_, cp| {
        let _ = &state.drops;
        simple_script(cp)
    });
    funcs.make_immutable();
    funcs.clear_script_func();

    assert_eq!(drops.load(Ordering::SeqCst), 0);
    assert_eq!(funcs.script('a' as u32), Script::Latin);
}

#[test]
fn every_slot_destroys_state_on_drop() {
    let funcs = UnicodeFuncs::new(None);
    let (s1, d1) = TrackedState::new();
    let (s2, d2) = TrackedState::new();
    let (s3, d3) = TrackedState::new();
    let (s4, d4) = TrackedState::new();

    funcs.set_combining_class_func(move |_, _| {
        let _ = &s1.drops;
        230
    });
    funcs.set_general_category_func(move |_, _| {
        let _ = &s2.drops;
        GeneralCategory::OtherLetter
    });
    funcs.set_mirroring_func(move |_, cp| {
        let _ = &s3.drops;
        cp
    });
    funcs.set_script_func(move |_, _| {
        let _ = &s4.drops;
        Script::Latin
    });

    assert_eq!(funcs.combining_class(0x20), 230);
    assert_eq!(funcs.general_category(0x20), GeneralCategory::OtherLetter);
    assert_eq!(funcs.mirroring(0x28), 0x28);
    assert_eq!(funcs.script(0x20), Script::Latin);

    drop(funcs);
    for drops in [d1, d2, d3, d4] {
        assert_eq!(drops.load(Ordering::SeqCst), 1);
    }
}

// === Chaining ===

#[test]
fn chain_up_to_empty() {
    let parent = UnicodeFuncs::new(None);
    assert!(!parent.is_immutable());

    let child = UnicodeFuncs::new(Some(&parent));
    assert!(parent.is_immutable());
    drop(parent);

    // The child still reaches the empty defaults through the chain.
    assert!(!child.is_immutable());
    assert_eq!(child.combining_class(0x0300), 0);
    assert_eq!(child.general_category(0x0061), GeneralCategory::Unassigned);
    assert_eq!(child.mirroring(0x0028), 0x0028);
    assert_eq!(child.script(0x0061), Script::Unknown);
}

#[test]
fn chain_up_to_builtin() {
    let parent = UnicodeFuncs::new(Some(&UnicodeFuncs::builtin()));
    let child = UnicodeFuncs::new(Some(&parent));
    assert!(parent.is_immutable());
    drop(parent);

    child.make_immutable();
    assert_eq!(child.combining_class(0x0300), 230);
    assert_eq!(child.general_category(0x0061), GeneralCategory::LowercaseLetter);
    assert_eq!(child.mirroring(0x0028), 0x0029);
    assert_eq!(child.script(0x0061), Script::Latin);
}

// === Subclassing ===

#[test]
fn subclass_of_empty_chain() {
    let parent = UnicodeFuncs::new(None);
    let funcs = UnicodeFuncs::new(Some(&parent));
    drop(parent);

    let (state, drops) = TrackedState::new();
    funcs.set_script_func(move |f, cp| {
        let _ = &state.drops;
        if cp == 'a' as u32 {
            Script::Arabic
        } else {
            f.parent().script(cp)
        }
    });

    assert_eq!(funcs.script('a' as u32), Script::Arabic);
    assert_eq!(funcs.script('b' as u32), Script::Unknown);

    assert_eq!(drops.load(Ordering::SeqCst), 0);
    drop(funcs);
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}

#[test]
fn subclass_of_builtin() {
    let funcs = UnicodeFuncs::new(Some(&UnicodeFuncs::builtin()));

    let (state, drops) = TrackedState::new();
    funcs.set_script_func(move |f, cp| {
        let _ = &state.drops;
        if cp == 'a' as u32 {
            Script::Arabic
        } else {
            f.parent().script(cp)
        }
    });

    assert_eq!(funcs.script('a' as u32), Script::Arabic);
    assert_eq!(funcs.script('b' as u32), Script::Latin);

    drop(funcs);
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}

#[test]
fn subclass_deep_chain() {
    // Level 0 overrides the lowercase range, level 1 overrides only 'a'
    // and defers the rest per codepoint.
    let level0 = UnicodeFuncs::new(None);
    let (s0, d0) = TrackedState::new();
    level0.set_script_func(move |_, cp| {
        let _ = &s0.drops;
        simple_script(cp)
    });

    let level1 = UnicodeFuncs::new(Some(&level0));
    drop(level0);
    assert_eq!(d0.load(Ordering::SeqCst), 0);

    let (s1, d1) = TrackedState::new();
    level1.set_script_func(move |f, cp| {
        let _ = &s1.drops;
        if cp == 'a' as u32 {
            Script::Arabic
        } else {
            f.parent().script(cp)
        }
    });

    assert_eq!(level1.script('a' as u32), Script::Arabic);
    assert_eq!(level1.script('b' as u32), Script::Latin);
    assert_eq!(level1.script('0' as u32), Script::Unknown);

    drop(level1);
    assert_eq!(d0.load(Ordering::SeqCst), 1);
    assert_eq!(d1.load(Ordering::SeqCst), 1);
}

#[test]
fn subclass_deep_chain_over_builtin() {
    // Same shape, three levels above the UCD tables: overrides win at
    // their level, everything else reaches the tables.
    let level0 = UnicodeFuncs::new(Some(&UnicodeFuncs::builtin()));
    level0.set_script_func(|f, cp| {
        if (0x61..=0x7A).contains(&cp) {
            Script::Latin
        } else {
            f.parent().script(cp)
        }
    });

    let level1 = UnicodeFuncs::new(Some(&level0));
    drop(level0);
    level1.set_script_func(|f, cp| {
        if cp == 'a' as u32 {
            Script::Arabic
        } else {
            f.parent().script(cp)
        }
    });

    assert_eq!(level1.script('a' as u32), Script::Arabic);
    assert_eq!(level1.script('b' as u32), Script::Latin);
    assert_eq!(level1.script('0' as u32), Script::Common);
    assert_eq!(level1.script(0x111111), Script::Unknown);
}

// === Immutability semantics ===

#[test]
fn immutable_setter_does_not_alter_results() {
    let funcs = UnicodeFuncs::new(Some(&UnicodeFuncs::builtin()));
    funcs.make_immutable();

    let before: Vec<Script> = (0x20..0x80).map(|cp| funcs.script(cp)).collect();
    funcs.set_script_func(|_, _| Script::Arabic);
    let after: Vec<Script> = (0x20..0x80).map(|cp| funcs.script(cp)).collect();

    assert_eq!(before, after);
}

#[test]
fn handles_share_one_provider() {
    let funcs = UnicodeFuncs::new(None);
    let alias = funcs.clone();
    funcs.set_script_func(|_, _| Script::Greek);
    assert_eq!(alias.script(0x41), Script::Greek);

    alias.make_immutable();
    assert!(funcs.is_immutable());
}

#[test]
fn concurrent_reads_after_freeze() {
    let funcs = UnicodeFuncs::new(Some(&UnicodeFuncs::builtin()));
    funcs.set_script_func(|f, cp| {
        if cp == 'a' as u32 {
            Script::Arabic
        } else {
            f.parent().script(cp)
        }
    });
    funcs.make_immutable();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let funcs = funcs.clone();
            std::thread::spawn(move || {
                for _ in 0..1000 {
                    assert_eq!(funcs.script('a' as u32), Script::Arabic);
                    assert_eq!(funcs.script('b' as u32), Script::Latin);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
