#![cfg(feature = "detect")]

//! Tests for structural seeding: descriptor bits detected from concrete
//! Rust types, the rest hand-maintained.

use tola_cursor::prelude::*;
use tola_cursor::{decls, ops, seed};

// =============================================================================
// Seeding Std Types
// =============================================================================

#[test]
fn test_seed_integers() {
    let bits = seed!(i64);
    assert!(bits.copyable && bits.default_ctor && bits.eq && bits.ord);
}

#[test]
fn test_seed_partial_orderings() {
    // Floats compare but do not totally order.
    let bits = seed!(f32);
    assert!(bits.eq);
    assert!(!bits.ord);
}

#[test]
fn test_seed_non_defaultable_type() {
    // NonZero integers are copyable and totally ordered but have no
    // default value.
    let bits = seed!(core::num::NonZeroU8);
    assert!(bits.copyable && bits.eq && bits.ord);
    assert!(!bits.default_ctor);
}

// =============================================================================
// Seeding User Cursors
// =============================================================================

#[derive(Clone, Default, PartialEq)]
struct RingCursor {
    index: usize,
}

#[test]
fn test_seed_user_cursor() {
    let bits = seed!(RingCursor);
    assert!(bits.copyable && bits.default_ctor && bits.eq);
    assert!(!bits.ord);
}

#[test]
fn test_seeded_descriptor_resolves() {
    const ELEM: Ty = Ty::Named("u8");
    const ELEM_REF: Ty = Ty::Ref(&ELEM);

    let hand_written = ops! {
        deref: Some(ELEM_REF),
        pre_inc,
        post_inc_deref: Some(ELEM_REF),
    };
    let desc = CursorDesc::new(
        hand_written.with_seed(seed!(RingCursor)),
        decls! { difference_type: Some(Ty::PtrDiff) },
    );

    let record = resolve(&desc).ok().unwrap();
    // Clone + Default + PartialEq push the seeded cursor to Forward; the
    // missing Ord (among the rest) keeps it off RandomAccess.
    assert_eq!(record.category, Tier::Forward);
}

#[test]
fn test_seed_in_const_context() {
    const BITS: OpsSeed = seed!(RingCursor);
    assert!(BITS.copyable);
}
