#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, links the standard library (the engine itself is core-only)
// - detect: structural trait detection for seeding descriptors

//! # tola-cursor
//!
//! Iterator trait resolution engine.
//!
//! **Classify a cursor description into a capability tier and a canonical
//! record of associated types, at compile time.**
//!
//! ## Architecture
//!
//! Given a [`CursorDesc`] — which operations a candidate cursor type
//! exposes, and which associated-name slots it declares itself — the engine
//! resolves:
//!
//! - the **category**: the maximum satisfied rung of
//!   `Output < Input < Forward < Bidirectional < RandomAccess < Contiguous`,
//!   unless a self-declaration takes precedence;
//! - the **associated types**: `value_type`, `difference_type`, `pointer`,
//!   `reference`, each by an ordered declared → deduced → void rule chain.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Ty (symbolic type terms), Tier (capability lattice)            |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Descriptors                                             |
//! |  - Ops (operation vocabulary), Decls (slots), CursorDesc          |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Capability Prober          (2b: structural seeding)     |
//! |  - Probe: one total predicate per tier, cumulative                |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Resolution                                              |
//! |  - category precedence + Policy, slot rule chains, TraitRecord    |
//! +-------------------------------------------------------------------+
//! ```
//!
//! Everything is `const fn`: a whole resolution can live in a `const`
//! binding, so classification costs nothing at runtime.
//!
//! ## Quick Start
//!
//! ```
//! use tola_cursor::prelude::*;
//! use tola_cursor::{ops, decls};
//!
//! const ELEM: Ty = Ty::Named("u8");
//! const ELEM_REF: Ty = Ty::Ref(&ELEM);
//!
//! // A forward-only cursor over a linked structure.
//! const CURSOR: CursorDesc = CursorDesc::new(
//!     ops! {
//!         deref: Some(ELEM_REF),
//!         pre_inc,
//!         post_inc_deref: Some(ELEM_REF),
//!         eq,
//!         copyable,
//!         default_ctor,
//!     },
//!     decls! {
//!         value_type: Some(ELEM),
//!         difference_type: Some(Ty::PtrDiff),
//!     },
//! );
//!
//! const RECORD: Resolution = resolve(&CURSOR);
//! match RECORD {
//!     Resolution::Resolved(record) => {
//!         assert_eq!(record.category, Tier::Forward);
//!         assert_eq!(record.reference, ELEM_REF);
//!         assert_eq!(record.pointer, Ty::Void); // no arrow, no declaration
//!     }
//!     Resolution::NotIterator => unreachable!(),
//! }
//! ```
//!
//! ## Features
//!
//! - **Total predicates**: a candidate missing operations fails tiers, it is
//!   never rejected with an error.
//! - **First-class "not an iterator"**: [`Resolution::NotIterator`], not a
//!   garbage record.
//! - **Trust vs. verify**: self-declarations win by default (legacy
//!   contract); [`Policy::Verify`] resolves from evidence only, and
//!   [`Resolver::diagnose`] flags disagreements either way.
//! - **Pointer special case**: raw pointers resolve definitionally,
//!   bypassing every rule chain.

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod term;
pub mod tier;

// =============================================================================
// Layer 1: Descriptors
// =============================================================================
pub mod desc;

// =============================================================================
// Layer 2: Capability Prober
// =============================================================================
pub mod probe;

// Layer 2b: structural seeding of descriptor bits from concrete types
#[cfg(feature = "detect")]
pub mod detect;

// =============================================================================
// Layer 3: Resolution
// =============================================================================
pub mod resolve;

// Syntax macros (ops!, decls!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use desc::{CursorDesc, Decls, Ops, Shape};
pub use probe::Probe;
pub use resolve::{
    Mismatch, Policy, Resolution, Resolver, Rule, Slot, TraitRecord, resolve,
};
pub use term::Ty;
pub use tier::Tier;

/// Common items for descriptor construction and resolution.
pub mod prelude {
    pub use crate::desc::{CursorDesc, Decls, Ops, Shape};
    pub use crate::probe::Probe;
    pub use crate::resolve::{
        Mismatch, Policy, Resolution, Resolver, Rule, Slot, TraitRecord, resolve,
    };
    pub use crate::term::Ty;
    pub use crate::tier::Tier;
    #[cfg(feature = "detect")]
    pub use crate::detect::OpsSeed;
}
