//! # Layer 1: Candidate Descriptors
//!
//! A [`CursorDesc`] is the engine's sole input: an inert description of a
//! sequence-cursor type, listing which operations it exposes and which
//! associated-name slots it declares itself. The engine never constructs
//! candidates (the one exception is [`CursorDesc::pointer`], where the
//! description is fixed by definition).
//!
//! Descriptors are plain const data. Build them with struct-update syntax
//! over [`Ops::NONE`] / [`Decls::NONE`], or with the [`ops!`](crate::ops) /
//! [`decls!`](crate::decls) sugar:
//!
//! ```
//! use tola_cursor::{ops, decls};
//! use tola_cursor::desc::CursorDesc;
//! use tola_cursor::term::Ty;
//!
//! const ELEM: Ty = Ty::Named("i32");
//! const DESC: CursorDesc = CursorDesc::new(
//!     ops! {
//!         deref: Some(Ty::Ref(&ELEM)),
//!         pre_inc,
//!         copyable,
//!     },
//!     decls! {
//!         value_type: Some(ELEM),
//!     },
//! );
//! ```

use crate::term::Ty;
use crate::tier::Tier;

// =============================================================================
// Operation Vocabulary
// =============================================================================

/// The fixed vocabulary of cursor operations.
///
/// Every field defaults to "not supported" in [`Ops::NONE`]. Operations whose
/// result type feeds a downstream rule carry it as a payload; the rest are
/// plain booleans. A missing operation is an ordinary observation, never an
/// error: candidates with inconsistent operation sets simply fail the tiers
/// that need the missing piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ops {
    /// Exact result type of dereferencing.
    pub deref: Option<Ty>,
    /// Return type of the member arrow operation.
    pub arrow: Option<Ty>,
    /// Pre-increment.
    pub pre_inc: bool,
    /// Result type of dereferencing a post-increment copy.
    pub post_inc_deref: Option<Ty>,
    /// Pre-decrement.
    pub pre_dec: bool,
    /// Post-decrement.
    pub post_dec: bool,
    /// Equality comparison.
    pub eq: bool,
    /// Total ordering comparison.
    pub ord: bool,
    /// Compound offset addition (`+=`).
    pub add_assign: bool,
    /// Compound offset subtraction (`-=`).
    pub sub_assign: bool,
    /// Binary offset addition, both operand orders.
    pub offset_add: bool,
    /// Result type of subtracting two cursors.
    pub distance: Option<Ty>,
    /// Result type of subscripting.
    pub subscript: Option<Ty>,
    /// Copy construction.
    pub copyable: bool,
    /// Default construction.
    pub default_ctor: bool,
}

impl Ops {
    /// No operations supported.
    pub const NONE: Ops = Ops {
        deref: None,
        arrow: None,
        pre_inc: false,
        post_inc_deref: None,
        pre_dec: false,
        post_dec: false,
        eq: false,
        ord: false,
        add_assign: false,
        sub_assign: false,
        offset_add: false,
        distance: None,
        subscript: None,
        copyable: false,
        default_ctor: false,
    };
}

// =============================================================================
// Self-Declaration Slots
// =============================================================================

/// The associated-name slots a candidate may declare itself.
///
/// Declared slots take precedence over anything the engine would infer
/// mechanically; see the category precedence rules in
/// [`resolve::category`](crate::resolve::category).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decls {
    /// The `iterator_concept` slot.
    pub concept: Option<Tier>,
    /// The `iterator_category` slot.
    pub category: Option<Tier>,
    /// The `value_type` slot.
    pub value_type: Option<Ty>,
    /// The `difference_type` slot.
    pub difference_type: Option<Ty>,
    /// The `pointer` slot.
    pub pointer: Option<Ty>,
    /// The `reference` slot.
    pub reference: Option<Ty>,
}

impl Decls {
    /// No slots declared.
    pub const NONE: Decls = Decls {
        concept: None,
        category: None,
        value_type: None,
        difference_type: None,
        pointer: None,
        reference: None,
    };

    /// The declaration that governs the category: the `iterator_concept`
    /// slot if present, else the `iterator_category` slot.
    pub const fn declared_tier(&self) -> Option<Tier> {
        match self.concept {
            Some(t) => Some(t),
            None => self.category,
        }
    }
}

// =============================================================================
// Shape
// =============================================================================

/// Whether the candidate is a raw pointer.
///
/// Pointers are the one shape whose whole trait record is fixed by
/// definition; the resolver bypasses the rule chains for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// An ordinary candidate, classified from its operations and slots.
    General,
    /// A raw pointer to `pointee`.
    Pointer { pointee: &'static Ty },
}

// =============================================================================
// Candidate Descriptor
// =============================================================================

/// Description of one candidate cursor type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorDesc {
    pub shape: Shape,
    pub ops: Ops,
    pub decls: Decls,
}

impl CursorDesc {
    /// A general candidate from its operations and self-declarations.
    pub const fn new(ops: Ops, decls: Decls) -> CursorDesc {
        CursorDesc {
            shape: Shape::General,
            ops,
            decls,
        }
    }

    /// A raw pointer to `pointee`.
    ///
    /// The operation set is synthesized to the full pointer contract so the
    /// prober agrees with the definitional record the resolver produces.
    /// No slots are declared: a pointer carries no nested names.
    pub const fn pointer(pointee: &'static Ty) -> CursorDesc {
        CursorDesc {
            shape: Shape::Pointer { pointee },
            ops: Ops {
                deref: Some(Ty::Ref(pointee)),
                arrow: Some(Ty::Ptr(pointee)),
                pre_inc: true,
                post_inc_deref: Some(Ty::Ref(pointee)),
                pre_dec: true,
                post_dec: true,
                eq: true,
                ord: true,
                add_assign: true,
                sub_assign: true,
                offset_add: true,
                distance: Some(Ty::PtrDiff),
                subscript: Some(Ty::Ref(pointee)),
                copyable: true,
                default_ctor: true,
            },
            decls: Decls::NONE,
        }
    }

    /// Is this candidate a raw pointer?
    pub const fn is_pointer(&self) -> bool {
        matches!(self.shape, Shape::Pointer { .. })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_tier_prefers_concept() {
        let both = Decls {
            concept: Some(Tier::Contiguous),
            category: Some(Tier::Forward),
            ..Decls::NONE
        };
        assert_eq!(both.declared_tier(), Some(Tier::Contiguous));

        let category_only = Decls {
            category: Some(Tier::Forward),
            ..Decls::NONE
        };
        assert_eq!(category_only.declared_tier(), Some(Tier::Forward));
        assert_eq!(Decls::NONE.declared_tier(), None);
    }

    #[test]
    fn test_pointer_descriptor_is_fully_operational() {
        const INT: Ty = Ty::Named("i32");
        let desc = CursorDesc::pointer(&INT);
        assert!(desc.is_pointer());
        assert!(desc.ops.ord && desc.ops.offset_add && desc.ops.default_ctor);
        assert_eq!(desc.ops.deref, Some(Ty::Ref(&INT)));
        assert_eq!(desc.ops.distance, Some(Ty::PtrDiff));
        assert_eq!(desc.decls, Decls::NONE);
    }
}
