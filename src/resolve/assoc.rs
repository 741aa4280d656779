//! Associated-type slot resolution.
//!
//! Each of the four record slots is resolved independently by an ordered
//! rule list, first match wins:
//!
//! | slot | 1. declared | 2. deduced | 3. fallback |
//! |---|---|---|---|
//! | `value_type` | `value_type` slot | dereference result, decayed | void |
//! | `difference_type` | `difference_type` slot | cursor-subtraction result | void |
//! | `pointer` | `pointer` slot | member arrow return type | void |
//! | `reference` | `reference` slot | exact dereference result | void |
//!
//! The rule that fired is observable through [`resolve_slot`]; the thin
//! per-slot accessors return the term alone. There is no cross-validation
//! between slots — only the prober's tier contracts impose consistency.

use crate::desc::CursorDesc;
use crate::term::Ty;

// =============================================================================
// Slots and Rules
// =============================================================================

/// One of the four record slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Value,
    Difference,
    Pointer,
    Reference,
}

/// Which rule of a slot's chain produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The candidate declared the slot itself.
    Declared,
    /// Deduced from an operation's result type.
    Deduced,
    /// Nothing matched; the slot is void.
    Fallback,
}

// =============================================================================
// Rule Chains
// =============================================================================

/// Resolve one slot, reporting the rule that fired.
pub const fn resolve_slot(desc: &CursorDesc, slot: Slot) -> (Ty, Rule) {
    let (declared, deduced) = match slot {
        Slot::Value => (desc.decls.value_type, deduced_value(desc)),
        Slot::Difference => (desc.decls.difference_type, desc.ops.distance),
        Slot::Pointer => (desc.decls.pointer, desc.ops.arrow),
        Slot::Reference => (desc.decls.reference, desc.ops.deref),
    };
    match declared {
        Some(ty) => (ty, Rule::Declared),
        None => match deduced {
            Some(ty) => (ty, Rule::Deduced),
            None => (Ty::Void, Rule::Fallback),
        },
    }
}

/// What dereference-then-decay produces, if the candidate dereferences.
const fn deduced_value(desc: &CursorDesc) -> Option<Ty> {
    match desc.ops.deref {
        Some(ty) => Some(ty.decay()),
        None => None,
    }
}

// Per-slot accessors: value_type(), difference_type(), pointer_type(),
// reference_type().
macro_rules! slot_accessors {
    ($($Slot:ident),* $(,)?) => {
        paste::paste! {
            $(
                #[doc = "Resolved `" $Slot "` slot of the record."]
                pub const fn [<$Slot:lower _type>](desc: &CursorDesc) -> Ty {
                    resolve_slot(desc, Slot::$Slot).0
                }
            )*
        }
    };
}

slot_accessors!(Value, Difference, Pointer, Reference);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desc::{Decls, Ops};

    const ELEM: Ty = Ty::Named("i32");
    const ELEM_REF: Ty = Ty::Ref(&ELEM);

    #[test]
    fn test_declared_slot_wins_over_deduction() {
        let desc = CursorDesc::new(
            Ops {
                deref: Some(ELEM_REF),
                ..Ops::NONE
            },
            Decls {
                value_type: Some(Ty::Named("wrapped")),
                ..Decls::NONE
            },
        );
        assert_eq!(
            resolve_slot(&desc, Slot::Value),
            (Ty::Named("wrapped"), Rule::Declared)
        );
        // Reference still deduces from the exact dereference result.
        assert_eq!(resolve_slot(&desc, Slot::Reference), (ELEM_REF, Rule::Deduced));
    }

    #[test]
    fn test_deduced_value_decays() {
        const CONST_ELEM: Ty = Ty::Const(&ELEM);
        let desc = CursorDesc::new(
            Ops {
                deref: Some(Ty::Ref(&CONST_ELEM)),
                ..Ops::NONE
            },
            Decls::NONE,
        );
        assert_eq!(value_type(&desc), ELEM);
        assert_eq!(reference_type(&desc), Ty::Ref(&CONST_ELEM));
    }

    #[test]
    fn test_every_slot_falls_back_to_void() {
        let bare = CursorDesc::new(Ops::NONE, Decls::NONE);
        for slot in [Slot::Value, Slot::Difference, Slot::Pointer, Slot::Reference] {
            assert_eq!(resolve_slot(&bare, slot), (Ty::Void, Rule::Fallback));
        }
    }

    #[test]
    fn test_slots_resolve_independently() {
        // A pointer slot resolving to void does not disturb the others.
        let desc = CursorDesc::new(
            Ops {
                deref: Some(ELEM_REF),
                distance: Some(Ty::PtrDiff),
                ..Ops::NONE
            },
            Decls::NONE,
        );
        assert_eq!(value_type(&desc), ELEM);
        assert_eq!(difference_type(&desc), Ty::PtrDiff);
        assert_eq!(pointer_type(&desc), Ty::Void);
        assert_eq!(reference_type(&desc), ELEM_REF);
    }
}
