//! # Layer 3: Resolution Engine
//!
//! The query operation: one candidate descriptor in, one [`Resolution`]
//! out. Pure and synchronous — no shared state, no I/O, no cache; distinct
//! queries are independent and safely concurrent.
//!
//! ```text
//! CursorDesc ──> Probe ──> category ─┬─> TraitRecord
//!                └──────> assoc ─────┘        |
//!                                        Resolution
//! ```
//!
//! ```
//! use tola_cursor::{resolve, Resolution, Tier, Ty};
//! use tola_cursor::desc::CursorDesc;
//!
//! const INT: Ty = Ty::Named("i32");
//! const RESOLVED: Resolution = resolve(&CursorDesc::pointer(&INT));
//!
//! match RESOLVED {
//!     Resolution::Resolved(record) => assert_eq!(record.category, Tier::Contiguous),
//!     Resolution::NotIterator => unreachable!(),
//! }
//! ```

pub mod assoc;
pub mod category;
pub mod record;

pub use assoc::{Rule, Slot, resolve_slot};
pub use category::{Mismatch, Policy, diagnose};
pub use record::TraitRecord;

use crate::desc::{CursorDesc, Shape};

// =============================================================================
// Resolution
// =============================================================================

/// Outcome of a query.
///
/// `NotIterator` is the engine's single failure mode: the candidate
/// satisfies no capability tier and declares nothing. It is a first-class
/// result, not an error; no record fields exist to misread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The candidate is an iterator shape with this record.
    Resolved(TraitRecord),
    /// The candidate is not a recognized iterator shape.
    NotIterator,
}

impl Resolution {
    pub const fn is_iterator(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    /// The record, if the candidate resolved.
    pub const fn ok(self) -> Option<TraitRecord> {
        match self {
            Resolution::Resolved(record) => Some(record),
            Resolution::NotIterator => None,
        }
    }
}

// =============================================================================
// Resolver
// =============================================================================

/// The engine, configured with a declaration policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver {
    policy: Policy,
}

impl Resolver {
    pub const fn new(policy: Policy) -> Resolver {
        Resolver { policy }
    }

    pub const fn policy(&self) -> Policy {
        self.policy
    }

    /// Resolve one candidate to a trait record.
    ///
    /// Raw pointers short-circuit to their definitional record; every other
    /// candidate goes through category precedence and the four slot chains.
    pub const fn resolve(&self, desc: &CursorDesc) -> Resolution {
        if let Shape::Pointer { pointee } = desc.shape {
            return Resolution::Resolved(TraitRecord::for_pointer(pointee));
        }
        match category::category(desc, self.policy) {
            Some(tier) => Resolution::Resolved(TraitRecord {
                category: tier,
                value_type: assoc::value_type(desc),
                difference_type: assoc::difference_type(desc),
                pointer: assoc::pointer_type(desc),
                reference: assoc::reference_type(desc),
            }),
            None => Resolution::NotIterator,
        }
    }

    /// Report a declaration/evidence mismatch for this candidate, if any.
    pub const fn diagnose(&self, desc: &CursorDesc) -> Option<Mismatch> {
        category::diagnose(desc)
    }
}

/// Resolve under the default [`Policy::Trust`].
pub const fn resolve(desc: &CursorDesc) -> Resolution {
    Resolver::new(Policy::Trust).resolve(desc)
}
