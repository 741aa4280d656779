//! # Layer 2: Capability Prober
//!
//! One total predicate per capability tier. Every predicate answers
//! "does this candidate satisfy tier T's full operational contract?" with a
//! plain boolean; a candidate missing an operation simply tests false for
//! the tiers that need it. Nothing here fails hard, and nothing here looks
//! at the `iterator_concept` / `iterator_category` slots except the
//! contiguous test, whose contract is explicitly self-declared.
//!
//! Contracts are cumulative: each tier's predicate calls the one below it,
//! so satisfying tier T proves every weaker tier by construction.
//!
//! ```
//! use tola_cursor::{ops, Probe, Tier, Ty};
//! use tola_cursor::desc::{CursorDesc, Decls};
//!
//! const ELEM: Ty = Ty::Named("u8");
//! const DESC: CursorDesc = CursorDesc::new(
//!     ops! { deref: Some(Ty::Ref(&ELEM)), pre_inc, copyable },
//!     Decls::NONE,
//! );
//!
//! const PROBE: Probe = Probe::new(&DESC);
//! assert!(PROBE.is_output());
//! assert!(!PROBE.is_input()); // no equality, no difference type
//! assert_eq!(PROBE.strongest(), Some(Tier::Output));
//! ```

use crate::desc::CursorDesc;
use crate::resolve::assoc;
use crate::term::{Ty, opt_eq};
use crate::tier::Tier;

// =============================================================================
// Probe
// =============================================================================

/// Capability prober over one candidate descriptor.
#[derive(Debug, Clone, Copy)]
pub struct Probe<'d> {
    desc: &'d CursorDesc,
}

impl<'d> Probe<'d> {
    pub const fn new(desc: &'d CursorDesc) -> Probe<'d> {
        Probe { desc }
    }

    /// Does the candidate satisfy `tier`'s full prerequisite chain?
    pub const fn satisfies(&self, tier: Tier) -> bool {
        match tier {
            Tier::Output => self.output_reqs(),
            Tier::Input => self.input_reqs(),
            Tier::Forward => self.forward_reqs(),
            Tier::Bidirectional => self.bidirectional_reqs(),
            Tier::RandomAccess => self.random_access_reqs(),
            Tier::Contiguous => self.contiguous_reqs(),
        }
    }

    /// The strongest satisfied tier, or `None` for a candidate that is not
    /// an iterator shape at all.
    pub const fn strongest(&self) -> Option<Tier> {
        let mut i = 0;
        while i < Tier::DESCENDING.len() {
            let tier = Tier::DESCENDING[i];
            if self.satisfies(tier) {
                return Some(tier);
            }
            i += 1;
        }
        None
    }

    // -------------------------------------------------------------------------
    // Tier contracts (each includes the previous tier's)
    // -------------------------------------------------------------------------

    const fn output_reqs(&self) -> bool {
        let ops = &self.desc.ops;
        ops.deref.is_some() && ops.pre_inc && ops.copyable
    }

    const fn input_reqs(&self) -> bool {
        let ops = &self.desc.ops;
        self.output_reqs()
            && ops.eq
            && ops.post_inc_deref.is_some()
            && assoc::difference_type(self.desc).is_signed_int()
            && !assoc::value_type(self.desc).is_void()
    }

    const fn forward_reqs(&self) -> bool {
        let ops = &self.desc.ops;
        if !self.input_reqs() || !ops.default_ctor {
            return false;
        }
        let deref = match ops.deref {
            Some(ty) => ty,
            None => return false,
        };
        // Dereference must yield a genuine reference whose unqualified type
        // is the value type, and the post-increment copy must dereference to
        // the same type.
        deref.is_reference()
            && deref.decay().eq(&assoc::value_type(self.desc))
            && opt_eq(&ops.post_inc_deref, &deref)
    }

    const fn bidirectional_reqs(&self) -> bool {
        let ops = &self.desc.ops;
        self.forward_reqs() && ops.pre_dec && ops.post_dec
    }

    const fn random_access_reqs(&self) -> bool {
        let ops = &self.desc.ops;
        if !self.bidirectional_reqs()
            || !ops.ord
            || !ops.add_assign
            || !ops.sub_assign
            || !ops.offset_add
        {
            return false;
        }
        // Cursor subtraction must produce the difference type, and subscript
        // must produce something convertible to the reference type.
        let subscript_ok = match ops.subscript {
            Some(sub) => convertible(sub, assoc::reference_type(self.desc)),
            None => false,
        };
        opt_eq(&ops.distance, &assoc::difference_type(self.desc)) && subscript_ok
    }

    const fn contiguous_reqs(&self) -> bool {
        // Contiguity cannot be discovered from operations: it is a pointer,
        // or the candidate says so itself.
        self.random_access_reqs()
            && (self.desc.is_pointer()
                || matches!(self.desc.decls.declared_tier(), Some(Tier::Contiguous)))
    }
}

// Per-tier accessors: is_output() .. is_contiguous().
macro_rules! tier_accessors {
    ($($Tier:ident),* $(,)?) => {
        paste::paste! {
            impl Probe<'_> {
                $(
                    #[doc = "Does the candidate satisfy the " $Tier " tier?"]
                    pub const fn [<is_ $Tier:snake>](&self) -> bool {
                        self.satisfies(Tier::$Tier)
                    }
                )*
            }
        }
    };
}

tier_accessors!(Output, Input, Forward, Bidirectional, RandomAccess, Contiguous);

/// Equal, or equal after decay on both sides.
const fn convertible(from: Ty, to: Ty) -> bool {
    from.eq(&to) || from.decay().eq(&to.decay())
}
