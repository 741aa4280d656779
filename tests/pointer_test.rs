//! Tests for the raw-pointer special case: the whole record is fixed by
//! definition and the rule chains are bypassed.

use tola_cursor::prelude::*;

const INT: Ty = Ty::Named("i32");
const CONST_INT: Ty = Ty::Const(&INT);

// =============================================================================
// Definitional Record
// =============================================================================

#[test]
fn test_pointer_to_int_record() {
    let record = resolve(&CursorDesc::pointer(&INT)).ok().unwrap();
    // Hand-computed expectation, field for field.
    assert_eq!(
        record,
        TraitRecord {
            category: Tier::Contiguous,
            value_type: INT,
            difference_type: Ty::PtrDiff,
            pointer: Ty::Ptr(&INT),
            reference: Ty::Ref(&INT),
        }
    );
}

#[test]
fn test_pointer_to_const_strips_qualifier_from_value_only() {
    let record = resolve(&CursorDesc::pointer(&CONST_INT)).ok().unwrap();
    assert_eq!(record.value_type, INT);
    assert_eq!(record.pointer, Ty::Ptr(&CONST_INT));
    assert_eq!(record.reference, Ty::Ref(&CONST_INT));
}

#[test]
fn test_pointer_record_in_const_context() {
    const RECORD: Resolution = resolve(&CursorDesc::pointer(&INT));
    assert_eq!(
        RECORD.ok().map(|r| r.category),
        Some(Tier::Contiguous)
    );
}

// =============================================================================
// Bypass Agrees With the General Path
// =============================================================================

#[test]
fn test_synthesized_pointer_ops_agree_with_definition() {
    // The pointer constructor synthesizes a full operation set; running the
    // general machinery over it lands on the same answers as the bypass.
    let desc = CursorDesc::pointer(&INT);
    let record = resolve(&desc).ok().unwrap();

    assert_eq!(Probe::new(&desc).strongest(), Some(record.category));
    assert_eq!(
        tola_cursor::resolve::assoc::value_type(&desc),
        record.value_type
    );
    assert_eq!(
        tola_cursor::resolve::assoc::difference_type(&desc),
        record.difference_type
    );
    assert_eq!(
        tola_cursor::resolve::assoc::pointer_type(&desc),
        record.pointer
    );
    assert_eq!(
        tola_cursor::resolve::assoc::reference_type(&desc),
        record.reference
    );
}

#[test]
fn test_pointer_policy_independent() {
    let desc = CursorDesc::pointer(&INT);
    assert_eq!(
        Resolver::new(Policy::Trust).resolve(&desc),
        Resolver::new(Policy::Verify).resolve(&desc)
    );
}
