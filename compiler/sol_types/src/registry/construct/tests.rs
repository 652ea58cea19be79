use ethnum::U256;
use pretty_assertions::assert_eq;
use sol_ir::{ContractId, DataLocation, ModifierId, SourceUnitId, StructId};

use crate::{ArrayKind, Idx, MagicKind, Rational, RegistryFault, Tag, TypeData, TypeRegistry};

#[test]
fn tuples_are_not_deduplicated() {
    let mut reg = TypeRegistry::new();
    let a = reg.tuple_type(&[Idx::UINT256]);
    let b = reg.tuple_type(&[Idx::UINT256]);
    assert_ne!(a, b);
    assert!(reg.equals(a, b));
    assert_eq!(reg.tuple_components(a), Some(&[Some(Idx::UINT256)][..]));
}

#[test]
fn empty_tuple_is_the_sentinel() {
    let mut reg = TypeRegistry::new();
    assert_eq!(reg.tuple_type(&[]), Idx::EMPTY_TUPLE);
    assert_eq!(reg.tuple_type_with_gaps(Vec::new()), Idx::EMPTY_TUPLE);
    assert_eq!(reg.tuple_type(&[]), reg.error_type());
}

#[test]
fn tuple_with_gaps_keeps_absent_components() {
    let mut reg = TypeRegistry::new();
    let t = reg.tuple_type_with_gaps(vec![None, Some(Idx::BOOL)]);
    assert_eq!(reg.tuple_components(t), Some(&[None, Some(Idx::BOOL)][..]));
}

#[test]
fn arrays_are_fresh_pointers() {
    let mut reg = TypeRegistry::new();
    let a = reg.array_type(DataLocation::Memory, Idx::UINT256);
    let b = reg.array_type(DataLocation::Memory, Idx::UINT256);
    assert_ne!(a, b);
    assert!(reg.equals(a, b));
    assert_eq!(reg.reference_location(a), Some((DataLocation::Memory, true)));

    let fixed = reg.array_type_fixed(DataLocation::Storage, Idx::BOOL, U256::new(4));
    assert_eq!(
        reg.array_data(fixed).map(|array| array.kind),
        Some(ArrayKind::Element {
            base: Idx::BOOL,
            length: Some(U256::new(4))
        })
    );
    assert!(!reg.equals(a, fixed));

    let s = reg.array_type_bytes(DataLocation::CallData, true);
    assert_eq!(reg.array_data(s).map(|array| array.kind), Some(ArrayKind::String));
}

#[test]
fn with_location_fast_path_preserves_identity() {
    let mut reg = TypeRegistry::new();
    let arr = reg.array_type(DataLocation::Memory, Idx::UINT256);
    assert_eq!(reg.with_location(arr, DataLocation::Memory, true), arr);
    assert_eq!(
        reg.with_location(Idx::BYTES_STORAGE, DataLocation::Storage, true),
        Idx::BYTES_STORAGE
    );
}

#[test]
fn with_location_copies_are_never_reused() {
    let mut reg = TypeRegistry::new();
    let arr = reg.array_type(DataLocation::Memory, Idx::UINT256);
    let first = reg.with_location(arr, DataLocation::Storage, false);
    let second = reg.with_location(arr, DataLocation::Storage, false);
    assert_ne!(first, arr);
    assert_ne!(first, second);
    assert!(reg.equals(first, second));
    assert_eq!(reg.reference_location(first), Some((DataLocation::Storage, false)));
}

#[test]
fn with_location_relocates_nested_elements() {
    let mut reg = TypeRegistry::new();
    let inner = reg.array_type(DataLocation::Memory, Idx::UINT256);
    let outer = reg.array_type(DataLocation::Memory, inner);
    let moved = reg.with_location(outer, DataLocation::Storage, true);

    let Some(ArrayKind::Element { base, length: None }) =
        reg.array_data(moved).map(|array| array.kind)
    else {
        panic!("relocated array lost its element type");
    };
    assert_ne!(base, inner);
    assert_eq!(reg.reference_location(base), Some((DataLocation::Storage, false)));
}

#[test]
fn with_location_keeps_struct_declaration() {
    let mut reg = TypeRegistry::new();
    let decl = StructId::from_raw(2);
    let s = reg.struct_type(decl, DataLocation::Storage);
    let moved = reg.with_location(s, DataLocation::Memory, false);
    assert_eq!(
        reg.data(moved),
        &TypeData::Struct {
            decl,
            location: DataLocation::Memory,
            is_pointer: false
        }
    );
    assert_eq!(reg.struct_type(decl, DataLocation::Storage), s);
}

#[test]
fn with_location_rejects_value_types() {
    let mut reg = TypeRegistry::new();
    assert_eq!(
        reg.try_with_location(Idx::UINT256, DataLocation::Memory, true),
        Err(RegistryFault::NotAReferenceType { found: Tag::Integer })
    );
}

#[test]
#[should_panic(expected = "expected a reference type")]
fn with_location_faults_on_value_types() {
    let mut reg = TypeRegistry::new();
    let _ = reg.with_location(Idx::BOOL, DataLocation::Memory, true);
}

#[test]
fn with_location_if_reference_passes_value_types_through() {
    let mut reg = TypeRegistry::new();
    let before = reg.len();
    assert_eq!(reg.with_location_if_reference(DataLocation::Memory, Idx::UINT256), Idx::UINT256);
    assert_eq!(reg.len(), before);

    let moved = reg.with_location_if_reference(DataLocation::Memory, Idx::STRING_STORAGE);
    assert_eq!(reg.reference_location(moved), Some((DataLocation::Memory, false)));
}

#[test]
fn modules_and_modifiers_are_not_deduplicated() {
    let mut reg = TypeRegistry::new();
    let unit = SourceUnitId::from_raw(0);
    let m1 = reg.module_type(unit);
    let m2 = reg.module_type(unit);
    assert_ne!(m1, m2);
    assert!(reg.equals(m1, m2));

    let modifier = ModifierId::from_raw(0);
    let d1 = reg.modifier_type(modifier);
    let d2 = reg.modifier_type(modifier);
    assert_ne!(d1, d2);
    assert!(reg.equals(d1, d2));
}

#[test]
fn meta_type_wraps_contracts_only() {
    let mut reg = TypeRegistry::new();
    let c = reg.contract_type(ContractId::from_raw(0), false);
    let a = reg.meta_type(c);
    let b = reg.meta_type(c);
    assert_ne!(a, b);
    assert!(reg.equals(a, b));
    assert_eq!(reg.data(a), &TypeData::Magic(MagicKind::MetaType(c)));

    assert_eq!(
        reg.try_meta_type(Idx::UINT256),
        Err(RegistryFault::MetaTypeOfNonContract { found: Tag::Integer })
    );
}

#[test]
fn rational_numbers_compare_by_value() {
    let mut reg = TypeRegistry::new();
    let (Some(half), Some(also_half)) = (Rational::new(1, 2), Rational::new(2, 4)) else {
        panic!("nonzero denominators");
    };
    let half = reg.rational_number_type(half, None);
    let also_half = reg.rational_number_type(also_half, Some(Idx::BYTE));
    let one = reg.rational_number_type(Rational::integer(1), None);
    assert_ne!(half, also_half);
    assert!(reg.equals(half, also_half));
    assert!(!reg.equals(half, one));
}

#[test]
fn arrays_hold_lengths_past_machine_width() {
    let mut reg = TypeRegistry::new();
    let huge = U256::from_words(1 << 72, 0);
    let a = reg.array_type_fixed(DataLocation::Storage, Idx::UINT256, huge);
    let b = reg.array_type_fixed(DataLocation::Storage, Idx::UINT256, huge);
    let max = reg.array_type_fixed(DataLocation::Storage, Idx::UINT256, U256::MAX);
    assert!(reg.equals(a, b));
    assert!(!reg.equals(a, max));
    assert_eq!(
        reg.array_data(max).map(|array| array.kind),
        Some(ArrayKind::Element {
            base: Idx::UINT256,
            length: Some(U256::MAX)
        })
    );
}
