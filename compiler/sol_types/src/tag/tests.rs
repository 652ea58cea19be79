use super::*;

#[test]
fn only_arrays_and_structs_are_references() {
    assert!(Tag::Array.is_reference());
    assert!(Tag::Struct.is_reference());
    assert!(!Tag::Mapping.is_reference());
    assert!(!Tag::Tuple.is_reference());
    assert!(!Tag::StringLiteral.is_reference());
}

#[test]
fn fresh_categories_need_structural_comparison() {
    for tag in [
        Tag::Tuple,
        Tag::Function,
        Tag::Array,
        Tag::Struct,
        Tag::Module,
        Tag::Modifier,
        Tag::RationalNumber,
        Tag::Magic,
    ] {
        assert!(!tag.identity_is_structural(), "{tag} must not rely on identity");
    }
}

#[test]
fn cached_categories_compare_by_identity() {
    for tag in [
        Tag::Integer,
        Tag::FixedPoint,
        Tag::StringLiteral,
        Tag::Enum,
        Tag::Contract,
        Tag::TypeType,
        Tag::Mapping,
    ] {
        assert!(tag.identity_is_structural(), "{tag} is canonicalized");
    }
}

#[test]
fn tag_formatting() {
    assert_eq!(format!("{:?}", Tag::TypeType), "Tag::type_type");
    assert_eq!(Tag::FixedBytes.to_string(), "fixed_bytes");
}
