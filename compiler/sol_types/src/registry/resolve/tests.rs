use ethnum::U256;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sol_ir::{
    ContractDef, ContractKind, DataLocation, DeclArena, DeclRef, EnumDef, FunctionTypeName,
    SourceUnit, StringInterner, StructDef, StructId, TypeName, VariableDecl,
};
use sol_lexer_core::{ElementaryToken, ElementaryTypeName};

use crate::{ArrayKind, Idx, RegistryFault, Signedness, Tag, TypeData, TypeRegistry};

fn parse(text: &str) -> ElementaryTypeName {
    match ElementaryTypeName::parse(text) {
        Some(name) => name,
        None => panic!("`{text}` is not an elementary type name"),
    }
}

fn elementary(text: &str) -> TypeName {
    TypeName::elementary(parse(text))
}

#[test]
fn elementary_names_resolve_to_canonical_types() {
    let mut reg = TypeRegistry::new();
    let uint256 = reg.from_elementary_type_name(&parse("uint256"));
    assert_eq!(uint256, reg.integer_type(256, Signedness::Unsigned));
    assert_eq!(reg.from_elementary_type_name(&parse("uint")), Idx::UINT256);
    assert_eq!(reg.from_elementary_type_name(&parse("int")), Idx::INT256);
    assert_eq!(reg.from_elementary_type_name(&parse("int24")), reg.int_type(24));
    assert_eq!(reg.from_elementary_type_name(&parse("byte")), Idx::BYTE);
    assert_eq!(reg.from_elementary_type_name(&parse("bytes7")), reg.fixed_bytes_type(7));
    assert_eq!(reg.from_elementary_type_name(&parse("address")), Idx::ADDRESS);
    assert_eq!(reg.from_elementary_type_name(&parse("bool")), Idx::BOOL);
    assert_eq!(reg.from_elementary_type_name(&parse("bytes")), Idx::BYTES_STORAGE);
    assert_eq!(reg.from_elementary_type_name(&parse("string")), Idx::STRING_STORAGE);
}

#[test]
fn elementary_fixed_point_names() {
    let mut reg = TypeRegistry::new();
    let fixed = reg.from_elementary_type_name(&parse("fixed"));
    assert_eq!(fixed, reg.fixed_type(128, 18));
    let ufixed = reg.from_elementary_type_name(&parse("ufixed"));
    assert_eq!(ufixed, reg.ufixed_type(128, 18));
    let explicit = reg.from_elementary_type_name(&parse("ufixed64x10"));
    assert_eq!(explicit, reg.ufixed_type(64, 10));
    assert_ne!(explicit, reg.fixed_type(64, 10));
}

#[test]
fn var_is_not_an_elementary_type() {
    let mut reg = TypeRegistry::new();
    let var = parse("var");
    assert_eq!(var.token(), ElementaryToken::Var);
    assert_eq!(
        reg.try_from_elementary_type_name(&var),
        Err(RegistryFault::NotElementaryTypeName { name: var })
    );
}

#[test]
#[should_panic(expected = "not an elementary type name")]
fn var_faults() {
    let mut reg = TypeRegistry::new();
    let _ = reg.from_elementary_type_name(&parse("var"));
}

#[test]
fn resolve_elementary_references_by_location() {
    let decls = DeclArena::new();
    let mut reg = TypeRegistry::new();
    let string = elementary("string");
    assert_eq!(
        reg.resolve_type_name(&decls, &string, DataLocation::Memory),
        Idx::STRING_MEMORY
    );
    assert_eq!(
        reg.resolve_type_name(&decls, &string, DataLocation::Storage),
        Idx::STRING_STORAGE
    );
    let calldata = reg.resolve_type_name(&decls, &elementary("bytes"), DataLocation::CallData);
    assert_eq!(reg.reference_location(calldata), Some((DataLocation::CallData, true)));

    let payable = TypeName::Elementary {
        name: parse("address"),
        payable: true,
    };
    assert_eq!(
        reg.resolve_type_name(&decls, &payable, DataLocation::Memory),
        Idx::PAYABLE_ADDRESS
    );
}

#[test]
fn resolve_user_defined_names() {
    let interner = StringInterner::new();
    let mut decls = DeclArena::new();
    let unit = decls.alloc_source_unit(SourceUnit {
        path: interner.intern("token.sol"),
    });
    let token = decls.alloc_contract(ContractDef {
        name: interner.intern("Token"),
        kind: ContractKind::Contract,
    });
    let color = decls.alloc_enum(EnumDef {
        name: interner.intern("Color"),
    });
    let point = decls.alloc_struct_with_members(
        interner.intern("Point"),
        [(interner.intern("x"), elementary("int256"))],
    );

    let mut reg = TypeRegistry::new();
    let contract = reg.resolve_type_name(
        &decls,
        &TypeName::UserDefined(DeclRef::Contract(token)),
        DataLocation::Memory,
    );
    assert_eq!(contract, reg.contract_type(token, false));
    let e = reg.resolve_type_name(
        &decls,
        &TypeName::UserDefined(DeclRef::Enum(color)),
        DataLocation::Memory,
    );
    assert_eq!(e, reg.enum_type(color));
    let s = reg.resolve_type_name(
        &decls,
        &TypeName::UserDefined(DeclRef::Struct(point)),
        DataLocation::Memory,
    );
    assert_eq!(s, reg.struct_type(point, DataLocation::Memory));

    assert_eq!(
        reg.try_resolve_type_name(
            &decls,
            &TypeName::UserDefined(DeclRef::SourceUnit(unit)),
            DataLocation::Memory
        ),
        Err(RegistryFault::WrongDeclarationKind)
    );
}

#[test]
fn resolve_arrays_mappings_and_functions() {
    let decls = DeclArena::new();
    let mut reg = TypeRegistry::new();

    let matrix = TypeName::fixed_array(TypeName::dynamic_array(elementary("uint8")), U256::new(3));
    let ty = reg.resolve_type_name(&decls, &matrix, DataLocation::Memory);
    let Some(ArrayKind::Element {
        base,
        length: Some(length),
    }) = reg.array_data(ty).map(|array| array.kind)
    else {
        panic!("expected a fixed-size array");
    };
    assert_eq!(length, U256::new(3));
    assert_eq!(reg.reference_location(base), Some((DataLocation::Memory, true)));

    let mapping = TypeName::mapping(elementary("string"), elementary("bytes"));
    let m = reg.resolve_type_name(&decls, &mapping, DataLocation::Memory);
    let TypeData::Mapping { key, value } = *reg.data(m) else {
        panic!("expected a mapping");
    };
    assert_eq!(reg.reference_location(key), Some((DataLocation::Memory, false)));
    assert_eq!(reg.reference_location(value), Some((DataLocation::Storage, false)));
    assert_eq!(reg.resolve_type_name(&decls, &mapping, DataLocation::Storage), m);

    let function = TypeName::Function(FunctionTypeName::default());
    let f = reg.resolve_type_name(&decls, &function, DataLocation::Storage);
    assert_eq!(reg.tag(f), Tag::Function);
}

#[test]
fn mapping_components_are_references() {
    let decls = DeclArena::new();
    let mut reg = TypeRegistry::new();

    let name = TypeName::mapping(
        elementary("string"),
        TypeName::dynamic_array(elementary("uint256")),
    );
    let m = reg.resolve_type_name(&decls, &name, DataLocation::Storage);
    let TypeData::Mapping { key, value } = *reg.data(m) else {
        panic!("expected a mapping");
    };
    assert_eq!(reg.reference_location(key), Some((DataLocation::Memory, false)));
    assert_eq!(reg.reference_location(value), Some((DataLocation::Storage, false)));
    assert_eq!(reg.format_type(m), "mapping(string => uint256[])");

    let string_ref = reg.with_location(Idx::STRING_STORAGE, DataLocation::Memory, false);
    let values = reg.array_type(DataLocation::Storage, Idx::UINT256);
    let values_ref = reg.with_location(values, DataLocation::Storage, false);
    assert_eq!(reg.mapping_type(string_ref, values_ref), m);
    assert_eq!(reg.format_type(value), "uint256[] storage ref");
}

#[test]
fn struct_members_end_to_end() {
    let interner = StringInterner::new();
    let mut decls = DeclArena::new();
    let s = decls.alloc_struct_with_members(
        interner.intern("S"),
        [(interner.intern("value"), elementary("uint256"))],
    );

    let mut reg = TypeRegistry::new();
    let a = reg.struct_type(s, DataLocation::Storage);
    let b = reg.struct_type(s, DataLocation::Storage);
    let c = reg.struct_type(s, DataLocation::Storage);
    assert_eq!(a, b);
    assert_eq!(b, c);

    let members = reg.struct_members(&decls, a);
    assert_eq!(members, vec![(interner.intern("value"), reg.integer_type(256, Signedness::Unsigned))]);
}

#[test]
fn struct_members_are_memoized_per_declaration_and_location() {
    let interner = StringInterner::new();
    let mut decls = DeclArena::new();
    let s = decls.alloc_struct_with_members(
        interner.intern("S"),
        [(interner.intern("items"), TypeName::dynamic_array(elementary("bool")))],
    );

    let mut reg = TypeRegistry::new();
    let ty = reg.struct_type(s, DataLocation::Storage);
    let first = reg.struct_members(&decls, ty);
    let len = reg.len();
    let second = reg.struct_members(&decls, ty);
    assert_eq!(first, second);
    assert_eq!(reg.len(), len);
    assert_eq!(reg.reference_location(first[0].1), Some((DataLocation::Storage, false)));

    let copy = reg.with_location(ty, DataLocation::Storage, false);
    let len = reg.len();
    assert_eq!(reg.struct_members(&decls, copy), first);
    assert_eq!(reg.len(), len);

    let memory = reg.with_location(ty, DataLocation::Memory, true);
    let in_memory = reg.struct_members(&decls, memory);
    assert_eq!(
        reg.reference_location(in_memory[0].1),
        Some((DataLocation::Memory, false))
    );
}

#[test]
fn state_variable_structs_share_member_lists() {
    let interner = StringInterner::new();
    let mut decls = DeclArena::new();
    let s = decls.alloc_struct_with_members(
        interner.intern("S"),
        [(interner.intern("items"), TypeName::dynamic_array(elementary("bool")))],
    );
    let var = decls.alloc_variable(VariableDecl::state_variable(
        interner.intern("s"),
        TypeName::UserDefined(DeclRef::Struct(s)),
    ));

    let mut reg = TypeRegistry::new();
    let a = reg.variable_type(&decls, var);
    let b = reg.variable_type(&decls, var);
    assert_ne!(a, b);
    let first = reg.struct_members(&decls, a);
    let len = reg.len();
    assert_eq!(reg.struct_members(&decls, b), first);
    assert_eq!(reg.len(), len);
}

#[test]
fn struct_members_outside_storage_skip_mappings() {
    let interner = StringInterner::new();
    let mut decls = DeclArena::new();
    let inner = decls.alloc_struct_with_members(
        interner.intern("Inner"),
        [(
            interner.intern("lookup"),
            TypeName::mapping(elementary("uint256"), elementary("bool")),
        )],
    );
    let outer = decls.alloc_struct_with_members(
        interner.intern("Outer"),
        [
            (interner.intern("id"), elementary("uint64")),
            (
                interner.intern("nested"),
                TypeName::dynamic_array(TypeName::UserDefined(DeclRef::Struct(inner))),
            ),
        ],
    );

    let mut reg = TypeRegistry::new();
    let memory = reg.struct_type(outer, DataLocation::Memory);
    let names: Vec<_> = reg
        .struct_members(&decls, memory)
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    assert_eq!(names, vec![interner.intern("id")]);

    let storage = reg.struct_type(outer, DataLocation::Storage);
    assert_eq!(reg.struct_members(&decls, storage).len(), 2);
}

#[test]
fn recursive_structs_resolve() {
    let interner = StringInterner::new();
    let mut decls = DeclArena::new();
    let node_name = interner.intern("Node");
    // The struct refers to itself through an array, so allocate the member
    // with the id the struct is about to receive.
    let next_struct = StructId::from_raw(0);
    let children = decls.alloc_variable(VariableDecl::new(
        interner.intern("children"),
        TypeName::dynamic_array(TypeName::UserDefined(DeclRef::Struct(next_struct))),
    ));
    let node = decls.alloc_struct(StructDef {
        name: node_name,
        members: vec![children],
    });
    assert_eq!(node, next_struct);

    let mut reg = TypeRegistry::new();
    let memory = reg.struct_type(node, DataLocation::Memory);
    assert_eq!(reg.struct_members(&decls, memory).len(), 1);
}

#[test]
fn struct_members_of_non_struct() {
    let decls = DeclArena::new();
    let mut reg = TypeRegistry::new();
    assert_eq!(
        reg.try_struct_members(&decls, Idx::BOOL),
        Err(RegistryFault::NotAStructType { found: Tag::Bool })
    );
}

#[test]
fn variable_types_default_their_location() {
    let interner = StringInterner::new();
    let mut decls = DeclArena::new();
    let local = decls.alloc_variable(VariableDecl::new(interner.intern("s"), elementary("string")));
    let state = decls.alloc_variable(VariableDecl::state_variable(
        interner.intern("t"),
        elementary("string"),
    ));
    let calldata = decls.alloc_variable(
        VariableDecl::new(interner.intern("u"), elementary("bytes"))
            .with_location(DataLocation::CallData),
    );

    let mut reg = TypeRegistry::new();
    assert_eq!(reg.variable_type(&decls, local), Idx::STRING_MEMORY);
    let state_ty = reg.variable_type(&decls, state);
    assert_eq!(reg.reference_location(state_ty), Some((DataLocation::Storage, false)));
    let calldata_ty = reg.variable_type(&decls, calldata);
    assert_eq!(reg.reference_location(calldata_ty), Some((DataLocation::CallData, true)));
}

proptest! {
    #[test]
    fn integer_spellings_resolve_to_the_table(step in 1u16..=32, signed in any::<bool>()) {
        let bits = step * 8;
        let text = if signed { format!("int{bits}") } else { format!("uint{bits}") };
        let mut reg = TypeRegistry::new();
        let name = ElementaryTypeName::parse(&text);
        prop_assert!(name.is_some());
        if let Some(name) = name {
            let signedness = if signed { Signedness::Signed } else { Signedness::Unsigned };
            prop_assert_eq!(reg.from_elementary_type_name(&name), reg.integer_type(bits, signedness));
        }
    }
}
