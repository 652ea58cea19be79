//! Sol IR - declaration layer types
//!
//! This crate contains the declaration data the type registry keys on:
//! - Names for interned identifiers
//! - The declaration arena (`DeclArena`) with typed, stable ids
//! - Data locations, state mutability and visibility
//! - AST type names as written in source
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → Name(u32)
//! - **Flatten Everything**: declarations live in an arena and refer to each
//!   other through `StructId(u32)`, `VariableId(u32)`, ... indices
//! - **Stable identity**: an id stays valid for the whole session; the arena
//!   only grows

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod decl;
mod interner;
mod location;
mod name;
mod type_name;

pub use decl::{
    ContractDef, ContractId, ContractKind, DeclArena, DeclRef, EnumDef, EnumId, EventDef, EventId,
    FunctionDef, FunctionId, ModifierDef, ModifierId, SourceUnit, SourceUnitId, StructDef,
    StructId, VariableDecl, VariableId,
};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use location::{DataLocation, StateMutability, Visibility};
pub use name::Name;
pub use type_name::{FunctionTypeName, TypeName};

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{DeclRef, Name};
    static_assert_size!(Name, 4);
    static_assert_size!(DeclRef, 8);
}
