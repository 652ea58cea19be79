//! Type names as written in source.
//!
//! These are the unresolved annotations on declarations. The type registry
//! turns them into canonical types.

use ethnum::U256;
use sol_lexer_core::ElementaryTypeName;

use crate::{DeclRef, StateMutability, Visibility};

/// A type name in a declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeName {
    /// A built-in name such as `uint256` or `string`.
    ///
    /// `payable` is only meaningful on `address`.
    Elementary {
        name: ElementaryTypeName,
        payable: bool,
    },
    /// A reference to a struct, enum or contract declaration.
    UserDefined(DeclRef),
    /// `T[]` (`length: None`) or `T[n]`.
    Array {
        base: Box<TypeName>,
        length: Option<U256>,
    },
    /// `mapping(K => V)`.
    Mapping {
        key: Box<TypeName>,
        value: Box<TypeName>,
    },
    /// `function (...) ... returns (...)`.
    Function(FunctionTypeName),
}

impl TypeName {
    /// An elementary type name.
    pub fn elementary(name: ElementaryTypeName) -> Self {
        TypeName::Elementary {
            name,
            payable: false,
        }
    }

    /// `T[]`.
    pub fn dynamic_array(base: TypeName) -> Self {
        TypeName::Array {
            base: Box::new(base),
            length: None,
        }
    }

    /// `T[length]`.
    pub fn fixed_array(base: TypeName, length: U256) -> Self {
        TypeName::Array {
            base: Box::new(base),
            length: Some(length),
        }
    }

    /// `mapping(key => value)`.
    pub fn mapping(key: TypeName, value: TypeName) -> Self {
        TypeName::Mapping {
            key: Box::new(key),
            value: Box::new(value),
        }
    }
}

/// A function type name: `function (uint) external view returns (bool)`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FunctionTypeName {
    pub parameters: Vec<TypeName>,
    pub returns: Vec<TypeName>,
    pub visibility: Visibility,
    pub mutability: StateMutability,
}
