//! Type category tag for tag-driven dispatch.
//!
//! Every entry in the registry has exactly one `Tag`. Capability checks
//! ("is this a reference type", "can identity stand in for equality") are
//! matches on the tag, never inspection of the payload.

use std::fmt;

/// Type category discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Tag {
    // === Value types ===
    Bool = 0,
    Integer = 1,
    FixedPoint = 2,
    FixedBytes = 3,
    Address = 4,
    RationalNumber = 5,
    StringLiteral = 6,
    Enum = 7,
    Contract = 8,

    // === Reference types ===
    Array = 16,
    Struct = 17,

    // === Compound and special ===
    Tuple = 32,
    Function = 33,
    Mapping = 34,
    TypeType = 35,
    Module = 36,
    Modifier = 37,
    Magic = 38,
    InaccessibleDynamic = 39,
}

impl Tag {
    /// Check if this category carries a data location.
    ///
    /// Only these categories can be passed to `with_location`.
    #[inline]
    pub const fn is_reference(self) -> bool {
        matches!(self, Self::Array | Self::Struct)
    }

    /// Check if two handles of this category are identical exactly when
    /// their types are structurally equal.
    ///
    /// True for the primitive table and the cached categories. False for
    /// categories the registry constructs fresh on every request (tuples,
    /// functions, arrays, modules, modifiers, rational numbers), for
    /// `Struct`, whose relocated copies are not cached, and for `Magic`,
    /// whose meta-type variant is not cached. Handles of these categories
    /// must be compared with `TypeRegistry::equals`.
    #[inline]
    pub const fn identity_is_structural(self) -> bool {
        matches!(
            self,
            Self::Bool
                | Self::Integer
                | Self::FixedPoint
                | Self::FixedBytes
                | Self::Address
                | Self::StringLiteral
                | Self::Enum
                | Self::Contract
                | Self::Mapping
                | Self::TypeType
                | Self::InaccessibleDynamic
        )
    }

    /// Get the name of this tag as a static string.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::FixedPoint => "fixed_point",
            Self::FixedBytes => "fixed_bytes",
            Self::Address => "address",
            Self::RationalNumber => "rational_number",
            Self::StringLiteral => "string_literal",
            Self::Enum => "enum",
            Self::Contract => "contract",
            Self::Array => "array",
            Self::Struct => "struct",
            Self::Tuple => "tuple",
            Self::Function => "function",
            Self::Mapping => "mapping",
            Self::TypeType => "type_type",
            Self::Module => "module",
            Self::Modifier => "modifier",
            Self::Magic => "magic",
            Self::InaccessibleDynamic => "inaccessible_dynamic",
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag::{}", self.name())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// Compile-time size assertion: Tag must be exactly 1 byte
const _: () = assert!(std::mem::size_of::<Tag>() == 1);

#[cfg(test)]
mod tests;
