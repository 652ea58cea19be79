//! Token classification for elementary type names.

use std::fmt;

/// Token class of a built-in type name.
///
/// The `M`/`MxN` variants carry their numeric suffixes separately in
/// [`ElementaryTypeName`](crate::ElementaryTypeName); the bare variants
/// (`Int`, `UInt`, `Fixed`, `UFixed`) stand for the default widths.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum ElementaryToken {
    /// `int`, defaults to 256 bits.
    Int = 0,
    /// `uint`, defaults to 256 bits.
    UInt = 1,
    /// `intM`.
    IntM = 2,
    /// `uintM`.
    UIntM = 3,
    /// `byte`, a single fixed byte.
    Byte = 4,
    /// `bytesM`.
    BytesM = 5,
    /// `fixed`, defaults to 128x18.
    Fixed = 6,
    /// `ufixed`, defaults to 128x18.
    UFixed = 7,
    /// `fixedMxN`.
    FixedMxN = 8,
    /// `ufixedMxN`.
    UFixedMxN = 9,
    /// `address`.
    Address = 10,
    /// `bool`.
    Bool = 11,
    /// `bytes`, the dynamic byte array.
    Bytes = 12,
    /// `string`.
    String = 13,
    /// `var`, the untyped declaration keyword.
    ///
    /// Classified next to the type names by the lexer, but not a type name.
    Var = 14,
}

impl ElementaryToken {
    /// Check if this token names a type.
    #[inline]
    pub const fn is_elementary_type_name(self) -> bool {
        !matches!(self, Self::Var)
    }

    /// Check if this token carries at least one numeric suffix.
    #[inline]
    pub const fn has_suffix(self) -> bool {
        matches!(
            self,
            Self::IntM | Self::UIntM | Self::BytesM | Self::FixedMxN | Self::UFixedMxN
        )
    }

    /// Check if this token carries two numeric suffixes (`MxN`).
    #[inline]
    pub const fn has_two_suffixes(self) -> bool {
        matches!(self, Self::FixedMxN | Self::UFixedMxN)
    }

    /// Source spelling without any suffix.
    #[inline]
    pub const fn base_name(self) -> &'static str {
        match self {
            Self::Int | Self::IntM => "int",
            Self::UInt | Self::UIntM => "uint",
            Self::Byte => "byte",
            Self::BytesM | Self::Bytes => "bytes",
            Self::Fixed | Self::FixedMxN => "fixed",
            Self::UFixed | Self::UFixedMxN => "ufixed",
            Self::Address => "address",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Var => "var",
        }
    }

    /// Classify a keyword without a numeric suffix.
    pub fn from_keyword(text: &str) -> Option<Self> {
        Some(match text {
            "int" => Self::Int,
            "uint" => Self::UInt,
            "byte" => Self::Byte,
            "bytes" => Self::Bytes,
            "fixed" => Self::Fixed,
            "ufixed" => Self::UFixed,
            "address" => Self::Address,
            "bool" => Self::Bool,
            "string" => Self::String,
            "var" => Self::Var,
            _ => return None,
        })
    }
}

impl fmt::Debug for ElementaryToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Int => "Int",
            Self::UInt => "UInt",
            Self::IntM => "IntM",
            Self::UIntM => "UIntM",
            Self::Byte => "Byte",
            Self::BytesM => "BytesM",
            Self::Fixed => "Fixed",
            Self::UFixed => "UFixed",
            Self::FixedMxN => "FixedMxN",
            Self::UFixedMxN => "UFixedMxN",
            Self::Address => "Address",
            Self::Bool => "Bool",
            Self::Bytes => "Bytes",
            Self::String => "String",
            Self::Var => "Var",
        };
        write!(f, "ElementaryToken::{name}")
    }
}

impl fmt::Display for ElementaryToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_name())
    }
}

const _: () = assert!(std::mem::size_of::<ElementaryToken>() == 1);
