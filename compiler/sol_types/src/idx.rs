//! Type handle.
//!
//! `Idx` is the handle every consumer holds. All types live in the registry
//! arena and are referenced by their 32-bit index.
//!
//! # Layout
//!
//! The primitive table occupies the first [`Idx::FIRST_DYNAMIC`] slots at
//! fixed positions, so primitive lookup is index arithmetic:
//!
//! | Range | Contents |
//! |---|---|
//! | 0-6 | bool, inaccessible dynamic, empty tuple, bytes/string storage and memory |
//! | 7-10 | address by mutability (pure, view, nonpayable, payable) |
//! | 11-14 | magic: block, msg, tx, abi |
//! | 15-46 | `int8` .. `int256` |
//! | 47-78 | `uint8` .. `uint256` |
//! | 79-110 | `bytes1` .. `bytes32` |
//!
//! Everything from [`Idx::FIRST_DYNAMIC`] on is appended on demand.

use std::fmt;

/// A 32-bit index into the type registry.
///
/// Index equality is identity equality. For the categories the registry
/// canonicalizes it coincides with structural equality; for the others use
/// [`TypeRegistry::equals`](crate::TypeRegistry::equals).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Singletons (0-6) ===

    /// `bool`.
    pub const BOOL: Self = Self(0);
    /// Sentinel for dynamic types that cannot be represented.
    pub const INACCESSIBLE_DYNAMIC: Self = Self(1);
    /// The empty tuple `()`.
    pub const EMPTY_TUPLE: Self = Self(2);
    /// Returned when an expression's type could not be determined.
    pub const ERROR: Self = Self::EMPTY_TUPLE;
    /// `bytes storage pointer`.
    pub const BYTES_STORAGE: Self = Self(3);
    /// `bytes memory`.
    pub const BYTES_MEMORY: Self = Self(4);
    /// `string storage pointer`.
    pub const STRING_STORAGE: Self = Self(5);
    /// `string memory`.
    pub const STRING_MEMORY: Self = Self(6);

    // === Tables ===

    /// First address variant; indexed by `StateMutability::index()`.
    pub const ADDRESS_FIRST: u32 = 7;
    /// `address` (nonpayable).
    pub const ADDRESS: Self = Self(Self::ADDRESS_FIRST + 2);
    /// `address payable`.
    pub const PAYABLE_ADDRESS: Self = Self(Self::ADDRESS_FIRST + 3);

    /// First environment magic type (block, msg, tx, abi).
    pub const MAGIC_FIRST: u32 = 11;

    /// `int8`; `intN` is at `INT_FIRST + N/8 - 1`.
    pub const INT_FIRST: u32 = 15;
    /// `uint8`; `uintN` is at `UINT_FIRST + N/8 - 1`.
    pub const UINT_FIRST: u32 = 47;
    /// `bytes1`; `bytesN` is at `BYTES_M_FIRST + N - 1`.
    pub const BYTES_M_FIRST: u32 = 79;

    /// Number of widths per integer / fixed-bytes table.
    pub const WIDTH_COUNT: u32 = 32;

    /// `int256`.
    pub const INT256: Self = Self(Self::INT_FIRST + Self::WIDTH_COUNT - 1);
    /// `uint256`.
    pub const UINT256: Self = Self(Self::UINT_FIRST + Self::WIDTH_COUNT - 1);
    /// `bytes1`.
    pub const BYTE: Self = Self(Self::BYTES_M_FIRST);
    /// `bytes32`.
    pub const BYTES32: Self = Self(Self::BYTES_M_FIRST + Self::WIDTH_COUNT - 1);

    /// First index for types appended after construction.
    pub const FIRST_DYNAMIC: u32 = Self::BYTES_M_FIRST + Self::WIDTH_COUNT;

    /// Create an index from a raw u32 value.
    ///
    /// The caller must ensure the index belongs to the registry it is used with.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position in the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is a slot of the primitive table.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.0 < Self::FIRST_DYNAMIC
    }

    /// Check if this is the error type (the empty tuple).
    #[inline]
    pub const fn is_error(self) -> bool {
        self.0 == Self::ERROR.0
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::BOOL => write!(f, "Idx::BOOL"),
            Self::INACCESSIBLE_DYNAMIC => write!(f, "Idx::INACCESSIBLE_DYNAMIC"),
            Self::EMPTY_TUPLE => write!(f, "Idx::EMPTY_TUPLE"),
            Self::BYTES_STORAGE => write!(f, "Idx::BYTES_STORAGE"),
            Self::BYTES_MEMORY => write!(f, "Idx::BYTES_MEMORY"),
            Self::STRING_STORAGE => write!(f, "Idx::STRING_STORAGE"),
            Self::STRING_MEMORY => write!(f, "Idx::STRING_MEMORY"),
            Self::ADDRESS => write!(f, "Idx::ADDRESS"),
            Self::PAYABLE_ADDRESS => write!(f, "Idx::PAYABLE_ADDRESS"),
            Self::UINT256 => write!(f, "Idx::UINT256"),
            Self::INT256 => write!(f, "Idx::INT256"),
            _ => write!(f, "Idx({})", self.0),
        }
    }
}

impl fmt::Display for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type#{}", self.0)
    }
}

// Compile-time size assertion: Idx must be exactly 4 bytes
const _: () = assert!(std::mem::size_of::<Idx>() == 4);
