//! Primitive table lookups.
//!
//! Everything here is index arithmetic over the fixed slots laid out by
//! `TypeRegistry::new`; nothing is ever appended.

use sol_ir::StateMutability;

use crate::error::fault;
use crate::{Idx, MagicKind, RegistryFault, Signedness, TypeRegistry};

impl TypeRegistry {
    // === Integers ===

    /// `intN` / `uintN`.
    ///
    /// `bits` must be a multiple of 8 in `8..=256`.
    pub fn try_integer_type(&self, bits: u16, signedness: Signedness) -> Result<Idx, RegistryFault> {
        if bits % 8 != 0 || !(8..=256).contains(&bits) {
            return Err(RegistryFault::InvalidIntegerWidth { bits });
        }
        let first = match signedness {
            Signedness::Signed => Idx::INT_FIRST,
            Signedness::Unsigned => Idx::UINT_FIRST,
        };
        Ok(Idx::from_raw(first + u32::from(bits / 8) - 1))
    }

    /// `intN` / `uintN`, faulting on an invalid width.
    #[track_caller]
    pub fn integer_type(&self, bits: u16, signedness: Signedness) -> Idx {
        self.try_integer_type(bits, signedness)
            .unwrap_or_else(|f| fault(f))
    }

    #[track_caller]
    pub fn int_type(&self, bits: u16) -> Idx {
        self.integer_type(bits, Signedness::Signed)
    }

    #[track_caller]
    pub fn uint_type(&self, bits: u16) -> Idx {
        self.integer_type(bits, Signedness::Unsigned)
    }

    // === Fixed bytes ===

    /// `bytesN` for `N` in `1..=32`.
    pub fn try_fixed_bytes_type(&self, bytes: u16) -> Result<Idx, RegistryFault> {
        if !(1..=32).contains(&bytes) {
            return Err(RegistryFault::InvalidFixedBytesWidth { bytes });
        }
        Ok(Idx::from_raw(Idx::BYTES_M_FIRST + u32::from(bytes) - 1))
    }

    /// `bytesN`, faulting on an invalid width.
    #[track_caller]
    pub fn fixed_bytes_type(&self, bytes: u16) -> Idx {
        self.try_fixed_bytes_type(bytes).unwrap_or_else(|f| fault(f))
    }

    /// `bytes1`.
    #[inline]
    pub fn byte_type(&self) -> Idx {
        Idx::BYTE
    }

    // === Addresses ===

    #[expect(
        clippy::cast_possible_truncation,
        reason = "StateMutability has four variants"
    )]
    pub fn address_type_with(&self, mutability: StateMutability) -> Idx {
        Idx::from_raw(Idx::ADDRESS_FIRST + mutability.index() as u32)
    }

    #[inline]
    pub fn address_type(&self) -> Idx {
        Idx::ADDRESS
    }

    #[inline]
    pub fn payable_address_type(&self) -> Idx {
        Idx::PAYABLE_ADDRESS
    }

    // === Singletons ===

    #[inline]
    pub fn bool_type(&self) -> Idx {
        Idx::BOOL
    }

    /// `bytes storage pointer`.
    #[inline]
    pub fn bytes_type(&self) -> Idx {
        Idx::BYTES_STORAGE
    }

    /// `bytes memory`.
    #[inline]
    pub fn bytes_memory_type(&self) -> Idx {
        Idx::BYTES_MEMORY
    }

    /// `string storage pointer`.
    #[inline]
    pub fn string_type(&self) -> Idx {
        Idx::STRING_STORAGE
    }

    /// `string memory`.
    #[inline]
    pub fn string_memory_type(&self) -> Idx {
        Idx::STRING_MEMORY
    }

    #[inline]
    pub fn inaccessible_dynamic_type(&self) -> Idx {
        Idx::INACCESSIBLE_DYNAMIC
    }

    /// The empty tuple.
    #[inline]
    pub fn empty_tuple_type(&self) -> Idx {
        Idx::EMPTY_TUPLE
    }

    /// The type of an expression whose type could not be determined; the
    /// empty tuple.
    #[inline]
    pub fn error_type(&self) -> Idx {
        Idx::ERROR
    }

    // === Magic ===

    /// `block`, `msg`, `tx` or `abi`.
    ///
    /// Meta types are built by [`TypeRegistry::meta_type`] instead.
    pub fn try_magic_type(&self, kind: MagicKind) -> Result<Idx, RegistryFault> {
        kind.table_index()
            .map(|offset| Idx::from_raw(Idx::MAGIC_FIRST + offset))
            .ok_or(RegistryFault::MetaTypeViaMagic)
    }

    #[track_caller]
    pub fn magic_type(&self, kind: MagicKind) -> Idx {
        self.try_magic_type(kind).unwrap_or_else(|f| fault(f))
    }
}
