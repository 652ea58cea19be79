//! Composite cache: memoized construction of keyed categories.
//!
//! Every constructor here follows the same steps: compute the key, look it
//! up, return the stored handle on a hit, otherwise append and record. Two
//! requests with equal keys therefore always return the same `Idx`.

use sol_ir::{ContractId, DataLocation, EnumId, StructId};

use crate::{Idx, Signedness, TypeData, TypeRegistry};

/// `fixed` / `ufixed` without explicit suffixes.
const DEFAULT_FIXED_BITS: u16 = 128;
const DEFAULT_FIXED_DIGITS: u16 = 18;

impl TypeRegistry {
    // === Fixed point ===

    /// `fixedMxN`, keyed by `(M, N)`.
    pub fn fixed_type(&mut self, total_bits: u16, fractional_digits: u16) -> Idx {
        self.fixed_point_type(total_bits, fractional_digits, Signedness::Signed)
    }

    /// `ufixedMxN`, keyed by `(M, N)` in a store separate from `fixed`.
    pub fn ufixed_type(&mut self, total_bits: u16, fractional_digits: u16) -> Idx {
        self.fixed_point_type(total_bits, fractional_digits, Signedness::Unsigned)
    }

    /// `fixed128x18`.
    pub fn fixed_type_default(&mut self) -> Idx {
        self.fixed_type(DEFAULT_FIXED_BITS, DEFAULT_FIXED_DIGITS)
    }

    /// `ufixed128x18`.
    pub fn ufixed_type_default(&mut self) -> Idx {
        self.ufixed_type(DEFAULT_FIXED_BITS, DEFAULT_FIXED_DIGITS)
    }

    pub fn fixed_point_type(
        &mut self,
        total_bits: u16,
        fractional_digits: u16,
        signedness: Signedness,
    ) -> Idx {
        let key = (total_bits, fractional_digits);
        let store = match signedness {
            Signedness::Signed => &self.cache.fixed,
            Signedness::Unsigned => &self.cache.ufixed,
        };
        if let Some(&idx) = store.get(&key) {
            tracing::trace!(%idx, "fixed point cache hit");
            return idx;
        }

        let idx = self.alloc(TypeData::FixedPoint {
            total_bits,
            fractional_digits,
            signedness,
        });
        let store = match signedness {
            Signedness::Signed => &mut self.cache.fixed,
            Signedness::Unsigned => &mut self.cache.ufixed,
        };
        store.insert(key, idx);
        idx
    }

    // === String literals ===

    /// The type of a string literal, keyed by its bytes.
    pub fn string_literal_type(&mut self, value: &[u8]) -> Idx {
        if let Some(&idx) = self.cache.string_literals.get(value) {
            tracing::trace!(%idx, "string literal cache hit");
            return idx;
        }
        let value: Box<[u8]> = value.into();
        let idx = self.alloc(TypeData::StringLiteral {
            value: value.clone(),
        });
        self.cache.string_literals.insert(value, idx);
        idx
    }

    // === Declarations ===

    /// A struct at a data location, keyed by `(declaration, location)`.
    ///
    /// The canonical instance is a pointer. Non-pointer copies come from
    /// [`TypeRegistry::with_location`] and are not cached.
    pub fn struct_type(&mut self, decl: StructId, location: DataLocation) -> Idx {
        let hit = self.cache.structs.iter().copied().find(|&idx| {
            matches!(
                *self.data(idx),
                TypeData::Struct { decl: d, location: l, .. } if d == decl && l == location
            )
        });
        if let Some(idx) = hit {
            return idx;
        }
        let idx = self.alloc(TypeData::Struct {
            decl,
            location,
            is_pointer: true,
        });
        self.cache.structs.push(idx);
        idx
    }

    /// An enum, keyed by its declaration.
    pub fn enum_type(&mut self, decl: EnumId) -> Idx {
        let hit = self
            .cache
            .enums
            .iter()
            .copied()
            .find(|&idx| matches!(*self.data(idx), TypeData::Enum { decl: d } if d == decl));
        if let Some(idx) = hit {
            return idx;
        }
        let idx = self.alloc(TypeData::Enum { decl });
        self.cache.enums.push(idx);
        idx
    }

    /// A contract, keyed by `(declaration, is_super)`.
    ///
    /// `is_super` is the type of `super` inside the contract.
    pub fn contract_type(&mut self, decl: ContractId, is_super: bool) -> Idx {
        let hit = self.cache.contracts.iter().copied().find(|&idx| {
            matches!(
                *self.data(idx),
                TypeData::Contract { decl: d, is_super: s } if d == decl && s == is_super
            )
        });
        if let Some(idx) = hit {
            return idx;
        }
        let idx = self.alloc(TypeData::Contract { decl, is_super });
        self.cache.contracts.push(idx);
        idx
    }

    // === Structurally keyed ===

    /// The type of a type name used as an expression.
    ///
    /// Keyed by structural equality of `actual`, so two structurally equal
    /// but distinct handles (say, two `tuple(uint256)`) share one entry.
    pub fn type_type(&mut self, actual: Idx) -> Idx {
        let hit = self.cache.type_types.iter().copied().find(|&idx| {
            matches!(*self.data(idx), TypeData::TypeType { actual: a } if self.equals(a, actual))
        });
        if let Some(idx) = hit {
            tracing::trace!(%idx, "type type cache hit");
            return idx;
        }
        let idx = self.alloc(TypeData::TypeType { actual });
        self.cache.type_types.push(idx);
        idx
    }

    /// `mapping(key => value)`, keyed by structural equality of both sides.
    pub fn mapping_type(&mut self, key: Idx, value: Idx) -> Idx {
        let hit = self.cache.mappings.iter().copied().find(|&idx| {
            matches!(
                *self.data(idx),
                TypeData::Mapping { key: k, value: v } if self.equals(k, key) && self.equals(v, value)
            )
        });
        if let Some(idx) = hit {
            tracing::trace!(%idx, "mapping cache hit");
            return idx;
        }
        let idx = self.alloc(TypeData::Mapping { key, value });
        self.cache.mappings.push(idx);
        idx
    }
}
