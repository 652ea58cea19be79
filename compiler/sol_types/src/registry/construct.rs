//! Constructors that append on every call.
//!
//! None of these consult a cache: two calls with the same arguments yield
//! two distinct handles that are [`TypeRegistry::equals`] but not `==`.

use ethnum::U256;
use sol_ir::{DataLocation, ModifierId, SourceUnitId};

use crate::error::fault;
use crate::{
    ArrayData, ArrayKind, Idx, MagicKind, Rational, RegistryFault, Tag, TypeData, TypeRegistry,
};

impl TypeRegistry {
    // === Tuples ===

    /// `tuple(members...)`. The empty list returns the empty-tuple sentinel.
    pub fn tuple_type(&mut self, members: &[Idx]) -> Idx {
        if members.is_empty() {
            return Idx::EMPTY_TUPLE;
        }
        self.alloc(TypeData::Tuple {
            components: members.iter().copied().map(Some).collect(),
        })
    }

    /// A tuple whose components may be absent, as in `(, x) = f()`.
    pub fn tuple_type_with_gaps(&mut self, components: Vec<Option<Idx>>) -> Idx {
        if components.is_empty() {
            return Idx::EMPTY_TUPLE;
        }
        self.alloc(TypeData::Tuple {
            components: components.into_boxed_slice(),
        })
    }

    // === Arrays ===

    /// `bytes` or `string` at a location, as a pointer.
    pub fn array_type_bytes(&mut self, location: DataLocation, is_string: bool) -> Idx {
        let kind = if is_string {
            ArrayKind::String
        } else {
            ArrayKind::Bytes
        };
        self.alloc_array(location, kind)
    }

    /// `base[]` at a location, as a pointer.
    pub fn array_type(&mut self, location: DataLocation, base: Idx) -> Idx {
        self.alloc_array(location, ArrayKind::Element { base, length: None })
    }

    /// `base[length]` at a location, as a pointer.
    pub fn array_type_fixed(&mut self, location: DataLocation, base: Idx, length: U256) -> Idx {
        self.alloc_array(
            location,
            ArrayKind::Element {
                base,
                length: Some(length),
            },
        )
    }

    fn alloc_array(&mut self, location: DataLocation, kind: ArrayKind) -> Idx {
        self.alloc(TypeData::Array(ArrayData {
            location,
            is_pointer: true,
            kind,
        }))
    }

    // === Relocation ===

    /// A copy of reference type `ty` at another location.
    ///
    /// Returns `ty` itself when it already has `(location, is_pointer)`.
    /// Otherwise appends a copy: arrays relocate their element type with
    /// [`TypeRegistry::with_location_if_reference`], structs keep their
    /// declaration. The copy is never reused by a later call.
    pub fn try_with_location(
        &mut self,
        ty: Idx,
        location: DataLocation,
        is_pointer: bool,
    ) -> Result<Idx, RegistryFault> {
        let relocated = match *self.data(ty) {
            TypeData::Array(array) => {
                if array.location == location && array.is_pointer == is_pointer {
                    return Ok(ty);
                }
                let kind = match array.kind {
                    ArrayKind::Element { base, length } => ArrayKind::Element {
                        base: self.try_with_location_if_reference(location, base)?,
                        length,
                    },
                    kind => kind,
                };
                TypeData::Array(ArrayData {
                    location,
                    is_pointer,
                    kind,
                })
            }
            TypeData::Struct {
                decl,
                location: current,
                is_pointer: current_pointer,
            } => {
                if current == location && current_pointer == is_pointer {
                    return Ok(ty);
                }
                TypeData::Struct {
                    decl,
                    location,
                    is_pointer,
                }
            }
            _ => {
                return Err(RegistryFault::NotAReferenceType {
                    found: self.tag(ty),
                })
            }
        };
        self.try_alloc(relocated)
    }

    /// [`TypeRegistry::try_with_location`], faulting on a non-reference type.
    #[track_caller]
    pub fn with_location(&mut self, ty: Idx, location: DataLocation, is_pointer: bool) -> Idx {
        self.try_with_location(ty, location, is_pointer)
            .unwrap_or_else(|f| fault(f))
    }

    /// Relocate `ty` as a non-pointer if it is a reference type; return it
    /// unchanged otherwise.
    pub fn try_with_location_if_reference(
        &mut self,
        location: DataLocation,
        ty: Idx,
    ) -> Result<Idx, RegistryFault> {
        if self.tag(ty).is_reference() {
            self.try_with_location(ty, location, false)
        } else {
            Ok(ty)
        }
    }

    #[track_caller]
    pub fn with_location_if_reference(&mut self, location: DataLocation, ty: Idx) -> Idx {
        self.try_with_location_if_reference(location, ty)
            .unwrap_or_else(|f| fault(f))
    }

    // === Others ===

    /// The type of a number literal.
    ///
    /// `compatible_bytes` is the fixed-bytes type a hex literal of matching
    /// width converts to.
    pub fn rational_number_type(&mut self, value: Rational, compatible_bytes: Option<Idx>) -> Idx {
        self.alloc(TypeData::RationalNumber {
            value,
            compatible_bytes,
        })
    }

    /// The type of an imported source unit.
    pub fn module_type(&mut self, source: SourceUnitId) -> Idx {
        self.alloc(TypeData::Module { source })
    }

    /// The type of a modifier name.
    pub fn modifier_type(&mut self, decl: ModifierId) -> Idx {
        self.alloc(TypeData::Modifier { decl })
    }

    /// `type(C)` for a contract type `C`.
    pub fn try_meta_type(&mut self, contract: Idx) -> Result<Idx, RegistryFault> {
        match self.tag(contract) {
            Tag::Contract => self.try_alloc(TypeData::Magic(MagicKind::MetaType(contract))),
            found => Err(RegistryFault::MetaTypeOfNonContract { found }),
        }
    }

    #[track_caller]
    pub fn meta_type(&mut self, contract: Idx) -> Idx {
        self.try_meta_type(contract).unwrap_or_else(|f| fault(f))
    }
}

#[cfg(test)]
mod tests;
