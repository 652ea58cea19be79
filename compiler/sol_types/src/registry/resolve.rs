//! Resolution of source-level type names to registry types.

use rustc_hash::FxHashSet;
use sol_ir::{DataLocation, DeclArena, DeclRef, Name, StructId, TypeName, VariableId};
use sol_lexer_core::{ElementaryToken, ElementaryTypeName};

use crate::error::fault;
use crate::{Idx, RegistryFault, Signedness, TypeData, TypeRegistry};

impl TypeRegistry {
    /// The type named by an elementary type token.
    ///
    /// Bare `int`/`uint` are 256 bits wide, bare `fixed`/`ufixed` are
    /// `128x18`. `bytes` and `string` resolve to their storage singletons.
    pub fn try_from_elementary_type_name(
        &mut self,
        name: &ElementaryTypeName,
    ) -> Result<Idx, RegistryFault> {
        let m = name.first_number();
        let n = name.second_number();
        match name.token() {
            ElementaryToken::IntM => self.try_integer_type(m, Signedness::Signed),
            ElementaryToken::UIntM => self.try_integer_type(m, Signedness::Unsigned),
            ElementaryToken::Int => Ok(Idx::INT256),
            ElementaryToken::UInt => Ok(Idx::UINT256),
            ElementaryToken::Byte => Ok(Idx::BYTE),
            ElementaryToken::BytesM => self.try_fixed_bytes_type(m),
            ElementaryToken::FixedMxN => Ok(self.fixed_type(m, n)),
            ElementaryToken::UFixedMxN => Ok(self.ufixed_type(m, n)),
            ElementaryToken::Fixed => Ok(self.fixed_type_default()),
            ElementaryToken::UFixed => Ok(self.ufixed_type_default()),
            ElementaryToken::Address => Ok(Idx::ADDRESS),
            ElementaryToken::Bool => Ok(Idx::BOOL),
            ElementaryToken::Bytes => Ok(Idx::BYTES_STORAGE),
            ElementaryToken::String => Ok(Idx::STRING_STORAGE),
            ElementaryToken::Var => Err(RegistryFault::NotElementaryTypeName { name: *name }),
        }
    }

    #[track_caller]
    pub fn from_elementary_type_name(&mut self, name: &ElementaryTypeName) -> Idx {
        self.try_from_elementary_type_name(name)
            .unwrap_or_else(|f| fault(f))
    }

    /// An elementary reference type (`bytes`, `string`) as a pointer at a
    /// location, reusing the storage and memory singletons.
    pub(super) fn try_elementary_at(
        &mut self,
        ty: Idx,
        location: DataLocation,
    ) -> Result<Idx, RegistryFault> {
        match (ty, location) {
            (Idx::BYTES_STORAGE, DataLocation::Memory) => Ok(Idx::BYTES_MEMORY),
            (Idx::STRING_STORAGE, DataLocation::Memory) => Ok(Idx::STRING_MEMORY),
            _ => self.try_with_location(ty, location, true),
        }
    }

    /// Resolve a type name as written on a declaration at `location`.
    ///
    /// Reference types come out as pointers at `location`; array elements
    /// resolve at the same location. Mapping keys become memory references
    /// and values storage references (not pointers), whatever `location`
    /// says.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn try_resolve_type_name(
        &mut self,
        decls: &DeclArena,
        type_name: &TypeName,
        location: DataLocation,
    ) -> Result<Idx, RegistryFault> {
        match type_name {
            TypeName::Elementary { name, payable } => {
                let ty = self.try_from_elementary_type_name(name)?;
                if *payable && ty == Idx::ADDRESS {
                    Ok(Idx::PAYABLE_ADDRESS)
                } else if self.tag(ty).is_reference() {
                    self.try_elementary_at(ty, location)
                } else {
                    Ok(ty)
                }
            }
            TypeName::UserDefined(decl) => match *decl {
                DeclRef::Struct(id) => Ok(self.struct_type(id, location)),
                DeclRef::Enum(id) => Ok(self.enum_type(id)),
                DeclRef::Contract(id) => Ok(self.contract_type(id, false)),
                _ => Err(RegistryFault::WrongDeclarationKind),
            },
            TypeName::Array { base, length } => {
                let base = self.try_resolve_type_name(decls, base, location)?;
                Ok(match *length {
                    Some(length) => self.array_type_fixed(location, base, length),
                    None => self.array_type(location, base),
                })
            }
            TypeName::Mapping { key, value } => {
                let key = self.try_resolve_type_name(decls, key, DataLocation::Memory)?;
                let key = self.try_with_location_if_reference(DataLocation::Memory, key)?;
                let value = self.try_resolve_type_name(decls, value, DataLocation::Storage)?;
                let value = self.try_with_location_if_reference(DataLocation::Storage, value)?;
                Ok(self.mapping_type(key, value))
            }
            TypeName::Function(function) => self.try_function_type_from_type_name(decls, function),
        }
    }

    #[track_caller]
    pub fn resolve_type_name(
        &mut self,
        decls: &DeclArena,
        type_name: &TypeName,
        location: DataLocation,
    ) -> Idx {
        self.try_resolve_type_name(decls, type_name, location)
            .unwrap_or_else(|f| fault(f))
    }

    /// The declared type of a variable.
    ///
    /// Without an explicit location, state variables live in storage and
    /// everything else in memory. A state variable of reference type is a
    /// storage reference, not a pointer.
    pub fn try_variable_type(
        &mut self,
        decls: &DeclArena,
        variable: VariableId,
    ) -> Result<Idx, RegistryFault> {
        let decl = decls.variable(variable);
        let location = decl.location.unwrap_or(if decl.is_state_variable {
            DataLocation::Storage
        } else {
            DataLocation::Memory
        });
        let ty = self.try_resolve_type_name(decls, &decl.type_name, location)?;
        if decl.is_state_variable {
            self.try_with_location_if_reference(location, ty)
        } else {
            Ok(ty)
        }
    }

    #[track_caller]
    pub fn variable_type(&mut self, decls: &DeclArena, variable: VariableId) -> Idx {
        self.try_variable_type(decls, variable)
            .unwrap_or_else(|f| fault(f))
    }

    /// Names and types of the members of a struct type.
    ///
    /// Members resolve at the struct's own location, reference members as
    /// references (not pointers) into it. Outside storage, members that
    /// contain a mapping are left out. The list is computed once per
    /// declaration and location, so relocated copies of a struct type share
    /// it.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn try_struct_members(
        &mut self,
        decls: &DeclArena,
        struct_ty: Idx,
    ) -> Result<Vec<(Name, Idx)>, RegistryFault> {
        let TypeData::Struct { decl, location, .. } = *self.data(struct_ty) else {
            return Err(RegistryFault::NotAStructType {
                found: self.tag(struct_ty),
            });
        };
        if let Some(members) = self.member_lists.get(&(decl, location)) {
            return Ok(members.to_vec());
        }

        let mut members = Vec::new();
        for &member in &decls.struct_def(decl).members {
            let var = decls.variable(member);
            if location != DataLocation::Storage
                && contains_mapping(decls, &var.type_name, &mut FxHashSet::default())
            {
                continue;
            }
            let ty = self.try_resolve_type_name(decls, &var.type_name, location)?;
            let ty = self.try_with_location_if_reference(location, ty)?;
            members.push((var.name, ty));
        }

        self.member_lists
            .insert((decl, location), members.clone().into_boxed_slice());
        Ok(members)
    }

    #[track_caller]
    pub fn struct_members(&mut self, decls: &DeclArena, struct_ty: Idx) -> Vec<(Name, Idx)> {
        self.try_struct_members(decls, struct_ty)
            .unwrap_or_else(|f| fault(f))
    }
}

/// Check if a type name is or contains a mapping, looking through arrays
/// and struct members. `visiting` guards against recursive structs.
fn contains_mapping(
    decls: &DeclArena,
    type_name: &TypeName,
    visiting: &mut FxHashSet<StructId>,
) -> bool {
    match type_name {
        TypeName::Mapping { .. } => true,
        TypeName::Array { base, .. } => contains_mapping(decls, base, visiting),
        TypeName::UserDefined(DeclRef::Struct(id)) => {
            if !visiting.insert(*id) {
                return false;
            }
            let found = decls
                .struct_def(*id)
                .members
                .iter()
                .any(|&member| contains_mapping(decls, &decls.variable(member).type_name, visiting));
            visiting.remove(id);
            found
        }
        TypeName::Elementary { .. } | TypeName::UserDefined(_) | TypeName::Function(_) => false,
    }
}

#[cfg(test)]
mod tests;
