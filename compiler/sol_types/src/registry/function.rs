//! Function type construction.
//!
//! Function types are never deduplicated: every shape below appends a new
//! entry, even for identical inputs.

use sol_ir::{
    DataLocation, DeclArena, DeclRef, EventId, FunctionId, FunctionTypeName, Name,
    StateMutability, VariableId, Visibility,
};
use sol_lexer_core::ElementaryTypeName;

use crate::error::fault;
use crate::{
    ArrayKind, FunctionData, FunctionFlags, FunctionKind, Idx, RegistryFault, TypeData,
    TypeRegistry,
};

/// Every attribute of a function type, for [`TypeRegistry::function_type`].
#[derive(Clone, Debug, Default)]
pub struct FunctionTypeSpec {
    pub params: Vec<Idx>,
    pub returns: Vec<Idx>,
    /// Empty, or one name per parameter.
    pub param_names: Vec<Name>,
    /// Empty, or one name per return value.
    pub return_names: Vec<Name>,
    pub kind: FunctionKind,
    pub mutability: StateMutability,
    pub declaration: Option<DeclRef>,
    pub flags: FunctionFlags,
}

impl FunctionTypeSpec {
    /// An internal, nonpayable function with unnamed parameters.
    pub fn new(params: Vec<Idx>, returns: Vec<Idx>) -> Self {
        FunctionTypeSpec {
            params,
            returns,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_names(mut self, param_names: Vec<Name>, return_names: Vec<Name>) -> Self {
        self.param_names = param_names;
        self.return_names = return_names;
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: FunctionKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_mutability(mut self, mutability: StateMutability) -> Self {
        self.mutability = mutability;
        self
    }

    #[must_use]
    pub fn with_declaration(mut self, declaration: DeclRef) -> Self {
        self.declaration = Some(declaration);
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: FunctionFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// One name per type. No names at all means every entry is unnamed.
fn names_for(mut names: Vec<Name>, count: usize) -> Result<Box<[Name]>, RegistryFault> {
    if names.is_empty() {
        names.resize(count, Name::EMPTY);
    } else if names.len() != count {
        return Err(RegistryFault::NameCountMismatch {
            types: count,
            names: names.len(),
        });
    }
    Ok(names.into_boxed_slice())
}

impl TypeRegistry {
    fn try_alloc_function(&mut self, spec: FunctionTypeSpec) -> Result<Idx, RegistryFault> {
        let param_names = names_for(spec.param_names, spec.params.len())?;
        let return_names = names_for(spec.return_names, spec.returns.len())?;
        self.try_alloc(TypeData::Function(Box::new(FunctionData {
            params: spec.params.into_boxed_slice(),
            returns: spec.returns.into_boxed_slice(),
            param_names,
            return_names,
            kind: spec.kind,
            mutability: spec.mutability,
            declaration: spec.declaration,
            flags: spec.flags,
        })))
    }

    /// A function type with every attribute given explicitly.
    ///
    /// Names, when given, must match the parameter and return counts.
    pub fn try_function_type(&mut self, spec: FunctionTypeSpec) -> Result<Idx, RegistryFault> {
        self.try_alloc_function(spec)
    }

    #[track_caller]
    pub fn function_type(&mut self, spec: FunctionTypeSpec) -> Idx {
        self.try_alloc_function(spec).unwrap_or_else(|f| fault(f))
    }

    /// The type of a function definition.
    ///
    /// `is_internal` selects an internal call (jump) over an external one
    /// (message call). Internal calls cannot carry value, so a payable
    /// definition yields a nonpayable internal type.
    pub fn try_function_type_from_definition(
        &mut self,
        decls: &DeclArena,
        function: FunctionId,
        is_internal: bool,
    ) -> Result<Idx, RegistryFault> {
        let def = decls.function(function);
        let (kind, mutability) = match (is_internal, def.mutability) {
            (true, StateMutability::Payable) => {
                (FunctionKind::Internal, StateMutability::NonPayable)
            }
            (true, mutability) => (FunctionKind::Internal, mutability),
            (false, mutability) => (FunctionKind::External, mutability),
        };
        let (params, param_names) = self.try_variable_types(decls, &def.parameters)?;
        let (returns, return_names) = self.try_variable_types(decls, &def.returns)?;
        self.try_alloc_function(FunctionTypeSpec {
            params,
            returns,
            param_names,
            return_names,
            kind,
            mutability,
            declaration: Some(DeclRef::Function(function)),
            flags: FunctionFlags::empty(),
        })
    }

    #[track_caller]
    pub fn function_type_from_definition(
        &mut self,
        decls: &DeclArena,
        function: FunctionId,
        is_internal: bool,
    ) -> Idx {
        self.try_function_type_from_definition(decls, function, is_internal)
            .unwrap_or_else(|f| fault(f))
    }

    /// The type of the getter generated for a public state variable.
    ///
    /// Each mapping along the variable's type adds its key as a parameter,
    /// each non-byte array adds a `uint256` index. The getter returns the
    /// value reached at the end in memory; for a struct, that is its members
    /// except mappings and non-byte arrays.
    pub fn try_function_type_from_state_variable(
        &mut self,
        decls: &DeclArena,
        variable: VariableId,
    ) -> Result<Idx, RegistryFault> {
        let mut params = Vec::new();
        let mut ty = self.try_variable_type(decls, variable)?;
        loop {
            match *self.data(ty) {
                TypeData::Mapping { key, value } => {
                    params.push(key);
                    ty = value;
                }
                TypeData::Array(array) if !array.is_byte_array() => {
                    let ArrayKind::Element { base, .. } = array.kind else {
                        break;
                    };
                    params.push(Idx::UINT256);
                    ty = base;
                }
                _ => break,
            }
        }

        let mut returns = Vec::new();
        let mut return_names = Vec::new();
        if matches!(self.data(ty), TypeData::Struct { .. }) {
            for (name, member) in self.try_struct_members(decls, ty)? {
                let skipped = match self.data(member) {
                    TypeData::Mapping { .. } => true,
                    TypeData::Array(array) => !array.is_byte_array(),
                    _ => false,
                };
                if skipped {
                    continue;
                }
                returns.push(self.try_with_location_if_reference(DataLocation::Memory, member)?);
                return_names.push(name);
            }
        } else {
            returns.push(self.try_with_location_if_reference(DataLocation::Memory, ty)?);
            return_names.push(Name::EMPTY);
        }

        self.try_alloc_function(FunctionTypeSpec {
            params,
            returns,
            param_names: Vec::new(),
            return_names,
            kind: FunctionKind::External,
            mutability: StateMutability::View,
            declaration: Some(DeclRef::Variable(variable)),
            flags: FunctionFlags::empty(),
        })
    }

    #[track_caller]
    pub fn function_type_from_state_variable(
        &mut self,
        decls: &DeclArena,
        variable: VariableId,
    ) -> Idx {
        self.try_function_type_from_state_variable(decls, variable)
            .unwrap_or_else(|f| fault(f))
    }

    /// The type of an event, as used by `emit`.
    pub fn try_function_type_from_event(
        &mut self,
        decls: &DeclArena,
        event: EventId,
    ) -> Result<Idx, RegistryFault> {
        let def = decls.event(event);
        let (params, param_names) = self.try_variable_types(decls, &def.parameters)?;
        self.try_alloc_function(FunctionTypeSpec {
            params,
            param_names,
            kind: FunctionKind::Event,
            declaration: Some(DeclRef::Event(event)),
            ..FunctionTypeSpec::default()
        })
    }

    #[track_caller]
    pub fn function_type_from_event(&mut self, decls: &DeclArena, event: EventId) -> Idx {
        self.try_function_type_from_event(decls, event)
            .unwrap_or_else(|f| fault(f))
    }

    /// The type named by a function type name.
    ///
    /// Parameters and return values live in memory; `external` visibility
    /// makes an external function type, anything else an internal one.
    pub fn try_function_type_from_type_name(
        &mut self,
        decls: &DeclArena,
        type_name: &FunctionTypeName,
    ) -> Result<Idx, RegistryFault> {
        let params = type_name
            .parameters
            .iter()
            .map(|param| self.try_resolve_type_name(decls, param, DataLocation::Memory))
            .collect::<Result<Vec<_>, _>>()?;
        let returns = type_name
            .returns
            .iter()
            .map(|ret| self.try_resolve_type_name(decls, ret, DataLocation::Memory))
            .collect::<Result<Vec<_>, _>>()?;
        let kind = match type_name.visibility {
            Visibility::External => FunctionKind::External,
            Visibility::Private | Visibility::Internal | Visibility::Public => {
                FunctionKind::Internal
            }
        };
        self.try_alloc_function(
            FunctionTypeSpec::new(params, returns)
                .with_kind(kind)
                .with_mutability(type_name.mutability),
        )
    }

    #[track_caller]
    pub fn function_type_from_type_name(
        &mut self,
        decls: &DeclArena,
        type_name: &FunctionTypeName,
    ) -> Idx {
        self.try_function_type_from_type_name(decls, type_name)
            .unwrap_or_else(|f| fault(f))
    }

    /// A function type spelled as strings, for built-in members such as
    /// `abi.decode` or `address.call`.
    ///
    /// Each entry is an elementary type name, optionally followed by a data
    /// location (`"bytes memory"`; references default to storage) or by
    /// `payable` after `address`.
    pub fn try_function_type_from_signature(
        &mut self,
        params: &[&str],
        returns: &[&str],
        kind: FunctionKind,
        arbitrary_parameters: bool,
        mutability: StateMutability,
    ) -> Result<Idx, RegistryFault> {
        let params = params
            .iter()
            .map(|text| self.try_signature_type(text))
            .collect::<Result<Vec<_>, _>>()?;
        let returns = returns
            .iter()
            .map(|text| self.try_signature_type(text))
            .collect::<Result<Vec<_>, _>>()?;
        let flags = if arbitrary_parameters {
            FunctionFlags::ARBITRARY_PARAMETERS
        } else {
            FunctionFlags::empty()
        };
        self.try_alloc_function(
            FunctionTypeSpec::new(params, returns)
                .with_kind(kind)
                .with_mutability(mutability)
                .with_flags(flags),
        )
    }

    #[track_caller]
    pub fn function_type_from_signature(
        &mut self,
        params: &[&str],
        returns: &[&str],
        kind: FunctionKind,
        arbitrary_parameters: bool,
        mutability: StateMutability,
    ) -> Idx {
        self.try_function_type_from_signature(
            params,
            returns,
            kind,
            arbitrary_parameters,
            mutability,
        )
        .unwrap_or_else(|f| fault(f))
    }

    /// Parse one signature entry such as `"uint256"` or `"string calldata"`.
    fn try_signature_type(&mut self, text: &str) -> Result<Idx, RegistryFault> {
        let unknown = || RegistryFault::UnknownSignatureType {
            text: text.to_owned(),
        };
        let mut words = text.split_whitespace();
        let (Some(name), suffix, None) = (words.next(), words.next(), words.next()) else {
            return Err(unknown());
        };
        let elementary = ElementaryTypeName::parse(name).ok_or_else(unknown)?;
        let ty = self
            .try_from_elementary_type_name(&elementary)
            .map_err(|_| unknown())?;

        if self.tag(ty).is_reference() {
            let location = match suffix {
                None => DataLocation::Storage,
                Some(word) => DataLocation::from_keyword(word).ok_or_else(unknown)?,
            };
            return self.try_elementary_at(ty, location);
        }
        match suffix {
            None => Ok(ty),
            Some("payable") if ty == Idx::ADDRESS => Ok(Idx::PAYABLE_ADDRESS),
            Some(_) => Err(unknown()),
        }
    }

    /// Declared types and names of a list of variables.
    fn try_variable_types(
        &mut self,
        decls: &DeclArena,
        variables: &[VariableId],
    ) -> Result<(Vec<Idx>, Vec<Name>), RegistryFault> {
        let mut types = Vec::with_capacity(variables.len());
        let mut names = Vec::with_capacity(variables.len());
        for &variable in variables {
            types.push(self.try_variable_type(decls, variable)?);
            names.push(decls.variable(variable).name);
        }
        Ok((types, names))
    }
}
