//! Declaration arena.
//!
//! Declarations are stored flat, one `Vec` per kind, and referenced by typed
//! 32-bit ids. The arena only grows, so an id handed out once identifies the
//! same declaration for the rest of the session. The type registry uses these
//! ids as cache keys.

use std::fmt;

use crate::{DataLocation, Name, StateMutability, TypeName, Visibility};

macro_rules! define_decl_id {
    ($(#[$meta:meta])* $id:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
        #[repr(transparent)]
        pub struct $id(u32);

        impl $id {
            /// Create from a raw arena index.
            #[inline]
            pub const fn from_raw(raw: u32) -> Self {
                $id(raw)
            }

            /// Get the raw u32 value.
            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            /// Index into the arena.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $id {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "({})"), self.0)
            }
        }
    };
}

define_decl_id!(
    /// Index of a [`SourceUnit`].
    SourceUnitId,
    "SourceUnitId"
);
define_decl_id!(
    /// Index of a [`ContractDef`].
    ContractId,
    "ContractId"
);
define_decl_id!(
    /// Index of a [`StructDef`].
    StructId,
    "StructId"
);
define_decl_id!(
    /// Index of an [`EnumDef`].
    EnumId,
    "EnumId"
);
define_decl_id!(
    /// Index of a [`FunctionDef`].
    FunctionId,
    "FunctionId"
);
define_decl_id!(
    /// Index of a [`VariableDecl`].
    VariableId,
    "VariableId"
);
define_decl_id!(
    /// Index of an [`EventDef`].
    EventId,
    "EventId"
);
define_decl_id!(
    /// Index of a [`ModifierDef`].
    ModifierId,
    "ModifierId"
);

/// A reference to any declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum DeclRef {
    SourceUnit(SourceUnitId),
    Contract(ContractId),
    Struct(StructId),
    Enum(EnumId),
    Function(FunctionId),
    Variable(VariableId),
    Event(EventId),
    Modifier(ModifierId),
}

/// A source file, the unit of import.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SourceUnit {
    pub path: Name,
}

/// What a contract-like declaration was declared as.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ContractKind {
    #[default]
    Contract,
    Interface,
    Library,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ContractDef {
    pub name: Name,
    pub kind: ContractKind,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct StructDef {
    pub name: Name,
    /// Member variables in declaration order.
    pub members: Vec<VariableId>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct EnumDef {
    pub name: Name,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FunctionDef {
    pub name: Name,
    pub parameters: Vec<VariableId>,
    pub returns: Vec<VariableId>,
    pub visibility: Visibility,
    pub mutability: StateMutability,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct EventDef {
    pub name: Name,
    pub parameters: Vec<VariableId>,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ModifierDef {
    pub name: Name,
}

/// A variable: state variable, struct member, parameter or return value.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct VariableDecl {
    pub name: Name,
    pub type_name: TypeName,
    /// Explicit data location, if one was written.
    pub location: Option<DataLocation>,
    pub is_state_variable: bool,
    pub visibility: Visibility,
}

impl VariableDecl {
    /// A local-style variable with no explicit location.
    pub fn new(name: Name, type_name: TypeName) -> Self {
        VariableDecl {
            name,
            type_name,
            location: None,
            is_state_variable: false,
            visibility: Visibility::Internal,
        }
    }

    /// A public state variable (one that gets a generated accessor).
    pub fn state_variable(name: Name, type_name: TypeName) -> Self {
        VariableDecl {
            is_state_variable: true,
            visibility: Visibility::Public,
            ..Self::new(name, type_name)
        }
    }

    /// Set an explicit data location.
    #[must_use]
    pub fn with_location(mut self, location: DataLocation) -> Self {
        self.location = Some(location);
        self
    }
}

/// Flat storage for all declarations of a session.
#[derive(Clone, Debug, Default)]
pub struct DeclArena {
    source_units: Vec<SourceUnit>,
    contracts: Vec<ContractDef>,
    structs: Vec<StructDef>,
    enums: Vec<EnumDef>,
    functions: Vec<FunctionDef>,
    variables: Vec<VariableDecl>,
    events: Vec<EventDef>,
    modifiers: Vec<ModifierDef>,
}

/// Next index for a store, panicking past `u32::MAX` entries.
fn next_index<T>(store: &[T]) -> u32 {
    u32::try_from(store.len())
        .unwrap_or_else(|_| panic!("declaration arena exceeded {} entries", u32::MAX))
}

impl DeclArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc_source_unit(&mut self, unit: SourceUnit) -> SourceUnitId {
        let id = SourceUnitId(next_index(&self.source_units));
        self.source_units.push(unit);
        id
    }

    pub fn alloc_contract(&mut self, contract: ContractDef) -> ContractId {
        let id = ContractId(next_index(&self.contracts));
        self.contracts.push(contract);
        id
    }

    pub fn alloc_struct(&mut self, def: StructDef) -> StructId {
        let id = StructId(next_index(&self.structs));
        self.structs.push(def);
        id
    }

    pub fn alloc_enum(&mut self, def: EnumDef) -> EnumId {
        let id = EnumId(next_index(&self.enums));
        self.enums.push(def);
        id
    }

    pub fn alloc_function(&mut self, def: FunctionDef) -> FunctionId {
        let id = FunctionId(next_index(&self.functions));
        self.functions.push(def);
        id
    }

    pub fn alloc_variable(&mut self, decl: VariableDecl) -> VariableId {
        let id = VariableId(next_index(&self.variables));
        self.variables.push(decl);
        id
    }

    pub fn alloc_event(&mut self, def: EventDef) -> EventId {
        let id = EventId(next_index(&self.events));
        self.events.push(def);
        id
    }

    pub fn alloc_modifier(&mut self, def: ModifierDef) -> ModifierId {
        let id = ModifierId(next_index(&self.modifiers));
        self.modifiers.push(def);
        id
    }

    /// Allocate the member variables and the struct in one go.
    pub fn alloc_struct_with_members(
        &mut self,
        name: Name,
        members: impl IntoIterator<Item = (Name, TypeName)>,
    ) -> StructId {
        let members = members
            .into_iter()
            .map(|(member, type_name)| self.alloc_variable(VariableDecl::new(member, type_name)))
            .collect();
        self.alloc_struct(StructDef { name, members })
    }

    #[inline]
    pub fn source_unit(&self, id: SourceUnitId) -> &SourceUnit {
        &self.source_units[id.index()]
    }

    #[inline]
    pub fn contract(&self, id: ContractId) -> &ContractDef {
        &self.contracts[id.index()]
    }

    #[inline]
    pub fn struct_def(&self, id: StructId) -> &StructDef {
        &self.structs[id.index()]
    }

    #[inline]
    pub fn enum_def(&self, id: EnumId) -> &EnumDef {
        &self.enums[id.index()]
    }

    #[inline]
    pub fn function(&self, id: FunctionId) -> &FunctionDef {
        &self.functions[id.index()]
    }

    #[inline]
    pub fn variable(&self, id: VariableId) -> &VariableDecl {
        &self.variables[id.index()]
    }

    #[inline]
    pub fn event(&self, id: EventId) -> &EventDef {
        &self.events[id.index()]
    }

    #[inline]
    pub fn modifier(&self, id: ModifierId) -> &ModifierDef {
        &self.modifiers[id.index()]
    }

    /// The declared name of any declaration; the path for source units.
    pub fn name_of(&self, decl: DeclRef) -> Name {
        match decl {
            DeclRef::SourceUnit(id) => self.source_unit(id).path,
            DeclRef::Contract(id) => self.contract(id).name,
            DeclRef::Struct(id) => self.struct_def(id).name,
            DeclRef::Enum(id) => self.enum_def(id).name,
            DeclRef::Function(id) => self.function(id).name,
            DeclRef::Variable(id) => self.variable(id).name,
            DeclRef::Event(id) => self.event(id).name,
            DeclRef::Modifier(id) => self.modifier(id).name,
        }
    }
}
