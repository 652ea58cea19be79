//! The canonical type registry.
//!
//! `TypeRegistry` owns every type of a compilation session in one
//! append-only arena. Consumers hold `Idx` handles into it.
//!
//! # Canonicalization
//!
//! Requests are routed one of three ways:
//! - **Primitive table**: integers, fixed bytes, addresses, bool, the
//!   bytes/string singletons, environment magic, the inaccessible-dynamic
//!   sentinel and the empty tuple sit at fixed indices (see [`Idx`]).
//! - **Composite cache**: fixed-point, string literal, struct, enum,
//!   contract, type-of-type and mapping types are looked up by key and
//!   constructed on a miss, so identity equals key equality.
//! - **Fresh construction**: tuples, function types, arrays, relocated
//!   references, modules, modifiers, meta types and rational numbers are
//!   appended on every request. Compare them with [`TypeRegistry::equals`].
//!
//! Entries are immutable once appended and live as long as the registry.

mod cache;
mod construct;
mod equality;
mod format;
mod function;
mod primitives;
mod resolve;

pub use format::TypeDisplay;
pub use function::FunctionTypeSpec;

use rustc_hash::FxHashMap;
use sol_ir::{DataLocation, Name, StateMutability, StructId};

use crate::error::fault;
use crate::{
    ArrayData, ArrayKind, FunctionData, Idx, MagicKind, RegistryFault, Signedness, Tag, TypeData,
};

/// Keyed stores of the composite cache.
#[derive(Clone, Debug, Default)]
struct CompositeCache {
    /// `fixedMxN` by `(M, N)`.
    fixed: FxHashMap<(u16, u16), Idx>,
    /// `ufixedMxN` by `(M, N)`.
    ufixed: FxHashMap<(u16, u16), Idx>,
    string_literals: FxHashMap<Box<[u8]>, Idx>,
    // Linear-scan stores, in construction order.
    structs: Vec<Idx>,
    enums: Vec<Idx>,
    contracts: Vec<Idx>,
    type_types: Vec<Idx>,
    mappings: Vec<Idx>,
}

/// The type arena plus its canonicalization caches.
#[derive(Clone, Debug)]
pub struct TypeRegistry {
    items: Vec<TypeData>,
    tags: Vec<Tag>,
    cache: CompositeCache,
    /// Resolved member lists, by struct declaration and location.
    member_lists: FxHashMap<(StructId, DataLocation), Box<[(Name, Idx)]>>,
}

impl TypeRegistry {
    /// Create a registry with the primitive table materialized.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a registry with room for `capacity` appended types.
    pub fn with_capacity(capacity: usize) -> Self {
        let total = Idx::FIRST_DYNAMIC as usize + capacity;
        let mut registry = TypeRegistry {
            items: Vec::with_capacity(total),
            tags: Vec::with_capacity(total),
            cache: CompositeCache::default(),
            member_lists: FxHashMap::default(),
        };
        registry.init_primitives();
        registry
    }

    /// Fill the fixed slots in `Idx` order.
    fn init_primitives(&mut self) {
        let byte_array = |location, kind| {
            TypeData::Array(ArrayData {
                location,
                is_pointer: true,
                kind,
            })
        };

        self.push(TypeData::Bool);
        self.push(TypeData::InaccessibleDynamic);
        self.push(TypeData::Tuple {
            components: Box::new([]),
        });
        self.push(byte_array(DataLocation::Storage, ArrayKind::Bytes));
        self.push(byte_array(DataLocation::Memory, ArrayKind::Bytes));
        self.push(byte_array(DataLocation::Storage, ArrayKind::String));
        self.push(byte_array(DataLocation::Memory, ArrayKind::String));

        for mutability in StateMutability::ALL {
            self.push(TypeData::Address { mutability });
        }
        for kind in [
            MagicKind::Block,
            MagicKind::Message,
            MagicKind::Transaction,
            MagicKind::Abi,
        ] {
            self.push(TypeData::Magic(kind));
        }
        for signedness in [Signedness::Signed, Signedness::Unsigned] {
            for bits in (8..=256).step_by(8) {
                self.push(TypeData::Integer { bits, signedness });
            }
        }
        for bytes in 1..=32 {
            self.push(TypeData::FixedBytes { bytes });
        }

        debug_assert_eq!(self.items.len(), Idx::FIRST_DYNAMIC as usize);
    }

    fn push(&mut self, data: TypeData) {
        self.tags.push(data.tag());
        self.items.push(data);
    }

    /// Append a new entry.
    ///
    /// Returns `StoreOverflow` once the arena is out of 32-bit indices.
    pub(crate) fn try_alloc(&mut self, data: TypeData) -> Result<Idx, RegistryFault> {
        let raw = u32::try_from(self.items.len())
            .ok()
            .filter(|&raw| raw < u32::MAX)
            .ok_or(RegistryFault::StoreOverflow)?;
        let tag = data.tag();
        self.push(data);
        tracing::trace!(idx = raw, %tag, "type constructed");
        Ok(Idx::from_raw(raw))
    }

    /// Append a new entry, faulting on overflow.
    #[track_caller]
    pub(crate) fn alloc(&mut self, data: TypeData) -> Idx {
        self.try_alloc(data).unwrap_or_else(|f| fault(f))
    }

    // === Queries ===

    /// Number of entries, primitives included.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: the primitive table is materialized on creation.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The payload of a type.
    #[inline]
    pub fn data(&self, idx: Idx) -> &TypeData {
        &self.items[idx.index()]
    }

    /// The category of a type.
    #[inline]
    pub fn tag(&self, idx: Idx) -> Tag {
        self.tags[idx.index()]
    }

    /// Array payload, if `idx` is an array.
    pub fn array_data(&self, idx: Idx) -> Option<&ArrayData> {
        match self.data(idx) {
            TypeData::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Function payload, if `idx` is a function type.
    pub fn function_data(&self, idx: Idx) -> Option<&FunctionData> {
        match self.data(idx) {
            TypeData::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Tuple components, if `idx` is a tuple.
    pub fn tuple_components(&self, idx: Idx) -> Option<&[Option<Idx>]> {
        match self.data(idx) {
            TypeData::Tuple { components } => Some(components),
            _ => None,
        }
    }

    /// `(location, is_pointer)` of a reference type.
    #[inline]
    pub fn reference_location(&self, idx: Idx) -> Option<(DataLocation, bool)> {
        self.data(idx).reference_location()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
