//! Registry faults.
//!
//! A fault is an internal invariant violation: an upstream phase let input
//! through that the registry's preconditions forbid. Faults are not user
//! diagnostics. The `try_*` entry points return them; the plain entry points
//! log and panic.

use sol_lexer_core::ElementaryTypeName;
use thiserror::Error;

use crate::Tag;

/// An internal invariant violation detected by the type registry.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryFault {
    #[error("integer width {bits} is not a multiple of 8 in 8..=256")]
    InvalidIntegerWidth { bits: u16 },

    #[error("fixed bytes width {bytes} is outside 1..=32")]
    InvalidFixedBytesWidth { bytes: u16 },

    #[error("unable to convert `{name}` to a type: not an elementary type name")]
    NotElementaryTypeName { name: ElementaryTypeName },

    #[error("meta types must be requested through `meta_type`")]
    MetaTypeViaMagic,

    #[error("meta types wrap contracts only, got {found}")]
    MetaTypeOfNonContract { found: Tag },

    #[error("expected a reference type, got {found}")]
    NotAReferenceType { found: Tag },

    #[error("expected a struct type, got {found}")]
    NotAStructType { found: Tag },

    #[error("declaration used as a type name is not a struct, enum or contract")]
    WrongDeclarationKind,

    #[error("function type has {types} entries but {names} names")]
    NameCountMismatch { types: usize, names: usize },

    #[error("cannot parse `{text}` as a signature type")]
    UnknownSignatureType { text: String },

    #[error("type registry exceeded {} entries", u32::MAX)]
    StoreOverflow,
}

/// Report a fault and abort the current compilation unit.
#[cold]
#[track_caller]
pub(crate) fn fault(fault: RegistryFault) -> ! {
    tracing::error!(%fault, "type registry invariant violated");
    panic!("{fault}");
}
