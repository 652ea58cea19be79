//! Canonical type registry for Sol.
//!
//! The registry is the single authority that constructs and owns every type
//! value of a compilation session, from elaboration through code generation.
//! Analyses compare types by handle identity, so which categories are
//! deduplicated, and by what key, is part of the contract:
//!
//! - Integers, fixed bytes, addresses, bool, the bytes/string singletons,
//!   environment magic and the empty tuple have one instance each at fixed
//!   indices.
//! - Fixed-point, string literal, struct, enum, contract, type-of-type and
//!   mapping types are cached by key.
//! - Tuples, function types, arrays, relocated references, modules,
//!   modifiers, meta types and rational numbers are fresh on every request
//!   and must be compared with [`TypeRegistry::equals`].
//!
//! # Usage
//!
//! ```
//! use sol_ir::DataLocation;
//! use sol_types::{Idx, Signedness, TypeRegistry};
//!
//! let mut types = TypeRegistry::new();
//! let uint = types.integer_type(256, Signedness::Unsigned);
//! assert_eq!(uint, Idx::UINT256);
//!
//! let m = types.mapping_type(types.address_type(), uint);
//! assert_eq!(m, types.mapping_type(Idx::ADDRESS, Idx::UINT256));
//! assert_eq!(types.format_type(m), "mapping(address => uint256)");
//!
//! let a = types.array_type(DataLocation::Memory, uint);
//! let b = types.array_type(DataLocation::Memory, uint);
//! assert_ne!(a, b);
//! assert!(types.equals(a, b));
//! ```

mod data;
mod error;
mod flags;
mod idx;
mod registry;
mod shared;
mod tag;

use std::sync::Once;

pub use data::{
    ArrayData, ArrayKind, FunctionData, FunctionKind, MagicKind, Rational, Signedness, TypeData,
};
pub use error::RegistryFault;
pub use flags::FunctionFlags;
pub use idx::Idx;
pub use registry::{FunctionTypeSpec, TypeDisplay, TypeRegistry};
pub use shared::SharedTypeRegistry;
pub use tag::Tag;

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber for registry diagnostics.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
///
/// ```text
/// RUST_LOG=sol_types=trace cargo test -p sol_types
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A host may have installed its own subscriber already.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Idx, Tag};
    sol_ir::static_assert_size!(Idx, 4);
    sol_ir::static_assert_size!(Option<Idx>, 8);
    sol_ir::static_assert_size!(Tag, 1);
}
