//! Sol Lexer Core - elementary type-name classification.
//!
//! The lexer classifies built-in type names (`uint256`, `bytes32`,
//! `fixed128x18`, `address`, ...) into an [`ElementaryToken`] plus up to two
//! embedded numeric suffixes. The type registry consumes the resulting
//! [`ElementaryTypeName`] and never sees raw source text.
//!
//! This crate has no `sol_*` dependencies so tooling (highlighters, formatters)
//! can classify type names without pulling in the compiler.

mod elementary;
mod token;

pub use elementary::ElementaryTypeName;
pub use token::ElementaryToken;
