//! Interned string identifier.

use std::fmt;

/// Interned string identifier.
///
/// A 32-bit index into the [`StringInterner`](crate::StringInterner) table.
/// Equality is index equality.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string; also used for unnamed parameters.
    pub const EMPTY: Name = Name(0);

    /// Create from a raw table index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the interner table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this is the empty name.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "Name::EMPTY")
        } else {
            write!(f, "Name({})", self.0)
        }
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}
