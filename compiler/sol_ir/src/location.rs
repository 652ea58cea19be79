//! Data locations, state mutability and visibility.

use std::fmt;

/// Where a reference-typed value lives.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum DataLocation {
    /// Persistent contract storage.
    Storage,
    /// Read-only call input.
    CallData,
    /// Transient memory.
    Memory,
}

impl DataLocation {
    /// Source keyword for this location.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Storage => "storage",
            Self::CallData => "calldata",
            Self::Memory => "memory",
        }
    }

    /// Parse a location keyword.
    pub fn from_keyword(text: &str) -> Option<Self> {
        match text {
            "storage" => Some(Self::Storage),
            "calldata" => Some(Self::CallData),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }
}

impl fmt::Display for DataLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// How a function (or an address) may interact with state.
///
/// Ordered from most to least restrictive.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum StateMutability {
    Pure,
    View,
    #[default]
    NonPayable,
    Payable,
}

impl StateMutability {
    /// All variants in declaration order.
    pub const ALL: [Self; 4] = [Self::Pure, Self::View, Self::NonPayable, Self::Payable];

    /// Position in [`StateMutability::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Source keyword; `nonpayable` has no keyword of its own but is
    /// spelled out in diagnostics.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Pure => "pure",
            Self::View => "view",
            Self::NonPayable => "nonpayable",
            Self::Payable => "payable",
        }
    }
}

impl fmt::Display for StateMutability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Declared visibility of a function, variable or function type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    Private,
    #[default]
    Internal,
    Public,
    External,
}
