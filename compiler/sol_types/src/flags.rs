//! Function type flags.

use bitflags::bitflags;

bitflags! {
    /// Boolean properties of a function type.
    ///
    /// `GAS_SET`, `VALUE_SET` and `BOUND` take part in structural equality;
    /// `ARBITRARY_PARAMETERS` does not.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct FunctionFlags: u8 {
        /// Accepts any number of arguments of any type (`abi.encode`, ...).
        const ARBITRARY_PARAMETERS = 1 << 0;
        /// `.gas(...)` has been applied.
        const GAS_SET = 1 << 1;
        /// `.value(...)` has been applied.
        const VALUE_SET = 1 << 2;
        /// Bound to its first argument (`using A for B`).
        const BOUND = 1 << 3;
    }
}

impl FunctionFlags {
    /// Flags compared by structural equality.
    pub const COMPARED: Self = Self::from_bits_truncate(
        Self::GAS_SET.bits() | Self::VALUE_SET.bits() | Self::BOUND.bits(),
    );

    /// The part of the flags that structural equality looks at.
    #[inline]
    pub const fn compared(self) -> Self {
        self.intersection(Self::COMPARED)
    }

    #[inline]
    pub const fn has_arbitrary_parameters(self) -> bool {
        self.contains(Self::ARBITRARY_PARAMETERS)
    }

    #[inline]
    pub const fn is_bound(self) -> bool {
        self.contains(Self::BOUND)
    }
}
