//! Type payloads stored in the registry arena.
//!
//! `TypeData` is a tagged sum over all type categories. Children are `Idx`
//! handles, never boxed types, so a payload is cheap to clone and compare.
//! Note that the derived `PartialEq` compares child handles by identity;
//! structural equality is [`TypeRegistry::equals`](crate::TypeRegistry::equals).

use ethnum::U256;
use num_bigint::{BigInt, Sign};
use num_rational::BigRational;
use sol_ir::{
    ContractId, DataLocation, DeclRef, EnumId, ModifierId, Name, SourceUnitId, StateMutability,
    StructId,
};

use crate::{FunctionFlags, Idx, Tag};

/// Signed or unsigned numeric type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Signedness {
    Signed,
    Unsigned,
}

/// Environment objects available in every function body.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MagicKind {
    /// `block`.
    Block,
    /// `msg`.
    Message,
    /// `tx`.
    Transaction,
    /// `abi`.
    Abi,
    /// `type(C)` for a contract type `C`.
    MetaType(Idx),
}

impl MagicKind {
    /// Position of a precomputed kind in the magic table; `None` for `MetaType`.
    #[inline]
    pub const fn table_index(self) -> Option<u32> {
        match self {
            Self::Block => Some(0),
            Self::Message => Some(1),
            Self::Transaction => Some(2),
            Self::Abi => Some(3),
            Self::MetaType(_) => None,
        }
    }
}

/// What an array holds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ArrayKind {
    /// `bytes`.
    Bytes,
    /// `string`.
    String,
    /// `T[]` (`length: None`) or `T[length]`.
    Element { base: Idx, length: Option<U256> },
}

/// Payload of an array type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ArrayData {
    pub location: DataLocation,
    pub is_pointer: bool,
    pub kind: ArrayKind,
}

impl ArrayData {
    /// Check if this is `bytes` or `string`.
    #[inline]
    pub const fn is_byte_array(&self) -> bool {
        matches!(self.kind, ArrayKind::Bytes | ArrayKind::String)
    }

    /// Check if the length is not fixed by the type.
    #[inline]
    pub const fn is_dynamically_sized(&self) -> bool {
        !matches!(
            self.kind,
            ArrayKind::Element {
                length: Some(_),
                ..
            }
        )
    }
}

/// How a function value is invoked.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum FunctionKind {
    /// Jump within the same contract.
    #[default]
    Internal,
    /// Message call to another contract.
    External,
    /// Delegate call to a library.
    DelegateCall,
    /// `address.call(...)`.
    BareCall,
    /// `address.delegatecall(...)`.
    BareDelegateCall,
    /// `address.staticcall(...)`.
    BareStaticCall,
    /// `new C(...)`.
    Creation,
    /// `address.send(...)`.
    Send,
    /// `address.transfer(...)`.
    Transfer,
    /// `emit E(...)`.
    Event,
    Selfdestruct,
    Revert,
    Require,
    Assert,
    Keccak256,
    Sha256,
    Ripemd160,
    EcRecover,
    GasLeft,
    BlockHash,
    AbiEncode,
    AbiEncodePacked,
    AbiDecode,
    /// `type(C)`.
    MetaType,
}

/// Payload of a function type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionData {
    pub params: Box<[Idx]>,
    pub returns: Box<[Idx]>,
    /// One entry per parameter; `Name::EMPTY` for unnamed ones.
    pub param_names: Box<[Name]>,
    /// One entry per return value; `Name::EMPTY` for unnamed ones.
    pub return_names: Box<[Name]>,
    pub kind: FunctionKind,
    pub mutability: StateMutability,
    /// The declaration this type was derived from, if any.
    pub declaration: Option<DeclRef>,
    pub flags: FunctionFlags,
}

/// Exact rational value of a number literal.
///
/// Literals are arbitrary precision (`2**255`, `1e-80`), so the value is a
/// big rational kept in lowest terms with a positive denominator. Derived
/// equality is therefore value equality. Arithmetic on literals happens
/// elsewhere.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Rational(BigRational);

impl Rational {
    /// `numerator / denominator` in lowest terms, or `None` for a zero
    /// denominator.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Option<Self> {
        let denominator = denominator.into();
        if denominator.sign() == Sign::NoSign {
            return None;
        }
        Some(Rational(BigRational::new(numerator.into(), denominator)))
    }

    /// An integer value.
    pub fn integer(value: impl Into<BigInt>) -> Self {
        Rational(BigRational::from_integer(value.into()))
    }

    #[inline]
    pub fn numerator(&self) -> &BigInt {
        self.0.numer()
    }

    #[inline]
    pub fn denominator(&self) -> &BigInt {
        self.0.denom()
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }
}

impl From<BigRational> for Rational {
    fn from(value: BigRational) -> Self {
        Rational(value)
    }
}

/// A type payload.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeData {
    Bool,
    Integer {
        bits: u16,
        signedness: Signedness,
    },
    /// `fixedMxN`: `total_bits` = M, `fractional_digits` = N.
    FixedPoint {
        total_bits: u16,
        fractional_digits: u16,
        signedness: Signedness,
    },
    FixedBytes {
        bytes: u8,
    },
    Address {
        mutability: StateMutability,
    },
    Array(ArrayData),
    /// Components may be absent, as in the left side of `(, x) = f()`.
    Tuple {
        components: Box<[Option<Idx>]>,
    },
    Struct {
        decl: StructId,
        location: DataLocation,
        is_pointer: bool,
    },
    Function(Box<FunctionData>),
    Contract {
        decl: ContractId,
        is_super: bool,
    },
    Enum {
        decl: EnumId,
    },
    Module {
        source: SourceUnitId,
    },
    /// The type of a type name used as an expression.
    TypeType {
        actual: Idx,
    },
    Modifier {
        decl: ModifierId,
    },
    Magic(MagicKind),
    Mapping {
        key: Idx,
        value: Idx,
    },
    StringLiteral {
        value: Box<[u8]>,
    },
    RationalNumber {
        value: Rational,
        compatible_bytes: Option<Idx>,
    },
    InaccessibleDynamic,
}

impl TypeData {
    /// The category of this payload.
    pub const fn tag(&self) -> Tag {
        match self {
            Self::Bool => Tag::Bool,
            Self::Integer { .. } => Tag::Integer,
            Self::FixedPoint { .. } => Tag::FixedPoint,
            Self::FixedBytes { .. } => Tag::FixedBytes,
            Self::Address { .. } => Tag::Address,
            Self::Array(_) => Tag::Array,
            Self::Tuple { .. } => Tag::Tuple,
            Self::Struct { .. } => Tag::Struct,
            Self::Function(_) => Tag::Function,
            Self::Contract { .. } => Tag::Contract,
            Self::Enum { .. } => Tag::Enum,
            Self::Module { .. } => Tag::Module,
            Self::TypeType { .. } => Tag::TypeType,
            Self::Modifier { .. } => Tag::Modifier,
            Self::Magic(_) => Tag::Magic,
            Self::Mapping { .. } => Tag::Mapping,
            Self::StringLiteral { .. } => Tag::StringLiteral,
            Self::RationalNumber { .. } => Tag::RationalNumber,
            Self::InaccessibleDynamic => Tag::InaccessibleDynamic,
        }
    }

    /// `(location, is_pointer)` of a reference payload.
    pub const fn reference_location(&self) -> Option<(DataLocation, bool)> {
        match self {
            Self::Array(array) => Some((array.location, array.is_pointer)),
            Self::Struct {
                location,
                is_pointer,
                ..
            } => Some((*location, *is_pointer)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rational_is_normalized() {
        assert_eq!(Rational::new(2, 4), Rational::new(1, 2));
        assert_eq!(Rational::new(3, -6), Rational::new(-1, 2));
        assert_eq!(Rational::new(-3, -6), Rational::new(1, 2));
        assert_eq!(Rational::new(0, 7), Some(Rational::integer(0)));
        let two = Rational::new(10, 5).unwrap_or_else(|| Rational::integer(0));
        assert!(two.is_integer());
        assert_eq!(two.numerator(), &BigInt::from(2));
    }

    #[test]
    fn rational_rejects_zero_denominator() {
        assert_eq!(Rational::new(1, 0), None);
        assert_eq!(Rational::new(i128::MIN, 0), None);
    }

    #[test]
    fn rational_survives_extreme_operands() {
        let Some(min_over_minus_one) = Rational::new(i128::MIN, -1) else {
            panic!("nonzero denominator");
        };
        assert_eq!(min_over_minus_one.numerator(), &-BigInt::from(i128::MIN));
        assert!(min_over_minus_one.is_integer());

        let Some(one_over_min) = Rational::new(1, i128::MIN) else {
            panic!("nonzero denominator");
        };
        assert_eq!(one_over_min.numerator(), &BigInt::from(-1));
        assert_eq!(one_over_min.denominator(), &-BigInt::from(i128::MIN));
    }

    #[test]
    fn rational_holds_literals_past_machine_width() {
        let big = BigInt::from(1) << 255u32;
        let value = Rational::integer(big.clone());
        assert_eq!(value.numerator(), &big);
        assert_eq!(Rational::new(&big * BigInt::from(2), 4), Rational::new(big, 2));
    }

    #[test]
    fn magic_table_positions() {
        assert_eq!(MagicKind::Block.table_index(), Some(0));
        assert_eq!(MagicKind::Abi.table_index(), Some(3));
        assert_eq!(MagicKind::MetaType(Idx::BOOL).table_index(), None);
    }

    #[test]
    fn array_shape_queries() {
        let bytes = ArrayData {
            location: DataLocation::Memory,
            is_pointer: false,
            kind: ArrayKind::Bytes,
        };
        assert!(bytes.is_byte_array());
        assert!(bytes.is_dynamically_sized());

        let fixed = ArrayData {
            kind: ArrayKind::Element {
                base: Idx::UINT256,
                length: Some(U256::new(3)),
            },
            ..bytes
        };
        assert!(!fixed.is_byte_array());
        assert!(!fixed.is_dynamically_sized());
    }

    #[test]
    fn tags_and_locations() {
        let s = TypeData::Struct {
            decl: StructId::from_raw(0),
            location: DataLocation::Storage,
            is_pointer: true,
        };
        assert_eq!(s.tag(), Tag::Struct);
        assert_eq!(s.reference_location(), Some((DataLocation::Storage, true)));
        assert_eq!(TypeData::Bool.reference_location(), None);
    }
}
