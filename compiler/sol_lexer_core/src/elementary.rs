//! Elementary type names with their numeric suffixes.

use std::fmt;

use crate::ElementaryToken;

/// Largest bit width of an integer or fixed-point type.
const MAX_BITS: u16 = 256;
/// Largest width of a fixed byte sequence.
const MAX_BYTES: u16 = 32;
/// Largest number of decimal digits of a fixed-point type.
const MAX_FIXED_DIGITS: u16 = 80;

/// A classified elementary type token.
///
/// Produced by the lexer; suffix ranges are validated on construction, so a
/// value of this type always names a well-formed width. `Var` is accepted
/// because the lexer classifies it in the same table, but it does not name a
/// type (see [`ElementaryToken::is_elementary_type_name`]).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ElementaryTypeName {
    token: ElementaryToken,
    first_number: u16,
    second_number: u16,
}

impl ElementaryTypeName {
    /// Create a token with its suffixes, validating the ranges.
    ///
    /// Tokens without suffixes must pass zero for both numbers.
    pub fn new(token: ElementaryToken, first_number: u16, second_number: u16) -> Option<Self> {
        let valid = match token {
            ElementaryToken::IntM | ElementaryToken::UIntM => {
                is_valid_bits(first_number) && second_number == 0
            }
            ElementaryToken::BytesM => {
                (1..=MAX_BYTES).contains(&first_number) && second_number == 0
            }
            ElementaryToken::FixedMxN | ElementaryToken::UFixedMxN => {
                is_valid_bits(first_number) && second_number <= MAX_FIXED_DIGITS
            }
            _ => first_number == 0 && second_number == 0,
        };
        valid.then_some(Self {
            token,
            first_number,
            second_number,
        })
    }

    /// Create a token that takes no suffix (`uint`, `bool`, `string`, ...).
    pub fn keyword(token: ElementaryToken) -> Option<Self> {
        Self::new(token, 0, 0)
    }

    /// Classify source text as an elementary type name.
    ///
    /// Returns `None` for anything that is not an exact spelling: unknown
    /// prefixes, out-of-range widths, and suffixes with leading zeros.
    pub fn parse(text: &str) -> Option<Self> {
        if let Some(token) = ElementaryToken::from_keyword(text) {
            return Self::keyword(token);
        }

        let (token, rest) = if let Some(rest) = text.strip_prefix("uint") {
            (ElementaryToken::UIntM, rest)
        } else if let Some(rest) = text.strip_prefix("int") {
            (ElementaryToken::IntM, rest)
        } else if let Some(rest) = text.strip_prefix("bytes") {
            (ElementaryToken::BytesM, rest)
        } else if let Some(rest) = text.strip_prefix("ufixed") {
            (ElementaryToken::UFixedMxN, rest)
        } else if let Some(rest) = text.strip_prefix("fixed") {
            (ElementaryToken::FixedMxN, rest)
        } else {
            return None;
        };

        if token.has_two_suffixes() {
            let (m, n) = rest.split_once('x')?;
            Self::new(token, parse_suffix(m)?, parse_suffix(n)?)
        } else {
            Self::new(token, parse_suffix(rest)?, 0)
        }
    }

    /// The token class.
    #[inline]
    pub const fn token(self) -> ElementaryToken {
        self.token
    }

    /// First numeric suffix (`M`), or zero.
    #[inline]
    pub const fn first_number(self) -> u16 {
        self.first_number
    }

    /// Second numeric suffix (`N` in `MxN`), or zero.
    #[inline]
    pub const fn second_number(self) -> u16 {
        self.second_number
    }
}

impl fmt::Display for ElementaryTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token.base_name())?;
        if self.token.has_two_suffixes() {
            write!(f, "{}x{}", self.first_number, self.second_number)
        } else if self.token.has_suffix() {
            write!(f, "{}", self.first_number)
        } else {
            Ok(())
        }
    }
}

#[inline]
fn is_valid_bits(bits: u16) -> bool {
    bits % 8 == 0 && (8..=MAX_BITS).contains(&bits)
}

/// Parse a decimal suffix; `0` is allowed, other leading zeros are not.
fn parse_suffix(digits: &str) -> Option<u16> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    digits.parse().ok()
}
