//! Structural equality over registry handles.

use crate::{ArrayKind, Idx, MagicKind, TypeData, TypeRegistry};

impl TypeRegistry {
    /// Check if two types are structurally equal.
    ///
    /// Identical handles are always equal. Beyond that, each category
    /// compares its own payload, recursing into child handles:
    /// - arrays: location, pointer-ness, kind, length and element type;
    /// - tuples: component-wise, absent matching absent;
    /// - functions: kind, mutability, parameter and return types, and the
    ///   gas/value/bound flags. Names and the originating declaration are
    ///   ignored;
    /// - rational numbers: the value only;
    /// - mappings, type-of-type and meta types: their wrapped types.
    ///
    /// Every other category compares its fields directly.
    pub fn equals(&self, a: Idx, b: Idx) -> bool {
        if a == b {
            return true;
        }
        match (self.data(a), self.data(b)) {
            (TypeData::Array(x), TypeData::Array(y)) => {
                x.location == y.location
                    && x.is_pointer == y.is_pointer
                    && match (x.kind, y.kind) {
                        (
                            ArrayKind::Element {
                                base: xb,
                                length: xl,
                            },
                            ArrayKind::Element {
                                base: yb,
                                length: yl,
                            },
                        ) => xl == yl && self.equals(xb, yb),
                        (xk, yk) => xk == yk,
                    }
            }
            (TypeData::Tuple { components: x }, TypeData::Tuple { components: y }) => {
                x.len() == y.len()
                    && x.iter().zip(y.iter()).all(|pair| match pair {
                        (Some(l), Some(r)) => self.equals(*l, *r),
                        (None, None) => true,
                        _ => false,
                    })
            }
            (TypeData::Function(f), TypeData::Function(g)) => {
                f.kind == g.kind
                    && f.mutability == g.mutability
                    && f.flags.compared() == g.flags.compared()
                    && self.all_equal(&f.params, &g.params)
                    && self.all_equal(&f.returns, &g.returns)
            }
            (TypeData::TypeType { actual: x }, TypeData::TypeType { actual: y }) => {
                self.equals(*x, *y)
            }
            (
                TypeData::Mapping {
                    key: xk,
                    value: xv,
                },
                TypeData::Mapping {
                    key: yk,
                    value: yv,
                },
            ) => self.equals(*xk, *yk) && self.equals(*xv, *yv),
            (
                TypeData::Magic(MagicKind::MetaType(x)),
                TypeData::Magic(MagicKind::MetaType(y)),
            ) => self.equals(*x, *y),
            (
                TypeData::RationalNumber { value: x, .. },
                TypeData::RationalNumber { value: y, .. },
            ) => x == y,
            (x, y) => x == y,
        }
    }

    fn all_equal(&self, xs: &[Idx], ys: &[Idx]) -> bool {
        xs.len() == ys.len() && xs.iter().zip(ys).all(|(&x, &y)| self.equals(x, y))
    }
}
