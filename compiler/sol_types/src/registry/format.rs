//! Type formatting for diagnostics and debugging output.
//!
//! Types render in source-like syntax (`uint256`, `mapping(address => bool)`,
//! `struct S storage pointer`). Declaration names need the declaration arena
//! and the interner; without them declarations render by id (`struct #0`).

use std::fmt::{self, Write as _};

use sol_ir::{ContractKind, DataLocation, DeclArena, DeclRef, StateMutability, StringInterner};

use crate::{ArrayData, ArrayKind, FunctionKind, Idx, MagicKind, Signedness, TypeData, TypeRegistry};

/// Where declaration names come from.
#[derive(Copy, Clone)]
struct Names<'a> {
    decls: &'a DeclArena,
    interner: &'a StringInterner,
}

/// A type bound to its registry, implementing `Display`.
#[derive(Copy, Clone)]
pub struct TypeDisplay<'a> {
    registry: &'a TypeRegistry,
    idx: Idx,
    names: Option<Names<'a>>,
}

impl fmt::Display for TypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        self.registry.write_type(self.idx, self.names, false, &mut buf);
        f.write_str(&buf)
    }
}

impl TypeRegistry {
    /// Format a type as a human-readable string.
    pub fn format_type(&self, idx: Idx) -> String {
        let mut buf = String::new();
        self.format_type_into(idx, &mut buf);
        buf
    }

    /// Format a type into an existing string buffer.
    pub fn format_type_into(&self, idx: Idx, buf: &mut String) {
        self.write_type(idx, None, false, buf);
    }

    /// Format a type with declaration names resolved.
    pub fn format_type_with(
        &self,
        idx: Idx,
        decls: &DeclArena,
        interner: &StringInterner,
    ) -> String {
        let mut buf = String::new();
        self.write_type(idx, Some(Names { decls, interner }), false, &mut buf);
        buf
    }

    /// A `Display` adapter for a type, declarations rendered by id.
    pub fn display(&self, idx: Idx) -> TypeDisplay<'_> {
        TypeDisplay {
            registry: self,
            idx,
            names: None,
        }
    }

    /// A `Display` adapter for a type with declaration names resolved.
    pub fn display_with<'a>(
        &'a self,
        idx: Idx,
        decls: &'a DeclArena,
        interner: &'a StringInterner,
    ) -> TypeDisplay<'a> {
        TypeDisplay {
            registry: self,
            idx,
            names: Some(Names { decls, interner }),
        }
    }

    /// `short` drops the location part of reference types; element types of
    /// arrays are always written short.
    fn write_type(&self, idx: Idx, names: Option<Names<'_>>, short: bool, buf: &mut String) {
        match self.data(idx) {
            TypeData::Bool => buf.push_str("bool"),
            TypeData::Integer { bits, signedness } => {
                if *signedness == Signedness::Unsigned {
                    buf.push('u');
                }
                let _ = write!(buf, "int{bits}");
            }
            TypeData::FixedPoint {
                total_bits,
                fractional_digits,
                signedness,
            } => {
                if *signedness == Signedness::Unsigned {
                    buf.push('u');
                }
                let _ = write!(buf, "fixed{total_bits}x{fractional_digits}");
            }
            TypeData::FixedBytes { bytes } => {
                let _ = write!(buf, "bytes{bytes}");
            }
            TypeData::Address { mutability } => {
                buf.push_str("address");
                if *mutability == StateMutability::Payable {
                    buf.push_str(" payable");
                }
            }
            TypeData::Array(array) => self.write_array(array, names, short, buf),
            TypeData::Tuple { components } => {
                buf.push_str("tuple(");
                for (i, component) in components.iter().enumerate() {
                    if i > 0 {
                        buf.push(',');
                    }
                    if let Some(component) = component {
                        self.write_type(*component, names, short, buf);
                    }
                }
                buf.push(')');
            }
            TypeData::Struct {
                decl,
                location,
                is_pointer,
            } => {
                buf.push_str("struct ");
                write_decl(DeclRef::Struct(*decl), names, buf);
                if !short {
                    write_location(*location, *is_pointer, buf);
                }
            }
            TypeData::Function(function) => {
                buf.push_str("function (");
                self.write_list(&function.params, names, short, buf);
                buf.push(')');
                if function.mutability != StateMutability::NonPayable {
                    buf.push(' ');
                    buf.push_str(function.mutability.keyword());
                }
                if function.kind == FunctionKind::External {
                    buf.push_str(" external");
                }
                if !function.returns.is_empty() {
                    buf.push_str(" returns (");
                    self.write_list(&function.returns, names, short, buf);
                    buf.push(')');
                }
            }
            TypeData::Contract { decl, is_super } => {
                let is_library = names.is_some_and(|n| {
                    n.decls.contract(*decl).kind == ContractKind::Library
                });
                buf.push_str(if is_library { "library " } else { "contract " });
                if *is_super {
                    buf.push_str("super ");
                }
                write_decl(DeclRef::Contract(*decl), names, buf);
            }
            TypeData::Enum { decl } => {
                buf.push_str("enum ");
                write_decl(DeclRef::Enum(*decl), names, buf);
            }
            TypeData::Module { source } => {
                buf.push_str("module \"");
                write_decl(DeclRef::SourceUnit(*source), names, buf);
                buf.push('"');
            }
            TypeData::TypeType { actual } => {
                buf.push_str("type(");
                self.write_type(*actual, names, short, buf);
                buf.push(')');
            }
            TypeData::Modifier { decl } => {
                buf.push_str("modifier ");
                write_decl(DeclRef::Modifier(*decl), names, buf);
            }
            TypeData::Magic(kind) => match kind {
                MagicKind::Block => buf.push_str("block"),
                MagicKind::Message => buf.push_str("msg"),
                MagicKind::Transaction => buf.push_str("tx"),
                MagicKind::Abi => buf.push_str("abi"),
                MagicKind::MetaType(contract) => {
                    buf.push_str("type(");
                    self.write_type(*contract, names, short, buf);
                    buf.push(')');
                }
            },
            TypeData::Mapping { key, value } => {
                buf.push_str("mapping(");
                self.write_type(*key, names, true, buf);
                buf.push_str(" => ");
                self.write_type(*value, names, true, buf);
                buf.push(')');
            }
            TypeData::StringLiteral { value } => match std::str::from_utf8(value) {
                Ok(text) => {
                    buf.push_str("literal_string ");
                    write_quoted(text, buf);
                }
                Err(_) => {
                    buf.push_str("literal_string hex\"");
                    for byte in value.iter() {
                        let _ = write!(buf, "{byte:02x}");
                    }
                    buf.push('"');
                }
            },
            TypeData::RationalNumber { value, .. } => {
                if value.is_integer() {
                    let _ = write!(buf, "int_const {}", value.numerator());
                } else {
                    let _ = write!(
                        buf,
                        "rational_const {} / {}",
                        value.numerator(),
                        value.denominator()
                    );
                }
            }
            TypeData::InaccessibleDynamic => buf.push_str("inaccessible dynamic type"),
        }
    }

    fn write_array(
        &self,
        array: &ArrayData,
        names: Option<Names<'_>>,
        short: bool,
        buf: &mut String,
    ) {
        match array.kind {
            ArrayKind::Bytes => buf.push_str("bytes"),
            ArrayKind::String => buf.push_str("string"),
            ArrayKind::Element { base, length } => {
                self.write_type(base, names, true, buf);
                match length {
                    Some(length) => {
                        let _ = write!(buf, "[{length}]");
                    }
                    None => buf.push_str("[]"),
                }
            }
        }
        if !short {
            write_location(array.location, array.is_pointer, buf);
        }
    }

    fn write_list(&self, types: &[Idx], names: Option<Names<'_>>, short: bool, buf: &mut String) {
        for (i, &ty) in types.iter().enumerate() {
            if i > 0 {
                buf.push(',');
            }
            self.write_type(ty, names, short, buf);
        }
    }
}

fn write_location(location: DataLocation, is_pointer: bool, buf: &mut String) {
    buf.push(' ');
    buf.push_str(location.keyword());
    if location == DataLocation::Storage {
        buf.push_str(if is_pointer { " pointer" } else { " ref" });
    }
}

/// `text` in double quotes, escaped so the rendering reads back unambiguously.
fn write_quoted(text: &str, buf: &mut String) {
    buf.push('"');
    for c in text.chars() {
        match c {
            '"' => buf.push_str("\\\""),
            '\\' => buf.push_str("\\\\"),
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            c if c.is_ascii_control() => {
                let _ = write!(buf, "\\x{:02x}", u32::from(c));
            }
            c => buf.push(c),
        }
    }
    buf.push('"');
}

fn write_decl(decl: DeclRef, names: Option<Names<'_>>, buf: &mut String) {
    match names {
        Some(names) => buf.push_str(names.interner.lookup(names.decls.name_of(decl))),
        None => {
            let raw = match decl {
                DeclRef::SourceUnit(id) => id.raw(),
                DeclRef::Contract(id) => id.raw(),
                DeclRef::Struct(id) => id.raw(),
                DeclRef::Enum(id) => id.raw(),
                DeclRef::Function(id) => id.raw(),
                DeclRef::Variable(id) => id.raw(),
                DeclRef::Event(id) => id.raw(),
                DeclRef::Modifier(id) => id.raw(),
            };
            let _ = write!(buf, "#{raw}");
        }
    }
}
