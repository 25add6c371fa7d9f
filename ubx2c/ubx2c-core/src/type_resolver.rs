//! UBX type-token resolution.
//!
//! The ICD's format column uses short codes (`U1`, `I4`, `X4[3]`, ...) for
//! fixed-width wire types. Resolution maps each code to an output primitive
//! and detects an optional inline `[N]` array suffix. Cells with no
//! recognized code resolve to `None`; they are decorative rows, not errors.

use std::fmt;

/// Fixed-width output type for one UBX short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    F32,
    F64,
}

impl Primitive {
    /// The C type name emitted for this primitive.
    pub fn c_name(&self) -> &'static str {
        match self {
            Self::U8 => "uint8_t",
            Self::I8 => "int8_t",
            Self::U16 => "uint16_t",
            Self::I16 => "int16_t",
            Self::U32 => "uint32_t",
            Self::I32 => "int32_t",
            Self::F32 => "float",
            Self::F64 => "double",
        }
    }

    /// Storage width in bytes.
    pub fn width(&self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 | Self::F32 => 4,
            Self::F64 => 8,
        }
    }

    pub fn is_signed(&self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::F32 | Self::F64)
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.c_name())
    }
}

/// A recognized type token: primitive plus array length (1 for scalars).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedToken {
    pub primitive: Primitive,
    pub array_len: usize,
}

/// UBX short codes and their storage types, longest code first so `RU1_3`
/// is never shadowed by the `U1` it contains. `RU1_3` stores as a plain
/// byte; its non-linear decoding is a presentation concern.
const TOKEN_TABLE: &[(&str, Primitive)] = &[
    ("RU1_3", Primitive::U8),
    ("U1", Primitive::U8),
    ("I1", Primitive::I8),
    ("X1", Primitive::U8),
    ("U2", Primitive::U16),
    ("I2", Primitive::I16),
    ("X2", Primitive::U16),
    ("U4", Primitive::U32),
    ("I4", Primitive::I32),
    ("X4", Primitive::U32),
    ("R4", Primitive::F32),
    ("R8", Primitive::F64),
    ("CH", Primitive::I8),
];

/// Resolve a format-column cell into a primitive and array length.
///
/// Matching is substring containment against the code table. Returns `None`
/// when no code is contained or when a `[...]` suffix holds anything but
/// digits; callers must skip such rows rather than fail.
pub fn resolve_type_token(token: &str) -> Option<ResolvedToken> {
    let (_, primitive) = TOKEN_TABLE
        .iter()
        .find(|(code, _)| token.contains(code))?;
    let array_len = parse_array_suffix(token)?;
    Some(ResolvedToken {
        primitive: *primitive,
        array_len,
    })
}

/// Digits between the first `[` and the following `]`; no brackets or empty
/// brackets mean a scalar (length 1).
fn parse_array_suffix(token: &str) -> Option<usize> {
    let Some(open) = token.find('[') else {
        return Some(1);
    };
    let rest = &token[open + 1..];
    let close = rest.find(']')?;
    let digits = rest[..close].trim();
    if digits.is_empty() {
        return Some(1);
    }
    digits.parse().ok()
}
