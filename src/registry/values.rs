use std::fmt;

use roxmltree::Node;

use crate::error::{Error, Result};

/// The value of an enumerator as written in the registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EnumValue {
    /// Wide enough for every `u64` and `i64` value the registry can spell.
    Literal(i128),
    /// Anything that is not a plain integer, e.g. `(~0U)`. Kept verbatim for the assembler.
    Expression(String),
}

impl EnumValue {
    pub fn from_bitpos(name: &str, bitpos: &str) -> Result<Self> {
        match bitpos.trim().parse::<u32>() {
            Ok(pos) if pos < 64 => Ok(Self::Literal(1i128 << pos)),
            _ => Err(Error::InvalidValue {
                name: name.to_string(),
                text: bitpos.to_string(),
            }),
        }
    }

    pub fn parse(name: &str, text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidValue {
                name: name.to_string(),
                text: text.to_string(),
            });
        }
        Ok(parse_integer(trimmed)
            .map(Self::Literal)
            .unwrap_or_else(|| Self::Expression(trimmed.to_string())))
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{value}"),
            Self::Expression(expr) => f.write_str(expr),
        }
    }
}

fn parse_integer(text: &str) -> Option<i128> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let magnitude = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        i128::from(u64::from_str_radix(hex, 16).ok()?)
    } else {
        i128::from(digits.parse::<u64>().ok()?)
    };
    if negative {
        magnitude.checked_neg()
    } else {
        Some(magnitude)
    }
}

pub trait ActualValue<'a>: Sized {
    fn convert(src: &'a str, parent: Node) -> Result<Self>;
}

impl ActualValue<'_> for String {
    fn convert(src: &'_ str, _parent: Node) -> Result<Self> {
        Ok(src.to_string())
    }
}

impl ActualValue<'_> for u32 {
    fn convert(src: &str, parent: Node) -> Result<Self> {
        src.trim().parse().map_err(|_| Error::InvalidValue {
            name: parent.tag_name().name().to_string(),
            text: src.to_string(),
        })
    }
}

pub fn actual_value<'a, T: ActualValue<'a>>(x: &'a str, parent: Node) -> Result<T> {
    T::convert(x, parent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_and_hex() {
        assert_eq!(EnumValue::parse("A", "0").unwrap(), EnumValue::Literal(0));
        assert_eq!(
            EnumValue::parse("A", "1000001000").unwrap(),
            EnumValue::Literal(1000001000)
        );
        assert_eq!(EnumValue::parse("A", "-4").unwrap(), EnumValue::Literal(-4));
        assert_eq!(
            EnumValue::parse("A", "0x7FFFFFFF").unwrap(),
            EnumValue::Literal(0x7FFF_FFFF)
        );
    }

    #[test]
    fn full_64_bit_range_is_exact() {
        assert_eq!(
            EnumValue::parse("A", "0xFFFFFFFFFFFFFFFF").unwrap(),
            EnumValue::Literal(18_446_744_073_709_551_615)
        );
        assert_eq!(
            EnumValue::parse("A", "-0x8000000000000000").unwrap(),
            EnumValue::Literal(-9_223_372_036_854_775_808)
        );
        assert_eq!(
            EnumValue::parse("A", "-9223372036854775808").unwrap(),
            EnumValue::Literal(i128::from(i64::MIN))
        );
        assert_eq!(
            EnumValue::parse("A", "0x10000000000000000").unwrap(),
            EnumValue::Expression("0x10000000000000000".into())
        );
    }

    #[test]
    fn keeps_expressions_verbatim() {
        assert_eq!(
            EnumValue::parse("A", " (~0U) ").unwrap(),
            EnumValue::Expression("(~0U)".into())
        );
    }

    #[test]
    fn empty_value_is_rejected() {
        assert!(matches!(
            EnumValue::parse("VK_FOO", "  "),
            Err(Error::InvalidValue { .. })
        ));
    }

    #[test]
    fn bitpos_shifts() {
        assert_eq!(
            EnumValue::from_bitpos("A", "4").unwrap(),
            EnumValue::Literal(16)
        );
        assert_eq!(
            EnumValue::from_bitpos("A", "63").unwrap(),
            EnumValue::Literal(9_223_372_036_854_775_808)
        );
        assert!(EnumValue::from_bitpos("A", "64").is_err());
        assert!(EnumValue::from_bitpos("A", "x").is_err());
    }
}
