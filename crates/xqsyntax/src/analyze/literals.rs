//! Values of string, URI and numeric literals.
//!
//! Malformed literals still have a value: an unclosed string yields its
//! contents, a malformed entity reference keeps its text, and a number with an
//! incomplete exponent is read from its mantissa.

use std::fmt;

use crate::parser::ast::{BracedUriLiteral, Expr, NumericLiteral, StringLiteral};
use crate::parser::{SyntaxKind, SyntaxToken};

#[derive(Debug, Clone, PartialEq)]
pub enum NumericValue {
    /// Integers that do not fit keep their digits as a decimal.
    Integer(i128),
    Decimal(String),
    Double(f64),
}

impl NumericValue {
    fn negate(self) -> NumericValue {
        match self {
            NumericValue::Integer(value) => NumericValue::Integer(-value),
            NumericValue::Decimal(digits) => match digits.strip_prefix('-') {
                Some(positive) => NumericValue::Decimal(positive.to_string()),
                None => NumericValue::Decimal(format!("-{digits}")),
            },
            NumericValue::Double(value) => NumericValue::Double(-value),
        }
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericValue::Integer(value) => write!(f, "{value}"),
            NumericValue::Decimal(digits) => write!(f, "{digits}"),
            NumericValue::Double(value) => write!(f, "{value:e}"),
        }
    }
}

/// Value of a literal expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    Numeric(NumericValue),
    String(String),
}

impl StringLiteral {
    pub fn value(&self) -> String {
        decode_parts(self.parts())
    }
}

impl BracedUriLiteral {
    pub fn value(&self) -> String {
        decode_parts(self.parts())
    }
}

impl NumericLiteral {
    pub fn value(&self) -> Option<NumericValue> {
        let token = self.token()?;
        let text = token.text();
        let value = match token.kind() {
            SyntaxKind::IntegerLiteral => match text.parse::<i128>() {
                Ok(value) => NumericValue::Integer(value),
                Err(_) => NumericValue::Decimal(text.to_string()),
            },
            SyntaxKind::DecimalLiteral => NumericValue::Decimal(normalize_decimal(text)),
            SyntaxKind::DoubleLiteral => NumericValue::Double(text.parse().ok()?),
            _ => return None,
        };
        Some(value)
    }
}

impl Expr {
    /// Value of a literal, a parenthesized literal or a signed number.
    pub fn constant_value(&self) -> Option<ConstantValue> {
        match self {
            Expr::Numeric(literal) => literal.value().map(ConstantValue::Numeric),
            Expr::String(literal) => Some(ConstantValue::String(literal.value())),
            Expr::Parenthesized(paren) => paren.expr()?.constant_value(),
            Expr::Unary(unary) => match unary.operand()?.constant_value()? {
                ConstantValue::Numeric(value) if unary.is_negative() => {
                    Some(ConstantValue::Numeric(value.negate()))
                }
                value @ ConstantValue::Numeric(_) => Some(value),
                ConstantValue::String(_) => None,
            },
            _ => None,
        }
    }
}

fn decode_parts(parts: impl Iterator<Item = SyntaxToken>) -> String {
    let mut value = String::new();
    for part in parts {
        let text = part.text();
        match part.kind() {
            SyntaxKind::EscapeQuot => value.push('"'),
            SyntaxKind::EscapeApos => value.push('\''),
            SyntaxKind::PredefinedEntityReference => match predefined_entity(text) {
                Some(c) => value.push(c),
                None => value.push_str(text),
            },
            SyntaxKind::CharacterReference => match character_reference(text) {
                Some(c) => value.push(c),
                None => value.push_str(text),
            },
            _ => value.push_str(text),
        }
    }
    value
}

fn predefined_entity(text: &str) -> Option<char> {
    let c = match text {
        "&lt;" => '<',
        "&gt;" => '>',
        "&amp;" => '&',
        "&quot;" => '"',
        "&apos;" => '\'',
        _ => return None,
    };
    Some(c)
}

/// `&#123;` or `&#x7B;`; code points outside the char range keep their text.
fn character_reference(text: &str) -> Option<char> {
    let body = text.strip_prefix("&#")?.strip_suffix(';')?;
    let code = match body.strip_prefix('x') {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => body.parse().ok()?,
    };
    char::from_u32(code)
}

/// `.5` → `0.5`, `5.` → `5.0`.
fn normalize_decimal(text: &str) -> String {
    let mut digits = String::with_capacity(text.len() + 2);
    if text.starts_with('.') {
        digits.push('0');
    }
    digits.push_str(text);
    if text.ends_with('.') {
        digits.push('0');
    }
    digits
}
