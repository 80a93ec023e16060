use std::fmt::{self, Write as _};

use serde::Serialize;

/// The three annotations which make up an SRV record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SrvField {
    Priority,
    Weight,
    Port,
}

impl SrvField {
    pub fn name(&self) -> &'static str {
        match self {
            SrvField::Priority => "priority",
            SrvField::Weight => "weight",
            SrvField::Port => "port",
        }
    }

    /// Field label used in parse failure messages.
    ///
    /// Consumers match on these messages, so the priority label keeps its historical spelling.
    fn parse_label(&self) -> &'static str {
        match self {
            SrvField::Priority => "priorty",
            other => other.name(),
        }
    }
}

impl fmt::Display for SrvField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Double quoted rendering of a raw annotation value.
///
/// Printable characters are kept as is. Quotes, backslashes and control characters are escaped as
/// Go's `%q` verb does, so existing consumers see byte-identical messages.
#[derive(Debug, Clone, Copy)]
pub struct Quoted<'a>(pub &'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for c in self.0.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\u{07}' => f.write_str("\\a")?,
                '\u{08}' => f.write_str("\\b")?,
                '\u{0c}' => f.write_str("\\f")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                '\u{0b}' => f.write_str("\\v")?,
                ' ' => f.write_char(' ')?,
                c if c.is_ascii_control() => write!(f, "\\x{:02x}", c as u32)?,
                c if c.is_control() || c.is_whitespace() => {
                    if (c as u32) < 0x10000 {
                        write!(f, "\\u{:04x}", c as u32)?
                    } else {
                        write!(f, "\\U{:08x}", c as u32)?
                    }
                }
                c => f.write_char(c)?,
            }
        }
        f.write_char('"')
    }
}

/// Broad category of an [`AnnotationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// A required annotation was not present.
    Absent,

    /// An annotation was present, but could not be parsed.
    Parse,

    /// An annotation was parsed, but the value is outside of the accepted interval.
    Range,
}

/// Errors produced while extracting DNS settings from annotations.
///
/// Raw annotation values are embedded quoted, as they appeared on the resource.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnnotationError {
    #[error("{} is not a valid TTL value", Quoted(.value))]
    InvalidTtl { value: String },

    #[error("TTL value must be between [{min}, {max}]")]
    TtlOutOfRange { min: i64, max: i64 },

    #[error("must specify {field} value for SRV record. service {}", Quoted(.service))]
    MissingSrvField { field: SrvField, service: String },

    #[error(
        "{} value must be int number, got {}. service {}",
        .field.parse_label(),
        Quoted(.value),
        Quoted(.service)
    )]
    InvalidSrvField {
        field: SrvField,
        value: String,
        service: String,
    },

    #[error(
        "port value must be between [{min}, {max}], got {}. service {}",
        Quoted(.value),
        Quoted(.service)
    )]
    SrvPortOutOfRange {
        min: i64,
        max: i64,
        value: String,
        service: String,
    },
}

impl AnnotationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnnotationError::MissingSrvField { .. } => ErrorKind::Absent,
            AnnotationError::InvalidTtl { .. } | AnnotationError::InvalidSrvField { .. } => {
                ErrorKind::Parse
            }
            AnnotationError::TtlOutOfRange { .. } | AnnotationError::SrvPortOutOfRange { .. } => {
                ErrorKind::Range
            }
        }
    }

    /// The SRV field this error refers to, if any.
    pub fn srv_field(&self) -> Option<SrvField> {
        match self {
            AnnotationError::MissingSrvField { field, .. }
            | AnnotationError::InvalidSrvField { field, .. } => Some(*field),
            AnnotationError::SrvPortOutOfRange { .. } => Some(SrvField::Port),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_parse_label_is_historical() {
        let error = AnnotationError::InvalidSrvField {
            field: SrvField::Priority,
            value: "foo".into(),
            service: "testSvc".into(),
        };
        assert_eq!(
            error.to_string(),
            r#"priorty value must be int number, got "foo". service "testSvc""#
        );
        assert_eq!(error.kind(), ErrorKind::Parse);
    }

    #[test]
    fn missing_field_uses_correct_spelling() {
        let error = AnnotationError::MissingSrvField {
            field: SrvField::Priority,
            service: "testSvc".into(),
        };
        assert_eq!(
            error.to_string(),
            r#"must specify priority value for SRV record. service "testSvc""#
        );
        assert_eq!(error.kind(), ErrorKind::Absent);
        assert_eq!(error.srv_field(), Some(SrvField::Priority));
    }

    #[test]
    fn quoted_values_escape_like_go() {
        let error = AnnotationError::InvalidTtl {
            value: "a\"b".into(),
        };
        assert_eq!(error.to_string(), r#""a\"b" is not a valid TTL value"#);
    }

    #[test]
    fn control_characters_escape_like_go() {
        assert_eq!(Quoted("\u{7f}").to_string(), r#""\x7f""#);
        assert_eq!(Quoted("a\tb\nc").to_string(), r#""a\tb\nc""#);
        assert_eq!(Quoted("\u{1}").to_string(), r#""\x01""#);
        assert_eq!(Quoted("\\").to_string(), r#""\\""#);
        assert_eq!(Quoted("\u{a0}").to_string(), r#""\u00a0""#);
        assert_eq!(Quoted("\u{85}").to_string(), r#""\u0085""#);
        assert_eq!(Quoted("caf\u{e9} 10m").to_string(), "\"caf\u{e9} 10m\"");

        let error = AnnotationError::InvalidTtl {
            value: "\u{7f}".into(),
        };
        assert_eq!(error.to_string(), r#""\x7f" is not a valid TTL value"#);
    }

    #[test]
    fn range_errors() {
        let error = AnnotationError::TtlOutOfRange {
            min: 1,
            max: 4294967295,
        };
        assert_eq!(
            error.to_string(),
            "TTL value must be between [1, 4294967295]"
        );
        assert_eq!(error.kind(), ErrorKind::Range);
        assert_eq!(error.srv_field(), None);
    }
}
