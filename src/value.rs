/*
 * ==========================================================================
 * CONTRACT-DOCS - Contracts, Documented!
 * ==========================================================================
 *
 * License:
 * This file is part of the contract-docs project.
 *
 * contract-docs is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::fmt;

/// Resolved contract value representation.
///
/// This is the core type that flows through the renderer.
/// Every contract token ultimately resolves to one of these.
#[derive(Clone, PartialEq)]
pub enum ContractValue {
    // Primitive scalars
    Null,
    Bool(bool),
    Number(f64),
    Str(String),

    /// A bare type / class contract with no custom self-description
    /// (e.g. `Num`, `Bool`). The name may carry the well-known
    /// `Contracts::` namespace prefix.
    Type { name: String },

    /// A custom validator object that describes itself
    /// (e.g. `Stringy` → "A String or Symbol").
    Custom { name: String, description: String },

    /// Hash-shaped contract: per-key sub-contracts, insertion-ordered.
    Hash(Vec<(String, ContractValue)>),

    /// Array-shaped contract: per-element sub-contracts.
    Array(Vec<ContractValue>),
}

/// Capability trait for contract values that carry a useful, custom
/// textual self-description. Absence is the "plain" case.
pub trait Describable {
    fn description(&self) -> Option<String>;
}

impl Describable for ContractValue {
    fn description(&self) -> Option<String> {
        match self {
            ContractValue::Custom { description, .. } if !description.is_empty() => {
                Some(description.clone())
            }
            _ => None,
        }
    }
}

impl ContractValue {
    /// Returns a stable type name string (useful for errors).
    pub fn kind_name(&self) -> &'static str {
        match self {
            ContractValue::Null => "Null",
            ContractValue::Bool(_) => "Bool",
            ContractValue::Number(_) => "Number",
            ContractValue::Str(_) => "Str",
            ContractValue::Type { .. } => "Type",
            ContractValue::Custom { .. } => "Custom",
            ContractValue::Hash(_) => "Hash",
            ContractValue::Array(_) => "Array",
        }
    }

    /// True for values that can never carry a custom self-description
    /// (scalars). Types and custom validators are *not* plain.
    pub fn is_plain(&self) -> bool {
        matches!(
            self,
            ContractValue::Bool(_) | ContractValue::Number(_) | ContractValue::Str(_)
        )
    }

    /// True for the empty/absent values: nil and the empty string.
    pub fn is_empty_value(&self) -> bool {
        match self {
            ContractValue::Null => true,
            ContractValue::Str(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Structural dump of the value (quotes strings, keeps namespace
    /// prefixes). Deterministic: same value → same text.
    pub fn dump(&self) -> String {
        match self {
            ContractValue::Null => "nil".to_string(),
            ContractValue::Bool(b) => b.to_string(),
            ContractValue::Number(n) => format_number(*n),
            ContractValue::Str(s) => format!("\"{}\"", s),
            ContractValue::Type { name } => name.clone(),
            ContractValue::Custom { name, .. } => name.clone(),

            ContractValue::Hash(pairs) => {
                let inner = pairs
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, v.dump()))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{{{}}}", inner)
            }

            ContractValue::Array(values) => {
                let inner = values
                    .iter()
                    .map(|v| v.dump())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("[{}]", inner)
            }
        }
    }

    /// Human-ish string form: strings are unquoted, custom validators
    /// yield their description, everything else matches `dump`.
    pub fn display(&self) -> String {
        match self {
            ContractValue::Str(s) => s.clone(),
            ContractValue::Custom { description, .. } if !description.is_empty() => {
                description.clone()
            }
            other => other.dump(),
        }
    }
}

impl fmt::Debug for ContractValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractValue::Null => write!(f, "Null"),
            ContractValue::Bool(b) => write!(f, "Bool({})", b),
            ContractValue::Number(n) => write!(f, "Number({})", n),
            ContractValue::Str(s) => write!(f, "Str({})", s),
            ContractValue::Type { name } => write!(f, "[Type {}]", name),
            ContractValue::Custom { name, .. } => write!(f, "[Custom {}]", name),
            ContractValue::Hash(pairs) => write!(f, "[Hash len={}]", pairs.len()),
            ContractValue::Array(values) => write!(f, "[Array len={}]", values.len()),
        }
    }
}

/// Numbers print like integers when they are whole; contract literals
/// are almost always small integers.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_quotes_strings_and_display_does_not() {
        let v = ContractValue::Str("hello".to_string());
        assert_eq!(v.dump(), "\"hello\"");
        assert_eq!(v.display(), "hello");
    }

    #[test]
    fn dump_renders_composites_in_order() {
        let v = ContractValue::Hash(vec![
            ("name".to_string(), ContractValue::Type { name: "String".to_string() }),
            ("age".to_string(), ContractValue::Number(42.0)),
        ]);
        assert_eq!(v.dump(), "{name: String, age: 42}");

        let v = ContractValue::Array(vec![
            ContractValue::Bool(true),
            ContractValue::Null,
        ]);
        assert_eq!(v.dump(), "[true, nil]");
    }

    #[test]
    fn describable_is_some_only_for_custom_with_text() {
        let custom = ContractValue::Custom {
            name: "Stringy".to_string(),
            description: "A String or Symbol".to_string(),
        };
        assert_eq!(custom.description().as_deref(), Some("A String or Symbol"));

        let blank = ContractValue::Custom {
            name: "Opaque".to_string(),
            description: String::new(),
        };
        assert!(blank.description().is_none());
        assert!(ContractValue::Type { name: "Num".to_string() }.description().is_none());
        assert!(ContractValue::Number(1.0).description().is_none());
    }

    #[test]
    fn plain_and_empty_classification() {
        assert!(ContractValue::Number(1.0).is_plain());
        assert!(!ContractValue::Type { name: "Num".to_string() }.is_plain());
        assert!(ContractValue::Null.is_empty_value());
        assert!(ContractValue::Str(String::new()).is_empty_value());
        assert!(!ContractValue::Str("x".to_string()).is_empty_value());
    }
}
