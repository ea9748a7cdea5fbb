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

use std::collections::HashMap;

use serde::Deserialize;

use crate::value::ContractValue;

/// The well-known namespace that builtin contracts live under. It is
/// stripped from structural dumps at render time.
pub const NAMESPACE_PREFIX: &str = "Contracts::";

/// Builtin contract names that carry no custom self-description.
const BUILTIN_TYPES: &[&str] = &[
    "Num", "Pos", "Neg", "Nat", "Int", "Float", "Bool", "Any", "None",
];

/// Name → value lookup for well-known and user-registered contracts.
///
/// Populated once at startup and treated as read-only by the pipeline;
/// lookups are exact and case-sensitive. The `Contracts::` prefix is
/// accepted but not required on lookup.
#[derive(Debug, Clone)]
pub struct ContractRegistry {
    values: HashMap<String, ContractValue>,
}

/// One user registration as loaded from JSON: the contract's display
/// name mapped to its self-description.
#[derive(Debug, Deserialize)]
struct CustomContract {
    name: String,
    #[serde(default)]
    description: String,
}

impl ContractRegistry {
    /// An empty registry. Mostly useful in tests.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// A registry seeded with the builtin contract set.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for name in BUILTIN_TYPES {
            registry.register(
                *name,
                ContractValue::Type {
                    name: format!("{}{}", NAMESPACE_PREFIX, name),
                },
            );
        }
        registry
    }

    /// Registers a named contract value, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, value: ContractValue) {
        self.values.insert(name.into(), value);
    }

    /// Registers a custom validator that describes itself.
    pub fn register_custom(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) {
        let name = name.into();
        let value = ContractValue::Custom {
            name: name.clone(),
            description: description.into(),
        };
        self.register(name, value);
    }

    /// Loads user registrations from a JSON array:
    /// `[{"name": "Stringy", "description": "A String or Symbol"}, …]`
    pub fn register_from_json(&mut self, raw: &str) -> Result<(), serde_json::Error> {
        let entries: Vec<CustomContract> = serde_json::from_str(raw)?;
        for entry in entries {
            self.register_custom(entry.name, entry.description);
        }
        Ok(())
    }

    /// Exact-name lookup; the well-known namespace prefix is optional.
    pub fn get(&self, name: &str) -> Option<&ContractValue> {
        if let Some(value) = self.values.get(name) {
            return Some(value);
        }
        if let Some(bare) = name.strip_prefix(NAMESPACE_PREFIX) {
            return self.values.get(bare);
        }
        None
    }

    /// Builds the generated description for an indexed combinator over
    /// already-resolved argument values, if the base is a combinator we
    /// know. `None` means "not a combinator" and the caller falls back
    /// to the raw source text.
    pub fn combinator_description(
        &self,
        base: &str,
        args: &[ContractValue],
    ) -> Option<String> {
        let shown: Vec<String> = args.iter().map(|a| a.display()).collect();
        match base {
            "Or" => Some(shown.join(" or ")),
            "And" => Some(shown.join(" and ")),
            "Xor" => Some(shown.join(" xor ")),
            "Not" => Some(format!("not {}", shown.join(", "))),
            "Maybe" => Some(format!("{} or nil", shown.join(", "))),
            "ArrayOf" => Some(format!("An array of {}", shown.join(", "))),
            "HashOf" => match shown.as_slice() {
                [k, v] => Some(format!("Hash<{}, {}>", k, v)),
                _ => Some(format!("Hash<{}>", shown.join(", "))),
            },
            _ => None,
        }
    }
}

impl Default for ContractRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookup_with_and_without_prefix() {
        let registry = ContractRegistry::builtin();
        let hit = registry.get("Num").unwrap();
        assert_eq!(hit, &ContractValue::Type { name: "Contracts::Num".to_string() });
        assert_eq!(registry.get("Contracts::Num"), Some(hit));
        assert!(registry.get("num").is_none());
        assert!(registry.get("Missing").is_none());
    }

    #[test]
    fn register_from_json_adds_custom_contracts() {
        let mut registry = ContractRegistry::builtin();
        registry
            .register_from_json(
                r#"[{"name": "Stringy", "description": "A String or Symbol"},
                    {"name": "Opaque"}]"#,
            )
            .unwrap();

        match registry.get("Stringy").unwrap() {
            ContractValue::Custom { description, .. } => {
                assert_eq!(description, "A String or Symbol");
            }
            other => panic!("expected Custom, got {:?}", other),
        }
        assert!(registry.get("Opaque").is_some());
    }

    #[test]
    fn combinator_descriptions() {
        let registry = ContractRegistry::builtin();
        let args = vec![
            ContractValue::Str("TrueClass".to_string()),
            ContractValue::Str("FalseClass".to_string()),
        ];
        assert_eq!(
            registry.combinator_description("Or", &args).as_deref(),
            Some("TrueClass or FalseClass")
        );
        assert_eq!(
            registry.combinator_description("HashOf", &args).as_deref(),
            Some("Hash<TrueClass, FalseClass>")
        );
        assert!(registry.combinator_description("Weird", &args).is_none());
    }
}
