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

use crate::ast::TypeNode;
use crate::registry::ContractRegistry;
use crate::value::ContractValue;

/// The outcome of resolving one contract token.
///
/// Resolution never fails: a token that is neither a registry member
/// nor a literal comes back as its own raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Exact name hit in the contract registry.
    RegistryHit(ContractValue),

    /// The token parsed under the allowlisted literal grammar
    /// (numbers, strings, booleans, nil).
    LiteralParse(ContractValue),

    /// Last resort: the token text itself.
    RawText(String),
}

impl Resolution {
    /// Collapses the resolution into a displayable value.
    pub fn into_value(self) -> ContractValue {
        match self {
            Resolution::RegistryHit(value) => value,
            Resolution::LiteralParse(value) => value,
            Resolution::RawText(text) => ContractValue::Str(text),
        }
    }
}

/// Resolves a contract token to the value it denotes.
///
/// Lookup order: registry (case-sensitive, namespace prefix optional),
/// then the literal grammar, then the raw token itself. The literal
/// grammar is deliberately narrow - arbitrary expression evaluation is
/// out of scope for a documentation pass.
pub fn resolve(token: &str, registry: &ContractRegistry) -> Resolution {
    if let Some(value) = registry.get(token) {
        return Resolution::RegistryHit(value.clone());
    }
    if let Some(value) = parse_literal(token) {
        return Resolution::LiteralParse(value);
    }
    Resolution::RawText(token.to_string())
}

/// Resolves a contract syntax node structurally.
///
/// Hash and array literals resolve per element; indexed combinators
/// (either spelling) resolve their arguments and build a described
/// value when the base is a known combinator; plain names fall back to
/// token resolution.
pub fn resolve_node(node: &TypeNode, registry: &ContractRegistry) -> ContractValue {
    match node {
        TypeNode::Name(token) => resolve(token, registry).into_value(),

        TypeNode::Indexed { base, args } | TypeNode::Call { base, args } => {
            let resolved: Vec<ContractValue> = args
                .iter()
                .map(|a| resolve_node(a, registry))
                .collect();
            match registry.combinator_description(base, &resolved) {
                Some(description) => ContractValue::Custom {
                    name: node.source(),
                    description,
                },
                // Not a combinator we know: keep the source text.
                None => ContractValue::Str(node.source()),
            }
        }

        TypeNode::Hash(pairs) => ContractValue::Hash(
            pairs
                .iter()
                .map(|(k, v)| (k.clone(), resolve_node(v, registry)))
                .collect(),
        ),

        TypeNode::Array(items) => ContractValue::Array(
            items.iter().map(|v| resolve_node(v, registry)).collect(),
        ),

        // A pair never reaches value resolution whole; its sides are
        // resolved separately by the contract-list normalizer.
        TypeNode::Pair { .. } => ContractValue::Str(node.source()),
    }
}

/// The allowlisted literal grammar: numbers, quoted strings, booleans,
/// and nil/null. Everything else is rejected.
fn parse_literal(token: &str) -> Option<ContractValue> {
    let trimmed = token.trim();
    if trimmed == "nil" {
        return Some(ContractValue::Null);
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Null) => Some(ContractValue::Null),
        Ok(serde_json::Value::Bool(b)) => Some(ContractValue::Bool(b)),
        Ok(serde_json::Value::Number(n)) => n.as_f64().map(ContractValue::Number),
        Ok(serde_json::Value::String(s)) => Some(ContractValue::Str(s)),
        // Composite JSON is not part of the allowlist; composites come
        // in as syntax nodes, not tokens.
        _ => None,
    }
}
