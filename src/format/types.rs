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

use regex::Regex;

use crate::ast::TypeNode;
use crate::error::{DocError, DocResult};

/// Nested opening brackets before a close, e.g. `ArrayOf[ArrayOf[Num]]`.
/// The upstream declaration grammar misparses this spelling.
const NESTED_BRACKETS: &str = r"\[[^\[\]]*\[";

/// One positional contract entry: source text plus its syntax node.
#[derive(Debug, Clone)]
pub struct ContractEntry {
    pub source: String,
    pub node: TypeNode,
}

impl ContractEntry {
    fn from_node(node: &TypeNode) -> Self {
        Self {
            source: node.source(),
            node: node.clone(),
        }
    }
}

/// The normalized contract sequence for one function: per-parameter
/// entries plus the return entry extracted from the trailing
/// `param => result` pair.
#[derive(Debug, Clone)]
pub struct TypeList {
    entries: Vec<ContractEntry>,
    result: ContractEntry,

    /// Source texts flagged as the ambiguous nested-bracket spelling.
    /// Documentation for these degrades to the literal source text.
    hazards: Vec<String>,
}

impl TypeList {
    /// Splits a contract-node sequence into parameter entries and the
    /// return entry. Every sequence must end in a `param => result`
    /// pair; anything else is malformed source material.
    pub fn split(contracts: &[TypeNode]) -> DocResult<Self> {
        let (last, init) = contracts
            .split_last()
            .ok_or_else(|| DocError::contract_list("empty contract sequence"))?;

        let mut entries: Vec<ContractEntry> =
            init.iter().map(ContractEntry::from_node).collect();

        let result = match last {
            TypeNode::Pair { param, result } => {
                entries.push(ContractEntry::from_node(param));
                ContractEntry::from_node(result)
            }
            other => {
                return Err(DocError::contract_list(format!(
                    "contract sequence must end in `param => result`, found `{}`",
                    other.source()
                ))
                .with_help("write the final contract as `LastParam => Return`"));
            }
        };

        let nested = Regex::new(NESTED_BRACKETS).expect("hard-coded pattern");
        let hazards = entries
            .iter()
            .chain(std::iter::once(&result))
            .filter(|e| matches!(e.node, TypeNode::Indexed { .. }) && nested.is_match(&e.source))
            .map(|e| e.source.clone())
            .collect();

        Ok(Self {
            entries,
            result,
            hazards,
        })
    }

    /// The per-parameter contract entries, in positional order.
    pub fn entries(&self) -> &[ContractEntry] {
        &self.entries
    }

    /// The return contract entry.
    pub fn result(&self) -> &ContractEntry {
        &self.result
    }

    /// Entries flagged as the ambiguous nested-bracket spelling.
    pub fn hazards(&self) -> &[String] {
        &self.hazards
    }

    /// Whether a given entry source was flagged as ambiguous.
    pub fn hazardous(&self, source: &str) -> bool {
        self.hazards.iter().any(|h| h == source)
    }
}

/// Displayable form of one contract type.
///
/// Hash-shaped types stay structured until the alignment engine is done
/// with them - keyword bags pop per-key type text out by name. The
/// sentinel marks a keyword bag whose per-key information is lost.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRepr {
    Text(String),
    Hash(Vec<(String, String)>),
    Sentinel,
}

impl TypeRepr {
    /// Final display text for the type.
    pub fn render(&self) -> String {
        match self {
            TypeRepr::Text(text) => text.clone(),
            TypeRepr::Hash(pairs) => {
                let inner = pairs
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, v))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{{{}}}", inner)
            }
            TypeRepr::Sentinel => "?".to_string(),
        }
    }

    /// Pops the type text for one key out of a hash-shaped repr.
    /// Non-hash reprs are reused verbatim for every key.
    pub fn pop_key(&mut self, key: &str) -> Option<String> {
        match self {
            TypeRepr::Hash(pairs) => {
                let idx = pairs.iter().position(|(k, _)| k == key)?;
                Some(pairs.remove(idx).1)
            }
            TypeRepr::Sentinel => Some("?".to_string()),
            TypeRepr::Text(text) => Some(text.clone()),
        }
    }
}

/// Renders a contract syntax node into its displayable type.
///
/// Hash literals render per key so keyword bags can be drained by name;
/// array literals render as a sequence literal; everything else renders
/// its canonical source text.
pub fn render_type(node: &TypeNode) -> TypeRepr {
    match node {
        TypeNode::Hash(pairs) => TypeRepr::Hash(
            pairs
                .iter()
                .map(|(k, v)| (k.clone(), render_type_text(v)))
                .collect(),
        ),

        TypeNode::Array(items) => {
            let inner = items
                .iter()
                .map(render_type_text)
                .collect::<Vec<_>>()
                .join(", ");
            TypeRepr::Text(format!("[{}]", inner))
        }

        other => TypeRepr::Text(other.source()),
    }
}

fn render_type_text(node: &TypeNode) -> String {
    render_type(node).render()
}
