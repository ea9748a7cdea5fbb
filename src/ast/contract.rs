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

/// Represents **one contract expression** as parsed from a contract
/// annotation, e.g. `Contract Num, Or[String, Symbol] => Bool`.
///
/// These are syntax nodes: no resolution has happened yet. The contract
/// sequence for a function ends in a `Pair` whose `param` side is the
/// final parameter contract and whose `result` side is the return
/// contract.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeNode {
    /// A plain contract name or literal token: `Num`, `"yes"`, `42`.
    Name(String),

    /// An indexed combinator: `Or[String, Symbol]`.
    Indexed { base: String, args: Vec<TypeNode> },

    /// The constructor-call workaround spelling: `ArrayOf.new(ArrayOf[Num])`.
    ///
    /// The upstream grammar misparses nested square brackets, so the
    /// source material documents this spelling as the escape hatch. It
    /// must render exactly like `Indexed`.
    Call { base: String, args: Vec<TypeNode> },

    /// A hash literal of per-key contracts: `{ name: String, age: Num }`.
    Hash(Vec<(String, TypeNode)>),

    /// An array literal of contracts: `[Num, Num]`.
    Array(Vec<TypeNode>),

    /// The trailing `param => result` entry of a contract sequence.
    Pair {
        param: Box<TypeNode>,
        result: Box<TypeNode>,
    },
}

impl TypeNode {
    /// Convenience constructor for plain names.
    pub fn name(text: impl Into<String>) -> Self {
        TypeNode::Name(text.into())
    }

    /// Convenience constructor for the trailing pair.
    pub fn pair(param: TypeNode, result: TypeNode) -> Self {
        TypeNode::Pair {
            param: Box::new(param),
            result: Box::new(result),
        }
    }

    /// Reconstructs canonical source text for the node.
    ///
    /// Indexed combinators and their `.new(...)` workaround spelling
    /// produce identical text (`Base[A, B]`, comma-space separated), so
    /// both documented spellings of a nested contract normalize to one
    /// rendered type.
    pub fn source(&self) -> String {
        match self {
            TypeNode::Name(text) => text.clone(),

            TypeNode::Indexed { base, args } | TypeNode::Call { base, args } => {
                let inner = args
                    .iter()
                    .map(|a| a.source())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}[{}]", base, inner)
            }

            TypeNode::Hash(pairs) => {
                let inner = pairs
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, v.source()))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{{{}}}", inner)
            }

            TypeNode::Array(items) => {
                let inner = items
                    .iter()
                    .map(|v| v.source())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("[{}]", inner)
            }

            TypeNode::Pair { param, result } => {
                format!("{} => {}", param.source(), result.source())
            }
        }
    }
}
