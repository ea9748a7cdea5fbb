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

/// Syntactic role of one declared parameter, as classified by the
/// external source parser.
///
/// The upstream grammar cannot always distinguish a double-splat
/// (keyword-bag) parameter from a plain required identifier; both may
/// arrive tagged `Required`. The alignment engine resolves that
/// ambiguity with a best-effort heuristic (see `format::align`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Plain positional parameter: `one`
    Required,

    /// Positional parameter with a default: `one = 5`
    Optional,

    /// Rest/splat parameter: `*rest`
    Splat,

    /// Required keyword parameter: `name:`
    Keyword,

    /// Keyword parameter with a default: `name: "x"`
    KeywordOptional,

    /// Keyword-bag parameter: `**opts`
    DoubleSplat,
}

impl ParamKind {
    /// True for the explicitly named keyword roles - the ones whose
    /// contract is popped out of a shared keyword bag by name.
    pub fn is_named(self) -> bool {
        matches!(self, ParamKind::Keyword | ParamKind::KeywordOptional)
    }
}

/// Represents **one declared parameter slot** handed to us by the
/// external source parser.
///
/// Destructured parameters arrive as nested groups; absent slots
/// (trailing separators and the like) arrive as `Absent` and are
/// skipped during normalization.
#[derive(Debug, Clone)]
pub enum ParamNode {
    /// A leaf identifier with its syntactic role.
    Ident { kind: ParamKind, name: String },

    /// A nested grouping of parameters, e.g. `(a, (b, c))`.
    Group(Vec<ParamNode>),

    /// An absent slot; normalization drops it.
    Absent,
}

impl ParamNode {
    /// Convenience constructor for the common leaf case.
    pub fn ident(kind: ParamKind, name: impl Into<String>) -> Self {
        ParamNode::Ident {
            kind,
            name: name.into(),
        }
    }

    /// Shorthand for a plain required parameter.
    pub fn required(name: impl Into<String>) -> Self {
        ParamNode::ident(ParamKind::Required, name)
    }

    /// Shorthand for a required keyword parameter.
    pub fn keyword(name: impl Into<String>) -> Self {
        ParamNode::ident(ParamKind::Keyword, name)
    }
}
