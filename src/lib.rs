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

//! Turns contract annotations attached to function declarations into
//! docstring tags.
//!
//! The pipeline:
//! ```text
//! params + contracts → normalize → align → render → merge into docstring
//! ```
//!
//! An external source parser hands us parameter descriptors and contract
//! syntax nodes; we hand back a finished documentation record. Nothing in
//! here enforces contracts at runtime - this crate only *describes* them.

/// Error type shared across the pipeline:
/// - stable error codes
/// - optional help text
pub mod error;

/// Resolved contract values:
/// - scalars, bare types, custom validators
/// - hash / array composites
/// - the `Describable` capability trait
pub mod value;

/// Syntax-side data model:
/// - parameter descriptors (role + name, nested groups)
/// - contract expression nodes (`Or[A, B]`, hash / array literals, pairs)
pub mod ast;

/// The well-known contract registry:
/// - builtin contract names
/// - user registrations (programmatic or JSON)
/// - combinator descriptions (`Or`, `And`, `ArrayOf`, ...)
pub mod registry;

/// Token → value resolution:
/// - registry lookup
/// - allowlisted literal grammar
/// - raw-text fallback (never fails)
pub mod resolver;

/// Formatting and alignment:
/// - value rendering (full / non-full)
/// - parameter-list flattening
/// - contract-list splitting and type rendering
/// - the parameter/contract alignment engine
pub mod format;

/// Docstring tags:
/// - parse raw docstring text into a tag collection
/// - tag lookup and mutation primitives
pub mod docstring;

/// The handler that drives one documentation pass per function and
/// merges generated tags into hand-written ones.
pub mod handler;

pub use error::{DocError, DocResult};
pub use handler::{document, document_all, DocRecord, FunctionDecl, Scope};
pub use registry::ContractRegistry;
