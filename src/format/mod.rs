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

/// Value rendering:
/// - full vs. non-full mode
/// - paren-wrapped custom descriptions
/// - namespace prefix stripping
pub mod value;

/// Parameter-list flattening:
/// - nested destructuring groups → flat `(role, name)` pairs
pub mod params;

/// Contract-list splitting and type rendering:
/// - per-parameter entries + the trailing return contract
/// - nested hash / array type display
/// - the nested-bracket parse hazard
pub mod types;

/// The alignment engine:
/// - lock-step walk of parameters and contract entries
/// - keyword-bag state machine
pub mod align;

pub use align::{ParamContracts, ParamDoc, ReturnDoc};
pub use params::flatten;
pub use types::{ContractEntry, TypeList, TypeRepr};
pub use value::render_value;
