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

/// Parameter descriptors:
/// - syntactic role + identifier per parameter
/// - nested groups for destructured parameters
pub mod param;

/// Contract expression nodes:
/// - plain names, indexed combinators, `.new(...)` calls
/// - hash / array literals
/// - the trailing `param => result` pair
pub mod contract;

pub use contract::TypeNode;
pub use param::{ParamKind, ParamNode};
