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

/// Result alias used across the documentation pipeline.
pub type DocResult<T> = Result<T, DocError>;

#[derive(Debug, Clone)]
pub struct DocError {
    /// Stable error code (E_ALIGNMENT, E_CONTRACT_LIST, …)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Optional note / help text
    pub help: Option<String>,
}

impl DocError {
    /// Generic constructor
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            help: None,
        }
    }

    /// Alignment error (parameter count and contract count disagree)
    pub fn alignment(message: impl Into<String>) -> Self {
        Self::new("E_ALIGNMENT", message)
    }

    /// Contract-list error (malformed contract sequence, e.g. no
    /// trailing `param => result` pair)
    pub fn contract_list(message: impl Into<String>) -> Self {
        Self::new("E_CONTRACT_LIST", message)
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for DocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)?;
        if let Some(help) = &self.help {
            write!(f, " (help: {})", help)?;
        }
        Ok(())
    }
}

impl std::error::Error for DocError {}
