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

use crate::registry::NAMESPACE_PREFIX;
use crate::value::{ContractValue, Describable};

/// Renders a contract value into canonical text.
///
/// `full` controls how much detail an embedded value shows:
/// - full (used when the value is part of a nested rendering) keeps
///   everything and wraps custom descriptions in parentheses;
/// - non-full (used for a top-level annotation) keeps only rich
///   descriptions and suppresses plain or empty values entirely.
///
/// Hash- and array-shaped contracts always render full, element by
/// element. Pure: same input, same text.
pub fn render_value(value: &ContractValue, full: bool) -> String {
    match value {
        ContractValue::Hash(pairs) => {
            let inner = pairs
                .iter()
                .map(|(k, v)| format!("{}: {}", k, render_value(v, true)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{{{}}}", inner)
        }

        ContractValue::Array(items) => {
            let inner = items
                .iter()
                .map(|v| render_value(v, true))
                .collect::<Vec<_>>()
                .join(", ");
            format!("[{}]", inner)
        }

        other => wrap(other, full),
    }
}

/// Scalar rendering rules, applied in order:
/// 1. values with no useful description render empty unless `full`
/// 2. nil / empty string dump structurally
/// 3. plain scalars display as-is
/// 4. custom descriptions render parenthesized in full mode - the
///    parens mark a *description* rather than a literal value
/// 5. everything else dumps with the namespace prefix stripped
fn wrap(value: &ContractValue, full: bool) -> String {
    let description = value.description();

    if !full && description.is_none() {
        return String::new();
    }
    if value.is_empty_value() {
        return value.dump();
    }
    if value.is_plain() {
        return value.display();
    }
    if let Some(text) = description {
        return if full { format!("({})", text) } else { text };
    }

    let dumped = value.dump();
    match dumped.strip_prefix(NAMESPACE_PREFIX) {
        Some(stripped) => stripped.to_string(),
        None => dumped,
    }
}
