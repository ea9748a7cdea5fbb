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

use serde::Serialize;

use crate::ast::{ParamNode, TypeNode};
use crate::docstring::{Docstring, Tag, TagKind};
use crate::error::DocResult;
use crate::format::{ParamContracts, ParamDoc, ReturnDoc};
use crate::registry::ContractRegistry;

/// Whether the documented function is an instance or a class/static
/// method. Classified upstream from the declaration header; we only
/// carry the tag through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Scope {
    Instance,
    Class,
}

/// Everything the external source parser hands us for one function:
/// the declaration's parameters, the contract annotation preceding it,
/// and any hand-written docstring text.
#[derive(Debug, Clone)]
pub struct FunctionDecl {
    pub name: String,
    pub scope: Scope,
    pub params: Vec<ParamNode>,
    pub contracts: Vec<TypeNode>,
    pub docstring: String,
}

/// The finished documentation record for one function.
#[derive(Debug, Clone, Serialize)]
pub struct DocRecord {
    pub name: String,
    pub scope: Scope,
    pub docstring: Docstring,
}

/// Runs one documentation pass: align parameters with contracts, then
/// merge the generated tags into the hand-written docstring.
///
/// A failure here produces no record at all - never a partial stub.
pub fn document(decl: &FunctionDecl, registry: &ContractRegistry) -> DocResult<DocRecord> {
    let aligned = ParamContracts::new(&decl.params, &decl.contracts, registry)?;
    let params = aligned.params()?;
    let ret = aligned.ret();

    for hazard in aligned.hazards() {
        tracing::warn!(
            function = %decl.name,
            contract = %hazard,
            "ambiguous nested brackets; documented as literal source text"
        );
    }

    let mut doc = Docstring::parse(&decl.docstring);
    process_params(&mut doc, params);
    process_return(&mut doc, ret);

    Ok(DocRecord {
        name: decl.name.clone(),
        scope: decl.scope,
        docstring: doc,
    })
}

/// Documents a batch of functions. One function's failure is logged
/// and skipped; it never blocks the rest of the batch.
pub fn document_all(decls: &[FunctionDecl], registry: &ContractRegistry) -> Vec<DocRecord> {
    let mut records = Vec::with_capacity(decls.len());
    for decl in decls {
        match document(decl, registry) {
            Ok(record) => records.push(record),
            Err(error) => {
                tracing::warn!(function = %decl.name, %error, "skipping function documentation");
            }
        }
    }
    records
}

/// Merges produced params into existing tags, then adds the rest.
/// Merging first keeps duplicates out of the final docstring.
fn process_params(doc: &mut Docstring, mut params: Vec<ParamDoc>) {
    params.retain(|param| {
        match doc.tag_named_mut(&TagKind::Param, &param.name) {
            Some(tag) => {
                set_tag(tag, &param.type_text, &param.description);
                false
            }
            None => true,
        }
    });

    // Whatever the docstring didn't already mention, in declaration order.
    for param in params {
        doc.add_tag(Tag::param(param.name, param.type_text, param.description));
    }
}

fn process_return(doc: &mut Docstring, ret: ReturnDoc) {
    match doc.tag_mut(&TagKind::Return) {
        Some(tag) => set_tag(tag, &ret.type_text, &ret.description),
        None => doc.add_tag(Tag::ret(ret.type_text, ret.description)),
    }
}

/// Appends the produced type and prepends the produced description to
/// an existing tag. Hand-written text always survives at the end.
fn set_tag(tag: &mut Tag, type_text: &str, description: &str) {
    tag.types.push(type_text.to_string());
    if !description.is_empty() {
        tag.text = format!("{}. {}", description, tag.text);
    }
}
