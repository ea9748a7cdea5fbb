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

use crate::ast::{ParamKind, ParamNode};

/// Flattens a declared-parameter sequence into `(role, name)` pairs.
///
/// Absent slots are skipped, destructuring groups are expanded in their
/// internal order, and roles pass through untouched. Declaration order
/// is preserved.
pub fn flatten(params: &[ParamNode]) -> Vec<(ParamKind, String)> {
    let mut flat = Vec::new();
    for param in params {
        push_flat(param, &mut flat);
    }
    flat
}

fn push_flat(param: &ParamNode, flat: &mut Vec<(ParamKind, String)>) {
    match param {
        ParamNode::Absent => {}
        ParamNode::Ident { kind, name } => flat.push((*kind, name.clone())),
        ParamNode::Group(members) => {
            for member in members {
                push_flat(member, flat);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_in_declaration_order() {
        let params = vec![
            ParamNode::required("one"),
            ParamNode::ident(ParamKind::Optional, "two"),
            ParamNode::keyword("three"),
        ];
        assert_eq!(
            flatten(&params),
            vec![
                (ParamKind::Required, "one".to_string()),
                (ParamKind::Optional, "two".to_string()),
                (ParamKind::Keyword, "three".to_string()),
            ]
        );
    }

    #[test]
    fn expands_groups_and_skips_absent_slots() {
        let params = vec![
            ParamNode::Absent,
            ParamNode::Group(vec![
                ParamNode::required("a"),
                ParamNode::Absent,
                ParamNode::Group(vec![ParamNode::required("b")]),
            ]),
            ParamNode::required("c"),
        ];
        let names: Vec<String> = flatten(&params).into_iter().map(|(_, n)| n).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_input_flattens_to_nothing() {
        assert!(flatten(&[]).is_empty());
    }
}
