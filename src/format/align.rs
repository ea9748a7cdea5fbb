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

/*
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * Walks declared parameters and contract entries in lock-step and
 * produces one (name, type, description) triple per parameter plus one
 * return pair.
 *
 * The tricky part is keyword parameters. The upstream grammar reports a
 * double-splat bag with the same role as a plain required identifier,
 * and every keyword-style parameter shares a single contract entry (the
 * "bag"). The first keyword-compatible entry decides everything:
 *
 *   - hash-shaped bag → individual keys are popped out by name
 *   - anything else   → per-key information is lost; every remaining
 *                       keyword parameter gets the `?` sentinel
 *
 * That tie-break is a best-effort heuristic inherited from the source
 * grammar. It is preserved exactly, not "improved".
 * --------------------------------------------------------------------------
 */

use crate::ast::{ParamKind, ParamNode, TypeNode};
use crate::error::{DocError, DocResult};
use crate::format::params::flatten;
use crate::format::types::{render_type, ContractEntry, TypeList, TypeRepr};
use crate::format::value::render_value;
use crate::registry::ContractRegistry;
use crate::resolver::resolve_node;
use crate::value::ContractValue;

/// One aligned parameter: name, displayable type, wrapped description.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamDoc {
    pub name: String,
    pub type_text: String,
    pub description: String,
}

/// The aligned return contract.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnDoc {
    pub type_text: String,
    pub description: String,
}

/// Keyword-bag state threaded through the alignment loop.
#[derive(Debug)]
enum BagState {
    /// No keyword-style parameter seen yet.
    NoBag,

    /// The shared bag entry resolved to a hash: keys are popped out by
    /// name as each keyword parameter is matched.
    Open {
        values: Vec<(String, ContractValue)>,
        types: TypeRepr,
    },

    /// The shared bag entry was not a hash: per-key information cannot
    /// be recovered. Every further bag-drained parameter renders `?`.
    Sentinel,
}

/// Aligns a function's declared parameters with its contract entries.
pub struct ParamContracts<'a> {
    params: Vec<(ParamKind, String)>,
    list: TypeList,
    registry: &'a ContractRegistry,
}

impl<'a> ParamContracts<'a> {
    pub fn new(
        params: &[ParamNode],
        contracts: &[TypeNode],
        registry: &'a ContractRegistry,
    ) -> DocResult<Self> {
        Ok(Self {
            params: flatten(params),
            list: TypeList::split(contracts)?,
            registry,
        })
    }

    /// Contract entry sources flagged as the ambiguous nested-bracket
    /// spelling; these degraded to their literal source text.
    pub fn hazards(&self) -> &[String] {
        self.list.hazards()
    }

    /// Produces the aligned per-parameter triples, in declaration order.
    pub fn params(&self) -> DocResult<Vec<ParamDoc>> {
        let entries = self.list.entries();
        let mut docs = Vec::with_capacity(self.params.len());
        let mut i = 0;
        let mut bag = BagState::NoBag;

        for (kind, name) in &self.params {
            let bag_open = !matches!(bag, BagState::NoBag);

            // A double-splat arrives from the upstream grammar with the
            // same role as a required positional, so a required role
            // continues the bag once one is open.
            let on_named = kind.is_named()
                || *kind == ParamKind::DoubleSplat
                || (bag_open && *kind == ParamKind::Required);

            let (con, repr) = if on_named {
                if !bag_open {
                    // First keyword-compatible parameter: consume the
                    // shared bag entry. The cursor stays on it while
                    // the bag drains.
                    let entry = self.fetch(entries, i, name)?;
                    i += 1;
                    let (con, repr) = self.resolve_entry(entry);
                    bag = match con {
                        ContractValue::Hash(values) => BagState::Open {
                            values,
                            types: repr,
                        },
                        _ => BagState::Sentinel,
                    };
                }
                self.drain_bag(&mut bag, *kind, name)
            } else {
                let entry = self.fetch(entries, i, name)?;
                i += 1;
                self.resolve_entry(entry)
            };

            docs.push(ParamDoc {
                name: name.clone(),
                type_text: repr.render(),
                description: wrap_description(&con),
            });
        }

        // Leftover positional entries mean the source material declared
        // more contracts than parameters. The one sanctioned leftover
        // is the zero-argument convention `Contract nil => X`.
        if i < entries.len() {
            let leftover = &entries[i..];
            let zero_arg = self.params.is_empty()
                && leftover.len() == 1
                && leftover[0].source == "nil";
            if !zero_arg {
                return Err(DocError::alignment(format!(
                    "{} contract entr{} left over after {} parameter{}",
                    leftover.len(),
                    if leftover.len() == 1 { "y" } else { "ies" },
                    self.params.len(),
                    if self.params.len() == 1 { "" } else { "s" },
                )));
            }
        }

        Ok(docs)
    }

    /// Produces the aligned return pair.
    pub fn ret(&self) -> ReturnDoc {
        let (con, repr) = self.resolve_entry(self.list.result());
        ReturnDoc {
            type_text: repr.render(),
            description: wrap_description(&con),
        }
    }

    fn fetch<'e>(
        &self,
        entries: &'e [ContractEntry],
        i: usize,
        param: &str,
    ) -> DocResult<&'e ContractEntry> {
        entries.get(i).ok_or_else(|| {
            DocError::alignment(format!(
                "no contract entry left for parameter `{}` (have {})",
                param,
                entries.len()
            ))
            .with_help("declare one contract per parameter, then `=> Return`")
        })
    }

    /// Resolves one contract entry to its value and displayable type.
    /// Hazardous entries degrade to their literal source text.
    fn resolve_entry(&self, entry: &ContractEntry) -> (ContractValue, TypeRepr) {
        if self.list.hazardous(&entry.source) {
            return (
                ContractValue::Str(entry.source.clone()),
                TypeRepr::Text(entry.source.clone()),
            );
        }
        (
            resolve_node(&entry.node, self.registry),
            render_type(&entry.node),
        )
    }

    /// Pulls this parameter's share out of the open bag.
    fn drain_bag(
        &self,
        bag: &mut BagState,
        kind: ParamKind,
        name: &str,
    ) -> (ContractValue, TypeRepr) {
        match bag {
            BagState::Open { values, types } => {
                if kind.is_named() {
                    match remove_key(values, name) {
                        Some(value) => {
                            let type_text = types
                                .pop_key(name)
                                .unwrap_or_else(|| "?".to_string());
                            (value, TypeRepr::Text(type_text))
                        }
                        // Key missing from the bag: information loss.
                        None => sentinel(),
                    }
                } else {
                    // Generic bag placeholder (double-splat): reuse the
                    // whole remaining bag verbatim.
                    (ContractValue::Hash(values.clone()), types.clone())
                }
            }
            BagState::Sentinel => sentinel(),
            BagState::NoBag => unreachable!("drain_bag called with no open bag"),
        }
    }
}

fn sentinel() -> (ContractValue, TypeRepr) {
    (ContractValue::Str("?".to_string()), TypeRepr::Sentinel)
}

fn remove_key(
    values: &mut Vec<(String, ContractValue)>,
    key: &str,
) -> Option<ContractValue> {
    let idx = values.iter().position(|(k, _)| k == key)?;
    Some(values.remove(idx).1)
}

/// Non-empty descriptions are wrapped `+like this+` to mark rich text
/// (and to escape characters like curly brackets downstream).
fn wrap_description(con: &ContractValue) -> String {
    let desc = render_value(con, false);
    if desc.is_empty() {
        String::new()
    } else {
        format!("+{}+", desc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ParamKind, ParamNode, TypeNode};

    fn registry() -> ContractRegistry {
        let mut registry = ContractRegistry::builtin();
        registry.register_custom("Stringy", "A String or Symbol");
        registry
    }

    fn doc(name: &str, type_text: &str, description: &str) -> ParamDoc {
        ParamDoc {
            name: name.to_string(),
            type_text: type_text.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn simple_positional_alignment() {
        let registry = registry();
        let params = vec![ParamNode::required("one")];
        let contracts = vec![TypeNode::pair(
            TypeNode::name("Num"),
            TypeNode::name("String"),
        )];
        let aligned = ParamContracts::new(&params, &contracts, &registry).unwrap();

        assert_eq!(aligned.params().unwrap(), vec![doc("one", "Num", "")]);
        let ret = aligned.ret();
        assert_eq!(ret.type_text, "String");
        assert_eq!(ret.description, "");
    }

    #[test]
    fn custom_contracts_carry_their_description() {
        let registry = registry();
        let params = vec![ParamNode::required("word")];
        let contracts = vec![TypeNode::pair(
            TypeNode::name("Stringy"),
            TypeNode::name("String"),
        )];
        let aligned = ParamContracts::new(&params, &contracts, &registry).unwrap();

        assert_eq!(
            aligned.params().unwrap(),
            vec![doc("word", "Stringy", "+A String or Symbol+")]
        );
    }

    #[test]
    fn return_extraction_from_a_single_pair() {
        let registry = registry();
        let params = vec![ParamNode::required("stringy")];
        let contracts = vec![TypeNode::pair(
            TypeNode::Indexed {
                base: "Or".to_string(),
                args: vec![TypeNode::name("Symbol"), TypeNode::name("String")],
            },
            TypeNode::Indexed {
                base: "Or".to_string(),
                args: vec![TypeNode::name("TrueClass"), TypeNode::name("FalseClass")],
            },
        )];
        let aligned = ParamContracts::new(&params, &contracts, &registry).unwrap();

        let params = aligned.params().unwrap();
        assert_eq!(params[0].type_text, "Or[Symbol, String]");
        assert_eq!(params[0].description, "+Symbol or String+");

        let ret = aligned.ret();
        assert_eq!(ret.type_text, "Or[TrueClass, FalseClass]");
        assert_eq!(ret.description, "+TrueClass or FalseClass+");
    }

    #[test]
    fn hash_bag_pops_keys_by_name() {
        let registry = registry();
        let params = vec![
            ParamNode::keyword("name"),
            ParamNode::keyword("age"),
        ];
        let contracts = vec![TypeNode::pair(
            TypeNode::Hash(vec![
                ("name".to_string(), TypeNode::name("String")),
                ("age".to_string(), TypeNode::name("Num")),
            ]),
            TypeNode::name("Bool"),
        )];
        let aligned = ParamContracts::new(&params, &contracts, &registry).unwrap();

        assert_eq!(
            aligned.params().unwrap(),
            vec![doc("name", "String", ""), doc("age", "Num", "")]
        );
    }

    #[test]
    fn missing_bag_key_degrades_to_the_sentinel() {
        let registry = registry();
        let params = vec![
            ParamNode::keyword("name"),
            ParamNode::keyword("height"),
        ];
        let contracts = vec![TypeNode::pair(
            TypeNode::Hash(vec![("name".to_string(), TypeNode::name("String"))]),
            TypeNode::name("Bool"),
        )];
        let aligned = ParamContracts::new(&params, &contracts, &registry).unwrap();

        assert_eq!(
            aligned.params().unwrap(),
            vec![doc("name", "String", ""), doc("height", "?", "")]
        );
    }

    #[test]
    fn non_hash_bag_collapses_every_keyword_to_the_sentinel() {
        let registry = registry();
        let params = vec![
            ParamNode::keyword("name"),
            ParamNode::keyword("age"),
        ];
        let contracts = vec![TypeNode::pair(
            TypeNode::name("Num"),
            TypeNode::name("Bool"),
        )];
        let aligned = ParamContracts::new(&params, &contracts, &registry).unwrap();

        assert_eq!(
            aligned.params().unwrap(),
            vec![doc("name", "?", ""), doc("age", "?", "")]
        );
    }

    #[test]
    fn double_splat_reuses_the_whole_bag() {
        let registry = registry();
        // `name:` pops its key, `**rest` receives what is left. The
        // upstream grammar tags the double-splat as a plain required
        // identifier, which is exactly the ambiguity the bag state
        // machine absorbs.
        let params = vec![
            ParamNode::keyword("name"),
            ParamNode::ident(ParamKind::Required, "rest"),
        ];
        let contracts = vec![TypeNode::pair(
            TypeNode::Hash(vec![
                ("name".to_string(), TypeNode::name("String")),
                ("age".to_string(), TypeNode::name("Num")),
            ]),
            TypeNode::name("Bool"),
        )];
        let aligned = ParamContracts::new(&params, &contracts, &registry).unwrap();

        assert_eq!(
            aligned.params().unwrap(),
            vec![
                doc("name", "String", ""),
                doc("rest", "{age: Num}", "+{age: Num}+"),
            ]
        );
    }

    #[test]
    fn positional_after_bag_does_not_steal_positional_contracts() {
        let registry = registry();
        // One positional, then keywords sharing one bag entry: the
        // positional consumes entry 0, the keywords share entry 1.
        let params = vec![
            ParamNode::required("text"),
            ParamNode::keyword("name"),
            ParamNode::keyword("age"),
        ];
        let contracts = vec![
            TypeNode::name("String"),
            TypeNode::pair(
                TypeNode::Hash(vec![
                    ("name".to_string(), TypeNode::name("String")),
                    ("age".to_string(), TypeNode::name("Num")),
                ]),
                TypeNode::name("Bool"),
            ),
        ];
        let aligned = ParamContracts::new(&params, &contracts, &registry).unwrap();

        assert_eq!(
            aligned.params().unwrap(),
            vec![
                doc("text", "String", ""),
                doc("name", "String", ""),
                doc("age", "Num", ""),
            ]
        );
    }

    #[test]
    fn too_few_contract_entries_is_a_hard_failure() {
        let registry = registry();
        let params = vec![ParamNode::required("one"), ParamNode::required("two")];
        let contracts = vec![TypeNode::pair(
            TypeNode::name("Num"),
            TypeNode::name("String"),
        )];
        let aligned = ParamContracts::new(&params, &contracts, &registry).unwrap();
        let err = aligned.params().unwrap_err();
        assert_eq!(err.code, "E_ALIGNMENT");
    }

    #[test]
    fn too_many_contract_entries_is_a_hard_failure() {
        let registry = registry();
        let params = vec![ParamNode::required("one")];
        let contracts = vec![
            TypeNode::name("Num"),
            TypeNode::pair(TypeNode::name("Num"), TypeNode::name("String")),
        ];
        let aligned = ParamContracts::new(&params, &contracts, &registry).unwrap();
        assert_eq!(aligned.params().unwrap_err().code, "E_ALIGNMENT");
    }

    #[test]
    fn zero_argument_nil_convention_is_allowed() {
        let registry = registry();
        let contracts = vec![TypeNode::pair(
            TypeNode::name("nil"),
            TypeNode::name("String"),
        )];
        let aligned = ParamContracts::new(&[], &contracts, &registry).unwrap();
        assert!(aligned.params().unwrap().is_empty());
        assert_eq!(aligned.ret().type_text, "String");
    }

    #[test]
    fn hazardous_brackets_degrade_to_literal_source() {
        let registry = registry();
        let params = vec![ParamNode::required("a")];
        let dodgy = TypeNode::Indexed {
            base: "ArrayOf".to_string(),
            args: vec![TypeNode::Indexed {
                base: "ArrayOf".to_string(),
                args: vec![TypeNode::name("Num")],
            }],
        };
        let contracts = vec![TypeNode::pair(dodgy, TypeNode::name("Any"))];
        let aligned = ParamContracts::new(&params, &contracts, &registry).unwrap();

        assert_eq!(aligned.hazards(), ["ArrayOf[ArrayOf[Num]]"]);
        let params = aligned.params().unwrap();
        assert_eq!(params[0].type_text, "ArrayOf[ArrayOf[Num]]");
        assert_eq!(params[0].description, "");
    }

    #[test]
    fn alignment_is_repeatable() {
        let registry = registry();
        let params = vec![ParamNode::required("one")];
        let contracts = vec![TypeNode::pair(
            TypeNode::name("Stringy"),
            TypeNode::name("String"),
        )];
        let aligned = ParamContracts::new(&params, &contracts, &registry).unwrap();
        assert_eq!(aligned.params().unwrap(), aligned.params().unwrap());
    }
}
