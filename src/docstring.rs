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

/// The tag kinds the merge step cares about. Anything else passes
/// through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TagKind {
    Param,
    Return,
    Other(String),
}

/// One docstring tag: `@param [String] name description` and friends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tag {
    pub kind: TagKind,
    pub name: Option<String>,
    pub types: Vec<String>,
    pub text: String,
}

impl Tag {
    /// A param tag carrying a produced name, type, and description.
    pub fn param(
        name: impl Into<String>,
        type_text: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            kind: TagKind::Param,
            name: Some(name.into()),
            types: vec![type_text.into()],
            text: text.into(),
        }
    }

    /// A return tag carrying a produced type and description.
    pub fn ret(type_text: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: TagKind::Return,
            name: None,
            types: vec![type_text.into()],
            text: text.into(),
        }
    }
}

/// A parsed docstring: free-text discussion followed by tags.
///
/// This is the mutable document the merge step receives by exclusive
/// reference. The only mutations the pipeline performs are adding tags
/// and updating a tag's type list or text - hand-written content is
/// never deleted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Docstring {
    pub discussion: String,
    tags: Vec<Tag>,
}

impl Docstring {
    /// Parses raw docstring text into a tag collection.
    ///
    /// Lines before the first `@tag` line are the discussion. A tag
    /// line is `@param [A, B] name text`, `@return [A] text`, or any
    /// other `@word text`; the bracketed type list is optional.
    /// Indented follow-up lines extend the previous tag's text.
    pub fn parse(raw: &str) -> Self {
        let mut discussion: Vec<&str> = Vec::new();
        let mut tags: Vec<Tag> = Vec::new();

        for line in raw.lines() {
            let trimmed = line.trim();
            if let Some(rest) = trimmed.strip_prefix('@') {
                tags.push(parse_tag(rest));
            } else if let Some(last) = tags.last_mut() {
                // Continuation line for the tag above.
                if !trimmed.is_empty() {
                    if !last.text.is_empty() {
                        last.text.push(' ');
                    }
                    last.text.push_str(trimmed);
                }
            } else {
                discussion.push(trimmed);
            }
        }

        Self {
            discussion: discussion.join("\n").trim().to_string(),
            tags,
        }
    }

    /// Renders the docstring back to tagged text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if !self.discussion.is_empty() {
            out.push_str(&self.discussion);
            out.push('\n');
        }
        for tag in &self.tags {
            let kind = match &tag.kind {
                TagKind::Param => "param",
                TagKind::Return => "return",
                TagKind::Other(word) => word.as_str(),
            };
            out.push('@');
            out.push_str(kind);
            if !tag.types.is_empty() {
                out.push_str(&format!(" [{}]", tag.types.join(", ")));
            }
            if let Some(name) = &tag.name {
                out.push(' ');
                out.push_str(name);
            }
            if !tag.text.is_empty() {
                out.push(' ');
                out.push_str(&tag.text);
            }
            out.push('\n');
        }
        out
    }

    /// First tag of a kind.
    pub fn tag(&self, kind: &TagKind) -> Option<&Tag> {
        self.tags.iter().find(|t| &t.kind == kind)
    }

    /// First tag of a kind, mutable.
    pub fn tag_mut(&mut self, kind: &TagKind) -> Option<&mut Tag> {
        self.tags.iter_mut().find(|t| &t.kind == kind)
    }

    /// All tags of a kind.
    pub fn tags(&self, kind: &TagKind) -> Vec<&Tag> {
        self.tags.iter().filter(|t| &t.kind == kind).collect()
    }

    /// First tag of a kind with a matching name, mutable.
    pub fn tag_named_mut(&mut self, kind: &TagKind, name: &str) -> Option<&mut Tag> {
        self.tags
            .iter_mut()
            .find(|t| &t.kind == kind && t.name.as_deref() == Some(name))
    }

    /// Appends a tag; merged tags keep their original position, new
    /// tags land at the end in insertion order.
    pub fn add_tag(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    /// All tags, in document order.
    pub fn all_tags(&self) -> &[Tag] {
        &self.tags
    }
}

/// Parses one tag line body (the text after `@`).
fn parse_tag(rest: &str) -> Tag {
    let (word, mut body) = match rest.split_once(char::is_whitespace) {
        Some((word, body)) => (word, body.trim()),
        None => (rest, ""),
    };

    // Optional bracketed type list comes first: `[A, B] …`
    let mut types = Vec::new();
    if let Some(after) = body.strip_prefix('[') {
        if let Some(end) = after.find(']') {
            types = after[..end]
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect();
            body = after[end + 1..].trim();
        }
    }

    match word {
        "param" => {
            let (name, text) = match body.split_once(char::is_whitespace) {
                Some((name, text)) => (name.to_string(), text.trim().to_string()),
                None => (body.to_string(), String::new()),
            };
            Tag {
                kind: TagKind::Param,
                name: if name.is_empty() { None } else { Some(name) },
                types,
                text,
            }
        }
        "return" => Tag {
            kind: TagKind::Return,
            name: None,
            types,
            text: body.to_string(),
        },
        other => Tag {
            kind: TagKind::Other(other.to_string()),
            name: None,
            types,
            text: body.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_discussion_and_tags() {
        let doc = Docstring::parse(
            "repeat text number of times\n\
             @param repeats times to repeat text\n\
             @return repeated text",
        );
        assert_eq!(doc.discussion, "repeat text number of times");

        let param = doc.tag(&TagKind::Param).unwrap();
        assert_eq!(param.name.as_deref(), Some("repeats"));
        assert_eq!(param.text, "times to repeat text");
        assert!(param.types.is_empty());

        let ret = doc.tag(&TagKind::Return).unwrap();
        assert_eq!(ret.text, "repeated text");
    }

    #[test]
    fn parses_bracketed_type_lists() {
        let doc = Docstring::parse("@param [String, Symbol] word the word\n@return [Bool] yes");
        let param = doc.tag(&TagKind::Param).unwrap();
        assert_eq!(param.types, vec!["String", "Symbol"]);
        assert_eq!(param.name.as_deref(), Some("word"));
        assert_eq!(param.text, "the word");
        assert_eq!(doc.tag(&TagKind::Return).unwrap().types, vec!["Bool"]);
    }

    #[test]
    fn continuation_lines_extend_the_previous_tag() {
        let doc = Docstring::parse("@param one first half\n  second half");
        assert_eq!(
            doc.tag(&TagKind::Param).unwrap().text,
            "first half second half"
        );
    }

    #[test]
    fn unknown_tags_pass_through() {
        let doc = Docstring::parse("@example\n@deprecated use other");
        assert!(doc.tag(&TagKind::Other("example".to_string())).is_some());
        assert_eq!(
            doc.tag(&TagKind::Other("deprecated".to_string())).unwrap().text,
            "use other"
        );
    }

    #[test]
    fn tag_named_lookup_is_by_kind_and_name() {
        let mut doc = Docstring::parse("@param one first\n@param two second");
        assert!(doc.tag_named_mut(&TagKind::Param, "two").is_some());
        assert!(doc.tag_named_mut(&TagKind::Param, "three").is_none());
        assert!(doc.tag_named_mut(&TagKind::Return, "one").is_none());
    }

    #[test]
    fn render_round_trips_the_shape() {
        let mut doc = Docstring::parse("naming things\n@param one the first");
        doc.add_tag(Tag::ret("String", ""));
        let rendered = doc.render();
        assert!(rendered.starts_with("naming things\n"));
        assert!(rendered.contains("@param one the first"));
        assert!(rendered.contains("@return [String]"));
    }
}
