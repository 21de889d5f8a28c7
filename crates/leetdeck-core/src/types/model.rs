// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::timestamp::Timestamp;

pub const LEETCODE_MODEL_ID: i64 = 4567610856;

const LEETCODE_QFMT: &str = "
                <h2>{{Title}}</h2>
                <b>URL:</b>
                <a href='{{Slug}}'>
                    {{Slug}}
                </a>
                <br/>
                ";

const LEETCODE_AFMT: &str = "
                {{FrontSide}}
                ";

const LATEX_PRE: &str = "\\documentclass[12pt]{article}\n\\special{papersize=3in,5in}\n\\usepackage[utf8]{inputenc}\n\\usepackage{amssymb,amsmath}\n\\pagestyle{empty}\n\\setlength{\\parindent}{0in}\n\\begin{document}\n";

const LATEX_POST: &str = "\\end{document}";

/// A named note field.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name: String,
}

/// A card template: how a note is rendered on each side of a card.
#[derive(Clone, Debug, PartialEq)]
pub struct Template {
    pub name: String,
    /// Question side.
    pub qfmt: String,
    /// Answer side.
    pub afmt: String,
}

/// A note type. Every note in the deck shares the same model.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub id: i64,
    pub name: String,
    pub fields: Vec<Field>,
    pub templates: Vec<Template>,
    pub css: String,
}

impl Model {
    /// The model used for LeetCode problems: the problem URL and its title,
    /// both shown on the front of the card.
    pub fn leetcode() -> Self {
        Model {
            id: LEETCODE_MODEL_ID,
            name: "Leetcode model".to_string(),
            fields: vec![
                Field {
                    name: "Slug".to_string(),
                },
                Field {
                    name: "Title".to_string(),
                },
            ],
            templates: vec![Template {
                name: "Leetcode".to_string(),
                qfmt: LEETCODE_QFMT.to_string(),
                afmt: LEETCODE_AFMT.to_string(),
            }],
            css: String::new(),
        }
    }

    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css = css.into();
        self
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// For each template, the ordinals of the fields its question side
    /// refers to. Anki generates the card when any of them is non-empty.
    ///
    /// A template that refers to no field could never produce a card, so
    /// it is an error.
    fn requirements(&self) -> Fallible<Vec<(usize, &'static str, Vec<usize>)>> {
        let mut reqs = Vec::with_capacity(self.templates.len());
        for (ord, template) in self.templates.iter().enumerate() {
            let referenced = referenced_fields(&template.qfmt);
            let fields: Vec<usize> = self
                .fields
                .iter()
                .enumerate()
                .filter(|(_, field)| referenced.contains(field.name.as_str()))
                .map(|(idx, _)| idx)
                .collect();
            if fields.is_empty() {
                return fail(format!(
                    "template '{}' of model '{}' does not refer to any field.",
                    template.name, self.name
                ));
            }
            reqs.push((ord, "any", fields));
        }
        Ok(reqs)
    }

    /// The ordinals of the templates that produce a card for a note with
    /// these field values.
    pub fn card_ordinals(&self, fields: &[String]) -> Fallible<Vec<usize>> {
        let ordinals = self
            .requirements()?
            .into_iter()
            .filter(|(_, _, required)| {
                required
                    .iter()
                    .any(|&idx| fields.get(idx).is_some_and(|v| !v.trim().is_empty()))
            })
            .map(|(ord, _, _)| ord)
            .collect();
        Ok(ordinals)
    }

    /// The JSON object Anki stores for this model in `col.models`.
    pub fn to_json(&self, timestamp: Timestamp, deck_id: i64) -> Fallible<Value> {
        let json = ModelJson {
            css: &self.css,
            did: deck_id,
            flds: self
                .fields
                .iter()
                .enumerate()
                .map(|(ord, field)| FieldJson {
                    font: "Liberation Sans",
                    media: Vec::new(),
                    name: &field.name,
                    ord,
                    rtl: false,
                    size: 20,
                    sticky: false,
                })
                .collect(),
            id: self.id.to_string(),
            latex_post: LATEX_POST,
            latex_pre: LATEX_PRE,
            latexsvg: false,
            modified: timestamp.as_secs(),
            name: &self.name,
            req: self.requirements()?,
            sortf: 0,
            tags: Vec::new(),
            tmpls: self
                .templates
                .iter()
                .enumerate()
                .map(|(ord, template)| TemplateJson {
                    afmt: &template.afmt,
                    bafmt: "",
                    bqfmt: "",
                    did: None,
                    name: &template.name,
                    ord,
                    qfmt: &template.qfmt,
                })
                .collect(),
            kind: 0,
            usn: -1,
            vers: Vec::new(),
        };
        Ok(serde_json::to_value(json)?)
    }
}

/// The names of the fields a template refers to.
///
/// Section markers (`{{#Field}}`, `{{^Field}}`, `{{/Field}}`) and filters
/// (`{{text:Field}}`) are reduced to the bare field name. Comments
/// (`{{!...}}`) are ignored.
fn referenced_fields(template: &str) -> HashSet<&str> {
    let mut names = HashSet::new();
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };
        let tag = after[..end].trim();
        if !tag.starts_with('!') {
            let tag = tag.trim_start_matches(['#', '^', '/']);
            let name = tag.rsplit(':').next().unwrap_or(tag).trim();
            if !name.is_empty() {
                names.insert(name);
            }
        }
        rest = &after[end + 2..];
    }
    names
}

#[derive(Serialize)]
struct ModelJson<'a> {
    css: &'a str,
    did: i64,
    flds: Vec<FieldJson<'a>>,
    id: String,
    #[serde(rename = "latexPost")]
    latex_post: &'a str,
    #[serde(rename = "latexPre")]
    latex_pre: &'a str,
    latexsvg: bool,
    #[serde(rename = "mod")]
    modified: i64,
    name: &'a str,
    req: Vec<(usize, &'static str, Vec<usize>)>,
    sortf: usize,
    tags: Vec<String>,
    tmpls: Vec<TemplateJson<'a>>,
    #[serde(rename = "type")]
    kind: u8,
    usn: i64,
    vers: Vec<Value>,
}

#[derive(Serialize)]
struct FieldJson<'a> {
    font: &'a str,
    media: Vec<String>,
    name: &'a str,
    ord: usize,
    rtl: bool,
    size: u32,
    sticky: bool,
}

#[derive(Serialize)]
struct TemplateJson<'a> {
    afmt: &'a str,
    bafmt: &'a str,
    bqfmt: &'a str,
    did: Option<i64>,
    name: &'a str,
    ord: usize,
    qfmt: &'a str,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_leetcode_model_shape() {
        let model = Model::leetcode();
        assert_eq!(model.id, LEETCODE_MODEL_ID);
        let names: Vec<&str> = model.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Slug", "Title"]);
        assert_eq!(model.templates.len(), 1);
        assert!(model.templates[0].qfmt.contains("{{Title}}"));
        assert!(model.templates[0].qfmt.contains("{{Slug}}"));
        assert_eq!(model.templates[0].afmt.trim(), "{{FrontSide}}");
    }

    #[test]
    fn test_referenced_fields() {
        let names = referenced_fields("{{#Front}}{{text:Back}}{{/Front}}{{! comment }}{{Extra");
        let mut names: Vec<&str> = names.into_iter().collect();
        names.sort();
        assert_eq!(names, vec!["Back", "Front"]);
    }

    #[test]
    fn test_to_json() -> Fallible<()> {
        let ts = Timestamp::from_millis(1_700_000_000_000)?;
        let value = Model::leetcode().to_json(ts, 8589798175)?;
        assert_eq!(value["id"], json!("4567610856"));
        assert_eq!(value["did"], json!(8589798175i64));
        assert_eq!(value["mod"], json!(1_700_000_000i64));
        assert_eq!(value["req"], json!([[0, "any", [0, 1]]]));
        assert_eq!(value["flds"][0]["name"], json!("Slug"));
        assert_eq!(value["flds"][1]["ord"], json!(1));
        assert_eq!(value["tmpls"][0]["name"], json!("Leetcode"));
        assert_eq!(value["tmpls"][0]["did"], Value::Null);
        assert_eq!(value["type"], json!(0));
        Ok(())
    }

    #[test]
    fn test_card_ordinals() -> Fallible<()> {
        let model = Model::leetcode();
        let full = vec!["leetcode.com/two-sum".to_string(), "Two Sum".to_string()];
        assert_eq!(model.card_ordinals(&full)?, vec![0]);
        let slug_only = vec!["leetcode.com/two-sum".to_string(), String::new()];
        assert_eq!(model.card_ordinals(&slug_only)?, vec![0]);
        let blank = vec![String::new(), " ".to_string()];
        assert!(model.card_ordinals(&blank)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_template_without_fields() -> Fallible<()> {
        let mut model = Model::leetcode();
        model.templates[0].qfmt = "static".to_string();
        assert!(model.to_json(Timestamp::from_millis(0)?, 1).is_err());
        let fields = vec!["leetcode.com/two-sum".to_string(), "Two Sum".to_string()];
        assert!(model.card_ordinals(&fields).is_err());
        Ok(())
    }
}
