//! Request and reply schemas, and the validators that enforce them.
//!
//! Input side: every declared field is a required, non-blank string.
//! Output side: every declared field must be present with its declared kind.
//! Neither validator ever hands back a partially populated value.

use std::fmt;

use serde_json::{Map, Value};

use crate::assist::error::{SchemaMismatchError, ValidationError};

/// Validated request fields, in schema order.
pub type FieldMap = Vec<(&'static str, String)>;

/// Ordered set of required string fields a request must carry.
#[derive(Debug, Clone, Copy)]
pub struct InputSchema {
    pub fields: &'static [&'static str],
}

/// JSON type of a single reply field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextList,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => f.write_str("string"),
            FieldKind::TextList => f.write_str("array of strings"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct OutputField {
    pub name: &'static str,
    pub kind: FieldKind,
    pub description: &'static str,
}

/// Expected shape of the model's reply.
#[derive(Debug, Clone, Copy)]
pub struct OutputSchema {
    pub fields: &'static [OutputField],
}

impl OutputSchema {
    /// Renders the schema as plain instructions the model can follow.
    pub fn describe(&self) -> String {
        let mut out = String::from("Return a JSON object with EXACTLY these fields:\n");
        for field in self.fields {
            out.push_str(&format!(
                "- \"{}\" ({}): {}\n",
                field.name, field.kind, field.description
            ));
        }
        out
    }
}

/// Checks `candidate` against `schema`, failing on the first field (in declaration
/// order) that is absent, not a string, or blank.
pub fn validate_input(schema: &InputSchema, candidate: &Value) -> Result<FieldMap, ValidationError> {
    let empty = Map::new();
    let object = candidate.as_object().unwrap_or(&empty);

    schema
        .fields
        .iter()
        .map(|&name| match object.get(name).and_then(Value::as_str) {
            Some(value) if !value.trim().is_empty() => Ok((name, value.to_string())),
            _ => Err(ValidationError { field: name }),
        })
        .collect()
}

/// Checks a model reply against `schema`. Keys the schema does not declare are
/// dropped from the returned object.
pub fn validate_output(schema: &OutputSchema, reply: &Value) -> Result<Value, SchemaMismatchError> {
    let object = reply.as_object().ok_or(SchemaMismatchError::NotAnObject)?;
    let mut checked = Map::with_capacity(schema.fields.len());

    for field in schema.fields {
        let value = object
            .get(field.name)
            .ok_or(SchemaMismatchError::MissingField(field.name))?;

        let well_typed = match field.kind {
            FieldKind::Text => value.is_string(),
            FieldKind::TextList => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
        };
        if !well_typed {
            return Err(SchemaMismatchError::WrongType {
                field: field.name,
                expected: field.kind,
            });
        }

        checked.insert(field.name.to_string(), value.clone());
    }

    Ok(Value::Object(checked))
}
