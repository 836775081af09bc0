//! Prompt rendering: literal `{fieldName}` substitution in a single pass.
//!
//! A template must name every declared field and nothing else. Substituted values
//! are never re-scanned, so user text containing `{...}` is inserted verbatim.

use crate::assist::error::TemplateError;
use crate::assist::schema::{FieldMap, InputSchema};

enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Splits a template into literal text and `{identifier}` placeholders.
/// Braces that do not enclose an identifier stay literal.
fn segments(template: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if is_identifier(&after[..close]) => {
                out.push(Segment::Literal(&rest[..open]));
                out.push(Segment::Placeholder(&after[..close]));
                rest = &after[close + 1..];
            }
            _ => {
                out.push(Segment::Literal(&rest[..=open]));
                rest = after;
            }
        }
    }
    out.push(Segment::Literal(rest));
    out
}

fn check_names<'f>(
    template: &str,
    fields: impl Iterator<Item = &'f str> + Clone,
) -> Result<(), TemplateError> {
    let placeholders: Vec<&str> = segments(template)
        .into_iter()
        .filter_map(|s| match s {
            Segment::Placeholder(name) => Some(name),
            Segment::Literal(_) => None,
        })
        .collect();

    if let Some(unknown) = placeholders
        .iter()
        .find(|p| !fields.clone().any(|f| f == **p))
    {
        return Err(TemplateError::UnknownPlaceholder(unknown.to_string()));
    }
    if let Some(unused) = fields.clone().find(|f| !placeholders.contains(f)) {
        return Err(TemplateError::UnusedField(unused.to_string()));
    }
    Ok(())
}

/// Validates a template against its input schema without any values.
pub fn check(template: &str, schema: &InputSchema) -> Result<(), TemplateError> {
    check_names(template, schema.fields.iter().copied())
}

/// Substitutes validated field values into `template`.
pub fn render(template: &str, fields: &FieldMap) -> Result<String, TemplateError> {
    check_names(template, fields.iter().map(|(name, _)| *name))?;

    let mut out = String::with_capacity(template.len());
    for segment in segments(template) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder(name) => {
                // check_names guarantees the lookup succeeds
                if let Some((_, value)) = fields.iter().find(|(field, _)| *field == name) {
                    out.push_str(value);
                }
            }
        }
    }
    Ok(out)
}
