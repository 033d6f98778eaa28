//! The argument record shape a template requires

use crate::value::{Args, ValueKind};

use super::error::TemplateError;

/// One required argument
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField {
    pub name: String,
    /// Tag of the first placeholder using this name
    pub tag: String,
    pub kind: ValueKind,
}

/// Distinct placeholder names with their kinds, in first-occurrence order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    fields: Vec<SchemaField>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the field for a name
    pub fn get(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get all argument names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn push(&mut self, field: SchemaField) {
        self.fields.push(field);
    }

    /// Validate a dynamic argument record against this shape
    ///
    /// With `strict`, names outside the schema are rejected too.
    pub fn check(&self, args: &Args, strict: bool) -> Result<(), TemplateError> {
        for field in &self.fields {
            let value = args
                .get(&field.name)
                .ok_or_else(|| TemplateError::missing_argument(&field.name))?;
            if !value.is_kind(&field.kind) {
                return Err(TemplateError::type_mismatch(
                    &field.name,
                    field.kind,
                    value.kind(),
                ));
            }
        }

        if strict {
            if let Some(name) = args.names().find(|name| !self.contains(name)) {
                return Err(TemplateError::unexpected_argument(name));
            }
        }

        Ok(())
    }

    /// Validate a statically declared record shape against this one
    ///
    /// The declared fields must match exactly: same names, same kinds.
    pub fn check_fields(&self, declared: &[(&str, ValueKind)]) -> Result<(), TemplateError> {
        for field in &self.fields {
            let (_, kind) = declared
                .iter()
                .find(|(name, _)| *name == field.name)
                .ok_or_else(|| TemplateError::missing_argument(&field.name))?;
            if *kind != field.kind {
                return Err(TemplateError::type_mismatch(&field.name, field.kind, *kind));
            }
        }

        if let Some((name, _)) = declared.iter().find(|(name, _)| !self.contains(name)) {
            return Err(TemplateError::unexpected_argument(*name));
        }

        Ok(())
    }
}
