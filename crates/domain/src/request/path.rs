//! Path templates with `{name}` placeholders.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DomainError, DomainResult};

/// Values bound to path placeholders, keyed by placeholder name.
pub type PathParams = BTreeMap<String, Value>;

/// A request path such as `/company/{company_id}/products/{product_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathTemplate(String);

/// A parsed piece of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

impl PathTemplate {
    /// Creates a template without validating it.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Returns the raw template text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the placeholder names in order of appearance.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is malformed.
    pub fn placeholders(&self) -> DomainResult<Vec<&str>> {
        Ok(self
            .segments()?
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(name) => Some(name),
                Segment::Literal(_) => None,
            })
            .collect())
    }

    /// Checks the template shape and that `params` binds exactly its placeholders.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed templates, unbound placeholders or
    /// parameters the template never uses.
    pub fn validate(&self, params: &PathParams) -> DomainResult<()> {
        if !self.0.starts_with('/') {
            return Err(self.invalid("must start with '/'"));
        }

        let names: BTreeSet<&str> = self.placeholders()?.into_iter().collect();
        if let Some(name) = names.iter().find(|name| !params.contains_key(**name)) {
            return Err(DomainError::MissingPathParam {
                path: self.0.clone(),
                name: (*name).to_string(),
            });
        }
        if let Some(name) = params.keys().find(|key| !names.contains(key.as_str())) {
            return Err(DomainError::UnusedPathParam {
                path: self.0.clone(),
                name: name.clone(),
            });
        }

        Ok(())
    }

    /// Substitutes every placeholder with its bound value.
    ///
    /// # Errors
    ///
    /// Returns an error if a placeholder is unbound, or if a bound value is
    /// not a scalar or would escape its path segment.
    pub fn render(&self, params: &PathParams) -> DomainResult<String> {
        let mut rendered = String::with_capacity(self.0.len());

        for segment in self.segments()? {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Placeholder(name) => {
                    let value = params.get(name).ok_or_else(|| DomainError::MissingPathParam {
                        path: self.0.clone(),
                        name: name.to_string(),
                    })?;
                    rendered.push_str(&self.render_value(name, value)?);
                }
            }
        }

        Ok(rendered)
    }

    fn render_value(&self, name: &str, value: &Value) -> DomainResult<String> {
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => {
                return Err(self.invalid(&format!("parameter '{name}' must be a scalar")));
            }
        };

        if text.is_empty() {
            return Err(self.invalid(&format!("parameter '{name}' is empty")));
        }
        if text
            .chars()
            .any(|c| matches!(c, '/' | '?' | '#' | '{' | '}') || c.is_whitespace())
        {
            return Err(self.invalid(&format!(
                "parameter '{name}' value '{text}' is not a valid path segment"
            )));
        }

        Ok(text)
    }

    fn segments(&self) -> DomainResult<Vec<Segment<'_>>> {
        let mut segments = Vec::new();
        let mut rest = self.0.as_str();

        while let Some(open) = rest.find(['{', '}']) {
            if rest[open..].starts_with('}') {
                return Err(self.invalid("unmatched '}'"));
            }
            if open > 0 {
                segments.push(Segment::Literal(&rest[..open]));
            }
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or_else(|| self.invalid("unterminated '{'"))?;
            let name = &after[..close];
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(self.invalid(&format!("invalid placeholder '{{{name}}}'")));
            }
            segments.push(Segment::Placeholder(name));
            rest = &after[close + 1..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest));
        }

        Ok(segments)
    }

    fn invalid(&self, reason: &str) -> DomainError {
        DomainError::InvalidPath {
            path: self.0.clone(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PathTemplate {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

impl From<String> for PathTemplate {
    fn from(template: String) -> Self {
        Self(template)
    }
}
