//! Path Patterns
//!
//! Segment-wise matching of request paths:
//! - literal segments match themselves exactly
//! - `{name}` and `*` match exactly one non-empty segment
//! - a trailing `**` matches zero or more segments

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Path pattern must start with '/': {0}")]
    MissingLeadingSlash(String),

    #[error("'**' is only allowed as the last segment: {0}")]
    InnerMultiWildcard(String),

    #[error("Unterminated path variable in pattern: {0}")]
    UnterminatedVariable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    /// `{name}` or `*`
    Single,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
    tail_wildcard: bool,
}

impl PathPattern {
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, path: &str) -> bool {
        let Some(rest) = path.strip_prefix('/') else {
            return false;
        };
        let parts: Vec<&str> = rest.split('/').collect();

        let fixed = self.segments.len();
        if parts.len() < fixed || (!self.tail_wildcard && parts.len() != fixed) {
            return false;
        }

        self.segments
            .iter()
            .zip(&parts)
            .all(|(segment, part)| match segment {
                Segment::Literal(lit) => lit == part,
                Segment::Single => !part.is_empty(),
            })
    }

    /// Number of literal segments
    pub fn literal_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Literal(_)))
            .count()
    }

    /// Number of `{name}` / `*` segments
    pub fn single_count(&self) -> usize {
        self.segments.len() - self.literal_count()
    }

    pub fn has_tail_wildcard(&self) -> bool {
        self.tail_wildcard
    }
}

impl FromStr for PathPattern {
    type Err = PatternError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let Some(rest) = raw.strip_prefix('/') else {
            return Err(PatternError::MissingLeadingSlash(raw.to_string()));
        };

        let mut parts: Vec<&str> = rest.split('/').collect();
        let tail_wildcard = parts.last() == Some(&"**");
        if tail_wildcard {
            parts.pop();
        }

        let mut segments = Vec::with_capacity(parts.len());
        for part in parts {
            let segment = match part {
                "**" => return Err(PatternError::InnerMultiWildcard(raw.to_string())),
                "*" => Segment::Single,
                p if p.starts_with('{') => {
                    if !p.ends_with('}') || p.len() < 3 {
                        return Err(PatternError::UnterminatedVariable(raw.to_string()));
                    }
                    Segment::Single
                }
                p => Segment::Literal(p.to_string()),
            };
            segments.push(segment);
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
            tail_wildcard,
        })
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
