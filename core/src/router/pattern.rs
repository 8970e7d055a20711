//! Path patterns in the `/news/:slug` and `/services/:slugPath(.*)` style.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    /// Exactly one non-empty segment.
    Param(String),
    /// Everything that is left, possibly nothing.
    Rest(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// `:name` captures one segment; `:name(.*)` and `:name(.*)*` capture
    /// the remainder of the path and may only appear last.
    pub fn new(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix(':') {
                Some(param) => match param.find('(') {
                    Some(open) => Segment::Rest(param[..open].to_string()),
                    None => Segment::Param(param.to_string()),
                },
                None => Segment::Static(s.to_string()),
            })
            .collect();
        Self {
            raw: pattern.to_string(),
            segments,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Match a normalized path, returning captured params on success.
    ///
    /// Static segments compare ASCII case-insensitively; captured values
    /// keep the case they arrived in.
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let mut params = HashMap::new();
        let mut index = 0;
        for segment in &self.segments {
            match segment {
                Segment::Static(expected) => {
                    if !parts.get(index).is_some_and(|part| part.eq_ignore_ascii_case(expected)) {
                        return None;
                    }
                    index += 1;
                }
                Segment::Param(name) => {
                    let value = parts.get(index)?;
                    params.insert(name.clone(), (*value).to_string());
                    index += 1;
                }
                Segment::Rest(name) => {
                    let rest = parts.get(index..).unwrap_or_default().join("/");
                    params.insert(name.clone(), rest);
                    return Some(params);
                }
            }
        }
        (index == parts.len()).then_some(params)
    }
}
