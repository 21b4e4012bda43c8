//! Table name filtering by regular expression

use regex::Regex;

use crate::error::FilterError;

/// A set of table name patterns. An empty set matches every table.
#[derive(Debug, Clone, Default)]
pub struct TableFilter {
    patterns: Vec<Regex>,
}

impl TableFilter {
    /// Compile `patterns`; the first invalid one is reported
    pub fn new<I, S>(patterns: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                let pattern = p.as_ref();
                Regex::new(pattern).map_err(|source| FilterError::Invalid {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether `name` matches at least one pattern
    pub fn matches(&self, name: &str) -> bool {
        self.patterns.is_empty() || self.patterns.iter().any(|re| re.is_match(name))
    }

    /// Keep the matching names, in order, each at most once
    pub fn filter<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        let mut out: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            if self.matches(name) && !out.iter().any(|n| n == name) {
                out.push(name.to_string());
            }
        }
        out
    }
}
