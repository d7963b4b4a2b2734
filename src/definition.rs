// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Step [`Definition`]s matched by a runner against [`Step`]s.
//!
//! [`Step`]: crate::document::Step

use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use derive_more::with_trait::{Deref, Display};
use regex::Regex;

use crate::document::Location;

/// [`Regex`] comparable and hashable by its source expression.
#[derive(Clone, Debug, Deref, Display)]
pub struct HashableRegex(pub Regex);

impl PartialEq for HashableRegex {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_str() == other.0.as_str()
    }
}

impl Eq for HashableRegex {}

impl PartialOrd for HashableRegex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HashableRegex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.as_str().cmp(other.0.as_str())
    }
}

impl Hash for HashableRegex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.as_str().hash(state);
    }
}

/// Match pattern of a [`Definition`].
#[derive(Clone, Debug, Display, Eq, Hash, PartialEq)]
pub enum Pattern {
    /// Plain text matched as is. Has no capture groups to highlight.
    #[display("{_0}")]
    Literal(String),

    /// Regular expression with capture groups.
    #[display("/{_0}/")]
    Regex(HashableRegex),
}

impl Pattern {
    /// Creates a [`Pattern::Regex`] out of the given `expr`.
    ///
    /// # Errors
    ///
    /// If `expr` is not a valid [`Regex`].
    pub fn regex(expr: &str) -> Result<Self, regex::Error> {
        Regex::new(expr).map(|re| Self::Regex(HashableRegex(re)))
    }

    /// Returns the [`Regex`] of this [`Pattern`], if it's not a literal.
    #[must_use]
    pub fn as_regex(&self) -> Option<&Regex> {
        match self {
            Self::Literal(_) => None,
            Self::Regex(re) => Some(&re.0),
        }
    }
}

impl From<Regex> for Pattern {
    fn from(re: Regex) -> Self {
        Self::Regex(HashableRegex(re))
    }
}

/// Registered step implementation.
///
/// Owned by a runner. Referenced but never mutated by the formatter.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Definition {
    /// [`Pattern`] the [`Step`] text is matched with.
    ///
    /// [`Step`]: crate::document::Step
    pub pattern: Pattern,

    /// [`Location`] where this [`Definition`] is declared.
    pub location: Location,
}

impl Definition {
    /// Creates a new [`Definition`].
    #[must_use]
    pub fn new(pattern: impl Into<Pattern>, location: Location) -> Self {
        Self { pattern: pattern.into(), location }
    }

    /// Creates a new [`Definition`] with a [`Pattern::Literal`].
    #[must_use]
    pub fn literal(text: impl Into<String>, location: Location) -> Self {
        Self::new(Pattern::Literal(text.into()), location)
    }

    /// Creates a new [`Definition`] with a [`Pattern::Regex`].
    ///
    /// # Errors
    ///
    /// If `expr` is not a valid [`Regex`].
    pub fn regex(expr: &str, location: Location) -> Result<Self, regex::Error> {
        Pattern::regex(expr).map(|p| Self::new(p, location))
    }
}

#[cfg(test)]
mod tests {
    use super::{Definition, Location, Pattern};

    #[test]
    fn compares_regexes_by_source() {
        let a = Pattern::regex(r"I have (\d+)").expect("valid regex");
        let b = Pattern::regex(r"I have (\d+)").expect("valid regex");

        assert_eq!(a, b);
        assert_ne!(a, Pattern::Literal(r"I have (\d+)".into()));
    }

    #[test]
    fn literal_has_no_regex() {
        let def = Definition::literal("I eat", Location::new("steps.rs", 3));

        assert!(def.pattern.as_regex().is_none());
    }

    #[test]
    fn rejects_invalid_regex() {
        assert!(Definition::regex("(unclosed", Location::default()).is_err());
    }
}
