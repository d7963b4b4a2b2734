// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! External collaborators consumed by formatters.

use std::{borrow::Cow, env, fmt};

use once_cell::sync::Lazy;

use crate::{
    document::Step,
    event::{Event, Snippet, StepError},
    markup::Markup,
};

/// Rewrites absolute paths inside arbitrary strings into relative ones.
pub trait PathRelativizer {
    /// Relativizes every path found in the given `text`.
    fn relativize<'t>(&self, text: &'t str) -> Cow<'t, str>;
}

/// [`PathRelativizer`] trimming the current project directory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TrimPath {
    base: String,
}

impl TrimPath {
    /// Creates a new [`TrimPath`] trimming the given `base` directory.
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        let base = base.trim_end_matches(['/', '\\']).to_owned();
        Self { base }
    }
}

impl Default for TrimPath {
    /// Trims the current project directory.
    fn default() -> Self {
        /// Path of the current project directory.
        static CURRENT_DIR: Lazy<String> = Lazy::new(|| {
            env::var("CARGO_WORKSPACE_DIR")
                .or_else(|_| env::var("CARGO_MANIFEST_DIR"))
                .unwrap_or_else(|_| {
                    env::current_dir()
                        .map(|path| path.display().to_string())
                        .unwrap_or_default()
                })
        });

        Self::new(CURRENT_DIR.as_str())
    }
}

impl PathRelativizer for TrimPath {
    fn relativize<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.base.is_empty() || !text.contains(&self.base) {
            return text.into();
        }
        text.replace(&format!("{}/", self.base), "")
            .replace(&format!("{}\\", self.base), "")
            .into()
    }
}

/// Formats a captured [`StepError`] into a (possibly multi-line) text.
pub trait FailureFormatter {
    /// Formats the given `error`.
    fn format(&self, error: &StepError) -> String;
}

/// [`FailureFormatter`] using the [`fmt::Display`] of a [`StepError`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DisplayFailure;

impl FailureFormatter for DisplayFailure {
    fn format(&self, error: &StepError) -> String {
        error.to_string()
    }
}

/// Suggests a step definition for an undefined [`Step`].
///
/// Consulted only when the runner didn't attach a [`Snippet`] itself.
pub trait SnippetGenerator {
    /// Returns a [`Snippet`] for the given `step`, if possible.
    fn snippet(&self, step: &Step) -> Option<Snippet>;
}

/// Collects statistics of a run and reports them once it's finished.
pub trait SummaryReporter {
    /// Observes the given [`Event`].
    fn observe(&mut self, event: &Event);

    /// Renders the summary lines.
    fn report(&self) -> Vec<Markup>;
}

/// Set of external collaborators a formatter delegates to.
pub struct Collaborators {
    /// [`PathRelativizer`] for paths in comments and failures.
    pub relativizer: Box<dyn PathRelativizer>,

    /// [`FailureFormatter`] for captured [`StepError`]s.
    pub failures: Box<dyn FailureFormatter>,

    /// Optional [`SnippetGenerator`] for undefined steps.
    pub snippets: Option<Box<dyn SnippetGenerator>>,

    /// [`SummaryReporter`] invoked at the end of a run.
    pub summary: Box<dyn SummaryReporter>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            relativizer: Box::new(TrimPath::default()),
            failures: Box::new(DisplayFailure),
            snippets: None,
            summary: Box::new(crate::writer::Summary::default()),
        }
    }
}

impl fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collaborators")
            .field("snippets", &self.snippets.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{DisplayFailure, FailureFormatter as _, PathRelativizer as _, TrimPath};
    use crate::event::StepError;

    #[test]
    fn trims_base_directory_everywhere() {
        let trim = TrimPath::new("/home/me/project/");

        assert_eq!(
            trim.relativize("at /home/me/project/src/lib.rs:3 and /home/me/project/a.rs"),
            "at src/lib.rs:3 and a.rs",
        );
        assert_eq!(trim.relativize("/elsewhere/x.rs"), "/elsewhere/x.rs");
    }

    #[test]
    fn formats_failures_with_display() {
        let err = StepError::Failed("expected 5\ngot 4".into());

        assert_eq!(DisplayFailure.format(&err), "expected 5\ngot 4");
    }
}
