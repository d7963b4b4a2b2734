// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Core [`Pretty`] formatter struct and constructors.

use linked_hash_map::LinkedHashMap;

use crate::{
    collaborator::{
        Collaborators, FailureFormatter, PathRelativizer, SnippetGenerator,
        SummaryReporter,
    },
    error::WriterResult,
    event::{Snippet, Status, StepFinished},
    markup::{Color, Markup},
    writer::{Console, Output},
};

use super::{
    alignment::comment_indent,
    cli::{Cli, Config},
    state::RenderState,
};

/// Formatter printing the executed features as is.
///
/// Every executed node is rendered in its declaration order, colored by its
/// [`Status`], with source locations aligned into a single column per block.
///
/// # Ordering
///
/// Expects [`Event`]s in the order a sequential runner emits them. A
/// background is emitted per scenario using it, but rendered only once per
/// feature: headers of scenarios are deferred until it's done.
///
/// [`Event`]: crate::Event
#[derive(Debug)]
pub struct Pretty<O: Output = Console> {
    /// [`Output`] to write the rendered [`Markup`] into.
    pub(super) output: O,

    /// [`Config`] of this [`Pretty`] formatter.
    pub(super) config: Config,

    /// [`RenderState`] of the current run.
    pub(super) state: RenderState,

    /// External [`Collaborators`].
    pub(super) collaborators: Collaborators,

    /// Distinct [`Snippet`]s of undefined steps, in first-seen order.
    pub(super) snippets: LinkedHashMap<Snippet, ()>,
}

impl Pretty {
    /// Creates a new [`Pretty`] formatter outputting to [`io::Stdout`] with
    /// the default [`Config`].
    ///
    /// [`io::Stdout`]: std::io::Stdout
    #[must_use]
    pub fn stdout() -> Self {
        Self::from_cli(Cli::default())
    }

    /// Creates a new [`Pretty`] formatter outputting to [`io::Stdout`]
    /// configured with the given [`Cli`] options.
    ///
    /// [`io::Stdout`]: std::io::Stdout
    #[must_use]
    pub fn from_cli(cli: Cli) -> Self {
        Self::new(Console::stdout(cli.color), cli.into())
    }
}

impl<O: Output> Pretty<O> {
    /// Creates a new [`Pretty`] formatter writing into the given [`Output`].
    #[must_use]
    pub fn new(output: O, config: Config) -> Self {
        Self {
            output,
            config,
            state: RenderState::default(),
            collaborators: Collaborators::default(),
            snippets: LinkedHashMap::new(),
        }
    }

    /// Replaces the [`PathRelativizer`] of this [`Pretty`] formatter.
    #[must_use]
    pub fn with_relativizer(
        mut self,
        relativizer: impl PathRelativizer + 'static,
    ) -> Self {
        self.collaborators.relativizer = Box::new(relativizer);
        self
    }

    /// Replaces the [`FailureFormatter`] of this [`Pretty`] formatter.
    #[must_use]
    pub fn with_failure_formatter(
        mut self,
        failures: impl FailureFormatter + 'static,
    ) -> Self {
        self.collaborators.failures = Box::new(failures);
        self
    }

    /// Sets the [`SnippetGenerator`] consulted for undefined steps having no
    /// [`Snippet`] attached by the runner.
    #[must_use]
    pub fn with_snippet_generator(
        mut self,
        snippets: impl SnippetGenerator + 'static,
    ) -> Self {
        self.collaborators.snippets = Some(Box::new(snippets));
        self
    }

    /// Replaces the [`SummaryReporter`] of this [`Pretty`] formatter.
    #[must_use]
    pub fn with_summary_reporter(
        mut self,
        summary: impl SummaryReporter + 'static,
    ) -> Self {
        self.collaborators.summary = Box::new(summary);
        self
    }

    /// Returns the [`Config`] of this [`Pretty`] formatter.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the [`Output`] of this [`Pretty`] formatter.
    #[must_use]
    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Unwraps this [`Pretty`] formatter into its [`Output`].
    #[must_use]
    pub fn into_output(self) -> O {
        self.output
    }

    /// Returns the [`Snippet`] of the given finished step: the one attached
    /// by the runner, or a generated one for an undefined step.
    pub(super) fn snippet_of(&self, ev: &StepFinished) -> Option<Snippet> {
        ev.snippet.clone().or_else(|| {
            (ev.status == Status::Undefined)
                .then(|| self.collaborators.snippets.as_ref())
                .flatten()
                .and_then(|g| g.snippet(&ev.step))
        })
    }

    /// Relativizes paths in the given `text`.
    pub(super) fn relativize(&self, text: &str) -> String {
        self.collaborators.relativizer.relativize(text).into_owned()
    }

    /// Outputs the source-location comment `# {path}` after `width`
    /// characters of an already written line, aligning it to the current
    /// maximum line length.
    ///
    /// Outputs just a line break if paths are disabled.
    pub(super) fn print_path_comment(
        &mut self,
        path: &str,
        width: usize,
    ) -> WriterResult<()> {
        if !self.config.paths {
            return self.output.write_line(&Markup::new());
        }

        let indent = comment_indent(self.state.max_line_length, width);
        let mut m = Markup::plain(" ".repeat(indent + 1));
        _ = m.paint(Color::Comment, format!("# {}", self.relativize(path)));
        self.output.write_line(&m)
    }
}
