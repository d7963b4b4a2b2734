// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Scenario outline output handling for the [`Pretty`] formatter.
//!
//! Steps of an outline iteration are buffered until the iteration finishes.
//! The first iteration renders the outline's skeleton steps and the examples
//! header, then every iteration renders either its table row (compact mode)
//! or its full list of resolved steps (expanded mode).

use std::{mem, sync::Arc};

use itertools::Itertools as _;

use crate::{
    document::{Feature, Outline},
    error::WriterResult,
    event::Status,
    markup::Markup,
    writer::Output,
};

use super::{
    alignment::max_line_length,
    formatting::{colored_lines, colorized_row},
    pretty_struct::Pretty,
    state::{Deferred, EXPANDED_STEP_INDENT, STEP_INDENT},
};

/// Indentation of examples table rows.
const ROW_INDENT: &str = "      ";

/// Indentation of the first line of a failure printed under an examples
/// table row.
const ROW_FAILURE_INDENT: &str = "        ";

/// Indentation of the continuation lines of a failure printed under an
/// examples table row, aligned with the row itself.
const ROW_FAILURE_CONTINUATION_INDENT: &str = ROW_INDENT;

impl<O: Output> Pretty<O> {
    /// Outputs the [`Outline`] header, or defers it until the [`Feature`]'s
    /// background is rendered.
    pub(super) fn outline_started(
        &mut self,
        feature: &Arc<Feature>,
        outline: &Arc<Outline>,
    ) -> WriterResult<()> {
        if self.state.must_defer(feature) {
            tracing::debug!(
                outline = %outline.title,
                "deferring outline header until background is rendered",
            );
            self.state.deferred = Some(Deferred::Outline {
                feature: Arc::clone(feature),
                outline: Arc::clone(outline),
            });
            return Ok(());
        }

        self.state.is_outline_header_printed = false;
        self.state.max_line_length =
            max_line_length(self.state.max_line_length, outline.as_ref());
        self.print_tags(&outline.tags, "  ")?;
        self.print_scenario_name(outline.as_ref())
    }

    /// Starts buffering steps of a new [`Outline`] iteration.
    pub(super) fn outline_example_started(&mut self) {
        self.state.in_outline_example = true;
        self.state.delayed_steps.clear();
    }

    /// Outputs the buffered [`Outline`] iteration.
    pub(super) fn outline_example_finished(
        &mut self,
        outline: &Outline,
        iteration: usize,
        status: Status,
    ) -> WriterResult<()> {
        self.state.in_outline_example = false;

        if !self.state.is_outline_header_printed {
            self.print_outline_steps(outline)?;
            self.print_examples_header(outline)?;
            self.state.is_outline_header_printed = true;
        }

        if self.config.expand {
            self.print_expanded_example(outline, iteration)
        } else {
            self.print_example_row(outline, iteration, status)
        }
    }

    /// Outputs the [`Outline`] footer.
    pub(super) fn outline_finished(&mut self) -> WriterResult<()> {
        self.output.write_line(&Markup::new())
    }

    /// Outputs the skeleton steps of the [`Outline`] as skipped, using the
    /// buffered steps of its first iteration for their [`Definition`]s.
    ///
    /// [`Definition`]: crate::definition::Definition
    fn print_outline_steps(&mut self, outline: &Outline) -> WriterResult<()> {
        let delayed = self.state.delayed_steps.clone();

        self.state.in_outline_steps = true;
        let result = delayed.iter().try_for_each(|ev| {
            let step = outline.skeleton_of(&ev.step).unwrap_or(&ev.step);
            self.print_step(step, Status::Skipped, ev)
        });
        self.state.in_outline_steps = false;
        result
    }

    /// Outputs the examples section header: the table header row in compact
    /// mode, just a blank line in expanded mode.
    fn print_examples_header(&mut self, outline: &Outline) -> WriterResult<()> {
        self.output.write_line(&Markup::new())?;
        if self.config.expand {
            return Ok(());
        }

        let examples = &outline.examples;
        self.output.write_line(&Markup::plain(format!(
            "    {}:",
            examples.keyword,
        )))?;
        self.output.write_line(&colorized_row(
            &examples.table.padded_row(0),
            ROW_INDENT,
            Status::Skipped,
        ))
    }

    /// Outputs the examples table row of the given `iteration`, followed by
    /// failures of its steps.
    ///
    /// A failure starts two columns right of the row and continues at the
    /// row's own indentation.
    fn print_example_row(
        &mut self,
        outline: &Outline,
        iteration: usize,
        status: Status,
    ) -> WriterResult<()> {
        self.output.write_line(&colorized_row(
            &outline.examples.table.padded_row(iteration + 1),
            ROW_INDENT,
            status,
        ))?;

        let failures = self
            .state
            .delayed_steps
            .iter()
            .filter_map(|ev| {
                ev.error
                    .as_ref()
                    .filter(|e| !e.is_undefined())
                    .map(|e| (ev.status, self.collaborators.failures.format(e)))
            })
            .collect::<Vec<_>>();
        for (status, failure) in failures {
            let failure = self.relativize(&failure);
            let (first, rest) = failure
                .split_once('\n')
                .map_or((failure.as_str(), None), |(f, r)| (f, Some(r)));
            let continuation = rest
                .map(|r| {
                    colored_lines(r, ROW_FAILURE_CONTINUATION_INDENT, status)
                })
                .unwrap_or_default();
            for line in colored_lines(first, ROW_FAILURE_INDENT, status)
                .into_iter()
                .chain(continuation)
            {
                self.output.write_line(&line)?;
            }
        }
        Ok(())
    }

    /// Outputs the given `iteration` as `{keyword}: | a | b |` followed by its
    /// resolved steps.
    fn print_expanded_example(
        &mut self,
        outline: &Outline,
        iteration: usize,
    ) -> WriterResult<()> {
        let examples = &outline.examples;
        let row = examples.row(iteration).unwrap_or_default();
        self.output.write_line(&Markup::plain(format!(
            "{ROW_INDENT}{}: | {} |",
            examples.keyword,
            row.iter().join(" | "),
        )))?;

        let delayed = mem::take(&mut self.state.delayed_steps);
        self.state.step_indent = EXPANDED_STEP_INDENT;
        let result = delayed
            .iter()
            .try_for_each(|ev| self.print_step(&ev.step, ev.status, ev));
        self.state.step_indent = STEP_INDENT;
        self.state.delayed_steps = delayed;
        result?;

        if iteration + 1 < examples.iterations() {
            self.output.write_line(&Markup::new())?;
        }
        Ok(())
    }
}
