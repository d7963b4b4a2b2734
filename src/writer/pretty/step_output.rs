// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Step output handling for the [`Pretty`] formatter.

use std::cmp;

use crate::{
    document::Step,
    error::WriterResult,
    event::{Status, StepFinished},
    markup::Markup,
    writer::Output,
};

use super::{
    alignment::display_width,
    arguments::colorize,
    formatting::{argument_lines, colored_lines},
    pretty_struct::Pretty,
};

impl<O: Output> Pretty<O> {
    /// Outputs the finished step, buffers it until its outline iteration
    /// finishes, or drops it if it belongs to an already rendered background.
    ///
    /// Side-channel output of the step is written first in any case.
    pub(super) fn step_finished(
        &mut self,
        ev: &StepFinished,
    ) -> WriterResult<()> {
        if let Some(snippet) = self.snippet_of(ev) {
            _ = self.snippets.entry(snippet).or_insert(());
        }

        self.print_side_output(ev.output.as_deref())?;

        if self.state.in_background && self.state.is_background_printed {
            tracing::trace!(step = %ev.step.text, "background step already rendered");
            return Ok(());
        }
        if !self.state.in_background && self.state.in_outline_example {
            tracing::trace!(step = %ev.step.text, "buffering outline step");
            self.state.delayed_steps.push(ev.clone());
            return Ok(());
        }

        self.print_step(&ev.step, ev.status, ev)
    }

    /// Outputs the given `step` colored by `status`, with its [`Definition`]
    /// location, arguments, failure and snippet taken from `ev`.
    ///
    /// Skeleton steps of an outline are rendered without failures.
    ///
    /// [`Definition`]: crate::definition::Definition
    pub(super) fn print_step(
        &mut self,
        step: &Step,
        status: Status,
        ev: &StepFinished,
    ) -> WriterResult<()> {
        let indent = self.state.step_indent();

        let mut line = Markup::plain(indent.as_str());
        _ = line.open(status).text(format!("{} ", step.keyword));
        match &ev.definition {
            Some(def) => {
                _ = line.append(colorize(&step.text, &def.pattern, status));
            }
            None => {
                _ = line.text(step.text.as_str());
            }
        }
        _ = line.close(status);
        self.output.write(&line)?;

        match &ev.definition {
            Some(def) => {
                let width = display_width(&format!("{indent}{}", step.line()));
                self.print_path_comment(&def.location.to_string(), width)?;
                if self.config.expand && self.config.paths {
                    self.state.max_line_length =
                        cmp::max(self.state.max_line_length, width);
                }
            }
            None => self.output.write_line(&Markup::new())?,
        }

        if self.config.multiline_arguments {
            let arg_indent = format!("{indent}  ");
            for arg in &step.arguments {
                for l in argument_lines(arg, &arg_indent, status) {
                    self.output.write_line(&l)?;
                }
            }
        }

        if self.state.in_outline_steps {
            return Ok(());
        }

        if let Some(err) = &ev.error {
            let has_snippet =
                self.config.snippets && self.snippet_of(ev).is_some();
            if !err.is_undefined() || !has_snippet {
                let failure = self.collaborators.failures.format(err);
                let failure = self.relativize(&failure);
                for l in colored_lines(&failure, &format!("{indent}  "), status)
                {
                    self.output.write_line(&l)?;
                }
            }
        }
        Ok(())
    }
}
