// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Exercise and feature output handling for the [`Pretty`] formatter.

use crate::{
    document::Feature,
    error::WriterResult,
    event::Status,
    markup::{Color, Markup},
    writer::Output,
};

use super::{
    formatting::{colored_lines, tags_line, title_lines},
    pretty_struct::Pretty,
};

/// Header preceding the collected snippets of undefined steps.
const SNIPPETS_HEADER: &str =
    "You can implement step definitions for undefined steps with these \
     snippets:";

impl<O: Output> Pretty<O> {
    /// Outputs the [`Feature`] header: tags, title, description and a blank
    /// line.
    pub(super) fn feature_started(
        &mut self,
        feature: &Feature,
    ) -> WriterResult<()> {
        self.state.start_feature();
        tracing::debug!(feature = %feature.title, "feature started");

        self.print_tags(&feature.tags, "")?;
        for line in title_lines(&feature.keyword, &feature.title, "") {
            self.output.write_line(&Markup::plain(line))?;
        }
        if let Some(description) = &feature.description {
            for line in description.split('\n') {
                self.output.write_line(&Markup::plain(format!("  {line}")))?;
            }
        }
        self.output.write_line(&Markup::new())
    }

    /// Outputs `@a @b` line of the given `tags`, if there are any.
    pub(super) fn print_tags(
        &mut self,
        tags: &[String],
        indent: &str,
    ) -> WriterResult<()> {
        if tags.is_empty() {
            return Ok(());
        }
        let mut m = Markup::plain(indent);
        _ = m.paint(Color::Tag, tags_line(tags));
        self.output.write_line(&m)
    }

    /// Outputs the summary of the run and the collected snippets of undefined
    /// steps.
    pub(super) fn exercise_finished(&mut self) -> WriterResult<()> {
        for line in self.collaborators.summary.report() {
            self.output.write_line(&line)?;
        }

        if !self.config.snippets || self.snippets.is_empty() {
            return Ok(());
        }
        tracing::debug!(count = self.snippets.len(), "printing snippets");

        let undefined = Color::Status(Status::Undefined);
        self.output.write_line(&Markup::new())?;
        self.output.write_line(&Markup::colored(undefined, SNIPPETS_HEADER))?;
        let lines = self
            .snippets
            .keys()
            .flat_map(|s| {
                std::iter::once(Markup::new())
                    .chain(colored_lines(s, "", undefined))
            })
            .collect::<Vec<_>>();
        for line in lines {
            self.output.write_line(&line)?;
        }
        Ok(())
    }
}
