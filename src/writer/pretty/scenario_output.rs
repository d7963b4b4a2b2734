// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Scenario output handling for the [`Pretty`] formatter.

use std::sync::Arc;

use crate::{
    document::{Feature, Scenario, StepContainer},
    error::WriterResult,
    markup::Markup,
    writer::Output,
};

use super::{
    alignment::{display_width, max_line_length},
    formatting::title_lines,
    pretty_struct::Pretty,
    state::Deferred,
};

impl<O: Output> Pretty<O> {
    /// Outputs the [`Scenario`] header, or defers it until the [`Feature`]'s
    /// background is rendered.
    pub(super) fn scenario_started(
        &mut self,
        feature: &Arc<Feature>,
        scenario: &Arc<Scenario>,
    ) -> WriterResult<()> {
        if self.state.must_defer(feature) {
            tracing::debug!(
                scenario = %scenario.title,
                "deferring scenario header until background is rendered",
            );
            self.state.deferred = Some(Deferred::Scenario {
                feature: Arc::clone(feature),
                scenario: Arc::clone(scenario),
            });
            return Ok(());
        }

        self.state.max_line_length =
            max_line_length(self.state.max_line_length, scenario.as_ref());
        self.print_tags(&scenario.tags, "  ")?;
        self.print_scenario_name(scenario.as_ref())
    }

    /// Outputs the [`Scenario`] footer.
    pub(super) fn scenario_finished(&mut self) -> WriterResult<()> {
        self.output.write_line(&Markup::new())
    }

    /// Outputs the `{keyword}: {title}` lines of the given `container`, with
    /// its source location aligned after the first one.
    pub(super) fn print_scenario_name<C>(
        &mut self,
        container: &C,
    ) -> WriterResult<()>
    where
        C: StepContainer + ?Sized,
    {
        let mut lines =
            title_lines(container.keyword(), container.title(), "  ")
                .into_iter();
        if let Some(first) = lines.next() {
            self.output.write(&Markup::plain(first.as_str()))?;
            self.print_path_comment(
                &container.location().to_string(),
                display_width(&first),
            )?;
        }
        for line in lines {
            self.output.write_line(&Markup::plain(line))?;
        }
        Ok(())
    }
}
