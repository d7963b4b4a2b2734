// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Background output handling for the [`Pretty`] formatter.

use crate::{
    document::Background, error::WriterResult, markup::Markup, writer::Output,
};

use super::{alignment::max_line_length, pretty_struct::Pretty, state::Deferred};

impl<O: Output> Pretty<O> {
    /// Outputs the [`Background`] header, unless it's already rendered for
    /// the current feature.
    pub(super) fn background_started(
        &mut self,
        bg: &Background,
    ) -> WriterResult<()> {
        self.state.in_background = true;
        if self.state.is_background_printed {
            return Ok(());
        }

        self.state.max_line_length =
            max_line_length(self.state.max_line_length, bg);
        self.print_scenario_name(bg)
    }

    /// Outputs the [`Background`] footer and the header deferred until it,
    /// unless it's already rendered for the current feature.
    pub(super) fn background_finished(&mut self) -> WriterResult<()> {
        self.state.in_background = false;
        if self.state.is_background_printed {
            return Ok(());
        }
        self.state.is_background_printed = true;

        self.output.write_line(&Markup::new())?;

        match self.state.deferred.take() {
            Some(Deferred::Scenario { feature, scenario }) => {
                tracing::debug!(
                    scenario = %scenario.title,
                    "flushing deferred scenario header",
                );
                self.scenario_started(&feature, &scenario)
            }
            Some(Deferred::Outline { feature, outline }) => {
                tracing::debug!(
                    outline = %outline.title,
                    "flushing deferred outline header",
                );
                self.outline_started(&feature, &outline)
            }
            None => Ok(()),
        }
    }
}
