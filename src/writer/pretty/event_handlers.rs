// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Event handling implementation for the [`Pretty`] formatter.

use crate::{
    error::WriterResult,
    event::{Event, EventKind},
    markup::Markup,
    writer::{Formatter, Output, Subscription},
};

use super::pretty_struct::Pretty;

/// Priority of every [`Pretty`] subscription.
///
/// Low enough for other formatters and listeners to observe events first.
pub const PRIORITY: i32 = -50;

/// Subscription table of the [`Pretty`] formatter.
const SUBSCRIPTIONS: &[Subscription] = &[
    Subscription::new(EventKind::ExerciseStarted, "exercise_started", PRIORITY),
    Subscription::new(
        EventKind::ExerciseFinished,
        "exercise_finished",
        PRIORITY,
    ),
    Subscription::new(EventKind::FeatureStarted, "feature_started", PRIORITY),
    Subscription::new(EventKind::FeatureFinished, "feature_finished", PRIORITY),
    Subscription::new(EventKind::ScenarioStarted, "scenario_started", PRIORITY),
    Subscription::new(
        EventKind::ScenarioFinished,
        "scenario_finished",
        PRIORITY,
    ),
    Subscription::new(
        EventKind::BackgroundStarted,
        "background_started",
        PRIORITY,
    ),
    Subscription::new(
        EventKind::BackgroundFinished,
        "background_finished",
        PRIORITY,
    ),
    Subscription::new(EventKind::OutlineStarted, "outline_started", PRIORITY),
    Subscription::new(EventKind::OutlineFinished, "outline_finished", PRIORITY),
    Subscription::new(
        EventKind::OutlineExampleStarted,
        "outline_example_started",
        PRIORITY,
    ),
    Subscription::new(
        EventKind::OutlineExampleFinished,
        "outline_example_finished",
        PRIORITY,
    ),
    Subscription::new(EventKind::StepFinished, "step_finished", PRIORITY),
    Subscription::new(EventKind::HookFinished, "hook_finished", PRIORITY),
];

impl<O: Output> Formatter for Pretty<O> {
    fn name(&self) -> &'static str {
        "pretty"
    }

    fn description(&self) -> &'static str {
        "Prints the feature as is."
    }

    fn subscriptions(&self) -> &'static [Subscription] {
        SUBSCRIPTIONS
    }

    fn handle_event(&mut self, event: &Event) {
        self.collaborators.summary.observe(event);

        self.dispatch(event).unwrap_or_else(|e| {
            tracing::warn!(
                kind = %event.kind(),
                error = %e,
                "failed to write pretty output",
            );
        });
    }
}

impl<O: Output> Pretty<O> {
    /// Passes the given [`Event`] to its handler.
    fn dispatch(&mut self, event: &Event) -> WriterResult<()> {
        match event {
            Event::ExerciseStarted => Ok(()),
            Event::ExerciseFinished => self.exercise_finished(),
            Event::FeatureStarted(f) => self.feature_started(f),
            Event::FeatureFinished(_) => Ok(()),
            Event::BackgroundStarted(bg) => self.background_started(bg),
            Event::BackgroundFinished(..) => self.background_finished(),
            Event::OutlineStarted { feature, outline } => {
                self.outline_started(feature, outline)
            }
            Event::OutlineFinished(..) => self.outline_finished(),
            Event::OutlineExampleStarted { .. } => {
                self.outline_example_started();
                Ok(())
            }
            Event::OutlineExampleFinished { outline, iteration, status } => {
                self.outline_example_finished(outline, *iteration, *status)
            }
            Event::ScenarioStarted { feature, scenario } => {
                self.scenario_started(feature, scenario)
            }
            Event::ScenarioFinished(..) => self.scenario_finished(),
            Event::StepFinished(ev) => self.step_finished(ev),
            Event::HookFinished { output } => {
                self.print_side_output(output.as_deref())
            }
        }
    }

    /// Outputs side-channel `output` captured by the runner verbatim.
    pub(super) fn print_side_output(
        &mut self,
        output: Option<&str>,
    ) -> WriterResult<()> {
        match output {
            Some(out) if !out.is_empty() => {
                self.output.write(&Markup::plain(out))
            }
            Some(_) | None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PRIORITY;
    use crate::{
        event::EventKind,
        markup::Markup,
        writer::{Config, Formatter as _, Pretty},
    };

    #[test]
    fn subscribes_to_every_event_at_low_priority() {
        let pretty = Pretty::new(Vec::<Markup>::new(), Config::default());

        assert_eq!(pretty.name(), "pretty");
        assert_eq!(pretty.description(), "Prints the feature as is.");
        assert_eq!(pretty.subscriptions().len(), 14);
        assert!(pretty.subscriptions().iter().all(|s| s.priority == PRIORITY));
        assert_eq!(
            pretty.subscription(EventKind::StepFinished).map(|s| s.handler),
            Some("step_finished"),
        );
    }
}
