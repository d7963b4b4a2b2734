// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Default [`SummaryReporter`] counting scenarios and steps.

use std::collections::HashMap;

use itertools::Itertools as _;

use crate::{
    collaborator::SummaryReporter,
    event::{Event, Status},
    markup::Markup,
};

/// Execution statistics for tracking results per [`Status`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Stats {
    counts: HashMap<Status, usize>,
}

impl Stats {
    /// Creates a new [`Stats`] instance with all counts set to zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the count of the given [`Status`] by one.
    pub fn record(&mut self, status: Status) {
        *self.counts.entry(status).or_default() += 1;
    }

    /// Returns the count of the given [`Status`].
    #[must_use]
    pub fn count(&self, status: Status) -> usize {
        self.counts.get(&status).copied().unwrap_or_default()
    }

    /// Returns the total number of recorded items.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Returns `true` if there are any failed items.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.count(Status::Failed) > 0
    }

    /// Renders `N {noun}s (x passed, y failed)`, or `No {noun}s` if empty.
    fn render(&self, noun: &str) -> Markup {
        let total = self.total();
        if total == 0 {
            return Markup::plain(format!("No {noun}s"));
        }

        let mut m = Markup::plain(format!(
            "{total} {noun}{} (",
            if total == 1 { "" } else { "s" },
        ));
        let parts = Status::ALL
            .into_iter()
            .filter(|s| self.count(*s) > 0)
            .map(|s| Markup::colored(s, format!("{} {s}", self.count(s))))
            .collect::<Vec<_>>();
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                _ = m.text(", ");
            }
            _ = m.append(part);
        }
        _ = m.text(")");
        m
    }
}

/// Summary of a run: [`Stats`] of scenarios and steps.
///
/// Every [`Outline`] iteration counts as a separate scenario.
///
/// [`Outline`]: crate::document::Outline
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    /// [`Stats`] of finished scenarios.
    pub scenarios: Stats,

    /// [`Stats`] of finished steps.
    pub steps: Stats,
}

impl SummaryReporter for Summary {
    fn observe(&mut self, event: &Event) {
        match event {
            Event::ScenarioFinished(_, status)
            | Event::OutlineExampleFinished { status, .. } => {
                self.scenarios.record(*status);
            }
            Event::StepFinished(ev) => self.steps.record(ev.status),
            Event::ExerciseStarted
            | Event::ExerciseFinished
            | Event::FeatureStarted(_)
            | Event::FeatureFinished(_)
            | Event::BackgroundStarted(_)
            | Event::BackgroundFinished(..)
            | Event::OutlineStarted { .. }
            | Event::OutlineFinished(..)
            | Event::OutlineExampleStarted { .. }
            | Event::ScenarioStarted { .. }
            | Event::HookFinished { .. } => {}
        }
    }

    fn report(&self) -> Vec<Markup> {
        vec![self.scenarios.render("scenario"), self.steps.render("step")]
    }
}

impl Summary {
    /// Returns plain text of the report, one line per [`Stats`].
    #[must_use]
    pub fn to_plain(&self) -> String {
        self.report().iter().map(Markup::to_plain).join("\n")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{Stats, Summary};
    use crate::{
        collaborator::SummaryReporter as _,
        document::{Location, Scenario, Step},
        event::{Event, Status, StepFinished},
    };

    #[test]
    fn new_stats_all_zero() {
        let stats = Stats::new();

        assert_eq!(stats.total(), 0);
        assert!(!stats.has_failures());
    }

    #[test]
    fn counts_scenarios_and_steps() {
        let sc = Arc::new(Scenario::new(
            "Scenario",
            "one",
            Location::default(),
            [Step::new("Given", "x", Location::default())],
        ));
        let mut summary = Summary::default();
        summary.observe(&Event::StepFinished(StepFinished::new(
            Arc::clone(&sc.steps[0]),
            Status::Passed,
        )));
        summary.observe(&Event::ScenarioFinished(Arc::clone(&sc), Status::Passed));
        summary.observe(&Event::ScenarioFinished(sc, Status::Failed));

        assert_eq!(
            summary.to_plain(),
            "2 scenarios (1 passed, 1 failed)\n1 step (1 passed)",
        );
        assert!(summary.scenarios.has_failures());
    }

    #[test]
    fn reports_empty_run() {
        assert_eq!(Summary::default().to_plain(), "No scenarios\nNo steps");
    }

    #[test]
    fn colors_counts_by_status() {
        let mut stats = Stats::new();
        stats.record(Status::Undefined);

        assert_eq!(
            stats.render("step").to_string(),
            "1 step ({+undefined}1 undefined{-undefined})",
        );
    }
}
