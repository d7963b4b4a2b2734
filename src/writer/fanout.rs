// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Passing events to multiple [`Formatter`]s in their priority order.

use std::{cmp, fmt};

use itertools::Itertools as _;

use crate::event::Event;

use super::Formatter;

/// Wrapper for passing [`Event`]s to multiple [`Formatter`]s.
///
/// Every [`Event`] is passed only to the [`Formatter`]s subscribed to its
/// [`EventKind`], higher priorities first. [`Formatter`]s of equal priority
/// receive it in the order they were added.
///
/// [`EventKind`]: crate::event::EventKind
#[derive(Default)]
pub struct Fanout {
    /// [`Formatter`]s to pass [`Event`]s to.
    formatters: Vec<Box<dyn Formatter>>,
}

impl Fanout {
    /// Creates a new empty [`Fanout`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the given [`Formatter`] to this [`Fanout`].
    #[must_use]
    pub fn with(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatters.push(Box::new(formatter));
        self
    }

    /// Returns the [`Formatter`]s of this [`Fanout`] in the order they were
    /// added.
    #[must_use]
    pub fn formatters(&self) -> &[Box<dyn Formatter>] {
        &self.formatters
    }

    /// Passes the given [`Event`] to every subscribed [`Formatter`].
    pub fn handle_event(&mut self, event: &Event) {
        let kind = event.kind();
        let order = self
            .formatters
            .iter()
            .enumerate()
            .filter_map(|(i, f)| f.subscription(kind).map(|s| (i, s.priority)))
            .sorted_by_key(|(_, priority)| cmp::Reverse(*priority))
            .map(|(i, _)| i)
            .collect::<Vec<_>>();

        for i in order {
            tracing::trace!(
                formatter = self.formatters[i].name(),
                %kind,
                "dispatching event",
            );
            self.formatters[i].handle_event(event);
        }
    }
}

impl fmt::Debug for Fanout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fanout")
            .field(
                "formatters",
                &self.formatters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::Fanout;
    use crate::{
        event::{Event, EventKind},
        writer::{Formatter, Subscription},
    };

    const EARLY: &[Subscription] = &[
        Subscription::new(EventKind::ExerciseStarted, "exercise_started", 10),
        Subscription::new(EventKind::ExerciseFinished, "exercise_finished", 10),
    ];

    const LATE: &[Subscription] =
        &[Subscription::new(EventKind::ExerciseFinished, "exercise_finished", -50)];

    struct Recorder {
        name: &'static str,
        subscriptions: &'static [Subscription],
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Formatter for Recorder {
        fn name(&self) -> &'static str {
            self.name
        }

        fn description(&self) -> &'static str {
            "Records events."
        }

        fn subscriptions(&self) -> &'static [Subscription] {
            self.subscriptions
        }

        fn handle_event(&mut self, event: &Event) {
            self.log.borrow_mut().push(format!("{}:{}", self.name, event.kind()));
        }
    }

    fn fanout(log: &Rc<RefCell<Vec<String>>>) -> Fanout {
        Fanout::new()
            .with(Recorder {
                name: "late",
                subscriptions: LATE,
                log: Rc::clone(log),
            })
            .with(Recorder {
                name: "early",
                subscriptions: EARLY,
                log: Rc::clone(log),
            })
    }

    #[test]
    fn dispatches_higher_priority_first() {
        let log = Rc::default();
        let mut fanout = fanout(&log);

        fanout.handle_event(&Event::ExerciseFinished);

        assert_eq!(
            *log.borrow(),
            ["early:exercise.after", "late:exercise.after"],
        );
    }

    #[test]
    fn skips_unsubscribed_formatters() {
        let log = Rc::default();
        let mut fanout = fanout(&log);

        fanout.handle_event(&Event::ExerciseStarted);

        assert_eq!(*log.borrow(), ["early:exercise.before"]);
    }

    #[test]
    fn debugs_formatter_names() {
        let log = Rc::default();

        assert_eq!(
            format!("{:?}", fanout(&log)),
            r#"Fanout { formatters: ["late", "early"] }"#,
        );
    }
}
