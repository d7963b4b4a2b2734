// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Key occurrences in the lifecycle of a test run.
//!
//! A runner walks a parsed [`Feature`] and emits [`Event`]s in order, waiting
//! for every subscribed formatter to handle an [`Event`] before emitting the
//! next one.
//!
//! [`Feature`]: crate::document::Feature

use std::{any::Any, fmt, sync::Arc};

use derive_more::with_trait::{Deref, Display, Error, From, Into};

use crate::{
    definition::Definition,
    document::{Background, Feature, Outline, Scenario, Step},
};

/// Alias for a [`catch_unwind()`] error payload.
///
/// [`catch_unwind()`]: std::panic::catch_unwind()
pub type Info = Arc<dyn Any + Send + Sync + 'static>;

/// Execution status of a step, scenario or outline iteration.
///
/// Ordered from the least to the most severe.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Status {
    /// Executed successfully.
    #[display("passed")]
    Passed,

    /// Not executed, because of a previous failure or by request.
    #[display("skipped")]
    Skipped,

    /// Marked as not implemented yet.
    #[display("pending")]
    Pending,

    /// No [`Definition`] matches.
    #[display("undefined")]
    Undefined,

    /// Executed unsuccessfully.
    #[display("failed")]
    Failed,
}

impl Status {
    /// All the [`Status`]es from the least to the most severe.
    pub const ALL: [Self; 5] = [
        Self::Passed,
        Self::Skipped,
        Self::Pending,
        Self::Undefined,
        Self::Failed,
    ];
}

/// Failure captured while executing a [`Step`].
#[derive(Clone, Debug, Error)]
pub enum StepError {
    /// No [`Definition`] matches the [`Step`].
    Undefined,

    /// [`Definition`] exists but isn't implemented yet.
    Pending(#[error(not(source))] String),

    /// [`Step`] failed with the given message.
    Failed(#[error(not(source))] String),

    /// [`Step`] panicked.
    Panic(#[error(not(source))] Info),
}

impl StepError {
    /// Indicates whether this is a [`StepError::Undefined`].
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
}

impl Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "Undefined step"),
            Self::Pending(msg) => write!(f, "TODO: {msg}"),
            Self::Failed(msg) => write!(f, "{msg}"),
            Self::Panic(info) => write!(f, "{}", coerce_error(info)),
        }
    }
}

/// Coerces a panic payload into a readable string.
#[must_use]
pub fn coerce_error(err: &Info) -> &str {
    (**err)
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| (**err).downcast_ref::<&str>().copied())
        .unwrap_or("(Could not resolve panic payload)")
}

/// Suggested step definition for an undefined [`Step`].
#[derive(Clone, Debug, Deref, Display, Eq, From, Hash, Into, PartialEq)]
pub struct Snippet(String);

impl From<&str> for Snippet {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Payload of a [`Step`] having finished its execution.
#[derive(Clone, Debug)]
pub struct StepFinished {
    /// Executed [`Step`].
    pub step: Arc<Step>,

    /// [`Status`] of the execution.
    pub status: Status,

    /// [`Definition`] the [`Step`] was matched with, if any.
    pub definition: Option<Arc<Definition>>,

    /// [`Snippet`] suggested for an undefined [`Step`].
    pub snippet: Option<Snippet>,

    /// Failure captured during the execution.
    pub error: Option<StepError>,

    /// Side-channel output captured during the execution.
    pub output: Option<String>,
}

impl StepFinished {
    /// Creates a new [`StepFinished`] without any details.
    #[must_use]
    pub const fn new(step: Arc<Step>, status: Status) -> Self {
        Self {
            step,
            status,
            definition: None,
            snippet: None,
            error: None,
            output: None,
        }
    }

    /// Sets the matched [`Definition`].
    #[must_use]
    pub fn with_definition(mut self, definition: Arc<Definition>) -> Self {
        self.definition = Some(definition);
        self
    }

    /// Sets the suggested [`Snippet`].
    #[must_use]
    pub fn with_snippet(mut self, snippet: impl Into<Snippet>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    /// Sets the captured [`StepError`].
    #[must_use]
    pub fn with_error(mut self, error: StepError) -> Self {
        self.error = Some(error);
        self
    }

    /// Sets the captured side-channel output.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }
}

/// Single occurrence in a test run.
#[derive(Clone, Debug)]
pub enum Event {
    /// Whole run started.
    ExerciseStarted,

    /// Whole run finished.
    ExerciseFinished,

    /// [`Feature`] started.
    FeatureStarted(Arc<Feature>),

    /// [`Feature`] finished.
    FeatureFinished(Arc<Feature>),

    /// [`Background`] started for the next scenario using it.
    BackgroundStarted(Arc<Background>),

    /// [`Background`] finished for the current scenario.
    BackgroundFinished(Arc<Background>, Status),

    /// [`Outline`] started.
    OutlineStarted {
        /// [`Feature`] owning the [`Outline`].
        feature: Arc<Feature>,

        /// Started [`Outline`].
        outline: Arc<Outline>,
    },

    /// [`Outline`] finished.
    OutlineFinished(Arc<Outline>, Status),

    /// Single iteration of an [`Outline`] started.
    OutlineExampleStarted {
        /// [`Outline`] being iterated.
        outline: Arc<Outline>,

        /// Zero-based index of the example row.
        iteration: usize,
    },

    /// Single iteration of an [`Outline`] finished.
    OutlineExampleFinished {
        /// [`Outline`] being iterated.
        outline: Arc<Outline>,

        /// Zero-based index of the example row.
        iteration: usize,

        /// Overall [`Status`] of the iteration.
        status: Status,
    },

    /// [`Scenario`] started.
    ScenarioStarted {
        /// [`Feature`] owning the [`Scenario`].
        feature: Arc<Feature>,

        /// Started [`Scenario`].
        scenario: Arc<Scenario>,
    },

    /// [`Scenario`] finished.
    ScenarioFinished(Arc<Scenario>, Status),

    /// [`Step`] finished.
    StepFinished(StepFinished),

    /// Hook finished, possibly with some captured side-channel output.
    HookFinished {
        /// Side-channel output captured during the hook.
        output: Option<String>,
    },
}

impl Event {
    /// Returns the [`EventKind`] of this [`Event`].
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::ExerciseStarted => EventKind::ExerciseStarted,
            Self::ExerciseFinished => EventKind::ExerciseFinished,
            Self::FeatureStarted(_) => EventKind::FeatureStarted,
            Self::FeatureFinished(_) => EventKind::FeatureFinished,
            Self::BackgroundStarted(_) => EventKind::BackgroundStarted,
            Self::BackgroundFinished(..) => EventKind::BackgroundFinished,
            Self::OutlineStarted { .. } => EventKind::OutlineStarted,
            Self::OutlineFinished(..) => EventKind::OutlineFinished,
            Self::OutlineExampleStarted { .. } => {
                EventKind::OutlineExampleStarted
            }
            Self::OutlineExampleFinished { .. } => {
                EventKind::OutlineExampleFinished
            }
            Self::ScenarioStarted { .. } => EventKind::ScenarioStarted,
            Self::ScenarioFinished(..) => EventKind::ScenarioFinished,
            Self::StepFinished(_) => EventKind::StepFinished,
            Self::HookFinished { .. } => EventKind::HookFinished,
        }
    }
}

/// Discriminant of an [`Event`], used in subscription tables.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum EventKind {
    /// [`Event::ExerciseStarted`].
    #[display("exercise.before")]
    ExerciseStarted,

    /// [`Event::ExerciseFinished`].
    #[display("exercise.after")]
    ExerciseFinished,

    /// [`Event::FeatureStarted`].
    #[display("feature.before")]
    FeatureStarted,

    /// [`Event::FeatureFinished`].
    #[display("feature.after")]
    FeatureFinished,

    /// [`Event::BackgroundStarted`].
    #[display("background.before")]
    BackgroundStarted,

    /// [`Event::BackgroundFinished`].
    #[display("background.after")]
    BackgroundFinished,

    /// [`Event::OutlineStarted`].
    #[display("outline.before")]
    OutlineStarted,

    /// [`Event::OutlineFinished`].
    #[display("outline.after")]
    OutlineFinished,

    /// [`Event::OutlineExampleStarted`].
    #[display("outline.example.before")]
    OutlineExampleStarted,

    /// [`Event::OutlineExampleFinished`].
    #[display("outline.example.after")]
    OutlineExampleFinished,

    /// [`Event::ScenarioStarted`].
    #[display("scenario.before")]
    ScenarioStarted,

    /// [`Event::ScenarioFinished`].
    #[display("scenario.after")]
    ScenarioFinished,

    /// [`Event::StepFinished`].
    #[display("step.after")]
    StepFinished,

    /// [`Event::HookFinished`].
    #[display("hook.after")]
    HookFinished,
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{coerce_error, Info, Status, StepError};

    #[test]
    fn orders_statuses_by_severity() {
        assert!(Status::Passed < Status::Skipped);
        assert!(Status::Undefined < Status::Failed);
        assert_eq!(Status::ALL.iter().max(), Some(&Status::Failed));
    }

    #[test]
    fn status_names_colors() {
        assert_eq!(Status::Pending.to_string(), "pending");
    }

    #[test]
    fn coerces_panic_payloads() {
        let owned: Info = Arc::new(String::from("boom"));
        let borrowed: Info = Arc::new("bang");
        let other: Info = Arc::new(42_u8);

        assert_eq!(coerce_error(&owned), "boom");
        assert_eq!(coerce_error(&borrowed), "bang");
        assert_eq!(coerce_error(&other), "(Could not resolve panic payload)");
    }

    #[test]
    fn displays_step_errors() {
        let panic: Info = Arc::new("assertion failed");

        assert_eq!(StepError::Panic(panic).to_string(), "assertion failed");
        assert_eq!(StepError::Failed("nope".into()).to_string(), "nope");
        assert!(StepError::Undefined.is_undefined());
    }
}
