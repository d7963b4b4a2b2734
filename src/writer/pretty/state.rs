// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Transient state of a [`Pretty`] formatter run.
//!
//! [`Pretty`]: super::Pretty

use std::sync::Arc;

use crate::{
    document::{Feature, Outline, Scenario},
    event::StepFinished,
};

/// Default indentation of steps.
pub(crate) const STEP_INDENT: usize = 4;

/// Indentation of steps inside an expanded outline iteration.
pub(crate) const EXPANDED_STEP_INDENT: usize = 8;

/// Header waiting for its [`Feature`]'s background to be rendered first.
#[derive(Clone, Debug)]
pub(crate) enum Deferred {
    /// Header of a [`Scenario`].
    Scenario {
        /// [`Feature`] owning the [`Scenario`].
        feature: Arc<Feature>,

        /// Deferred [`Scenario`].
        scenario: Arc<Scenario>,
    },

    /// Header of an [`Outline`].
    Outline {
        /// [`Feature`] owning the [`Outline`].
        feature: Arc<Feature>,

        /// Deferred [`Outline`].
        outline: Arc<Outline>,
    },
}

/// Render state of a single formatter run.
#[derive(Clone, Debug)]
pub(crate) struct RenderState {
    /// Column the source-location comments are aligned after.
    ///
    /// Only grows during the run, so later [`Feature`]s keep the columns of
    /// earlier ones.
    pub(crate) max_line_length: usize,

    /// Whether a background is being executed.
    pub(crate) in_background: bool,

    /// Whether the background of the current [`Feature`] has been rendered.
    pub(crate) is_background_printed: bool,

    /// Whether the skeleton steps of an [`Outline`] are being rendered.
    pub(crate) in_outline_steps: bool,

    /// Whether an [`Outline`] iteration is being executed.
    pub(crate) in_outline_example: bool,

    /// Whether the skeleton steps and examples header of the current
    /// [`Outline`] have been rendered.
    pub(crate) is_outline_header_printed: bool,

    /// Header deferred until the background is rendered.
    pub(crate) deferred: Option<Deferred>,

    /// Steps of the current [`Outline`] iteration, in execution order.
    pub(crate) delayed_steps: Vec<StepFinished>,

    /// Current indentation of steps.
    pub(crate) step_indent: usize,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            max_line_length: 0,
            in_background: false,
            is_background_printed: false,
            in_outline_steps: false,
            in_outline_example: false,
            is_outline_header_printed: false,
            deferred: None,
            delayed_steps: Vec::new(),
            step_indent: STEP_INDENT,
        }
    }
}

impl RenderState {
    /// Resets the per-[`Feature`] parts of this state.
    pub(crate) fn start_feature(&mut self) {
        self.is_background_printed = false;
        if let Some(d) = self.deferred.take() {
            tracing::warn!(?d, "dropping header deferred in a previous feature");
        }
    }

    /// Indicates whether a header of the given [`Feature`] must wait for its
    /// background.
    pub(crate) const fn must_defer(&self, feature: &Feature) -> bool {
        !self.is_background_printed && feature.has_background()
    }

    /// Returns the current step indentation as spaces.
    pub(crate) fn step_indent(&self) -> String {
        " ".repeat(self.step_indent)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{Deferred, RenderState, STEP_INDENT};
    use crate::document::{Background, Feature, Location, Scenario};

    #[test]
    fn defers_only_until_background_printed() {
        let feature = Feature::new("Feature", "f", Location::default())
            .with_background(Background::new(
                "Background",
                "",
                Location::default(),
                Vec::new(),
            ));
        let mut state = RenderState::default();

        assert!(state.must_defer(&feature));
        state.is_background_printed = true;
        assert!(!state.must_defer(&feature));
        assert!(!state.must_defer(&Feature::default()));
    }

    #[test]
    fn resets_per_feature_except_alignment() {
        let mut state = RenderState {
            max_line_length: 40,
            is_background_printed: true,
            deferred: Some(Deferred::Scenario {
                feature: Arc::default(),
                scenario: Arc::new(Scenario::default()),
            }),
            ..RenderState::default()
        };

        state.start_feature();

        assert_eq!(state.max_line_length, 40);
        assert!(!state.is_background_printed);
        assert!(state.deferred.is_none());
        assert_eq!(state.step_indent().len(), STEP_INDENT);
    }
}
