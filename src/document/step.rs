// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [`Step`]s and their multi-line [`Argument`]s.

use derive_more::with_trait::From;

use super::{Location, Table};

/// Multi-line argument of a [`Step`].
#[derive(Clone, Debug, Eq, From, PartialEq)]
pub enum Argument {
    /// Multi-line text blob (doc string).
    DocString(String),

    /// Data [`Table`].
    Table(Table),
}

/// Single step of a [`Background`], [`Scenario`] or [`Outline`].
///
/// [`Background`]: super::Background
/// [`Outline`]: super::Outline
/// [`Scenario`]: super::Scenario
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Step {
    /// Type keyword of this [`Step`] (`Given`, `When`, `And`, ...).
    pub keyword: String,

    /// Text of this [`Step`] following its keyword.
    pub text: String,

    /// Multi-line [`Argument`]s of this [`Step`].
    pub arguments: Vec<Argument>,

    /// [`Location`] of this [`Step`] in its feature file.
    pub location: Location,

    /// Position of this [`Step`] in its container's step list.
    ///
    /// Assigned when the [`Step`] is attached to a container, so that a
    /// resolved outline step can be mapped back onto its skeleton.
    pub(crate) index: usize,
}

impl Step {
    /// Creates a new [`Step`] without any [`Argument`]s.
    #[must_use]
    pub fn new(
        keyword: impl Into<String>,
        text: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            text: text.into(),
            arguments: Vec::new(),
            location,
            index: 0,
        }
    }

    /// Attaches the given [`Argument`] to this [`Step`].
    #[must_use]
    pub fn with_argument(mut self, arg: impl Into<Argument>) -> Self {
        self.arguments.push(arg.into());
        self
    }

    /// Returns position of this [`Step`] in its container's step list.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns `{keyword} {text}` line of this [`Step`].
    #[must_use]
    pub fn line(&self) -> String {
        format!("{} {}", self.keyword, self.text)
    }
}
