// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tools for formatting [`Event`]s into some output.

pub mod fanout;
pub mod out;
pub mod pretty;
pub mod summary;

use crate::event::{Event, EventKind};

#[doc(inline)]
pub use self::{
    fanout::Fanout,
    out::{Console, Output, Rendering, Styles, WritableString, WriteStrExt},
    pretty::{Cli, Coloring, Config, Pretty},
    summary::{Stats, Summary},
};

/// Entry of a [`Formatter`]'s subscription table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Subscription {
    /// [`EventKind`] being subscribed to.
    pub kind: EventKind,

    /// Name of the handler receiving the [`Event`].
    pub handler: &'static str,

    /// Relative priority among other subscribers of the same [`EventKind`].
    ///
    /// Higher values run first.
    pub priority: i32,
}

impl Subscription {
    /// Creates a new [`Subscription`].
    #[must_use]
    pub const fn new(
        kind: EventKind,
        handler: &'static str,
        priority: i32,
    ) -> Self {
        Self { kind, handler, priority }
    }
}

/// Consumer of [`Event`]s rendering them into some output.
///
/// Handling is synchronous: the runner doesn't emit the next [`Event`] until
/// [`Formatter::handle_event()`] returns.
pub trait Formatter {
    /// Returns the name of this [`Formatter`].
    fn name(&self) -> &'static str;

    /// Returns a human-readable description of this [`Formatter`].
    fn description(&self) -> &'static str;

    /// Returns the [`Subscription`]s of this [`Formatter`].
    fn subscriptions(&self) -> &'static [Subscription];

    /// Handles the given [`Event`].
    ///
    /// Never fails: errors of the underlying output are reported via
    /// [`tracing`] and swallowed.
    fn handle_event(&mut self, event: &Event);

    /// Returns the [`Subscription`] of this [`Formatter`] to the given
    /// [`EventKind`], if any.
    fn subscription(&self, kind: EventKind) -> Option<&'static Subscription> {
        self.subscriptions().iter().find(|s| s.kind == kind)
    }
}
