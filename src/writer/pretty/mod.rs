// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pretty [`Formatter`] implementation.
//!
//! Mirrors the structure of the executed feature files: features,
//! backgrounds, scenarios and outlines with their example tables, every step
//! colored by its result and annotated with an aligned source location.
//!
//! [`Formatter`]: crate::writer::Formatter

mod alignment;
mod arguments;
mod background_output;
mod cli;
mod event_handlers;
mod feature_output;
mod formatting;
mod outline_output;
mod pretty_struct;
mod scenario_output;
mod state;
mod step_output;

pub use self::{
    cli::{Cli, Coloring, Config},
    event_handlers::PRIORITY,
    pretty_struct::Pretty,
};
