// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Pretty formatter of [Cucumber]-style test runs.
//!
//! A runner walking parsed feature files emits [`Event`]s. The [`Pretty`]
//! formatter renders them into a transcript mirroring the original
//! documents: features, backgrounds, scenarios, outlines with their example
//! tables and steps, every executed node colored by its result and annotated
//! with a column-aligned source location.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use cucumber_pretty::{
//!     document::{Feature, Location, Scenario, Step},
//!     writer::{Config, Console, Formatter as _, WritableString},
//!     Event, Pretty, Status, StepFinished,
//! };
//!
//! let scenario = Arc::new(Scenario::new(
//!     "Scenario",
//!     "eating",
//!     Location::new("eat.feature", 3),
//!     [Step::new("Given", "there are 12 cucumbers", Location::new("eat.feature", 4))],
//! ));
//! let feature = Arc::new(
//!     Feature::new("Feature", "Cucumbers", Location::new("eat.feature", 1))
//!         .with_item(Scenario::clone(&scenario)),
//! );
//!
//! let mut pretty = Pretty::new(
//!     Console::with_markers(WritableString::default()),
//!     Config { paths: false, ..Config::default() },
//! );
//! for ev in [
//!     Event::FeatureStarted(Arc::clone(&feature)),
//!     Event::ScenarioStarted {
//!         feature: Arc::clone(&feature),
//!         scenario: Arc::clone(&scenario),
//!     },
//!     Event::StepFinished(StepFinished::new(
//!         Arc::clone(&scenario.steps[0]),
//!         Status::Passed,
//!     )),
//!     Event::ScenarioFinished(Arc::clone(&scenario), Status::Passed),
//! ] {
//!     pretty.handle_event(&ev);
//! }
//!
//! assert_eq!(
//!     pretty.into_output().into_inner().0,
//!     "Feature: Cucumbers\n\
//!      \n  \
//!      Scenario: eating\n    \
//!      {+passed}Given there are 12 cucumbers{-passed}\n\
//!      \n",
//! );
//! ```
//!
//! [Cucumber]: https://cucumber.io

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    trivial_casts,
    trivial_numeric_casts
)]
#![forbid(non_ascii_idents, unsafe_code)]
#![warn(
    clippy::as_conversions,
    clippy::unwrap_used,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_import_braces,
    unused_labels,
    unused_qualifications,
    unused_results
)]

pub mod collaborator;
pub mod definition;
pub mod document;
pub mod error;
pub mod event;
pub mod markup;
pub mod writer;

#[doc(inline)]
pub use self::{
    definition::{Definition, Pattern},
    error::{WriterError, WriterResult},
    event::{Event, Status, StepError, StepFinished},
    markup::Markup,
    writer::{Formatter, Pretty},
};
