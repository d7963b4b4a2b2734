// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Parsed specification document.
//!
//! Nodes are produced by a parser outside of this crate and shared with the
//! formatter through [`Arc`]s carried by [`Event`]s.
//!
//! [`Event`]: crate::Event

mod step;
mod table;

use std::sync::Arc;

use derive_more::with_trait::Display;
use itertools::Itertools as _;

pub use self::{
    step::{Argument, Step},
    table::Table,
};

/// Position of a node in its source file.
#[derive(Clone, Debug, Default, Display, Eq, Hash, PartialEq)]
#[display("{path}:{line}")]
pub struct Location {
    /// Path of the source file.
    pub path: String,

    /// Line of the source file (1-based).
    pub line: usize,
}

impl Location {
    /// Creates a new [`Location`].
    #[must_use]
    pub fn new(path: impl Into<String>, line: usize) -> Self {
        Self { path: path.into(), line }
    }
}

/// Node owning an ordered list of [`Step`]s.
pub trait StepContainer {
    /// Keyword of this node (`Background`, `Scenario`, ...).
    fn keyword(&self) -> &str;

    /// Title of this node, possibly spanning multiple lines.
    fn title(&self) -> &str;

    /// [`Step`]s of this node.
    fn steps(&self) -> &[Arc<Step>];

    /// [`Location`] of this node.
    fn location(&self) -> &Location;
}

/// Assigns every [`Step`] its position and wraps it into an [`Arc`].
fn attach(steps: impl IntoIterator<Item = Step>) -> Vec<Arc<Step>> {
    steps
        .into_iter()
        .enumerate()
        .map(|(index, step)| Arc::new(Step { index, ..step }))
        .collect()
}

/// Removes duplicated tags, keeping the first occurrence.
fn unique_tags<T: Into<String>>(tags: impl IntoIterator<Item = T>) -> Vec<String> {
    tags.into_iter().map(Into::into).unique().collect()
}

/// Top-level node of a feature file.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Feature {
    /// Keyword of this [`Feature`] (usually `Feature`).
    pub keyword: String,

    /// Title of this [`Feature`].
    pub title: String,

    /// Free-form description following the title.
    pub description: Option<String>,

    /// Tags of this [`Feature`], unique and ordered.
    pub tags: Vec<String>,

    /// [`Background`] shared by all the scenarios of this [`Feature`].
    pub background: Option<Arc<Background>>,

    /// [`Scenario`]s and [`Outline`]s in declaration order.
    pub items: Vec<Item>,

    /// [`Location`] of this [`Feature`].
    pub location: Location,
}

impl Feature {
    /// Creates a new empty [`Feature`].
    #[must_use]
    pub fn new(
        keyword: impl Into<String>,
        title: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            title: title.into(),
            location,
            ..Self::default()
        }
    }

    /// Sets the description of this [`Feature`].
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the tags of this [`Feature`], dropping duplicates.
    #[must_use]
    pub fn with_tags<T: Into<String>>(
        mut self,
        tags: impl IntoIterator<Item = T>,
    ) -> Self {
        self.tags = unique_tags(tags);
        self
    }

    /// Sets the [`Background`] of this [`Feature`].
    #[must_use]
    pub fn with_background(mut self, background: Background) -> Self {
        self.background = Some(Arc::new(background));
        self
    }

    /// Appends the given [`Item`] to this [`Feature`].
    #[must_use]
    pub fn with_item(mut self, item: impl Into<Item>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Indicates whether this [`Feature`] has a [`Background`].
    #[must_use]
    pub const fn has_background(&self) -> bool {
        self.background.is_some()
    }
}

/// Scenario-like child of a [`Feature`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Item {
    /// Plain [`Scenario`].
    Scenario(Arc<Scenario>),

    /// [`Outline`] with its [`ExampleTable`].
    Outline(Arc<Outline>),
}

impl From<Scenario> for Item {
    fn from(sc: Scenario) -> Self {
        Self::Scenario(Arc::new(sc))
    }
}

impl From<Outline> for Item {
    fn from(o: Outline) -> Self {
        Self::Outline(Arc::new(o))
    }
}

/// Steps shared implicitly by every scenario of a [`Feature`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Background {
    /// Keyword of this [`Background`].
    pub keyword: String,

    /// Title of this [`Background`], empty in most cases.
    pub title: String,

    /// [`Step`]s of this [`Background`].
    pub steps: Vec<Arc<Step>>,

    /// [`Location`] of this [`Background`].
    pub location: Location,
}

impl Background {
    /// Creates a new [`Background`] out of the given `steps`.
    #[must_use]
    pub fn new(
        keyword: impl Into<String>,
        title: impl Into<String>,
        location: Location,
        steps: impl IntoIterator<Item = Step>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            title: title.into(),
            steps: attach(steps),
            location,
        }
    }
}

/// Single scenario.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Scenario {
    /// Keyword of this [`Scenario`].
    pub keyword: String,

    /// Title of this [`Scenario`].
    pub title: String,

    /// Own tags of this [`Scenario`], unique and ordered.
    pub tags: Vec<String>,

    /// [`Step`]s of this [`Scenario`].
    pub steps: Vec<Arc<Step>>,

    /// [`Location`] of this [`Scenario`].
    pub location: Location,
}

impl Scenario {
    /// Creates a new [`Scenario`] out of the given `steps`.
    #[must_use]
    pub fn new(
        keyword: impl Into<String>,
        title: impl Into<String>,
        location: Location,
        steps: impl IntoIterator<Item = Step>,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            title: title.into(),
            tags: Vec::new(),
            steps: attach(steps),
            location,
        }
    }

    /// Sets the tags of this [`Scenario`], dropping duplicates.
    #[must_use]
    pub fn with_tags<T: Into<String>>(
        mut self,
        tags: impl IntoIterator<Item = T>,
    ) -> Self {
        self.tags = unique_tags(tags);
        self
    }
}

/// Examples of an [`Outline`].
///
/// The first row of the [`Table`] is the header naming the placeholders,
/// every following row is a single iteration of the [`Outline`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExampleTable {
    /// Keyword of this [`ExampleTable`] (usually `Examples`).
    pub keyword: String,

    /// Header and data rows.
    pub table: Table,
}

impl ExampleTable {
    /// Creates a new [`ExampleTable`].
    #[must_use]
    pub fn new(keyword: impl Into<String>, table: Table) -> Self {
        Self { keyword: keyword.into(), table }
    }

    /// Returns the header row.
    #[must_use]
    pub fn header(&self) -> &[String] {
        self.table.row(0).unwrap_or_default()
    }

    /// Returns the data row of the given zero-based `iteration`.
    #[must_use]
    pub fn row(&self, iteration: usize) -> Option<&[String]> {
        self.table.row(iteration + 1)
    }

    /// Returns the number of iterations (data rows).
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.table.rows.len().saturating_sub(1)
    }
}

/// Scenario template parameterized by an [`ExampleTable`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Outline {
    /// Keyword of this [`Outline`].
    pub keyword: String,

    /// Title of this [`Outline`].
    pub title: String,

    /// Own tags of this [`Outline`], unique and ordered.
    pub tags: Vec<String>,

    /// Skeleton [`Step`]s containing unresolved `<placeholder>`s.
    pub steps: Vec<Arc<Step>>,

    /// [`ExampleTable`] of this [`Outline`].
    pub examples: ExampleTable,

    /// [`Location`] of this [`Outline`].
    pub location: Location,
}

impl Outline {
    /// Creates a new [`Outline`] out of the given skeleton `steps`.
    #[must_use]
    pub fn new(
        keyword: impl Into<String>,
        title: impl Into<String>,
        location: Location,
        steps: impl IntoIterator<Item = Step>,
        examples: ExampleTable,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            title: title.into(),
            tags: Vec::new(),
            steps: attach(steps),
            examples,
            location,
        }
    }

    /// Sets the tags of this [`Outline`], dropping duplicates.
    #[must_use]
    pub fn with_tags<T: Into<String>>(
        mut self,
        tags: impl IntoIterator<Item = T>,
    ) -> Self {
        self.tags = unique_tags(tags);
        self
    }

    /// Returns the skeleton [`Step`] the given resolved `step` comes from.
    #[must_use]
    pub fn skeleton_of(&self, step: &Step) -> Option<&Arc<Step>> {
        self.steps.get(step.index)
    }

    /// Resolves the skeleton [`Step`]s for the given zero-based `iteration`,
    /// substituting every `<name>` placeholder with the row's value.
    ///
    /// Returns [`None`] if there is no such iteration.
    #[must_use]
    pub fn example_steps(&self, iteration: usize) -> Option<Vec<Arc<Step>>> {
        let row = self.examples.row(iteration)?;
        let tokens = self
            .examples
            .header()
            .iter()
            .zip(row)
            .map(|(name, value)| (format!("<{name}>"), value.as_str()))
            .collect::<Vec<_>>();
        let resolve = |s: &str| {
            tokens
                .iter()
                .fold(s.to_owned(), |s, (token, value)| s.replace(token, value))
        };

        Some(
            self.steps
                .iter()
                .map(|step| {
                    let arguments = step
                        .arguments
                        .iter()
                        .map(|arg| match arg {
                            Argument::DocString(s) => {
                                Argument::DocString(resolve(s.as_str()))
                            }
                            Argument::Table(t) => Argument::Table(Table {
                                rows: t
                                    .rows
                                    .iter()
                                    .map(|r| {
                                        r.iter().map(|c| resolve(c.as_str())).collect()
                                    })
                                    .collect(),
                            }),
                        })
                        .collect();
                    Arc::new(Step {
                        text: resolve(step.text.as_str()),
                        arguments,
                        ..Step::clone(step)
                    })
                })
                .collect(),
        )
    }
}

macro_rules! impl_step_container {
    ($($ty:ty),* $(,)?) => {$(
        impl StepContainer for $ty {
            fn keyword(&self) -> &str {
                &self.keyword
            }

            fn title(&self) -> &str {
                &self.title
            }

            fn steps(&self) -> &[Arc<Step>] {
                &self.steps
            }

            fn location(&self) -> &Location {
                &self.location
            }
        }
    )*};
}

impl_step_container!(Background, Scenario, Outline);

#[cfg(test)]
mod tests {
    use super::{ExampleTable, Location, Outline, Scenario, Step, Table};

    fn outline() -> Outline {
        Outline::new(
            "Scenario Outline",
            "eating",
            Location::new("features/eat.feature", 3),
            [
                Step::new("Given", "there are <start> cucumbers", Location::default()),
                Step::new("Then", "I should have <left>", Location::default()),
            ],
            ExampleTable::new(
                "Examples",
                Table::new([vec!["start", "left"], vec!["12", "7"], vec!["20", "15"]]),
            ),
        )
    }

    #[test]
    fn assigns_step_indices() {
        let o = outline();

        assert_eq!(o.steps[0].index(), 0);
        assert_eq!(o.steps[1].index(), 1);
    }

    #[test]
    fn resolves_example_steps() {
        let o = outline();
        let steps = o.example_steps(1).expect("second row exists");

        assert_eq!(steps[0].text, "there are 20 cucumbers");
        assert_eq!(steps[1].text, "I should have 15");
        assert_eq!(
            o.skeleton_of(&steps[1]).map(|s| s.text.as_str()),
            Some("I should have <left>"),
        );
        assert!(o.example_steps(2).is_none());
    }

    #[test]
    fn counts_iterations() {
        assert_eq!(outline().examples.iterations(), 2);
        assert_eq!(ExampleTable::default().iterations(), 0);
    }

    #[test]
    fn drops_duplicated_tags() {
        let sc = Scenario::new("Scenario", "", Location::default(), Vec::new())
            .with_tags(["slow", "web", "slow"]);

        assert_eq!(sc.tags, ["slow", "web"]);
    }

    #[test]
    fn displays_location() {
        assert_eq!(Location::new("a.feature", 7).to_string(), "a.feature:7");
    }
}
