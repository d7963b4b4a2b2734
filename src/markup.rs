// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Abstract inline color markup.
//!
//! Formatters don't emit escape codes. They produce [`Markup`]: plain text
//! interleaved with "open color" and "close color" markers, which an
//! [`Output`] renders (as ANSI styles, as plain text, or as literal
//! `{+color}`/`{-color}` markers).
//!
//! [`Output`]: crate::writer::Output

use std::fmt;

use derive_more::with_trait::Display;

use crate::event::Status;

/// Color a [`Markup`] fragment is rendered with.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Color {
    /// Color of a [`Status`].
    #[display("{_0}")]
    Status(Status),

    /// Accent color of an argument inside a [`Status`]-colored text.
    #[display("{_0}_param")]
    Param(Status),

    /// Color of tags.
    #[display("tag")]
    Tag,

    /// Color of source-location comments.
    #[display("comment")]
    Comment,
}

impl From<Status> for Color {
    fn from(status: Status) -> Self {
        Self::Status(status)
    }
}

/// Single piece of a [`Markup`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Piece {
    /// Plain text.
    Text(String),

    /// Starts a [`Color`]ed region.
    Open(Color),

    /// Ends a [`Color`]ed region.
    Close(Color),
}

/// Text with inline [`Color`] markers.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Markup(Vec<Piece>);

impl Markup {
    /// Creates a new empty [`Markup`].
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates a new [`Markup`] holding the given uncolored `text`.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        let mut m = Self::new();
        _ = m.text(text);
        m
    }

    /// Creates a new [`Markup`] holding the given `text` in the given `color`.
    #[must_use]
    pub fn colored(color: impl Into<Color>, text: impl Into<String>) -> Self {
        let mut m = Self::new();
        _ = m.paint(color, text);
        m
    }

    /// Appends uncolored `text`. Empty `text` is ignored.
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        if text.is_empty() {
            return self;
        }
        if let Some(Piece::Text(last)) = self.0.last_mut() {
            last.push_str(&text);
        } else {
            self.0.push(Piece::Text(text));
        }
        self
    }

    /// Opens a `color`ed region.
    pub fn open(&mut self, color: impl Into<Color>) -> &mut Self {
        self.0.push(Piece::Open(color.into()));
        self
    }

    /// Closes a `color`ed region.
    pub fn close(&mut self, color: impl Into<Color>) -> &mut Self {
        self.0.push(Piece::Close(color.into()));
        self
    }

    /// Appends `text` wrapped into the `color` markers.
    pub fn paint(
        &mut self,
        color: impl Into<Color>,
        text: impl Into<String>,
    ) -> &mut Self {
        let color = color.into();
        self.open(color).text(text).close(color)
    }

    /// Appends all the pieces of `other`.
    pub fn append(&mut self, other: Self) -> &mut Self {
        for piece in other.0 {
            match piece {
                Piece::Text(t) => {
                    _ = self.text(t);
                }
                p @ (Piece::Open(_) | Piece::Close(_)) => self.0.push(p),
            }
        }
        self
    }

    /// Returns the [`Piece`]s of this [`Markup`].
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.0
    }

    /// Indicates whether this [`Markup`] holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Strips all the markers, leaving the plain text only.
    #[must_use]
    pub fn to_plain(&self) -> String {
        self.0
            .iter()
            .filter_map(|p| match p {
                Piece::Text(t) => Some(t.as_str()),
                Piece::Open(_) | Piece::Close(_) => None,
            })
            .collect()
    }

    /// Indicates whether every opened [`Color`] is closed in reverse order.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        let mut stack = Vec::new();
        for p in &self.0 {
            match p {
                Piece::Text(_) => {}
                Piece::Open(c) => stack.push(*c),
                Piece::Close(c) => {
                    if stack.pop().as_ref() != Some(c) {
                        return false;
                    }
                }
            }
        }
        stack.is_empty()
    }
}

impl From<&str> for Markup {
    fn from(s: &str) -> Self {
        Self::plain(s)
    }
}

impl From<String> for Markup {
    fn from(s: String) -> Self {
        Self::plain(s)
    }
}

impl Display for Markup {
    /// Renders markers as literal `{+color}` and `{-color}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.0 {
            match p {
                Piece::Text(t) => f.write_str(t)?,
                Piece::Open(c) => write!(f, "{{+{c}}}")?,
                Piece::Close(c) => write!(f, "{{-{c}}}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Markup, Status};

    #[test]
    fn renders_literal_markers() {
        let mut m = Markup::plain("    ");
        _ = m.paint(Status::Passed, "Given x");

        assert_eq!(m.to_string(), "    {+passed}Given x{-passed}");
        assert_eq!(m.to_plain(), "    Given x");
    }

    #[test]
    fn names_param_colors() {
        assert_eq!(Color::Param(Status::Failed).to_string(), "failed_param");
        assert_eq!(Color::Comment.to_string(), "comment");
    }

    #[test]
    fn merges_adjacent_text() {
        let mut m = Markup::new();
        _ = m.text("a").text("").text("b");

        assert_eq!(m.pieces().len(), 1);
    }

    #[test]
    fn detects_unbalanced_markers() {
        let mut open = Markup::new();
        _ = open.open(Color::Tag).text("@wip");

        let mut stray = Markup::new();
        _ = stray.text("x").close(Color::Tag);

        assert!(!open.is_balanced());
        assert!(!stray.is_balanced());
        assert!(Markup::colored(Color::Tag, "@wip").is_balanced());
    }
}
