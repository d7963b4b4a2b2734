// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tools for writing output.

use std::{io, str};

use console::Style;
use derive_more::with_trait::{Deref, DerefMut, Display, From, Into};

use crate::{
    error::WriterResult,
    event::Status,
    markup::{Color, Markup, Piece},
    writer::Coloring,
};

/// Append-only sink of rendered [`Markup`].
///
/// Must preserve the order of calls exactly as issued.
pub trait Output {
    /// Writes the given `markup`.
    ///
    /// # Errors
    ///
    /// If the underlying output fails to be written.
    fn write(&mut self, markup: &Markup) -> WriterResult<()>;

    /// Writes the given `markup` followed by a newline.
    ///
    /// # Errors
    ///
    /// If the underlying output fails to be written.
    fn write_line(&mut self, markup: &Markup) -> WriterResult<()> {
        self.write(markup)?;
        self.write(&Markup::plain("\n"))
    }
}

impl Output for Vec<Markup> {
    fn write(&mut self, markup: &Markup) -> WriterResult<()> {
        self.push(markup.clone());
        Ok(())
    }
}

/// [`Style`]s for terminal output.
#[derive(Clone, Debug)]
pub struct Styles {
    /// [`Style`] for rendering passed events.
    pub passed: Style,

    /// [`Style`] for rendering skipped events.
    pub skipped: Style,

    /// [`Style`] for rendering pending events.
    pub pending: Style,

    /// [`Style`] for rendering undefined events.
    pub undefined: Style,

    /// [`Style`] for rendering failed events.
    pub failed: Style,

    /// [`Style`] for rendering tags.
    pub tag: Style,

    /// [`Style`] for rendering source-location comments.
    pub comment: Style,

    /// Indicates whether the terminal was detected.
    pub is_present: bool,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            passed: Style::new().green().force_styling(true),
            skipped: Style::new().cyan().force_styling(true),
            pending: Style::new().yellow().force_styling(true),
            undefined: Style::new().yellow().force_styling(true),
            failed: Style::new().red().force_styling(true),
            tag: Style::new().cyan().force_styling(true),
            comment: Style::new().black().bright().force_styling(true),
            is_present: console::Term::stdout().is_term()
                && console::colors_enabled(),
        }
    }
}

impl Styles {
    /// Creates new [`Styles`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies the given [`Coloring`] policy.
    pub fn apply_coloring(&mut self, color: Coloring) {
        match color {
            Coloring::Auto => {}
            Coloring::Always => self.is_present = true,
            Coloring::Never => self.is_present = false,
        }
    }

    /// Returns the [`Style`] of the given [`Status`].
    #[must_use]
    pub const fn status(&self, status: Status) -> &Style {
        match status {
            Status::Passed => &self.passed,
            Status::Skipped => &self.skipped,
            Status::Pending => &self.pending,
            Status::Undefined => &self.undefined,
            Status::Failed => &self.failed,
        }
    }

    /// Returns the [`Style`] of the given [`Color`].
    #[must_use]
    pub fn color(&self, color: Color) -> Style {
        match color {
            Color::Status(s) => self.status(s).clone(),
            Color::Param(s) => self.status(s).clone().bold(),
            Color::Tag => self.tag.clone(),
            Color::Comment => self.comment.clone(),
        }
    }

    /// Renders the given `markup` as a string with ANSI styles if the
    /// terminal is present, or as plain text otherwise.
    #[must_use]
    pub fn render(&self, markup: &Markup) -> String {
        if !self.is_present {
            return markup.to_plain();
        }

        let mut stack = Vec::new();
        let mut out = String::new();
        for piece in markup.pieces() {
            match piece {
                Piece::Text(t) => match stack.last() {
                    Some(c) => {
                        out.push_str(&self.color(*c).apply_to(t).to_string());
                    }
                    None => out.push_str(t),
                },
                Piece::Open(c) => stack.push(*c),
                Piece::Close(_) => {
                    _ = stack.pop();
                }
            }
        }
        out
    }
}

/// How a [`Console`] renders [`Markup`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rendering {
    /// ANSI styles if the terminal is present, plain text otherwise.
    Styled,

    /// Literal `{+color}`/`{-color}` markers.
    Markers,
}

/// [`Output`] writing into an [`io::Write`] implementor.
#[derive(Clone, Debug, Deref, DerefMut)]
pub struct Console<Out: io::Write = io::Stdout> {
    /// [`io::Write`] implementor to write the output into.
    #[deref]
    #[deref_mut]
    output: Out,

    /// [`Styles`] for terminal output.
    styles: Styles,

    /// [`Rendering`] mode.
    rendering: Rendering,
}

impl Console {
    /// Creates a new [`Console`] outputting to [`io::Stdout`].
    #[must_use]
    pub fn stdout(color: Coloring) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<Out: io::Write> Console<Out> {
    /// Creates a new styled [`Console`] outputting to the given `output`.
    #[must_use]
    pub fn new(output: Out, color: Coloring) -> Self {
        let mut styles = Styles::new();
        styles.apply_coloring(color);
        Self { output, styles, rendering: Rendering::Styled }
    }

    /// Creates a new [`Console`] writing literal markers to the given
    /// `output`.
    #[must_use]
    pub fn with_markers(output: Out) -> Self {
        Self {
            output,
            styles: Styles::new(),
            rendering: Rendering::Markers,
        }
    }

    /// Returns the [`Rendering`] mode of this [`Console`].
    #[must_use]
    pub const fn rendering(&self) -> Rendering {
        self.rendering
    }

    /// Unwraps this [`Console`] into the underlying output.
    #[must_use]
    pub fn into_inner(self) -> Out {
        self.output
    }
}

impl<Out: io::Write> Output for Console<Out> {
    fn write(&mut self, markup: &Markup) -> WriterResult<()> {
        let rendered = match self.rendering {
            Rendering::Styled => self.styles.render(markup),
            Rendering::Markers => markup.to_string(),
        };
        self.output.write_str(rendered)?;
        Ok(())
    }
}

/// [`io::Write`] extension for easier manipulation with strings.
pub trait WriteStrExt: io::Write {
    /// Writes the given `string` into this writer.
    ///
    /// # Errors
    ///
    /// If this writer fails to write the given `string`.
    fn write_str(&mut self, string: impl AsRef<str>) -> io::Result<()> {
        self.write_all(string.as_ref().as_bytes())
    }

    /// Writes the given `string` into this writer followed by a newline.
    ///
    /// # Errors
    ///
    /// If this writer fails to write the given `string`.
    fn write_line(&mut self, string: impl AsRef<str>) -> io::Result<()> {
        self.write_str(string.as_ref())
            .and_then(|()| self.write_str("\n"))
    }
}

impl<T: io::Write + ?Sized> WriteStrExt for T {}

/// [`String`] wrapper implementing [`io::Write`].
#[derive(
    Clone,
    Debug,
    Default,
    Deref,
    DerefMut,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
)]
pub struct WritableString(pub String);

impl io::Write for WritableString {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.push_str(
            str::from_utf8(buf)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
        );
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Console, Output as _, Styles, WritableString};
    use crate::{
        event::Status,
        markup::{Color, Markup},
        writer::Coloring,
    };

    fn sample() -> Markup {
        let mut m = Markup::plain("  ");
        _ = m
            .open(Status::Failed)
            .text("I have ")
            .close(Status::Failed)
            .paint(Color::Param(Status::Failed), "5")
            .open(Status::Failed)
            .close(Status::Failed);
        m
    }

    #[test]
    fn writes_literal_markers() {
        let mut console = Console::with_markers(WritableString::default());
        console.write_line(&sample()).expect("in-memory write");

        assert_eq!(
            console.into_inner().0,
            "  {+failed}I have {-failed}{+failed_param}5{-failed_param}\
             {+failed}{-failed}\n",
        );
    }

    #[test]
    fn writes_plain_text_without_terminal() {
        let mut console = Console::new(WritableString::default(), Coloring::Never);
        console.write(&sample()).expect("in-memory write");

        assert_eq!(console.into_inner().0, "  I have 5");
    }

    #[test]
    fn styles_text_when_forced() {
        let mut styles = Styles::new();
        styles.apply_coloring(Coloring::Always);
        let rendered = styles.render(&sample());

        assert!(rendered.contains("\u{1b}["));
        assert_eq!(console::strip_ansi_codes(&rendered), "  I have 5");
    }

    #[test]
    fn records_markup_in_order() {
        let mut rec = Vec::new();
        rec.write(&Markup::plain("a")).expect("infallible");
        rec.write_line(&Markup::plain("b")).expect("infallible");

        assert_eq!(rec.len(), 3);
        assert_eq!(rec[2].to_plain(), "\n");
    }
}
