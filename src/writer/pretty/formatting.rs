// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Text formatting utilities for the [`Pretty`] formatter.
//!
//! [`Pretty`]: super::Pretty

use itertools::Itertools as _;

use crate::{
    document::Argument,
    markup::{Color, Markup},
};

/// Renders `{keyword}: {title}` lines prefixed with `base_indent`.
///
/// Continuation lines of a multi-line `title` are indented by two more
/// spaces.
pub(crate) fn title_lines(
    keyword: &str,
    title: &str,
    base_indent: &str,
) -> Vec<String> {
    let mut lines = title.split('\n');
    let first = lines.next().unwrap_or_default();
    let head = if first.is_empty() {
        format!("{base_indent}{keyword}:")
    } else {
        format!("{base_indent}{keyword}: {first}")
    };
    std::iter::once(head)
        .chain(lines.map(|l| format!("{base_indent}  {l}")))
        .collect()
}

/// Renders `@a @b` out of the given `tags`.
pub(crate) fn tags_line(tags: &[String]) -> String {
    tags.iter().map(|t| format!("@{t}")).join(" ")
}

/// Renders every line of `text` prefixed with `indent`, the prefix staying
/// outside of the `color`.
pub(crate) fn colored_lines(
    text: &str,
    indent: &str,
    color: impl Into<Color>,
) -> Vec<Markup> {
    let color = color.into();
    text.split('\n')
        .map(|line| {
            let mut m = Markup::plain(indent);
            _ = m.paint(color, line);
            m
        })
        .collect()
}

/// Renders a multi-line step [`Argument`] as indented lines.
pub(crate) fn argument_lines(
    argument: &Argument,
    indent: &str,
    color: impl Into<Color>,
) -> Vec<Markup> {
    let text = match argument {
        Argument::DocString(s) => format!("\"\"\"\n{s}\n\"\"\""),
        Argument::Table(t) => t.to_string(),
    };
    colored_lines(&text, indent, color)
}

/// Renders a `| a | b |` table `row` with every cell wrapped into the `color`.
pub(crate) fn colorized_row(
    cells: &[String],
    indent: &str,
    color: impl Into<Color>,
) -> Markup {
    let color = color.into();
    let mut m = Markup::plain(indent);
    _ = m.text("|");
    for cell in cells {
        _ = m.text(" ").paint(color, cell.as_str()).text(" |");
    }
    m
}

#[cfg(test)]
mod tests {
    use super::{argument_lines, colorized_row, tags_line, title_lines};
    use crate::{
        document::{Argument, Table},
        event::Status,
    };

    #[test]
    fn renders_title() {
        assert_eq!(title_lines("Feature", "Eating", ""), ["Feature: Eating"]);
        assert_eq!(title_lines("Background", "", "  "), ["  Background:"]);
    }

    #[test]
    fn indents_title_continuation() {
        assert_eq!(
            title_lines("Scenario", "first\nsecond", "  "),
            ["  Scenario: first", "    second"],
        );
    }

    #[test]
    fn renders_tags() {
        assert_eq!(tags_line(&["slow".into(), "web".into()]), "@slow @web");
    }

    #[test]
    fn wraps_doc_string_lines() {
        let lines = argument_lines(
            &Argument::DocString("a\nb".into()),
            "      ",
            Status::Passed,
        )
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();

        assert_eq!(
            lines,
            [
                "      {+passed}\"\"\"{-passed}",
                "      {+passed}a{-passed}",
                "      {+passed}b{-passed}",
                "      {+passed}\"\"\"{-passed}",
            ],
        );
    }

    #[test]
    fn wraps_table_cells() {
        let table = Table::new([vec!["a", "bb"], vec!["ccc", "d"]]);
        let row = colorized_row(&table.padded_row(1), "      ", Status::Failed);

        assert_eq!(
            row.to_string(),
            "      | {+failed}ccc{-failed} | {+failed}d {-failed} |",
        );
        assert_eq!(row.to_plain(), format!("      {}", table.row_as_string(1)));
    }
}
