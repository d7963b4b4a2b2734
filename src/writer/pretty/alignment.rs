// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Column alignment of source-location comments.

use std::cmp;

use crate::document::StepContainer;

use super::formatting::title_lines;

/// Width of a text measured in characters rather than bytes.
pub(crate) fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Widens the `current` maximum line length to fit the header and every step
/// line of the given `container`.
///
/// Never returns less than `current`.
pub(crate) fn max_line_length<C>(current: usize, container: &C) -> usize
where
    C: StepContainer + ?Sized,
{
    let header = title_lines(container.keyword(), container.title(), "");
    let header = header.first().map_or(0, |l| display_width(l) + 2);

    container
        .steps()
        .iter()
        .map(|step| display_width(&step.line()) + 4)
        .fold(cmp::max(current, header), cmp::max)
}

/// Number of spaces to pad a line of the given `width` with, so its comment
/// starts right after `max` columns.
pub(crate) fn comment_indent(max: usize, width: usize) -> usize {
    max.saturating_sub(width)
}

#[cfg(test)]
mod tests {
    use super::{comment_indent, display_width, max_line_length};
    use crate::document::{Location, Scenario, Step};

    fn scenario() -> Scenario {
        Scenario::new(
            "Scenario",
            "short",
            Location::default(),
            [
                Step::new("Given", "a step", Location::default()),
                Step::new("Then", "a much longer step text", Location::default()),
            ],
        )
    }

    #[test]
    fn fits_longest_step() {
        // "Then a much longer step text" is 28 chars.
        assert_eq!(max_line_length(0, &scenario()), 32);
    }

    #[test]
    fn never_decreases() {
        assert_eq!(max_line_length(100, &scenario()), 100);
    }

    #[test]
    fn fits_header_line() {
        let sc = Scenario::new(
            "Scenario",
            "a title way longer than any of its steps\ncontinued",
            Location::default(),
            [Step::new("Given", "x", Location::default())],
        );

        // "Scenario: a title way longer than any of its steps" is 50 chars.
        assert_eq!(max_line_length(0, &sc), 52);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(display_width("Дано шаг"), 8);
    }

    #[test]
    fn pads_up_to_max() {
        assert_eq!(comment_indent(20, 15), 5);
        assert_eq!(comment_indent(20, 25), 0);
    }
}
