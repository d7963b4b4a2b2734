// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Highlighting of step arguments matched by a [`Definition`].
//!
//! Spans are computed against the original text and rendered as segments,
//! so inserted markers never shift offsets of the following spans.
//!
//! [`Definition`]: crate::definition::Definition

use std::ops::Range;

use lazy_regex::regex;
use regex::Regex;

use crate::{
    definition::Pattern,
    event::Status,
    markup::{Color, Markup},
};

/// Returns the byte spans of `text` to highlight as arguments of `re`.
///
/// Capture groups are taken in ascending offset order. A group is skipped if
/// it didn't participate in the match, is empty, contains a `<` placeholder
/// delimiter, or starts before the end of the previously taken group.
/// Then every `<name>` placeholder not overlapping a taken group is added.
/// A placeholder overlapping a taken group (like the group `b>` inside
/// `<ab>`) stays unhighlighted, so that the produced spans never intersect.
pub(crate) fn argument_spans(text: &str, re: &Regex) -> Vec<Range<usize>> {
    let mut groups = re
        .captures(text)
        .map(|caps| {
            caps.iter()
                .skip(1)
                .flatten()
                .filter(|m| !m.is_empty() && !m.as_str().contains('<'))
                .map(|m| m.range())
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
    groups.sort_by_key(|r| r.start);

    let mut spans: Vec<Range<usize>> = Vec::with_capacity(groups.len());
    for group in groups {
        if spans.last().is_some_and(|last| group.start < last.end) {
            continue;
        }
        spans.push(group);
    }

    let placeholders = regex!(r"<[^>]+>")
        .find_iter(text)
        .map(|m| m.range())
        .filter(|p| !spans.iter().any(|s| p.start < s.end && s.start < p.end))
        .collect::<Vec<_>>();
    spans.extend(placeholders);
    spans.sort_by_key(|r| r.start);
    spans
}

/// Highlights arguments of the `text` matched by the given [`Pattern`].
///
/// The returned [`Markup`] is meant to be placed inside an already opened
/// `status` color: every argument closes it, gets wrapped into the matching
/// [`Color::Param`] and reopens it afterwards.
///
/// A [`Pattern::Literal`] has no arguments, so the `text` is returned as is.
pub(crate) fn colorize(text: &str, pattern: &Pattern, status: Status) -> Markup {
    let Some(re) = pattern.as_regex() else {
        return Markup::plain(text);
    };

    let mut out = Markup::new();
    let mut cursor = 0;
    for span in argument_spans(text, re) {
        _ = out
            .text(&text[cursor..span.start])
            .close(status)
            .paint(Color::Param(status), &text[span.clone()])
            .open(status);
        cursor = span.end;
    }
    _ = out.text(&text[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng as _, SeedableRng as _};

    use super::{argument_spans, colorize};
    use crate::{definition::Pattern, event::Status, markup::Markup};

    fn pattern(re: &str) -> Pattern {
        Pattern::regex(re).expect("valid regex")
    }

    fn rendered(text: &str, re: &str, status: Status) -> String {
        colorize(text, &pattern(re), status).to_string()
    }

    #[test]
    fn highlights_single_group() {
        assert_eq!(
            rendered("I have 5 cucumbers", r"^I have (\d+) cucumbers$", Status::Passed),
            "I have {-passed}{+passed_param}5{-passed_param}{+passed} cucumbers",
        );
    }

    #[test]
    fn keeps_literal_text_as_is() {
        let literal = Pattern::Literal("I have <n> cucumbers".into());

        assert_eq!(
            colorize("I have <n> cucumbers", &literal, Status::Passed).to_string(),
            "I have <n> cucumbers",
        );
    }

    #[test]
    fn highlights_placeholder_without_group() {
        assert_eq!(
            rendered("I see <thing> here", r"^I see .+ here$", Status::Skipped),
            "I see {-skipped}{+skipped_param}<thing>{-skipped_param}{+skipped} here",
        );
    }

    #[test]
    fn first_of_overlapping_groups_wins() {
        let re = regex::Regex::new(r"^((\d+) (\w+)) left$").expect("valid regex");

        assert_eq!(argument_spans("12 apples left", &re), [0..9]);
    }

    #[test]
    fn highlights_adjacent_groups_separately() {
        assert_eq!(
            rendered("ab", r"^(a)(b)$", Status::Failed),
            "{-failed}{+failed_param}a{-failed_param}{+failed}\
             {-failed}{+failed_param}b{-failed_param}{+failed}",
        );
    }

    #[test]
    fn skips_groups_containing_placeholders() {
        let re = regex::Regex::new(r"^I have (.+) cucumbers$").expect("valid regex");

        // The group matches `<count>` itself, so only the placeholder pass
        // highlights it.
        assert_eq!(argument_spans("I have <count> cucumbers", &re), [7..14]);
        assert_eq!(
            rendered("I have <count> cucumbers", r"^I have (.+) cucumbers$", Status::Skipped),
            "I have {-skipped}{+skipped_param}<count>{-skipped_param}{+skipped} cucumbers",
        );
    }

    #[test]
    fn keeps_closing_angle_bracket_in_group() {
        assert_eq!(
            rendered("x > 3", r"^x (>) (\d)$", Status::Passed),
            "x {-passed}{+passed_param}>{-passed_param}{+passed} \
             {-passed}{+passed_param}3{-passed_param}{+passed}",
        );
    }

    #[test]
    fn skips_non_participating_groups() {
        let re = regex::Regex::new(r"^I (eat|drink)( quickly)? (\d+)$").expect("valid regex");

        assert_eq!(argument_spans("I eat 3", &re), [2..5, 6..7]);
    }

    #[test]
    fn drops_placeholder_overlapping_group() {
        let inner = regex::Regex::new(r"^a<(b)c>$").expect("valid regex");
        let beside = regex::Regex::new(r"^see (ab)<c>$").expect("valid regex");

        assert_eq!(argument_spans("a<bc>", &inner), [2..3]);
        assert_eq!(argument_spans("see ab<c>", &beside), [4..6, 6..9]);
    }

    #[test]
    fn no_match_leaves_placeholders_only() {
        assert_eq!(
            rendered("nothing <here>", r"^(\d+)$", Status::Pending),
            "nothing {-pending}{+pending_param}<here>{-pending_param}{+pending}",
        );
    }

    #[test]
    fn stripping_restores_text_and_markers_balance() {
        const ALPHABET: &[char] = &['a', 'b', '5', '7', '<', '>', ' ', 'ü'];
        const PATTERNS: &[&str] = &[
            r"(\d+)",
            r"(a+)(b*)",
            r"((a)b)",
            r"(<\w*>)",
            r"(.)(.)?(\d)",
            r"(\s)(ü+)",
        ];

        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let len = rng.gen_range(0..16);
            let text = (0..len)
                .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
                .collect::<String>();
            let pattern = pattern(PATTERNS[rng.gen_range(0..PATTERNS.len())]);

            let mut line = Markup::new();
            _ = line
                .open(Status::Passed)
                .append(colorize(&text, &pattern, Status::Passed))
                .close(Status::Passed);

            assert_eq!(line.to_plain(), text, "pattern: {pattern}");
            assert!(line.is_balanced(), "text: {text:?}, pattern: {pattern}");
        }
    }
}
