// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tabular data attached to [`Step`]s and [`Outline`]s.
//!
//! [`Outline`]: super::Outline
//! [`Step`]: super::Step

use std::{cmp, fmt};

use itertools::Itertools as _;

/// Table of cells, as written in a feature file.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Table {
    /// Rows of this [`Table`], each being an ordered list of cells.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a new [`Table`] out of the given `rows`.
    #[must_use]
    pub fn new<R, C>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Returns the row at the given `index`, if any.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Returns widths of every column, measured in characters.
    #[must_use]
    pub fn column_widths(&self) -> Vec<usize> {
        self.rows.iter().fold(Vec::new(), |mut widths, row| {
            for (i, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = cmp::max(*w, len),
                    None => widths.push(len),
                }
            }
            widths
        })
    }

    /// Returns the cells of the row at `index` padded to their column width.
    ///
    /// Returns an empty [`Vec`] if there is no such row.
    #[must_use]
    pub fn padded_row(&self, index: usize) -> Vec<String> {
        let widths = self.column_widths();
        self.row(index)
            .map(|row| {
                row.iter()
                    .zip(&widths)
                    .map(|(cell, width)| format!("{cell:width$}"))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Renders the row at `index` as `| cell | cell |` with padded cells.
    #[must_use]
    pub fn row_as_string(&self, index: usize) -> String {
        let cells = self.padded_row(index);
        if cells.is_empty() {
            return String::new();
        }
        format!("| {} |", cells.iter().join(" | "))
    }

    /// Indicates whether this [`Table`] has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = (0..self.rows.len()).map(|i| self.row_as_string(i));
        write!(f, "{}", rows.format("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::Table;

    #[test]
    fn pads_cells_to_column_width() {
        let table = Table::new([vec!["name", "qty"], vec!["apples", "5"]]);

        assert_eq!(table.row_as_string(0), "| name   | qty |");
        assert_eq!(table.row_as_string(1), "| apples | 5   |");
    }

    #[test]
    fn measures_width_in_chars() {
        let table = Table::new([vec!["ü"], vec!["ab"]]);

        assert_eq!(table.column_widths(), vec![2]);
        assert_eq!(table.row_as_string(0), "| ü  |");
    }

    #[test]
    fn displays_all_rows() {
        let table = Table::new([vec!["a", "b"], vec!["1", "22"]]);

        assert_eq!(table.to_string(), "| a | b  |\n| 1 | 22 |");
    }

    #[test]
    fn missing_row_is_empty() {
        assert_eq!(Table::default().row_as_string(3), "");
    }
}
