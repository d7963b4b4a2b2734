// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors of writing formatted output.

use std::{fmt, io};

use derive_more::with_trait::{Display, Error, From};

/// Error of writing rendered output into an [`Output`].
///
/// Never escapes an event handler: formatters log and swallow it.
///
/// [`Output`]: crate::writer::Output
#[derive(Debug, Display, Error, From)]
pub enum WriterError {
    /// I/O error during output operations.
    #[display("I/O error: {_0}")]
    Io(io::Error),

    /// Output formatting error.
    #[display("Format error: {_0}")]
    Format(fmt::Error),
}

impl WriterError {
    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

/// Result type alias for writer operations.
pub type WriterResult<T> = Result<T, WriterError>;

#[cfg(test)]
mod tests {
    use std::{fmt, io};

    use super::WriterError;

    #[test]
    fn wraps_io_errors() {
        let err = WriterError::from(io::Error::new(
            io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));

        assert!(err.is_io_error());
        assert_eq!(err.to_string(), "I/O error: pipe closed");
    }

    #[test]
    fn wraps_format_errors() {
        let err = WriterError::from(fmt::Error);

        assert!(!err.is_io_error());
        assert!(err.to_string().starts_with("Format error: "));
    }
}
