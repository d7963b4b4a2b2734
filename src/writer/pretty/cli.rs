// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI options and configuration of the [`Pretty`] formatter.
//!
//! [`Pretty`]: super::Pretty

use std::str::FromStr;

use smart_default::SmartDefault;

/// Recognized options of a [`Pretty`] formatter.
///
/// Immutable once the formatter is built.
///
/// [`Pretty`]: super::Pretty
#[derive(Clone, Copy, Debug, Eq, PartialEq, SmartDefault)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Render every outline iteration's full step list instead of a compact
    /// table row.
    #[default(false)]
    pub expand: bool,

    /// Render doc string and table step arguments.
    #[default(true)]
    pub multiline_arguments: bool,

    /// Render aligned source-location comments.
    #[default(true)]
    pub paths: bool,

    /// Render snippets of undefined steps.
    #[default(true)]
    pub snippets: bool,
}

/// CLI options of a [`Pretty`] formatter.
///
/// [`Pretty`]: super::Pretty
#[derive(Clone, Copy, Debug, SmartDefault, clap::Args)]
#[group(skip)]
pub struct Cli {
    /// Print every outline example as a separate scenario.
    #[arg(long, global = true)]
    pub expand: bool,

    /// Don't print doc strings and tables of steps.
    #[arg(long = "no-multiline", global = true)]
    pub no_multiline: bool,

    /// Don't print source locations of scenarios and steps.
    #[arg(long = "no-paths", global = true)]
    pub no_paths: bool,

    /// Don't print snippets for undefined steps.
    #[arg(long = "no-snippets", global = true)]
    pub no_snippets: bool,

    /// Coloring policy for a console output.
    #[arg(
        long,
        value_name = "auto|always|never",
        default_value = "auto",
        global = true
    )]
    #[default(Coloring::Auto)]
    pub color: Coloring,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            expand: cli.expand,
            multiline_arguments: !cli.no_multiline,
            paths: !cli.no_paths,
            snippets: !cli.no_snippets,
        }
    }
}

/// Possible policies of a [`console`] output coloring.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Coloring {
    /// Letting [`console::colors_enabled()`] to decide, whether output should
    /// be colored.
    #[default]
    Auto,

    /// Forcing of a colored output.
    Always,

    /// Forcing of a non-colored output.
    Never,
}

impl FromStr for Coloring {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err("possible options: auto, always, never"),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Coloring, Config};

    #[derive(Debug, Parser)]
    struct Opts {
        #[command(flatten)]
        pretty: Cli,
    }

    #[test]
    fn defaults() {
        let config = Config::default();

        assert!(!config.expand);
        assert!(config.multiline_arguments);
        assert!(config.paths);
        assert!(config.snippets);
        assert_eq!(Config::from(Cli::default()), config);
    }

    #[test]
    fn parses_flags() {
        let opts = Opts::try_parse_from([
            "test",
            "--expand",
            "--no-paths",
            "--color",
            "never",
        ])
        .expect("valid flags");
        let config = Config::from(opts.pretty);

        assert!(config.expand);
        assert!(!config.paths);
        assert!(config.multiline_arguments);
        assert_eq!(opts.pretty.color, Coloring::Never);
    }

    #[test]
    fn parses_coloring_case_insensitively() {
        assert_eq!("ALWAYS".parse::<Coloring>(), Ok(Coloring::Always));
        assert!("rainbow".parse::<Coloring>().is_err());
    }
}
