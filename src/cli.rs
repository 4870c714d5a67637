// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Command line interface of the `scpi-gen` binary.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use scpi_gen_impl::{
    Error, GeneratorConfig,
    config::{DEFAULT_DECL_FILE, DEFAULT_DEFS_FILE, DEFAULT_DOCS_FILE, DEFAULT_TITLE}
};

/// Compile an SCPI command schema into documentation and Rust dispatch code.
#[derive(Parser, Debug, Clone)]
#[command(name = "scpi-gen", version, about, long_about = None)]
pub struct Cli {
    /// YAML schema listing the commands
    pub input: PathBuf,

    /// Regenerate every artifact even when it is up to date
    #[arg(short, long)]
    pub force: bool,

    /// Directory receiving the artifacts (defaults to the schema's directory)
    #[arg(short, long, env = "SCPI_GEN_OUT_DIR")]
    pub out_dir: Option<PathBuf>,

    /// Title of the Markdown reference
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// File name of the Markdown reference
    #[arg(long, default_value = DEFAULT_DOCS_FILE)]
    pub docs_file: String,

    /// File name of the Rust declarations
    #[arg(long, default_value = DEFAULT_DECL_FILE)]
    pub decl_file: String,

    /// File name of the Rust definitions
    #[arg(long, default_value = DEFAULT_DEFS_FILE)]
    pub defs_file: String,

    /// More output; repeat for trace level
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool
}

impl Cli {
    /// Generator settings; the source name is taken from the input path.
    pub fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            title:       self.title.clone(),
            source_name: String::new(),
            docs_file:   self.docs_file.clone(),
            decl_file:   self.decl_file.clone(),
            defs_file:   self.defs_file.clone()
        }
    }

    /// Output directory, falling back to the directory holding the input.
    pub fn out_dir(&self) -> PathBuf {
        match &self.out_dir {
            Some(dir) => dir.clone(),
            None => self
                .input
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or(Path::new("."))
                .to_owned()
        }
    }

    /// Default filter directive when `RUST_LOG` is unset.
    pub fn log_directive(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "info",
            (false, 1) => "debug",
            (false, _) => "trace"
        }
    }
}

/// One-line rendering of `error` followed by every underlying cause.
pub fn describe(error: Error) -> String {
    format!("{:#}", anyhow::Error::new(error))
}

#[cfg(test)]
mod tests {
    use scpi_gen_impl::compile_str;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("scpi-gen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&["schema/commands.yaml"]);
        assert!(!cli.force);
        assert_eq!(cli.out_dir(), PathBuf::from("schema"));
        assert_eq!(cli.log_directive(), "info");

        let config = cli.config();
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.docs_file, DEFAULT_DOCS_FILE);
        assert!(config.source_name.is_empty());
    }

    #[test]
    fn bare_file_name_writes_next_to_it() {
        assert_eq!(parse(&["commands.yaml"]).out_dir(), PathBuf::from("."));
    }

    #[test]
    fn overrides() {
        let cli = parse(&[
            "commands.yaml",
            "--force",
            "--out-dir",
            "generated",
            "--title",
            "PWM",
            "--defs-file",
            "defs.rs",
            "-vv"
        ]);
        assert!(cli.force);
        assert_eq!(cli.out_dir(), PathBuf::from("generated"));
        assert_eq!(cli.config().title, "PWM");
        assert_eq!(cli.config().defs_file, "defs.rs");
        assert_eq!(cli.log_directive(), "trace");
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["scpi-gen", "commands.yaml", "-q", "-v"]).is_err());
        assert_eq!(parse(&["commands.yaml", "-q"]).log_directive(), "error");
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["scpi-gen"]).is_err());
    }

    #[test]
    fn described_errors_keep_their_cause() {
        let config = GeneratorConfig::default().with_source_name("pwm.yaml");
        let error = compile_str(
            "- command: \":SOURce:VOLTage\"\n  params: [{ name: level, type: floaty }]\n",
            &config
        )
        .unwrap_err();
        let top = error.to_string();
        let described = describe(error);
        assert!(described.starts_with(&format!("{top}: ")));
        assert!(described.contains("pwm.yaml"));
        assert!(described.contains("floaty"));
    }
}
