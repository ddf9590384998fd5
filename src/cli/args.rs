//! Command line argument parsing and validation.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Info.plist and PkgInfo generation for Java macOS application bundles
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundler_jarbundle",
    version,
    about = "Info.plist and PkgInfo generation for Java macOS application bundles",
    long_about = "Render the bundle metadata of a Java .app from a TOML descriptor.

The descriptor is either a standalone TOML file or a Cargo.toml with a
[package.metadata.jarbundle] table.

Usage:
  kodegen_bundler_jarbundle check bundle.toml
  kodegen_bundler_jarbundle plist bundle.toml
  kodegen_bundler_jarbundle write bundle.toml --contents-dir Bar.app/Contents"
)]
pub struct Args {
    /// Command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Suppress informational output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show per-file details
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the rendered Info.plist to stdout
    Plist {
        /// Bundle descriptor
        #[arg(value_name = "DESCRIPTOR")]
        descriptor: PathBuf,
    },

    /// Write Info.plist, PkgInfo and localized help book strings
    Write {
        /// Bundle descriptor
        #[arg(value_name = "DESCRIPTOR")]
        descriptor: PathBuf,

        /// Existing Contents directory of the .app bundle
        #[arg(long, value_name = "DIR")]
        contents_dir: PathBuf,

        /// Echo the written Info.plist
        #[arg(long)]
        show_plist: bool,
    },

    /// Validate a descriptor without writing anything
    Check {
        /// Bundle descriptor
        #[arg(value_name = "DESCRIPTOR")]
        descriptor: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Command {
    /// Command name for messages
    pub fn name(&self) -> &'static str {
        match self {
            Command::Plist { .. } => "plist",
            Command::Write { .. } => "write",
            Command::Check { .. } => "check",
        }
    }

    /// Descriptor the command reads
    pub fn descriptor(&self) -> &PathBuf {
        match self {
            Command::Plist { descriptor }
            | Command::Write { descriptor, .. }
            | Command::Check { descriptor, .. } => descriptor,
        }
    }
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.command.descriptor().as_os_str().is_empty() {
            return Err("Descriptor path is required".to_string());
        }

        if let Command::Write { contents_dir, .. } = &self.command
            && contents_dir.as_os_str().is_empty()
        {
            return Err("--contents-dir must not be empty".to_string());
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl RuntimeConfig {
    /// Create runtime configuration
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            output: super::OutputManager::new(verbose, quiet),
        }
    }

    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print message
    pub fn println(&self, message: &str) {
        let _ = self.output.println(message);
    }

    /// Print verbose message
    pub fn verbose_println(&self, message: &str) {
        let _ = self.output.verbose(message);
    }

    /// Print error message (always shown)
    pub fn error_println(&self, message: &str) {
        self.output.error(message);
    }

    /// Print warning message
    pub fn warning_println(&self, message: &str) {
        let _ = self.output.warn(message);
    }

    /// Print success message
    pub fn success_println(&self, message: &str) {
        let _ = self.output.success(message);
    }

    /// Print indented text
    pub fn indent(&self, message: &str) {
        let _ = self.output.indent(message);
    }
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self::new(args.verbose, args.quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_write() {
        let args = Args::try_parse_from([
            "kodegen_bundler_jarbundle",
            "write",
            "bundle.toml",
            "--contents-dir",
            "Bar.app/Contents",
            "--show-plist",
        ])
        .unwrap();

        assert_eq!(args.command.name(), "write");
        assert!(matches!(
            args.command,
            Command::Write { show_plist: true, .. }
        ));
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_write_requires_contents_dir() {
        let result = Args::try_parse_from(["kodegen_bundler_jarbundle", "write", "bundle.toml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Args::try_parse_from([
            "kodegen_bundler_jarbundle",
            "check",
            "bundle.toml",
            "--quiet",
            "--verbose",
        ]);
        assert!(result.is_err());
    }
}
