//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, ProfileSetting};
use crate::fs::Location;
use crate::path::ExtensionFlags;

/// Path classification and filename tools.
#[derive(Parser, Debug)]
#[command(
    name = "pathkit",
    version,
    about = "Classify, split, join and rename paths across POSIX, Windows, UNC and URL styles",
    long_about = "Classify, split, join and rename paths across POSIX, Windows, UNC and URL styles.\n\n\
                  Every command is a pure string transform: nothing on disk is read or changed."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file.
    #[arg(short, long, default_value = "pathkit.toml", global = true)]
    pub config: PathBuf,

    /// Platform rules to apply.
    #[arg(short, long, value_enum, env = "PATHKIT_PROFILE", global = true)]
    pub profile: Option<ProfileArg>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable coloured output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,
}

/// A single pathkit operation.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Report the style of a path and every predicate.
    Classify { path: String },

    /// Exit with status 0 if the path is a root, 1 otherwise.
    IsRoot { path: String },

    /// Print the root of a path.
    Root { path: String },

    /// Print the parent of a path.
    Parent { path: String },

    /// Print the last component of a path.
    Filename { path: String },

    /// Print the filename without its extension.
    Basename { path: String },

    /// Print the extension of a path.
    Extension {
        path: String,

        /// Everything after the first dot ("tar.gz" instead of "gz").
        #[arg(long)]
        complete: bool,

        /// Upper-case the extension.
        #[arg(long)]
        upper: bool,

        /// Include the leading dot.
        #[arg(long)]
        with_dot: bool,
    },

    /// Print every segment of a path.
    Split { path: String },

    /// Join one or two stems onto a base path.
    Append {
        base: String,
        stem: String,
        second: Option<String>,
    },

    /// Make a bare filename legal on every platform.
    Trim {
        filename: String,

        /// Replacement for illegal characters (defaults to the configured one).
        #[arg(short, long)]
        substitute: Option<String>,
    },

    /// Add or bump the "(n)" counter in a filename.
    Increment { path: String },

    /// Print a well-known directory, optionally with a stem appended.
    Locate {
        #[arg(value_enum)]
        location: LocationArg,

        stem: Option<String>,
    },
}

impl Command {
    /// Flags selected for the `extension` command.
    pub fn extension_flags(complete: bool, upper: bool, with_dot: bool) -> ExtensionFlags {
        let mut flags = ExtensionFlags::DEFAULT;
        flags.set(ExtensionFlags::COMPLETE, complete);
        flags.set(ExtensionFlags::UPPER_CASE, upper);
        flags.set(ExtensionFlags::WITH_DOT, with_dot);
        flags
    }
}

/// CLI platform profile argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProfileArg {
    /// Rules of the platform this binary was built for.
    Native,
    /// POSIX rules.
    Posix,
    /// Windows rules.
    Windows,
}

impl From<ProfileArg> for ProfileSetting {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Native => ProfileSetting::Native,
            ProfileArg::Posix => ProfileSetting::Posix,
            ProfileArg::Windows => ProfileSetting::Windows,
        }
    }
}

/// CLI location argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LocationArg {
    /// The user's home directory.
    Home,
    /// The temporary directory.
    Temp,
    /// Directory of the running executable.
    ExeDir,
}

impl From<LocationArg> for Location {
    fn from(arg: LocationArg) -> Self {
        match arg {
            LocationArg::Home => Location::Home,
            LocationArg::Temp => Location::Temp,
            LocationArg::ExeDir => Location::ExeDir,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(profile) = self.profile {
            config.path.profile = profile.into();
        }

        // Boolean flags (only override if set to non-default)
        if self.json {
            config.output.json = true;
        }

        if self.no_color {
            config.output.color = false;
        }
    }
}
