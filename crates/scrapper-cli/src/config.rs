//! Configuration loading helpers for the scrapper CLI.
//!
//! Leading configuration flags are peeled off the argument list and handed to
//! `ortho_config`; everything from the first other token onwards belongs to
//! the query parser.

use std::ffi::{OsStr, OsString};

use ortho_config::OrthoConfig;
use scrapper_config::Config;

use crate::AppError;

/// CLI flags recognised by the configuration loader.
///
/// Keep in sync with the fields of [`Config`].
pub(crate) const CONFIG_CLI_FLAGS: &[&str] = &["--config-path", "--log-filter", "--log-format"];

pub(crate) trait ConfigLoader {
    /// Loads configuration from the leading configuration flags.
    ///
    /// `args` starts with the program name and contains only flags listed in
    /// [`CONFIG_CLI_FLAGS`] and their values.
    fn load(&self, args: &[OsString]) -> Result<Config, AppError>;
}

pub(crate) struct OrthoConfigLoader;

impl ConfigLoader for OrthoConfigLoader {
    fn load(&self, args: &[OsString]) -> Result<Config, AppError> {
        Config::load_from_iter(args.iter().cloned()).map_err(AppError::LoadConfiguration)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlagAction {
    Include { needs_value: bool },
    Stop,
}

fn classify(argument: &OsStr) -> FlagAction {
    let text = argument.to_string_lossy();
    let (flag, has_inline_value) = match text.split_once('=') {
        Some((flag, _)) => (flag, true),
        None => (&*text, false),
    };

    if CONFIG_CLI_FLAGS.contains(&flag) {
        FlagAction::Include {
            needs_value: !has_inline_value,
        }
    } else {
        FlagAction::Stop
    }
}

/// Arguments partitioned into the configuration prefix and the query tail.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ConfigArgumentSplit {
    /// Program name followed by the configuration flags.
    pub(crate) config_arguments: Vec<OsString>,
    /// Index of the first argument that belongs to the query parser.
    pub(crate) command_start: usize,
}

impl ConfigArgumentSplit {
    /// Program name followed by the arguments after the configuration prefix.
    pub(crate) fn command_arguments(&self, args: &[OsString]) -> Vec<OsString> {
        let program = args.first().into_iter();
        let tail = args.get(self.command_start..).unwrap_or_default();
        program.chain(tail).cloned().collect()
    }
}

pub(crate) fn split_config_arguments(args: &[OsString]) -> ConfigArgumentSplit {
    let Some((program, rest)) = args.split_first() else {
        return ConfigArgumentSplit {
            config_arguments: Vec::new(),
            command_start: 0,
        };
    };

    let mut config_arguments = vec![program.clone()];
    let mut expecting_value = false;
    for argument in rest {
        if expecting_value {
            expecting_value = false;
        } else {
            match classify(argument) {
                FlagAction::Include { needs_value } => expecting_value = needs_value,
                FlagAction::Stop => break,
            }
        }
        config_arguments.push(argument.clone());
    }

    let command_start = config_arguments.len();
    ConfigArgumentSplit {
        config_arguments,
        command_start,
    }
}
