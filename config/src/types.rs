// Copyright (c) 2023-2024, The BitcoinMW Developers
// Some code and concepts from:
// * Grin: https://github.com/mimblewimble/grin
// * Arti: https://gitlab.torproject.org/tpo/core/arti
// * BitcoinMW: https://github.com/bitcoinmw/bitcoinmw
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use timber_err::Error;
use std::collections::HashMap;

/// The config trait allows for easy construction of configurations. Configurations can be
/// retreived with the [`crate::Config::get`] function (or the typed `get_or_*` functions)
/// and checked with the [`crate::Config::check_config`] function.
pub trait Config {
	/// Return the option with this name if it was specified.
	fn get(&self, name: &ConfigOptionName) -> Option<ConfigOption>;
	/// Return the value of a [`bool`] option or `default` if it was not specified.
	fn get_or_bool(&self, name: &ConfigOptionName, default: bool) -> bool;
	/// Return the value of a [`usize`] option or `default` if it was not specified.
	fn get_or_usize(&self, name: &ConfigOptionName, default: usize) -> usize;
	/// Return the value of a [`String`] option or `default` if it was not specified.
	fn get_or_string(&self, name: &ConfigOptionName, default: String) -> String;
	/// Check that every specified option is in `allowed`, that no option was specified more
	/// than once, and that every option in `required` was specified.
	fn check_config(
		&self,
		allowed: Vec<ConfigOptionName>,
		required: Vec<ConfigOptionName>,
	) -> Result<(), Error>;
}

/// Names of configuration options. This corresponds to the values in [`crate::ConfigOption`].
#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum ConfigOptionName {
	DisplayTimestamp,
	DisplayMillis,
	DisplayStdout,
	DisplayColors,
	LineNumDataMaxLen,
	FileHeader,
}

/// Configuration options used by the logging facility.
#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum ConfigOption {
	/// Prefix each line with the local date and time (second precision).
	DisplayTimestamp(bool),
	/// Append milliseconds to the timestamp prefix.
	DisplayMillis(bool),
	/// Echo every line to stdout in addition to the log file.
	DisplayStdout(bool),
	/// Color the severity tag on the stdout echo.
	DisplayColors(bool),
	/// Maximum length of the `file:line` data. Longer values keep only their tail. `0`
	/// means never truncate.
	LineNumDataMaxLen(usize),
	/// A line written at the top of every newly created log file. Empty means no header.
	FileHeader(String),
}

/// A builder struct which can be used to build configs. This is typically done using the
/// [`crate::config!`] macro which calls this builder.
pub struct ConfigBuilder {}

// Crate local structures

#[derive(Clone, Debug)]
pub(crate) struct ConfigImpl {
	pub(crate) configs: Vec<ConfigOption>,
	pub(crate) hash: HashMap<ConfigOptionName, ConfigOption>,
}
