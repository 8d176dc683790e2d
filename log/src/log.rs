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

use crate::archive::archive_if_present;
use crate::constants::*;
use crate::render::render;
use crate::types::{LogConfig, LogImpl, LogState};
use crate::{CallerLocation, Log, LogBuilder, LogErrorKind, LogLevel, Value};
use timber_conf::*;
use timber_deps::chrono::Local;
use timber_deps::colored::Colorize;
use timber_err::*;
use std::fmt::{Debug, Display, Formatter};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

impl LogLevel {
	/// The tag written in front of the caller location, e.g. `[INFO]`.
	pub fn tag(&self) -> &'static str {
		match self {
			LogLevel::Info => INFO_TAG,
			LogLevel::Debug => DEBUG_TAG,
			LogLevel::Warn => WARN_TAG,
			LogLevel::Error => ERROR_TAG,
		}
	}
}

impl Display for LogLevel {
	fn fmt(&self, w: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
		match self {
			LogLevel::Info => write!(w, "INFO"),
			LogLevel::Debug => write!(w, "DEBUG"),
			LogLevel::Warn => write!(w, "WARN"),
			LogLevel::Error => write!(w, "ERROR"),
		}
	}
}

impl ErrorKind for LogErrorKind {}

impl Display for LogErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
		write!(f, "{:?}", self)
	}
}

impl Debug for LogErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
		match self {
			LogErrorKind::Rotation(s) => write!(f, "rotation: {}", s),
			LogErrorKind::Setup(s) => write!(f, "setup: {}", s),
			LogErrorKind::Stop(s) => write!(f, "stop: {}", s),
			LogErrorKind::NotArmed(s) => write!(f, "not armed: {}", s),
			LogErrorKind::Render(s) => write!(f, "render: {}", s),
		}
	}
}

impl From<LogErrorKind> for Error {
	fn from(kind: LogErrorKind) -> Error {
		Error::new(Box::new(kind))
	}
}

impl LogBuilder {
	/// Build an unarmed [`crate::Log`] from the specified options. Call
	/// [`crate::Log::setup`] on the returned value to start logging.
	/// # Errors
	/// [`timber_err::CoreErrorKind::Configuration`] if an option is specified more than once.
	pub fn build_log(configs: Vec<ConfigOption>) -> Result<Box<dyn Log + Send + Sync>, Error> {
		Ok(Box::new(LogImpl::new(configs)?))
	}
}

impl Log for LogImpl {
	fn setup(&self, path: &str) -> Result<(), Error> {
		let mut state = self.state.write()?;

		if let Some(file) = state.file.take() {
			if let Err(e) = file.sync_all() {
				side_channel(&format!("error syncing previous log file: {}", e));
			}
		}
		state.path = None;

		let target = PathBuf::from(path);
		archive_if_present(&target)?;

		let mut file = match File::create(&target) {
			Ok(file) => file,
			Err(e) => return err!(LogErrorKind::Setup, "could not create '{}': {}", path, e),
		};

		if self.config.file_header.len() > 0 {
			let header = format!("{}\n", self.config.file_header);
			map_err!(
				file.write_all(header.as_bytes()),
				LogErrorKind::Setup,
				"could not write file header"
			)?;
		}

		state.file = Some(file);
		state.path = Some(target);
		Ok(())
	}

	fn stop(&self) -> Result<(), Error> {
		let mut state = self.state.write()?;
		state.path = None;
		match state.file.take() {
			Some(mut file) => {
				map_err!(file.flush(), LogErrorKind::Stop, "flush failed")?;
				map_err!(file.sync_all(), LogErrorKind::Stop, "sync failed")?;
				Ok(())
			}
			None => err!(LogErrorKind::NotArmed, "stop called on a log that is not armed"),
		}
	}

	fn log(
		&self,
		level: LogLevel,
		location: &CallerLocation,
		template: &str,
		args: &[Value],
	) -> Result<(), Error> {
		// rendering and composition happen outside the lock
		let composed = render(template, args).map(|message| self.compose(level, location, &message));

		let mut state = self.state.write()?;
		let file = match state.file.as_mut() {
			Some(file) => file,
			None => {
				return err!(
					LogErrorKind::NotArmed,
					"{} line logged while the log is not armed",
					level
				)
			}
		};
		let (line, echo) = composed?;
		file.write_all(line.as_bytes())?;
		drop(state);

		if let Some(echo) = echo {
			let mut stdout = std::io::stdout().lock();
			if let Err(e) = stdout.write_all(echo.as_bytes()).and_then(|_| stdout.flush()) {
				side_channel(&format!("error writing to stdout: {}", e));
			}
		}

		Ok(())
	}

	fn flush(&self) -> Result<(), Error> {
		let mut state = self.state.write()?;
		match state.file.as_mut() {
			Some(file) => {
				file.flush()?;
				file.sync_data()?;
				Ok(())
			}
			None => err!(LogErrorKind::NotArmed, "flush called on a log that is not armed"),
		}
	}

	fn is_armed(&self) -> Result<bool, Error> {
		let state = self.state.read()?;
		Ok(state.file.is_some())
	}

	fn path(&self) -> Result<Option<PathBuf>, Error> {
		let state = self.state.read()?;
		Ok(state.path.clone())
	}
}

impl LogImpl {
	pub(crate) fn new(configs: Vec<ConfigOption>) -> Result<Self, Error> {
		Ok(Self {
			config: LogConfig::new(configs)?,
			state: Arc::new(RwLock::new(LogState {
				path: None,
				file: None,
			})),
		})
	}

	// the file line and, if DisplayStdout is set, the stdout line
	fn compose(
		&self,
		level: LogLevel,
		location: &CallerLocation,
		message: &str,
	) -> (String, Option<String>) {
		let prefix = self.format_timestamp();
		let max_len = self.config.line_num_data_max_len;
		let location = format!("[{}]", location.display_truncated(max_len));
		let line = format!(
			"{}{}{}{}{}\n",
			prefix,
			level.tag(),
			location,
			MESSAGE_SEPARATOR,
			message
		);

		let echo = match (self.config.stdout, self.config.colors) {
			(false, _) => None,
			(true, false) => Some(line.clone()),
			(true, true) => {
				let tag = match level {
					LogLevel::Info => level.tag().green(),
					LogLevel::Debug => level.tag().cyan(),
					LogLevel::Warn => level.tag().yellow(),
					LogLevel::Error => level.tag().red(),
				};
				Some(format!(
					"{}{}{}{}{}\n",
					prefix, tag, location, MESSAGE_SEPARATOR, message
				))
			}
		};
		(line, echo)
	}

	fn format_timestamp(&self) -> String {
		if !self.config.timestamp {
			return "".to_string();
		}
		let format = match self.config.show_millis {
			true => LINE_TIMESTAMP_FORMAT_MILLIS,
			false => LINE_TIMESTAMP_FORMAT,
		};
		format!("{} ", Local::now().format(format))
	}
}

impl LogConfig {
	// create the log config based on the specified data
	pub(crate) fn new(configs: Vec<ConfigOption>) -> Result<Self, Error> {
		let config = ConfigBuilder::build_config(configs);
		config.check_config(
			vec![
				ConfigOptionName::DisplayTimestamp,
				ConfigOptionName::DisplayMillis,
				ConfigOptionName::DisplayStdout,
				ConfigOptionName::DisplayColors,
				ConfigOptionName::LineNumDataMaxLen,
				ConfigOptionName::FileHeader,
			],
			vec![],
		)?;
		Ok(Self {
			timestamp: config.get_or_bool(&ConfigOptionName::DisplayTimestamp, true),
			show_millis: config.get_or_bool(&ConfigOptionName::DisplayMillis, false),
			stdout: config.get_or_bool(&ConfigOptionName::DisplayStdout, false),
			colors: config.get_or_bool(&ConfigOptionName::DisplayColors, false),
			line_num_data_max_len: config.get_or_usize(&ConfigOptionName::LineNumDataMaxLen, 0),
			file_header: config.get_or_string(&ConfigOptionName::FileHeader, "".to_string()),
		})
	}
}

// render and write through `log`, sending any error to stderr
pub(crate) fn emit<L: Log + ?Sized>(
	log: &L,
	level: LogLevel,
	location: &CallerLocation,
	template: &str,
	args: &[Value],
) {
	if let Err(e) = log.log(level, location, template, args) {
		side_channel(&format!("{} {}: {}", level, location, e));
	}
}

pub(crate) fn side_channel(text: &str) {
	eprintln!("{}: {}", SIDE_CHANNEL_PREFIX, text);
}
