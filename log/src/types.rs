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

use timber_deps::dyn_clone::{clone_trait_object, DynClone};
use timber_err::Error;
use std::fs::File;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// The four log levels. Every level is always emitted, there is no threshold.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum LogLevel {
	/// Standard information
	Info,
	/// Debugging information
	Debug,
	/// Something the user should be aware of, although it may not be an error
	Warn,
	/// Error that the user must be aware of
	Error,
}

/// The source location of a logging call. Rendered as `[file:line]` in the log file.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct CallerLocation {
	pub(crate) file: String,
	pub(crate) line: u32,
}

/// A single argument to a log template. The template verb decides which variants are
/// accepted (see [`crate::render`]). Most values are built with [`From`], for instance
/// `Value::from("alice")` or `Value::from(42)`.
#[derive(PartialEq, Clone, Debug)]
pub enum Value {
	/// a string, accepted by `%s` and `%v`
	Str(String),
	/// a signed integer, accepted by `%d`, `%f` and `%v`
	Int(i64),
	/// an unsigned integer, accepted by `%d`, `%f` and `%v`
	Uint(u64),
	/// a floating point value, accepted by `%f` and `%v`
	Float(f64),
	/// a boolean, accepted by `%t` and `%v`
	Bool(bool),
	/// the [`std::fmt::Display`] output of any other value, accepted by `%s` and `%v`
	Display(String),
}

/// Kinds of errors returned by the logging crate.
pub enum LogErrorKind {
	/// The file already at the log path could not be archived.
	Rotation(String),
	/// The log file could not be created.
	Setup(String),
	/// The log file could not be closed cleanly.
	Stop(String),
	/// The log has not been set up, or has been stopped.
	NotArmed(String),
	/// A template and its arguments do not agree.
	Render(String),
}

/// The [`crate::Log`] trait is the interface to a file-backed logging facility. A log is built
/// unarmed by [`crate::LogBuilder::build_log`] (or the [`crate::logger`] macro), armed with
/// [`crate::Log::setup`] and disarmed with [`crate::Log::stop`]. Clones share the same
/// facility, so a clone may be handed to each thread that logs.
///
///```
/// use timber_err::*;
/// use timber_log::*;
/// use timber_test::*;
///
/// fn main() -> Result<(), Error> {
///     let test_info = test_info!()?;
///     let path = format!("{}/app.log", test_info.directory());
///
///     let log = logger!(DisplayTimestamp(false))?;
///     log.setup(&path)?;
///     info!(log, "user %s logged in", "alice");
///     log.stop()?;
///
///     let content = std::fs::read_to_string(&path)?;
///     assert!(content.starts_with("[INFO]["));
///     assert!(content.ends_with(": user alice logged in\n"));
///     Ok(())
/// }
///```
pub trait Log: DynClone + Send + Sync {
	/// Arm the log on `path`. Any handle that is currently open is closed first. If a file
	/// already exists at `path` it is renamed to `path.<YYYYMMDD>_<HHMMSS>.<CC>` and a new,
	/// empty file is created in its place.
	/// # Errors
	/// * [`crate::LogErrorKind::Rotation`] - if the existing file could not be archived.
	/// * [`crate::LogErrorKind::Setup`] - if the new file could not be created.
	///
	/// On error the log is left unarmed.
	fn setup(&self, path: &str) -> Result<(), Error>;

	/// Flush and close the log file. The log is unarmed afterwards even if an error is
	/// returned.
	/// # Errors
	/// * [`crate::LogErrorKind::NotArmed`] - if the log is not armed.
	/// * [`crate::LogErrorKind::Stop`] - if the file could not be flushed to disk.
	fn stop(&self) -> Result<(), Error>;

	/// Render `template` with `args` and write one line at `level` attributed to `location`.
	/// The leveled functions ([`crate::Log::info`] and friends) call this and send any
	/// error to stderr. Call it directly to inspect the error instead.
	/// # Errors
	/// * [`crate::LogErrorKind::NotArmed`] - if the log is not armed.
	/// * [`crate::LogErrorKind::Render`] - if the template and arguments do not agree.
	/// * [`timber_err::CoreErrorKind::IO`] - if the write fails.
	fn log(
		&self,
		level: LogLevel,
		location: &CallerLocation,
		template: &str,
		args: &[Value],
	) -> Result<(), Error>;

	/// Flush written lines to disk so they are visible to other readers.
	fn flush(&self) -> Result<(), Error>;

	/// Returns true if the log is armed.
	fn is_armed(&self) -> Result<bool, Error>;

	/// The path of the open log file, [`None`] if the log is not armed.
	fn path(&self) -> Result<Option<PathBuf>, Error>;

	/// Log at [`crate::LogLevel::Info`]. Failures never reach the caller, they are reported
	/// on stderr.
	fn info(&self, location: &CallerLocation, template: &str, args: &[Value]) {
		crate::log::emit(self, LogLevel::Info, location, template, args)
	}

	/// Log at [`crate::LogLevel::Debug`]. Failures never reach the caller, they are reported
	/// on stderr.
	fn debug(&self, location: &CallerLocation, template: &str, args: &[Value]) {
		crate::log::emit(self, LogLevel::Debug, location, template, args)
	}

	/// Log at [`crate::LogLevel::Warn`]. Failures never reach the caller, they are reported
	/// on stderr.
	fn warn(&self, location: &CallerLocation, template: &str, args: &[Value]) {
		crate::log::emit(self, LogLevel::Warn, location, template, args)
	}

	/// Log at [`crate::LogLevel::Error`]. Failures never reach the caller, they are reported
	/// on stderr.
	fn error(&self, location: &CallerLocation, template: &str, args: &[Value]) {
		crate::log::emit(self, LogLevel::Error, location, template, args)
	}
}

clone_trait_object!(Log);

/// Builder struct used to build [`crate::Log`] implementations.
pub struct LogBuilder {}

// Crate local types

#[derive(Clone)]
pub(crate) struct LogConfig {
	pub(crate) timestamp: bool,
	pub(crate) show_millis: bool,
	pub(crate) stdout: bool,
	pub(crate) colors: bool,
	pub(crate) line_num_data_max_len: usize,
	pub(crate) file_header: String,
}

pub(crate) struct LogState {
	pub(crate) path: Option<PathBuf>,
	pub(crate) file: Option<File>,
}

#[derive(Clone)]
pub(crate) struct LogImpl {
	pub(crate) config: LogConfig,
	pub(crate) state: Arc<RwLock<LogState>>,
}
