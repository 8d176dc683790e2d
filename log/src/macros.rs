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

/// Build an unarmed [`crate::Log`] with the specified [`crate::ConfigOption`]s. This is the
/// equivalent of calling [`crate::LogBuilder::build_log`] and the variant names can be used
/// without a prefix.
/// # Examples
///```
/// use timber_err::*;
/// use timber_log::*;
///
/// fn main() -> Result<(), Error> {
///     let log = logger!(DisplayMillis(true), LineNumDataMaxLen(30))?;
///     assert!(!log.is_armed()?);
///
///     // duplicate options are rejected
///     assert!(logger!(DisplayMillis(true), DisplayMillis(false)).is_err());
///     Ok(())
/// }
///```
#[macro_export]
macro_rules! logger {
	( $( $config:expr ),* $(,)? ) => {{
		#[allow(unused_imports)]
		use $crate::{ConfigOption, ConfigOption::*, LogBuilder};
		let config_values: Vec<ConfigOption> = vec![$($config),*];
		LogBuilder::build_log(config_values)
	}};
}

/// Log at the [`crate::LogLevel::Info`] level. The first argument is the [`crate::Log`] to
/// write to, followed by the template and its arguments (see [`crate::render`]). Each argument
/// is converted with [`crate::Value::from`]. The location of the macro call is reported in
/// the line. Nothing is returned, errors are sent to stderr.
/// # Examples
///```
/// use timber_err::*;
/// use timber_log::*;
/// use timber_test::*;
///
/// fn main() -> Result<(), Error> {
///     let test_info = test_info!()?;
///     let path = format!("{}/info.log", test_info.directory());
///     let log = logger!()?;
///     log.setup(&path)?;
///
///     info!(log, "user %s logged in", "alice");
///     info!(log, "%d of %d done", 1, 2u64);
///
///     log.stop()?;
///     let content = std::fs::read_to_string(&path)?;
///     assert_eq!(content.lines().count(), 2);
///     Ok(())
/// }
///```
#[macro_export]
macro_rules! info {
	($log:expr, $template:expr $(, $arg:expr)* $(,)?) => {{
		#[allow(unused_imports)]
		use $crate::Log as _;
		$log.info(
			&$crate::CallerLocation::new(file!(), line!()),
			$template,
			&[$($crate::Value::from($arg)),*],
		)
	}};
}

/// Log at the [`crate::LogLevel::Debug`] level. See [`crate::info`].
/// # Examples
///```
/// use timber_err::*;
/// use timber_log::*;
/// use timber_test::*;
///
/// fn main() -> Result<(), Error> {
///     let test_info = test_info!()?;
///     let path = format!("{}/debug.log", test_info.directory());
///     let log = logger!(DisplayTimestamp(false))?;
///     log.setup(&path)?;
///     debug!(log, "cache hit ratio %.1f%%", 12.5);
///     log.stop()?;
///
///     let content = std::fs::read_to_string(&path)?;
///     assert!(content.starts_with("[DEBUG]["));
///     assert!(content.ends_with(": cache hit ratio 12.5%\n"));
///     Ok(())
/// }
///```
#[macro_export]
macro_rules! debug {
	($log:expr, $template:expr $(, $arg:expr)* $(,)?) => {{
		#[allow(unused_imports)]
		use $crate::Log as _;
		$log.debug(
			&$crate::CallerLocation::new(file!(), line!()),
			$template,
			&[$($crate::Value::from($arg)),*],
		)
	}};
}

/// Log at the [`crate::LogLevel::Warn`] level. See [`crate::info`].
#[macro_export]
macro_rules! warn {
	($log:expr, $template:expr $(, $arg:expr)* $(,)?) => {{
		#[allow(unused_imports)]
		use $crate::Log as _;
		$log.warn(
			&$crate::CallerLocation::new(file!(), line!()),
			$template,
			&[$($crate::Value::from($arg)),*],
		)
	}};
}

/// Log at the [`crate::LogLevel::Error`] level. See [`crate::info`].
#[macro_export]
macro_rules! error {
	($log:expr, $template:expr $(, $arg:expr)* $(,)?) => {{
		#[allow(unused_imports)]
		use $crate::Log as _;
		$log.error(
			&$crate::CallerLocation::new(file!(), line!()),
			$template,
			&[$($crate::Value::from($arg)),*],
		)
	}};
}
