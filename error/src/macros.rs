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

/// Build the specified [`crate::ErrorKind`] and return it as an `Err` ( [`crate::Error`] ).
/// # Input Parameters
/// * `$kind` - a constructor of a type implementing [`crate::ErrorKind`], for instance
/// [`crate::CoreErrorKind::IO`].
/// * `$msg` - [`std::str`] - The message to display with this error.
/// * `$($param)*` - The formatting parameters as in with [`std::format`].
/// # Examples
///```
/// use timber_err::*;
///
/// fn main() -> Result<(), Error> {
///     let res: Result<(), Error> = err!(CoreErrorKind::IllegalArgument, "bad token: '{}'", "x");
///     let err = res.unwrap_err();
///     assert_eq!(err.kind(), &kind!(CoreErrorKind::IllegalArgument, "bad token: 'x'"));
///     Ok(())
/// }
///```
#[macro_export]
macro_rules! err {
	($kind:expr, $msg:expr, $($param:tt)*) => {{
		let msg = &format!($msg, $($param)*)[..];
		let error: $crate::Error = $kind(msg.to_string()).into();
		Err(error)
	}};
	($kind:expr, $msg:expr) => {{
		let error: $crate::Error = $kind($msg.to_string()).into();
		Err(error)
	}};
}

/// Same as [`crate::err`] except that the bare [`crate::Error`] is returned instead of
/// being wrapped in `Err`.
#[macro_export]
macro_rules! err_only {
	($kind:expr, $msg:expr, $($param:tt)*) => {{
		let msg = &format!($msg, $($param)*)[..];
		let error: $crate::Error = $kind(msg.to_string()).into();
		error
	}};
	($kind:expr, $m:expr) => {{
		let error: $crate::Error = $kind($m.to_string()).into();
		error
	}};
}

/// Map the error of a [`std::result::Result`] into the specified [`crate::ErrorKind`].
/// Optionally specify an additional message to be included in the error.
/// # Examples
///```
/// use timber_err::*;
///
/// fn main() -> Result<(), Error> {
///     let res = map_err!("".parse::<usize>(), CoreErrorKind::IllegalArgument, "port");
///     assert_eq!(
///         res.unwrap_err().kind(),
///         &kind!(CoreErrorKind::IllegalArgument, "anything")
///     );
///     Ok(())
/// }
///```
#[macro_export]
macro_rules! map_err {
	($in_err:expr, $kind:expr) => {{
		$in_err.map_err(|e| -> $crate::Error { $kind(format!("{}", e)).into() })
	}};
	($in_err:expr, $kind:expr, $msg:expr) => {{
		$in_err.map_err(|e| -> $crate::Error { $kind(format!("{}: {}", $msg, e)).into() })
	}};
}

/// Return an error kind as a `Box<dyn ErrorKind>`. This is mostly useful in tests for
/// comparing against [`crate::Error::kind`].
#[macro_export]
macro_rules! kind {
	($kind:expr, $msg:expr) => {{
		let r: Box<dyn $crate::ErrorKind> = Box::new($kind($msg.to_string()));
		r
	}};
}
