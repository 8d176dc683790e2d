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

use crate::err_only;
use timber_deps::backtrace::Backtrace;
use std::fmt::{Debug, Display, Formatter};
use std::str::Utf8Error;
use std::sync::{MutexGuard, PoisonError, RwLockReadGuard, RwLockWriteGuard};
use CoreErrorKind::*;

/// Implemented by every kind of error in the workspace. The [`Display`] output of a kind
/// must start with the kind's name followed by a ':' because [`crate::Error`] equality is
/// decided on that prefix.
pub trait ErrorKind: Send + Sync + Display + Debug {}

/// The error type returned by every fallible timber function.
pub struct Error {
	kind: Box<dyn ErrorKind>,
}

/// Error kinds that are not specific to any one crate. Conversions from the common std
/// errors produce these kinds so that `?` can be used on them directly.
pub enum CoreErrorKind {
	/// i/o error
	IO(String),
	/// poison error on a lock
	Poison(String),
	/// configuration error
	Configuration(String),
	/// illegal argument
	IllegalArgument(String),
	/// illegal state
	IllegalState(String),
	/// utf8 conversion error
	Utf8(String),
}

impl Error {
	pub fn new(kind: Box<dyn ErrorKind>) -> Self {
		Self { kind }
	}

	/// The kind of this error.
	pub fn kind(&self) -> &Box<dyn ErrorKind> {
		&self.kind
	}
}

macro_rules! impl_debug {
	($self:expr, $f:expr, $variant_name:ident, $type_str:expr) => {
		match $self {
			$variant_name(s) => {
				write!($f, "{}: {}", $type_str, s)?;
			}
			_ => {}
		}
	};
}

impl Debug for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
		write!(f, "{}\n", self.kind)?;
		match std::env::var("RUST_BACKTRACE") {
			Ok(_) => {
				write!(f, "backtrace: {:?}", Backtrace::new())?;
			}
			Err(_e) => {
				write!(f, "Backtrace disabled. For backtrace set RUST_BACKTRACE enviornment variable to 1.")?;
			}
		}

		Ok(())
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
		write!(f, "{}", self.kind)
	}
}

impl std::error::Error for Error {}

impl ErrorKind for CoreErrorKind {}

impl Display for CoreErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
		write!(f, "{:?}", self)
	}
}

impl Debug for CoreErrorKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
		impl_debug!(self, f, IO, "io");
		impl_debug!(self, f, Poison, "poison");
		impl_debug!(self, f, Configuration, "configuration");
		impl_debug!(self, f, IllegalArgument, "illegal argument");
		impl_debug!(self, f, IllegalState, "illegal state");
		impl_debug!(self, f, Utf8, "utf8");
		Ok(())
	}
}

impl From<Box<dyn ErrorKind>> for Error {
	fn from(kind: Box<dyn ErrorKind>) -> Error {
		Error::new(kind)
	}
}

impl From<CoreErrorKind> for Error {
	fn from(kind: CoreErrorKind) -> Error {
		Error::new(Box::new(kind))
	}
}

impl PartialEq for Error {
	fn eq(&self, other_err: &Error) -> bool {
		self.kind() == other_err.kind()
	}
}

// kinds are equal if the name before the first ':' matches, the message is ignored
impl PartialEq for Box<dyn ErrorKind> {
	fn eq(&self, other_error: &Box<dyn ErrorKind>) -> bool {
		let self_string = self.to_string();
		let other_string = other_error.to_string();
		match self_string.find(':') {
			Some(pos1) => match other_string.find(':') {
				Some(pos2) => self_string.as_bytes()[0..pos1] == other_string.as_bytes()[0..pos2],
				None => false,
			},
			None => false,
		}
	}
}

impl PartialEq<Box<dyn ErrorKind>> for &Box<dyn ErrorKind> {
	fn eq(&self, other: &Box<dyn ErrorKind>) -> bool {
		*self == other
	}
}

impl From<std::io::Error> for Error {
	fn from(e: std::io::Error) -> Error {
		err_only!(IO, e)
	}
}

impl<T> From<PoisonError<RwLockWriteGuard<'_, T>>> for Error {
	fn from(e: PoisonError<RwLockWriteGuard<'_, T>>) -> Error {
		err_only!(Poison, e)
	}
}

impl<T> From<PoisonError<RwLockReadGuard<'_, T>>> for Error {
	fn from(e: PoisonError<RwLockReadGuard<'_, T>>) -> Error {
		err_only!(Poison, e)
	}
}

impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
	fn from(e: PoisonError<MutexGuard<'_, T>>) -> Error {
		err_only!(Poison, e)
	}
}

impl From<Utf8Error> for Error {
	fn from(e: Utf8Error) -> Error {
		err_only!(Utf8, e)
	}
}
