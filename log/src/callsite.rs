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

use crate::constants::*;
use crate::log::side_channel;
use crate::types::CallerLocation;
use timber_deps::backtrace;
use timber_deps::backtrace::Symbol;
use std::fmt::{Display, Formatter};

impl CallerLocation {
	/// Build a location from a file name and a one-based line number. The logging macros call
	/// this with `file!()` and `line!()`.
	pub fn new(file: &str, line: u32) -> Self {
		Self {
			file: file.to_string(),
			line,
		}
	}

	/// The location of the caller of the enclosing `#[track_caller]` function (or of this
	/// call if there is none).
	#[track_caller]
	pub fn caller() -> Self {
		let location = std::panic::Location::caller();
		Self::new(location.file(), location.line())
	}

	/// The location reported when nothing could be resolved: file `unknown`, line `0`.
	pub fn unknown() -> Self {
		Self::new(UNKNOWN_FILE, 0)
	}

	pub fn file(&self) -> &str {
		&self.file
	}

	pub fn line(&self) -> u32 {
		self.line
	}

	pub fn is_unknown(&self) -> bool {
		self.line == 0 && self.file == UNKNOWN_FILE
	}

	/// `file:line`, keeping only the last `max_len` characters (prefixed with `..`) if it is
	/// longer. A `max_len` of 0 never truncates.
	pub fn display_truncated(&self, max_len: usize) -> String {
		let text = format!("{}:{}", self.file, self.line);
		let len = text.chars().count();
		if max_len == 0 || len <= max_len {
			return text;
		}
		let tail: String = text.chars().skip(len - max_len).collect();
		format!("..{}", tail)
	}
}

impl Display for CallerLocation {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
		write!(f, "[{}:{}]", self.file, self.line)
	}
}

/// Walk the current stack and return the location of the code that called this function.
/// `skip_frames` moves further out: 0 is the direct caller, 1 is its caller and so on.
/// Returns [`CallerLocation::unknown`] if the frame can't be found or has no debug
/// information. A notice is written to stderr in that case.
#[inline(never)]
pub fn resolve(skip_frames: usize) -> CallerLocation {
	let mut found_resolver = false;
	let mut remaining = skip_frames;
	let mut location: Option<CallerLocation> = None;

	backtrace::trace(|frame| {
		let mut found_frame = false;
		backtrace::resolve_frame(frame, |symbol| {
			if found_frame || location.is_some() {
				return;
			}
			if is_resolver_frame(symbol) {
				found_resolver = true;
			} else if found_resolver {
				if remaining == 0 {
					location = Some(symbol_location(symbol));
				} else {
					remaining -= 1;
				}
				found_frame = true;
			}
		});
		location.is_none()
	});

	match location {
		Some(location) if !location.is_unknown() => location,
		_ => {
			side_channel(&format!(
				"could not resolve the caller frame (skip_frames = {})",
				skip_frames
			));
			CallerLocation::unknown()
		}
	}
}

fn is_resolver_frame(symbol: &Symbol) -> bool {
	if let Some(filename) = symbol.filename() {
		let filename = filename.display().to_string();
		if RESOLVER_FILE_MARKERS
			.iter()
			.any(|marker| filename.find(marker).is_some())
		{
			return true;
		}
	}
	match symbol.name() {
		Some(name) => name.to_string().find(RESOLVER_SYMBOL_MARKER).is_some(),
		None => false,
	}
}

fn symbol_location(symbol: &Symbol) -> CallerLocation {
	match (symbol.filename(), symbol.lineno()) {
		(Some(filename), Some(lineno)) if lineno > 0 => {
			CallerLocation::new(&filename.display().to_string(), lineno)
		}
		_ => CallerLocation::unknown(),
	}
}
