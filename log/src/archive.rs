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
use crate::LogErrorKind;
use timber_deps::chrono::{DateTime, Local, TimeZone, Timelike};
use timber_err::{err, Error};
use std::fs::{hard_link, metadata, remove_file, rename};
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

/// If a regular file exists at `path`, rename it to its archive name (see [`archive_name`])
/// and return the new path. Returns `Ok(None)` if there is nothing to archive.
/// # Errors
/// [`crate::LogErrorKind::Rotation`] if an archive with the same name already exists or the
/// file can't be moved. An existing archive is never replaced. A notice is also written to stderr.
pub fn archive_if_present(path: &Path) -> Result<Option<PathBuf>, Error> {
	match metadata(path) {
		Ok(md) => {
			if md.is_dir() {
				return Ok(None);
			}
		}
		Err(_) => return Ok(None),
	}

	let archived = archive_name(path, &Local::now());
	match move_to_archive(path, &archived) {
		Ok(_) => Ok(Some(archived)),
		Err(e) => {
			let text = match e.kind() {
				IoErrorKind::AlreadyExists => format!(
					"could not archive '{}': '{}' already exists",
					path.display(),
					archived.display()
				),
				_ => format!(
					"could not archive '{}' to '{}': {}",
					path.display(),
					archived.display(),
					e
				),
			};
			side_channel(&text);
			err!(LogErrorKind::Rotation, "{}", text)
		}
	}
}

// link then unlink so an existing archive is never replaced
pub(crate) fn move_to_archive(path: &Path, archived: &Path) -> Result<(), std::io::Error> {
	match hard_link(path, archived) {
		Ok(_) => {
			if let Err(e) = remove_file(path) {
				let _ = remove_file(archived);
				return Err(e);
			}
			Ok(())
		}
		Err(e) if e.kind() == IoErrorKind::AlreadyExists => Err(e),
		// no hard link support, fall back to a checked rename
		Err(_) => {
			if metadata(archived).is_ok() {
				return Err(std::io::Error::new(
					IoErrorKind::AlreadyExists,
					"archive already exists",
				));
			}
			rename(path, archived)
		}
	}
}

/// The name `path` is archived under at time `now`: `<path>.<YYYYMMDD>_<HHMMSS>.<CC>` where
/// `CC` is the two digit (truncated) centisecond. All fields are fixed width so archive names
/// of one path sort in time order.
pub fn archive_name<Tz: TimeZone>(path: &Path, now: &DateTime<Tz>) -> PathBuf
where
	Tz::Offset: std::fmt::Display,
{
	// nanosecond() exceeds 999_999_999 during a leap second
	let centis = (now.nanosecond() / 10_000_000).min(99);
	let mut name = path.as_os_str().to_os_string();
	name.push(format!(
		".{}.{:02}",
		now.format(ARCHIVE_TIMESTAMP_FORMAT),
		centis
	));
	PathBuf::from(name)
}
