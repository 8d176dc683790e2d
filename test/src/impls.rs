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

use crate::types::TestInfoImpl;
use crate::{TestBuilder, TestInfo};
use timber_deps::backtrace;
use timber_err::Error;
use std::fs::{create_dir_all, remove_dir_all};
use std::process;
use std::sync::atomic::{AtomicUsize, Ordering};

// makes directories unique even when symbol names can't be resolved
static GLOBAL_NEXT_DIR_ID: AtomicUsize = AtomicUsize::new(0);

impl TestBuilder {
	/// Build a [`crate::TestInfo`] whose directory is named after the calling function.
	pub fn build_test_info(preserve: bool) -> Result<Box<dyn TestInfo>, Error> {
		Ok(Box::new(TestInfoImpl::new(preserve)?))
	}
}

impl TestInfo for TestInfoImpl {
	fn directory(&self) -> &String {
		&self.directory
	}
}

impl TestInfoImpl {
	pub(crate) fn new(preserve: bool) -> Result<Self, Error> {
		let mut directory = String::new();
		let mut found_builder = false;
		backtrace::trace(|frame| {
			let mut name = String::new();
			backtrace::resolve_frame(frame, |symbol| {
				if let Some(symbol_name) = symbol.name() {
					name = format!("{:#}", symbol_name);
				}
			});
			if name.contains("TestInfoImpl") || name.contains("TestBuilder") {
				found_builder = true;
				true
			} else if found_builder {
				// first frame past the builder is the test itself
				directory = name;
				false
			} else {
				true
			}
		});

		let directory: String = directory
			.replace("::", "_")
			.chars()
			.map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
			.collect();
		let id = GLOBAL_NEXT_DIR_ID.fetch_add(1, Ordering::SeqCst);
		let directory = format!(".{}_{}_{}.timber", directory, process::id(), id);

		// remove the directory if it existed from a previous failed run
		let _ = remove_dir_all(&directory);
		create_dir_all(&directory)?;

		Ok(Self {
			directory,
			preserve,
		})
	}
}

impl Drop for TestInfoImpl {
	fn drop(&mut self) {
		// if we're not preserving the directory, delete it on drop.
		if !self.preserve {
			let _ = remove_dir_all(&self.directory);
		}
	}
}
