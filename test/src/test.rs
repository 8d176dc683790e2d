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

#[cfg(test)]
mod test {
	use crate::types::TestInfoImpl;
	use crate::{test_info, TestInfo};
	use timber_err::Error;
	use std::path::Path;

	#[test]
	fn test_test_info_macro() -> Result<(), Error> {
		let test_info = test_info!()?;
		assert!(test_info.directory().ends_with("timber"));
		assert!(test_info.directory().contains("test_test_info_macro"));
		assert!(Path::new(test_info.directory()).exists());
		Ok(())
	}

	#[test]
	fn test_directory_removed_on_drop() -> Result<(), Error> {
		let directory = {
			let test_info = test_info!()?;
			let directory = test_info.directory().clone();
			assert!(Path::new(&directory).exists());
			directory
		};
		assert!(!Path::new(&directory).exists());

		let directory = {
			let test_info = test_info!(true)?;
			test_info.directory().clone()
		};
		assert!(Path::new(&directory).exists());
		std::fs::remove_dir_all(&directory)?;
		Ok(())
	}

	#[test]
	fn test_unique_directories() -> Result<(), Error> {
		let test_info1 = TestInfoImpl::new(false)?;
		let test_info2 = TestInfoImpl::new(false)?;
		assert_ne!(test_info1.directory(), test_info2.directory());
		Ok(())
	}
}
