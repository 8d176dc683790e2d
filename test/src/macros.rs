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

/// Macro to setup a test directory based on the function name. The directory is removed
/// when the returned value goes out of scope unless the `preserve` value is specifed and
/// set to true. Specifically a [`crate::TestInfo`] is returned by this macro.
/// # Input Parameters
/// * `preserve` - [`bool`] - If set to [`true`] the directory associated with the
/// returned [`crate::TestInfo`] will be preserved at the end of the test. Otherwise, it will be
/// deleted.
/// # Return
/// Result < Box < dyn [`crate::TestInfo`] >, [`timber_err::Error`] >
/// # Errors
/// [`timber_err::CoreErrorKind::IO`] - if the directory cannot be created.
/// # Examples
///```
/// use timber_err::*;
/// use timber_test::*;
///
/// fn test_my_fn() -> Result<(), Error> {
///     let test_info = test_info!()?;
///     let directory = test_info.directory();
///
///     // the directory is deleted when test_info is dropped at the end of this function.
///     assert!(std::path::Path::new(directory).exists());
///     Ok(())
/// }
///```
#[macro_export]
macro_rules! test_info {
	() => {{
		$crate::test_info!(false)
	}};
	($preserve:expr) => {{
		use $crate::TestBuilder;
		TestBuilder::build_test_info($preserve)
	}};
}
