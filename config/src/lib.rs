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

//! # The timber configuration crate
//! Configurations are built with the [`crate::config!`] macro (or
//! [`crate::ConfigBuilder::build_config`]). The [`crate::Config::check_config`] function
//! confirms that the resulting configuration has only allowed values, has all required
//! values, and has no duplicates.
//!
//! # Examples
//!
//!```
//! use timber_err::*;
//! use timber_conf::*;
//!
//! fn main() -> Result<(), Error> {
//!     let config = config!(DisplayMillis(true), FileHeader("myheader".to_string()));
//!
//!     let res = config.check_config(
//!         vec![
//!             ConfigOptionName::DisplayMillis,
//!             ConfigOptionName::FileHeader,
//!         ],
//!         vec![ConfigOptionName::FileHeader]
//!     );
//!     assert!(res.is_ok());
//!
//!     // DisplayStdout is required but missing
//!     let res = config.check_config(
//!         vec![
//!             ConfigOptionName::DisplayMillis,
//!             ConfigOptionName::FileHeader,
//!             ConfigOptionName::DisplayStdout,
//!         ],
//!         vec![ConfigOptionName::DisplayStdout]
//!     );
//!     assert!(res.is_err());
//!
//!     assert_eq!(config.get_or_bool(&ConfigOptionName::DisplayMillis, false), true);
//!     assert_eq!(config.get_or_bool(&ConfigOptionName::DisplayStdout, false), false);
//!
//!     Ok(())
//! }
//!```

mod config;
mod macros;
mod test;
mod types;

pub use crate::types::{Config, ConfigBuilder, ConfigOption, ConfigOptionName};
