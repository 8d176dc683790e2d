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

//! File backed leveled logging. A [`crate::Log`] is built unarmed with the
//! [`crate::logger`] macro (or [`crate::LogBuilder::build_log`]) and armed on a file path
//! with [`crate::Log::setup`]. If a file already exists at that path it is archived first
//! under a timestamped name, so every setup starts a fresh file and earlier runs are never
//! truncated or appended to. Lines are written with the [`info`], [`debug`], [`warn`] and
//! [`error`] macros, which record the file and line of the macro call.
//!
//! # Examples
//!
//!```
//! use timber_err::*;
//! use timber_log::*;
//! use timber_test::*;
//!
//! fn main() -> Result<(), Error> {
//!     let test_info = test_info!()?;
//!     let path = format!("{}/server.log", test_info.directory());
//!
//!     let log = logger!(DisplayMillis(true))?;
//!     log.setup(&path)?;
//!     info!(log, "listening on port %d", 8080);
//!     warn!(log, "tls is %v", false);
//!
//!     // setting up again archives server.log and starts a new one
//!     log.setup(&path)?;
//!     error!(log, "shutting down: %s", "signal");
//!     log.stop()?;
//!
//!     Ok(())
//! }
//!```
//!
//! The first file will look something like this:
//!
//! ```text
//! 2024/04/14 17:45:46.899 [INFO][src/main.rs:10]: listening on port 8080
//! 2024/04/14 17:45:46.899 [WARN][src/main.rs:11]: tls is false
//! ```
//!
//! and is renamed to `server.log.20240414_174546.89` by the second setup.

mod archive;
mod callsite;
mod constants;
mod log;
mod macros;
mod render;
mod types;

pub use crate::archive::{archive_if_present, archive_name};
pub use crate::callsite::resolve;
pub use crate::render::render;
pub use crate::types::{CallerLocation, Log, LogBuilder, LogErrorKind, LogLevel, Value};
pub use timber_conf::{ConfigOption, ConfigOptionName};
