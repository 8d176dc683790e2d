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

//! # timber
//!
//! Embeddable, file backed leveled logging. A host process builds a log handle, arms it on a
//! file path and writes lines at the four levels (info, debug, warn and error). Each line
//! carries the local time, a severity tag and the file and line of the logging call:
//!
//! ```text
//! 2024/04/14 17:45:46 [INFO][src/main.rs:12]: user alice logged in
//! ```
//!
//! Every [`Log::setup`] call starts a new file. If a file is already at the path it is
//! renamed to `<path>.<YYYYMMDD>_<HHMMSS>.<CC>` first, so the output of earlier runs is
//! kept as is and the archives of one path sort in time order.
//!
//! The workspace is split into these crates, all re-exported here:
//! * `timber_err` - the [`Error`] type, [`ErrorKind`] trait and the [`err`], [`map_err`]
//! and [`kind`] macros.
//! * `timber_conf` - [`ConfigOption`] and the [`config`] macro.
//! * `timber_log` - [`Log`], [`logger`] and the [`info`], [`debug`], [`warn`] and [`error`]
//! macros.
//!
//! # Examples
//!
//!```
//! use timber::*;
//! use timber_test::*;
//!
//! fn main() -> Result<(), Error> {
//!     let test_info = test_info!()?;
//!     let path = format!("{}/app.log", test_info.directory());
//!
//!     let log = logger!(DisplayMillis(true), FileHeader("app v1".to_string()))?;
//!     log.setup(&path)?;
//!
//!     info!(log, "user %s logged in", "alice");
//!     debug!(log, "%d sessions open", 3);
//!
//!     // a clone writes to the same file
//!     let log2 = log.clone();
//!     std::thread::spawn(move || {
//!         warn!(log2, "disk %.1f%% full", 91.5);
//!     })
//!     .join()
//!     .unwrap();
//!
//!     // errors can be inspected with Log::log instead of the macros
//!     let res = log.log(LogLevel::Error, &CallerLocation::caller(), "%d", &[Value::from("x")]);
//!     assert_eq!(res.unwrap_err().kind(), &kind!(LogErrorKind::Render, ""));
//!
//!     log.stop()?;
//!     assert_eq!(std::fs::read_to_string(&path)?.lines().count(), 4);
//!     Ok(())
//! }
//!```

pub use timber_conf::*;
pub use timber_err::*;
pub use timber_log::*;
