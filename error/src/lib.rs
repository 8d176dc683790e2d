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

//! Error handling shared by every timber crate. An [`crate::Error`] wraps a boxed
//! [`crate::ErrorKind`]. Since [`crate::ErrorKind`] is a trait, each crate defines
//! its own kinds and still returns the same [`crate::Error`] type. Errors are usually
//! built with the [`crate::err`] and [`crate::map_err`] macros.
//!
//! # Examples
//!
//!```
//! use timber_err::*;
//! use std::fs::File;
//!
//! fn open_missing() -> Result<(), Error> {
//!     let _file = map_err!(File::open("/no/such/dir/x.log"), CoreErrorKind::IO, "open failed")?;
//!     Ok(())
//! }
//!
//! fn main() -> Result<(), Error> {
//!     let err = open_missing().unwrap_err();
//!     assert_eq!(err.kind(), &kind!(CoreErrorKind::IO, "whatever message"));
//!
//!     let res: Result<(), Error> = err!(CoreErrorKind::IllegalArgument, "bad value: {}", 7);
//!     assert!(res.is_err());
//!     Ok(())
//! }
//!```

mod error;
mod macros;

pub use crate::error::{CoreErrorKind, Error, ErrorKind};
