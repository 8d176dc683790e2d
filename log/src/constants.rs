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
//

// These are local constants used in the logging crate

// severity tags, one per level
pub(crate) const INFO_TAG: &str = "[INFO]";
pub(crate) const DEBUG_TAG: &str = "[DEBUG]";
pub(crate) const WARN_TAG: &str = "[WARN]";
pub(crate) const ERROR_TAG: &str = "[ERROR]";

// separator between the caller location and the rendered message
pub(crate) const MESSAGE_SEPARATOR: &str = ": ";

// date and time portion of archive names, followed by '.' and two digit centiseconds
pub(crate) const ARCHIVE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
// the default line prefix (second precision)
pub(crate) const LINE_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";
// line prefix when DisplayMillis is enabled
pub(crate) const LINE_TIMESTAMP_FORMAT_MILLIS: &str = "%Y/%m/%d %H:%M:%S%.3f";

// file reported when a frame can't be resolved
pub(crate) const UNKNOWN_FILE: &str = "unknown";
// source file paths of the frame walking resolver
pub(crate) const RESOLVER_FILE_MARKERS: [&str; 2] = ["log/src/callsite.rs", "log\\src\\callsite.rs"];
// symbol name of the frame walking resolver (used when file names are unavailable)
pub(crate) const RESOLVER_SYMBOL_MARKER: &str = "timber_log::callsite::resolve";

// prefix of notices written to stderr
pub(crate) const SIDE_CHANNEL_PREFIX: &str = "timber";

// precision used by %f when none is specified
pub(crate) const DEFAULT_FLOAT_PRECISION: usize = 6;
// largest precision accepted by %.Nf
pub(crate) const MAX_FLOAT_PRECISION: usize = 1_024;
