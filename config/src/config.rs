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

use crate::types::ConfigImpl;
use crate::{Config, ConfigBuilder, ConfigOption, ConfigOption::*, ConfigOptionName as CN};
use timber_err::*;
use std::collections::{HashMap, HashSet};

// macro to simplify the process of checking the parameters
macro_rules! cc {
	($self:expr, $set:expr, $specified:expr, $option_name:expr) => {{
		let config_option_name = $option_name;
		let i = $option_name as usize;
		$self.check_set(&$set, &config_option_name)?;
		$self.check_index(i, $specified, format!("{:?}", config_option_name))?;
	}};
}

impl ConfigBuilder {
	/// Build a [`crate::Config`] from the specified options. No checking is done here, see
	/// [`crate::Config::check_config`].
	pub fn build_config(configs: Vec<ConfigOption>) -> Box<dyn Config + Send + Sync> {
		Box::new(ConfigImpl::new(configs))
	}
}

impl Config for ConfigImpl {
	fn get(&self, name: &CN) -> Option<ConfigOption> {
		self.hash.get(name).cloned()
	}

	fn get_or_bool(&self, name: &CN, default: bool) -> bool {
		match self.hash.get(name) {
			Some(v) => match v {
				DisplayTimestamp(v) => *v,
				DisplayMillis(v) => *v,
				DisplayStdout(v) => *v,
				DisplayColors(v) => *v,
				_ => default,
			},
			None => default,
		}
	}

	fn get_or_usize(&self, name: &CN, default: usize) -> usize {
		match self.hash.get(name) {
			Some(v) => match v {
				LineNumDataMaxLen(v) => *v,
				_ => default,
			},
			None => default,
		}
	}

	fn get_or_string(&self, name: &CN, default: String) -> String {
		match self.hash.get(name) {
			Some(v) => match v {
				FileHeader(v) => v.to_string(),
				_ => default,
			},
			None => default,
		}
	}

	fn check_config(&self, allowed: Vec<CN>, required: Vec<CN>) -> Result<(), Error> {
		self.check_config_impl(allowed, required)
	}
}

impl ConfigImpl {
	pub(crate) fn new(configs: Vec<ConfigOption>) -> Self {
		// a later duplicate replaces an earlier one here, check_config reports it
		let mut hash = HashMap::new();
		for config in &configs {
			let _ = match config {
				DisplayTimestamp(_) => hash.insert(CN::DisplayTimestamp, config.clone()),
				DisplayMillis(_) => hash.insert(CN::DisplayMillis, config.clone()),
				DisplayStdout(_) => hash.insert(CN::DisplayStdout, config.clone()),
				DisplayColors(_) => hash.insert(CN::DisplayColors, config.clone()),
				LineNumDataMaxLen(_) => hash.insert(CN::LineNumDataMaxLen, config.clone()),
				FileHeader(_) => hash.insert(CN::FileHeader, config.clone()),
			};
		}
		Self { configs, hash }
	}

	// check the config: 1.) for duplicates, 2.) for allowed input 3.) for the required input.
	fn check_config_impl(&self, allowed: Vec<CN>, required: Vec<CN>) -> Result<(), Error> {
		let mut t = HashSet::new();
		let mut s = vec![];
		for a in &allowed {
			t.insert(a);
		}

		// the cc macro handles #1 and #2 above
		for v in &self.configs {
			match v {
				DisplayTimestamp(_) => cc!(self, t, &mut s, CN::DisplayTimestamp),
				DisplayMillis(_) => cc!(self, t, &mut s, CN::DisplayMillis),
				DisplayStdout(_) => cc!(self, t, &mut s, CN::DisplayStdout),
				DisplayColors(_) => cc!(self, t, &mut s, CN::DisplayColors),
				LineNumDataMaxLen(_) => cc!(self, t, &mut s, CN::LineNumDataMaxLen),
				FileHeader(_) => cc!(self, t, &mut s, CN::FileHeader),
			}
		}

		// #3 is covered here (required)
		let s_len = s.len();
		for v in required {
			let v_as_usize = v.clone() as usize;
			if v_as_usize >= s_len || !s[v_as_usize] {
				return err!(
					CoreErrorKind::Configuration,
					"{:?} was required and not specified",
					v
				);
			}
		}

		Ok(())
	}

	// convenience fn to check if the set contains this option and returns appropriate error
	fn check_set(&self, set: &HashSet<&CN>, option: &CN) -> Result<(), Error> {
		if set.contains(option) {
			Ok(())
		} else {
			err!(CoreErrorKind::Configuration, "{:?} is not allowed", option)
		}
	}

	// this checks for duplicates
	fn check_index(&self, i: usize, specified: &mut Vec<bool>, name: String) -> Result<(), Error> {
		if specified.len() <= i {
			specified.resize(i + 1, false);
		}

		if specified[i] {
			err!(
				CoreErrorKind::Configuration,
				"{} was specified more than once",
				name
			)
		} else {
			specified[i] = true;
			Ok(())
		}
	}
}
