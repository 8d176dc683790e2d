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
	use crate::{config, ConfigBuilder, ConfigOption, ConfigOption::*, ConfigOptionName as CN};
	use timber_err::*;

	#[test]
	fn test_config_basic() -> Result<(), Error> {
		let config = ConfigBuilder::build_config(vec![ConfigOption::LineNumDataMaxLen(40)]);
		assert_eq!(
			config.get(&CN::LineNumDataMaxLen),
			Some(ConfigOption::LineNumDataMaxLen(40))
		);

		assert_eq!(config.get(&CN::FileHeader), None);

		// ok because LineNumDataMaxLen is allowed
		assert!(config.check_config(vec![CN::LineNumDataMaxLen], vec![]).is_ok());

		// err because LineNumDataMaxLen is not allowed
		assert!(config.check_config(vec![CN::FileHeader], vec![]).is_err());

		let config = ConfigBuilder::build_config(vec![
			ConfigOption::LineNumDataMaxLen(40),
			ConfigOption::LineNumDataMaxLen(10),
		]);

		// err because it's a duplicate
		let err = config
			.check_config(vec![CN::LineNumDataMaxLen], vec![])
			.unwrap_err();
		assert_eq!(err.kind(), &kind!(CoreErrorKind::Configuration, ""));
		assert!(err.to_string().contains("more than once"));

		let config = ConfigBuilder::build_config(vec![ConfigOption::LineNumDataMaxLen(10)]);

		// ok because it's both allowed and required and specified
		assert!(config
			.check_config(vec![CN::LineNumDataMaxLen], vec![CN::LineNumDataMaxLen])
			.is_ok());

		// err because DisplayMillis is not specified and it's required
		assert!(config
			.check_config(vec![CN::LineNumDataMaxLen], vec![CN::DisplayMillis])
			.is_err());

		Ok(())
	}

	#[test]
	fn test_config_macros() -> Result<(), Error> {
		let config = config!(FileHeader("test".to_string()), DisplayStdout(false));

		assert_eq!(
			config.get(&CN::FileHeader),
			Some(FileHeader("test".to_string()))
		);

		assert!(config
			.check_config(
				vec![CN::FileHeader, CN::DisplayStdout, CN::DisplayColors],
				vec![]
			)
			.is_ok());

		// err because DisplayColors was required and not specified
		assert!(config
			.check_config(
				vec![CN::FileHeader, CN::DisplayStdout, CN::DisplayColors],
				vec![CN::DisplayColors]
			)
			.is_err());

		// err because DisplayStdout was not allowed
		assert!(config
			.check_config(vec![CN::FileHeader, CN::DisplayColors], vec![CN::FileHeader])
			.is_err());

		Ok(())
	}

	#[test]
	fn test_config_defaults() -> Result<(), Error> {
		let config = config!(
			DisplayTimestamp(false),
			DisplayMillis(true),
			DisplayStdout(true),
			DisplayColors(true),
			LineNumDataMaxLen(25),
			FileHeader("hdr".to_string())
		);

		assert!(config
			.check_config(
				vec![
					CN::DisplayTimestamp,
					CN::DisplayMillis,
					CN::DisplayStdout,
					CN::DisplayColors,
					CN::LineNumDataMaxLen,
					CN::FileHeader
				],
				vec![]
			)
			.is_ok());

		assert!(!config.get_or_bool(&CN::DisplayTimestamp, true));
		assert!(config.get_or_bool(&CN::DisplayMillis, false));
		assert!(config.get_or_bool(&CN::DisplayStdout, false));
		assert!(config.get_or_bool(&CN::DisplayColors, false));
		assert_eq!(config.get_or_usize(&CN::LineNumDataMaxLen, 0), 25);
		assert_eq!(config.get_or_string(&CN::FileHeader, "".to_string()), "hdr");

		// a name of the wrong type falls back to the default
		assert_eq!(config.get_or_usize(&CN::FileHeader, 7), 7);

		let empty = config!();
		assert!(empty.get_or_bool(&CN::DisplayTimestamp, true));
		assert_eq!(empty.get_or_usize(&CN::LineNumDataMaxLen, 0), 0);
		assert_eq!(empty.get_or_string(&CN::FileHeader, "".to_string()), "");
		Ok(())
	}
}
