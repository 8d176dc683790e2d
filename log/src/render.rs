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

use crate::constants::*;
use crate::types::Value;
use crate::LogErrorKind;
use timber_err::{err, Error};
use std::fmt::{Display, Formatter};
use std::iter::Peekable;
use std::str::Chars;

/// Substitute `args` into `template` in order. Supported verbs:
/// * `%s` - [`Value::Str`] or [`Value::Display`]
/// * `%d` - [`Value::Int`] or [`Value::Uint`]
/// * `%t` - [`Value::Bool`]
/// * `%f`, `%.Nf` - [`Value::Float`] (integers are widened), 6 decimals unless `N`
/// (at most 1024) is given
/// * `%v` - any value
/// * `%%` - a literal '%'
/// # Errors
/// [`crate::LogErrorKind::Render`] if a verb is unknown or dangling, an argument has the wrong
/// type for its verb, or the number of arguments doesn't match the number of verbs.
/// # Examples
///```
/// use timber_err::*;
/// use timber_log::*;
///
/// fn main() -> Result<(), Error> {
///     let args = [Value::from("alice"), Value::from(3), Value::from(0.5)];
///     let line = render("%s logged in %d times (%.1f%%)", &args)?;
///     assert_eq!(line, "alice logged in 3 times (0.5%)");
///     assert!(render("%d", &[Value::from("x")]).is_err());
///     Ok(())
/// }
///```
pub fn render(template: &str, args: &[Value]) -> Result<String, Error> {
	let mut ret = String::with_capacity(template.len());
	let mut chars = template.chars().peekable();
	let mut next_arg = 0;

	while let Some(c) = chars.next() {
		if c != '%' {
			ret.push(c);
			continue;
		}
		let verb = parse_verb(&mut chars)?;
		if verb == Verb::Percent {
			ret.push('%');
			continue;
		}
		let arg = match args.get(next_arg) {
			Some(arg) => arg,
			None => {
				return err!(
					LogErrorKind::Render,
					"template '{}' needs more than {} argument(s)",
					template,
					args.len()
				)
			}
		};
		next_arg += 1;
		format_arg(&mut ret, &verb, arg, next_arg)?;
	}

	if next_arg != args.len() {
		return err!(
			LogErrorKind::Render,
			"template '{}' uses {} of {} argument(s)",
			template,
			next_arg,
			args.len()
		);
	}

	Ok(ret)
}

#[derive(PartialEq, Debug)]
enum Verb {
	Str,
	Decimal,
	Bool,
	Float(usize),
	Any,
	Percent,
}

fn parse_verb(chars: &mut Peekable<Chars>) -> Result<Verb, Error> {
	match chars.next() {
		Some('s') => Ok(Verb::Str),
		Some('d') => Ok(Verb::Decimal),
		Some('t') => Ok(Verb::Bool),
		Some('f') => Ok(Verb::Float(DEFAULT_FLOAT_PRECISION)),
		Some('v') => Ok(Verb::Any),
		Some('%') => Ok(Verb::Percent),
		Some('.') => {
			let mut digits = String::new();
			while let Some(c) = chars.peek() {
				if !c.is_ascii_digit() {
					break;
				}
				digits.push(*c);
				chars.next();
			}
			match (chars.next(), digits.parse::<usize>()) {
				(Some('f'), Ok(precision)) if precision <= MAX_FLOAT_PRECISION => {
					Ok(Verb::Float(precision))
				}
				(Some('f'), Ok(precision)) => err!(
					LogErrorKind::Render,
					"precision {} exceeds the maximum of {}",
					precision,
					MAX_FLOAT_PRECISION
				),
				_ => err!(LogErrorKind::Render, "invalid precision verb '%.{}'", digits),
			}
		}
		Some(c) => err!(LogErrorKind::Render, "unknown verb '%{}'", c),
		None => err!(LogErrorKind::Render, "dangling '%' at end of template"),
	}
}

fn format_arg(ret: &mut String, verb: &Verb, arg: &Value, position: usize) -> Result<(), Error> {
	match (verb, arg) {
		(Verb::Str, Value::Str(s)) | (Verb::Str, Value::Display(s)) => ret.push_str(s),
		(Verb::Decimal, Value::Int(i)) => ret.push_str(&i.to_string()),
		(Verb::Decimal, Value::Uint(u)) => ret.push_str(&u.to_string()),
		(Verb::Bool, Value::Bool(b)) => ret.push_str(&b.to_string()),
		(Verb::Float(p), Value::Float(f)) => ret.push_str(&format!("{:.*}", *p, f)),
		(Verb::Float(p), Value::Int(i)) => ret.push_str(&format!("{:.*}", *p, *i as f64)),
		(Verb::Float(p), Value::Uint(u)) => ret.push_str(&format!("{:.*}", *p, *u as f64)),
		(Verb::Any, arg) => ret.push_str(&arg.to_string()),
		_ => {
			return err!(
				LogErrorKind::Render,
				"argument {} ({}) does not match verb {:?}",
				position,
				arg.type_name(),
				verb
			)
		}
	}
	Ok(())
}

impl Value {
	/// Build a [`Value::Display`] from anything that implements [`Display`].
	pub fn display<T: Display + ?Sized>(value: &T) -> Self {
		Value::Display(value.to_string())
	}

	fn type_name(&self) -> &'static str {
		match self {
			Value::Str(_) => "string",
			Value::Int(_) => "signed integer",
			Value::Uint(_) => "unsigned integer",
			Value::Float(_) => "float",
			Value::Bool(_) => "bool",
			Value::Display(_) => "display",
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
		match self {
			Value::Str(s) | Value::Display(s) => write!(f, "{}", s),
			Value::Int(i) => write!(f, "{}", i),
			Value::Uint(u) => write!(f, "{}", u),
			Value::Float(v) => write!(f, "{}", v),
			Value::Bool(b) => write!(f, "{}", b),
		}
	}
}

macro_rules! impl_from {
	($variant:ident, $target:ty, $($t:ty),*) => {
		$(
			impl From<$t> for Value {
				fn from(v: $t) -> Self {
					Value::$variant(v as $target)
				}
			}
		)*
	};
}

impl_from!(Int, i64, i8, i16, i32, i64, isize);
impl_from!(Uint, u64, u8, u16, u32, u64, usize);
impl_from!(Float, f64, f32, f64);

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Bool(v)
	}
}

impl From<char> for Value {
	fn from(v: char) -> Self {
		Value::Str(v.to_string())
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Str(v.to_string())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Str(v)
	}
}

impl From<&String> for Value {
	fn from(v: &String) -> Self {
		Value::Str(v.clone())
	}
}
