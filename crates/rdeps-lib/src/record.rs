//! A single row of the package metadata table.

use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};

pub const PACKAGE_FIELD: &str = "Package";
pub const SOURCE_FIELD: &str = "Source";
pub const VERSION_FIELD: &str = "Version";
pub const DATE_FIELD: &str = "Date";

/// One published package as it appears in the input table.
///
/// Only `Package`, `Source` and `Date` are required, every other column is carried along untouched.
/// Columns that are absent read as an empty string, the same as a blank cell.
///
/// Dates are compared as strings, so they should be ISO-8601 (`YYYY-MM-DD`) for the ordering to hold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
	fields: BTreeMap<String, String>,
}

impl PackageRecord {
	pub fn new() -> Self {
		Self::default()
	}

	/// Convenience constructor for the four standard columns.
	pub fn with_fields(package: impl Into<String>, source: impl Into<String>, version: impl Into<String>, date: impl Into<String>) -> Self {
		Self::new()
			.field(PACKAGE_FIELD, package)
			.field(SOURCE_FIELD, source)
			.field(VERSION_FIELD, version)
			.field(DATE_FIELD, date)
	}

	/// Sets `name` to `value`, replacing any previous value.
	pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert(name, value);
		self
	}

	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.fields.insert(name.into(), value.into());
	}

	/// Value of the column `name`, empty when the column is missing.
	pub fn get(&self, name: &str) -> &str {
		self.fields.get(name).map(String::as_str).unwrap_or_default()
	}

	/// Like [`get()`](Self::get()) but `None` when the column is missing or blank.
	pub fn get_non_empty(&self, name: &str) -> Option<&str> {
		self.fields.get(name).map(String::as_str).filter(|v| !v.is_empty())
	}

	pub fn package(&self) -> &str {
		self.get(PACKAGE_FIELD)
	}

	pub fn source(&self) -> &str {
		self.get(SOURCE_FIELD)
	}

	pub fn version(&self) -> &str {
		self.get(VERSION_FIELD)
	}

	pub fn date(&self) -> &str {
		self.get(DATE_FIELD)
	}

	pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
		self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Checks the record carries every required column.
	///
	/// Returns the name of the first missing column.
	pub(crate) fn missing_required_field(&self) -> Option<&'static str> {
		[PACKAGE_FIELD, SOURCE_FIELD, DATE_FIELD]
			.into_iter()
			.find(|f| self.get_non_empty(f).is_none())
	}
}

impl<K, V> FromIterator<(K, V)> for PackageRecord
where K: Into<String>, V: Into<String>
{
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		Self {
			fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test] fn missing_column_reads_empty() { assert_eq!(PackageRecord::new().get("Imports"), "") }
	#[test] fn blank_package_is_missing() { assert_eq!(PackageRecord::with_fields("", "cran", "1.0", "2015-01-01").missing_required_field(), Some(PACKAGE_FIELD)) }
	#[test] fn missing_date_is_reported() { assert_eq!(PackageRecord::new().field(PACKAGE_FIELD, "A").field(SOURCE_FIELD, "cran").missing_required_field(), Some(DATE_FIELD)) }
	#[test] fn version_is_optional() { assert_eq!(PackageRecord::new().field(PACKAGE_FIELD, "A").field(SOURCE_FIELD, "cran").field(DATE_FIELD, "2015-01-01").missing_required_field(), None) }
}
