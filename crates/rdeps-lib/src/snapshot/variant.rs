use std::collections::BTreeSet;
use serde::{Serialize, Deserialize};

use crate::record::PackageRecord;

/// One package as published by one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageVariant {
	pub package: String,
	pub source: String,
	pub version: String,
	pub date: String,
	/// The record this variant was built from, including columns the graph itself doesn't use.
	pub metadata: PackageRecord,
	/// Names of the packages this one needs. Unversioned.
	pub dependencies: BTreeSet<String>,
}

impl PackageVariant {
	/// Builds a variant from `record`, collecting dependencies from each column in `dependency_fields`.
	pub fn from_record(record: PackageRecord, dependency_fields: &[String]) -> Self {
		let dependencies = dependency_fields.iter()
			.flat_map(|field| split_dependencies(record.get(field)))
			.map(str::to_string)
			.collect();

		Self {
			package: record.package().to_string(),
			source: record.source().to_string(),
			version: record.version().to_string(),
			date: record.date().to_string(),
			metadata: record,
			dependencies,
		}
	}

	/// Bare variant with no metadata beyond its identity, mostly useful for assembling graphs by hand.
	pub fn new(package: impl Into<String>, source: impl Into<String>, dependencies: impl IntoIterator<Item = impl Into<String>>) -> Self {
		let package = package.into();
		let source = source.into();
		Self {
			metadata: PackageRecord::new()
				.field(crate::record::PACKAGE_FIELD, package.as_str())
				.field(crate::record::SOURCE_FIELD, source.as_str()),
			package,
			source,
			version: String::new(),
			date: String::new(),
			dependencies: dependencies.into_iter().map(Into::into).collect(),
		}
	}
}

/// Splits a dependency column into package names.
fn split_dependencies(value: &str) -> impl Iterator<Item = &str> {
	value.split_whitespace()
}
