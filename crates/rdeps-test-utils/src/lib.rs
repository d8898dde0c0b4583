//! Various helper functions for testing

use std::collections::BTreeSet;
use std::io::Write;

use rdeps::{PackageRecord, PackageVariant, SnapshotGraph};

/// A record with `imports` as its `Imports` column.
pub fn record(package: &str, source: &str, date: &str, imports: &str) -> PackageRecord {
	PackageRecord::with_fields(package, source, "1.0", date).field("Imports", imports)
}

/// Assembles a graph by hand from `(package, source, dependencies)` triples.
pub fn graph(variants: &[(&str, &str, &[&str])]) -> SnapshotGraph {
	variants.iter()
		.map(|(package, source, deps)| PackageVariant::new(*package, *source, deps.iter().copied()))
		.collect()
}

pub fn sources(names: &[&str]) -> BTreeSet<String> {
	names.iter().map(|s| s.to_string()).collect()
}

/// Options with only `ignored` treated as preinstalled.
pub fn resolve_options(ignored: &[&str]) -> rdeps::ResolveOptions {
	rdeps::ResolveOptions::default().set_ignored_packages(ignored.iter().copied())
}

/// Writes `records` as a JSON table to a temporary file, removed when the handle drops.
pub fn write_table(records: &[PackageRecord]) -> std::io::Result<tempfile::NamedTempFile> {
	let rows: Vec<serde_json::Value> = records.iter()
		.map(|r| {
			serde_json::Value::Object(
				r.fields().map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string()))).collect()
			)
		})
		.collect();

	let mut file = tempfile::NamedTempFile::new()?;
	serde_json::to_writer(&mut file, &rows)?;
	file.flush()?;
	Ok(file)
}
