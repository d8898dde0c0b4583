//! Options for building snapshots and resolving installability.
//!
//! Every option has a default matching the usual CRAN style table: dependencies are read from the
//! `Imports` and `Depends` columns and the packages bundled with R itself are treated as preinstalled.

use std::collections::BTreeSet;
use serde::{Serialize, Deserialize};

/// Packages shipped with the base R distribution.
pub const DEFAULT_BASE_PACKAGES: &[&str] = &[
	"R", "MASS", "Matrix", "base", "boot", "class", "cluster", "codetools", "compiler",
	"datasets", "foreign", "grDevices", "graphics", "grid", "lattice", "methods", "mgcv",
	"nlme", "nnet", "parallel", "rpart", "spatial", "splines", "stats", "stats4", "survival",
	"tcltk", "tools", "translations", "utils",
];

/// Columns mined for dependency names, in order.
pub const DEFAULT_DEPENDENCY_FIELDS: &[&str] = &["Imports", "Depends"];

fn default_base_packages() -> BTreeSet<String> {
	DEFAULT_BASE_PACKAGES.iter().map(|s| s.to_string()).collect()
}

/// Controls how [`SnapshotGraph::build()`](crate::SnapshotGraph::build()) turns records into a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotOptions {
	dependency_fields: Vec<String>,
	ignored_packages: BTreeSet<String>,
	ignore_base_packages: bool,
}

impl Default for SnapshotOptions {
	fn default() -> Self {
		Self {
			dependency_fields: DEFAULT_DEPENDENCY_FIELDS.iter().map(|s| s.to_string()).collect(),
			ignored_packages: default_base_packages(),
			ignore_base_packages: true,
		}
	}
}

impl SnapshotOptions {
	pub fn dependency_fields(&self) -> &[String] {
		&self.dependency_fields
	}
	pub fn set_dependency_fields(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
		self.dependency_fields = fields.into_iter().map(Into::into).collect();
		self
	}

	pub fn ignored_packages(&self) -> &BTreeSet<String> {
		&self.ignored_packages
	}
	pub fn set_ignored_packages(mut self, packages: impl IntoIterator<Item = impl Into<String>>) -> Self {
		self.ignored_packages = packages.into_iter().map(Into::into).collect();
		self
	}

	/// When `false` ignored packages still get graph entries if they show up in the table.
	pub fn ignore_base_packages(&self) -> bool {
		self.ignore_base_packages
	}
	pub fn set_ignore_base_packages(mut self, ignore: bool) -> Self {
		self.ignore_base_packages = ignore;
		self
	}

	/// Whether records for `package` are dropped before they reach the graph.
	pub(crate) fn skips(&self, package: &str) -> bool {
		self.ignore_base_packages && self.ignored_packages.contains(package)
	}
}

/// Controls a single run of the [`Resolver`](crate::Resolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
	ignored_packages: BTreeSet<String>,
	check_self: bool,
}

impl Default for ResolveOptions {
	fn default() -> Self {
		Self {
			ignored_packages: default_base_packages(),
			check_self: true,
		}
	}
}

impl ResolveOptions {
	/// Packages assumed to be installed already, they are installable without looking at the graph.
	pub fn ignored_packages(&self) -> &BTreeSet<String> {
		&self.ignored_packages
	}
	pub fn set_ignored_packages(mut self, packages: impl IntoIterator<Item = impl Into<String>>) -> Self {
		self.ignored_packages = packages.into_iter().map(Into::into).collect();
		self
	}

	/// When set a package is only reported if one of its own sources is enabled.
	pub fn check_self(&self) -> bool {
		self.check_self
	}
	pub fn set_check_self(mut self, check_self: bool) -> Self {
		self.check_self = check_self;
		self
	}

	pub(crate) fn is_ignored(&self, package: &str) -> bool {
		self.ignored_packages.contains(package)
	}
}

/// All options in one place, usually read from a JSON file.
///
/// Any key missing from the file keeps its default value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
	pub snapshot: SnapshotOptions,
	pub resolve: ResolveOptions,
}

impl Config {
	pub fn load_from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
		let path = path.as_ref();
		log::debug!("Loading config from {}", path.display());
		let file = std::fs::File::open(path)?;
		let config = serde_json::from_reader(std::io::BufReader::new(file))?;
		Ok(config)
	}

	pub fn save_to_file(&self, path: impl AsRef<std::path::Path>) -> crate::Result<()> {
		let file = std::fs::File::create(path)?;
		serde_json::to_writer_pretty(file, self)?;
		Ok(())
	}

	/// Replaces the ignored package list of both the builder and the resolver.
	pub fn set_ignored_packages(mut self, packages: impl IntoIterator<Item = impl Into<String>>) -> Self {
		let packages: BTreeSet<String> = packages.into_iter().map(Into::into).collect();
		self.snapshot = self.snapshot.set_ignored_packages(packages.clone());
		self.resolve = self.resolve.set_ignored_packages(packages);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_ignore_r_base() {
		let config = Config::default();
		assert!(config.snapshot.ignored_packages().contains("stats"));
		assert!(config.resolve.ignored_packages().contains("R"));
		assert_eq!(config.snapshot.ignored_packages().len(), DEFAULT_BASE_PACKAGES.len());
		assert_eq!(config.snapshot.dependency_fields(), &["Imports".to_string(), "Depends".to_string()]);
		assert!(config.resolve.check_self());
		assert!(config.snapshot.ignore_base_packages());
	}

	#[test]
	fn partial_json_keeps_defaults() {
		let config: Config = serde_json::from_str(r#"{ "resolve": { "check_self": false } }"#).unwrap();
		assert!(!config.resolve.check_self());
		assert!(config.resolve.is_ignored("utils"));
		assert_eq!(config.snapshot, SnapshotOptions::default());
	}

	#[test]
	fn ignored_packages_apply_to_both_stages() {
		let config = Config::default().set_ignored_packages(["internal"]);
		assert!(config.snapshot.skips("internal"));
		assert!(!config.snapshot.skips("stats"));
		assert!(config.resolve.is_ignored("internal"));
		assert_eq!(config.resolve.ignored_packages().len(), 1);
	}

	#[test]
	fn skips_only_when_ignoring() {
		let options = SnapshotOptions::default();
		assert!(options.skips("methods"));
		assert!(!options.clone().set_ignore_base_packages(false).skips("methods"));
		assert!(!options.skips("ggplot2"));
	}
}
