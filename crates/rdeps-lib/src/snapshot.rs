//! # Snapshot graphs
//!
//! A snapshot is the state of every source at a single date: for each package name, the newest
//! release each source had published up to and including that date.
//!
//! Snapshots are built once with [`SnapshotGraph::build()`] and then only read, the same graph can
//! be handed to any number of resolver runs.
//!
//! Building from a large table is not free so a graph can be cached with
//! [`save_to_file()`](SnapshotGraph::save_to_file()) and read back with [`load_from_file()`](SnapshotGraph::load_from_file()).

use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};

mod variant;
pub use variant::PackageVariant;

mod builder;

/// Source name to the variant published there.
///
/// Ordered by source name, which is the order the resolver tries variants in.
pub type SourceMap = BTreeMap<String, PackageVariant>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotGraph {
	packages: BTreeMap<String, SourceMap>,
}

impl SnapshotGraph {
	/// Every variant published for `package`, `None` if the package has no entry.
	pub fn get(&self, package: &str) -> Option<&SourceMap> {
		self.packages.get(package)
	}

	pub fn variant(&self, package: &str, source: &str) -> Option<&PackageVariant> {
		self.packages.get(package)?.get(source)
	}

	pub fn contains(&self, package: &str) -> bool {
		self.packages.contains_key(package)
	}

	pub fn package_names(&self) -> impl Iterator<Item = &str> {
		self.packages.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &SourceMap)> {
		self.packages.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Number of distinct package names.
	pub fn len(&self) -> usize {
		self.packages.len()
	}

	pub fn is_empty(&self) -> bool {
		self.packages.is_empty()
	}

	/// Number of (package, source) pairs.
	pub fn variant_count(&self) -> usize {
		self.packages.values().map(BTreeMap::len).sum()
	}

	pub fn save_to_file(&self, path: impl AsRef<std::path::Path>) -> crate::Result<()> {
		let path = path.as_ref();
		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			std::fs::create_dir_all(parent)?;
		}
		let file = std::io::BufWriter::new(std::fs::File::create(path)?);
		bincode::serialize_into(file, self)?;
		log::debug!("Saved snapshot with {} packages to {}", self.len(), path.display());
		Ok(())
	}

	pub fn load_from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
		let file = std::io::BufReader::new(std::fs::File::open(path)?);
		Ok(bincode::deserialize_from(file)?)
	}

	pub(crate) fn insert(&mut self, variant: PackageVariant) {
		self.packages
			.entry(variant.package.clone())
			.or_default()
			.insert(variant.source.clone(), variant);
	}
}

impl FromIterator<PackageVariant> for SnapshotGraph {
	/// Assembles a graph directly from variants, later variants replace earlier ones with the same package and source.
	fn from_iter<T: IntoIterator<Item = PackageVariant>>(iter: T) -> Self {
		let mut graph = SnapshotGraph::default();
		for variant in iter {
			graph.insert(variant);
		}
		graph
	}
}
