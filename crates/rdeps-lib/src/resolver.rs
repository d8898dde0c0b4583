//! Installability of the packages in a [`SnapshotGraph`].
//!
//! A package is installable when at least one of its variants has every dependency both
//! available from an enabled source and itself installable. Ignored packages are treated as
//! already installed and always count as installable.
//!
//! # Usage
//! For a one off answer use [`installable()`].
//! To query individual packages or see which variant satisfied a package create a [`Resolver`].
//!
//! # Cycles
//! A package is marked as not installable before its dependencies are visited, so any dependency
//! chain that leads back to it sees `false`. Packages that can only be satisfied through a cycle
//! are therefore never installable. Cycles are not reported.

use std::collections::{BTreeSet, HashMap};

use crate::config::ResolveOptions;
use crate::snapshot::{PackageVariant, SnapshotGraph};

/// Whether `package` has an entry in `graph` published by any of `sources`.
///
/// Packages without an entry are never available, even if they are ignored.
pub fn available(graph: &SnapshotGraph, package: &str, sources: &BTreeSet<String>) -> bool {
	graph.get(package)
		.map(|variants| variants.keys().any(|source| sources.contains(source)))
		.unwrap_or(false)
}

/// Names of every package in `graph` that can be installed using only `sources`.
pub fn installable(graph: &SnapshotGraph, sources: &BTreeSet<String>, options: &ResolveOptions) -> BTreeSet<String> {
	Resolver::new(graph, sources.iter().cloned(), options).installable()
}

/// A single resolve run over a graph with a fixed set of enabled sources.
///
/// Results are memoized for the lifetime of the resolver. They depend on the enabled sources, so
/// use a new resolver for every set of sources.
#[derive(Debug)]
pub struct Resolver<'g> {
	graph: &'g SnapshotGraph,
	sources: BTreeSet<String>,
	options: &'g ResolveOptions,

	memory: HashMap<String, bool>,
	/// Source of the variant that made each installable package installable.
	selected: HashMap<String, String>,
}

impl<'g> Resolver<'g> {
	pub fn new(graph: &'g SnapshotGraph, sources: impl IntoIterator<Item = impl Into<String>>, options: &'g ResolveOptions) -> Self {
		Self {
			graph,
			sources: sources.into_iter().map(Into::into).collect(),
			options,
			memory: Default::default(),
			selected: Default::default(),
		}
	}

	pub fn sources(&self) -> &BTreeSet<String> {
		&self.sources
	}

	/// See [`available()`].
	pub fn is_available(&self, package: &str) -> bool {
		available(self.graph, package, &self.sources)
	}

	/// Checks if `name` can be installed, recursing into its dependencies.
	///
	/// Variants are tried in source name order and the first one that works is used.
	/// Names that are neither in the graph nor ignored are not installable.
	pub fn is_installable(&mut self, name: &str) -> bool {
		if let Some(&known) = self.memory.get(name) {
			return known;
		}

		/* Anything reaching `name` again before we're done sees it as not installable */
		self.memory.insert(name.to_string(), false);

		if self.options.is_ignored(name) {
			self.memory.insert(name.to_string(), true);
			return true;
		}

		let graph = self.graph;
		let variants = match graph.get(name) {
			Some(v) => v,
			None => {
				log::trace!("`{}` is not in the snapshot", name);
				return false;
			},
		};

		for (source, variant) in variants {
			/* Availability is cheaper to check so rule variants out with it first */
			let all_available = variant.dependencies.iter()
				.filter(|dep| !self.options.is_ignored(dep))
				.all(|dep| self.is_available(dep));
			if !all_available {
				continue;
			}

			if variant.dependencies.iter().all(|dep| self.is_installable(dep)) {
				self.memory.insert(name.to_string(), true);
				self.selected.insert(name.to_string(), source.clone());
				return true;
			}
		}

		log::trace!("no variant of `{}` is installable", name);
		false
	}

	/// Every package in the graph that is installable.
	///
	/// With [`check_self`](ResolveOptions::check_self()) set, packages not published by any enabled
	/// source are left out even if their dependencies could be met.
	pub fn installable(&mut self) -> BTreeSet<String> {
		let graph = self.graph;
		let check_self = self.options.check_self();

		let mut results = BTreeSet::new();
		for name in graph.package_names() {
			if (!check_self || self.is_available(name)) && self.is_installable(name) {
				results.insert(name.to_string());
			}
		}

		log::debug!(
			"{} of {} packages installable with sources {:?}",
			results.len(), graph.len(), self.sources
		);
		results
	}

	/// The variant that made `name` installable.
	///
	/// `None` until `name` has been found installable, and always `None` for ignored packages.
	pub fn selected_variant(&self, name: &str) -> Option<&'g PackageVariant> {
		let source = self.selected.get(name)?;
		self.graph.variant(name, source)
	}
}
