//! Installability over time.
//!
//! Answers questions like "how many packages were installable from CRAN alone each year, and how
//! many once GitHub is added" by building a snapshot for every date and resolving every
//! combination of sources against it.

use std::borrow::Borrow;
use std::collections::BTreeSet;
use serde::{Serialize, Deserialize};

use crate::record::PackageRecord;
use crate::snapshot::SnapshotGraph;

/// The result of resolving one set of sources against the snapshot at one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryPoint {
	pub date: String,
	pub sources: BTreeSet<String>,
	/// Number of packages in the snapshot.
	pub graph_size: usize,
	pub installable: BTreeSet<String>,
}

/// Resolves each of `source_sets` against a snapshot taken at each of `dates`.
///
/// Points are returned grouped by date, in the order given, then by source set.
pub fn installability_over_time<R>(
	records: &[R],
	dates: impl IntoIterator<Item = impl AsRef<str>>,
	source_sets: &[BTreeSet<String>],
	config: &crate::Config,
) -> crate::Result<Vec<HistoryPoint>>
where R: Borrow<PackageRecord>
{
	let mut points = Vec::new();

	for date in dates {
		let date = date.as_ref();
		let graph = SnapshotGraph::build(records.iter().map(|r| Borrow::<PackageRecord>::borrow(r)), date, &config.snapshot)?;

		for sources in source_sets {
			let installable = crate::resolver::installable(&graph, sources, &config.resolve);
			log::info!("{}: {} of {} installable using {:?}", date, installable.len(), graph.len(), sources);
			points.push(HistoryPoint {
				date: date.to_string(),
				sources: sources.clone(),
				graph_size: graph.len(),
				installable,
			});
		}
	}

	Ok(points)
}
