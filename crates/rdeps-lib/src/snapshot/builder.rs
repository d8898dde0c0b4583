//! Construction of a [`SnapshotGraph`] from a table of records.

use std::borrow::Borrow;
use std::collections::HashMap;

use super::*;
use crate::config::SnapshotOptions;
use crate::record::PackageRecord;

impl SnapshotGraph {
	/// Builds the graph of every package as it was on `cutoff`.
	///
	/// For each (package, source) pair only the newest record dated on or before `cutoff` is kept.
	/// When several records share that newest date the one appearing last in `records` wins.
	///
	/// Packages in the ignored list of `options` don't get an entry of their own, they can still be
	/// named as a dependency of other packages.
	///
	/// # Errors
	/// - [`MalformedRecord`](crate::Error::MalformedRecord) when any record lacks a `Package`, `Source`
	/// or `Date`. Every record is checked before the graph is assembled.
	pub fn build<R>(records: impl IntoIterator<Item = R>, cutoff: &str, options: &SnapshotOptions) -> crate::Result<Self>
	where R: Borrow<PackageRecord>
	{
		let records: Vec<R> = records.into_iter().collect();

		for (index, record) in records.iter().enumerate() {
			if let Some(field) = record.borrow().missing_required_field() {
				return Err(crate::Error::MalformedRecord { index, field });
			}
		}

		/* Index of the newest record for each pair, `>=` lets later rows win ties */
		let mut latest = HashMap::<(&str, &str), usize>::new();
		for (index, record) in records.iter().enumerate() {
			let record = record.borrow();
			if record.date() > cutoff {
				continue;
			}
			latest.entry((record.package(), record.source()))
				.and_modify(|current| {
					if record.date() >= records[*current].borrow().date() {
						*current = index;
					}
				})
				.or_insert(index);
		}

		let mut graph = SnapshotGraph::default();
		let mut skipped = 0usize;
		for ((package, _), index) in latest {
			if options.skips(package) {
				skipped += 1;
				continue;
			}
			let record = records[index].borrow().clone();
			graph.insert(PackageVariant::from_record(record, options.dependency_fields()));
		}

		log::debug!(
			"Built snapshot for {}: {} packages, {} variants from {} records ({} ignored)",
			cutoff, graph.len(), graph.variant_count(), records.len(), skipped
		);

		Ok(graph)
	}
}
