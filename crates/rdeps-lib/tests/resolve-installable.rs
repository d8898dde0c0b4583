use rdeps::{installable, Resolver, SnapshotGraph};
use rdeps_test_utils::{graph, resolve_options, sources};

fn chain() -> SnapshotGraph {
	graph(&[
		("A", "src1", &["B"]),
		("B", "src1", &[]),
	])
}

#[test]
fn dependency_chain_is_installable() {
	let options = resolve_options(&[]);
	assert_eq!(installable(&chain(), &sources(&["src1"]), &options), sources(&["A", "B"]));
}

#[test]
fn missing_source_fails_self_check() {
	let options = resolve_options(&[]);
	assert!(installable(&chain(), &sources(&["src2"]), &options).is_empty());
}

#[test]
fn mutual_dependency_never_resolves() {
	let graph = graph(&[
		("A", "src1", &["B"]),
		("B", "src1", &["A"]),
	]);
	let options = resolve_options(&[]);
	assert!(installable(&graph, &sources(&["src1"]), &options).is_empty());
}

#[test]
fn unknown_dependency_is_not_installable() {
	let graph = graph(&[("A", "src1", &["ghost"])]);
	let options = resolve_options(&[]).set_check_self(false);
	let mut resolver = Resolver::new(&graph, ["src1"], &options);
	assert!(!resolver.is_installable("A"));
	assert!(!resolver.is_installable("ghost"));
}

#[test]
fn ignored_packages_are_always_installable() {
	let graph = graph(&[
		("A", "src1", &["utils", "stats"]),
		("utils", "src1", &["missing"]),
	]);
	let options = resolve_options(&["utils", "stats"]);
	for sources in [sources(&[]), sources(&["src1"]), sources(&["other"])] {
		let mut resolver = Resolver::new(&graph, sources, &options);
		assert!(resolver.is_installable("utils"));
		assert!(resolver.is_installable("stats"));
	}
	assert_eq!(installable(&graph, &sources(&["src1"]), &options), sources(&["A", "utils"]));
}

#[test]
fn self_check_gates_packages_from_disabled_sources() {
	let graph = graph(&[
		("A", "github", &["B"]),
		("B", "cran", &[]),
	]);
	let with_check = resolve_options(&[]);
	let without_check = resolve_options(&[]).set_check_self(false);
	assert_eq!(installable(&graph, &sources(&["cran"]), &with_check), sources(&["B"]));
	assert_eq!(installable(&graph, &sources(&["cran"]), &without_check), sources(&["A", "B"]));
}

#[test]
fn any_satisfiable_variant_is_enough() {
	let graph = graph(&[
		("A", "cran", &["C"]),
		("A", "github", &["B"]),
		("B", "github", &[]),
	]);
	let options = resolve_options(&[]);
	let mut resolver = Resolver::new(&graph, ["cran", "github"], &options);
	assert!(resolver.is_installable("A"));
	assert_eq!(resolver.selected_variant("A").map(|v| v.source.as_str()), Some("github"));
}

#[test]
fn cycle_with_an_exit_still_resolves_outside_packages() {
	/* C depends on the A/B cycle, D depends on nothing */
	let graph = graph(&[
		("A", "src1", &["B"]),
		("B", "src1", &["A"]),
		("C", "src1", &["A"]),
		("D", "src1", &[]),
	]);
	let options = resolve_options(&[]);
	assert_eq!(installable(&graph, &sources(&["src1"]), &options), sources(&["D"]));
}

#[test]
fn repeated_runs_agree() {
	let graph = graph(&[
		("A", "cran", &["B", "C"]),
		("B", "cran", &["C"]),
		("C", "bioc", &[]),
		("D", "github", &["A"]),
	]);
	let options = resolve_options(&[]);
	let enabled = sources(&["cran", "bioc"]);
	let first = installable(&graph, &enabled, &options);
	for _ in 0..5 {
		assert_eq!(installable(&graph, &enabled, &options), first);
	}
	assert_eq!(first, sources(&["A", "B", "C"]));
}

#[test]
fn adding_sources_never_removes_packages() {
	let graph = graph(&[
		("A", "cran", &["B"]),
		("B", "bioc", &[]),
		("C", "github", &["A", "B"]),
		("D", "github", &["D"]),
		("E", "cran", &["F"]),
	]);
	let options = resolve_options(&[]);
	let all = ["cran", "bioc", "github"];
	let mut previous = installable(&graph, &sources(&[]), &options);
	for n in 1..=all.len() {
		let current = installable(&graph, &sources(&all[..n]), &options);
		assert!(previous.is_subset(&current), "{:?} not within {:?}", previous, current);
		previous = current;
	}
	assert_eq!(previous, sources(&["A", "B", "C"]));
}

#[test]
fn graph_is_reusable_across_source_sets() {
	let graph = graph(&[
		("A", "cran", &["B"]),
		("B", "github", &[]),
	]);
	let options = resolve_options(&[]);
	assert_eq!(installable(&graph, &sources(&["cran"]), &options), sources(&[]));
	assert_eq!(installable(&graph, &sources(&["cran", "github"]), &options), sources(&["A", "B"]));
	assert_eq!(installable(&graph, &sources(&["cran"]), &options), sources(&[]));
}
