use std::collections::BTreeSet;
use std::process::ExitCode;

fn main() -> ExitCode {
	let mut opts;

	/* Parse console input */
	let parsed_options = {
		let args: Vec<String> = std::env::args().collect();

		opts = getopts::Options::new();
		opts.optflag( "h", "help",          "Show help");
		opts.optflag( "v", "verbose",       "Increased vebosity");
		opts.optmulti("d", "date",          "Snapshot date, inclusive. `history` accepts several", "YYYY-MM-DD");
		opts.optmulti("s", "source",        "Enabled source. `history` takes comma separated sets", "NAME");
		opts.optmulti("f", "field",         "Column to read dependencies from, replaces the defaults", "COLUMN");
		opts.optopt(  "c", "config",        "JSON config file", "FILE");
		opts.optflag( "",  "no-check-self", "Report packages even when none of their own sources are enabled");
		opts.optflag( "",  "keep-base",     "Give base packages graph entries when they appear in the table");
		opts.parsing_style(getopts::ParsingStyle::FloatingFrees);

		let parsed_options = match opts.parse(&args[1..]) {
			Ok(m)  => { m }
			Err(e) => { eprintln!("Unable to parse options: {}", e); return ExitCode::FAILURE }
		};

		if parsed_options.opt_present("h") {
			eprintln!("{}", opts.usage("Usage: rdeps (resolve|history) TABLE.json [options]"));
			return ExitCode::SUCCESS;
		}

		parsed_options
	};

	{
		let default_filter = if parsed_options.opt_present("v") { "debug" } else { "warn" };
		env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
	}

	match run(&parsed_options) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			log::error!("{}", e);
			eprintln!("error: {}", e);
			ExitCode::FAILURE
		},
	}
}

fn run(parsed_options: &getopts::Matches) -> Result<(), Error> {
	let command = parsed_options.free.first().ok_or(Error::MissingArgument("command"))?;
	let table_path = parsed_options.free.get(1).ok_or(Error::MissingArgument("table"))?;

	let config = load_config(parsed_options)?;
	let records = rdeps::table::read_records_from_file(table_path)?;

	match command.as_str() {
		"resolve" => resolve(parsed_options, &config, &records),
		"history" => history(parsed_options, &config, &records),
		other => Err(Error::UnknownCommand(other.to_string())),
	}
}

/// Config file if given, with command line flags applied on top.
fn load_config(parsed_options: &getopts::Matches) -> Result<rdeps::Config, Error> {
	let mut config = match parsed_options.opt_str("c") {
		Some(path) => rdeps::Config::load_from_file(path)?,
		None => rdeps::Config::default(),
	};

	let fields = parsed_options.opt_strs("f");
	if !fields.is_empty() {
		config.snapshot = config.snapshot.set_dependency_fields(fields);
	}
	if parsed_options.opt_present("keep-base") {
		config.snapshot = config.snapshot.set_ignore_base_packages(false);
	}
	if parsed_options.opt_present("no-check-self") {
		config.resolve = config.resolve.set_check_self(false);
	}

	log::debug!("Using config {:?}", config);
	Ok(config)
}

fn resolve(parsed_options: &getopts::Matches, config: &rdeps::Config, records: &[rdeps::PackageRecord]) -> Result<(), Error> {
	let dates = parsed_options.opt_strs("d");
	let date = match dates.as_slice() {
		[date] => date,
		[] => return Err(Error::MissingArgument("date")),
		_ => return Err(Error::InvalidArgument("`resolve` takes a single date".to_string())),
	};
	let sources: BTreeSet<String> = parsed_options.opt_strs("s").into_iter().collect();
	if sources.is_empty() {
		return Err(Error::MissingArgument("source"));
	}

	let graph = rdeps::SnapshotGraph::build(records, date, &config.snapshot)?;
	let installable = rdeps::installable(&graph, &sources, &config.resolve);

	for name in &installable {
		println!("{}", name);
	}
	log::info!("{} of {} packages installable", installable.len(), graph.len());
	Ok(())
}

fn history(parsed_options: &getopts::Matches, config: &rdeps::Config, records: &[rdeps::PackageRecord]) -> Result<(), Error> {
	let dates = parsed_options.opt_strs("d");
	if dates.is_empty() {
		return Err(Error::MissingArgument("date"));
	}
	let source_sets: Vec<BTreeSet<String>> = parsed_options.opt_strs("s")
		.iter()
		.map(|set| set.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect())
		.collect();
	if source_sets.is_empty() {
		return Err(Error::MissingArgument("source"));
	}

	let points = rdeps::history::installability_over_time(records, &dates, &source_sets, config)?;
	for point in points {
		let sources = point.sources.iter().map(String::as_str).collect::<Vec<_>>().join(",");
		println!("{}\t{}\t{}\t{}", point.date, sources, point.installable.len(), point.graph_size);
	}
	Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("rdeps error: {0}")]
	Rdeps(#[from] rdeps::Error),
	#[error("missing argument: {0}")]
	MissingArgument(&'static str),
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
	#[error("unknown command `{0}`, expected `resolve` or `history`")]
	UnknownCommand(String),
}
