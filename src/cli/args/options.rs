use clap::ValueEnum;

/// Category tabs accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum CategoryArg {
	All,
	Manual,
	Modules,
	Symbols,
}

impl CategoryArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			CategoryArg::All => "all",
			CategoryArg::Manual => "manual",
			CategoryArg::Modules => "modules",
			CategoryArg::Symbols => "symbols",
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
