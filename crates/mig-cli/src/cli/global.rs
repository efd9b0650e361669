use clap::ValueEnum;

/// Which configured instance a command targets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Instance {
    Source,
    Target,
}

impl Instance {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Target => "target",
        }
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Copy, Debug)]
pub struct GlobalFlags {
    pub quiet: bool,
    pub verbose: bool,
}
