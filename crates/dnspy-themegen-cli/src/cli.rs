//! CLI argument parsing via clap.

use std::path::PathBuf;

use clap::Parser;

/// Convert a JetBrains Rider color scheme into a dnSpy theme.
///
/// The donor theme supplies every key and field of the output; values are
/// replaced from the Rider scheme wherever a mapping exists.
#[derive(Debug, Parser)]
#[command(name = "dnspy-themegen", version)]
pub struct Args {
    /// The Rider color scheme to convert.
    #[arg(short = 'i', long = "input", value_name = "SCHEME")]
    pub input: PathBuf,

    /// The dnSpy theme to use as base.
    #[arg(short = 'd', long = "donor", value_name = "DNTHEME")]
    pub donor: PathBuf,

    /// Where to write the converted dnSpy theme.
    #[arg(short = 'o', long = "output", value_name = "DNTHEME")]
    pub output: PathBuf,
}
