#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
pub(crate) struct Cli {
    /// Script to evaluate. Starts an interactive prompt when omitted
    pub file: Option<std::path::PathBuf>,

    /// Enable debug logging of every pipeline stage
    #[arg(short, long)]
    pub verbose: bool,
}
