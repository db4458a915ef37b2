use clap::Args;

/// Knobs shared by every ranking entry point. Flattened into the CLI
/// subcommands and usable directly as a library parameter struct.
#[derive(Args, Debug, Clone)]
pub struct RankParams {
    /// How many top candidates to surface (values above 26 clamp to 26).
    #[arg(long, default_value_t = 5)]
    pub top_k: usize,

    /// Skip statistical scoring entirely; candidates come back in plain
    /// ascending shift order 0..25.
    #[arg(long, default_value_t = false)]
    pub no_scoring: bool,
}

impl Default for RankParams {
    fn default() -> Self {
        Self {
            top_k: 5,
            no_scoring: false,
        }
    }
}

impl RankParams {
    pub fn scoring(&self) -> bool {
        !self.no_scoring
    }
}
