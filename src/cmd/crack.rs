use crate::reports::{self, OutputFormat};
use clap::Args;
use shiftbreak::config::RankParams;
use shiftbreak::rank::rank_shifts;
use shiftbreak::SbResult;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CrackArgs {
    /// Ciphertext to crack. Falls back to --file, then stdin.
    pub text: Option<String>,

    #[arg(short, long)]
    pub file: Option<String>,

    #[command(flatten)]
    pub params: RankParams,

    /// Also print the full 26-row shift listing.
    #[arg(long, default_value_t = false)]
    pub all: bool,

    #[arg(long, default_value = "table")]
    pub format: OutputFormat,
}

pub fn run(args: CrackArgs) -> SbResult<()> {
    let ciphertext = super::read_ciphertext(&args.text, &args.file)?;
    info!("🔎 Trying all 26 shifts on {} chars", ciphertext.len());

    let ranking = rank_shifts(&ciphertext, &args.params)?;

    match args.format {
        OutputFormat::Json => reports::print_json(&ranking)?,
        OutputFormat::Table => {
            reports::print_best_guess(ranking.best());
            reports::print_top_table(ranking.top());
            if args.all {
                reports::print_all_shifts(ranking.all());
            }
        }
    }

    Ok(())
}
