use clap::Args;
use shiftbreak::shift::decrypt_shift;
use shiftbreak::SbResult;

#[derive(Args, Debug, Clone)]
pub struct DecryptArgs {
    /// Shift to undo (0..26)
    #[arg(short, long)]
    pub shift: u8,

    /// Ciphertext. Falls back to --file, then stdin.
    pub text: Option<String>,

    #[arg(short, long)]
    pub file: Option<String>,
}

pub fn run(args: DecryptArgs) -> SbResult<()> {
    let ciphertext = super::read_ciphertext(&args.text, &args.file)?;
    let plaintext = decrypt_shift(&ciphertext, args.shift)?;
    println!("{}", plaintext);
    Ok(())
}
