use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "rnum",
    version,
    about = "Bulk-rename NUMBER.EXTENSION files in the current directory by shifting the numeric part"
)]
pub struct Args {
    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
