pub mod types;
pub mod validation;

use clap::Parser;
pub use types::{Args, CleanArgs};

/// Loads `.env`, parses flags (falling back to the environment), and
/// validates the result.
///
/// # Errors
///
/// Will return `Err` if a value fails validation
pub fn args_checks() -> Result<CleanArgs, String> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    args.validate()?;
    Ok(CleanArgs::from(args))
}
