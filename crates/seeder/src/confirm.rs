use crate::config::SeedConfig;
use models::collection::Collection;
use std::io::{self, BufRead, Write};

/// Asks the operator to confirm wiping every collection.
///
/// With `force` set the prompt is skipped entirely: nothing is printed and
/// nothing is read. Otherwise a warning naming the base URL and collections is
/// written to `output` and one line is read from `input`.
///
/// # Arguments
/// * `force` - Whether the `--force` flag was given
/// * `config` - The run configuration, for the base URL shown in the warning
/// * `input` - Where the answer is read from
/// * `output` - Where the warning and prompt are written
///
/// # Returns
/// `true` if the run should proceed. End of input counts as a refusal.
pub fn confirm<R, W>(
    force: bool,
    config: &SeedConfig,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    if force {
        return Ok(true);
    }

    let endpoints = Collection::all()
        .into_iter()
        .map(Collection::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    writeln!(output)?;
    writeln!(output, "WARNING: This will DELETE ALL existing data from MockAPI!")?;
    writeln!(output, "Base URL: {}", config.base_url)?;
    writeln!(output, "Endpoints: {endpoints}")?;
    write!(output, "\nAre you sure you want to continue? (yes/no): ")?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(false);
    }

    Ok(is_affirmative(&answer))
}

/// `yes` or `y`, ignoring case and surrounding whitespace
fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}
