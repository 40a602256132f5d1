use std::io::Write;

use anyhow::Context;
use service::screens::Confirm;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Asks on stderr and reads `y`/`yes` from stdin without blocking the runtime,
/// so Ctrl-C still interrupts the prompt.
pub async fn ask(prompt: &str) -> anyhow::Result<bool> {
    eprint!("{prompt} [y/N] ");
    let _ = std::io::stderr().flush();
    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .context("reading confirmation from stdin")?;
    Ok(is_yes(&line))
}

/// A confirmation settled before the screen asks: `--yes`, or an answer
/// already read by [`ask`].
pub struct Answer(pub bool);

impl Confirm for Answer {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
