//! Text prompt for manual play.

use std::io::{BufRead, Write};

use crate::core::Action;
use crate::error::{EnvError, Result};

use super::Environment;

/// Prompt on `output` until a line read from `input` names a legal action.
///
/// A line matches when, with surrounding whitespace removed, it equals the
/// decimal form of one of `env.legal_actions()`. Anything else is echoed
/// back as rejected and the operator is asked again, including lines that
/// are not valid UTF-8. End of input is reported as
/// [`EnvError::InputClosed`], and an empty legal set as
/// [`EnvError::NoLegalActions`] since no line could ever match.
pub fn prompt_action<E, R, W>(env: &E, input: &mut R, output: &mut W) -> Result<Action>
where
    E: Environment + ?Sized,
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let legal = env.legal_actions();
    if legal.is_empty() {
        return Err(EnvError::NoLegalActions);
    }
    write!(
        output,
        "Enter the action to play for the player {}: ",
        env.to_play()
    )?;
    output.flush()?;

    let mut line = Vec::new();
    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            return Err(EnvError::InputClosed);
        }

        let text = String::from_utf8_lossy(&line);
        let choice = text.trim();
        if let Some(action) = legal.iter().find(|a| a.to_string() == choice) {
            return Ok(*action);
        }

        log::debug!("rejected human input {choice:?}");
        writeln!(output, "'{choice}' is not a legal action")?;
        write!(output, "Enter another action : ")?;
        output.flush()?;
    }
}
