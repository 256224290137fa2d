use crate::errors::RunbenchError;
use crate::types::TimingSample;

const USER_SUFFIX: &str = "user";
const SYSTEM_SUFFIX: &str = "system";
const ELAPSED_SUFFIX: &str = "elapsed";

/// Parse the capture of a timing wrapper run.
///
/// Expects the default GNU `time` report to lead the text:
///
/// ```text
/// 0.00user 0.00system 0:00.00elapsed 150%CPU (0avgtext+0avgdata 4088maxresident)k
/// 0inputs+0outputs (0major+206minor)pagefaults 0swaps
/// ```
///
/// Only the first three whitespace-separated tokens are consumed. Each must end
/// in its suffix, in order; anything else is an error naming the offending token.
/// The numeric prefixes are returned verbatim and `raw_output` is the input
/// unchanged.
pub fn parse_time_output(text: &str) -> Result<TimingSample, RunbenchError> {
    let mut tokens = text.split_whitespace().peekable();
    if tokens.peek().is_none() {
        return Err(RunbenchError::EmptyOutput);
    }

    let user_time = take_field(&mut tokens, 0, USER_SUFFIX)?;
    let system_time = take_field(&mut tokens, 1, SYSTEM_SUFFIX)?;
    let elapsed_time = take_field(&mut tokens, 2, ELAPSED_SUFFIX)?;

    Ok(TimingSample {
        user_time: user_time.to_string(),
        system_time: system_time.to_string(),
        elapsed_time: elapsed_time.to_string(),
        raw_output: text.to_string(),
    })
}

fn take_field<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    position: usize,
    suffix: &'static str,
) -> Result<&'a str, RunbenchError> {
    let token = tokens.next().ok_or(RunbenchError::MissingToken {
        position,
        expected: suffix,
    })?;

    token
        .strip_suffix(suffix)
        .ok_or_else(|| RunbenchError::UnexpectedToken {
            position,
            token: token.to_string(),
            expected: suffix,
        })
}
