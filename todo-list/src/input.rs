use std::io::{BufRead, Read};
use std::str::FromStr;
use thiserror::Error;

/// Longest line accepted for a numeric entry, in characters.
pub const NUMBER_MAX_LEN: usize = 32;

const MAX_UTF8_CHAR_LEN: usize = 4;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    InvalidNumber(String),
    #[error("input ended")]
    Eof,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reads one line and strips its line terminator.
///
/// At most enough bytes for `max_chars` characters are kept. Anything past that is
/// consumed up to the end of the line and thrown away.
pub fn read_line<R: BufRead>(reader: &mut R, max_chars: usize) -> Result<String, InputError> {
    let limit = (max_chars * MAX_UTF8_CHAR_LEN) as u64;
    let mut bytes = Vec::new();
    let read = reader.by_ref().take(limit).read_until(b'\n', &mut bytes)?;
    if read as u64 == limit && bytes.last() != Some(&b'\n') {
        reader.skip_until(b'\n')?;
    } else if read == 0 {
        return Err(InputError::Eof);
    }

    while matches!(bytes.last(), Some(b'\n' | b'\r')) {
        bytes.pop();
    }
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads lines until one is not blank and parses it as a number.
///
/// The whole line is consumed either way, so a rejected entry never leaks into the
/// next prompt.
pub fn read_number<R: BufRead, N: FromStr>(reader: &mut R) -> Result<N, InputError> {
    loop {
        let line = read_line(reader, NUMBER_MAX_LEN)?;
        let entry = line.trim();
        if entry.is_empty() {
            continue;
        }
        return entry
            .parse()
            .map_err(|_| InputError::InvalidNumber(entry.to_string()));
    }
}
