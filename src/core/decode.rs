use tracing::trace;

use crate::core::symbols::{descending, is_roman_letter};
use crate::error::{Error, Result};

/// Decode a (not necessarily minimal) Roman numeral into its value.
///
/// Tokens are matched greedily from the largest table entry down: while the
/// remaining input starts with the current candidate it is consumed, otherwise
/// the candidate steps to the next smaller entry. The candidate never moves
/// back up, so the input must list its tokens in non-increasing order.
///
/// Empty input, lowercase letters, and anything outside `IVXLCDM` are
/// rejected with [`Error::InvalidNumeral`], as is input left over once every
/// candidate has been tried.
pub fn decode(numeral: &str) -> Result<i64> {
    if numeral.is_empty() {
        return Err(Error::invalid_numeral(numeral, 0));
    }
    if let Some(position) = numeral.find(|c: char| !is_roman_letter(c)) {
        return Err(Error::invalid_numeral(numeral, position));
    }

    let mut value = 0i64;
    let mut cursor = 0usize;
    let mut candidates = descending().peekable();

    while cursor < numeral.len() {
        let Some(symbol) = candidates.peek() else {
            break;
        };
        if numeral[cursor..].starts_with(symbol.token) {
            cursor += symbol.token.len();
            value += symbol.value;
        } else {
            candidates.next();
        }
    }

    if cursor < numeral.len() {
        return Err(Error::invalid_numeral(numeral, cursor));
    }

    trace!("decoded {} -> {}", numeral, value);
    Ok(value)
}
