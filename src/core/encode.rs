use tracing::trace;

use crate::core::symbols::descending;
use crate::error::{Error, Result};

/// Largest value `encode` accepts. Past 3999 every extra thousand is one more
/// `M`, so this caps the output at a thousand `M`s plus the canonical tail.
pub const MAX_VALUE: i64 = 1_000_000;

/// Render a positive integer as its minimal Roman numeral.
///
/// Greedy largest-first subtraction over the symbol table. The subtractive
/// pairs in the table make the greedy result the shortest form, so no search
/// is needed. Values above 3999 are written with repeated `M`; values outside
/// `1..=MAX_VALUE` are rejected with [`Error::InvalidValue`].
pub fn encode(value: i64) -> Result<String> {
    if !(1..=MAX_VALUE).contains(&value) {
        return Err(Error::InvalidValue { value });
    }

    let mut numeral = String::with_capacity((value / 1000) as usize + 15);
    let mut remaining = value;
    for symbol in descending() {
        while remaining >= symbol.value {
            numeral.push_str(symbol.token);
            remaining -= symbol.value;
        }
        if remaining == 0 {
            break;
        }
    }

    trace!("encoded {} -> {}", value, numeral);
    Ok(numeral)
}
