/// One canonical Roman token and the value it stands for.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Symbol {
    pub token: &'static str,
    pub value: i64,
}

const fn sym(token: &'static str, value: i64) -> Symbol {
    Symbol { token, value }
}

/// The thirteen canonical tokens, ascending by value.
pub const SYMBOLS: [Symbol; 13] = [
    sym("I", 1),
    sym("IV", 4),
    sym("V", 5),
    sym("IX", 9),
    sym("X", 10),
    sym("XL", 40),
    sym("L", 50),
    sym("XC", 90),
    sym("C", 100),
    sym("CD", 400),
    sym("D", 500),
    sym("CM", 900),
    sym("M", 1000),
];

/// Table entries from the largest value down, the order both greedy scans use.
pub fn descending() -> impl Iterator<Item = &'static Symbol> {
    SYMBOLS.iter().rev()
}

/// True if `c` is one of the seven Roman letters.
pub fn is_roman_letter(c: char) -> bool {
    matches!(c, 'I' | 'V' | 'X' | 'L' | 'C' | 'D' | 'M')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn values_strictly_increase() {
        assert!(SYMBOLS.windows(2).all(|w| w[0].value < w[1].value));
    }

    #[test]
    fn tokens_are_unique_and_roman() {
        let tokens: HashSet<_> = SYMBOLS.iter().map(|s| s.token).collect();
        assert_eq!(tokens.len(), SYMBOLS.len());
        assert!(
            SYMBOLS
                .iter()
                .all(|s| !s.token.is_empty() && s.token.chars().all(is_roman_letter))
        );
    }

    #[test]
    fn descending_starts_at_thousand() {
        let first = descending().next().map(|s| s.value);
        let last = descending().last().map(|s| s.value);
        assert_eq!(first, Some(1000));
        assert_eq!(last, Some(1));
    }
}
