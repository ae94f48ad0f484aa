#![doc = r#"
numerus — Roman numeral decoding, minimal-form encoding, and savings reports.

This crate parses Roman numerals written in valid but not necessarily minimal
form (`"VIIIIIIIIIII"`), renders integers back into their shortest form
(`"XVI"`), and measures how many characters a list of numerals would save if
every entry were rewritten minimally. It powers the `numerus` CLI and can be
embedded in your own Rust applications.

Add dependency
--------------
```toml
[dependencies]
numerus = "0.1"
```

Quick start: convert single values
----------------------------------
```rust
use numerus::{decode, encode, minimize};

fn main() -> numerus::Result<()> {
    assert_eq!(decode("MCMXCIV")?, 1994);
    assert_eq!(encode(16)?, "XVI");
    assert_eq!(minimize("VIIIIIIIIIII")?, "XVI");
    Ok(())
}
```

Scan a file of numerals
-----------------------
```rust,no_run
use std::path::Path;
use numerus::{savings_from_path, InvalidLinePolicy, SavingsParams};

fn main() -> numerus::Result<()> {
    let params = SavingsParams {
        on_invalid: InvalidLinePolicy::Skip,
        ..SavingsParams::default()
    };

    let report = savings_from_path(Path::new("roman.txt"), &params)?;
    println!("saved={} processed={} errors={}", report.saved, report.processed, report.errors);
    Ok(())
}
```

Error handling
--------------
All public functions return `numerus::Result<T>`; match on `numerus::Error` to
handle specific cases.

```rust
use numerus::{decode, encode, Error};

match decode("ABC") {
    Err(Error::InvalidNumeral { position, .. }) => assert_eq!(position, 0),
    other => panic!("unexpected: {other:?}"),
}
assert!(matches!(encode(0), Err(Error::InvalidValue { value: 0 })));
```

Useful modules
--------------
- [`api`] — high-level entry points and `SavingsReport`.
- [`core`] — the symbol table, decoder, encoder, and scan parameters.
- [`types`] — `OutputFormat` and `InvalidLinePolicy`.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::SavingsParams;
pub use crate::core::symbols::{SYMBOLS, Symbol};
pub use error::{Error, Result};
pub use types::{InvalidLinePolicy, OutputFormat};

// Conversions
pub use crate::core::{MAX_VALUE, decode, encode};

// High-level API re-exports
pub use api::{
    InvalidLine, SavingsReport, is_minimal, line_savings, minimize, report_to_json,
    savings_from_lines, savings_from_path, savings_from_reader,
};
