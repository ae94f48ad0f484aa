use std::io;
use std::path::Path;

use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use numerus::{
    InvalidLinePolicy, OutputFormat, SavingsParams, SavingsReport, decode, encode, minimize,
    report_to_json, savings_from_path, savings_from_reader,
};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn is_not_found(err: &numerus::Error) -> bool {
    matches!(err, numerus::Error::Io(e) if e.kind() == io::ErrorKind::NotFound)
}

fn resolve_params(args: &CliArgs) -> Result<SavingsParams, AppError> {
    let mut params = match &args.config {
        Some(path) => SavingsParams::from_json_file(path).map_err(|e| {
            if is_not_found(&e) {
                AppError::MissingConfig { path: path.clone() }
            } else {
                e.into()
            }
        })?,
        None => SavingsParams::default(),
    };

    if args.skip_invalid {
        params.on_invalid = InvalidLinePolicy::Skip;
    }
    if args.strict_blank_lines {
        params.skip_blank_lines = false;
    }

    debug!("Resolved savings params: {:?}", params);
    Ok(params)
}

fn render_savings(
    source: &Path,
    report: &SavingsReport,
    format: OutputFormat,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(format!(
            "Number of characters saved by writing Roman numerals in {} in minimal form:\n  {}",
            source.display(),
            report.saved
        )),
        OutputFormat::Json => Ok(report_to_json(report)?),
    }
}

fn run_savings(args: &CliArgs) -> Result<String, AppError> {
    let params = resolve_params(args)?;

    let report = if args.input.as_os_str() == "-" {
        info!("Reading numerals from stdin");
        savings_from_reader(io::stdin().lock(), &params)?
    } else {
        savings_from_path(&args.input, &params).map_err(|e| {
            if is_not_found(&e) {
                AppError::MissingInput {
                    path: args.input.clone(),
                }
            } else {
                e.into()
            }
        })?
    };

    let rendered = render_savings(&args.input, &report, args.format)?;
    if report.errors > 0 {
        // Report is still printed; the exit status flags the skipped lines.
        println!("{}", rendered);
        return Err(AppError::InvalidLines {
            invalid: report.errors,
            lines: report.lines,
        });
    }
    Ok(rendered)
}

fn run_decode(numeral: &str, format: OutputFormat) -> Result<String, AppError> {
    let value = decode(numeral)?;
    Ok(match format {
        OutputFormat::Text => value.to_string(),
        OutputFormat::Json => json!({ "numeral": numeral, "value": value }).to_string(),
    })
}

fn run_encode(value: i64, format: OutputFormat) -> Result<String, AppError> {
    let numeral = encode(value)?;
    Ok(match format {
        OutputFormat::Text => numeral,
        OutputFormat::Json => json!({ "value": value, "numeral": numeral }).to_string(),
    })
}

fn run_minimize(numeral: &str, format: OutputFormat) -> Result<String, AppError> {
    let minimal = minimize(numeral)?;
    let saved = numeral.len() as i64 - minimal.len() as i64;
    Ok(match format {
        OutputFormat::Text => minimal,
        OutputFormat::Json => json!({
            "numeral": numeral,
            "minimal": minimal,
            "saved": saved,
        })
        .to_string(),
    })
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    let output = if let Some(numeral) = args.decode.as_deref() {
        run_decode(numeral, args.format)?
    } else if let Some(value) = args.encode {
        run_encode(value, args.format)?
    } else if let Some(numeral) = args.minimize.as_deref() {
        run_minimize(numeral, args.format)?
    } else {
        run_savings(&args)?
    };

    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn args(argv: &[&str]) -> CliArgs {
        CliArgs::parse_from(std::iter::once("numerus").chain(argv.iter().copied()))
    }

    fn numerals_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn savings_text_output_names_file() {
        let file = numerals_file("IIII\nXVI\nVIIIIIIIIIII\n");
        let path = file.path().to_string_lossy().to_string();
        let out = run_savings(&args(&["--input", path.as_str()])).unwrap();
        assert!(out.starts_with("Number of characters saved"));
        assert!(out.contains(&path));
        assert!(out.ends_with("\n  10"));
    }

    #[test]
    fn savings_json_output() {
        let file = numerals_file("IIII\nXVI\n");
        let path = file.path().to_string_lossy().to_string();
        let out = run_savings(&args(&["--input", path.as_str(), "--format", "json"])).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["saved"], 1);
        assert_eq!(json["lines"], 2);
    }

    #[test]
    fn missing_input_is_reported() {
        let err = run_savings(&args(&["--input", "/nonexistent/roman.txt"])).unwrap_err();
        assert!(matches!(err, AppError::MissingInput { .. }));
    }

    #[test]
    fn missing_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json").to_string_lossy().to_string();
        let err = resolve_params(&args(&["--config", path.as_str()])).unwrap_err();
        assert!(matches!(err, AppError::MissingConfig { .. }));
    }

    #[test]
    fn malformed_config_is_not_reported_missing() {
        let config = numerals_file("{ not json");
        let path = config.path().to_string_lossy().to_string();
        let err = resolve_params(&args(&["--config", path.as_str()])).unwrap_err();
        assert!(matches!(err, AppError::Numerus(numerus::Error::Json(_))));
    }

    #[test]
    fn skip_invalid_flags_bad_lines() {
        let file = numerals_file("IIII\nABC\n");
        let path = file.path().to_string_lossy().to_string();
        let err =
            run_savings(&args(&["--input", path.as_str(), "--skip-invalid"])).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidLines {
                invalid: 1,
                lines: 2
            }
        ));
    }

    #[test]
    fn config_file_sets_policy_and_flags_override() {
        let config = numerals_file(r#"{"on_invalid": "skip", "skip_blank_lines": true}"#);
        let path = config.path().to_string_lossy().to_string();
        let params = resolve_params(&args(&["--config", path.as_str()])).unwrap();
        assert_eq!(params.on_invalid, InvalidLinePolicy::Skip);

        let params =
            resolve_params(&args(&["--config", path.as_str(), "--strict-blank-lines"])).unwrap();
        assert!(!params.skip_blank_lines);
    }

    #[test]
    fn single_value_modes() {
        assert_eq!(run_decode("MCMXCIV", OutputFormat::Text).unwrap(), "1994");
        assert_eq!(run_encode(1994, OutputFormat::Text).unwrap(), "MCMXCIV");
        assert_eq!(run_minimize("VIIIIIIIIIII", OutputFormat::Text).unwrap(), "XVI");
        let json: serde_json::Value =
            serde_json::from_str(&run_minimize("IIII", OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["minimal"], "IV");
        assert_eq!(json["saved"], 1);
    }

    #[test]
    fn negative_encode_is_parsed_and_rejected() {
        let parsed = args(&["--encode", "-5"]);
        assert_eq!(parsed.encode, Some(-5));
        assert!(matches!(
            run_encode(-5, OutputFormat::Text),
            Err(AppError::Numerus(numerus::Error::InvalidValue { value: -5 }))
        ));
    }

    #[test]
    fn huge_encode_is_rejected_without_allocating() {
        let parsed = args(&["--encode", "9223372036854775807"]);
        assert!(matches!(
            run_encode(parsed.encode.unwrap(), OutputFormat::Text),
            Err(AppError::Numerus(numerus::Error::InvalidValue { .. }))
        ));
    }
}
