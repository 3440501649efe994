use crate::iban::validate;
use crate::models::{IbanCandidate, IbanOutcome};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct BatchReport {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

/// Reads candidate rows from `input` (an `iban` column), validates each and
/// writes `iban,valid` outcome rows to `output`. Validation itself never
/// fails; the `Err` side only carries I/O and CSV errors.
pub fn validate_csv(input: &Path, output: &Path) -> Result<BatchReport, String> {
    let mut reader = csv::Reader::from_path(input).map_err(|err| err.to_string())?;
    let mut writer = csv::Writer::from_path(output).map_err(|err| err.to_string())?;

    let mut total = 0usize;
    let mut valid_count = 0usize;

    for result in reader.deserialize() {
        let candidate: IbanCandidate = result.map_err(|err| err.to_string())?;
        let iban = candidate.iban.unwrap_or_default();
        let valid = validate(&iban);

        total += 1;
        if valid {
            valid_count += 1;
        }

        writer
            .serialize(IbanOutcome { iban, valid })
            .map_err(|err| err.to_string())?;
    }
    writer.flush().map_err(|err| err.to_string())?;

    Ok(BatchReport {
        total,
        valid: valid_count,
        invalid: total - valid_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("iban-check-{}-{}", std::process::id(), name))
    }

    #[test]
    fn batch_validates_and_counts() {
        let input = temp_path("in.csv");
        let output = temp_path("out.csv");
        fs::write(
            &input,
            "iban\nDE89370400440532013000\nDE89 3704 0044 0532 0130 00\nZZ89370400440532013000\n\"\"\n",
        )
        .unwrap();

        let report = validate_csv(&input, &output).unwrap();
        assert_eq!(report.total, 4);
        assert_eq!(report.valid, 2);
        assert_eq!(report.invalid, 2);

        let written = fs::read_to_string(&output).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("iban,valid"));
        assert_eq!(lines.next(), Some("DE89370400440532013000,true"));
        assert_eq!(lines.next(), Some("DE89 3704 0044 0532 0130 00,true"));
        assert_eq!(lines.next(), Some("ZZ89370400440532013000,false"));
        assert_eq!(lines.next(), Some(",false"));

        let _ = fs::remove_file(&input);
        let _ = fs::remove_file(&output);
    }

    #[test]
    fn missing_input_is_an_error() {
        let input = temp_path("does-not-exist.csv");
        let output = temp_path("unused.csv");
        assert!(validate_csv(&input, &output).is_err());
    }
}
