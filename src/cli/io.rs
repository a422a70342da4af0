//! JSON I/O handling for the CLI
//!
//! - Input: single JSON object (stdin)
//! - Output: single JSON line (stdout), nothing else on that stream

use std::io::{Read, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::{CliError, CliResult};

/// Read one JSON request from a reader
pub fn read_request_from<T: DeserializeOwned, R: Read>(reader: &mut R) -> CliResult<T> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;

    if content.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    Ok(serde_json::from_str(&content)?)
}

/// Write a success response as one JSON line
pub fn write_response_to<T: Serialize, W: Write>(writer: &mut W, data: &T) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });
    write_line(writer, &response)
}

/// Write an error response as one JSON line
pub fn write_error_to<W: Write>(writer: &mut W, code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });
    write_line(writer, &response)
}

fn write_line<W: Write>(writer: &mut W, value: &serde_json::Value) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureVector;
    use std::io::Cursor;

    #[test]
    fn test_read_multiline_request() {
        let input = "{\n\"ExternalRiskEstimate\": 90, \"NumInqLast6M\": 0,\n\
                     \"NetFractionRevolvingBurden\": 10, \"NumSatisfactoryTrades\": 25,\n\
                     \"AverageMInFile\": 120}\n";
        let v: FeatureVector = read_request_from(&mut Cursor::new(input)).unwrap();
        assert_eq!(v.to_array(), [90.0, 0.0, 10.0, 25.0, 120.0]);
    }

    #[test]
    fn test_empty_input() {
        let err = read_request_from::<FeatureVector, _>(&mut Cursor::new("  \n")).unwrap_err();
        assert_eq!(err.message(), "Empty input");
    }

    #[test]
    fn test_error_response_is_one_line() {
        let mut out = Vec::new();
        write_error_to(&mut out, "HELOC_MODEL_SCHEMA_MISMATCH", "bad\ncolumns").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["status"], "error");
        assert_eq!(parsed["message"], "bad\ncolumns");
    }

    #[test]
    fn test_missing_field() {
        let input = r#"{"ExternalRiskEstimate": 90}"#;
        assert!(read_request_from::<FeatureVector, _>(&mut Cursor::new(input)).is_err());
    }
}
