//! Tests for the parameter text codec

use super::*;
use crate::error::SpinsolveError;

const ACQU_PAR: &str = r#"Solvent                   = "CDCl3"
b1Freq                    = 43.3808
dwellTime                 = 0.2
nrPnts                    = 16384
rxChannel                 = "1H"
graphTitle                = "1D-1H-"StandardScan""
startTime                 = "2023-01-05T10:22:11.000""#;

#[test]
fn test_parse_typical_file() {
    let params = parse_parameters(ACQU_PAR).unwrap();

    assert_eq!(params.len(), 7);
    assert_eq!(params.get_text("Solvent"), Some("CDCl3"));
    assert_eq!(params.get_number("b1Freq"), Some(43.3808));
    assert_eq!(params.get_number("nrPnts"), Some(16384.0));
    assert_eq!(params.get_text("graphTitle"), Some("1D-1H-\"StandardScan\""));
    assert_eq!(params.get_text("startTime"), Some("2023-01-05T10:22:11.000"));
    assert_eq!(
        params.keys().collect::<Vec<_>>(),
        vec!["Solvent", "b1Freq", "dwellTime", "nrPnts", "rxChannel", "graphTitle", "startTime"]
    );
}

#[test]
fn test_parse_value_typing() {
    let params = parse_parameters("a = \"abc\"\nb = 3.14\nc = notanumber").unwrap();
    assert_eq!(params.get("a"), Some(&ParamValue::Text("abc".into())));
    assert_eq!(params.get("b"), Some(&ParamValue::Number(3.14)));
    assert_eq!(params.get("c"), Some(&ParamValue::Text("notanumber".into())));
}

#[test]
fn test_parse_stops_at_blank_line() {
    let params = parse_parameters("a = 1\nb = 2\n\nc = 3\nd = 4").unwrap();
    assert_eq!(params.keys().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_whitespace_only_line_is_blank() {
    let params = parse_parameters("a = 1\n   \t\nb = 2").unwrap();
    assert_eq!(params.len(), 1);
}

#[test]
fn test_lines_after_blank_are_not_validated() {
    let params = parse_parameters("a = 1\n\nthis line has no separator").unwrap();
    assert_eq!(params.len(), 1);
}

#[test]
fn test_parse_crlf() {
    let params = parse_parameters("a = 1\r\nb = \"x\"\r\n").unwrap();
    assert_eq!(params.get_number("a"), Some(1.0));
    assert_eq!(params.get_text("b"), Some("x"));
}

#[test]
fn test_parse_missing_separator() {
    let err = parse_parameters("a = 1\nb = 2\nbroken line\nc = 3").unwrap_err();
    match err {
        SpinsolveError::MalformedParameterLine { line, content } => {
            assert_eq!(line, 3);
            assert_eq!(content, "broken line");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_parse_first_equals_separates() {
    let params = parse_parameters("Options = Scan(Mode=Fast)").unwrap();
    assert_eq!(params.get_text("Options"), Some("Scan(Mode=Fast)"));
}

#[test]
fn test_parse_empty_input() {
    assert!(parse_parameters("").unwrap().is_empty());
}

#[test]
fn test_duplicate_key_last_wins() {
    let params = parse_parameters("X = 1\nX = 2").unwrap();
    assert_eq!(params.len(), 1);
    assert_eq!(params.get_number("X"), Some(2.0));
}

#[test]
fn test_format_layout() {
    let mut params = ParameterMap::new();
    params.insert("nrPnts", 16384.0);
    params.insert("rxChannel", "1H");
    params.insert("aVeryLongParameterNameIndeed", 0.5);

    let text = format_parameters(&params);
    assert_eq!(
        text,
        "nrPnts                    = 16384\n\
         rxChannel                 = 1H\n\
         aVeryLongParameterNameIndeed = 0.5"
    );
    assert!(!text.ends_with('\n'));
}

#[test]
fn test_format_empty() {
    assert_eq!(format_parameters(&ParameterMap::new()), "");
}

#[test]
fn test_format_does_not_requote_strings() {
    let params: ParameterMap = [("Solvent", "CDCl3")].into_iter().collect();
    let reparsed = parse_parameters(&format_parameters(&params)).unwrap();
    // Unquoted on disk, so it comes back as bare text
    assert_eq!(reparsed.get_text("Solvent"), Some("CDCl3"));

    let params: ParameterMap = [("code", "42")].into_iter().collect();
    let reparsed = parse_parameters(&format_parameters(&params)).unwrap();
    assert_eq!(reparsed.get_number("code"), Some(42.0));
}

#[test]
fn test_numeric_roundtrip() {
    let params: ParameterMap = [("b1Freq", 43.3808), ("acqDelay", 1e-7), ("rxGain", -3.0)]
        .into_iter()
        .collect();
    let reparsed = parse_parameters(&format_parameters(&params)).unwrap();
    assert_eq!(reparsed, params);
}
