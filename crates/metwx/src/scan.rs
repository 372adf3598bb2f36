//! Report tokenization

use crate::report::DecodeErr;

/// Remarks section marker
const REMARKS_MARKER: &str = "RMK";

/// A report split into structural tokens and a verbatim remainder
///
/// Splitting is on runs of whitespace, so multi-line TAF blocks
/// tokenize the same as single-line reports. Everything after the
/// `RMK` marker is free text: it is rejoined into a single string
/// and never handed to the group classifiers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Scan<'a> {
    /// Structural tokens, in report order
    pub tokens: Vec<&'a str>,
    /// Remarks remainder, whitespace-collapsed, without the marker
    pub remarks: Option<String>,
}

/// Split a raw report into tokens and the remarks remainder
///
/// The only fatal condition here is an input with no tokens at all.
pub(crate) fn scan(raw: &str) -> Result<Scan<'_>, DecodeErr> {
    let mut tokens: Vec<&str> = Vec::new();
    let mut remainder: Vec<&str> = Vec::new();
    let mut in_remarks = false;

    for token in raw.split_whitespace() {
        if in_remarks {
            remainder.push(token);
        } else if token == REMARKS_MARKER {
            in_remarks = true;
        } else {
            tokens.push(token);
        }
    }

    if tokens.is_empty() && remainder.is_empty() {
        return Err(DecodeErr::EmptyReport);
    }

    let remarks = if remainder.is_empty() {
        None
    } else {
        Some(remainder.join(" "))
    };

    Ok(Scan { tokens, remarks })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_plain() {
        let scan = scan("WIII 010400Z 22003KT 8000").unwrap();
        assert_eq!(vec!["WIII", "010400Z", "22003KT", "8000"], scan.tokens);
        assert_eq!(None, scan.remarks);
    }

    #[test]
    fn test_scan_remarks() {
        let scan = scan("KSFO 011256Z 00000KT 9999 CLR 15/12 A3001 RMK AO2  SLP162").unwrap();
        assert_eq!(
            vec!["KSFO", "011256Z", "00000KT", "9999", "CLR", "15/12", "A3001"],
            scan.tokens
        );
        // whitespace collapsed, marker dropped, text otherwise verbatim
        assert_eq!(Some("AO2 SLP162".to_owned()), scan.remarks);
    }

    #[test]
    fn test_scan_multiline() {
        let scan = scan("TAF WATT 010500Z 0106/0206 10012KT 9999 SCT018\n    TEMPO 0107/0110 12015G25KT").unwrap();
        assert_eq!(10, scan.tokens.len());
        assert_eq!(Some(&"TEMPO"), scan.tokens.get(7));
    }

    #[test]
    fn test_scan_empty() {
        assert_eq!(Err(DecodeErr::EmptyReport), scan(""));
        assert_eq!(Err(DecodeErr::EmptyReport), scan("   \n\t "));

        // a lone marker leaves no tokens but is not empty input;
        // the assembler reports the missing mandatory groups
        let scan = scan("RMK AO2").unwrap();
        assert!(scan.tokens.is_empty());
        assert_eq!(Some("AO2".to_owned()), scan.remarks);
    }
}
