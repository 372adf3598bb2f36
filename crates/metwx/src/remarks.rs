//! # Remark tokens known to `metwx`
//!
//! | Token    | Gloss                                            |
//! |----------|--------------------------------------------------|
//! | `$`      | station requires maintenance                     |
//! | `AO1`    | automated station without precipitation sensor   |
//! | `AO2`    | automated station with precipitation sensor      |
//! | `FROPA`  | frontal passage                                  |
//! | `FZRANO` | freezing rain information not available          |
//! | `NOSIG`  | no significant change expected                   |
//! | `PNO`    | precipitation amount not available               |
//! | `PRESFR` | pressure falling rapidly                         |
//! | `PRESRR` | pressure rising rapidly                          |
//! | `PWINO`  | present weather sensor not available             |
//! | `RVRNO`  | runway visual range not available                |
//! | `SLPNO`  | sea-level pressure not available                 |
//! | `TSNO`   | thunderstorm information not available           |
//! | `VIRGA`  | precipitation not reaching the ground            |
//! | `SLPppp` | sea-level pressure group                         |
//! | `Txxxx…` | hourly temperature and dew point group           |
//!
//! The remarks section of a report is free text and is always kept
//! verbatim in the decoded model. This module only offers a
//! best-effort, token-by-token gloss for display purposes.
//!
//! ## See Also
//!
//! * [`Observation::remarks`](crate::Observation#structfield.remarks)

use phf::phf_map;

/// Glossary of exact-match remark tokens.
static GLOSSARY: phf::Map<&'static str, &'static str> = phf_map! {
    "$" => "station requires maintenance",
    "AO1" => "automated station without precipitation sensor",
    "AO2" => "automated station with precipitation sensor",
    "FROPA" => "frontal passage",
    "FZRANO" => "freezing rain information not available",
    "NOSIG" => "no significant change expected",
    "PNO" => "precipitation amount not available",
    "PRESFR" => "pressure falling rapidly",
    "PRESRR" => "pressure rising rapidly",
    "PWINO" => "present weather sensor not available",
    "RVRNO" => "runway visual range not available",
    "SLPNO" => "sea-level pressure not available",
    "TSNO" => "thunderstorm information not available",
    "VIRGA" => "precipitation not reaching the ground",
};

/// Look up a best-effort gloss for a single remark token
///
/// Returns `None` for tokens outside the glossary. The caller keeps
/// the verbatim token either way.
///
/// ```
/// use metwx::remarks::gloss;
///
/// assert_eq!(Some("frontal passage"), gloss("FROPA"));
/// assert_eq!(Some("sea-level pressure group"), gloss("SLP210"));
/// assert_eq!(None, gloss("K5SM"));
/// ```
pub fn gloss(token: &str) -> Option<&'static str> {
    if let Some(text) = GLOSSARY.get(token) {
        return Some(text);
    }

    // value-carrying groups match on shape rather than exact text
    if token.len() == 6 && token.starts_with("SLP") && is_digits(&token[3..]) {
        Some("sea-level pressure group")
    } else if token.len() == 9 && token.starts_with('T') && is_digits(&token[1..]) {
        Some("hourly temperature and dew point group")
    } else {
        None
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
