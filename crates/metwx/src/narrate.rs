//! Narrative rendering
//!
//! Pure transform from a decoded report to labeled lines of prose.
//! The layout is stable: optional fields that were not reported
//! still get a line with an explicit placeholder, so consumers can
//! rely on a fixed field set. Rendering never fails; any
//! structurally valid report, however sparse, renders to text.

use crate::remarks;
use crate::report::{ChangeGroup, ChangeKind, Forecast, Observation};

const NOT_REPORTED: &str = "not reported";
const NO_SIGNIFICANT_WEATHER: &str = "no significant weather";
const NO_CLOUDS: &str = "no clouds";

/// Render an observation as labeled narrative lines
///
/// ```
/// use metwx::{decode_metar, observation_lines};
///
/// let obs = decode_metar("WIII 010400Z 22003KT 8000 -RA SCT020 27/27 Q1010").unwrap();
/// let lines = observation_lines(&obs);
/// assert_eq!("Station: WIII", lines[0]);
/// assert_eq!("Wind: from 220° at 3 kt", lines[2]);
/// ```
pub fn observation_lines(obs: &Observation) -> Vec<String> {
    let mut lines = Vec::with_capacity(11);

    lines.push(format!("Station: {}", obs.station));

    let mut observed = format!("Observed: {}", obs.observed);
    if obs.auto {
        observed.push_str(" (automated station)");
    }
    lines.push(observed);

    lines.push(format!("Wind: {}", obs.wind));

    let mut visibility = format!("Visibility: {}", obs.visibility);
    if let Some(min) = obs.min_visibility {
        visibility.push_str(&format!(", minimum {}", min));
    }
    if obs.cavok {
        visibility.push_str(" (CAVOK)");
    }
    lines.push(visibility);

    lines.push(format!("Weather: {}", weather_text(&obs.weather)));
    lines.push(format!("Clouds: {}", clouds_text(&obs.clouds)));

    lines.push(match obs.temperature {
        Some(celsius) => format!("Temperature: {} °C", celsius),
        None => format!("Temperature: {}", NOT_REPORTED),
    });
    lines.push(match obs.dew_point {
        Some(celsius) => format!("Dew point: {} °C", celsius),
        None => format!("Dew point: {}", NOT_REPORTED),
    });
    lines.push(match obs.pressure {
        Some(pressure) => format!("Pressure: {}", pressure),
        None => format!("Pressure: {}", NOT_REPORTED),
    });

    lines.push(if obs.nosig {
        "Trend: no significant change expected".to_owned()
    } else {
        format!("Trend: {}", NOT_REPORTED)
    });

    lines.push(remarks_line(obs.remarks.as_deref()));

    if !obs.unrecognized.is_empty() {
        lines.push(format!(
            "Unrecognized groups: {}",
            obs.unrecognized.join(" ")
        ));
    }

    lines
}

/// Render a forecast as labeled narrative lines
///
/// The base conditions come first, then one block per change entry
/// in original order.
pub fn forecast_lines(fc: &Forecast) -> Vec<String> {
    let mut lines = Vec::with_capacity(10 + 5 * fc.changes.len());

    lines.push(format!("Station: {}", fc.station));

    let mut issued = format!("Issued: {}", fc.issued);
    if fc.amended {
        issued.push_str(" (amended)");
    }
    if fc.corrected {
        issued.push_str(" (corrected)");
    }
    lines.push(issued);

    lines.push(format!("Valid: {}", fc.validity));

    lines.push(format!("Wind: {}", fc.wind));

    let mut visibility = format!("Visibility: {}", fc.visibility);
    if fc.cavok {
        visibility.push_str(" (CAVOK)");
    }
    lines.push(visibility);

    lines.push(format!("Weather: {}", weather_text(&fc.weather)));
    lines.push(format!("Clouds: {}", clouds_text(&fc.clouds)));

    lines.push(match fc.max_temperature {
        Some(temp) => format!("Maximum temperature: {}", temp),
        None => format!("Maximum temperature: {}", NOT_REPORTED),
    });
    lines.push(match fc.min_temperature {
        Some(temp) => format!("Minimum temperature: {}", temp),
        None => format!("Minimum temperature: {}", NOT_REPORTED),
    });

    for change in &fc.changes {
        push_change_lines(&mut lines, change);
    }

    lines.push(remarks_line(fc.remarks.as_deref()));

    if !fc.unrecognized.is_empty() {
        lines.push(format!(
            "Unrecognized groups: {}",
            fc.unrecognized.join(" ")
        ));
    }

    lines
}

// One header line per change entry, then its fields indented.
// Fields the entry does not forecast are unchanged from the base.
fn push_change_lines(lines: &mut Vec<String>, change: &ChangeGroup) {
    let label = match change.kind {
        ChangeKind::Becoming => "Becoming".to_owned(),
        ChangeKind::Temporary => "Temporarily".to_owned(),
        ChangeKind::Probability(percent) => format!("{}% probability", percent),
    };
    lines.push(format!("{} {}:", label, change.validity));

    lines.push(match change.wind {
        Some(wind) => format!("  Wind: {}", wind),
        None => "  Wind: unchanged".to_owned(),
    });

    let mut visibility = match change.visibility {
        Some(vis) => format!("  Visibility: {}", vis),
        None => "  Visibility: unchanged".to_owned(),
    };
    if change.cavok {
        visibility.push_str(" (CAVOK)");
    }
    lines.push(visibility);

    lines.push(if change.no_significant_weather {
        format!("  Weather: {}", NO_SIGNIFICANT_WEATHER)
    } else if change.weather.is_empty() {
        "  Weather: unchanged".to_owned()
    } else {
        format!("  Weather: {}", join_display(&change.weather))
    });

    lines.push(if change.clouds.is_empty() {
        "  Clouds: unchanged".to_owned()
    } else {
        format!("  Clouds: {}", join_display(&change.clouds))
    });
}

fn weather_text(weather: &[crate::report::WeatherCondition]) -> String {
    if weather.is_empty() {
        NO_SIGNIFICANT_WEATHER.to_owned()
    } else {
        join_display(weather)
    }
}

fn clouds_text(clouds: &[crate::report::CloudLayer]) -> String {
    if clouds.is_empty() {
        NO_CLOUDS.to_owned()
    } else {
        join_display(clouds)
    }
}

// Remarks stay verbatim; known tokens get a bracketed gloss appended
fn remarks_line(remarks: Option<&str>) -> String {
    let text = match remarks {
        Some(text) => text,
        None => return "Remarks: none".to_owned(),
    };

    let glosses: Vec<String> = text
        .split_whitespace()
        .filter_map(|token| remarks::gloss(token).map(|gloss| format!("{}: {}", token, gloss)))
        .collect();

    if glosses.is_empty() {
        format!("Remarks: {}", text)
    } else {
        format!("Remarks: {} [{}]", text, glosses.join("; "))
    }
}

fn join_display<T: std::fmt::Display>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    parts.join(", ")
}

impl std::fmt::Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        observation_lines(self).join("\n").fmt(f)
    }
}

impl std::fmt::Display for Forecast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        forecast_lines(self).join("\n").fmt(f)
    }
}

impl std::fmt::Display for crate::report::Bulletin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            crate::report::Bulletin::Metar(obs) => obs.fmt(f),
            crate::report::Bulletin::Taf(fc) => fc.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::decoder::{decode_metar, decode_taf};

    #[test]
    fn test_observation_narrative() {
        let obs = decode_metar("WIII 010400Z 22003KT 8000 -RA SCT020 27/27 Q1010").unwrap();
        let lines = observation_lines(&obs);

        assert_eq!(
            vec![
                "Station: WIII",
                "Observed: day 1 at 04:00 UTC",
                "Wind: from 220° at 3 kt",
                "Visibility: 8000 m",
                "Weather: light rain",
                "Clouds: scattered at 2000 ft",
                "Temperature: 27 °C",
                "Dew point: 27 °C",
                "Pressure: 1010 hPa",
                "Trend: not reported",
                "Remarks: none",
            ],
            lines
        );
    }

    #[test]
    fn test_sparse_observation_placeholders() {
        let obs = decode_metar("WIII 010400Z 00000KT 9999").unwrap();
        let lines = observation_lines(&obs);

        assert!(lines.contains(&"Wind: calm".to_owned()));
        assert!(lines.contains(&"Visibility: 10 km or more".to_owned()));
        assert!(lines.contains(&"Weather: no significant weather".to_owned()));
        assert!(lines.contains(&"Clouds: no clouds".to_owned()));
        assert!(lines.contains(&"Temperature: not reported".to_owned()));
        assert!(lines.contains(&"Dew point: not reported".to_owned()));
        assert!(lines.contains(&"Pressure: not reported".to_owned()));
        assert!(lines.contains(&"Remarks: none".to_owned()));
    }

    #[test]
    fn test_every_field_surfaces_once() {
        // every non-absent input group appears in exactly one line
        let obs = decode_metar(
            "WATT 011330Z AUTO 10012KT 140V170 9999 NCD 29/26 Q1013 NOSIG RMK 52012",
        )
        .unwrap();
        let narrative = observation_lines(&obs).join("\n");

        for needle in [
            "WATT",
            "day 1 at 13:30 UTC",
            "automated station",
            "from 100° at 12 kt",
            "varying between 140° and 170°",
            "10 km or more",
            "no cloud detected",
            "29 °C",
            "26 °C",
            "1013 hPa",
            "no significant change expected",
            "52012",
        ] {
            assert_eq!(
                1,
                narrative.matches(needle).count(),
                "{:?} missing or repeated in {}",
                needle,
                narrative
            );
        }
    }

    #[test]
    fn test_remark_glosses() {
        let obs = decode_metar("KSFO 011256Z 00000KT 9999 CLR 15/12 A3001 RMK AO2 SLP162").unwrap();
        let lines = observation_lines(&obs);

        let remarks = lines.last().unwrap();
        assert!(remarks.starts_with("Remarks: AO2 SLP162 ["));
        assert!(remarks.contains("AO2: automated station with precipitation sensor"));
        assert!(remarks.contains("SLP162: sea-level pressure group"));
    }

    #[test]
    fn test_forecast_narrative() {
        let fc = decode_taf(
            "TAF WATT 010500Z 0106/0206 10012KT 9999 SCT018\n    TEMPO 0107/0110 12015G25KT",
        )
        .unwrap();
        let lines = forecast_lines(&fc);

        assert_eq!("Station: WATT", lines[0]);
        assert_eq!("Issued: day 1 at 05:00 UTC", lines[1]);
        assert_eq!(
            "Valid: from day 1 06:00 until day 2 06:00 UTC",
            lines[2]
        );
        assert_eq!("Wind: from 100° at 12 kt", lines[3]);
        assert_eq!("Visibility: 10 km or more", lines[4]);
        assert_eq!("Weather: no significant weather", lines[5]);
        assert_eq!("Clouds: scattered at 1800 ft", lines[6]);
        assert_eq!("Maximum temperature: not reported", lines[7]);
        assert_eq!("Minimum temperature: not reported", lines[8]);

        assert_eq!(
            "Temporarily from day 1 07:00 until day 1 10:00 UTC:",
            lines[9]
        );
        assert_eq!("  Wind: from 120° at 15 kt, gusting to 25 kt", lines[10]);
        assert_eq!("  Visibility: unchanged", lines[11]);
        assert_eq!("  Weather: unchanged", lines[12]);
        assert_eq!("  Clouds: unchanged", lines[13]);
        assert_eq!("Remarks: none", lines[14]);
    }

    #[test]
    fn test_forecast_change_blocks_in_order() {
        let fc = decode_taf(
            "TAF WIII 282300Z 2900/3006 20005KT 8000 FEW020 SCT021\n\
             BECMG 2904/2906 02010KT BECMG 2916/2918 16005KT 5000 VCTS +DZ\n\
             BECMG 2923/3001 VRB02KT 8000 NSW",
        )
        .unwrap();
        let narrative = forecast_lines(&fc).join("\n");

        let first = narrative
            .find("Becoming from day 29 04:00")
            .expect("first block");
        let second = narrative
            .find("Becoming from day 29 16:00")
            .expect("second block");
        let third = narrative
            .find("Becoming from day 29 23:00")
            .expect("third block");
        assert!(first < second && second < third);

        assert!(narrative.contains("thunderstorm in the vicinity"));
        assert!(narrative.contains("heavy drizzle"));

        // NSW renders as an explicit all-clear, not an omission
        let becmg_nsw = &narrative[third..];
        assert!(becmg_nsw.contains("Weather: no significant weather"));
    }

    #[test]
    fn test_probability_block_label() {
        let fc = decode_taf(
            "TAF WIII 150500Z 1506/1612 17005KT 6000 SCT012\n\
             PROB40 TEMPO 1506/1508 0400 BCFG BKN002",
        )
        .unwrap();
        let lines = forecast_lines(&fc);

        assert!(lines
            .iter()
            .any(|l| l == "40% probability from day 15 06:00 until day 15 08:00 UTC:"));
        assert!(lines.iter().any(|l| l == "  Weather: patches of fog"));
    }

    #[test]
    fn test_labels_are_not_reparsed() {
        // the renderer's labels are plain text: feeding the narrative
        // back through the decoder classifies nothing
        let obs = decode_metar("WIII 010400Z 22003KT 8000 -RA SCT020 27/27 Q1010").unwrap();
        let narrative = observation_lines(&obs).join(" ");

        assert!(decode_metar(&narrative).is_err());
    }

    #[test]
    fn test_display_joins_lines() {
        let obs = decode_metar("WIII 010400Z 22003KT 8000").unwrap();
        let text = format!("{}", obs);
        assert!(text.starts_with("Station: WIII\n"));
        assert!(text.contains("\nWind: from 220° at 3 kt\n"));
    }
}
