//! Report assembly
//!
//! The assembler drives the group classifiers across a report's
//! tokens in the grammar's expected order. Each report kind has a
//! fixed sequence of slots; a token is tried against the classifier
//! for the current slot and then each later slot, so optional groups
//! are skipped without consuming anything. Repeating groups (weather,
//! clouds) hold the slot pointer in place.
//!
//! ```txt
//! METAR: [METAR|SPECI] station time [AUTO] wind [range] vis
//!        [min-vis] wx* cloud* temp pressure [NOSIG] [RMK …]
//! TAF:   [TAF] [AMD|COR] station time validity wind vis wx* cloud*
//!        (BECMG|TEMPO|PROBnn …)*  [TXnn/…Z] [TNnn/…Z]
//! ```
//!
//! Decoding is all-or-nothing: a fatal condition yields no partial
//! object. Tokens from dialects the classifiers do not cover are
//! collected verbatim instead of failing the report.

#[cfg(not(test))]
use log::debug;
#[cfg(test)]
use std::println as debug;

use crate::group;
use crate::report::{
    Bulletin, DecodeErr, Forecast, GroupKind, Observation, Visibility, WindDirection,
};
use crate::scan;
use crate::trend;

/// Decode either kind of bulletin
///
/// A bulletin whose first token is the literal `TAF` decodes as a
/// [`Forecast`]; anything else decodes as an [`Observation`].
///
/// ```
/// use metwx::{decode, Bulletin};
///
/// let bulletin = decode("WIII 010400Z 22003KT 8000 -RA SCT020 27/27 Q1010").unwrap();
/// assert!(matches!(bulletin, Bulletin::Metar(_)));
///
/// let bulletin = decode("TAF WATT 010500Z 0106/0206 10012KT 9999 SCT018").unwrap();
/// assert!(matches!(bulletin, Bulletin::Taf(_)));
/// ```
pub fn decode(raw: &str) -> Result<Bulletin, DecodeErr> {
    match raw.split_whitespace().next() {
        None => Err(DecodeErr::EmptyReport),
        Some("TAF") => Ok(Bulletin::Taf(decode_taf(raw)?)),
        Some(_) => Ok(Bulletin::Metar(decode_metar(raw)?)),
    }
}

// METAR slot order
const M_STATION: usize = 0;
const M_TIME: usize = 1;
const M_WIND: usize = 2;
const M_WIND_RANGE: usize = 3;
const M_VIS: usize = 4;
const M_MIN_VIS: usize = 5;
const M_WEATHER: usize = 6;
const M_CLOUD: usize = 7;
const M_TEMP: usize = 8;
const M_PRESSURE: usize = 9;

/// Decode a METAR surface observation
///
/// ```
/// use metwx::decode_metar;
///
/// let obs = decode_metar("WIII 010400Z 22003KT 8000 -RA SCT020 27/27 Q1010").unwrap();
/// assert_eq!("WIII", obs.station.as_str());
/// assert_eq!(Some(27), obs.temperature);
/// ```
pub fn decode_metar(raw: &str) -> Result<Observation, DecodeErr> {
    let scan = scan::scan(raw)?;

    let mut station = None;
    let mut observed = None;
    let mut auto = false;
    let mut wind = None;
    let mut visibility = None;
    let mut min_visibility = None;
    let mut cavok = false;
    let mut weather = Vec::new();
    let mut clouds = Vec::new();
    let mut temperature = None;
    let mut dew_point = None;
    let mut pressure = None;
    let mut nosig = false;
    let mut unrecognized = Vec::new();

    let mut slot = M_STATION;
    for token in &scan.tokens {
        match *token {
            "METAR" | "SPECI" => continue,
            "AUTO" => {
                auto = true;
                continue;
            }
            "NOSIG" => {
                nosig = true;
                continue;
            }
            "CAVOK" => {
                cavok = true;
                visibility.get_or_insert(Visibility::ten_km_or_more());
                slot = slot.max(M_WEATHER);
                continue;
            }
            _ => {}
        }

        if slot <= M_STATION {
            if let Some(found) = group::station(token) {
                station = Some(found);
                slot = M_TIME;
                continue;
            }
        }
        if slot <= M_TIME {
            if let Some(found) = group::day_time(token)? {
                observed = Some(found);
                slot = M_WIND;
                continue;
            }
        }
        if slot <= M_WIND {
            if let Some(found) = group::wind(token)? {
                wind = Some(found);
                slot = M_WIND_RANGE;
                continue;
            }
        }
        if slot <= M_WIND_RANGE {
            // only valid directly after a wind group with a concrete bearing
            if let Some(w) = wind
                .as_mut()
                .filter(|w| matches!(w.direction, WindDirection::Degrees(_)))
            {
                if let Some(range) = group::wind_range(token)? {
                    w.range = Some(range);
                    slot = M_VIS;
                    continue;
                }
            }
        }
        if slot <= M_VIS {
            if let Some(found) = group::visibility(token) {
                visibility = Some(found);
                slot = M_MIN_VIS;
                continue;
            }
        }
        if slot <= M_MIN_VIS {
            if let Some(found) = group::min_visibility(token) {
                min_visibility = Some(found);
                slot = M_WEATHER;
                continue;
            }
        }
        if slot <= M_WEATHER {
            if let Some(found) = group::weather(token) {
                weather.push(found);
                slot = M_WEATHER;
                continue;
            }
        }
        if slot <= M_CLOUD {
            if let Some(found) = group::cloud(token) {
                clouds.push(found);
                slot = M_CLOUD;
                continue;
            }
        }
        if slot <= M_TEMP {
            if let Some((temp, dew)) = group::temperature(token) {
                temperature = Some(temp);
                dew_point = dew;
                slot = M_PRESSURE;
                continue;
            }
        }
        if slot <= M_PRESSURE {
            if let Some(found) = group::pressure(token) {
                pressure = Some(found);
                slot = M_PRESSURE + 1;
                continue;
            }
        }

        debug!("observation: unrecognized token {:?}", token);
        unrecognized.push((*token).to_owned());
    }

    Ok(Observation {
        station: station.ok_or(DecodeErr::IncompleteReport(GroupKind::Station))?,
        observed: observed.ok_or(DecodeErr::IncompleteReport(GroupKind::Timestamp))?,
        auto,
        wind: wind.ok_or(DecodeErr::IncompleteReport(GroupKind::Wind))?,
        visibility: visibility.ok_or(DecodeErr::IncompleteReport(GroupKind::Visibility))?,
        min_visibility,
        cavok,
        weather,
        clouds,
        temperature,
        dew_point,
        pressure,
        nosig,
        remarks: scan.remarks,
        unrecognized,
    })
}

// TAF base-line slot order
const T_STATION: usize = 0;
const T_TIME: usize = 1;
const T_VALIDITY: usize = 2;
const T_WIND: usize = 3;
const T_VIS: usize = 4;
const T_WEATHER: usize = 5;
const T_CLOUD: usize = 6;

/// Decode a TAF terminal forecast
///
/// The base line is assembled first; every token from the first
/// change-group header onward is handed to the change-group
/// processor, preserving source order.
///
/// ```
/// use metwx::decode_taf;
///
/// let fc = decode_taf(
///     "TAF WATT 010500Z 0106/0206 10012KT 9999 SCT018\n    TEMPO 0107/0110 12015G25KT",
/// )
/// .unwrap();
/// assert_eq!("WATT", fc.station.as_str());
/// assert_eq!(1, fc.changes.len());
/// ```
pub fn decode_taf(raw: &str) -> Result<Forecast, DecodeErr> {
    let scan = scan::scan(raw)?;

    let split = scan
        .tokens
        .iter()
        .position(|t| trend::change_header(t).is_some())
        .unwrap_or(scan.tokens.len());
    let (base, rest) = scan.tokens.split_at(split);

    let mut station = None;
    let mut issued = None;
    let mut amended = false;
    let mut corrected = false;
    let mut validity = None;
    let mut wind = None;
    let mut visibility = None;
    let mut cavok = false;
    let mut weather = Vec::new();
    let mut clouds = Vec::new();
    let mut max_temperature = None;
    let mut min_temperature = None;
    let mut unrecognized = Vec::new();

    let mut slot = T_STATION;
    for token in base {
        match *token {
            "TAF" => continue,
            "AMD" => {
                amended = true;
                continue;
            }
            "COR" => {
                corrected = true;
                continue;
            }
            "CAVOK" => {
                cavok = true;
                visibility.get_or_insert(Visibility::ten_km_or_more());
                slot = slot.max(T_WEATHER);
                continue;
            }
            _ => {}
        }

        // forecast temperature extremes may trail anywhere
        if let Some((extreme, temp)) = group::taf_temperature(token)? {
            match extreme {
                group::Extreme::Max => max_temperature = Some(temp),
                group::Extreme::Min => min_temperature = Some(temp),
            }
            continue;
        }

        if slot <= T_STATION {
            if let Some(found) = group::station(token) {
                station = Some(found);
                slot = T_TIME;
                continue;
            }
        }
        if slot <= T_TIME {
            if let Some(found) = group::day_time(token)? {
                issued = Some(found);
                slot = T_VALIDITY;
                continue;
            }
        }
        if slot <= T_VALIDITY {
            if let Some(found) = group::validity(token)? {
                validity = Some(found);
                slot = T_WIND;
                continue;
            }
        }
        if slot <= T_WIND {
            if let Some(found) = group::wind(token)? {
                wind = Some(found);
                slot = T_VIS;
                continue;
            }
        }
        if slot <= T_VIS {
            if let Some(found) = group::visibility(token) {
                visibility = Some(found);
                slot = T_WEATHER;
                continue;
            }
        }
        if slot <= T_WEATHER {
            if let Some(found) = group::weather(token) {
                weather.push(found);
                slot = T_WEATHER;
                continue;
            }
        }
        if slot <= T_CLOUD {
            if let Some(found) = group::cloud(token) {
                clouds.push(found);
                slot = T_CLOUD;
                continue;
            }
        }

        debug!("forecast: unrecognized token {:?}", token);
        unrecognized.push((*token).to_owned());
    }

    let mut changes = Vec::new();
    if !rest.is_empty() {
        let trend = trend::process(rest)?;
        changes = trend.changes;
        max_temperature = trend.max_temperature.or(max_temperature);
        min_temperature = trend.min_temperature.or(min_temperature);
        unrecognized.extend(trend.unrecognized);
    }

    Ok(Forecast {
        station: station.ok_or(DecodeErr::IncompleteReport(GroupKind::Station))?,
        issued: issued.ok_or(DecodeErr::IncompleteReport(GroupKind::Timestamp))?,
        amended,
        corrected,
        validity: validity.ok_or(DecodeErr::IncompleteReport(GroupKind::Validity))?,
        wind: wind.ok_or(DecodeErr::IncompleteReport(GroupKind::Wind))?,
        visibility: visibility.ok_or(DecodeErr::IncompleteReport(GroupKind::Visibility))?,
        cavok,
        weather,
        clouds,
        max_temperature,
        min_temperature,
        changes,
        remarks: scan.remarks,
        unrecognized,
    })
}
