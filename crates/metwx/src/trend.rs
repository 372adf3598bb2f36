//! Forecast change-group processing
//!
//! A TAF embeds trend blocks after the base forecast: `BECMG`,
//! `TEMPO`, and `PROBnn` headers, each followed by a validity
//! sub-period and the same optional field sequence as the base line.
//! Headers may start a new source line or continue the current one,
//! so blocks are split on header tokens over the flattened token
//! stream. Source order is semantically meaningful (later entries
//! may narrow an earlier window) and is always preserved.

use lazy_static::lazy_static;
#[cfg(not(test))]
use log::debug;
use regex::Regex;
#[cfg(test)]
use std::println as debug;

use crate::group;
use crate::report::{ChangeGroup, ChangeKind, DecodeErr, GroupKind, TafTemperature, Visibility};

/// Change-group fields hoisted out of the trend blocks
///
/// Forecast temperature extremes (`TX`/`TN`) may trail inside the
/// last change block but always describe the whole forecast, so they
/// are returned alongside the change entries rather than inside one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct TrendOutput {
    pub changes: Vec<ChangeGroup>,
    pub max_temperature: Option<TafTemperature>,
    pub min_temperature: Option<TafTemperature>,
    pub unrecognized: Vec<String>,
}

/// Classify a change-group header token
///
/// `PROBnn` carries its probability in percent.
pub(crate) fn change_header(token: &str) -> Option<ChangeKind> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^PROB(\d{2})$").expect("bad change header regexp");
    }

    match token {
        "BECMG" => Some(ChangeKind::Becoming),
        "TEMPO" => Some(ChangeKind::Temporary),
        _ => {
            let caps = RE.captures(token)?;
            Some(ChangeKind::Probability(
                caps[1].parse().expect("change header pattern admitted an unparseable field"),
            ))
        }
    }
}

/// Process every token from the first change header onward
///
/// `tokens` must begin with a change-header token. A `PROBnn` header
/// immediately followed by a `TEMPO` header is one conditional block,
/// the way the combination is written in practice.
pub(crate) fn process(tokens: &[&str]) -> Result<TrendOutput, DecodeErr> {
    let mut out = TrendOutput::default();

    let mut cursor = 0;
    while cursor < tokens.len() {
        let header = tokens[cursor];
        let kind = change_header(header)
            .ok_or_else(|| DecodeErr::malformed(GroupKind::ChangeHeader, header))?;
        cursor += 1;

        // PROBnn TEMPO collapses into a single conditional entry
        if let ChangeKind::Probability(_) = kind {
            if tokens.get(cursor) == Some(&"TEMPO") {
                cursor += 1;
            }
        }

        let block_start = cursor;
        while cursor < tokens.len() && change_header(tokens[cursor]).is_none() {
            cursor += 1;
        }

        let change = decode_block(kind, header, &tokens[block_start..cursor], &mut out)?;
        out.changes.push(change);
    }

    Ok(out)
}

// Decode one block's tokens into a change entry. The validity
// sub-period is mandatory; everything after it is optional and
// classified in base-line order.
fn decode_block(
    kind: ChangeKind,
    header: &str,
    tokens: &[&str],
    out: &mut TrendOutput,
) -> Result<ChangeGroup, DecodeErr> {
    let first = match tokens.first() {
        Some(first) => first,
        None => return Err(DecodeErr::IncompleteReport(GroupKind::Validity)),
    };
    let validity = match group::validity(first)? {
        Some(validity) => validity,
        None => return Err(DecodeErr::malformed(GroupKind::Validity, first)),
    };

    let mut change = ChangeGroup {
        kind,
        validity,
        wind: None,
        visibility: None,
        cavok: false,
        no_significant_weather: false,
        weather: Vec::new(),
        clouds: Vec::new(),
    };

    // slot pointer: wind < visibility < weather < clouds
    let mut slot = 0;
    for token in &tokens[1..] {
        match *token {
            "CAVOK" => {
                change.cavok = true;
                change.visibility.get_or_insert(Visibility::ten_km_or_more());
                slot = slot.max(2);
                continue;
            }
            "NSW" => {
                change.no_significant_weather = true;
                slot = slot.max(3);
                continue;
            }
            _ => {}
        }

        if let Some((extreme, temperature)) = group::taf_temperature(token)? {
            match extreme {
                group::Extreme::Max => out.max_temperature = Some(temperature),
                group::Extreme::Min => out.min_temperature = Some(temperature),
            }
            continue;
        }

        if slot == 0 {
            if let Some(wind) = group::wind(token)? {
                change.wind = Some(wind);
                slot = 1;
                continue;
            }
        }
        if slot <= 1 {
            if let Some(visibility) = group::visibility(token) {
                change.visibility = Some(visibility);
                slot = 2;
                continue;
            }
        }
        if slot <= 2 {
            if let Some(weather) = group::weather(token) {
                change.weather.push(weather);
                slot = 2;
                continue;
            }
        }
        if let Some(cloud) = group::cloud(token) {
            change.clouds.push(cloud);
            slot = 3;
            continue;
        }

        debug!("{} block: unrecognized token {:?}", header, token);
        out.unrecognized.push((*token).to_owned());
    }

    Ok(change)
}
