//! # metwx: METAR/TAF decoding
//!
//! This crate decodes encoded aviation weather bulletins, both
//! surface observations (METAR) and terminal aerodrome forecasts
//! (TAF), from their fixed-grammar textual form into structured,
//! queryable data, and renders that data back into human-readable
//! narrative.
//!
//! Fetching bulletins is beyond the scope of this crate: hand it raw
//! report text from whatever source you have (a file, a network
//! service, a radio teletype) and it hands back a typed
//! [`Observation`] or [`Forecast`].
//!
//! ## Example
//!
//! ```
//! use metwx::{decode, Bulletin};
//!
//! let raw = "WIII 010400Z 22003KT 8000 -RA SCT020 27/27 Q1010";
//!
//! match decode(raw).expect("valid report") {
//!     Bulletin::Metar(obs) => {
//!         assert_eq!("WIII", obs.station.as_str());
//!         assert_eq!(8000, obs.visibility.meters);
//!         println!("{}", obs);
//!     }
//!     Bulletin::Taf(_) => unreachable!("not a forecast"),
//! }
//! ```
//!
//! An example METAR, as received "off the wire":
//!
//! ```txt
//! WATT 011330Z AUTO 10012KT 9999 NCD 29/26 Q1013
//! ```
//!
//! reads: station `WATT`, observed on the 1st at 13:30 UTC by an
//! automated station; wind from 100° at 12 knots; visibility 10 km
//! or more; no cloud detected; temperature 29 °C, dew point 26 °C;
//! QNH 1013 hPa. The [`decode_metar`] function surfaces each of
//! those groups as a field of [`Observation`], and
//! [`observation_lines`] renders them as labeled prose.
//!
//! A TAF adds a validity window and trend blocks after the base
//! forecast line:
//!
//! ```
//! use metwx::{decode_taf, ChangeKind};
//!
//! let fc = decode_taf(
//!     "TAF WATT 010500Z 0106/0206 10012KT 9999 SCT018\n\
//!      TEMPO 0107/0110 12015G25KT",
//! )
//! .expect("valid forecast");
//!
//! assert_eq!(ChangeKind::Temporary, fc.changes[0].kind);
//! assert_eq!(Some(25), fc.changes[0].wind.and_then(|w| w.gust));
//! ```
//!
//! ## Dates and times
//!
//! The report grammar encodes only a day of month and a time: never
//! a month or year. Guessing from the wall clock would be wrong for
//! historical or delayed reports, so the decoded types keep the raw
//! day/time fields, and conversions like
//! [`DayTime::to_datetime`] take the month and year explicitly from
//! the caller (requires the default `chrono` feature).
//!
//! ## Errors and unsupported dialects
//!
//! Decoding a report is all-or-nothing: if a mandatory group is
//! missing ([`DecodeErr::IncompleteReport`]) or a recognized group
//! carries invalid values ([`DecodeErr::MalformedGroup`]), no
//! partial object is produced; half-decoded weather data is worse
//! than none. Tokens from national dialects or extensions the
//! grammar does not cover are *not* errors: they are preserved
//! verbatim on the decoded report and surfaced by the renderer.
//!
//! Rendering never fails. Optional fields that were not reported
//! render as explicit placeholders, so the narrative field set is
//! stable.

mod decoder;
mod group;
mod narrate;
pub mod remarks;
mod report;
mod scan;
mod trend;
mod wxcodes;

pub use decoder::{decode, decode_metar, decode_taf};
pub use narrate::{forecast_lines, observation_lines};
#[cfg(feature = "chrono")]
pub use report::InvalidDateErr;
pub use report::{
    Bulletin, ChangeGroup, ChangeKind, CloudLayer, DayTime, DecodeErr, Forecast, GroupKind,
    MinVisibility, Observation, Pressure, Station, TafTemperature, Validity, Visibility,
    WeatherCondition, Wind, WindDirection,
};
pub use wxcodes::{
    CloudCover, Compass8, ConvectiveCloud, Descriptor, Intensity, Phenomenon, SpeedUnit,
};
