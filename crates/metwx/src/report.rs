//! Decoded report model

use std::fmt;
use std::str::FromStr;

use arrayvec::ArrayString;
#[cfg(feature = "chrono")]
use chrono::{DateTime, Duration, TimeZone, Utc};
use thiserror::Error;

use crate::wxcodes::{
    CloudCover, Compass8, ConvectiveCloud, Descriptor, Intensity, Phenomenon, SpeedUnit,
};

/// Error decoding a report
///
/// Decoding is all-or-nothing: a report that raises either of the
/// fatal conditions here yields no partial result. Tokens that merely
/// use an unsupported dialect or extension are not errors; they are
/// preserved verbatim on the decoded report instead.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum DecodeErr {
    /// The input contained no tokens at all
    #[error("empty report")]
    EmptyReport,

    /// A token at a recognized position failed its expected pattern
    #[error("malformed {kind} group {token:?}")]
    MalformedGroup {
        /// Which group the token was recognized as
        kind: GroupKind,
        /// The offending token
        token: String,
    },

    /// Input ended before a mandatory group was matched
    #[error("report ended without a {0} group")]
    IncompleteReport(GroupKind),
}

impl DecodeErr {
    pub(crate) fn malformed(kind: GroupKind, token: &str) -> Self {
        DecodeErr::MalformedGroup {
            kind,
            token: token.to_owned(),
        }
    }
}

/// The kinds of groups the decoder recognizes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// Reporting station identifier
    Station,
    /// Day-of-month and time group
    Timestamp,
    /// Wind group
    Wind,
    /// Variable wind direction range
    VariableWind,
    /// Prevailing visibility
    Visibility,
    /// Minimum directional visibility
    MinVisibility,
    /// Weather phenomenon group
    Weather,
    /// Cloud layer group
    Cloud,
    /// Temperature and dew point
    Temperature,
    /// Pressure group
    Pressure,
    /// Forecast validity period
    Validity,
    /// Forecast maximum/minimum temperature
    TafTemperature,
    /// Forecast change-group header
    ChangeHeader,
}

impl GroupKind {
    /// The group name used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupKind::Station => "station",
            GroupKind::Timestamp => "timestamp",
            GroupKind::Wind => "wind",
            GroupKind::VariableWind => "variable wind",
            GroupKind::Visibility => "visibility",
            GroupKind::MinVisibility => "minimum visibility",
            GroupKind::Weather => "weather",
            GroupKind::Cloud => "cloud",
            GroupKind::Temperature => "temperature",
            GroupKind::Pressure => "pressure",
            GroupKind::Validity => "validity",
            GroupKind::TafTemperature => "forecast temperature",
            GroupKind::ChangeHeader => "change-group header",
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// An invalid calendar date
///
/// Reports carry only a day of month; combining one with a
/// caller-supplied month and year can fail, e.g. day 31 in a
/// 30-day month.
#[cfg(feature = "chrono")]
#[derive(Error, Clone, Debug, PartialEq, Eq, Hash)]
#[error("report day and time not valid for the given month and year")]
pub struct InvalidDateErr {}

/// Four-character reporting station identifier
///
/// ```
/// use std::str::FromStr;
/// use metwx::Station;
///
/// let station = Station::from_str("WIII").unwrap();
/// assert_eq!("WIII", station.as_str());
///
/// assert!(Station::from_str("WII").is_err());
/// assert!(Station::from_str("wiii").is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Station(ArrayString<4>);

impl Station {
    /// The identifier as reported
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for Station {
    type Err = DecodeErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ok = s.len() == 4
            && s.bytes().next().is_some_and(|b| b.is_ascii_uppercase())
            && s.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
        if !ok {
            return Err(DecodeErr::malformed(GroupKind::Station, s));
        }

        Ok(Station(ArrayString::from(s).expect("station length checked")))
    }
}

impl AsRef<str> for Station {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// Day-of-month and UTC time of a report
///
/// The encoded grammar carries no month or year. Combining a
/// `DayTime` with calendar context is the caller's job; see
/// [`to_datetime()`](DayTime::to_datetime).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DayTime {
    /// Day of month, 1–31
    pub day: u8,
    /// UTC hour, 0–23
    pub hour: u8,
    /// Minute, 0–59
    pub minute: u8,
}

impl DayTime {
    /// Combine with a caller-supplied month and year
    ///
    /// The grammar never encodes month or year, so they must be
    /// provided explicitly. This keeps decoding deterministic for
    /// historical and delayed reports.
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use metwx::DayTime;
    ///
    /// let issued = DayTime { day: 1, hour: 13, minute: 30 };
    /// assert_eq!(
    ///     Utc.with_ymd_and_hms(2024, 7, 1, 13, 30, 0).unwrap(),
    ///     issued.to_datetime(2024, 7).unwrap()
    /// );
    ///
    /// // day 31 does not exist in June
    /// let bad = DayTime { day: 31, hour: 0, minute: 0 };
    /// assert!(bad.to_datetime(2024, 6).is_err());
    /// ```
    ///
    /// Requires `chrono`.
    #[cfg(feature = "chrono")]
    pub fn to_datetime(&self, year: i32, month: u32) -> Result<DateTime<Utc>, InvalidDateErr> {
        Utc.with_ymd_and_hms(
            year,
            month,
            self.day as u32,
            self.hour as u32,
            self.minute as u32,
            0,
        )
        .single()
        .ok_or(InvalidDateErr {})
    }
}

impl fmt::Display for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "day {} at {:02}:{:02} UTC",
            self.day, self.hour, self.minute
        )
    }
}

/// Wind direction: a concrete bearing or the variable marker
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WindDirection {
    /// True bearing in degrees, 0–360
    Degrees(u16),
    /// Direction varies too much to report (`VRB`)
    Variable,
}

/// Decoded wind group
///
/// Calm wind is encoded as `00000KT`: bearing zero at zero speed.
/// When present, the gust speed is strictly greater than the mean
/// speed, and the variable-direction `range` is only reported
/// alongside a concrete (non-variable) bearing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Wind {
    /// Mean direction
    pub direction: WindDirection,
    /// Mean speed
    pub speed: u16,
    /// Gust speed, when gusts exceed the mean by a reportable margin
    pub gust: Option<u16>,
    /// Unit the speeds were encoded in
    pub unit: SpeedUnit,
    /// Variable direction extremes (min, max) in degrees
    pub range: Option<(u16, u16)>,
}

impl Wind {
    /// True for a calm report (`00000KT`)
    pub fn is_calm(&self) -> bool {
        self.speed == 0 && self.gust.is_none() && self.direction == WindDirection::Degrees(0)
    }
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_calm() {
            return "calm".fmt(f);
        }

        match self.direction {
            WindDirection::Degrees(deg) => write!(f, "from {}° at {} {}", deg, self.speed, self.unit)?,
            WindDirection::Variable => write!(f, "variable at {} {}", self.speed, self.unit)?,
        }

        if let Some(gust) = self.gust {
            write!(f, ", gusting to {} {}", gust, self.unit)?;
        }

        if let Some((min, max)) = self.range {
            write!(f, ", varying between {}° and {}°", min, max)?;
        }

        Ok(())
    }
}

/// Prevailing visibility
///
/// The grammar caps the encodable distance at `9999`, which means
/// "10 km or more" rather than a literal 9999 m. That sentinel
/// decodes with [`at_or_beyond`](Visibility::at_or_beyond) set and
/// the distance normalized to 10 000 m.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Visibility {
    /// Distance in meters
    pub meters: u16,
    /// Visibility is at or beyond the instrument ceiling
    pub at_or_beyond: bool,
}

impl Visibility {
    /// The "10 km or more" visibility reported by `9999` and `CAVOK`
    pub fn ten_km_or_more() -> Self {
        Visibility {
            meters: 10_000,
            at_or_beyond: true,
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.at_or_beyond {
            "10 km or more".fmt(f)
        } else {
            write!(f, "{} m", self.meters)
        }
    }
}

/// Minimum directional visibility
///
/// Reported after the prevailing visibility when visibility varies
/// by direction, e.g. `1200NW`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MinVisibility {
    /// Lowest visibility in meters
    pub meters: u16,
    /// Sector in which the minimum applies
    pub sector: Compass8,
}

impl fmt::Display for MinVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m toward the {}", self.meters, self.sector)
    }
}

/// One decoded weather group
///
/// An intensity, at most one descriptor, and the phenomena reported
/// together in a single token. A descriptor may stand alone (`VCTS`),
/// but a group always carries at least one code.
///
/// ```
/// use metwx::{Intensity, Phenomenon, WeatherCondition};
///
/// let wx = WeatherCondition {
///     intensity: Intensity::Light,
///     descriptor: None,
///     phenomena: vec![Phenomenon::Rain],
/// };
/// assert_eq!("light rain", format!("{}", wx));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WeatherCondition {
    /// Intensity or proximity marker
    pub intensity: Intensity,
    /// Qualifying descriptor, if any
    pub descriptor: Option<Descriptor>,
    /// Phenomenon codes, in reported order
    pub phenomena: Vec<Phenomenon>,
}

impl fmt::Display for WeatherCondition {
    // Connective words depend on whether phenomena follow the
    // descriptor: "showers of rain" but bare "showers",
    // "thunderstorm with rain" but bare "thunderstorm".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<&str> = Vec::with_capacity(4);

        match self.intensity {
            Intensity::Light | Intensity::Heavy => parts.push(self.intensity.as_display_str()),
            Intensity::Moderate | Intensity::InVicinity => {}
        }

        if let Some(descriptor) = self.descriptor {
            parts.push(descriptor.as_display_str());
            if !self.phenomena.is_empty() {
                match descriptor {
                    Descriptor::Showers | Descriptor::Patches => parts.push("of"),
                    Descriptor::Thunderstorm => parts.push("with"),
                    _ => {}
                }
            }
        }

        let phenomena: Vec<&str> = self.phenomena.iter().map(|p| p.as_display_str()).collect();
        let phenomena = phenomena.join(" and ");
        if !phenomena.is_empty() {
            parts.push(&phenomena);
        }

        write!(f, "{}", parts.join(" "))?;

        if self.intensity == Intensity::InVicinity {
            write!(f, " in the vicinity")?;
        }

        Ok(())
    }
}

/// One decoded cloud layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CloudLayer {
    /// Coverage category
    pub cover: CloudCover,
    /// Layer base in feet above aerodrome level; `None` for the
    /// clear-sky coverage codes
    pub base: Option<u32>,
    /// Convective significance suffix, if any
    pub convective: Option<ConvectiveCloud>,
}

impl fmt::Display for CloudLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.cover.as_display_str().fmt(f)?;
        if let Some(base) = self.base {
            write!(f, " at {} ft", base)?;
        }
        if let Some(convective) = self.convective {
            write!(f, " ({})", convective)?;
        }
        Ok(())
    }
}

/// Pressure group, in whichever unit the station encodes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pressure {
    /// QNH in whole hectopascals (`Q1013`)
    Hectopascals(u16),
    /// Altimeter setting in hundredths of inches of mercury (`A2992`)
    InchesOfMercury(u16),
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pressure::Hectopascals(hpa) => write!(f, "{} hPa", hpa),
            Pressure::InchesOfMercury(centi) => {
                write!(f, "{}.{:02} inHg", centi / 100, centi % 100)
            }
        }
    }
}

/// Forecast validity window
///
/// Start and end are day-of-month plus hour, local to the issuing
/// month. An encoded end hour of 24 denotes midnight of the next
/// day; the decoder normalizes it to hour 0 of `end_day + 1`, so
/// `end_day` can exceed the issuing month's length by one. The
/// datetime conversions below carry that into the following month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Validity {
    /// Start day of month
    pub start_day: u8,
    /// Start hour, 0–23
    pub start_hour: u8,
    /// End day of month, possibly one past the month's last day
    pub end_day: u8,
    /// End hour, 0–23 after normalization
    pub end_hour: u8,
}

impl Validity {
    /// Window start as a concrete datetime
    ///
    /// Requires `chrono`.
    #[cfg(feature = "chrono")]
    pub fn start_datetime(&self, year: i32, month: u32) -> Result<DateTime<Utc>, InvalidDateErr> {
        Utc.with_ymd_and_hms(
            year,
            month,
            self.start_day as u32,
            self.start_hour as u32,
            0,
            0,
        )
        .single()
        .ok_or(InvalidDateErr {})
    }

    /// Window end as a concrete datetime
    ///
    /// An end day one past the last day of the month (from the
    /// hour-24 normalization) lands on the first of the following
    /// month.
    ///
    /// Requires `chrono`.
    #[cfg(feature = "chrono")]
    pub fn end_datetime(&self, year: i32, month: u32) -> Result<DateTime<Utc>, InvalidDateErr> {
        if self.end_day == 0 {
            return Err(InvalidDateErr {});
        }

        let month_start = Utc
            .with_ymd_and_hms(year, month, 1, 0, 0, 0)
            .single()
            .ok_or(InvalidDateErr {})?;
        Ok(month_start
            + Duration::days(self.end_day as i64 - 1)
            + Duration::hours(self.end_hour as i64))
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "from day {} {:02}:00 until day {} {:02}:00 UTC",
            self.start_day, self.start_hour, self.end_day, self.end_hour
        )
    }
}

/// Forecast maximum or minimum temperature (`TX17/1512Z`, `TN07/1605Z`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TafTemperature {
    /// Temperature in whole degrees Celsius
    pub celsius: i8,
    /// Day of month the extreme is expected
    pub day: u8,
    /// UTC hour the extreme is expected
    pub hour: u8,
}

impl fmt::Display for TafTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} °C on day {} at {:02}:00 UTC",
            self.celsius, self.day, self.hour
        )
    }
}

/// Forecast change-group kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// `BECMG`: a permanent shift in conditions
    Becoming,
    /// `TEMPO`: intermittent fluctuations
    Temporary,
    /// `PROBnn`: conditional, with probability in percent
    Probability(u8),
}

/// One forecast change entry
///
/// Models "this subset of conditions is expected to change within
/// this sub-window." Fields left `None` (or empty) are unchanged
/// from the base forecast. Entries keep their source order, which is
/// semantically meaningful: later entries may narrow earlier windows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeGroup {
    /// What kind of change this entry forecasts
    pub kind: ChangeKind,
    /// The sub-window the change applies to
    pub validity: Validity,
    /// Changed wind, if forecast
    pub wind: Option<Wind>,
    /// Changed visibility, if forecast
    pub visibility: Option<Visibility>,
    /// Ceiling-and-visibility-OK within this window
    pub cavok: bool,
    /// Significant weather ends within this window (`NSW`)
    pub no_significant_weather: bool,
    /// Changed weather groups
    pub weather: Vec<WeatherCondition>,
    /// Changed cloud layers
    pub clouds: Vec<CloudLayer>,
}

/// A fully-decoded METAR surface observation
///
/// Value object: constructed once by the decoder and never mutated.
/// Every group present in the raw report survives into exactly one
/// field here; tokens from dialects the decoder does not cover are
/// kept verbatim in [`unrecognized`](Observation::unrecognized).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observation {
    /// Reporting station
    pub station: Station,
    /// Observation day and time
    pub observed: DayTime,
    /// Fully automated station, no human edits (`AUTO`)
    pub auto: bool,
    /// Surface wind
    pub wind: Wind,
    /// Prevailing visibility
    pub visibility: Visibility,
    /// Minimum directional visibility, if reported
    pub min_visibility: Option<MinVisibility>,
    /// Ceiling and visibility OK (`CAVOK`)
    pub cavok: bool,
    /// Present weather groups, in reported order
    pub weather: Vec<WeatherCondition>,
    /// Cloud layers, in reported order
    pub clouds: Vec<CloudLayer>,
    /// Air temperature in whole degrees Celsius
    pub temperature: Option<i8>,
    /// Dew point in whole degrees Celsius
    pub dew_point: Option<i8>,
    /// Pressure group
    pub pressure: Option<Pressure>,
    /// No significant change expected (`NOSIG`)
    pub nosig: bool,
    /// Remarks section, verbatim
    pub remarks: Option<String>,
    /// Tokens no classifier recognized, verbatim and in order
    pub unrecognized: Vec<String>,
}

/// A fully-decoded TAF terminal forecast
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Forecast {
    /// Forecast station
    pub station: Station,
    /// Issue day and time
    pub issued: DayTime,
    /// Amended forecast (`AMD`)
    pub amended: bool,
    /// Corrected forecast (`COR`)
    pub corrected: bool,
    /// Validity window of the whole forecast
    pub validity: Validity,
    /// Base forecast wind
    pub wind: Wind,
    /// Base forecast visibility
    pub visibility: Visibility,
    /// Ceiling and visibility OK on the base line
    pub cavok: bool,
    /// Base forecast weather groups
    pub weather: Vec<WeatherCondition>,
    /// Base forecast cloud layers
    pub clouds: Vec<CloudLayer>,
    /// Forecast maximum temperature
    pub max_temperature: Option<TafTemperature>,
    /// Forecast minimum temperature
    pub min_temperature: Option<TafTemperature>,
    /// Change entries, in source order
    pub changes: Vec<ChangeGroup>,
    /// Remarks section, verbatim
    pub remarks: Option<String>,
    /// Tokens no classifier recognized, verbatim and in order
    pub unrecognized: Vec<String>,
}

/// Either kind of decoded bulletin
///
/// Raw bulletin text beginning with the literal token `TAF` decodes
/// as a [`Forecast`]; anything else decodes as an [`Observation`].
///
/// ```
/// use metwx::Bulletin;
///
/// let bulletin: Bulletin = "WIII 010400Z 22003KT 8000 -RA SCT020 27/27 Q1010"
///     .parse()
///     .unwrap();
/// assert!(matches!(bulletin, Bulletin::Metar(_)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Bulletin {
    /// A surface observation
    Metar(Observation),
    /// A terminal forecast
    Taf(Forecast),
}

impl Bulletin {
    /// The reporting station, whichever kind this is
    pub fn station(&self) -> Station {
        match self {
            Bulletin::Metar(obs) => obs.station,
            Bulletin::Taf(fc) => fc.station,
        }
    }
}

impl FromStr for Observation {
    type Err = DecodeErr;

    #[inline]
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        crate::decoder::decode_metar(raw)
    }
}

impl FromStr for Forecast {
    type Err = DecodeErr;

    #[inline]
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        crate::decoder::decode_taf(raw)
    }
}

impl FromStr for Bulletin {
    type Err = DecodeErr;

    #[inline]
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        crate::decoder::decode(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station() {
        let station = Station::from_str("WATT").unwrap();
        assert_eq!("WATT", station.as_str());
        assert_eq!("WATT", &format!("{}", station));

        // digits allowed after the first character
        assert!(Station::from_str("K2W6").is_ok());

        assert_eq!(
            Err(DecodeErr::malformed(GroupKind::Station, "2WWW")),
            Station::from_str("2WWW")
        );
        assert!(Station::from_str("WIIII").is_err());
        assert!(Station::from_str("").is_err());
    }

    #[test]
    fn test_wind_display() {
        let mut wind = Wind {
            direction: WindDirection::Degrees(220),
            speed: 3,
            gust: None,
            unit: SpeedUnit::Knots,
            range: None,
        };
        assert_eq!("from 220° at 3 kt", format!("{}", wind));

        wind.gust = Some(25);
        assert_eq!("from 220° at 3 kt, gusting to 25 kt", format!("{}", wind));

        wind.gust = None;
        wind.range = Some((180, 240));
        assert_eq!(
            "from 220° at 3 kt, varying between 180° and 240°",
            format!("{}", wind)
        );

        let calm = Wind {
            direction: WindDirection::Degrees(0),
            speed: 0,
            gust: None,
            unit: SpeedUnit::Knots,
            range: None,
        };
        assert!(calm.is_calm());
        assert_eq!("calm", format!("{}", calm));

        let vrb = Wind {
            direction: WindDirection::Variable,
            speed: 2,
            gust: None,
            unit: SpeedUnit::Knots,
            range: None,
        };
        assert!(!vrb.is_calm());
        assert_eq!("variable at 2 kt", format!("{}", vrb));
    }

    #[test]
    fn test_visibility_display() {
        assert_eq!(
            "8000 m",
            format!(
                "{}",
                Visibility {
                    meters: 8000,
                    at_or_beyond: false
                }
            )
        );
        assert_eq!("10 km or more", format!("{}", Visibility::ten_km_or_more()));
    }

    #[test]
    fn test_weather_condition_display() {
        use crate::wxcodes::{Descriptor, Intensity, Phenomenon};

        let shra = WeatherCondition {
            intensity: Intensity::Heavy,
            descriptor: Some(Descriptor::Showers),
            phenomena: vec![Phenomenon::Rain],
        };
        assert_eq!("heavy showers of rain", format!("{}", shra));

        let vcts = WeatherCondition {
            intensity: Intensity::InVicinity,
            descriptor: Some(Descriptor::Thunderstorm),
            phenomena: vec![],
        };
        assert_eq!("thunderstorm in the vicinity", format!("{}", vcts));

        let tsra = WeatherCondition {
            intensity: Intensity::Moderate,
            descriptor: Some(Descriptor::Thunderstorm),
            phenomena: vec![Phenomenon::Rain],
        };
        assert_eq!("thunderstorm with rain", format!("{}", tsra));

        let snhz = WeatherCondition {
            intensity: Intensity::Moderate,
            descriptor: None,
            phenomena: vec![Phenomenon::Snow, Phenomenon::Haze],
        };
        assert_eq!("snow and haze", format!("{}", snhz));
    }

    #[test]
    fn test_cloud_layer_display() {
        use crate::wxcodes::{CloudCover, ConvectiveCloud};

        let sct = CloudLayer {
            cover: CloudCover::Scattered,
            base: Some(2000),
            convective: None,
        };
        assert_eq!("scattered at 2000 ft", format!("{}", sct));

        let few_tcu = CloudLayer {
            cover: CloudCover::Few,
            base: Some(3000),
            convective: Some(ConvectiveCloud::ToweringCumulus),
        };
        assert_eq!("few at 3000 ft (towering cumulus)", format!("{}", few_tcu));

        let ncd = CloudLayer {
            cover: CloudCover::NoCloudDetected,
            base: None,
            convective: None,
        };
        assert_eq!("no cloud detected", format!("{}", ncd));
    }

    #[test]
    fn test_pressure_display() {
        assert_eq!("1010 hPa", format!("{}", Pressure::Hectopascals(1010)));
        assert_eq!("29.92 inHg", format!("{}", Pressure::InchesOfMercury(2992)));
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_validity_datetimes() {
        let validity = Validity {
            start_day: 29,
            start_hour: 0,
            end_day: 30,
            end_hour: 6,
        };
        assert_eq!(
            Utc.with_ymd_and_hms(2024, 9, 29, 0, 0, 0).unwrap(),
            validity.start_datetime(2024, 9).unwrap()
        );
        assert_eq!(
            Utc.with_ymd_and_hms(2024, 9, 30, 6, 0, 0).unwrap(),
            validity.end_datetime(2024, 9).unwrap()
        );

        // an end day past the month's last day rolls into the next month
        let rollover = Validity {
            start_day: 30,
            start_hour: 23,
            end_day: 31,
            end_hour: 0,
        };
        assert_eq!(
            Utc.with_ymd_and_hms(2024, 10, 1, 0, 0, 0).unwrap(),
            rollover.end_datetime(2024, 9).unwrap()
        );

        // but the start day must exist in the given month
        assert!(rollover.start_datetime(2024, 9).is_ok());
        let bad = Validity {
            start_day: 31,
            start_hour: 0,
            end_day: 31,
            end_hour: 6,
        };
        assert!(bad.start_datetime(2024, 9).is_err());
    }

    #[test]
    fn test_errors_display() {
        assert_eq!("empty report", format!("{}", DecodeErr::EmptyReport));
        assert_eq!(
            "malformed wind group \"36190KT\"",
            format!("{}", DecodeErr::malformed(GroupKind::Wind, "36190KT"))
        );
        assert_eq!(
            "report ended without a timestamp group",
            format!("{}", DecodeErr::IncompleteReport(GroupKind::Timestamp))
        );
    }
}
