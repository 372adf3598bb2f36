//! Group classifiers
//!
//! One classifier per group kind. Each is a pure function from a
//! token to a typed field. A token that does not look like the group
//! at all yields `Ok(None)`, leaving the assembler free to try the
//! next slot; a token that matches the group's shape but carries
//! invalid values is a fatal [`MalformedGroup`](DecodeErr::MalformedGroup).

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::report::{
    CloudLayer, DayTime, DecodeErr, GroupKind, MinVisibility, Pressure, Station, TafTemperature,
    Validity, Visibility, WeatherCondition, Wind, WindDirection,
};
use crate::wxcodes::{self, CloudCover, Compass8, ConvectiveCloud, Intensity, SpeedUnit};

const PANIC_MSG: &str = "classifier pattern admitted an unparseable field";

/// Station identifier group, e.g. `WIII`
pub(crate) fn station(token: &str) -> Option<Station> {
    Station::from_str(token).ok()
}

/// Day-of-month and time group, e.g. `010400Z`
pub(crate) fn day_time(token: &str) -> Result<Option<DayTime>, DecodeErr> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^(\d{2})(\d{2})(\d{2})Z$").expect("bad timestamp regexp");
    }

    let caps = match RE.captures(token) {
        Some(caps) => caps,
        None => return Ok(None),
    };

    let day: u8 = caps[1].parse().expect(PANIC_MSG);
    let hour: u8 = caps[2].parse().expect(PANIC_MSG);
    let minute: u8 = caps[3].parse().expect(PANIC_MSG);
    if day == 0 || day > 31 || hour > 23 || minute > 59 {
        return Err(DecodeErr::malformed(GroupKind::Timestamp, token));
    }

    Ok(Some(DayTime { day, hour, minute }))
}

/// Wind group, e.g. `22003KT`, `12015G25KT`, `VRB02KT`, `00000KT`
///
/// Speeds may be two or three digits wide. The anchored three-digit
/// direction disambiguates: five digits before the unit suffix decode
/// as direction plus two-digit speed, six as direction plus
/// three-digit speed.
pub(crate) fn wind(token: &str) -> Result<Option<Wind>, DecodeErr> {
    lazy_static! {
        static ref RE: Regex =
            Regex::new(r"^(VRB|\d{3})(\d{2,3})(?:G(\d{2,3}))?(KT|MPS|KMH)$").expect("bad wind regexp");
    }

    let caps = match RE.captures(token) {
        Some(caps) => caps,
        None => return Ok(None),
    };

    let direction = match &caps[1] {
        "VRB" => WindDirection::Variable,
        deg => {
            let deg: u16 = deg.parse().expect(PANIC_MSG);
            if deg > 360 {
                return Err(DecodeErr::malformed(GroupKind::Wind, token));
            }
            WindDirection::Degrees(deg)
        }
    };

    let speed: u16 = caps[2].parse().expect(PANIC_MSG);
    let gust: Option<u16> = caps.get(3).map(|m| m.as_str().parse().expect(PANIC_MSG));
    if let Some(gust) = gust {
        if gust <= speed {
            return Err(DecodeErr::malformed(GroupKind::Wind, token));
        }
    }

    let unit = SpeedUnit::from_str(&caps[4]).expect(PANIC_MSG);

    Ok(Some(Wind {
        direction,
        speed,
        gust,
        unit,
        range: None,
    }))
}

/// Variable wind direction range, e.g. `180V240`
///
/// Only valid immediately after a concrete wind group; the assembler
/// enforces the position.
pub(crate) fn wind_range(token: &str) -> Result<Option<(u16, u16)>, DecodeErr> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^(\d{3})V(\d{3})$").expect("bad wind range regexp");
    }

    let caps = match RE.captures(token) {
        Some(caps) => caps,
        None => return Ok(None),
    };

    let min: u16 = caps[1].parse().expect(PANIC_MSG);
    let max: u16 = caps[2].parse().expect(PANIC_MSG);
    if min > 360 || max > 360 {
        return Err(DecodeErr::malformed(GroupKind::VariableWind, token));
    }

    Ok(Some((min, max)))
}

/// Prevailing visibility group: four digits of meters
///
/// `9999` is the instrument ceiling sentinel and decodes as
/// "10 km or more", not a literal distance.
pub(crate) fn visibility(token: &str) -> Option<Visibility> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^\d{4}$").expect("bad visibility regexp");
    }

    if !RE.is_match(token) {
        return None;
    }

    if token == "9999" {
        Some(Visibility::ten_km_or_more())
    } else {
        Some(Visibility {
            meters: token.parse().expect(PANIC_MSG),
            at_or_beyond: false,
        })
    }
}

/// Minimum directional visibility, e.g. `1200NW`
pub(crate) fn min_visibility(token: &str) -> Option<MinVisibility> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^(\d{4})([NSEW]{1,2})$").expect("bad min visibility regexp");
    }

    let caps = RE.captures(token)?;
    let sector = Compass8::from_str(&caps[2]).ok()?;

    Some(MinVisibility {
        meters: caps[1].parse().expect(PANIC_MSG),
        sector,
    })
}

/// Weather phenomenon group, e.g. `-RA`, `+SHRA`, `VCTS`, `SNHZ`
///
/// After the optional intensity prefix the token must partition
/// greedily into known two-letter codes: at most one descriptor,
/// first, then phenomena. A token that cannot be fully partitioned
/// is not guessed at; it is left for the caller's unrecognized-token
/// channel, verbatim.
pub(crate) fn weather(token: &str) -> Option<WeatherCondition> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^(VC|\+|-)?([A-Z]{2,})$").expect("bad weather regexp");
    }

    let caps = RE.captures(token)?;
    let intensity = caps
        .get(1)
        .map(|m| Intensity::from_prefix(m.as_str()))
        .unwrap_or_default();
    let body = &caps[2];
    if body.len() % 2 != 0 {
        return None;
    }

    let mut descriptor = None;
    let mut phenomena = Vec::new();
    for chunk in (0..body.len()).step_by(2).map(|i| &body[i..i + 2]) {
        if let Some(code) = wxcodes::descriptor(chunk) {
            // a descriptor anywhere but first makes the split ambiguous
            if descriptor.is_some() || !phenomena.is_empty() {
                return None;
            }
            descriptor = Some(code);
        } else if let Some(code) = wxcodes::phenomenon(chunk) {
            phenomena.push(code);
        } else {
            return None;
        }
    }

    Some(WeatherCondition {
        intensity,
        descriptor,
        phenomena,
    })
}

/// Cloud layer group, e.g. `SCT020`, `FEW030TCU`, or a clear-sky code
pub(crate) fn cloud(token: &str) -> Option<CloudLayer> {
    lazy_static! {
        static ref RE: Regex =
            Regex::new(r"^(FEW|SCT|BKN|OVC)(\d{3})(CB|TCU)?$").expect("bad cloud regexp");
    }

    if let Some(caps) = RE.captures(token) {
        let cover = CloudCover::from_str(&caps[1]).expect(PANIC_MSG);
        let hundreds: u32 = caps[2].parse().expect(PANIC_MSG);
        let convective = caps
            .get(3)
            .map(|m| ConvectiveCloud::from_str(m.as_str()).expect(PANIC_MSG));

        return Some(CloudLayer {
            cover,
            base: Some(hundreds * 100),
            convective,
        });
    }

    // clear-sky codes carry no height to parse
    match CloudCover::from_str(token) {
        Ok(cover) if cover.is_sky_clear() => Some(CloudLayer {
            cover,
            base: None,
            convective: None,
        }),
        _ => None,
    }
}

/// Temperature and dew point group, e.g. `27/27`, `M05/M07`, `15/`
pub(crate) fn temperature(token: &str) -> Option<(i8, Option<i8>)> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^(M?\d{2})/(M?\d{2})?$").expect("bad temperature regexp");
    }

    let caps = RE.captures(token)?;
    let temperature = parse_celsius(&caps[1]);
    let dew_point = caps.get(2).map(|m| parse_celsius(m.as_str()));

    Some((temperature, dew_point))
}

// `M` prefixes negative whole degrees Celsius
fn parse_celsius(s: &str) -> i8 {
    match s.strip_prefix('M') {
        Some(rest) => -rest.parse::<i8>().expect(PANIC_MSG),
        None => s.parse().expect(PANIC_MSG),
    }
}

/// Pressure group: `Q1010` in hectopascals or `A2992` in
/// hundredths of inches of mercury
pub(crate) fn pressure(token: &str) -> Option<Pressure> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^([QA])(\d{4})$").expect("bad pressure regexp");
    }

    let caps = RE.captures(token)?;
    let value: u16 = caps[2].parse().expect(PANIC_MSG);

    match &caps[1] {
        "Q" => Some(Pressure::Hectopascals(value)),
        "A" => Some(Pressure::InchesOfMercury(value)),
        _ => unreachable!("{}", PANIC_MSG),
    }
}

/// Forecast validity period, e.g. `2900/3006`
///
/// An end hour of 24 denotes midnight at the close of the end day.
/// It is normalized here to hour 0 of the next day; carrying that
/// day across a month boundary is the caller's job, with the month
/// context only the caller has.
pub(crate) fn validity(token: &str) -> Result<Option<Validity>, DecodeErr> {
    lazy_static! {
        static ref RE: Regex =
            Regex::new(r"^(\d{2})(\d{2})/(\d{2})(\d{2})$").expect("bad validity regexp");
    }

    let caps = match RE.captures(token) {
        Some(caps) => caps,
        None => return Ok(None),
    };

    let start_day: u8 = caps[1].parse().expect(PANIC_MSG);
    let start_hour: u8 = caps[2].parse().expect(PANIC_MSG);
    let mut end_day: u8 = caps[3].parse().expect(PANIC_MSG);
    let mut end_hour: u8 = caps[4].parse().expect(PANIC_MSG);

    let day_ok = |day: u8| (1..=31).contains(&day);
    if !day_ok(start_day) || !day_ok(end_day) || start_hour > 23 || end_hour > 24 {
        return Err(DecodeErr::malformed(GroupKind::Validity, token));
    }

    if end_hour == 24 {
        end_day += 1;
        end_hour = 0;
    }

    Ok(Some(Validity {
        start_day,
        start_hour,
        end_day,
        end_hour,
    }))
}

/// Which extreme a forecast temperature group reports
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Extreme {
    Max,
    Min,
}

/// Forecast temperature group, e.g. `TX17/1512Z`, `TNM02/1605Z`
pub(crate) fn taf_temperature(
    token: &str,
) -> Result<Option<(Extreme, TafTemperature)>, DecodeErr> {
    lazy_static! {
        static ref RE: Regex =
            Regex::new(r"^(TX|TN)(M?\d{2})/(\d{2})(\d{2})Z$").expect("bad forecast temperature regexp");
    }

    let caps = match RE.captures(token) {
        Some(caps) => caps,
        None => return Ok(None),
    };

    let extreme = match &caps[1] {
        "TX" => Extreme::Max,
        "TN" => Extreme::Min,
        _ => unreachable!("{}", PANIC_MSG),
    };
    let celsius = parse_celsius(&caps[2]);
    let mut day: u8 = caps[3].parse().expect(PANIC_MSG);
    let mut hour: u8 = caps[4].parse().expect(PANIC_MSG);
    if day == 0 || day > 31 || hour > 24 {
        return Err(DecodeErr::malformed(GroupKind::TafTemperature, token));
    }

    // hour 24 is midnight at the close of the day, like validity ends
    if hour == 24 {
        day += 1;
        hour = 0;
    }

    Ok(Some((extreme, TafTemperature { celsius, day, hour })))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::wxcodes::{Descriptor, Phenomenon};

    #[test]
    fn test_station() {
        assert!(station("WIII").is_some());
        assert!(station("EDDF").is_some());
        assert_eq!(None, station("TAF"));
        assert_eq!(None, station("?"));
        assert_eq!(None, station("22003KT"));
    }

    #[test]
    fn test_day_time() {
        assert_eq!(
            Some(DayTime {
                day: 1,
                hour: 13,
                minute: 30
            }),
            day_time("011330Z").unwrap()
        );

        assert_eq!(None, day_time("???").unwrap());
        assert_eq!(None, day_time("011330").unwrap());
        assert_eq!(None, day_time("0113Z").unwrap());

        // shape matches, values invalid
        assert!(day_time("321330Z").is_err());
        assert!(day_time("001330Z").is_err());
        assert!(day_time("012460Z").is_err());
        assert!(day_time("012960Z").is_err());
    }

    #[test]
    fn test_wind() {
        // two-digit speed after a three-digit direction
        let wind = wind_ok("22003KT");
        assert_eq!(WindDirection::Degrees(220), wind.direction);
        assert_eq!(3, wind.speed);
        assert_eq!(None, wind.gust);
        assert_eq!(SpeedUnit::Knots, wind.unit);

        // three-digit speed, disambiguated by width
        let wind = wind_ok("220103KT");
        assert_eq!(WindDirection::Degrees(220), wind.direction);
        assert_eq!(103, wind.speed);

        let wind = wind_ok("12015G25KT");
        assert_eq!(WindDirection::Degrees(120), wind.direction);
        assert_eq!(15, wind.speed);
        assert_eq!(Some(25), wind.gust);

        let wind = wind_ok("VRB02KT");
        assert_eq!(WindDirection::Variable, wind.direction);
        assert_eq!(2, wind.speed);

        let wind = wind_ok("00000KT");
        assert!(wind.is_calm());

        let wind = wind_ok("10012MPS");
        assert_eq!(SpeedUnit::MetersPerSecond, wind.unit);

        // not wind at all
        assert_eq!(None, super::wind("8000").unwrap());
        assert_eq!(None, super::wind("22003").unwrap());
        assert_eq!(None, super::wind("2203KT").unwrap());

        // shape matches, values invalid
        assert!(super::wind("37010KT").is_err());
        assert!(super::wind("12015G10KT").is_err());
        assert!(super::wind("12015G15KT").is_err());
    }

    fn wind_ok(token: &str) -> Wind {
        super::wind(token)
            .expect("classifier error")
            .expect("no match")
    }

    #[test]
    fn test_wind_range() {
        assert_eq!(Some((180, 240)), wind_range("180V240").unwrap());
        assert_eq!(None, wind_range("180240").unwrap());
        assert_eq!(None, wind_range("18V24").unwrap());
        assert!(wind_range("180V400").is_err());
    }

    #[test]
    fn test_visibility() {
        let vis = visibility("8000").unwrap();
        assert_eq!(8000, vis.meters);
        assert!(!vis.at_or_beyond);

        let vis = visibility("0400").unwrap();
        assert_eq!(400, vis.meters);
        assert!(!vis.at_or_beyond);

        // the ceiling sentinel
        let vis = visibility("9999").unwrap();
        assert!(vis.at_or_beyond);
        assert_eq!(10_000, vis.meters);

        assert_eq!(None, visibility("800"));
        assert_eq!(None, visibility("99999"));
        assert_eq!(None, visibility("SCT020"));
    }

    #[test]
    fn test_min_visibility() {
        let min = min_visibility("1200NW").unwrap();
        assert_eq!(1200, min.meters);
        assert_eq!(Compass8::NorthWest, min.sector);

        assert_eq!(None, min_visibility("1200"));
        assert_eq!(None, min_visibility("1200WN"));
        assert_eq!(None, min_visibility("120NW"));
    }

    #[test]
    fn test_weather() {
        let wx = weather("-RA").unwrap();
        assert_eq!(Intensity::Light, wx.intensity);
        assert_eq!(None, wx.descriptor);
        assert_eq!(vec![Phenomenon::Rain], wx.phenomena);

        let wx = weather("+SHRA").unwrap();
        assert_eq!(Intensity::Heavy, wx.intensity);
        assert_eq!(Some(Descriptor::Showers), wx.descriptor);
        assert_eq!(vec![Phenomenon::Rain], wx.phenomena);

        let wx = weather("VCTS").unwrap();
        assert_eq!(Intensity::InVicinity, wx.intensity);
        assert_eq!(Some(Descriptor::Thunderstorm), wx.descriptor);
        assert!(wx.phenomena.is_empty());

        let wx = weather("SNHZ").unwrap();
        assert_eq!(Intensity::Moderate, wx.intensity);
        assert_eq!(None, wx.descriptor);
        assert_eq!(vec![Phenomenon::Snow, Phenomenon::Haze], wx.phenomena);

        let wx = weather("BCFG").unwrap();
        assert_eq!(Some(Descriptor::Patches), wx.descriptor);
        assert_eq!(vec![Phenomenon::Fog], wx.phenomena);

        let wx = weather("+DZ").unwrap();
        assert_eq!(Intensity::Heavy, wx.intensity);
        assert_eq!(vec![Phenomenon::Drizzle], wx.phenomena);

        // cannot be fully partitioned into known codes: no guessing
        assert_eq!(None, weather("RAX"));
        assert_eq!(None, weather("XXRA"));
        assert_eq!(None, weather("AUTO"));
        assert_eq!(None, weather("NOSIG"));

        // descriptor anywhere but first is ambiguous
        assert_eq!(None, weather("RASH"));

        // no codes at all
        assert_eq!(None, weather("-"));
        assert_eq!(None, weather("VC"));
    }

    #[test]
    fn test_cloud() {
        let layer = cloud("SCT020").unwrap();
        assert_eq!(CloudCover::Scattered, layer.cover);
        assert_eq!(Some(2000), layer.base);
        assert_eq!(None, layer.convective);

        let layer = cloud("FEW030TCU").unwrap();
        assert_eq!(CloudCover::Few, layer.cover);
        assert_eq!(Some(3000), layer.base);
        assert_eq!(Some(ConvectiveCloud::ToweringCumulus), layer.convective);

        let layer = cloud("BKN040CB").unwrap();
        assert_eq!(CloudCover::Broken, layer.cover);
        assert_eq!(Some(4000), layer.base);
        assert_eq!(Some(ConvectiveCloud::Cumulonimbus), layer.convective);

        // clear-sky codes never parse a height
        for token in ["NCD", "NSC", "SKC", "CLR"] {
            let layer = cloud(token).unwrap();
            assert!(layer.cover.is_sky_clear());
            assert_eq!(None, layer.base);
            assert_eq!(None, layer.convective);
        }

        assert_eq!(None, cloud("SCT"));
        assert_eq!(None, cloud("SCT20"));
        assert_eq!(None, cloud("XXX020"));
    }

    #[test]
    fn test_temperature() {
        assert_eq!(Some((27, Some(27))), temperature("27/27"));
        assert_eq!(Some((-5, Some(-7))), temperature("M05/M07"));
        assert_eq!(Some((15, None)), temperature("15/"));
        assert_eq!(Some((29, Some(26))), temperature("29/26"));

        assert_eq!(None, temperature("2900/3006"));
        assert_eq!(None, temperature("27"));
        assert_eq!(None, temperature("27/272"));
    }

    #[test]
    fn test_pressure() {
        assert_eq!(Some(Pressure::Hectopascals(1010)), pressure("Q1010"));
        assert_eq!(Some(Pressure::InchesOfMercury(2992)), pressure("A2992"));

        assert_eq!(None, pressure("Q101"));
        assert_eq!(None, pressure("B1010"));
        assert_eq!(None, pressure("1010"));
    }

    #[test]
    fn test_validity() {
        // (input, expected (start_day, start_hour, end_day, end_hour))
        const CASES: &[(&str, (u8, u8, u8, u8))] = &[
            // no rollover
            ("2900/3006", (29, 0, 30, 6)),
            ("0106/0206", (1, 6, 2, 6)),
            ("2923/3001", (29, 23, 30, 1)),
            // end hour 24 rolls to hour 0 of the next day
            ("2923/2924", (29, 23, 30, 0)),
            ("3018/3124", (30, 18, 32, 0)),
        ];

        for (token, (start_day, start_hour, end_day, end_hour)) in CASES {
            let validity = validity(token)
                .expect("classifier error")
                .expect("no match");
            assert_eq!(*start_day, validity.start_day, "{}", token);
            assert_eq!(*start_hour, validity.start_hour, "{}", token);
            assert_eq!(*end_day, validity.end_day, "{}", token);
            assert_eq!(*end_hour, validity.end_hour, "{}", token);
        }

        assert_eq!(None, validity("29/30").unwrap());
        assert_eq!(None, validity("2900-3006").unwrap());

        assert!(validity("0000/0106").is_err());
        assert!(validity("0125/0206").is_err());
        assert!(validity("0106/3225").is_err());
    }

    #[test]
    fn test_taf_temperature() {
        let (extreme, temp) = taf_temperature("TX17/1512Z")
            .expect("classifier error")
            .expect("no match");
        assert_eq!(Extreme::Max, extreme);
        assert_eq!(17, temp.celsius);
        assert_eq!(15, temp.day);
        assert_eq!(12, temp.hour);

        let (extreme, temp) = taf_temperature("TNM02/1605Z")
            .expect("classifier error")
            .expect("no match");
        assert_eq!(Extreme::Min, extreme);
        assert_eq!(-2, temp.celsius);
        assert_eq!(16, temp.day);
        assert_eq!(5, temp.hour);

        // midnight at the close of the day
        let (_, temp) = taf_temperature("TX09/1524Z")
            .expect("classifier error")
            .expect("no match");
        assert_eq!(16, temp.day);
        assert_eq!(0, temp.hour);

        assert_eq!(None, taf_temperature("TX17/15Z").unwrap());
        assert_eq!(None, taf_temperature("17/1512Z").unwrap());
        assert!(taf_temperature("TX17/3212Z").is_err());
    }
}
