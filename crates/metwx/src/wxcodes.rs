//! METAR/TAF weather, cloud, and unit code tables

use std::fmt;
use std::str::FromStr;

use strum::EnumMessage;

/// Weather phenomenon intensity marker
///
/// Encoded as a prefix on the weather group: `-` for light, `+` for
/// heavy, `VC` for "in the vicinity" of the aerodrome. A group with
/// no prefix reports moderate intensity.
///
/// ```
/// use metwx::Intensity;
///
/// assert_eq!(Intensity::default(), Intensity::Moderate);
/// assert_eq!("light", Intensity::Light.as_display_str());
/// assert_eq!("-", Intensity::Light.prefix_str());
/// assert_eq!("", Intensity::Moderate.prefix_str());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum_macros::EnumMessage)]
pub enum Intensity {
    /// Light (`-`)
    #[strum(detailed_message = "light")]
    Light,

    /// Moderate (no prefix)
    #[default]
    #[strum(detailed_message = "moderate")]
    Moderate,

    /// Heavy (`+`)
    #[strum(detailed_message = "heavy")]
    Heavy,

    /// Within 8–16 km of the aerodrome, but not at it (`VC`)
    #[strum(detailed_message = "in the vicinity")]
    InVicinity,
}

impl Intensity {
    /// Human-readable string representation
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }

    /// The encoded prefix for this intensity
    ///
    /// Moderate intensity has no prefix and returns the empty string.
    pub fn prefix_str(&self) -> &'static str {
        match self {
            Intensity::Light => "-",
            Intensity::Moderate => "",
            Intensity::Heavy => "+",
            Intensity::InVicinity => "VC",
        }
    }

    // Decode a (possibly empty) intensity prefix
    pub(crate) fn from_prefix(prefix: &str) -> Self {
        match prefix {
            "-" => Intensity::Light,
            "+" => Intensity::Heavy,
            "VC" => Intensity::InVicinity,
            _ => Intensity::Moderate,
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_display_str().fmt(f)
    }
}

/// Weather descriptor code
///
/// At most one descriptor qualifies a weather group, and it always
/// precedes the phenomenon codes: `SHRA` is showers of rain, `FZFG`
/// is freezing fog. A descriptor may also stand alone, as in `VCTS`
/// (thunderstorm in the vicinity).
///
/// ```
/// use std::str::FromStr;
/// use metwx::Descriptor;
///
/// assert_eq!(Descriptor::Showers, Descriptor::from_str("SH").unwrap());
/// assert_eq!("SH", Descriptor::Showers.as_str());
/// assert_eq!("showers", Descriptor::Showers.as_display_str());
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumMessage,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
pub enum Descriptor {
    /// Shallow (`MI`)
    #[strum(serialize = "MI", detailed_message = "shallow")]
    Shallow,

    /// Patches (`BC`)
    #[strum(serialize = "BC", detailed_message = "patches")]
    Patches,

    /// Partial (`PR`)
    #[strum(serialize = "PR", detailed_message = "partial")]
    Partial,

    /// Low drifting (`DR`)
    #[strum(serialize = "DR", detailed_message = "low drifting")]
    LowDrifting,

    /// Blowing (`BL`)
    #[strum(serialize = "BL", detailed_message = "blowing")]
    Blowing,

    /// Showers (`SH`)
    #[strum(serialize = "SH", detailed_message = "showers")]
    Showers,

    /// Thunderstorm (`TS`)
    #[strum(serialize = "TS", detailed_message = "thunderstorm")]
    Thunderstorm,

    /// Freezing (`FZ`)
    #[strum(serialize = "FZ", detailed_message = "freezing")]
    Freezing,
}

impl Descriptor {
    /// Human-readable string representation
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }

    /// The two-letter code for this descriptor
    pub fn as_str(&self) -> &'static str {
        self.get_serializations()[0]
    }
}

impl AsRef<str> for Descriptor {
    fn as_ref(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_display_str().fmt(f)
    }
}

/// Weather phenomenon code
///
/// The two-letter precipitation, obscuration, and other-phenomenon
/// codes of the international METAR/TAF grammar. A weather group
/// concatenates one or more of these after the optional intensity
/// and descriptor, e.g. `SNHZ` for snow and haze.
///
/// ```
/// use std::str::FromStr;
/// use metwx::Phenomenon;
///
/// assert_eq!(Phenomenon::Rain, Phenomenon::from_str("RA").unwrap());
/// assert_eq!("RA", Phenomenon::Rain.as_str());
/// assert_eq!("rain", format!("{}", Phenomenon::Rain));
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumMessage,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
pub enum Phenomenon {
    /// Drizzle
    #[strum(serialize = "DZ", detailed_message = "drizzle")]
    Drizzle,

    /// Rain
    #[strum(serialize = "RA", detailed_message = "rain")]
    Rain,

    /// Snow
    #[strum(serialize = "SN", detailed_message = "snow")]
    Snow,

    /// Snow grains
    #[strum(serialize = "SG", detailed_message = "snow grains")]
    SnowGrains,

    /// Ice crystals
    #[strum(serialize = "IC", detailed_message = "ice crystals")]
    IceCrystals,

    /// Ice pellets
    #[strum(serialize = "PL", detailed_message = "ice pellets")]
    IcePellets,

    /// Hail
    #[strum(serialize = "GR", detailed_message = "hail")]
    Hail,

    /// Small hail or snow pellets
    #[strum(serialize = "GS", detailed_message = "small hail")]
    SmallHail,

    /// Unknown precipitation (automated stations)
    #[strum(serialize = "UP", detailed_message = "unknown precipitation")]
    UnknownPrecipitation,

    /// Mist (visibility ≥ 1000 m)
    #[strum(serialize = "BR", detailed_message = "mist")]
    Mist,

    /// Fog (visibility < 1000 m)
    #[strum(serialize = "FG", detailed_message = "fog")]
    Fog,

    /// Smoke
    #[strum(serialize = "FU", detailed_message = "smoke")]
    Smoke,

    /// Volcanic ash
    #[strum(serialize = "VA", detailed_message = "volcanic ash")]
    VolcanicAsh,

    /// Widespread dust
    #[strum(serialize = "DU", detailed_message = "widespread dust")]
    WidespreadDust,

    /// Sand
    #[strum(serialize = "SA", detailed_message = "sand")]
    Sand,

    /// Haze
    #[strum(serialize = "HZ", detailed_message = "haze")]
    Haze,

    /// Dust or sand whirls
    #[strum(serialize = "PO", detailed_message = "dust whirls")]
    DustWhirls,

    /// Squalls
    #[strum(serialize = "SQ", detailed_message = "squalls")]
    Squalls,

    /// Funnel cloud, tornado, or waterspout
    #[strum(serialize = "FC", detailed_message = "funnel cloud")]
    FunnelCloud,

    /// Sandstorm
    #[strum(serialize = "SS", detailed_message = "sandstorm")]
    Sandstorm,

    /// Duststorm
    #[strum(serialize = "DS", detailed_message = "duststorm")]
    Duststorm,
}

impl Phenomenon {
    /// Human-readable string representation
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }

    /// The two-letter code for this phenomenon
    pub fn as_str(&self) -> &'static str {
        self.get_serializations()[0]
    }
}

impl AsRef<str> for Phenomenon {
    fn as_ref(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Phenomenon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_display_str().fmt(f)
    }
}

/// Cloud coverage category
///
/// The layered coverage codes report how many eighths (oktas) of the
/// sky the layer obscures. The clear-sky codes (`SKC`, `CLR`, `NSC`,
/// `NCD`) report that no layer is worth mentioning; they carry no
/// base height, which [`is_sky_clear()`](CloudCover::is_sky_clear)
/// flags.
///
/// ```
/// use std::str::FromStr;
/// use metwx::CloudCover;
///
/// let cover = CloudCover::from_str("SCT").unwrap();
/// assert_eq!(CloudCover::Scattered, cover);
/// assert_eq!("scattered", cover.as_display_str());
/// assert!(!cover.is_sky_clear());
/// assert!(CloudCover::NoCloudDetected.is_sky_clear());
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumMessage,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
pub enum CloudCover {
    /// Few: 1–2 oktas
    #[strum(serialize = "FEW", detailed_message = "few")]
    Few,

    /// Scattered: 3–4 oktas
    #[strum(serialize = "SCT", detailed_message = "scattered")]
    Scattered,

    /// Broken: 5–7 oktas
    #[strum(serialize = "BKN", detailed_message = "broken")]
    Broken,

    /// Overcast: 8 oktas
    #[strum(serialize = "OVC", detailed_message = "overcast")]
    Overcast,

    /// Sky clear (human observer)
    #[strum(serialize = "SKC", detailed_message = "sky clear")]
    SkyClear,

    /// Clear below 12 000 ft (automated observer)
    #[strum(serialize = "CLR", detailed_message = "clear")]
    Clear,

    /// No significant cloud
    #[strum(serialize = "NSC", detailed_message = "no significant cloud")]
    NoSignificantCloud,

    /// No cloud detected (automated observer)
    #[strum(serialize = "NCD", detailed_message = "no cloud detected")]
    NoCloudDetected,
}

impl CloudCover {
    /// Human-readable string representation
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }

    /// The coverage code as encoded
    pub fn as_str(&self) -> &'static str {
        self.get_serializations()[0]
    }

    /// True for the clear-sky codes, which never carry a base height
    pub fn is_sky_clear(&self) -> bool {
        matches!(
            self,
            CloudCover::SkyClear
                | CloudCover::Clear
                | CloudCover::NoSignificantCloud
                | CloudCover::NoCloudDetected
        )
    }
}

impl AsRef<str> for CloudCover {
    fn as_ref(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for CloudCover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_display_str().fmt(f)
    }
}

/// Convective significance suffix on a cloud layer
///
/// `CB` and `TCU` mark layers of convective origin, which matter for
/// severe-weather risk assessment.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumMessage,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
pub enum ConvectiveCloud {
    /// Cumulonimbus
    #[strum(serialize = "CB", detailed_message = "cumulonimbus")]
    Cumulonimbus,

    /// Towering cumulus
    #[strum(serialize = "TCU", detailed_message = "towering cumulus")]
    ToweringCumulus,
}

impl ConvectiveCloud {
    /// Human-readable string representation
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }

    /// The suffix code as encoded
    pub fn as_str(&self) -> &'static str {
        self.get_serializations()[0]
    }
}

impl fmt::Display for ConvectiveCloud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_display_str().fmt(f)
    }
}

/// Wind speed unit suffix
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumMessage,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
pub enum SpeedUnit {
    /// Knots
    #[strum(serialize = "KT", detailed_message = "kt")]
    Knots,

    /// Meters per second
    #[strum(serialize = "MPS", detailed_message = "m/s")]
    MetersPerSecond,

    /// Kilometers per hour
    #[strum(serialize = "KMH", detailed_message = "km/h")]
    KilometersPerHour,
}

impl SpeedUnit {
    /// Unit abbreviation for display ("kt", "m/s", "km/h")
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }

    /// The unit suffix as encoded
    pub fn as_str(&self) -> &'static str {
        self.get_serializations()[0]
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_display_str().fmt(f)
    }
}

/// Eight-point compass sector
///
/// Used by the minimum-visibility group to report the direction in
/// which visibility is lowest, e.g. `1200NW`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumMessage,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
pub enum Compass8 {
    #[strum(serialize = "N", detailed_message = "north")]
    North,
    #[strum(serialize = "NE", detailed_message = "northeast")]
    NorthEast,
    #[strum(serialize = "E", detailed_message = "east")]
    East,
    #[strum(serialize = "SE", detailed_message = "southeast")]
    SouthEast,
    #[strum(serialize = "S", detailed_message = "south")]
    South,
    #[strum(serialize = "SW", detailed_message = "southwest")]
    SouthWest,
    #[strum(serialize = "W", detailed_message = "west")]
    West,
    #[strum(serialize = "NW", detailed_message = "northwest")]
    NorthWest,
}

impl Compass8 {
    /// Human-readable string representation ("northwest")
    pub fn as_display_str(&self) -> &'static str {
        self.get_detailed_message().expect("missing definition")
    }

    /// The sector letters as encoded ("NW")
    pub fn as_str(&self) -> &'static str {
        self.get_serializations()[0]
    }
}

impl fmt::Display for Compass8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_display_str().fmt(f)
    }
}

// Is `code` in the descriptor table?
pub(crate) fn descriptor(code: &str) -> Option<Descriptor> {
    Descriptor::from_str(code).ok()
}

// Is `code` in the phenomenon table?
pub(crate) fn phenomenon(code: &str) -> Option<Phenomenon> {
    Phenomenon::from_str(code).ok()
}
