// Ganas: weight triplets and the packer that produces them

use std::fmt;

use crate::enums::{Weight, weights_to_string};

/// Number of weights in a full gana.
pub const GANA_SIZE: usize = 3;

/// The eight named triplets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GanaName {
    Ya,
    Ma,
    Ta,
    Ra,
    Ja,
    Bha,
    Na,
    Sa,
}

/// Code and name of every full gana, in the traditional
/// `yamātārājabhānasalagam` order.
pub const GANA_TABLE: [(&str, GanaName); 8] = [
    ("ISS", GanaName::Ya),
    ("SSS", GanaName::Ma),
    ("SSI", GanaName::Ta),
    ("SIS", GanaName::Ra),
    ("ISI", GanaName::Ja),
    ("SII", GanaName::Bha),
    ("III", GanaName::Na),
    ("IIS", GanaName::Sa),
];

impl GanaName {
    /// Latin transliteration of the name.
    pub fn latin(self) -> &'static str {
        match self {
            GanaName::Ya => "Ya",
            GanaName::Ma => "Ma",
            GanaName::Ta => "Ta",
            GanaName::Ra => "Ra",
            GanaName::Ja => "Ja",
            GanaName::Bha => "Bha",
            GanaName::Na => "Na",
            GanaName::Sa => "Sa",
        }
    }

    /// Devanagari letter naming the gana.
    pub fn devanagari(self) -> &'static str {
        match self {
            GanaName::Ya => "य",
            GanaName::Ma => "म",
            GanaName::Ta => "त",
            GanaName::Ra => "र",
            GanaName::Ja => "ज",
            GanaName::Bha => "भ",
            GanaName::Na => "न",
            GanaName::Sa => "स",
        }
    }

    /// Human-readable label, e.g. `"Ya (य)"`.
    pub fn display_name(self) -> String {
        format!("{} ({})", self.latin(), self.devanagari())
    }

    /// The weight code of this gana, e.g. `"ISS"` for Ya.
    pub fn code(self) -> &'static str {
        GANA_TABLE
            .iter()
            .find(|(_, name)| *name == self)
            .map(|(code, _)| *code)
            .unwrap_or_default()
    }

    /// Look up a full three-symbol code.
    pub fn from_code(code: &str) -> Option<Self> {
        GANA_TABLE
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, name)| *name)
    }
}

/// Error returned when a gana code cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GanaError {
    #[error("empty gana code")]
    Empty,
    #[error("gana code {0:?} is longer than three weights")]
    TooLong(String),
    #[error("invalid weight symbol {symbol:?} in gana code {code:?}")]
    InvalidSymbol { code: String, symbol: char },
}

/// A group of one to three consecutive weights.
///
/// Full ganas hold exactly three weights. A shorter gana only appears as
/// the trailing remainder of a packed sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct Gana {
    weights: Vec<Weight>,
}

impl Gana {
    /// Build a gana from weights. The caller guarantees 1..=3 weights.
    pub(crate) fn from_weights(weights: &[Weight]) -> Self {
        debug_assert!(!weights.is_empty() && weights.len() <= GANA_SIZE);
        Self {
            weights: weights.to_vec(),
        }
    }

    /// Parse a code such as `"ISS"` or the short tail `"SS"`.
    pub fn parse(code: &str) -> Result<Self, GanaError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(GanaError::Empty);
        }
        let mut weights = Vec::with_capacity(GANA_SIZE);
        for c in code.chars() {
            let weight = Weight::from_symbol(c).ok_or_else(|| GanaError::InvalidSymbol {
                code: code.to_string(),
                symbol: c,
            })?;
            weights.push(weight);
        }
        if weights.len() > GANA_SIZE {
            return Err(GanaError::TooLong(code.to_string()));
        }
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    /// The weight code, e.g. `"ISS"`.
    pub fn code(&self) -> String {
        weights_to_string(&self.weights)
    }

    /// Whether this is a full three-weight gana.
    pub fn is_full(&self) -> bool {
        self.weights.len() == GANA_SIZE
    }

    /// Name of a full gana; `None` for a short trailing fragment.
    pub fn name(&self) -> Option<GanaName> {
        if self.is_full() {
            GanaName::from_code(&self.code())
        } else {
            None
        }
    }

    /// Label for display: the gana name for full ganas, otherwise the
    /// weight symbols of the fragment with their laghu/guru names.
    pub fn display_name(&self) -> String {
        match self.name() {
            Some(name) => name.display_name(),
            None => self
                .weights
                .iter()
                .map(|w| match w {
                    Weight::Light => "La (ल)",
                    Weight::Heavy => "Ga (ग)",
                })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl fmt::Display for Gana {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

impl From<Gana> for String {
    fn from(gana: Gana) -> Self {
        gana.code()
    }
}

impl TryFrom<String> for Gana {
    type Error = GanaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Gana::parse(&value)
    }
}

impl From<GanaName> for Gana {
    fn from(name: GanaName) -> Self {
        let weights: Vec<Weight> = name.code().chars().filter_map(Weight::from_symbol).collect();
        Self { weights }
    }
}

// ---------------------------------------------------------------------------
// Packing
// ---------------------------------------------------------------------------

/// Pack a weight sequence into consecutive, non-overlapping ganas of three.
///
/// A trailing remainder of one or two weights is kept as a short gana; it
/// is never padded and never dropped. An empty input yields no ganas.
pub fn pack_weights(weights: &[Weight]) -> Vec<Gana> {
    weights.chunks(GANA_SIZE).map(Gana::from_weights).collect()
}

/// Flatten ganas back into their weight sequence.
pub fn flatten_ganas(ganas: &[Gana]) -> Vec<Weight> {
    ganas
        .iter()
        .flat_map(|g| g.weights().iter().copied())
        .collect()
}

/// Render a gana sequence as space-separated codes.
pub fn ganas_to_string(ganas: &[Gana]) -> String {
    ganas
        .iter()
        .map(Gana::code)
        .collect::<Vec<_>>()
        .join(" ")
}
