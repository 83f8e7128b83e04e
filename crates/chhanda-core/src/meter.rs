// Meter (chhanda) definitions and the lookup table

use hashbrown::HashMap;

use crate::enums::Weight;
use crate::gana::{Gana, GanaError, flatten_ganas, pack_weights};

const I: Weight = Weight::Light;
const S: Weight = Weight::Heavy;

/// Built-in meters: Latin name, Devanagari name, gana pattern.
///
/// An empty pattern marks a meter governed by positional or matra rules
/// rather than a fixed gana sequence.
const BUILTIN_METERS: &[(&str, &str, &[&[Weight]])] = &[
    ("Bhujangaprayata", "भुजङ्गप्रयात", &[&[I, S, S], &[I, S, S], &[I, S, S], &[I, S, S]]),
    (
        "Shardulavikridita",
        "शार्दूलविक्रीडित",
        &[
            &[S, S, S],
            &[I, I, S],
            &[I, S, I],
            &[I, I, S],
            &[S, S, I],
            &[S, S, I],
            &[S],
        ],
    ),
    ("Totaka", "तोटक", &[&[I, I, S], &[I, I, S], &[I, I, S], &[I, I, S]]),
    (
        "Mandakranta",
        "मन्दाक्रान्ता",
        &[
            &[S, S, S],
            &[S, I, I],
            &[I, I, I],
            &[S, S, I],
            &[S, S, I],
            &[S],
            &[S],
        ],
    ),
    ("Indravajra", "इन्द्रवज्रा", &[&[S, S, I], &[S, S, I], &[I, S, I], &[S, S]]),
    ("Upendravajra", "उपेन्द्रवज्रा", &[&[I, S, I], &[S, S, I], &[I, S, I], &[S, S]]),
    ("Vanshastha", "वंशस्थ", &[&[I, S, I], &[S, S, I], &[I, S, I], &[S, I, S]]),
    ("Indravamsha", "इन्द्रवंशा", &[&[S, S, I], &[S, S, I], &[I, S, I], &[S, I, S]]),
    ("Vasantatilaka", "वसन्ततिलका", &[&[S, S, I], &[S, I, I], &[I, S, I], &[I, S, I], &[S, S]]),
    ("Malini", "मालिनी", &[&[I, I, I], &[I, I, I], &[S, S, S], &[I, S, S], &[I, S, S]]),
    (
        "Shikarini",
        "शिखरिणी",
        &[
            &[I, S, S],
            &[S, S, S],
            &[I, I, I],
            &[I, I, S],
            &[S, I, I],
            &[I],
            &[S],
        ],
    ),
    ("Sragvini", "स्रग्विणी", &[&[S, I, S], &[S, I, S], &[S, I, S], &[S, I, S]]),
    (
        "Sragdhara",
        "स्रग्धरा",
        &[
            &[S, S, S],
            &[S, I, S],
            &[S, I, I],
            &[I, I, I],
            &[I, S, S],
            &[I, S, S],
            &[I, S, S],
        ],
    ),
    (
        "Prithvi",
        "पृथ्वी",
        &[
            &[I, I, I],
            &[I, I, I],
            &[S, S, S],
            &[I, S, S],
            &[I, S, S],
            &[I, I, I],
            &[I, I, I],
            &[S, S, S],
            &[I, S, S],
            &[I, S, S],
        ],
    ),
    ("Drutavilambita", "द्रुतविलम्बित", &[&[I, I, I], &[S, I, I], &[S, I, I], &[S, I, S]]),
    ("Harini", "हरिणी", &[&[I, I, I], &[I, I, S], &[S, S, S], &[S, I, S], &[I, I, S], &[I, S]]),
    ("Anustubh", "अनुष्टुप्", &[]),
    ("Matrik14", "मात्रिक", &[]),
    ("Arya", "आर्या", &[]),
];

/// Name of the positionally governed meter handled by the Anustubh analyzer.
pub const ANUSTUBH: &str = "Anustubh";

/// A meter definition as written in a table source (built-in or external).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeterDefinition {
    pub name: String,

    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub devanagari: Option<String>,

    /// Gana codes, possibly with split short tails (`"S", "S"`).
    pub pattern: Vec<String>,
}

/// Error raised while building a meter table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeterTableError {
    #[error("meter with empty name")]
    EmptyName,
    #[error("duplicate meter name: {0}")]
    DuplicateName(String),
    #[error("meter {meter}: {source}")]
    InvalidGana {
        meter: String,
        #[source]
        source: GanaError,
    },
}

/// A validated meter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Meter {
    name: String,
    devanagari: Option<String>,
    /// The pattern exactly as defined.
    pattern: Vec<Gana>,
    /// The pattern re-packed into consecutive triplets plus one short tail,
    /// the form produced by the gana packer.
    canonical: Vec<Gana>,
}

impl Meter {
    fn new(name: String, devanagari: Option<String>, pattern: Vec<Gana>) -> Self {
        let canonical = pack_weights(&flatten_ganas(&pattern));
        Self {
            name,
            devanagari,
            pattern,
            canonical,
        }
    }

    fn from_definition(def: &MeterDefinition) -> Result<Self, MeterTableError> {
        let name = def.name.trim();
        if name.is_empty() {
            return Err(MeterTableError::EmptyName);
        }
        let pattern = def
            .pattern
            .iter()
            .map(|code| Gana::parse(code))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| MeterTableError::InvalidGana {
                meter: name.to_string(),
                source,
            })?;
        Ok(Self::new(name.to_string(), def.devanagari.clone(), pattern))
    }

    /// The definition this meter was built from.
    pub fn to_definition(&self) -> MeterDefinition {
        MeterDefinition {
            name: self.name.clone(),
            devanagari: self.devanagari.clone(),
            pattern: self.pattern.iter().map(Gana::code).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn devanagari(&self) -> Option<&str> {
        self.devanagari.as_deref()
    }

    /// The gana pattern as defined in the table.
    pub fn pattern(&self) -> &[Gana] {
        &self.pattern
    }

    /// The pattern in packed form; this is what matching compares against.
    pub fn canonical_pattern(&self) -> &[Gana] {
        &self.canonical
    }

    /// The expected weight of every syllable.
    pub fn weights(&self) -> Vec<Weight> {
        flatten_ganas(&self.pattern)
    }

    /// Number of syllables per line.
    pub fn syllable_count(&self) -> usize {
        self.pattern.iter().map(|g| g.weights().len()).sum()
    }

    /// Whether the meter has no fixed pattern and so never matches a gana
    /// sequence.
    pub fn is_positional(&self) -> bool {
        self.pattern.is_empty()
    }
}

/// Immutable, ordered table of meters with a name index.
#[derive(Debug, Clone)]
pub struct MeterTable {
    meters: Vec<Meter>,
    /// Latin and Devanagari names, both mapped to the position in `meters`.
    index: HashMap<String, usize>,
}

impl MeterTable {
    /// The compiled-in classical meters.
    pub fn builtin() -> Self {
        let mut meters = Vec::with_capacity(BUILTIN_METERS.len());
        let mut index = HashMap::with_capacity(BUILTIN_METERS.len() * 2);
        for (position, (name, devanagari, pattern)) in BUILTIN_METERS.iter().enumerate() {
            let ganas = pattern.iter().map(|w| Gana::from_weights(w)).collect();
            index.insert((*name).to_string(), position);
            index.insert((*devanagari).to_string(), position);
            meters.push(Meter::new(
                (*name).to_string(),
                Some((*devanagari).to_string()),
                ganas,
            ));
        }
        Self { meters, index }
    }

    /// Validate definitions and build a table, preserving their order.
    pub fn from_definitions(
        defs: impl IntoIterator<Item = MeterDefinition>,
    ) -> Result<Self, MeterTableError> {
        let mut meters = Vec::new();
        let mut index = HashMap::new();
        for def in defs {
            let meter = Meter::from_definition(&def)?;
            let position = meters.len();
            if index.insert(meter.name.clone(), position).is_some() {
                return Err(MeterTableError::DuplicateName(meter.name));
            }
            if let Some(dev) = &meter.devanagari {
                if dev != &meter.name {
                    if index.insert(dev.clone(), position).is_some() {
                        return Err(MeterTableError::DuplicateName(dev.clone()));
                    }
                }
            }
            meters.push(meter);
        }
        Ok(Self { meters, index })
    }

    /// Look up a meter by Latin or Devanagari name.
    pub fn get(&self, name: &str) -> Option<&Meter> {
        self.index.get(name.trim()).map(|&i| &self.meters[i])
    }

    /// Meters in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Meter> {
        self.meters.iter()
    }

    /// Meters that have a fixed gana pattern.
    pub fn fixed(&self) -> impl Iterator<Item = &Meter> {
        self.meters.iter().filter(|m| !m.is_positional())
    }

    /// Expected weight sequence for a named meter.
    pub fn expected_weights(&self, name: &str) -> Option<Vec<Weight>> {
        self.get(name).map(Meter::weights)
    }

    pub fn len(&self) -> usize {
        self.meters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meters.is_empty()
    }
}

impl Default for MeterTable {
    fn default() -> Self {
        Self::builtin()
    }
}
