// Syllable weight classification (laghu / guru)
//
// Base weight comes from the akshara itself: a long vowel, a long vowel
// sign, anusvara, chandrabindu or visarga make it heavy. A light syllable
// is promoted when the next syllabic akshara begins with a conjunct or is a
// closing consonant. Closing consonants emit no syllable but force the
// syllable before them heavy.

use chhanda_core::akshara::Akshara;
use chhanda_core::enums::{AksharaKind, Weight};

/// Weights of a token sequence together with the token-to-syllable map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Syllabification {
    /// One weight per syllable-forming akshara.
    pub weights: Vec<Weight>,

    /// Same length as the input tokens; `Some(i)` when the token produced
    /// `weights[i]`.
    pub akshara_map: Vec<Option<usize>>,
}

impl Syllabification {
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Index of the syllable each token belongs to: its own syllable, or
    /// for a closing consonant the syllable it closes. `None` for tokens
    /// that belong to no syllable.
    pub fn owners(&self, aksharas: &[Akshara]) -> Vec<Option<usize>> {
        let mut last = None;
        aksharas
            .iter()
            .zip(&self.akshara_map)
            .map(|(ak, slot)| match (ak.kind, slot) {
                (_, Some(i)) => {
                    last = Some(*i);
                    last
                }
                (AksharaKind::ClosingConsonant, None) => last,
                _ => None,
            })
            .collect()
    }
}

/// Classify every syllable of a segmented text.
pub fn classify(aksharas: &[Akshara]) -> Syllabification {
    let mut weights: Vec<Weight> = Vec::with_capacity(aksharas.len());
    let mut akshara_map = Vec::with_capacity(aksharas.len());

    for (i, ak) in aksharas.iter().enumerate() {
        match ak.kind {
            AksharaKind::Other => akshara_map.push(None),
            AksharaKind::ClosingConsonant => {
                if let Some(last) = weights.last_mut() {
                    *last = Weight::Heavy;
                }
                akshara_map.push(None);
            }
            AksharaKind::Vowel | AksharaKind::Consonant => {
                let mut weight = base_weight(ak);
                if weight == Weight::Light && closed_by_next(aksharas, i) {
                    weight = Weight::Heavy;
                }
                akshara_map.push(Some(weights.len()));
                weights.push(weight);
            }
        }
    }

    Syllabification {
        weights,
        akshara_map,
    }
}

/// Weight of an akshara before looking at its neighbours.
pub fn base_weight(ak: &Akshara) -> Weight {
    let long_vowel = match ak.kind {
        AksharaKind::Vowel => ak.has_long_independent_vowel(),
        AksharaKind::Consonant => ak.has_long_vowel_sign(),
        _ => false,
    };
    if long_vowel || ak.has_weight_modifier() {
        Weight::Heavy
    } else {
        Weight::Light
    }
}

/// Whether the syllable at `i` is closed by what follows it: the next
/// syllabic or closing token, with whitespace and other non-syllabic
/// tokens skipped.
fn closed_by_next(aksharas: &[Akshara], i: usize) -> bool {
    aksharas[i + 1..]
        .iter()
        .find(|a| a.kind != AksharaKind::Other)
        .is_some_and(|next| next.is_closing_consonant() || next.starts_with_cluster())
}
