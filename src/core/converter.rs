// src/core/converter.rs
use crate::core::codec::Syllable;
use crate::core::tables::{CombinationTables, KeyboardMap};
use crate::core::types::{Lead, Trail, Unit, Vowel};

/// The block currently being composed. A vowel is only ever stored after a
/// lead, and a trail only after a vowel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Accumulator {
    lead: Option<Lead>,
    vowel: Option<Vowel>,
    trail: Option<Trail>,
}

impl Accumulator {
    fn with_lead(lead: Lead) -> Self {
        Self { lead: Some(lead), ..Self::default() }
    }

    /// Emits the pending block (or its loose jamo, in slot order) and
    /// returns the reset accumulator.
    fn flush(self) -> ([Option<char>; 3], Accumulator) {
        let emitted = match (self.lead, self.vowel) {
            (Some(lead), Some(vowel)) => [Some(Syllable::new(lead, vowel, self.trail).encode()), None, None],
            _ => [
                self.lead.map(Lead::to_char),
                self.vowel.map(Vowel::to_char),
                self.trail.map(Trail::to_char),
            ],
        };
        (emitted, Accumulator::default())
    }
}

/// Rebuilds syllable blocks from text typed in the alternate keyboard layout.
///
/// A single greedy pass: each unit may extend or restart the current block,
/// and a flushed block is never revisited.
#[derive(Debug, Clone, Default)]
pub struct PhoneticReconstructor {
    keyboard: KeyboardMap,
    combinations: CombinationTables,
}

impl PhoneticReconstructor {
    pub fn new(keyboard: KeyboardMap, combinations: CombinationTables) -> Self {
        Self { keyboard, combinations }
    }

    pub fn reconstruct(&self, typed: &str) -> String {
        let mut out = String::with_capacity(typed.len() * 3);
        let pending = typed
            .chars()
            .map(|c| Unit::classify(self.keyboard.map(c)))
            .fold(Accumulator::default(), |acc, unit| self.step(acc, unit, &mut out));
        drain(pending, &mut out);
        out
    }

    fn step(&self, acc: Accumulator, unit: Unit, out: &mut String) -> Accumulator {
        match unit {
            Unit::Other(c) => {
                let acc = drain(acc, out);
                out.push(c);
                acc
            }
            Unit::Vowel(vowel) => self.push_vowel(acc, vowel, out),
            Unit::Consonant { jamo, lead, trail } => self.push_consonant(acc, jamo, lead, trail, out),
        }
    }

    fn push_vowel(&self, acc: Accumulator, vowel: Vowel, out: &mut String) -> Accumulator {
        let combined = match (acc.lead, acc.vowel) {
            (None, _) => None,
            (Some(_), None) => Some(vowel),
            // Combines even when a trail is already pending.
            (Some(_), Some(current)) => self.combinations.combine_vowels(current, vowel),
        };
        match combined {
            Some(vowel) => Accumulator { vowel: Some(vowel), ..acc },
            None => {
                let acc = drain(acc, out);
                out.push(vowel.to_char());
                acc
            }
        }
    }

    fn push_consonant(
        &self,
        acc: Accumulator,
        jamo: char,
        lead: Option<Lead>,
        trail: Option<Trail>,
        out: &mut String,
    ) -> Accumulator {
        let extended = match (acc.lead, acc.vowel, acc.trail) {
            (None, _, _) => return start_block(jamo, lead, out),
            (Some(_), None, _) => None,
            (Some(_), Some(_), None) => trail.map(|t| Accumulator { trail: Some(t), ..acc }),
            (Some(_), Some(_), Some(current)) => trail
                .and_then(|t| self.combinations.combine_trails(current, t))
                .map(|t| Accumulator { trail: Some(t), ..acc }),
        };
        match extended {
            Some(acc) => acc,
            None => {
                drain(acc, out);
                start_block(jamo, lead, out)
            }
        }
    }
}

fn drain(acc: Accumulator, out: &mut String) -> Accumulator {
    let (emitted, reset) = acc.flush();
    out.extend(emitted.into_iter().flatten());
    reset
}

/// Trail-only consonants cannot open a block and are emitted as-is.
fn start_block(jamo: char, lead: Option<Lead>, out: &mut String) -> Accumulator {
    match lead {
        Some(lead) => Accumulator::with_lead(lead),
        None => {
            out.push(jamo);
            Accumulator::default()
        }
    }
}
