//! Origin detection from a record's trash bytes.
//!
//! A record carries two padding areas whose leftover contents depend on the
//! game and region that wrote it. Comparing both against known patterns tells
//! where a transferred record legitimately came from.
use std::{collections::HashSet, path::Path, str::FromStr};

use byteorder::{ByteOrder, LittleEndian};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{LegalityError, Result};
use crate::release::{is_date_plausible, Region, Title};

pub const TRASH_SLOT_LEN: usize = 18;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TrashSlot([u8; TRASH_SLOT_LEN]);

impl TrashSlot {
    pub const fn new(bytes: [u8; TRASH_SLOT_LEN]) -> Self {
        TrashSlot(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; TRASH_SLOT_LEN] = bytes.try_into().map_err(|_| {
            LegalityError::InvalidPattern(format!(
                "expected {TRASH_SLOT_LEN} bytes, found {}",
                bytes.len()
            ))
        })?;
        Ok(TrashSlot(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; TRASH_SLOT_LEN] {
        &self.0
    }

    /// The slot as the 16-bit little-endian code units the games store text in.
    pub fn words(&self) -> [u16; TRASH_SLOT_LEN / 2] {
        let mut words = [0u16; TRASH_SLOT_LEN / 2];
        LittleEndian::read_u16_into(&self.0, &mut words);
        words
    }

    pub fn is_zeroed(&self) -> bool {
        self.0.iter().all(|byte| *byte == 0x00)
    }
}

impl FromStr for TrashSlot {
    type Err = LegalityError;

    /// Accepts plain hex digits or comma separated byte pairs ("00,1f,...").
    fn from_str(s: &str) -> Result<Self> {
        let digits: String = s
            .chars()
            .filter(|c| *c != ',' && !c.is_whitespace())
            .collect();
        let bytes = hex::decode(digits)
            .map_err(|err| LegalityError::InvalidPattern(format!("{s:?}: {err}")))?;
        TrashSlot::from_slice(&bytes)
    }
}

impl TryFrom<String> for TrashSlot {
    type Error = LegalityError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TrashSlot> for String {
    fn from(slot: TrashSlot) -> Self {
        hex::encode(slot.0)
    }
}

/// The trash patterns one region's copy of a title leaves behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginCandidate {
    pub region: Region,
    pub slot_a: TrashSlot,
    pub slot_b: TrashSlot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OriginMatch {
    Matched(Region),
    /// The trash bytes fit no known region; the record should be flagged.
    NoMatch,
}

impl OriginMatch {
    pub fn region(self) -> Option<Region> {
        match self {
            OriginMatch::Matched(region) => Some(region),
            OriginMatch::NoMatch => None,
        }
    }

    pub fn is_match(self) -> bool {
        matches!(self, OriginMatch::Matched(_))
    }
}

/// Finds the first candidate, in the given order, whose patterns equal both
/// slots byte for byte.
pub fn match_origin(
    slot_a: TrashSlot,
    slot_b: TrashSlot,
    candidates: &[OriginCandidate],
) -> OriginMatch {
    match candidates
        .iter()
        .find(|candidate| candidate.slot_a == slot_a && candidate.slot_b == slot_b)
    {
        Some(candidate) => OriginMatch::Matched(candidate.region),
        None => {
            log::debug!(
                "No origin candidate matches trash {:04x?} / {:04x?}",
                slot_a.words(),
                slot_b.words()
            );
            OriginMatch::NoMatch
        }
    }
}

/// Origin of a record plus the release-date cross check for that origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OriginVerdict {
    pub origin: OriginMatch,
    /// `None` when there was no match or no timestamp to check.
    pub date_plausible: Option<bool>,
}

impl OriginVerdict {
    pub fn is_consistent(&self) -> bool {
        self.origin.is_match() && self.date_plausible != Some(false)
    }
}

/// All known region patterns of one title, as loaded from a pattern file.
///
/// Every way of building a set, deserialisation included, rejects two
/// candidates with the same pair of patterns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PatternFile")]
pub struct OriginPatternSet {
    title: Title,
    candidates: Vec<OriginCandidate>,
}

#[derive(Deserialize)]
struct PatternFile {
    title: Title,
    candidates: Vec<OriginCandidate>,
}

impl TryFrom<PatternFile> for OriginPatternSet {
    type Error = LegalityError;

    fn try_from(file: PatternFile) -> Result<Self> {
        OriginPatternSet::new(file.title, file.candidates)
    }
}

const PLATINUM_PAL_PARK: &str = include_str!("../data/platinum_pal_park.json");

impl OriginPatternSet {
    pub fn new(title: Title, candidates: Vec<OriginCandidate>) -> Result<Self> {
        let set = OriginPatternSet { title, candidates };
        set.check_distinct()?;
        Ok(set)
    }

    /// Trash patterns of Platinum records moved through Pal Park, packaged
    /// with the crate.
    pub fn platinum_pal_park() -> Result<Self> {
        Self::from_json_str(PLATINUM_PAL_PARK)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(p: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(&p)?;
        let set = Self::from_json_str(&contents)?;
        log::info!(
            "Loaded {} origin candidates for {} from {}",
            set.candidates.len(),
            set.title,
            p.as_ref().display()
        );
        Ok(set)
    }

    pub fn title(&self) -> Title {
        self.title
    }

    pub fn candidates(&self) -> &[OriginCandidate] {
        &self.candidates
    }

    pub fn match_slots(&self, slot_a: TrashSlot, slot_b: TrashSlot) -> OriginMatch {
        match_origin(slot_a, slot_b, &self.candidates)
    }

    /// Matches the slots and, if the record has a timestamp, checks it against
    /// the matched region's release date. An implausible date does not undo
    /// the match.
    pub fn verify(
        &self,
        slot_a: TrashSlot,
        slot_b: TrashSlot,
        timestamp: Option<NaiveDate>,
    ) -> OriginVerdict {
        let origin = self.match_slots(slot_a, slot_b);
        let date_plausible = match (origin, timestamp) {
            (OriginMatch::Matched(region), Some(timestamp)) => {
                let plausible =
                    is_date_plausible(region, timestamp, self.title.release_window());
                if !plausible {
                    log::warn!(
                        "Record dated {timestamp} predates the {} release in {region}",
                        self.title
                    );
                }
                Some(plausible)
            }
            _ => None,
        };
        OriginVerdict {
            origin,
            date_plausible,
        }
    }

    fn check_distinct(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for candidate in &self.candidates {
            if !seen.insert((candidate.slot_a, candidate.slot_b)) {
                return Err(LegalityError::InvalidPattern(format!(
                    "{} patterns for {} repeat an earlier candidate",
                    candidate.region, self.title
                )));
            }
        }
        Ok(())
    }
}
