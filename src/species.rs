//! Per-species reference rows: growth curve, gender threshold and evolutionary family.
//!
//! All three tables are indexed by species index, the national dex number minus one.
use crate::error::{LegalityError, Result};
use crate::growth::GrowthCurve::{self, Cubic, Erratic, Fast, Flux, Parabolic, Slow};

pub const SPECIES_COUNT: usize = 493;

/// A species index that is known to address the reference tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Species(u16);

impl Species {
    pub fn new(index: usize) -> Result<Self> {
        if index < SPECIES_COUNT {
            Ok(Species(index as u16))
        } else {
            Err(LegalityError::OutOfRange(index))
        }
    }

    pub fn from_national_dex(number: u16) -> Result<Self> {
        if (1..=SPECIES_COUNT as u16).contains(&number) {
            Ok(Species(number - 1))
        } else {
            Err(LegalityError::InvalidDexNumber(number))
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn national_dex_number(self) -> u16 {
        self.0 + 1
    }

    pub fn info(self) -> SpeciesInfo {
        SpeciesInfo {
            growth_curve: growth_curve(self),
            gender_threshold: gender_threshold(self),
            evolution_root: evolution_root(self),
        }
    }
}

impl TryFrom<u16> for Species {
    type Error = LegalityError;

    fn try_from(index: u16) -> Result<Self> {
        Species::new(index.into())
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:03}", self.national_dex_number())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpeciesInfo {
    pub growth_curve: GrowthCurve,
    pub gender_threshold: u8,
    pub evolution_root: Species,
}

pub fn growth_curve(species: Species) -> GrowthCurve {
    GROWTH_CURVES[species.index()]
}

/// Raw gender threshold compared against the record's gender determinant.
pub fn gender_threshold(species: Species) -> u8 {
    GENDER_THRESHOLDS[species.index()]
}

/// The stage this species evolves from, or itself for a base form.
pub fn pre_evolution(species: Species) -> Species {
    // Every entry is a dex number in 1..=493, checked by the tests below.
    Species(PRE_EVOLUTIONS[species.index()] - 1)
}

/// Base form of the species' evolutionary family.
pub fn evolution_root(species: Species) -> Species {
    let mut current = species;
    loop {
        let previous = pre_evolution(current);
        if previous == current {
            return current;
        }
        current = previous;
    }
}

#[rustfmt::skip]
static GROWTH_CURVES: [GrowthCurve; SPECIES_COUNT] = [
    Flux, Flux, Flux, Flux, Flux, Flux, Flux, Flux, Flux, Cubic,
    Cubic, Cubic, Cubic, Cubic, Cubic, Flux, Flux, Flux, Cubic, Cubic,
    Cubic, Cubic, Cubic, Cubic, Cubic, Cubic, Cubic, Cubic, Flux, Flux,
    Flux, Flux, Flux, Flux, Fast, Fast, Cubic, Cubic, Fast, Fast,
    Cubic, Cubic, Flux, Flux, Flux, Cubic, Cubic, Cubic, Cubic, Cubic,
    Cubic, Cubic, Cubic, Cubic, Cubic, Cubic, Cubic, Parabolic, Parabolic, Flux,
    Flux, Flux, Flux, Flux, Flux, Flux, Flux, Flux, Flux, Flux,
    Flux, Parabolic, Parabolic, Flux, Flux, Flux, Cubic, Cubic, Cubic, Cubic,
    Cubic, Cubic, Cubic, Cubic, Cubic, Cubic, Cubic, Cubic, Cubic, Parabolic,
    Parabolic, Flux, Flux, Flux, Cubic, Cubic, Cubic, Cubic, Cubic, Cubic,
    Cubic, Parabolic, Parabolic, Cubic, Cubic, Cubic, Cubic, Cubic, Cubic, Cubic,
    Parabolic, Parabolic, Fast, Cubic, Cubic, Cubic, Cubic, Cubic, Cubic, Parabolic,
    Parabolic, Cubic, Cubic, Cubic, Cubic, Cubic, Parabolic, Parabolic, Parabolic, Parabolic,
    Parabolic, Cubic, Cubic, Cubic, Cubic, Cubic, Cubic, Cubic, Cubic, Cubic,
    Cubic, Parabolic, Parabolic, Parabolic, Parabolic, Parabolic, Parabolic, Parabolic, Parabolic, Parabolic,
    Flux, Flux, Flux, Flux, Flux, Flux, Flux, Flux, Flux, Flux,
    Cubic, Cubic, Cubic, Cubic, Fast, Fast, Fast, Fast, Cubic, Parabolic,
    Parabolic, Cubic, Fast, Fast, Fast, Fast, Cubic, Cubic, Flux, Flux,
    Flux, Flux, Fast, Fast, Cubic, Flux, Flux, Flux, Flux, Fast,
    Flux, Flux, Cubic, Cubic, Cubic, Cubic, Cubic, Flux, Cubic, Fast,
    Cubic, Cubic, Cubic, Cubic, Cubic, Cubic, Flux, Cubic, Fast, Fast,
    Cubic, Cubic, Flux, Parabolic, Flux, Cubic, Cubic, Cubic, Cubic, Parabolic,
    Parabolic, Fast, Cubic, Cubic, Fast, Parabolic, Parabolic, Parabolic, Parabolic, Cubic,
    Cubic, Cubic, Cubic, Parabolic, Fast, Cubic, Cubic, Cubic, Cubic, Cubic,
    Parabolic, Fast, Parabolic, Parabolic, Parabolic, Parabolic, Parabolic, Parabolic, Parabolic, Parabolic,
    Flux, Flux, Flux, Flux, Flux, Flux, Flux, Flux, Flux, Flux,
    Cubic, Cubic, Cubic, Cubic, Cubic, Cubic, Cubic, Cubic, Cubic, Flux,
    Flux, Flux, Flux, Flux, Flux, Flux, Flux, Cubic, Cubic, Parabolic,
    Parabolic, Parabolic, Cubic, Cubic, Slow, Slow, Parabolic, Parabolic, Parabolic, Erratic,
    Erratic, Erratic, Flux, Flux, Flux, Slow, Slow, Fast, Cubic, Fast,
    Fast, Flux, Fast, Parabolic, Parabolic, Parabolic, Cubic, Cubic, Parabolic, Parabolic,
    Cubic, Cubic, Erratic, Slow, Flux, Slow, Slow, Parabolic, Parabolic, Slow,
    Slow, Cubic, Cubic, Cubic, Fast, Fast, Fast, Flux, Flux, Flux,
    Flux, Flux, Erratic, Erratic, Erratic, Slow, Fast, Fast, Cubic, Cubic,
    Slow, Slow, Cubic, Cubic, Erratic, Erratic, Erratic, Erratic, Erratic, Erratic,
    Cubic, Flux, Fast, Fast, Fast, Fast, Parabolic, Fast, Flux, Cubic,
    Cubic, Cubic, Flux, Flux, Flux, Erratic, Erratic, Erratic, Parabolic, Fast,
    Parabolic, Parabolic, Parabolic, Parabolic, Parabolic, Parabolic, Parabolic, Parabolic, Parabolic, Parabolic,
    Parabolic, Parabolic, Parabolic, Parabolic, Parabolic, Parabolic, Flux, Flux, Flux, Flux,
    Flux, Flux, Flux, Flux, Flux, Flux, Flux, Flux, Cubic, Cubic,
    Flux, Flux, Flux, Flux, Flux, Flux, Flux, Erratic, Erratic, Erratic,
    Erratic, Cubic, Cubic, Cubic, Flux, Flux, Cubic, Cubic, Cubic, Cubic,
    Cubic, Cubic, Cubic, Fast, Slow, Slow, Cubic, Cubic, Fast, Flux,
    Fast, Fast, Fast, Cubic, Cubic, Cubic, Cubic, Cubic, Cubic, Fast,
    Flux, Cubic, Parabolic, Parabolic, Parabolic, Parabolic, Flux, Flux, Parabolic, Parabolic,
    Parabolic, Parabolic, Cubic, Cubic, Parabolic, Erratic, Erratic, Parabolic, Parabolic, Parabolic,
    Flux, Cubic, Cubic, Parabolic, Cubic, Cubic, Cubic, Fast, Cubic, Cubic,
    Cubic, Flux, Parabolic, Cubic, Parabolic, Cubic, Fast, Cubic, Cubic, Parabolic,
    Parabolic, Parabolic, Parabolic, Parabolic, Parabolic, Parabolic, Parabolic, Parabolic, Parabolic, Parabolic,
    Parabolic, Flux, Parabolic,
];

#[rustfmt::skip]
static GENDER_THRESHOLDS: [u8; SPECIES_COUNT] = [
    31, 31, 31, 31, 31, 31, 31, 31, 31, 127,
    127, 127, 127, 127, 127, 127, 127, 127, 127, 127,
    127, 127, 127, 127, 127, 127, 127, 127, 254, 254,
    254, 0, 0, 0, 191, 191, 191, 191, 191, 191,
    127, 127, 127, 127, 127, 127, 127, 127, 127, 127,
    127, 127, 127, 127, 127, 127, 127, 63, 63, 127,
    127, 127, 63, 63, 63, 63, 63, 63, 127, 127,
    127, 127, 127, 127, 127, 127, 127, 127, 127, 127,
    255, 255, 127, 127, 127, 127, 127, 127, 127, 127,
    127, 127, 127, 127, 127, 127, 127, 127, 127, 255,
    255, 127, 127, 127, 127, 0, 0, 127, 127, 127,
    127, 127, 254, 127, 254, 127, 127, 127, 127, 255,
    255, 127, 127, 254, 63, 63, 127, 0, 127, 127,
    127, 255, 31, 31, 31, 31, 255, 31, 31, 31,
    31, 31, 31, 255, 255, 255, 127, 127, 127, 255,
    255, 31, 31, 31, 31, 31, 31, 31, 31, 31,
    127, 127, 127, 127, 127, 127, 127, 127, 127, 127,
    127, 127, 191, 191, 31, 31, 127, 127, 127, 127,
    127, 127, 127, 127, 127, 127, 127, 127, 127, 127,
    127, 127, 127, 127, 127, 31, 31, 127, 127, 127,
    255, 127, 127, 127, 127, 127, 127, 127, 191, 191,
    127, 127, 127, 127, 127, 127, 127, 127, 127, 127,
    127, 191, 127, 127, 127, 127, 127, 127, 127, 127,
    127, 127, 255, 127, 127, 0, 0, 254, 63, 63,
    254, 254, 255, 255, 255, 127, 127, 127, 255, 255,
    255, 31, 31, 31, 31, 31, 31, 31, 31, 31,
    127, 127, 127, 127, 127, 127, 127, 127, 127, 127,
    127, 127, 127, 127, 127, 127, 127, 127, 127, 127,
    127, 127, 127, 127, 127, 127, 127, 127, 127, 127,
    127, 255, 127, 127, 127, 63, 63, 191, 127, 191,
    191, 127, 127, 127, 127, 127, 127, 127, 127, 127,
    127, 127, 0, 254, 127, 127, 127, 127, 127, 127,
    127, 127, 127, 127, 127, 127, 127, 127, 127, 127,
    127, 127, 127, 127, 127, 127, 255, 255, 127, 127,
    127, 127, 255, 255, 31, 31, 31, 31, 127, 127,
    127, 127, 127, 127, 127, 127, 127, 127, 127, 127,
    127, 127, 127, 127, 127, 127, 127, 127, 31, 191,
    127, 127, 127, 255, 255, 255, 255, 255, 255, 254,
    0, 255, 255, 255, 255, 255, 31, 31, 31, 31,
    31, 31, 31, 31, 31, 127, 127, 127, 127, 127,
    127, 127, 127, 127, 127, 127, 127, 31, 31, 31,
    31, 127, 254, 0, 31, 254, 127, 127, 127, 127,
    127, 127, 127, 127, 127, 127, 127, 127, 127, 127,
    191, 191, 127, 127, 127, 255, 255, 127, 127, 254,
    127, 127, 127, 127, 127, 31, 31, 31, 127, 127,
    127, 127, 127, 127, 127, 127, 127, 127, 127, 127,
    127, 255, 127, 127, 127, 63, 63, 31, 127, 31,
    31, 127, 127, 255, 0, 127, 127, 254, 255, 255,
    255, 255, 255, 255, 127, 255, 255, 254, 255, 255,
    255, 255, 255,
];

/// National dex number of each species' previous stage.
#[rustfmt::skip]
static PRE_EVOLUTIONS: [u16; SPECIES_COUNT] = [
    1, 1, 2, 4, 4, 5, 7, 7, 8, 10,
    10, 11, 13, 13, 14, 16, 16, 17, 19, 19,
    21, 21, 23, 23, 172, 25, 27, 27, 29, 29,
    30, 32, 32, 33, 173, 35, 37, 37, 174, 39,
    41, 41, 43, 43, 44, 46, 46, 48, 48, 50,
    50, 52, 52, 54, 54, 56, 56, 58, 58, 60,
    60, 61, 63, 63, 64, 66, 66, 67, 69, 69,
    70, 72, 72, 74, 74, 75, 77, 77, 79, 79,
    81, 81, 83, 84, 84, 86, 86, 88, 88, 90,
    90, 92, 92, 93, 95, 96, 96, 98, 98, 100,
    100, 102, 102, 104, 104, 236, 236, 108, 109, 109,
    111, 111, 440, 114, 115, 116, 116, 118, 118, 120,
    120, 439, 123, 238, 239, 240, 127, 128, 129, 129,
    131, 132, 133, 133, 133, 133, 137, 138, 138, 140,
    140, 142, 446, 144, 145, 146, 147, 147, 148, 150,
    151, 152, 152, 153, 155, 155, 156, 158, 158, 159,
    161, 161, 163, 163, 165, 165, 167, 167, 42, 170,
    170, 172, 173, 174, 175, 175, 177, 177, 179, 179,
    180, 44, 298, 183, 438, 61, 187, 187, 188, 190,
    191, 191, 193, 194, 194, 133, 133, 198, 79, 200,
    201, 360, 203, 204, 204, 206, 207, 95, 209, 209,
    211, 123, 213, 214, 215, 216, 216, 218, 218, 220,
    220, 222, 223, 223, 225, 458, 227, 228, 228, 117,
    231, 231, 137, 234, 235, 236, 236, 238, 239, 240,
    241, 113, 243, 244, 245, 246, 246, 247, 249, 250,
    251, 252, 252, 253, 255, 255, 256, 258, 258, 259,
    261, 261, 263, 263, 265, 265, 266, 265, 268, 270,
    270, 271, 273, 273, 274, 276, 276, 278, 278, 280,
    280, 281, 283, 283, 285, 285, 287, 287, 288, 290,
    290, 290, 293, 293, 294, 296, 296, 298, 299, 300,
    300, 302, 303, 304, 304, 305, 307, 307, 309, 309,
    311, 312, 313, 314, 406, 316, 316, 318, 318, 320,
    320, 322, 322, 324, 325, 325, 327, 328, 328, 329,
    331, 331, 333, 333, 335, 336, 337, 338, 339, 339,
    341, 341, 343, 343, 345, 345, 347, 347, 349, 349,
    351, 352, 353, 353, 355, 355, 357, 433, 359, 360,
    361, 361, 363, 363, 364, 366, 366, 366, 369, 370,
    371, 371, 372, 374, 374, 375, 377, 378, 379, 380,
    381, 382, 383, 384, 385, 386, 387, 387, 388, 390,
    390, 391, 393, 393, 394, 396, 396, 397, 399, 399,
    401, 401, 403, 403, 404, 406, 315, 408, 408, 410,
    410, 412, 412, 412, 415, 415, 417, 418, 418, 420,
    420, 422, 422, 190, 425, 425, 427, 427, 200, 198,
    431, 431, 433, 434, 434, 436, 436, 438, 439, 440,
    441, 442, 443, 443, 444, 446, 447, 447, 449, 449,
    451, 451, 453, 453, 455, 456, 456, 458, 459, 459,
    215, 82, 108, 112, 114, 125, 126, 176, 193, 133,
    133, 207, 221, 233, 281, 299, 356, 361, 479, 480,
    481, 482, 483, 484, 485, 486, 487, 488, 489, 489,
    491, 492, 493,
];
