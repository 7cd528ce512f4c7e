pub mod encounter;
pub mod error;
pub mod growth;
pub mod origin;
pub mod release;
pub mod species;

pub use error::{LegalityError, Result};
pub use growth::{resolve_level, GrowthCurve, GrowthTable};
pub use origin::{match_origin, OriginCandidate, OriginMatch, OriginPatternSet, TrashSlot};
pub use release::{is_date_plausible, Region, ReleaseWindow, Title};
pub use species::{Species, SpeciesInfo};

/// Raw gender threshold of the species at `index`.
pub fn gender_threshold(index: u16) -> Result<u8> {
    Ok(species::gender_threshold(Species::try_from(index)?))
}

/// Species index of the base form in the family of the species at `index`.
pub fn evolution_root(index: u16) -> Result<u16> {
    let root = species::evolution_root(Species::try_from(index)?);
    Ok(root.index() as u16)
}
