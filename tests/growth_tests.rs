use pklegal::{
    evolution_root, gender_threshold, resolve_level,
    species::{growth_curve, SPECIES_COUNT},
    LegalityError, Species,
};
use proptest::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn threshold(index: u16, level: u8) -> u32 {
    let species = Species::try_from(index).unwrap();
    growth_curve(species).table().threshold(level).unwrap()
}

#[test]
fn test_flux_level_10_boundary() {
    init_logging();
    assert_eq!(resolve_level(0, 540).unwrap(), 10);
    assert_eq!(resolve_level(0, 539).unwrap(), 9);
    assert_eq!(resolve_level(0, 744).unwrap(), 10);
    assert_eq!(resolve_level(0, 745).unwrap(), 11);
}

#[test]
fn test_zero_experience_is_level_1() {
    for index in 0..SPECIES_COUNT as u16 {
        assert_eq!(resolve_level(index, 0).unwrap(), 1, "species index {index}");
    }
}

#[test]
fn test_ceiling_clamp() {
    for index in 0..SPECIES_COUNT as u16 {
        let max = threshold(index, 100);
        assert_eq!(resolve_level(index, max).unwrap(), 100);
        assert_eq!(resolve_level(index, max + 1).unwrap(), 100);
        assert_eq!(resolve_level(index, u32::MAX).unwrap(), 100);
        assert_eq!(resolve_level(index, max - 1).unwrap(), 99);
    }
}

#[test]
fn test_level_thresholds_reach_their_level() {
    for index in 0..SPECIES_COUNT as u16 {
        for level in 1..=100u8 {
            let resolved = resolve_level(index, threshold(index, level)).unwrap();
            assert!(resolved >= level, "species index {index}, level {level}: {resolved}");
        }
    }
}

#[test]
fn test_species_out_of_range() {
    init_logging();
    assert!(matches!(
        resolve_level(SPECIES_COUNT as u16, 0),
        Err(LegalityError::OutOfRange(493))
    ));
    assert!(matches!(
        resolve_level(u16::MAX, 1000),
        Err(LegalityError::OutOfRange(_))
    ));
    assert!(gender_threshold(493).is_err());
    assert!(evolution_root(493).is_err());
}

#[test]
fn test_table_lookups_by_index() {
    assert_eq!(gender_threshold(31).unwrap(), 0);
    assert_eq!(gender_threshold(28).unwrap(), 254);
    assert_eq!(evolution_root(2).unwrap(), 0);
    assert_eq!(evolution_root(24).unwrap(), 171);
}

#[test]
fn test_concurrent_resolution_matches_sequential() {
    let inputs: Vec<(u16, u32)> = (0..SPECIES_COUNT as u16)
        .map(|index| (index, u32::from(index) * 2711))
        .collect();
    let expected: Vec<u8> = inputs
        .iter()
        .map(|&(index, experience)| resolve_level(index, experience).unwrap())
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    inputs
                        .iter()
                        .map(|&(index, experience)| resolve_level(index, experience).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

proptest! {
    #[test]
    fn level_never_decreases_with_experience(
        index in 0u16..SPECIES_COUNT as u16,
        a in any::<u32>(),
        b in any::<u32>(),
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_level = resolve_level(index, low).unwrap();
        let high_level = resolve_level(index, high).unwrap();
        prop_assert!(low_level <= high_level);
    }

    #[test]
    fn level_is_always_in_range(index in 0u16..SPECIES_COUNT as u16, experience in 0u32..2_000_000) {
        let level = resolve_level(index, experience).unwrap();
        prop_assert!((1..=100).contains(&level));
        prop_assert!(threshold(index, level) <= experience || level == 1);
    }
}
