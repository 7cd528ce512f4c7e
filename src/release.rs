use chrono::{Datelike, NaiveDate};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{LegalityError, Result};

/// Release regions, in the order the games shipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, FromPrimitive, Serialize, Deserialize)]
pub enum Region {
    Japan = 0,
    NorthAmerica = 1,
    Europe = 2,
    Korea = 3,
}

impl TryFrom<u8> for Region {
    type Error = LegalityError;

    fn try_from(value: u8) -> Result<Self> {
        Region::from_u8(value).ok_or(LegalityError::UnknownRegion(value))
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match *self {
            Region::Japan => "Japan",
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::Korea => "Korea",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Title {
    DiamondPearl,
    Platinum,
    HeartGoldSoulSilver,
}

impl Title {
    pub fn release_window(self) -> &'static ReleaseWindow {
        match self {
            Title::DiamondPearl => &DIAMOND_PEARL,
            Title::Platinum => &PLATINUM,
            Title::HeartGoldSoulSilver => &HEART_GOLD_SOUL_SILVER,
        }
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match *self {
            Title::DiamondPearl => "Diamond/Pearl",
            Title::Platinum => "Platinum",
            Title::HeartGoldSoulSilver => "HeartGold/SoulSilver",
        })
    }
}

/// A calendar day. Field order gives the derived ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleaseDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl ReleaseDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        ReleaseDate { year, month, day }
    }

    pub fn to_naive_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for ReleaseDate {
    fn from(date: NaiveDate) -> Self {
        ReleaseDate::new(date.year(), date.month(), date.day())
    }
}

/// Release date of one title in each region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReleaseWindow {
    dates: [ReleaseDate; 4],
}

impl ReleaseWindow {
    pub const fn new(dates: [ReleaseDate; 4]) -> Self {
        ReleaseWindow { dates }
    }

    pub fn release_date(&self, region: Region) -> ReleaseDate {
        self.dates[region as usize]
    }
}

pub static DIAMOND_PEARL: ReleaseWindow = ReleaseWindow::new([
    ReleaseDate::new(2006, 9, 28),
    ReleaseDate::new(2007, 4, 22),
    ReleaseDate::new(2007, 7, 27),
    ReleaseDate::new(2008, 2, 14),
]);

pub static PLATINUM: ReleaseWindow = ReleaseWindow::new([
    ReleaseDate::new(2008, 9, 13),
    ReleaseDate::new(2009, 3, 22),
    ReleaseDate::new(2009, 5, 22),
    ReleaseDate::new(2009, 7, 2),
]);

// Korea got these before North America.
pub static HEART_GOLD_SOUL_SILVER: ReleaseWindow = ReleaseWindow::new([
    ReleaseDate::new(2009, 9, 12),
    ReleaseDate::new(2010, 3, 14),
    ReleaseDate::new(2010, 3, 26),
    ReleaseDate::new(2010, 2, 4),
]);

/// Whether a record stamped `timestamp` could have come from `region`: the
/// title must already have been released there.
pub fn is_date_plausible(region: Region, timestamp: NaiveDate, window: &ReleaseWindow) -> bool {
    window.release_date(region) <= ReleaseDate::from(timestamp)
}

/// Builds a timestamp from a record's raw met date bytes. The year byte
/// counts from 2000.
pub fn met_date(year: u8, month: u8, day: u8) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2000 + i32::from(year), month.into(), day.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn release_day_itself_is_plausible() {
        let window = Title::DiamondPearl.release_window();
        assert!(is_date_plausible(Region::Korea, date(2008, 2, 14), window));
        assert!(!is_date_plausible(Region::Korea, date(2008, 2, 13), window));
        assert!(is_date_plausible(Region::Japan, date(2008, 2, 13), window));
    }

    #[test]
    fn korea_precedes_north_america_for_heart_gold() {
        let window = Title::HeartGoldSoulSilver.release_window();
        let feb = date(2010, 2, 20);
        assert!(is_date_plausible(Region::Korea, feb, window));
        assert!(!is_date_plausible(Region::NorthAmerica, feb, window));
    }

    #[test]
    fn dates_order_by_year_then_month_then_day() {
        assert!(ReleaseDate::new(2009, 12, 31) < ReleaseDate::new(2010, 1, 1));
        assert!(ReleaseDate::new(2010, 2, 4) < ReleaseDate::new(2010, 3, 1));
        assert_eq!(
            ReleaseDate::from(date(2009, 7, 2)),
            PLATINUM.release_date(Region::Korea)
        );
        assert_eq!(
            PLATINUM.release_date(Region::Europe).to_naive_date(),
            Some(date(2009, 5, 22))
        );
    }

    #[test]
    fn met_date_bytes() {
        assert_eq!(met_date(9, 3, 22), Some(date(2009, 3, 22)));
        assert_eq!(met_date(9, 2, 30), None);
        assert_eq!(met_date(9, 0, 1), None);
    }

    #[test]
    fn raw_regions() {
        assert_eq!(Region::try_from(0).unwrap(), Region::Japan);
        assert_eq!(Region::try_from(3).unwrap(), Region::Korea);
        assert!(matches!(
            Region::try_from(4),
            Err(LegalityError::UnknownRegion(4))
        ));
    }
}
