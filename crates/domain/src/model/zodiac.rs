// crates/domain/src/model/zodiac.rs
use std::fmt;

use roster_shared_kernel::BirthDate;
use serde::{Deserialize, Serialize};

/// Western zodiac signs, starting from the spring equinox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [Self; 12] = [
        Self::Aries,
        Self::Taurus,
        Self::Gemini,
        Self::Cancer,
        Self::Leo,
        Self::Virgo,
        Self::Libra,
        Self::Scorpio,
        Self::Sagittarius,
        Self::Capricorn,
        Self::Aquarius,
        Self::Pisces,
    ];

    /// 誕生日（月/日）から星座を求める。年は無視するので閏年でも結果は変わらない。
    ///
    /// Capricorn spans the year boundary, so both its December and January
    /// segments are matched explicitly.
    pub fn from_month_day(month: u32, day: u32) -> Self {
        match (month, day) {
            (12, 22..) | (1, ..=20) => Self::Capricorn,
            (1, _) | (2, ..=19) => Self::Aquarius,
            (2, _) | (3, ..=20) => Self::Pisces,
            (3, _) | (4, ..=20) => Self::Aries,
            (4, _) | (5, ..=21) => Self::Taurus,
            (5, _) | (6, ..=21) => Self::Gemini,
            (6, _) | (7, ..=22) => Self::Cancer,
            (7, _) | (8, ..=22) => Self::Leo,
            (8, _) | (9, ..=23) => Self::Virgo,
            (9, _) | (10, ..=23) => Self::Libra,
            (10, _) | (11, ..=22) => Self::Scorpio,
            _ => Self::Sagittarius,
        }
    }

    pub fn from_birth_date(birth_date: BirthDate) -> Self {
        Self::from_month_day(birth_date.month(), birth_date.day())
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
