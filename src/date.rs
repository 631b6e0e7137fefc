use std::fmt;

use jiff::civil::Date;

use crate::converter::gregorian_to_ethiopian;
use crate::error::ConversionError;

/// A date in the Gregorian calendar, as supplied by the caller.
///
/// Only non-zero components are required; month and day are not range checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GregorianDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl GregorianDate {
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Converts this date into the Ethiopian calendar.
    pub fn to_ethiopian(self) -> Result<EthiopianDate, ConversionError> {
        gregorian_to_ethiopian(self)
    }
}

impl From<Date> for GregorianDate {
    fn from(date: Date) -> Self {
        Self {
            year: i32::from(date.year()),
            month: i32::from(date.month()),
            day: i32::from(date.day()),
        }
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A date in the Ethiopian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EthiopianDate {
    pub year: i64,
    /// Month number in `1..=13`, where 13 is Pagumain.
    pub month: u8,
    pub day: i64,
}

impl EthiopianDate {
    pub fn month(&self) -> Option<EthiopianMonth> {
        EthiopianMonth::from_number(self.month)
    }

    pub fn month_name(&self) -> &'static str {
        self.month().map_or("Unknown", EthiopianMonth::name)
    }

    /// Number of days in this date's month. Pagumain has six days in
    /// Ethiopian leap years and five otherwise.
    pub fn days_in_month(&self) -> i64 {
        match self.month() {
            Some(EthiopianMonth::Pagumain) if self.year.rem_euclid(4) == 3 => 6,
            Some(EthiopianMonth::Pagumain) => 5,
            _ => 30,
        }
    }

    /// Long form: `{day} {month_name} {year}`.
    pub fn to_long_string(&self) -> String {
        format!("{} {} {}", self.day, self.month_name(), self.year)
    }
}

impl fmt::Display for EthiopianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.year, self.month, self.day)
    }
}

impl From<EthiopianDate> for (i64, u8, i64) {
    fn from(date: EthiopianDate) -> Self {
        (date.year, date.month, date.day)
    }
}

/// The thirteen months of the Ethiopian year, starting with the new year month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EthiopianMonth {
    Meskerem = 1,
    Tikimt,
    Hidar,
    Tahsas,
    Tir,
    Yekatit,
    Megabit,
    Miazia,
    Genbot,
    Sene,
    Hamle,
    Nehase,
    Pagumain,
}

impl EthiopianMonth {
    const ALL: [EthiopianMonth; 13] = [
        Self::Meskerem,
        Self::Tikimt,
        Self::Hidar,
        Self::Tahsas,
        Self::Tir,
        Self::Yekatit,
        Self::Megabit,
        Self::Miazia,
        Self::Genbot,
        Self::Sene,
        Self::Hamle,
        Self::Nehase,
        Self::Pagumain,
    ];

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=13 => Some(Self::ALL[usize::from(number) - 1]),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Meskerem => "Meskerem",
            Self::Tikimt => "Tikimt",
            Self::Hidar => "Hidar",
            Self::Tahsas => "Tahsas",
            Self::Tir => "Tir",
            Self::Yekatit => "Yekatit",
            Self::Megabit => "Megabit",
            Self::Miazia => "Miazia",
            Self::Genbot => "Genbot",
            Self::Sene => "Sene",
            Self::Hamle => "Hamle",
            Self::Nehase => "Nehase",
            Self::Pagumain => "Pagumain",
        }
    }
}

impl fmt::Display for EthiopianMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gregorian_from_jiff_date() {
        let date = GregorianDate::from(Date::constant(2025, 6, 19));
        insta::assert_debug_snapshot!(date, @r#"
        GregorianDate {
            year: 2025,
            month: 6,
            day: 19,
        }
        "#);
        insta::assert_snapshot!(date, @"2025-06-19");

        let date = GregorianDate::from(Date::constant(2020, 9, 11));
        assert_eq!(date, GregorianDate::new(2020, 9, 11));
    }

    #[test]
    fn test_ethiopian_display() {
        let date = EthiopianDate {
            year: 2013,
            month: 1,
            day: 1,
        };
        insta::assert_snapshot!(date, @"2013/1/1");
        insta::assert_snapshot!(date.to_long_string(), @"1 Meskerem 2013");

        let date = EthiopianDate {
            year: 2015,
            month: 13,
            day: 6,
        };
        insta::assert_snapshot!(date.to_long_string(), @"6 Pagumain 2015");
        assert_eq!(<(i64, u8, i64)>::from(date), (2015, 13, 6));
        assert_eq!(date.days_in_month(), 6);

        let date = EthiopianDate {
            year: 2016,
            month: 13,
            day: 5,
        };
        assert_eq!(date.days_in_month(), 5);

        let date = EthiopianDate {
            year: 2016,
            month: 4,
            day: 28,
        };
        assert_eq!(date.days_in_month(), 30);
        insta::assert_snapshot!(date.month_name(), @"Tahsas");
    }

    #[test]
    fn test_month_numbers() {
        for number in 1..=13 {
            let month = EthiopianMonth::from_number(number).unwrap();
            assert_eq!(month.number(), number);
        }

        assert_eq!(EthiopianMonth::from_number(0), None);
        assert_eq!(EthiopianMonth::from_number(14), None);
        assert_eq!(EthiopianMonth::from_number(4), Some(EthiopianMonth::Tahsas));
        insta::assert_snapshot!(EthiopianMonth::Tahsas, @"Tahsas");
    }
}
