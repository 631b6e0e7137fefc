use tracing::{debug, trace};

use crate::date::{EthiopianDate, GregorianDate};
use crate::error::ConversionError;

/// The Ethiopian year trails the Gregorian year by eight until Meskerem 1.
const YEAR_OFFSET: i64 = 8;

/// First year of the Gregorian calendar reform.
const REFORM_YEAR: i64 = 1582;

/// Day of year of 4 October 1582, the last day before the ten skipped days.
const LAST_JULIAN_DAY_OF_REFORM_YEAR: i64 = 277;

/// Gregorian month lengths, January at index 1.
const GREGORIAN_MONTH_DAYS: [i64; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Ethiopian month lengths in the order they are met from 1 January.
///
/// Slot 1 is the remainder of Tahsas, slots 2-9 run Tir to Nehase, slot 10 is
/// Pagumain and slots 11-14 start the next Ethiopian year at Meskerem.
const ETHIOPIAN_SLOT_DAYS: [i64; 15] = [
    0, 30, 30, 30, 30, 30, 30, 30, 30, 30, 5, 30, 30, 30, 30,
];

/// Ethiopian month number for each slot. Slot 14 wraps around to Tahsas.
const SLOT_TO_MONTH: [u8; 15] = [0, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 1, 2, 3, 4];

const PAGUMAIN_SLOT: usize = 10;

/// Gregorian dates before this day of 1582 still follow the Julian alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Regime {
    Julian,
    Gregorian,
}

fn regime(year: i64, day_of_year: i64) -> Regime {
    if year < REFORM_YEAR
        || (year == REFORM_YEAR && day_of_year <= LAST_JULIAN_DAY_OF_REFORM_YEAR)
    {
        Regime::Julian
    } else {
        Regime::Gregorian
    }
}

fn is_gregorian_leap_year(year: i64) -> bool {
    (year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0) || year.rem_euclid(400) == 0
}

/// Returns the Gregorian day-position on which Meskerem 1 of the given
/// Ethiopian year falls.
fn start_day_of_ethiopian(year: i64) -> i64 {
    let mut offset = year.div_euclid(100) - year.div_euclid(400) - 4;

    // new year moves one day later after an Ethiopian leap year
    if (year - 1).rem_euclid(4) == 3 {
        offset += 1;
    }

    offset
}

/// Converts a Gregorian `(year, month, day)` triple into an Ethiopian
/// `(year, month, day)` triple.
///
/// Fails with [`ConversionError::InvalidInput`] if any component is zero.
/// Month and day are otherwise not range checked: out-of-range values yield
/// a result that is well-formed but meaningless.
///
/// ```
/// use ethiopian_date::convert;
///
/// assert_eq!(convert(2020, 9, 11), Ok((2013, 1, 1)));
/// assert!(convert(2020, 0, 11).is_err());
/// ```
pub fn convert(year: i32, month: i32, day: i32) -> Result<(i64, u8, i64), ConversionError> {
    gregorian_to_ethiopian(GregorianDate::new(year, month, day)).map(Into::into)
}

/// Converts a [`GregorianDate`] into the Ethiopian calendar.
///
/// See [`convert`] for the validation rules.
pub fn gregorian_to_ethiopian(date: GregorianDate) -> Result<EthiopianDate, ConversionError> {
    if date.year == 0 || date.month == 0 || date.day == 0 {
        return Err(ConversionError::InvalidInput);
    }

    let year = i64::from(date.year);
    let month = i64::from(date.month);
    let day = i64::from(date.day);

    let mut gregorian_months = GREGORIAN_MONTH_DAYS;
    if is_gregorian_leap_year(year) {
        gregorian_months[2] = 29;
    }

    let mut ethiopian_year = year - YEAR_OFFSET;

    let mut ethiopian_months = ETHIOPIAN_SLOT_DAYS;
    ethiopian_months[PAGUMAIN_SLOT] = if ethiopian_year.rem_euclid(4) == 3 { 6 } else { 5 };

    let new_year_day = start_day_of_ethiopian(ethiopian_year);

    // months past December count the whole year, months before January none
    let prior_months = usize::try_from(month - 1).unwrap_or(0).min(12);
    let mut until = gregorian_months[1..=prior_months].iter().sum::<i64>() + day;

    // alignment of Tahsas with 1 January
    let mut tahissas = if ethiopian_year.rem_euclid(4) == 0 { 26 } else { 25 };

    let regime = regime(year, until);
    match regime {
        Regime::Julian => {
            ethiopian_months[1] = 0;
            ethiopian_months[2] = tahissas;
        }
        Regime::Gregorian => {
            tahissas = new_year_day - 3;
            ethiopian_months[1] = tahissas;
        }
    }
    trace!(?regime, until, tahissas, new_year_day, "aligned month table");

    // the last slot absorbs whatever is left over
    let last_slot = ethiopian_months.len() - 1;
    let mut slot = 1;
    while slot < last_slot && until > ethiopian_months[slot] {
        until -= ethiopian_months[slot];
        slot += 1;
    }

    let ethiopian_day = if slot == 1 || ethiopian_months[slot] == 0 {
        until + (30 - tahissas)
    } else {
        until
    };

    if slot > PAGUMAIN_SLOT {
        ethiopian_year += 1;
    }

    let result = EthiopianDate {
        year: ethiopian_year,
        month: SLOT_TO_MONTH[slot],
        day: ethiopian_day,
    };
    debug!(gregorian = %date, ethiopian = %result, slot, "converted date");

    Ok(result)
}
