/// Minimum valid year (inclusive), the year field has four digits
pub const MIN_YEAR: u16 = 1;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator, used by both orientations
pub const DATE_SEPARATOR: char = '-';
/// Range separator between two constant dates
pub const RANGE_SEPARATOR: char = '~';
/// Separates a wildcard pattern from its weekday filter
pub const WEEKDAY_SEPARATOR: char = ',';
/// Stands for any legal digit in a date pattern
pub const WILDCARD: char = '*';

/// Length of a date or pattern in either orientation
pub const PATTERN_LEN: usize = 10;

/// Rendering of a bare date (month-first)
pub const AMERICAN_FORMAT: &str = "%m-%d-%Y";
