//! Packed calendar timestamps.

use std::fmt;

/// Calendar timestamp packed into a single `u64`, as sent by the server.
///
/// Bit layout, least significant first:
///
/// ```text
/// second:6 | minute:6 | hour:5 | day:5 | month:4 | year:38
/// ```
///
/// The value is a plain calendar encoding, not an epoch offset; no clock
/// arithmetic is performed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime(u64);

impl DateTime {
    /// Wrap a raw wire value.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw wire value.
    pub fn raw(self) -> u64 {
        self.0
    }

    /// Pack individual calendar fields.
    ///
    /// Fields are masked to their bit widths; out-of-range inputs wrap
    /// rather than spill into neighboring fields.
    pub fn from_parts(year: u64, month: u64, day: u64, hour: u64, minute: u64, second: u64) -> Self {
        Self(
            (second & 63)
                | (minute & 63) << 6
                | (hour & 31) << 12
                | (day & 31) << 17
                | (month & 15) << 22
                | year << 26,
        )
    }

    /// Seconds field (0-59).
    pub fn second(self) -> u64 {
        self.0 & 63
    }

    /// Minutes field (0-59).
    pub fn minute(self) -> u64 {
        (self.0 >> 6) & 63
    }

    /// Hours field (0-23).
    pub fn hour(self) -> u64 {
        (self.0 >> 12) & 31
    }

    /// Day-of-month field (1-31).
    pub fn day(self) -> u64 {
        (self.0 >> 17) & 31
    }

    /// Month field (1-12).
    pub fn month(self) -> u64 {
        (self.0 >> 22) & 15
    }

    /// Year field.
    pub fn year(self) -> u64 {
        self.0 >> 26
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year(),
            self.month(),
            self.day(),
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_round_trip_through_packing() {
        let dt = DateTime::from_parts(2024, 12, 31, 23, 59, 58);
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 12);
        assert_eq!(dt.day(), 31);
        assert_eq!(dt.hour(), 23);
        assert_eq!(dt.minute(), 59);
        assert_eq!(dt.second(), 58);
    }

    #[test]
    fn raw_value_is_preserved() {
        let dt = DateTime::from_raw(0x1F8A_3C2D_4E5F);
        assert_eq!(dt.raw(), 0x1F8A_3C2D_4E5F);
    }

    #[test]
    fn zero_is_the_calendar_origin() {
        let dt = DateTime::from_raw(0);
        assert_eq!(dt.year(), 0);
        assert_eq!(dt.month(), 0);
        assert_eq!(dt.second(), 0);
    }

    #[test]
    fn fields_do_not_bleed_into_neighbors() {
        // All-ones in one field must leave the others at zero.
        let dt = DateTime::from_parts(0, 0, 0, 0, 63, 0);
        assert_eq!(dt.minute(), 63);
        assert_eq!(dt.second(), 0);
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn display_is_human_readable() {
        let dt = DateTime::from_parts(2011, 3, 8, 9, 5, 7);
        assert_eq!(dt.to_string(), "2011-03-08 09:05:07");
    }
}
