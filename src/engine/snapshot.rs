//! Per-tick view of the system clock.

use jiff::Zoned;

/// Everything a clock face needs to draw one frame, derived from the wall
/// clock at the start of each render tick.
///
/// Snapshots are recomputed every tick and never stored across ticks, so
/// there is no drift-correction or caching logic anywhere.
#[derive(Debug, Clone)]
pub struct TimeSnapshot {
    /// Hour of day, 0–23.
    pub hour: i8,
    /// Minute, 0–59.
    pub minute: i8,
    /// Second, 0–59.
    pub second: i8,
    /// Full weekday name, e.g. `"Monday"`.
    pub weekday: String,
    /// ISO 8601 week number, 1–53.
    pub iso_week: i8,
    /// Full date line, e.g. `"Monday, January 01, 2024"`.
    pub date: String,
}

impl TimeSnapshot {
    /// Snapshot the system clock in the local time zone.
    pub fn now() -> Self {
        Self::from_zoned(&Zoned::now())
    }

    /// Derive a snapshot from an arbitrary zoned datetime.
    pub fn from_zoned(zoned: &Zoned) -> Self {
        Self {
            hour: zoned.hour(),
            minute: zoned.minute(),
            second: zoned.second(),
            weekday: zoned.strftime("%A").to_string(),
            iso_week: zoned.date().iso_week_date().week(),
            date: zoned.strftime("%A, %B %d, %Y").to_string(),
        }
    }

    /// Hour on a 12-hour dial: 1–12.
    pub fn hour12(&self) -> i8 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    pub fn is_pm(&self) -> bool {
        self.hour >= 12
    }

    /// `"AM"` or `"PM"`.
    pub fn meridiem(&self) -> &'static str {
        if self.is_pm() { "PM" } else { "AM" }
    }

    /// 12-hour hour label without a leading zero, e.g. `"3"`.
    pub fn hour_label(&self) -> String {
        self.hour12().to_string()
    }

    /// Zero-padded minute label, e.g. `"05"`.
    pub fn minute_label(&self) -> String {
        format!("{:02}", self.minute)
    }

    /// Zero-padded second label, e.g. `"09"`.
    pub fn second_label(&self) -> String {
        format!("{:02}", self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use jiff::tz::TimeZone;

    fn snapshot_at(y: i16, m: i8, d: i8, hh: i8, mm: i8, ss: i8) -> TimeSnapshot {
        let zoned = date(y, m, d)
            .at(hh, mm, ss, 0)
            .to_zoned(TimeZone::UTC)
            .unwrap();
        TimeSnapshot::from_zoned(&zoned)
    }

    #[test]
    fn early_morning_labels() {
        let snap = snapshot_at(2024, 1, 1, 3, 5, 9);
        assert_eq!(snap.hour_label(), "3");
        assert_eq!(snap.minute_label(), "05");
        assert_eq!(snap.second_label(), "09");
        assert_eq!(snap.meridiem(), "AM");
    }

    #[test]
    fn weekday_and_iso_week() {
        // 2024-01-01 was a Monday and starts ISO week 1.
        let snap = snapshot_at(2024, 1, 1, 3, 5, 9);
        assert_eq!(snap.weekday, "Monday");
        assert_eq!(snap.iso_week, 1);
        assert_eq!(snap.date, "Monday, January 01, 2024");
    }

    #[test]
    fn twelve_hour_wrapping() {
        assert_eq!(snapshot_at(2024, 1, 1, 0, 30, 0).hour12(), 12);
        assert_eq!(snapshot_at(2024, 1, 1, 0, 30, 0).meridiem(), "AM");
        assert_eq!(snapshot_at(2024, 1, 1, 12, 0, 0).hour12(), 12);
        assert_eq!(snapshot_at(2024, 1, 1, 12, 0, 0).meridiem(), "PM");
        assert_eq!(snapshot_at(2024, 1, 1, 15, 0, 0).hour_label(), "3");
        assert_eq!(snapshot_at(2024, 1, 1, 15, 0, 0).meridiem(), "PM");
    }

    #[test]
    fn late_december_belongs_to_next_iso_year() {
        // 2024-12-30 is a Monday in ISO week 1 of 2025.
        let snap = snapshot_at(2024, 12, 30, 10, 0, 0);
        assert_eq!(snap.weekday, "Monday");
        assert_eq!(snap.iso_week, 1);
    }
}
