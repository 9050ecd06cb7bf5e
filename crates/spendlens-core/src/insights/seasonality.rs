//! Static calendar lookup for seasonal spending advisories

use chrono::{Datelike, NaiveDate};

use super::types::SeasonalTag;

/// Seasonal tag for a zero-based month index (0 = January)
pub fn seasonal_hint(month_index: u32) -> Option<SeasonalTag> {
    match month_index {
        11 | 0 | 1 => Some(SeasonalTag::WinterHoliday),
        6..=8 => Some(SeasonalTag::Summer),
        _ => None,
    }
}

/// Seasonal tag for the month containing `date`
pub fn seasonal_hint_for(date: NaiveDate) -> Option<SeasonalTag> {
    seasonal_hint(date.month0())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_months() {
        assert_eq!(seasonal_hint(0), Some(SeasonalTag::WinterHoliday));
        assert_eq!(seasonal_hint(7), Some(SeasonalTag::Summer));
        assert_eq!(seasonal_hint(3), None);
    }

    #[test]
    fn test_full_calendar() {
        let expected = [
            Some(SeasonalTag::WinterHoliday), // Jan
            Some(SeasonalTag::WinterHoliday), // Feb
            None,
            None,
            None,
            None,
            Some(SeasonalTag::Summer), // Jul
            Some(SeasonalTag::Summer),
            Some(SeasonalTag::Summer), // Sep
            None,
            None,
            Some(SeasonalTag::WinterHoliday), // Dec
        ];
        for (month, tag) in expected.iter().enumerate() {
            assert_eq!(seasonal_hint(month as u32), *tag, "month index {}", month);
        }
    }

    #[test]
    fn test_out_of_range_month() {
        assert_eq!(seasonal_hint(12), None);
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 24).unwrap();
        assert_eq!(seasonal_hint_for(date), Some(SeasonalTag::WinterHoliday));
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(seasonal_hint_for(date), None);
    }
}
