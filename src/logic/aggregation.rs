use crate::error::Result;
use crate::models::{DaySummary, ForecastSample};
use chrono::NaiveDate;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Number of day cards the forecast screen shows
pub const MAX_FORECAST_DAYS: usize = 5;

/// Group 3-hour samples into per-day summaries.
///
/// Days come out in the order they first appear in `samples`, capped at
/// [`MAX_FORECAST_DAYS`]. Each day keeps the condition of its first sample;
/// later samples only widen the temperature range and raise the rain chance.
pub fn aggregate_daily(samples: &[ForecastSample]) -> Result<Vec<DaySummary>> {
    let mut days: Vec<DaySummary> = Vec::new();
    let mut by_date: HashMap<NaiveDate, usize> = HashMap::new();

    for sample in samples {
        let date = sample.day_key()?;
        match by_date.entry(date) {
            Entry::Occupied(slot) => days[*slot.get()].absorb(sample),
            Entry::Vacant(slot) => {
                slot.insert(days.len());
                days.push(DaySummary::seed(date, sample));
            }
        }
    }

    days.truncate(MAX_FORECAST_DAYS);
    Ok(days)
}
