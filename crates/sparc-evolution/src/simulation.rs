//! Simulated adoption curves.
//!
//! No adoption metrics exist for the milestones yet, so the trend charts are
//! fed from exponential draws. Every series produced here is a placeholder and
//! the charts label it as simulated.
use anyhow::{anyhow, Result};
use chrono::{Datelike, NaiveDate};
use rand::distributions::Distribution;
use rand::Rng;
use statrs::distribution::Exp;

/// One simulated curve: cumulative index per month-end date.
#[derive(Debug, Clone, PartialEq)]
pub struct AdoptionSeries {
    pub label: String,
    pub dates: Vec<NaiveDate>,
    pub values: Vec<f64>,
}

impl AdoptionSeries {
    pub fn date_labels(&self) -> Vec<String> {
        self.dates.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect()
    }
}

/// Label, month offset of the first non-zero value, and mean monthly increment.
struct TrendSpec {
    label: &'static str,
    offset: usize,
    mean: f64,
}

const ADOPTION_TRENDS: [TrendSpec; 4] = [
    TrendSpec { label: "Original SPARC", offset: 0, mean: 2.0 },
    TrendSpec { label: "SPARC2 Package", offset: 6, mean: 3.0 },
    TrendSpec { label: "Create-SPARC", offset: 12, mean: 4.0 },
    TrendSpec { label: "Claude-Flow", offset: 18, mean: 5.0 },
];

const DASHBOARD_TRENDS: [TrendSpec; 2] = [
    TrendSpec { label: "Community Growth", offset: 0, mean: 1.0 },
    TrendSpec { label: "Usage Adoption", offset: 0, mean: 1.5 },
];

/// Last day of the given month.
pub fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

/// Month-end dates starting at the end of `start`'s month, every `step_months`,
/// up to and including `end`.
pub fn month_ends(start: NaiveDate, end: NaiveDate, step_months: u32) -> Vec<NaiveDate> {
    let step = step_months.max(1) as i32;
    let mut index = start.year() * 12 + start.month0() as i32;
    let mut dates = Vec::new();

    while let Some(date) = month_end(index.div_euclid(12), index.rem_euclid(12) as u32 + 1) {
        if date > end {
            break;
        }
        dates.push(date);
        index += step;
    }

    dates
}

/// `offset` zeros followed by the running sum of `len - offset` exponential
/// draws with the given mean.
pub fn staggered_cumulative<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    offset: usize,
    mean: f64,
) -> Result<Vec<f64>> {
    let exp = Exp::new(1.0 / mean)
        .map_err(|e| anyhow!("Invalid mean {} for exponential draws: {}", mean, e))?;
    let offset = offset.min(len);

    let mut values = vec![0.0; offset];
    let mut total = 0.0;
    for _ in offset..len {
        total += exp.sample(rng);
        values.push(total);
    }

    Ok(values)
}

fn simulate<R: Rng + ?Sized>(
    rng: &mut R,
    specs: &[TrendSpec],
    dates: Vec<NaiveDate>,
) -> Result<Vec<AdoptionSeries>> {
    specs
        .iter()
        .map(|spec| {
            let values = staggered_cumulative(rng, dates.len(), spec.offset, spec.mean)?;
            Ok(AdoptionSeries {
                label: spec.label.to_string(),
                dates: dates.clone(),
                values,
            })
        })
        .collect()
}

fn window() -> Result<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).ok_or_else(|| anyhow!("Invalid window start"))?;
    let end = NaiveDate::from_ymd_opt(2025, 7, 1).ok_or_else(|| anyhow!("Invalid window end"))?;
    Ok((start, end))
}

/// Monthly curves for the four release lines, each starting six months after
/// the previous one.
pub fn adoption_series<R: Rng + ?Sized>(rng: &mut R) -> Result<Vec<AdoptionSeries>> {
    let (start, end) = window()?;
    simulate(rng, &ADOPTION_TRENDS, month_ends(start, end, 1))
}

/// Quarterly community and usage curves for the dashboard panel.
pub fn dashboard_series<R: Rng + ?Sized>(rng: &mut R) -> Result<Vec<AdoptionSeries>> {
    let (start, end) = window()?;
    simulate(rng, &DASHBOARD_TRENDS, month_ends(start, end, 3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn month_end_handles_december_and_leap_years() {
        assert_eq!(month_end(2023, 12), NaiveDate::from_ymd_opt(2023, 12, 31));
        assert_eq!(month_end(2024, 2), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(month_end(2023, 2), NaiveDate::from_ymd_opt(2023, 2, 28));
    }

    #[test]
    fn monthly_window_has_thirty_points() {
        let (start, end) = window().unwrap();
        let dates = month_ends(start, end, 1);
        assert_eq!(dates.len(), 30);
        assert_eq!(dates.first(), NaiveDate::from_ymd_opt(2023, 1, 31).as_ref());
        assert_eq!(dates.last(), NaiveDate::from_ymd_opt(2025, 6, 30).as_ref());
    }

    #[test]
    fn quarterly_window_has_ten_points() {
        let (start, end) = window().unwrap();
        let dates = month_ends(start, end, 3);
        assert_eq!(dates.len(), 10);
        assert_eq!(dates[1], NaiveDate::from_ymd_opt(2023, 4, 30).unwrap());
        assert_eq!(dates.last(), NaiveDate::from_ymd_opt(2025, 4, 30).as_ref());
    }

    #[test]
    fn offset_larger_than_length_is_all_zeros() {
        let mut rng = StdRng::seed_from_u64(1);
        let values = staggered_cumulative(&mut rng, 4, 10, 2.0).unwrap();
        assert_eq!(values, vec![0.0; 4]);
    }

    #[test]
    fn non_positive_mean_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(staggered_cumulative(&mut rng, 4, 0, -1.0).is_err());
    }
}
