//! Daily temperature samples and the source they come from.

use crate::calendar::DateRange;
use crate::types::error::SourceError;

/// Three parallel daily series for a date range.
///
/// Each series may be absent (the provider did not report it) or empty.
/// Non-finite readings mark gaps and are skipped during aggregation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TemperatureSampleSet {
    /// Daily minimum temperatures.
    pub min: Option<Vec<f64>>,
    /// Daily maximum temperatures.
    pub max: Option<Vec<f64>>,
    /// Daily mean temperatures.
    pub mean: Option<Vec<f64>>,
}

impl TemperatureSampleSet {
    /// Creates a sample set with all three series present.
    pub fn new(min: Vec<f64>, max: Vec<f64>, mean: Vec<f64>) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            mean: Some(mean),
        }
    }

    /// Returns true when no series holds a usable reading.
    pub fn is_empty(&self) -> bool {
        [&self.min, &self.max, &self.mean]
            .into_iter()
            .flatten()
            .all(|series| series.iter().all(|v| !v.is_finite()))
    }
}

/// Anything that can produce samples for a validated date range.
///
/// Implementations own their latency: a networked source must bound its own
/// fetch time and report expiry as a `SourceError`. Closures with the
/// matching signature implement this trait, which is convenient for tests.
pub trait SampleSource {
    /// Fetches the daily series covering `range`.
    ///
    /// # Errors
    /// `SourceError` when the data cannot be obtained.
    fn fetch(&self, range: &DateRange) -> Result<TemperatureSampleSet, SourceError>;
}

impl<F> SampleSource for F
where
    F: Fn(&DateRange) -> Result<TemperatureSampleSet, SourceError>,
{
    fn fetch(&self, range: &DateRange) -> Result<TemperatureSampleSet, SourceError> {
        self(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(TemperatureSampleSet::default().is_empty());
        assert!(TemperatureSampleSet::new(vec![], vec![], vec![]).is_empty());
        assert!(TemperatureSampleSet::new(vec![f64::NAN], vec![], vec![]).is_empty());
        assert!(!TemperatureSampleSet::new(vec![], vec![1.0], vec![]).is_empty());
    }

    #[test]
    fn test_closure_source() {
        let range = DateRange::parse("2026-10-01", "2026-10-02").unwrap();
        let source = |r: &DateRange| -> Result<TemperatureSampleSet, SourceError> {
            let days = r.day_count() as usize;
            Ok(TemperatureSampleSet::new(vec![1.0; days], vec![2.0; days], vec![1.5; days]))
        };
        let samples = source.fetch(&range).unwrap();
        assert_eq!(samples.min.unwrap().len(), 2);
    }

    #[test]
    fn test_failing_source() {
        let range = DateRange::parse("2026-10-01", "2026-10-02").unwrap();
        let source =
            |_: &DateRange| -> Result<TemperatureSampleSet, SourceError> { Err(SourceError::new("down")) };
        assert_eq!(source.fetch(&range).unwrap_err().message(), "down");
    }
}
