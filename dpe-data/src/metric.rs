use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The reduction applied when collapsing duration buckets into one annual
/// value. Min is deliberately excluded: the minimum bucket total is almost
/// always 0 mm and carries no information.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Metric {
    Mean,
    Max,
}

impl Metric {
    pub fn name(self) -> &'static str {
        match self {
            Metric::Mean => "mean",
            Metric::Max => "max",
        }
    }

    /// Capitalized form used in chart titles.
    pub fn title(self) -> &'static str {
        match self {
            Metric::Mean => "Mean",
            Metric::Max => "Max",
        }
    }

    /// Reduce a year's bucket totals to one scalar. None when the year has
    /// no buckets, so empty years are omitted rather than emitted as zero.
    pub fn reduce(self, values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        match self {
            Metric::Mean => Some(values.iter().sum::<f64>() / values.len() as f64),
            Metric::Max => values.iter().copied().max_by(f64::total_cmp),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mean" => Ok(Metric::Mean),
            "max" => Ok(Metric::Max),
            other => Err(format!("unknown metric: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Metric;

    #[test]
    fn test_reduce() {
        let values = [2.0, 4.0, 9.0];
        assert_eq!(Metric::Mean.reduce(&values), Some(5.0));
        assert_eq!(Metric::Max.reduce(&values), Some(9.0));
    }

    #[test]
    fn test_reduce_empty_is_none() {
        assert_eq!(Metric::Mean.reduce(&[]), None);
        assert_eq!(Metric::Max.reduce(&[]), None);
    }

    #[test]
    fn test_max_at_least_mean() {
        let values = [0.0, 1.5, 3.25, 10.0];
        let mean = Metric::Mean.reduce(&values).unwrap();
        let max = Metric::Max.reduce(&values).unwrap();
        assert!(max >= mean);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("mean".parse::<Metric>().unwrap(), Metric::Mean);
        assert_eq!("max".parse::<Metric>().unwrap(), Metric::Max);
        assert!("min".parse::<Metric>().is_err());
    }
}
