/// One value per calendar year, years strictly increasing.
///
/// Values keep full precision through correlation; [`AnnualSeries::rounded`]
/// exists for the presentation boundary only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnualSeries {
    points: Vec<(i32, f64)>,
}

impl AnnualSeries {
    /// Build from unordered (year, value) points, sorting by year.
    pub fn from_points(mut points: Vec<(i32, f64)>) -> AnnualSeries {
        points.sort_by_key(|&(year, _)| year);
        AnnualSeries { points }
    }

    pub fn points(&self) -> &[(i32, f64)] {
        &self.points
    }

    pub fn years(&self) -> Vec<i32> {
        self.points.iter().map(|&(year, _)| year).collect()
    }

    /// The value for a year, if the year is present.
    pub fn value_for(&self, year: i32) -> Option<f64> {
        self.points
            .binary_search_by_key(&year, |&(y, _)| y)
            .ok()
            .map(|idx| self.points[idx].1)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A copy with every value rounded to `decimals` places. Display only;
    /// correlation must run on the unrounded series.
    pub fn rounded(&self, decimals: u32) -> AnnualSeries {
        let factor = 10f64.powi(decimals as i32);
        AnnualSeries {
            points: self
                .points
                .iter()
                .map(|&(year, value)| (year, (value * factor).round() / factor))
                .collect(),
        }
    }
}
