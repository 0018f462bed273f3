use serde::{Deserialize, Serialize};

/// How a new distance from the origin updates the recorded extrema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtremaPolicy {
    /// Minimum and maximum are checked separately, so both can move on the same update.
    #[default]
    Independent,
    /// Only the maximum is checked when the minimum did not move.
    ///
    /// A single update then changes at most one extremum, and the maximum stays at zero until the
    /// distance stops decreasing. The simulator records one update per body per step, so a body
    /// attracted by several others does not get both extrema set on its first step, unlike a
    /// per-pair update would.
    FirstMatch,
}

/// Distance of a body from the origin and the closest and farthest values seen so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceExtrema {
    distance: f64,
    min: f64,
    max: f64,
}

impl Default for DistanceExtrema {
    fn default() -> Self {
        Self {
            distance: 0.0,
            min: f64::INFINITY,
            max: 0.0,
        }
    }
}

impl DistanceExtrema {
    /// Records a new distance, tightening the extrema according to `policy`.
    #[inline]
    pub fn record(&mut self, distance: f64, policy: ExtremaPolicy) {
        self.distance = distance;

        match policy {
            ExtremaPolicy::Independent => {
                if distance < self.min {
                    self.min = distance;
                }
                if distance > self.max {
                    self.max = distance;
                }
            }
            ExtremaPolicy::FirstMatch => {
                if distance < self.min {
                    self.min = distance;
                } else if distance > self.max {
                    self.max = distance;
                }
            }
        }
    }

    /// Last recorded distance.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Closest recorded distance (perigee), infinite until something is recorded.
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Farthest recorded distance (apogee), zero until something is recorded.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn independent_updates_both_on_first_record() {
        let mut extrema = DistanceExtrema::default();
        extrema.record(5.0, ExtremaPolicy::Independent);

        assert_eq!(extrema.min(), 5.0);
        assert_eq!(extrema.max(), 5.0);
        assert_eq!(extrema.distance(), 5.0);
    }

    #[test]
    fn first_match_updates_one_at_a_time() {
        let mut extrema = DistanceExtrema::default();
        extrema.record(5.0, ExtremaPolicy::FirstMatch);

        assert_eq!(extrema.min(), 5.0);
        assert_eq!(extrema.max(), 0.0);

        extrema.record(7.0, ExtremaPolicy::FirstMatch);
        assert_eq!(extrema.min(), 5.0);
        assert_eq!(extrema.max(), 7.0);

        extrema.record(3.0, ExtremaPolicy::FirstMatch);
        assert_eq!(extrema.min(), 3.0);
        assert_eq!(extrema.max(), 7.0);
    }

    #[test]
    fn independent_keeps_distance_within_bounds() {
        let mut extrema = DistanceExtrema::default();

        for d in [4.0, 2.0, 9.0, 6.0, 1.0, 12.0] {
            extrema.record(d, ExtremaPolicy::Independent);
            assert!(extrema.min() <= extrema.distance());
            assert!(extrema.distance() <= extrema.max());
        }

        assert_eq!((extrema.min(), extrema.max()), (1.0, 12.0));
    }
}
