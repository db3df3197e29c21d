use super::domain::{
    Dimension, DimensionGroup, IdealProfile, MeasuredProfile, DIMENSION_MAX, DIMENSION_MIN,
};

/// Raised when a measured profile cannot be scored.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidProfileError {
    #[error("profile is missing required dimension {dimension}")]
    Missing { dimension: Dimension },
    #[error("profile dimension {dimension} = {value} is outside [0, 100]")]
    OutOfRange { dimension: Dimension, value: f64 },
}

impl InvalidProfileError {
    pub fn dimension(&self) -> Dimension {
        match self {
            InvalidProfileError::Missing { dimension }
            | InvalidProfileError::OutOfRange { dimension, .. } => *dimension,
        }
    }
}

/// Raised when an ideal profile's ranges cannot support a weighted average.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidIdealRangeError {
    #[error("range for {dimension} ({min}-{max}) must lie within [0, 100]")]
    BoundOutOfRange {
        dimension: Dimension,
        min: f64,
        max: f64,
    },
    #[error("range for {dimension} has min {min} greater than max {max}")]
    InvertedRange {
        dimension: Dimension,
        min: f64,
        max: f64,
    },
    #[error("weight for {dimension} = {weight} must lie within [0, 1]")]
    WeightOutOfRange { dimension: Dimension, weight: f64 },
    #[error("{group} weights sum to zero")]
    ZeroGroupWeight { group: DimensionGroup },
}

/// Any validation failure that halts a fit computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    #[error(transparent)]
    InvalidProfile(#[from] InvalidProfileError),
    #[error(transparent)]
    InvalidIdealRange(#[from] InvalidIdealRangeError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("type code must not be blank")]
pub struct BlankTypeCode;

fn within_scale(value: f64) -> bool {
    (DIMENSION_MIN..=DIMENSION_MAX).contains(&value)
}

impl MeasuredProfile {
    pub fn validate(&self) -> Result<(), InvalidProfileError> {
        for dimension in Dimension::ALL {
            let value = self.value(dimension);
            if !within_scale(value) {
                return Err(InvalidProfileError::OutOfRange { dimension, value });
            }
        }
        Ok(())
    }
}

impl IdealProfile {
    /// Every problem with the profile, in dimension order followed by group checks.
    pub fn validation_issues(&self) -> Vec<InvalidIdealRangeError> {
        let mut issues = Vec::new();

        for dimension in Dimension::ALL {
            let range = self.range(dimension);
            if !within_scale(range.min) || !within_scale(range.max) {
                issues.push(InvalidIdealRangeError::BoundOutOfRange {
                    dimension,
                    min: range.min,
                    max: range.max,
                });
            }
            if range.min > range.max {
                issues.push(InvalidIdealRangeError::InvertedRange {
                    dimension,
                    min: range.min,
                    max: range.max,
                });
            }
            if !(0.0..=1.0).contains(&range.weight) {
                issues.push(InvalidIdealRangeError::WeightOutOfRange {
                    dimension,
                    weight: range.weight,
                });
            }
        }

        for group in [DimensionGroup::Disc, DimensionGroup::Mbti] {
            if self.group_weight(group) <= 0.0 {
                issues.push(InvalidIdealRangeError::ZeroGroupWeight { group });
            }
        }

        issues
    }

    pub fn validate(&self) -> Result<(), InvalidIdealRangeError> {
        match self.validation_issues().into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(()),
        }
    }
}
