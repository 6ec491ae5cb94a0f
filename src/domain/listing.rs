use crate::domain::errors::PredictionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Room type offered by a listing.
///
/// `EntireHome` is the reference category of the one-hot encoding and has
/// no column of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoomType {
    #[default]
    #[serde(rename = "Entire home/apt")]
    EntireHome,
    #[serde(rename = "Private room")]
    PrivateRoom,
    #[serde(rename = "Shared room")]
    SharedRoom,
}

impl RoomType {
    pub const ALL: [RoomType; 3] = [
        RoomType::EntireHome,
        RoomType::PrivateRoom,
        RoomType::SharedRoom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::EntireHome => "Entire home/apt",
            RoomType::PrivateRoom => "Private room",
            RoomType::SharedRoom => "Shared room",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = PredictionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "entire home/apt" | "entire" | "entire_home" => Ok(RoomType::EntireHome),
            "private room" | "private" | "private_room" => Ok(RoomType::PrivateRoom),
            "shared room" | "shared" | "shared_room" => Ok(RoomType::SharedRoom),
            _ => Err(PredictionError::InvalidInput {
                field: "room_type",
                reason: format!(
                    "'{}' is not one of 'Entire home/apt', 'Private room', 'Shared room'",
                    s
                ),
            }),
        }
    }
}

/// Attributes of a single listing as supplied by the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    pub latitude: f64,
    pub longitude: f64,
    pub minimum_nights: u32,
    pub number_of_reviews: u32,
    pub reviews_per_month: f64,
    pub host_listings_count: u32,
    pub availability_365: u32,
    pub borough: String,
    pub neighbourhood: String,
    pub room_type: RoomType,
}

// Widget ranges of the pricing form.
pub const MINIMUM_NIGHTS_RANGE: RangeInclusive<u32> = 1..=30;
pub const HOST_LISTINGS_RANGE: RangeInclusive<u32> = 1..=100;
pub const NUMBER_OF_REVIEWS_RANGE: RangeInclusive<u32> = 0..=1000;
pub const REVIEWS_PER_MONTH_RANGE: RangeInclusive<f64> = 0.0..=20.0;
pub const AVAILABILITY_RANGE: RangeInclusive<u32> = 0..=365;

impl RawInput {
    /// Checks every field against the ranges the form allows.
    ///
    /// The prediction pipeline never calls this; it is the presentation
    /// layer's responsibility.
    pub fn validate(&self) -> Result<(), PredictionError> {
        check_coordinate("latitude", self.latitude, 90.0)?;
        check_coordinate("longitude", self.longitude, 180.0)?;
        check_range("minimum_nights", self.minimum_nights, &MINIMUM_NIGHTS_RANGE)?;
        check_range(
            "host_listings_count",
            self.host_listings_count,
            &HOST_LISTINGS_RANGE,
        )?;
        check_range(
            "number_of_reviews",
            self.number_of_reviews,
            &NUMBER_OF_REVIEWS_RANGE,
        )?;
        check_range("availability_365", self.availability_365, &AVAILABILITY_RANGE)?;

        if !self.reviews_per_month.is_finite()
            || !REVIEWS_PER_MONTH_RANGE.contains(&self.reviews_per_month)
        {
            return Err(PredictionError::InvalidInput {
                field: "reviews_per_month",
                reason: format!(
                    "{} is outside {:.1}..={:.1}",
                    self.reviews_per_month,
                    REVIEWS_PER_MONTH_RANGE.start(),
                    REVIEWS_PER_MONTH_RANGE.end()
                ),
            });
        }

        Ok(())
    }
}

fn check_range(
    field: &'static str,
    value: u32,
    range: &RangeInclusive<u32>,
) -> Result<(), PredictionError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(PredictionError::InvalidInput {
            field,
            reason: format!("{} is outside {}..={}", value, range.start(), range.end()),
        })
    }
}

fn check_coordinate(field: &'static str, value: f64, bound: f64) -> Result<(), PredictionError> {
    if value.is_finite() && value.abs() <= bound {
        Ok(())
    } else {
        Err(PredictionError::InvalidInput {
            field,
            reason: format!("{} is outside -{}..={}", value, bound, bound),
        })
    }
}

/// Estimated nightly price, exactly as returned by the model.
///
/// Not clamped: a negative or implausible estimate is passed through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub price: f64,
}

impl fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.price)
    }
}
