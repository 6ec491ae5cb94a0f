use crate::domain::listing::{RawInput, RoomType};

pub const LATITUDE: &str = "latitude";
pub const LONGITUDE: &str = "longitude";
pub const MINIMUM_NIGHTS: &str = "minimum_nights";
pub const NUMBER_OF_REVIEWS: &str = "number_of_reviews";
pub const REVIEWS_PER_MONTH: &str = "reviews_per_month";
pub const HOST_LISTINGS_COUNT: &str = "calculated_host_listings_count";
pub const AVAILABILITY_365: &str = "availability_365";
pub const BOROUGH_ENCODED: &str = "neighbourhood_group_encoded";
pub const NEIGHBOURHOOD_FREQUENCY: &str = "neighbourhood_frequency";
pub const REVIEWS_PER_AVAILABILITY: &str = "reviews_per_availability";
pub const HIGH_AVAILABILITY: &str = "high_availability";
pub const HAS_REVIEWS: &str = "has_reviews";
pub const ROOM_TYPE_PRIVATE: &str = "room_type_Private room";
pub const ROOM_TYPE_SHARED: &str = "room_type_Shared room";

/// Every feature the pipeline can produce, in training-data order.
/// Column names MUST match the ones the training pipeline emitted.
pub const FEATURE_NAMES: &[&str] = &[
    LATITUDE,
    LONGITUDE,
    MINIMUM_NIGHTS,
    NUMBER_OF_REVIEWS,
    REVIEWS_PER_MONTH,
    HOST_LISTINGS_COUNT,
    AVAILABILITY_365,
    BOROUGH_ENCODED,
    NEIGHBOURHOOD_FREQUENCY,
    REVIEWS_PER_AVAILABILITY,
    HIGH_AVAILABILITY,
    HAS_REVIEWS,
    ROOM_TYPE_PRIVATE,
    ROOM_TYPE_SHARED,
];

/// Columns the scaler was fitted on, in fit order.
/// Everything else (borough code, binary flags) passes through unscaled.
pub const SCALED_FEATURES: &[&str] = &[
    LATITUDE,
    LONGITUDE,
    MINIMUM_NIGHTS,
    NUMBER_OF_REVIEWS,
    REVIEWS_PER_MONTH,
    HOST_LISTINGS_COUNT,
    AVAILABILITY_365,
    REVIEWS_PER_AVAILABILITY,
    NEIGHBOURHOOD_FREQUENCY,
];

/// Listings open more than this many days a year count as highly available
pub const HIGH_AVAILABILITY_THRESHOLD: u32 = 180;

/// Review count smoothed by availability. The +1 keeps zero availability defined.
pub fn reviews_per_availability(number_of_reviews: u32, availability_365: u32) -> f64 {
    f64::from(number_of_reviews) / (f64::from(availability_365) + 1.0)
}

pub fn high_availability(availability_365: u32) -> f64 {
    flag(availability_365 > HIGH_AVAILABILITY_THRESHOLD)
}

pub fn has_reviews(number_of_reviews: u32) -> f64 {
    flag(number_of_reviews > 0)
}

/// Drop-first one-hot encoding: `(private, shared)`.
pub fn room_type_flags(room_type: RoomType) -> (f64, f64) {
    (
        flag(room_type == RoomType::PrivateRoom),
        flag(room_type == RoomType::SharedRoom),
    )
}

fn flag(condition: bool) -> f64 {
    if condition { 1.0 } else { 0.0 }
}

/// Every raw and derived feature for one listing, keyed by feature name.
///
/// The categorical inputs arrive already resolved: the borough as its
/// encoder code and the neighbourhood as its frequency.
pub fn named_features(
    input: &RawInput,
    borough_code: usize,
    neighbourhood_frequency: f64,
) -> Vec<(&'static str, f64)> {
    let (private_room, shared_room) = room_type_flags(input.room_type);
    vec![
        (LATITUDE, input.latitude),
        (LONGITUDE, input.longitude),
        (MINIMUM_NIGHTS, f64::from(input.minimum_nights)),
        (NUMBER_OF_REVIEWS, f64::from(input.number_of_reviews)),
        (REVIEWS_PER_MONTH, input.reviews_per_month),
        (HOST_LISTINGS_COUNT, f64::from(input.host_listings_count)),
        (AVAILABILITY_365, f64::from(input.availability_365)),
        (BOROUGH_ENCODED, borough_code as f64),
        (NEIGHBOURHOOD_FREQUENCY, neighbourhood_frequency),
        (
            REVIEWS_PER_AVAILABILITY,
            reviews_per_availability(input.number_of_reviews, input.availability_365),
        ),
        (HIGH_AVAILABILITY, high_availability(input.availability_365)),
        (HAS_REVIEWS, has_reviews(input.number_of_reviews)),
        (ROOM_TYPE_PRIVATE, private_room),
        (ROOM_TYPE_SHARED, shared_room),
    ]
}

/// A single model input row with its column names
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    names: Vec<String>,
    values: Vec<f64>,
}

impl FeatureVector {
    pub(crate) fn new(names: Vec<String>, values: Vec<f64>) -> Self {
        debug_assert_eq!(names.len(), values.len());
        Self { names, values }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.position(name).map(|i| self.values[i])
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }
}
