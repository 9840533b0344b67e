pub mod feature;
pub mod input;
pub mod prediction;

pub use feature::FeatureVector;
pub use input::{PassengerInput, ServiceRatings, TravelClass};
pub use prediction::{PredictionResult, SatisfactionLabel};
