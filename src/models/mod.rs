pub mod destination;
pub mod recommendation;
pub mod display;

pub use destination::Destination;
pub use recommendation::{AirlineRanking, RecommendationResult};
pub use display::{AirlineCard, DisplayModel};
