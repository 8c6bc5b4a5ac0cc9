pub mod geocode;
pub mod locator;
pub mod model;
pub mod tags;

pub use geocode::*;
pub use locator::*;
pub use model::*;
pub use tags::*;
