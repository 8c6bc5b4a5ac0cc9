pub mod controller;
pub mod listing;
pub mod surface;

pub use controller::*;
pub use listing::*;
pub use surface::*;
