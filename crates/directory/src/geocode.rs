use std::collections::BTreeMap;

use foundation::LatLng;

use crate::locator::BoxFuture;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodeError {
    /// No coordinate matched the submitted address text.
    NoMatch,
    /// The geocoding service could not be reached.
    Transport(String),
}

impl std::fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeocodeError::NoMatch => write!(f, "no coordinate matched the address"),
            GeocodeError::Transport(msg) => write!(f, "geocoder unreachable: {msg}"),
        }
    }
}

impl std::error::Error for GeocodeError {}

/// Resolves free-form address text to a coordinate.
pub trait Geocoder {
    fn resolve(&self, address: &str) -> BoxFuture<'_, Result<LatLng, GeocodeError>>;
}

/// Geocoder over a fixed address table. Unknown addresses are a `NoMatch`.
#[derive(Debug, Default)]
pub struct StaticGeocoder {
    entries: BTreeMap<String, LatLng>,
}

impl StaticGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, address: impl Into<String>, coordinate: LatLng) -> Self {
        self.entries.insert(address.into(), coordinate);
        self
    }
}

impl Geocoder for StaticGeocoder {
    fn resolve(&self, address: &str) -> BoxFuture<'_, Result<LatLng, GeocodeError>> {
        let result = self
            .entries
            .get(address)
            .copied()
            .ok_or(GeocodeError::NoMatch);
        Box::pin(std::future::ready(result))
    }
}

#[cfg(test)]
mod tests {
    use foundation::LatLng;

    use super::{GeocodeError, Geocoder, StaticGeocoder};

    #[test]
    fn resolves_known_address() {
        let geocoder = StaticGeocoder::new().with("Main St", LatLng::new(10.0, 20.0));
        let hit = pollster::block_on(geocoder.resolve("Main St")).unwrap();
        assert_eq!(hit, LatLng::new(10.0, 20.0));
    }

    #[test]
    fn unknown_address_is_no_match() {
        let geocoder = StaticGeocoder::new();
        let err = pollster::block_on(geocoder.resolve("asdkjh")).unwrap_err();
        assert_eq!(err, GeocodeError::NoMatch);
    }
}
