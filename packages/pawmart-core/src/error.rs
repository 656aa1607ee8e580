use thiserror::Error;

/// Strict parsing errors for the closed enumerations.
///
/// Only raised by `FromStr` implementations. The query engine and the access
/// policy never see these: UI input goes through the lenient constructors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown price bucket: {0}")]
    UnknownPriceBucket(String),

    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Unknown capability: {0}")]
    UnknownCapability(String),

    #[error("Unknown order status: {0}")]
    UnknownOrderStatus(String),
}
