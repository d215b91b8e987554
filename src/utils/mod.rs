#[cfg(feature = "logging")]
pub mod logger;
