pub mod district;
pub mod error;
pub mod metrics;
pub mod performance;
pub mod response;
