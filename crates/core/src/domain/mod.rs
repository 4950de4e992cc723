pub mod contract;
pub mod metrics;
pub mod recommendation;
