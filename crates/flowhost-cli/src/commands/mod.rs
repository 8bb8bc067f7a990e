pub mod connectors;
pub mod describe;
pub mod operations;
pub mod resolve;
