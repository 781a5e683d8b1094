//! Order repository and its assembly

pub mod builder;
pub mod repository;
pub mod sample;

pub use builder::{DynRepository, LedgerBuilder};
pub use repository::OrderRepository;
pub use sample::sample_drafts;
