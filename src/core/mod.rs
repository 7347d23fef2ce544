pub mod collector;
pub mod engine;
pub mod export;
pub mod normalize;

pub use crate::domain::model::{LeadRecord, LeadSource, LeadValue};
pub use crate::domain::ports::PlaceSource;
pub use crate::utils::error::Result;
