pub mod engine;
pub mod gaps;
pub mod normalize;
pub mod pipeline;

pub use crate::domain::model::{Entry, GapRange, NormalizeReport, NormalizedDictionary};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
