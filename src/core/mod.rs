pub mod domain_constants;
pub mod engine;
pub mod generator;
pub mod implementation_gen;
pub mod interface_gen;
pub mod naming;
pub mod normalizer;
pub mod segmenter;
pub mod signatures;

pub use crate::domain::model::{GeneratedSources, GenerationReport, Sheet};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
