pub mod error;
pub mod processor;
mod trace;

pub use error::Error;
pub use processor::{Processor, MEMORY_SIZE_WORDS};
