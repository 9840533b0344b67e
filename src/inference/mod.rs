pub mod assembler;
pub mod engine;
pub mod pipeline;

pub use assembler::assemble;
pub use engine::{check_threshold, predict};
pub use pipeline::process_submission;
