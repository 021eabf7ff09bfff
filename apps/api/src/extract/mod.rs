//! Resume extraction pipeline: text extraction → normalization → field extraction,
//! driven per-directory by the batch processor.

pub mod batch;
pub mod fields;
pub mod handlers;
pub mod normalize;
pub mod prompts;
pub mod text;
