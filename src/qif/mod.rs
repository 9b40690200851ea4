//! QIF (Quicken Interchange Format) output.

mod writer;

pub use writer::{QifWriter, render_record};
