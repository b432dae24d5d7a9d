//! # Input/Output for splicepredict.
//!
//! This crate streams VEP tab-delimited output through the classification engine. It
//! detects gzip input from the magic bytes, keeps the header and metadata lines, annotates
//! rows in bounded batches on a rayon pool and writes them back in input order with three
//! extra columns.
//!
pub mod config;
pub mod consts;
pub mod error;
pub mod reader;
pub mod stream;
pub mod writer;

// re-expose core functions
pub use config::*;
pub use consts::*;
pub use error::*;
pub use reader::*;
pub use stream::*;
pub use writer::*;
