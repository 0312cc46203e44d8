//! Record encoding and flat-file persistence.
//!
//! One record per line in a comma-delimited text file, no header and no
//! version marker.

pub mod codec;
mod file;

pub use codec::{decode, encode};
pub use file::RecordFile;
