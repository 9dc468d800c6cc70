//! Output artifacts: wordlist files and session snapshots

mod snapshot;
mod writer;

pub use snapshot::SessionSnapshot;
pub use writer::WordlistWriter;
