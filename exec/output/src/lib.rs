//! Command output capture that never grows without bound.
//!
//! [`OutputBuffer`] keeps a head/tail preview within a fixed byte budget
//! and, once output exceeds the budget, streams the complete output to an
//! artifact file under `<task dir>/command-output/cmd-<id>.txt`.
//! [`ArtifactReader`] reads those files back in fixed-size chunks, either
//! by byte range or by line search.

pub mod buffer;
pub mod error;
pub mod reader;
pub mod store;
pub mod tool;
mod utf8;

pub use buffer::OutputBuffer;
pub use buffer::OutputSummary;
pub use error::OutputError;
pub use error::Result;
pub use reader::ArtifactReader;
pub use reader::RangeRead;
pub use reader::SearchMatch;
pub use reader::SearchResult;
pub use store::ArtifactInfo;
pub use store::ArtifactStore;
pub use store::parse_artifact_id;
pub use tool::ReadCommandOutputTool;
