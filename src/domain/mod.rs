//! Domain logic - pure versioning and tag rules independent of the hosting API

pub mod repo;
pub mod selector;
pub mod tag;
pub mod version;

pub use repo::RepoRef;
pub use selector::select_latest;
pub use tag::{parse_requests, TagProposal, TagRequest};
pub use version::{Version, VersionBump};
