//! Per-entry pipeline: metadata probing, identity lookup, diagnostics.

pub mod error_handler;
pub mod identity;
pub mod metadata;

pub use error_handler::{Diagnostics, report_skipped_paths};
pub use identity::{lookup_group_name, lookup_user_name};
pub use metadata::{DirListing, FsMetadata, MetadataProvider};
