//! Where user records come from.
//!
//! The store only needs "fetch the whole collection once"; [`RecordSource`]
//! is that seam. [`HttpRecordSource`] is the real implementation.

mod error;
mod http;

use std::future::Future;

pub use error::LoadError;
pub use http::HttpRecordSource;

use crate::directory::Record;

/// A provider of the full record collection.
pub trait RecordSource: Send + Sync {
    /// Fetch every record, in the order the provider returns them.
    fn fetch_records(&self) -> impl Future<Output = Result<Vec<Record>, LoadError>> + Send;
}
