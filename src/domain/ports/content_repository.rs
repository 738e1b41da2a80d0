//! ContentRepository port - where the two content documents come from
//!
//! The domain only sees a validated `ContentStore`; parsing and schema
//! details stay in the infrastructure layer.

use std::path::PathBuf;

use crate::domain::entities::ContentStore;
use crate::error::FolioResult;

pub trait ContentRepository {
    /// Load, parse and validate both documents into one store
    fn load(&self) -> FolioResult<ContentStore>;

    /// Files the store is built from (watched for changes)
    fn sources(&self) -> Vec<PathBuf>;
}
