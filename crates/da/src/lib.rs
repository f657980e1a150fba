//! Data-availability providers.
//!
//! A provider turns the data of a batch into a single 32-byte commitment and later confirms that
//! the commitment really corresponds to data made available in the current transaction. Two
//! encodings are supported: inline calldata ([`CalldataDa`]) and blobs ([`BlobDa`]).

pub mod blob;
pub mod calldata;
pub mod errors;
pub mod meta;
pub mod traits;

pub use blob::{BlobDa, TxBlobHashes};
pub use calldata::CalldataDa;
pub use errors::{DaError, DaResult, MetadataError};
pub use meta::BlobMeta;
pub use traits::{BlobHashSource, DaProvider};
