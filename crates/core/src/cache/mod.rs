mod error;
mod keys;
mod options;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{clipboards_key, items_key};
pub use options::{
    next_ttl, CacheEntryOptions, DEFAULT_ABSOLUTE_EXPIRATION, DEFAULT_SLIDING_EXPIRATION,
};
pub use serialization::{deserialize, serialize, SerializationError};
pub use traits::Cache;
