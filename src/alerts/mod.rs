//! Alert notifications: data model, blob persistence, and the shared store.

pub mod blob;
pub mod model;
pub mod store;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use model::{Alert, AlertKind};
pub use store::{AlertError, AlertStore, Snapshot, Subscription};
