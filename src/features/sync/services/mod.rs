mod synchronizer;

pub use synchronizer::{SyncOptions, Synchronizer};
