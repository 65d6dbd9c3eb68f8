pub mod collect_bridge;
pub mod collection_payload;
pub mod summary;

pub use collect_bridge::CollectBridge;
pub use collection_payload::CollectionPayload;
