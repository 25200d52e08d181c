// coinly-api: Async Rust client for the coin collection catalog REST API

pub mod client;
pub mod collections;
pub mod coins;
pub mod error;
pub mod groups;
pub mod models;
pub mod system;
pub mod transport;

pub use client::CatalogClient;
pub use error::Error;
pub use models::{
    CoinResponse, CollectionResponse, CreateCoinPayload, CreateCollectionPayload,
    CreateGroupPayload, GroupMetadata, GroupResponse, UpdateCoinPayload, UpdateCollectionPayload,
    UpdateGroupPayload,
};
pub use transport::TransportConfig;
