pub mod asset_store;

pub use asset_store::{AssetStore, LocalAssetStore};
