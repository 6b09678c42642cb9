//! Durable local key-value store holding the owner's session hints.
//!
//! Values are opaque strings. The session keeps its state as one JSON blob
//! under [`APP_DATA_KEY`]; [`read_app_data`] and [`update_app_data`] take
//! care of decoding and of merging into whatever is already stored.

use log::warn;
use thiserror::Error;

use crate::domain::session::LocalAppData;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key under which the session blob is stored.
pub const APP_DATA_KEY: &str = "lastqr-app-data";

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// String key-value store that survives restarts.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Decode the session blob. A missing or unreadable blob yields the default.
pub fn read_app_data<S>(store: &S) -> StorageResult<LocalAppData>
where
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(APP_DATA_KEY)? else {
        return Ok(LocalAppData::default());
    };

    match serde_json::from_str(&raw) {
        Ok(data) => Ok(data),
        Err(err) => {
            warn!("Discarding unreadable {APP_DATA_KEY} blob: {err}");
            Ok(LocalAppData::default())
        }
    }
}

/// Apply `edit` to the stored blob and write it back.
pub fn update_app_data<S, F>(store: &S, edit: F) -> StorageResult<LocalAppData>
where
    S: KeyValueStore + ?Sized,
    F: FnOnce(&mut LocalAppData),
{
    let mut data = read_app_data(store)?;
    edit(&mut data);
    store.set(APP_DATA_KEY, &serde_json::to_string(&data)?)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::LastMenu;

    #[test]
    fn missing_blob_reads_as_default() {
        let store = MemoryStore::new();

        assert_eq!(read_app_data(&store).unwrap(), LocalAppData::default());
    }

    #[test]
    fn garbage_blob_reads_as_default() {
        let store = MemoryStore::new();
        store.set(APP_DATA_KEY, "{not json").unwrap();

        assert_eq!(read_app_data(&store).unwrap(), LocalAppData::default());
    }

    #[test]
    fn update_merges_into_existing_blob() {
        let store = MemoryStore::new();
        store
            .set(APP_DATA_KEY, r#"{"shop_id":"shop_1","locale":"en"}"#)
            .unwrap();

        update_app_data(&store, |data| {
            data.menu = Some(LastMenu {
                id: "menu_1".into(),
                shop_id: "shop_1".into(),
            });
        })
        .unwrap();

        let raw = store.get(APP_DATA_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["shop_id"], "shop_1");
        assert_eq!(value["locale"], "en");
        assert_eq!(value["menu"]["id"], "menu_1");
    }
}
