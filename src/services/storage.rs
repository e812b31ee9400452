use serde::{Deserialize, Serialize};
use web_sys::{window, Storage};

pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<Storage> {
        window()?.local_storage().ok()?
    }

    pub fn get<T: for<'de> Deserialize<'de>>(key: &str) -> Option<T> {
        let json = Self::storage()?.get_item(key).ok()??;
        match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("discarding unreadable local storage entry {key}: {err}");
                None
            }
        }
    }

    pub fn set<T: Serialize + ?Sized>(key: &str, value: &T) {
        if let Some(storage) = Self::storage() {
            match serde_json::to_string(value) {
                Ok(json) => {
                    if storage.set_item(key, &json).is_err() {
                        log::warn!("local storage rejected write for {key}");
                    }
                }
                Err(err) => log::warn!("could not serialize {key}: {err}"),
            }
        }
    }

    /// Raw string access for values other scripts may also read (the token).
    pub fn get_string(key: &str) -> Option<String> {
        let value = Self::storage()?.get_item(key).ok()??;
        if value.is_empty() || value == "null" || value == "undefined" {
            None
        } else {
            Some(value)
        }
    }

    pub fn set_string(key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    pub fn remove(key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
