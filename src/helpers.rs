use serde::{de::DeserializeOwned, Serialize};

use crate::{error::Result, storage::kv::KeyValueStore};

pub fn read_json<T, S>(store: &S, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get_item(key)? {
        Some(data) => Ok(Some(serde_json::from_str(&data)?)),
        None => Ok(None),
    }
}

pub fn write_json<T, S>(store: &S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let data = serde_json::to_string(value)?;
    store.set_item(key, &data)
}

pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::StorageError, models::game::TeamNames, storage::kv::MemoryStore};

    #[test]
    fn missing_key_reads_as_none() {
        let store = MemoryStore::new();
        let names: Option<TeamNames> = read_json(&store, "@team_names").unwrap();
        assert!(names.is_none());
    }

    #[test]
    fn written_value_reads_back() {
        let store = MemoryStore::new();
        write_json(&store, "@team_names", &TeamNames::new("أ", "ب")).unwrap();
        let names: Option<TeamNames> = read_json(&store, "@team_names").unwrap();
        assert_eq!(names, Some(TeamNames::new("أ", "ب")));
    }

    #[test]
    fn corrupt_value_is_a_serialization_error() {
        let store = MemoryStore::new();
        store.set_item("@team_names", "{not json").unwrap();
        let result: Result<Option<TeamNames>> = read_json(&store, "@team_names");
        assert!(matches!(result, Err(StorageError::Serialization(_))));
    }
}
