use serde::{de::DeserializeOwned, Serialize};

use super::wire::EntityId;

/// A row that the backend identifies by primary key.
pub trait Record {
    fn id(&self) -> EntityId;
}

/// How create/update bodies are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Json,
    /// `multipart/form-data`, used by resources that carry an image.
    Multipart,
}

/// One REST resource exposed as `/{PATH}/list/`, `/{PATH}/create/`,
/// `/{PATH}/{id}/update/` and `/{PATH}/{id}/delete/`.
pub trait Resource: 'static {
    const PATH: &'static str;
    const ENCODING: Encoding = Encoding::Json;

    type Record: DeserializeOwned + Record + Clone + 'static;
    type Draft: Serialize;

    fn list_path() -> String {
        format!("/{}/list/", Self::PATH)
    }

    fn create_path() -> String {
        format!("/{}/create/", Self::PATH)
    }

    fn update_path(id: EntityId) -> String {
        format!("/{}/{}/update/", Self::PATH, id)
    }

    fn delete_path(id: EntityId) -> String {
        format!("/{}/{}/delete/", Self::PATH, id)
    }
}
