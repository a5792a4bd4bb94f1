pub mod form;
pub mod resource;
pub mod wire;

pub use form::FormModel;
pub use resource::{Encoding, Record, Resource};
pub use wire::{Decimal, EntityId, ErrorBody, ListQuery, ListResponse, RefField};
