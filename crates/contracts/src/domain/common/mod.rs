//! Pieces shared by the entities that are nothing more than a name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

use crate::shared::form::{require, FormModel};
use crate::shared::resource::Record;

/// A record whose only editable field is `name`.
pub trait Named: Record + Clone {
    fn name(&self) -> &str;
}

/// Create/update body of a named entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameDto {
    pub name: String,
}

/// Form state of a named entity, typed by the record it edits.
pub struct NameForm<R> {
    pub name: String,
    record: PhantomData<fn() -> R>,
}

impl<R> NameForm<R> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            record: PhantomData,
        }
    }
}

impl<R> Clone for NameForm<R> {
    fn clone(&self) -> Self {
        Self::new(self.name.clone())
    }
}

impl<R> Default for NameForm<R> {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl<R> PartialEq for NameForm<R> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<R> fmt::Debug for NameForm<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameForm").field("name", &self.name).finish()
    }
}

impl<R: Named> FormModel for NameForm<R> {
    type Record = R;
    type Draft = NameDto;

    fn from_record(record: &R) -> Self {
        Self::new(record.name())
    }

    fn to_draft(&self, _editing: Option<&R>) -> Result<NameDto, String> {
        require(&self.name, "Name is required")?;
        Ok(NameDto {
            name: self.name.trim().to_string(),
        })
    }
}
