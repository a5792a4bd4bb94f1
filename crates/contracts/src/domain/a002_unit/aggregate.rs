use serde::{Deserialize, Serialize};

use crate::domain::common::{NameDto, NameForm, Named};
use crate::shared::{EntityId, Record, Resource};

/// Unit of measure ("unity"), e.g. kg, litre, piece.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: EntityId,
    pub name: String,
}

impl Record for Unit {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Named for Unit {
    fn name(&self) -> &str {
        &self.name
    }
}

pub type UnitForm = NameForm<Unit>;

pub struct UnitResource;

impl Resource for UnitResource {
    const PATH: &'static str = "unity";
    type Record = Unit;
    type Draft = NameDto;
}
