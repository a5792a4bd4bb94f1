use serde::{Deserialize, Serialize};

use crate::domain::common::{NameDto, NameForm, Named};
use crate::shared::{EntityId, Record, Resource};

/// Object ("obyekt"): a site the business operates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Object {
    pub id: EntityId,
    pub name: String,
}

impl Record for Object {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Named for Object {
    fn name(&self) -> &str {
        &self.name
    }
}

pub type ObjectForm = NameForm<Object>;

pub struct ObjectResource;

impl Resource for ObjectResource {
    const PATH: &'static str = "obyekt";
    type Record = Object;
    type Draft = NameDto;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::FormModel;
    use serde_json::json;

    #[test]
    fn test_paths() {
        assert_eq!(ObjectResource::list_path(), "/obyekt/list/");
        assert_eq!(ObjectResource::create_path(), "/obyekt/create/");
        assert_eq!(ObjectResource::update_path(12), "/obyekt/12/update/");
        assert_eq!(ObjectResource::delete_path(12), "/obyekt/12/delete/");
    }

    #[test]
    fn test_decodes_wire_row() {
        let object: Object = serde_json::from_value(json!({"id": 3, "name": "Warehouse"})).unwrap();
        assert_eq!(object.id, 3);
        assert_eq!(object.name, "Warehouse");
    }

    #[test]
    fn test_missing_name_is_a_decode_error() {
        assert!(serde_json::from_value::<Object>(json!({"id": 3})).is_err());
    }

    #[test]
    fn test_form_round_trip() {
        let object = Object { id: 1, name: "Field A".into() };
        let form = ObjectForm::from_record(&object);
        assert_eq!(form.name, "Field A");
        assert_eq!(form.to_draft(Some(&object)).unwrap().name, "Field A");
        assert_eq!(
            ObjectForm::new("  ").to_draft(None).unwrap_err(),
            "Name is required"
        );
    }
}
