use serde::{Deserialize, Serialize};

use crate::shared::form::{non_blank, require, FormModel};
use crate::shared::{Encoding, EntityId, Record, Resource};

/// Product category. Rendered in the order the backend returns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
}

impl Record for Category {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// Multipart body; `order` is only sent when the user filled it in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
    pub order: String,
    /// Current image URL, or a local preview URL once a file is picked.
    pub image: Option<String>,
}

impl FormModel for CategoryForm {
    type Record = Category;
    type Draft = CategoryDto;

    fn from_record(record: &Category) -> Self {
        Self {
            name: record.name.clone(),
            order: record.order.map(|o| o.to_string()).unwrap_or_default(),
            image: record.image.clone(),
        }
    }

    fn to_draft(&self, _editing: Option<&Category>) -> Result<CategoryDto, String> {
        require(&self.name, "Name is required")?;
        let order = match non_blank(&self.order) {
            None => None,
            Some(text) => match text.parse::<i64>() {
                Ok(v) if v >= 0 => Some(v),
                _ => return Err("Order must be a non-negative whole number".to_string()),
            },
        };
        Ok(CategoryDto {
            name: self.name.trim().to_string(),
            order,
        })
    }
}

pub struct CategoryResource;

impl Resource for CategoryResource {
    const PATH: &'static str = "category";
    const ENCODING: Encoding = Encoding::Multipart;
    type Record = Category;
    type Draft = CategoryDto;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fruit() -> Category {
        Category {
            id: 5,
            name: "Fruit".into(),
            image: Some("https://cdn.example/fruit.png".into()),
            order: Some(2),
        }
    }

    #[test]
    fn test_decodes_without_optional_fields() {
        let c: Category = serde_json::from_value(json!({"id": 1, "name": "Veg"})).unwrap();
        assert_eq!(c.image, None);
        assert_eq!(c.order, None);
    }

    #[test]
    fn test_edit_form_copies_record() {
        let form = CategoryForm::from_record(&fruit());
        assert_eq!(form.name, "Fruit");
        assert_eq!(form.order, "2");
        assert_eq!(form.image.as_deref(), Some("https://cdn.example/fruit.png"));
    }

    #[test]
    fn test_blank_order_is_not_sent() {
        let form = CategoryForm {
            name: "Veg".into(),
            ..Default::default()
        };
        let draft = form.to_draft(None).unwrap();
        assert_eq!(serde_json::to_value(draft).unwrap(), json!({"name": "Veg"}));
    }

    #[test]
    fn test_bad_order_is_rejected() {
        let form = CategoryForm {
            name: "Veg".into(),
            order: "first".into(),
            image: None,
        };
        assert!(form.to_draft(None).is_err());
    }

    #[test]
    fn test_name_is_required() {
        let form = CategoryForm {
            order: "1".into(),
            ..Default::default()
        };
        assert_eq!(form.to_draft(None).unwrap_err(), "Name is required");
    }
}
