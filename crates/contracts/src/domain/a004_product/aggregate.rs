use serde::{Deserialize, Serialize};

use crate::shared::form::{non_blank, normalize_decimal_input, require, FormModel};
use crate::shared::{Decimal, Encoding, EntityId, RefField, Record, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub category: Option<RefField>,
    #[serde(default)]
    pub unity: Option<RefField>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub quantity_left: Option<Decimal>,
    #[serde(default)]
    pub min_quantity: Option<Decimal>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Record for Product {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// Multipart body of product create/update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDto {
    pub name: String,
    pub price: String,
    pub category: EntityId,
    pub unity: EntityId,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_quantity: Option<String>,
}

/// Product form state. Category and unit hold the selected option id as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub category: String,
    pub unity: String,
    pub description: String,
    pub quantity_left: String,
    pub min_quantity: String,
}

impl ProductForm {
    /// Preselect the first available category / unit when none is chosen yet.
    pub fn fill_missing_refs(&mut self, category: Option<EntityId>, unity: Option<EntityId>) {
        if self.category.trim().is_empty() {
            if let Some(id) = category {
                self.category = id.to_string();
            }
        }
        if self.unity.trim().is_empty() {
            if let Some(id) = unity {
                self.unity = id.to_string();
            }
        }
    }
}

/// Prices and quantities: finite and not negative. `NaN` and `inf` parse as
/// `f64` but are not amounts.
fn parse_decimal(value: &str, message: &str) -> Result<String, String> {
    let normalized = normalize_decimal_input(value);
    normalized
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|_| normalized.clone())
        .ok_or_else(|| message.to_string())
}

fn parse_optional_decimal(value: &str, message: &str) -> Result<Option<String>, String> {
    non_blank(value)
        .map(|v| parse_decimal(&v, message))
        .transpose()
}

fn parse_ref(value: &str, message: &str) -> Result<EntityId, String> {
    value.trim().parse().map_err(|_| message.to_string())
}

impl FormModel for ProductForm {
    type Record = Product;
    type Draft = ProductDto;

    fn from_record(record: &Product) -> Self {
        let ref_id = |r: &Option<RefField>| {
            r.as_ref()
                .and_then(RefField::id)
                .map(|id| id.to_string())
                .unwrap_or_default()
        };
        let decimal = |d: &Option<Decimal>| d.as_ref().map(|d| d.to_string()).unwrap_or_default();

        Self {
            name: record.name.clone(),
            price: record.price.to_string(),
            category: ref_id(&record.category),
            unity: ref_id(&record.unity),
            description: record.description.clone().unwrap_or_default(),
            quantity_left: decimal(&record.quantity_left),
            min_quantity: decimal(&record.min_quantity),
        }
    }

    fn to_draft(&self, _editing: Option<&Product>) -> Result<ProductDto, String> {
        require(&self.name, "Name is required")?;
        require(&self.price, "Price is required")?;
        require(&self.category, "Category is required")?;
        require(&self.unity, "Unit is required")?;

        Ok(ProductDto {
            name: self.name.trim().to_string(),
            price: parse_decimal(&self.price, "Price must be a non-negative number")?,
            category: parse_ref(&self.category, "Unknown category")?,
            unity: parse_ref(&self.unity, "Unknown unit")?,
            description: self.description.clone(),
            quantity_left: parse_optional_decimal(&self.quantity_left, "Quantity left must be a non-negative number")?,
            min_quantity: parse_optional_decimal(&self.min_quantity, "Min quantity must be a non-negative number")?,
        })
    }
}

pub struct ProductResource;

impl Resource for ProductResource {
    const PATH: &'static str = "product";
    const ENCODING: Encoding = Encoding::Multipart;
    type Record = Product;
    type Draft = ProductDto;
}
