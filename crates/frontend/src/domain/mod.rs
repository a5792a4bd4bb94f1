pub mod a001_object;
pub mod a002_unit;
pub mod a003_category;
pub mod a004_product;
pub mod a005_order;
