pub mod aggregate;

pub use aggregate::{Product, ProductDto, ProductForm, ProductResource};
