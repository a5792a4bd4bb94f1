pub mod aggregate;

pub use aggregate::{Object, ObjectForm, ObjectResource};
