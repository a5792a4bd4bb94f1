//! Wire contracts shared by the admin console screens.
//!
//! Everything here is plain data plus the small amount of pure logic that
//! sits next to it: required-field validation, the orders filter and the
//! flattening of orders into spreadsheet rows.

pub mod domain;
pub mod shared;
pub mod system;
