//! Page category constants.
//!
//! Every screen declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a005_order--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the DOM inspector and search for the `domain/a005_order/` directory.

/// List of records with create/edit dialogs.
pub const PAGE_CAT_LIST: &str = "list";

/// Administration of accounts and access.
pub const PAGE_CAT_SYSTEM: &str = "system";
