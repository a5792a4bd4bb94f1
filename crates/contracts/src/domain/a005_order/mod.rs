pub mod aggregate;
pub mod export;
pub mod filter;

pub use aggregate::{Order, OrderItem, OrderResource, MISSING};
pub use export::{export_file_name, export_rows, OrderExportRow, EXPORT_HEADERS, EXPORT_SHEET_NAME};
pub use filter::{parse_date_input, CustomerFilter, OrderFilter, ALL_CUSTOMERS};
