use chrono::{NaiveDate, TimeZone};

use super::aggregate::{Order, MISSING};
use crate::shared::Decimal;

pub const EXPORT_SHEET_NAME: &str = "Orders";

pub const EXPORT_HEADERS: [&str; 8] = [
    "Customer",
    "Product",
    "Quantity",
    "Unit",
    "Price",
    "Total",
    "Date",
    "Time",
];

/// One spreadsheet row: a single order line.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderExportRow {
    pub customer: String,
    pub product: String,
    pub quantity: Decimal,
    pub unit: String,
    pub unit_price: Decimal,
    pub total: Decimal,
    /// `DD.MM.YYYY`, local time.
    pub date: String,
    /// `HH:MM:SS`, local time.
    pub time: String,
}

/// Flatten every line item of `orders` into export rows, in order.
pub fn export_rows<Tz: TimeZone>(orders: &[Order], tz: &Tz) -> Vec<OrderExportRow> {
    orders
        .iter()
        .flat_map(|order| {
            let local = order.created_at.with_timezone(tz).naive_local();
            let date = local.format("%d.%m.%Y").to_string();
            let time = local.format("%H:%M:%S").to_string();
            let customer = if order.customer_email != MISSING {
                order.customer_email.clone()
            } else {
                order.customer_name.clone()
            };

            order.items.iter().map(move |item| OrderExportRow {
                customer: customer.clone(),
                product: item.product_name.clone(),
                quantity: item.quantity.clone(),
                unit: item.unit.clone(),
                unit_price: item.unit_price.clone(),
                total: item.price.clone(),
                date: date.clone(),
                time: time.clone(),
            })
        })
        .collect()
}

/// `Buyurtmalar<DD.MM.YYYY>.xlsx`, or `Buyurtmalar.xlsx` when no date is selected.
pub fn export_file_name(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => format!("Buyurtmalar{}.xlsx", d.format("%d.%m.%Y")),
        None => "Buyurtmalar.xlsx".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_order::aggregate::tests::order_json;
    use chrono::FixedOffset;

    #[test]
    fn test_one_row_per_item_with_verbatim_values() {
        let order: Order =
            serde_json::from_value(order_json(1, "ali", "2025-03-15T14:02:26+05:00")).unwrap();
        let tz = FixedOffset::east_opt(5 * 3600).unwrap();

        let rows = export_rows(&[order.clone()], &tz);

        assert_eq!(rows.len(), 2);
        for (row, item) in rows.iter().zip(order.items.iter()) {
            assert_eq!(row.customer, "ali");
            assert_eq!(row.product, item.product_name);
            assert_eq!(row.quantity, item.quantity);
            assert_eq!(row.unit, item.unit);
            assert_eq!(row.unit_price, item.unit_price);
            assert_eq!(row.total, item.price);
            assert_eq!(row.date, "15.03.2025");
            assert_eq!(row.time, "14:02:26");
        }
        assert_eq!(rows[0].quantity.as_str(), "2");
        assert_eq!(rows[1].unit, "litr");
    }

    #[test]
    fn test_no_orders_no_rows() {
        assert!(export_rows(&[], &chrono::Utc).is_empty());
    }

    #[test]
    fn test_file_name_carries_date_filter() {
        assert_eq!(
            export_file_name(NaiveDate::from_ymd_opt(2025, 3, 5)),
            "Buyurtmalar05.03.2025.xlsx"
        );
        assert_eq!(export_file_name(None), "Buyurtmalar.xlsx");
    }
}
