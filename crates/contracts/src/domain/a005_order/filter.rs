use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use super::aggregate::Order;

/// Select value meaning "every customer".
pub const ALL_CUSTOMERS: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CustomerFilter {
    #[default]
    All,
    /// Match on `Order::customer_email`.
    Customer(String),
}

impl CustomerFilter {
    pub fn from_select(value: &str) -> Self {
        if value.is_empty() || value == ALL_CUSTOMERS {
            CustomerFilter::All
        } else {
            CustomerFilter::Customer(value.to_string())
        }
    }

    pub fn select_value(&self) -> String {
        match self {
            CustomerFilter::All => ALL_CUSTOMERS.to_string(),
            CustomerFilter::Customer(c) => c.clone(),
        }
    }
}

/// Client-side filter of the orders screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub customer: CustomerFilter,
    /// Calendar date in the viewer's time zone.
    pub date: Option<NaiveDate>,
}

impl OrderFilter {
    pub fn matches<Tz: TimeZone>(&self, order: &Order, tz: &Tz) -> bool {
        let customer_ok = match &self.customer {
            CustomerFilter::All => true,
            CustomerFilter::Customer(c) => order.customer_email == *c,
        };
        let date_ok = match self.date {
            None => true,
            Some(date) => local_date(&order.created_at, tz) == date,
        };
        customer_ok && date_ok
    }

    pub fn apply<Tz: TimeZone>(&self, orders: &[Order], tz: &Tz) -> Vec<Order> {
        orders
            .iter()
            .filter(|o| self.matches(o, tz))
            .cloned()
            .collect()
    }
}

/// Calendar date of an instant as seen in `tz`.
pub fn local_date<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    at.with_timezone(tz).date_naive()
}

/// Parse the value of an `<input type="date">` (`YYYY-MM-DD`); blank means no date.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_order::aggregate::tests::order_json;
    use chrono::FixedOffset;

    fn tashkent() -> FixedOffset {
        FixedOffset::east_opt(5 * 3600).unwrap()
    }

    fn orders() -> Vec<Order> {
        [
            order_json(1, "a", "2025-03-15T08:00:00+05:00"),
            order_json(2, "b", "2025-03-15T12:00:00+05:00"),
            order_json(3, "a", "2025-03-16T10:00:00+05:00"),
            order_json(4, "b", "2025-03-16T23:30:00+05:00"),
        ]
        .into_iter()
        .map(|v| serde_json::from_value(v).unwrap())
        .collect()
    }

    fn ids(orders: &[Order]) -> Vec<i64> {
        orders.iter().map(|o| o.id).collect()
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let all = orders();
        assert_eq!(OrderFilter::default().apply(&all, &tashkent()).len(), 4);
    }

    #[test]
    fn test_filters_by_customer_only() {
        let filter = OrderFilter {
            customer: CustomerFilter::from_select("a"),
            date: None,
        };
        assert_eq!(ids(&filter.apply(&orders(), &tashkent())), vec![1, 3]);
    }

    #[test]
    fn test_filters_by_date_only() {
        let filter = OrderFilter {
            customer: CustomerFilter::from_select(ALL_CUSTOMERS),
            date: parse_date_input("2025-03-16"),
        };
        assert_eq!(ids(&filter.apply(&orders(), &tashkent())), vec![3, 4]);
    }

    #[test]
    fn test_filters_by_both() {
        let filter = OrderFilter {
            customer: CustomerFilter::Customer("b".into()),
            date: parse_date_input("2025-03-15"),
        };
        assert_eq!(ids(&filter.apply(&orders(), &tashkent())), vec![2]);
    }

    #[test]
    fn test_date_compares_local_calendar_day() {
        // 01:00 in Tashkent is 20:00 UTC of the previous day.
        let order: Order = serde_json::from_value(order_json(9, "a", "2025-03-17T01:00:00+05:00")).unwrap();
        let filter = OrderFilter {
            customer: CustomerFilter::All,
            date: parse_date_input("2025-03-17"),
        };
        assert!(filter.matches(&order, &tashkent()));
        assert!(!filter.matches(&order, &Utc));
    }

    #[test]
    fn test_select_value_round_trip() {
        assert_eq!(CustomerFilter::from_select("all"), CustomerFilter::All);
        assert_eq!(CustomerFilter::All.select_value(), "all");
        assert_eq!(CustomerFilter::Customer("x".into()).select_value(), "x");
    }

    #[test]
    fn test_bad_date_input_means_no_date() {
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("15.03.2025"), None);
    }
}
