//! Pure record → display conversions. Nothing here touches the network or a
//! render target, so every display rule is testable on its own.

use api::{HealthRecord, ItemRecord, UserRecord};

use crate::categories::CategoryTable;
use crate::entry::{Entry, Field};

/// Version indicator text when the health check fails for any reason.
pub const OFFLINE: &str = "offline";

/// How item entries are presented.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemStyle {
    /// Name and price only.
    Plain,
    /// Name, category name resolved through the table, and price.
    WithCategory(CategoryTable),
}

impl Default for ItemStyle {
    fn default() -> Self {
        Self::WithCategory(CategoryTable::default())
    }
}

pub fn version_label(health: &HealthRecord) -> String {
    format!("v{}", health.version)
}

/// `$` followed by the price rounded to exactly two decimals: `9` → `$9.00`,
/// `9.999` → `$10.00`.
///
/// Rounding looks at the exact binary value, so `1.005` (stored just below
/// the half) gives `$1.00`. Exact halves such as `0.125` round away from zero.
pub fn format_price(price: f64) -> String {
    if is_exact_half_cent(price) {
        return format!("${:.2}", (price * 100.0).round() / 100.0);
    }
    format!("${price:.2}")
}

/// A float lies exactly halfway between two cents only when it is an odd
/// number of eighths.
fn is_exact_half_cent(price: f64) -> bool {
    let eighths = price * 8.0;
    eighths.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 != 0.0
}

pub fn user_entry(user: &UserRecord) -> Entry {
    Entry::new(vec![
        Field::plain(user.name.clone()),
        Field::styled(user.email.clone(), "email"),
    ])
}

pub fn item_entry(item: &ItemRecord, style: &ItemStyle) -> Entry {
    let mut fields = vec![Field::plain(item.name.clone())];
    if let ItemStyle::WithCategory(table) = style {
        fields.push(Field::styled(table.name_for(item.category_id), "category"));
    }
    fields.push(Field::styled(format_price(item.price), "price"));
    Entry::new(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::UNKNOWN_CATEGORY;

    fn item(name: &str, price: f64, category_id: Option<i64>) -> ItemRecord {
        ItemRecord {
            id: None,
            name: name.to_string(),
            price,
            category_id,
            owner_id: None,
            quantity: None,
        }
    }

    #[test]
    fn test_version_label_is_verbatim() {
        let label = version_label(&HealthRecord {
            version: "2.3.0-beta".to_string(),
        });
        assert_eq!(label, "v2.3.0-beta");
        assert_eq!(version_label(&HealthRecord { version: String::new() }), "v");
    }

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(9.0), "$9.00");
        assert_eq!(format_price(9.5), "$9.50");
        assert_eq!(format_price(9.999), "$10.00");
        assert_eq!(format_price(1.5), "$1.50");
        assert_eq!(format_price(24.99), "$24.99");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(1234.5), "$1234.50");
    }

    #[test]
    fn test_format_price_rounds_exact_halves_up() {
        assert_eq!(format_price(0.125), "$0.13");
        assert_eq!(format_price(0.375), "$0.38");
        assert_eq!(format_price(1.625), "$1.63");
        assert_eq!(format_price(-0.125), "$-0.13");
    }

    #[test]
    fn test_format_price_rounds_the_stored_value() {
        // Each literal is stored just below the written half cent.
        assert_eq!(format_price(0.015), "$0.01");
        assert_eq!(format_price(0.045), "$0.04");
        assert_eq!(format_price(0.105), "$0.10");
        assert_eq!(format_price(1.005), "$1.00");
        // Stored just above.
        assert_eq!(format_price(4.995), "$5.00");
        assert_eq!(format_price(0.004), "$0.00");
    }

    #[test]
    fn test_user_entry() {
        let entry = user_entry(&UserRecord {
            id: None,
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
        });
        assert_eq!(entry.texts(), ["Ann", "a@x.com"]);
        assert_eq!(entry.field("email"), Some("a@x.com"));
    }

    #[test]
    fn test_item_entry_with_category() {
        let entry = item_entry(&item("Bolt", 1.5, Some(2)), &ItemStyle::default());
        assert_eq!(entry.texts(), ["Bolt", "Tools", "$1.50"]);
        assert_eq!(entry.field("category"), Some("Tools"));
        assert_eq!(entry.field("price"), Some("$1.50"));
    }

    #[test]
    fn test_item_entry_unknown_category() {
        let style = ItemStyle::default();
        for category_id in [Some(0), Some(-3), Some(42), None] {
            let entry = item_entry(&item("Nut", 0.1, category_id), &style);
            assert_eq!(entry.field("category"), Some(UNKNOWN_CATEGORY));
        }
    }

    #[test]
    fn test_item_entry_plain() {
        let entry = item_entry(&item("Bolt", 1.5, Some(2)), &ItemStyle::Plain);
        assert_eq!(entry.texts(), ["Bolt", "$1.50"]);
        assert_eq!(entry.field("category"), None);
    }

    #[test]
    fn test_item_entry_does_not_mutate_record() {
        let record = item("Widget", 9.99, Some(1));
        let before = record.clone();
        let _ = item_entry(&record, &ItemStyle::default());
        assert_eq!(record, before);
    }
}
