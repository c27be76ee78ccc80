//! Status enumerations and their badge tones.

use crate::choice::{Choice, choice_enum};

choice_enum! {
    /// Colour family shared by badges, stat cards and chart accents.
    pub enum Tone("tone") {
        Indigo => ("indigo", "Indigo"),
        Emerald => ("emerald", "Emerald"),
        Amber => ("amber", "Amber"),
        Red => ("red", "Red"),
        Blue => ("blue", "Blue"),
        Purple => ("purple", "Purple"),
        Slate => ("slate", "Slate"),
    }
}

choice_enum! {
    /// Payment status of an order or a dashboard transaction.
    pub enum OrderStatus("order status") {
        Completed => ("completed", "Completed"),
        Pending => ("pending", "Pending"),
        Failed => ("failed", "Failed"),
    }
}

choice_enum! {
    /// Inventory status of a product. Assigned independently of stock.
    pub enum ProductStatus("product status") {
        InStock => ("in_stock", "In stock"),
        LowStock => ("low_stock", "Low stock"),
        OutOfStock => ("out_of_stock", "Out of stock"),
    }
}

choice_enum! {
    /// Account status of a customer.
    pub enum CustomerStatus("customer status") {
        Active => ("active", "Active"),
        Inactive => ("inactive", "Inactive"),
        Blocked => ("blocked", "Blocked"),
    }
}

choice_enum! {
    /// Product catalogue category.
    pub enum ProductCategory("product category") {
        Electronics => ("Electronics", "Electronics"),
        Fashion => ("Fashion", "Fashion"),
        Home => ("Home", "Home"),
        Sports => ("Sports", "Sports"),
        Books => ("Books", "Books"),
    }
}

/// A status rendered as a coloured badge.
pub trait StatusBadge: Choice {
    fn tone(self) -> Tone;
}

impl StatusBadge for OrderStatus {
    fn tone(self) -> Tone {
        match self {
            Self::Completed => Tone::Emerald,
            Self::Pending => Tone::Amber,
            Self::Failed => Tone::Red,
        }
    }
}

impl StatusBadge for ProductStatus {
    fn tone(self) -> Tone {
        match self {
            Self::InStock => Tone::Emerald,
            Self::LowStock => Tone::Amber,
            Self::OutOfStock => Tone::Red,
        }
    }
}

impl StatusBadge for CustomerStatus {
    fn tone(self) -> Tone {
        match self {
            Self::Active => Tone::Emerald,
            Self::Inactive => Tone::Slate,
            Self::Blocked => Tone::Red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tones<S: StatusBadge>() -> Vec<(S, Tone)> {
        S::ALL.iter().map(|s| (*s, s.tone())).collect()
    }

    #[test]
    fn test_order_badge_tones() {
        assert_eq!(
            tones::<OrderStatus>(),
            vec![
                (OrderStatus::Completed, Tone::Emerald),
                (OrderStatus::Pending, Tone::Amber),
                (OrderStatus::Failed, Tone::Red),
            ]
        );
    }

    #[test]
    fn test_product_badge_tones() {
        assert_eq!(
            tones::<ProductStatus>(),
            vec![
                (ProductStatus::InStock, Tone::Emerald),
                (ProductStatus::LowStock, Tone::Amber),
                (ProductStatus::OutOfStock, Tone::Red),
            ]
        );
    }

    #[test]
    fn test_customer_badge_tones() {
        assert_eq!(
            tones::<CustomerStatus>(),
            vec![
                (CustomerStatus::Active, Tone::Emerald),
                (CustomerStatus::Inactive, Tone::Slate),
                (CustomerStatus::Blocked, Tone::Red),
            ]
        );
    }

    #[test]
    fn test_parse_wire_values() {
        assert_eq!("in_stock".parse::<ProductStatus>(), Ok(ProductStatus::InStock));
        assert_eq!("blocked".parse::<CustomerStatus>(), Ok(CustomerStatus::Blocked));
        assert_eq!("Home".parse::<ProductCategory>(), Ok(ProductCategory::Home));

        let err = "shipped".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err.kind, "order status");
        assert_eq!(err.to_string(), "unknown order status `shipped`");
    }

    #[test]
    fn test_labels() {
        assert_eq!(ProductStatus::OutOfStock.label(), "Out of stock");
        assert_eq!(OrderStatus::Pending.to_string(), "Pending");
    }
}
