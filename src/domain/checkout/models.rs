//! Checkout models.

use serde::{Deserialize, Serialize};

/// Delivery method, with the fixed cost the shop charges for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMethod {
    /// Курьерская доставка — по Москве и области, 2-3 дня.
    Courier,
    /// Транспортная компания — по всей России, 5-10 дней.
    Transport,
    /// Самовывоз со склада в Москве.
    Pickup,
}

impl DeliveryMethod {
    /// All methods, in the order the checkout form lists them.
    pub const ALL: [Self; 3] = [Self::Courier, Self::Transport, Self::Pickup];

    /// Fixed delivery cost, in whole roubles.
    #[must_use]
    pub const fn cost(self) -> u64 {
        match self {
            Self::Courier => 2000,
            Self::Transport => 5000,
            Self::Pickup => 0,
        }
    }

    /// Display label, stored verbatim into orders.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Courier => "Курьерская доставка",
            Self::Transport => "Транспортная компания",
            Self::Pickup => "Самовывоз",
        }
    }

    /// Whether this method ships to an address (everything but pickup).
    #[must_use]
    pub const fn requires_address(self) -> bool {
        !matches!(self, Self::Pickup)
    }
}

/// Payment method token, stored as-is into orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Банковской картой онлайн.
    Card,
    /// Наличными при получении.
    Cash,
    /// Безналичный расчёт (для юридических лиц).
    Invoice,
}

impl PaymentMethod {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Card => "Банковской картой онлайн",
            Self::Cash => "Наличными при получении",
            Self::Invoice => "Безналичный расчёт",
        }
    }
}

/// Legal-entity fields; presence of this struct is the «я представляю
/// юридическое лицо» flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyDetails {
    /// Company name.
    pub name: String,
    /// Tax id (ИНН).
    pub inn: String,
}

/// The submitted checkout form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutForm {
    /// Contact name.
    pub name: String,
    /// Contact phone; becomes the account join key.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Company fields when buying as a legal entity.
    pub company: Option<CompanyDetails>,
    /// Chosen delivery method.
    pub delivery_method: DeliveryMethod,
    /// Delivery address; required unless the method is pickup.
    pub address: Option<String>,
    /// Chosen payment method.
    pub payment: PaymentMethod,
    /// Optional note to the shop.
    pub comment: Option<String>,
}

/// Totals shown in the order summary sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    /// Sum of cart item prices.
    pub subtotal: u64,
    /// Fixed cost of the chosen delivery method.
    pub delivery_cost: u64,
    /// `subtotal + delivery_cost`.
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn delivery_costs_are_fixed() {
        assert_eq!(DeliveryMethod::Courier.cost(), 2000);
        assert_eq!(DeliveryMethod::Transport.cost(), 5000);
        assert_eq!(DeliveryMethod::Pickup.cost(), 0);
    }

    #[test]
    fn only_pickup_skips_the_address() {
        assert!(DeliveryMethod::Courier.requires_address());
        assert!(DeliveryMethod::Transport.requires_address());
        assert!(!DeliveryMethod::Pickup.requires_address());
    }

    #[test]
    fn payment_methods_serialize_to_lowercase_tokens() -> TestResult {
        assert_eq!(serde_json::to_value(PaymentMethod::Card)?, "card");
        assert_eq!(serde_json::to_value(PaymentMethod::Cash)?, "cash");
        assert_eq!(serde_json::to_value(PaymentMethod::Invoice)?, "invoice");

        Ok(())
    }
}
