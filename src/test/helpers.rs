//! Test data builders.

use jiff::Timestamp;

use crate::domain::{
    checkout::models::{CheckoutForm, DeliveryMethod, PaymentMethod},
    engines::models::{Engine, EngineDraft, EngineId, EngineSpecs, EngineType},
    orders::{
        models::{Customer, Delivery, Order, OrderId},
        status::OrderStatus,
    },
    session::models::User,
};

pub(crate) fn sample_specs() -> EngineSpecs {
    EngineSpecs {
        cylinders: 6,
        displacement: "11.15 л".to_string(),
        fuel_type: "Дизель".to_string(),
        cooling: "Жидкостное".to_string(),
    }
}

pub(crate) fn sample_engine(id: i64, price: u64) -> Engine {
    Engine {
        id: EngineId(id),
        name: format!("Двигатель №{id}"),
        engine_type: EngineType::Diesel,
        manufacturer: "ЯМЗ".to_string(),
        power: 240,
        price,
        image: "https://example.com/engine.jpg".to_string(),
        specs: sample_specs(),
    }
}

pub(crate) fn sample_draft(name: &str) -> EngineDraft {
    EngineDraft {
        name: name.to_string(),
        engine_type: EngineType::Diesel,
        manufacturer: "ЯМЗ".to_string(),
        power: 500,
        price: 1_200_000,
        image: None,
        specs: sample_specs(),
    }
}

pub(crate) fn sample_user(phone: &str) -> User {
    User {
        phone: phone.to_string(),
        name: "Иван Иванов".to_string(),
        email: "ivan@example.com".to_string(),
    }
}

/// A valid courier-delivery form for a private buyer.
pub(crate) fn checkout_form() -> CheckoutForm {
    CheckoutForm {
        name: "Иван Иванов".to_string(),
        phone: "+7 (999) 123-45-67".to_string(),
        email: "ivan@example.com".to_string(),
        company: None,
        delivery_method: DeliveryMethod::Courier,
        address: Some("г. Москва, ул. Ленина, д. 10, кв. 5".to_string()),
        payment: PaymentMethod::Card,
        comment: None,
    }
}

pub(crate) fn sample_order(id: &str, phone: &str) -> Order {
    Order {
        id: OrderId(id.to_string()),
        date: Timestamp::UNIX_EPOCH,
        customer: Customer {
            name: "Иван Иванов".to_string(),
            phone: phone.to_string(),
            email: "ivan@example.com".to_string(),
            is_company: false,
            inn: None,
            company_name: None,
        },
        delivery: Delivery {
            method: DeliveryMethod::Courier.label().to_string(),
            address: Some("г. Москва, ул. Ленина, д. 10".to_string()),
            cost: DeliveryMethod::Courier.cost(),
        },
        payment: PaymentMethod::Card,
        items: vec![sample_engine(1, 450_000)],
        total: 452_000,
        status: OrderStatus::New,
        comment: None,
    }
}
