//! The admin surface: catalog CRUD and order management.

use promdvigatel::{
    context::StoreContext,
    domain::{
        checkout::models::{CheckoutForm, DeliveryMethod, PaymentMethod},
        engines::{
            CatalogError,
            models::{EngineDraft, EngineId, EngineSpecs, EngineType},
        },
        orders::{OrderError, status::OrderStatus},
    },
};
use testresult::TestResult;

fn draft(name: &str, manufacturer: &str) -> EngineDraft {
    EngineDraft {
        name: name.to_string(),
        engine_type: EngineType::Diesel,
        manufacturer: manufacturer.to_string(),
        power: 360,
        price: 900_000,
        image: None,
        specs: EngineSpecs {
            cylinders: 8,
            displacement: "14.86 л".to_string(),
            fuel_type: "Дизель".to_string(),
            cooling: "Жидкостное".to_string(),
        },
    }
}

fn checkout_form() -> CheckoutForm {
    CheckoutForm {
        name: "Пётр Петров".to_string(),
        phone: "+7 (912) 345-67-89".to_string(),
        email: "petr@example.com".to_string(),
        company: None,
        delivery_method: DeliveryMethod::Pickup,
        address: None,
        payment: PaymentMethod::Cash,
        comment: None,
    }
}

#[test]
fn created_engines_join_the_catalog_and_its_projections() -> TestResult {
    let store = StoreContext::in_memory();

    let created = store.catalog.create(draft("ДД-360", "КамАЗ"))?;

    assert_eq!(store.catalog.list()?.len(), 7);
    assert_eq!(store.catalog.get(created.id)?, created);
    assert!(store.catalog.manufacturers()?.contains(&"КамАЗ".to_string()));

    Ok(())
}

#[test]
fn editing_an_engine_replaces_it_in_place() -> TestResult {
    let store = StoreContext::in_memory();

    let mut engine = store.catalog.get(EngineId(3))?;
    engine.price = 299_000;
    store.catalog.upsert(engine)?;

    let listed = store.catalog.list()?;
    assert_eq!(listed.len(), 6);
    assert_eq!(store.catalog.get(EngineId(3))?.price, 299_000);

    Ok(())
}

#[test]
fn removing_an_unknown_engine_is_not_found() {
    let store = StoreContext::in_memory();

    assert!(matches!(
        store.catalog.remove(EngineId(999)),
        Err(CatalogError::NotFound)
    ));
}

#[test]
fn deleting_an_engine_leaves_order_snapshots_intact() -> TestResult {
    let store = StoreContext::in_memory();

    let engine = store.catalog.get(EngineId(2))?;
    store.cart.add(engine.clone())?;
    let order = store.checkout.place_order(checkout_form())?;

    store.catalog.remove(EngineId(2))?;

    // The order carries its own copy of the sold engine.
    let stored = store.orders.list()?;
    let snapshot = stored.first().ok_or("order vanished")?;
    assert_eq!(snapshot.items, vec![engine]);
    assert!(matches!(
        store.catalog.get(EngineId(2)),
        Err(CatalogError::NotFound)
    ));
    assert_eq!(snapshot.total, order.total);

    Ok(())
}

#[test]
fn status_updates_touch_only_the_targeted_order() -> TestResult {
    let store = StoreContext::in_memory();

    store.cart.add(store.catalog.get(EngineId(1))?)?;
    let first = store.checkout.place_order(checkout_form())?;
    store.cart.add(store.catalog.get(EngineId(4))?)?;
    let second = store.checkout.place_order(checkout_form())?;

    let updated = store.orders.update_status(&second.id, OrderStatus::Shipped)?;
    assert_eq!(updated.status, OrderStatus::Shipped);

    let orders = store.orders.list()?;
    let untouched = orders
        .iter()
        .find(|order| order.id == first.id)
        .ok_or("first order vanished")?;
    assert_eq!(untouched.status, OrderStatus::New);

    Ok(())
}

#[test]
fn removed_orders_leave_the_customer_projection() -> TestResult {
    let store = StoreContext::in_memory();

    store.cart.add(store.catalog.get(EngineId(5))?)?;
    let order = store.checkout.place_order(checkout_form())?;

    store.orders.remove(&order.id)?;

    assert!(store.orders.list()?.is_empty());
    assert!(store.orders.by_customer_phone("+7 (912) 345-67-89")?.is_empty());
    assert!(matches!(
        store.orders.update_status(&order.id, OrderStatus::Cancelled),
        Err(OrderError::NotFound)
    ));

    Ok(())
}
