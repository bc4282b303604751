//! Checkout service.
//!
//! Turns the current cart plus a submitted form into an order: the one real
//! algorithm in the shop (subtotal + fixed delivery cost), followed by the
//! side effects the storefront has always performed in this sequence —
//! append the order, remember the customer, clear the cart.

use std::sync::Arc;

use jiff::Timestamp;
use mockall::automock;

use crate::{
    domain::{
        cart::CartRepository,
        checkout::{
            errors::CheckoutError,
            models::{CheckoutForm, DeliveryMethod, Quote},
        },
        orders::{
            OrdersRepository,
            models::{Customer, Delivery, Order, OrderId},
            status::OrderStatus,
        },
        session::{SessionRepository, models::User},
    },
    storage::Storage,
};

/// The checkout flow.
#[automock]
pub trait CheckoutService: Send + Sync {
    /// Totals for the current cart under the given delivery method. Pure
    /// read: changing the method re-quotes without touching the cart.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read.
    fn quote(&self, method: DeliveryMethod) -> Result<Quote, CheckoutError>;

    /// Submit the form and produce an order.
    ///
    /// On success the order (status [`OrderStatus::New`], total computed
    /// once) is appended to the order list, the submitting identity is
    /// logged into the session, and the cart is cleared. Success is
    /// unconditional past validation — there is no partial-failure path.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::EmptyCart`] when there is nothing to order, and the
    /// required-field errors documented on [`CheckoutError`].
    fn place_order(&self, form: CheckoutForm) -> Result<Order, CheckoutError>;
}

/// [`CheckoutService`] over the local key-value store.
#[derive(Clone)]
pub struct StoredCheckoutService {
    storage: Arc<dyn Storage>,
    cart: CartRepository,
    orders: OrdersRepository,
    session: SessionRepository,
}

impl StoredCheckoutService {
    /// Build the service over `storage`.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            cart: CartRepository::new(),
            orders: OrdersRepository::new(),
            session: SessionRepository::new(),
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn validate(form: &CheckoutForm) -> Result<(), CheckoutError> {
    if is_blank(&form.name) || is_blank(&form.phone) || is_blank(&form.email) {
        return Err(CheckoutError::MissingContact);
    }

    if let Some(company) = &form.company
        && (is_blank(&company.name) || is_blank(&company.inn))
    {
        return Err(CheckoutError::MissingCompanyDetails);
    }

    if form.delivery_method.requires_address()
        && form.address.as_deref().is_none_or(is_blank)
    {
        return Err(CheckoutError::MissingAddress);
    }

    Ok(())
}

impl CheckoutService for StoredCheckoutService {
    fn quote(&self, method: DeliveryMethod) -> Result<Quote, CheckoutError> {
        let items = self.cart.load(self.storage.as_ref())?;

        let subtotal: u64 = items.iter().map(|item| item.price).sum();
        let delivery_cost = method.cost();

        Ok(Quote {
            subtotal,
            delivery_cost,
            total: subtotal + delivery_cost,
        })
    }

    fn place_order(&self, form: CheckoutForm) -> Result<Order, CheckoutError> {
        let items = self.cart.load(self.storage.as_ref())?;

        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        validate(&form)?;

        let subtotal: u64 = items.iter().map(|item| item.price).sum();
        let delivery_cost = form.delivery_method.cost();

        let now = Timestamp::now();

        let order = Order {
            id: OrderId::from_timestamp(now),
            date: now,
            customer: Customer {
                name: form.name.clone(),
                phone: form.phone.clone(),
                email: form.email.clone(),
                is_company: form.company.is_some(),
                inn: form.company.as_ref().map(|company| company.inn.clone()),
                company_name: form.company.map(|company| company.name),
            },
            delivery: Delivery {
                method: form.delivery_method.label().to_string(),
                address: if form.delivery_method.requires_address() {
                    form.address
                } else {
                    None
                },
                cost: delivery_cost,
            },
            payment: form.payment,
            items,
            total: subtotal + delivery_cost,
            status: OrderStatus::New,
            comment: form.comment.filter(|comment| !is_blank(comment)),
        };

        let mut orders = self.orders.load(self.storage.as_ref())?;
        orders.push(order.clone());
        self.orders.save(self.storage.as_ref(), &orders)?;

        // Checkout doubles as login: remember whoever submitted the form.
        self.session.save(
            self.storage.as_ref(),
            &User {
                phone: form.phone,
                name: form.name,
                email: form.email,
            },
        )?;

        self.cart.save(self.storage.as_ref(), &[])?;

        tracing::info!(
            id = %order.id,
            total = order.total,
            items = order.items.len(),
            "order placed"
        );

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::checkout::models::{CompanyDetails, PaymentMethod},
        test::{TestContext, helpers::{checkout_form, sample_engine}},
    };

    use super::*;

    #[test]
    fn quote_adds_the_fixed_delivery_cost() -> TestResult {
        let ctx = TestContext::new();
        ctx.store.cart.add(sample_engine(1, 450_000))?;
        ctx.store.cart.add(sample_engine(3, 280_000))?;

        assert_eq!(
            ctx.store.checkout.quote(DeliveryMethod::Pickup)?.total,
            730_000
        );
        assert_eq!(
            ctx.store.checkout.quote(DeliveryMethod::Courier)?.total,
            732_000
        );
        assert_eq!(
            ctx.store.checkout.quote(DeliveryMethod::Transport)?.total,
            735_000
        );

        Ok(())
    }

    #[test]
    fn requoting_does_not_mutate_the_cart() -> TestResult {
        let ctx = TestContext::new();
        ctx.store.cart.add(sample_engine(1, 450_000))?;

        ctx.store.checkout.quote(DeliveryMethod::Courier)?;
        ctx.store.checkout.quote(DeliveryMethod::Pickup)?;

        assert_eq!(ctx.store.cart.len()?, 1);

        Ok(())
    }

    #[test]
    fn empty_cart_blocks_checkout() {
        let ctx = TestContext::new();

        let result = ctx.store.checkout.place_order(checkout_form());

        assert!(
            matches!(result, Err(CheckoutError::EmptyCart)),
            "expected EmptyCart, got {result:?}"
        );
    }

    #[test]
    fn order_is_created_new_with_the_computed_total() -> TestResult {
        let ctx = TestContext::new();
        ctx.store.cart.add(sample_engine(1, 450_000))?;
        ctx.store.cart.add(sample_engine(3, 280_000))?;

        let order = ctx.store.checkout.place_order(CheckoutForm {
            delivery_method: DeliveryMethod::Courier,
            ..checkout_form()
        })?;

        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(order.total, 732_000);
        assert_eq!(order.delivery.cost, 2000);
        assert_eq!(order.delivery.method, "Курьерская доставка");
        assert_eq!(order.items.len(), 2);

        Ok(())
    }

    #[test]
    fn checkout_clears_the_cart_and_appends_exactly_one_order() -> TestResult {
        let ctx = TestContext::new();
        ctx.store.cart.add(sample_engine(1, 450_000))?;

        let before = ctx.store.orders.list()?.len();
        ctx.store.checkout.place_order(checkout_form())?;

        assert!(ctx.store.cart.is_empty()?);
        assert_eq!(ctx.store.orders.list()?.len(), before + 1);

        Ok(())
    }

    #[test]
    fn checkout_logs_the_customer_into_the_session() -> TestResult {
        let ctx = TestContext::new();
        ctx.store.cart.add(sample_engine(1, 450_000))?;

        let form = checkout_form();
        let phone = form.phone.clone();
        ctx.store.checkout.place_order(form)?;

        let user = ctx.store.session.current_user()?;
        assert_eq!(user.map(|u| u.phone), Some(phone));

        Ok(())
    }

    #[test]
    fn pickup_orders_carry_no_address() -> TestResult {
        let ctx = TestContext::new();
        ctx.store.cart.add(sample_engine(1, 450_000))?;

        let order = ctx.store.checkout.place_order(CheckoutForm {
            delivery_method: DeliveryMethod::Pickup,
            address: Some("г. Москва, ул. Ленина, д. 10".to_string()),
            ..checkout_form()
        })?;

        assert_eq!(order.delivery.address, None, "pickup discards the address");
        assert_eq!(order.delivery.cost, 0);

        Ok(())
    }

    #[test]
    fn shipping_without_an_address_is_rejected() -> TestResult {
        let ctx = TestContext::new();
        ctx.store.cart.add(sample_engine(1, 450_000))?;

        let result = ctx.store.checkout.place_order(CheckoutForm {
            delivery_method: DeliveryMethod::Transport,
            address: None,
            ..checkout_form()
        });

        assert!(
            matches!(result, Err(CheckoutError::MissingAddress)),
            "expected MissingAddress, got {result:?}"
        );
        assert_eq!(ctx.store.cart.len()?, 1, "failed checkout keeps the cart");

        Ok(())
    }

    #[test]
    fn company_order_records_company_fields() -> TestResult {
        let ctx = TestContext::new();
        ctx.store.cart.add(sample_engine(1, 450_000))?;

        let order = ctx.store.checkout.place_order(CheckoutForm {
            company: Some(CompanyDetails {
                name: "ООО «Рога и копыта»".to_string(),
                inn: "1234567890".to_string(),
            }),
            payment: PaymentMethod::Invoice,
            ..checkout_form()
        })?;

        assert!(order.customer.is_company);
        assert_eq!(order.customer.inn.as_deref(), Some("1234567890"));
        assert_eq!(
            order.customer.company_name.as_deref(),
            Some("ООО «Рога и копыта»")
        );

        Ok(())
    }

    #[test]
    fn blank_company_fields_are_rejected() -> TestResult {
        let ctx = TestContext::new();
        ctx.store.cart.add(sample_engine(1, 450_000))?;

        let result = ctx.store.checkout.place_order(CheckoutForm {
            company: Some(CompanyDetails {
                name: "  ".to_string(),
                inn: "1234567890".to_string(),
            }),
            ..checkout_form()
        });

        assert!(
            matches!(result, Err(CheckoutError::MissingCompanyDetails)),
            "expected MissingCompanyDetails, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn blank_contact_fields_are_rejected() -> TestResult {
        let ctx = TestContext::new();
        ctx.store.cart.add(sample_engine(1, 450_000))?;

        let result = ctx.store.checkout.place_order(CheckoutForm {
            phone: String::new(),
            ..checkout_form()
        });

        assert!(
            matches!(result, Err(CheckoutError::MissingContact)),
            "expected MissingContact, got {result:?}"
        );

        Ok(())
    }
}
