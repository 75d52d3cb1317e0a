//! Top-level application controller.
//!
//! The original service kept cart, navigation, and location state in ambient
//! provider contexts; here they are explicit fields on one [`Storefront`]
//! owned by the process and passed by reference to whatever surface renders
//! it. No singletons, no globals.

use crate::{
    cart::Cart,
    catalog::{Catalog, Category, Product},
    checkout::{CheckoutOrchestrator, CheckoutState, ContactInfo, DeliverySelection, PaymentMethod},
    config::Config,
    errors::Result,
    locations::{self, DeliveryZones, SavedSelection},
    orders::{self, Order},
};
use sea_orm::DatabaseConnection;
use tracing::info;

/// The view a shopper is currently on. Pure routing state, consumed by the
/// rendering layer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PageView {
    /// Landing page
    #[default]
    Home,
    /// Menu browser, optionally filtered by category
    Menu,
    /// Cart review
    Cart,
    /// Checkout form
    Checkout,
    /// Post-checkout confirmation
    OrderSuccess,
    /// Order history
    History,
    /// Order tracking page
    Track,
    /// Catering / event request page
    Catering,
    /// Chat assistant page
    AiAssistant,
    /// Cake image designer page
    CakeDesigner,
}

/// Current view plus the optional menu category filter.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Active view
    pub view: PageView,
    /// Category filter applied on the menu view, `None` for "All"
    pub category_filter: Option<Category>,
}

impl NavigationState {
    /// Moves to `view`, updating the menu filter.
    pub fn navigate_to(&mut self, view: PageView, category_filter: Option<Category>) {
        self.view = view;
        self.category_filter = category_filter;
    }
}

/// Owns every piece of storefront state for one shopper session.
#[derive(Debug)]
pub struct Storefront {
    db: DatabaseConnection,
    catalog: Catalog,
    zones: DeliveryZones,
    /// Session-scoped cart; intentionally not persisted
    pub cart: Cart,
    /// Checkout state machine
    pub checkout: CheckoutOrchestrator,
    /// Routing state for the rendering layer
    pub navigation: NavigationState,
}

impl Storefront {
    /// Builds a storefront from validated config and an open database.
    ///
    /// # Errors
    /// Returns an error if the menu or zone config fails validation.
    pub fn from_config(db: DatabaseConnection, config: Config) -> Result<Self> {
        let catalog = Catalog::from_config(config.menu)?;
        let zones = DeliveryZones::from_config(config.zones)?;
        info!(
            products = catalog.len(),
            states = zones.states().len(),
            "storefront initialized"
        );

        Ok(Self {
            db,
            catalog,
            zones,
            cart: Cart::new(),
            checkout: CheckoutOrchestrator::default(),
            navigation: NavigationState::default(),
        })
    }

    /// The immutable menu catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The delivery zone table.
    #[must_use]
    pub const fn zones(&self) -> &DeliveryZones {
        &self.zones
    }

    /// The open database handle.
    #[must_use]
    pub const fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Adds one unit of a catalog product to the cart. Unknown ids are
    /// ignored - the rendering layer only offers ids the catalog produced.
    pub fn add_to_cart(&mut self, product_id: &str) {
        let product: Option<Product> = self.catalog.product(product_id).cloned();
        if let Some(product) = product {
            self.cart.add_item(&product);
        }
    }

    /// Persists the shopper's confirmed delivery area.
    ///
    /// # Errors
    /// Returns an error if the selection cannot be written.
    pub async fn confirm_delivery_area(&self, state: &str, lga: &str) -> Result<()> {
        locations::save_selection(&self.db, state, lga).await
    }

    /// The delivery area saved in a previous session, if any.
    pub async fn saved_delivery_area(&self) -> Option<SavedSelection> {
        locations::load_selection(&self.db).await
    }

    /// Submits the current cart for checkout. On success the cart is empty
    /// and the returned order is at the head of the archive.
    ///
    /// # Errors
    /// See [`CheckoutOrchestrator::submit`].
    pub async fn place_order(
        &mut self,
        selection: &DeliverySelection,
        payment_method: PaymentMethod,
        contact: ContactInfo,
    ) -> Result<Order> {
        let order = self
            .checkout
            .submit(
                &self.db,
                &mut self.cart,
                &self.zones,
                selection,
                payment_method,
                contact,
            )
            .await?;
        self.navigation.navigate_to(PageView::OrderSuccess, None);
        Ok(order)
    }

    /// Full order history, newest first.
    pub async fn order_history(&self) -> Vec<Order> {
        orders::all(&self.db).await
    }

    /// The most recent order, for the confirmation view.
    pub async fn latest_order(&self) -> Option<Order> {
        orders::latest(&self.db).await
    }

    /// Simulated fulfilment stage for an archived order, `None` for ids the
    /// archive has never seen.
    pub async fn track_order(&self, order_id: &str) -> Option<orders::OrderStatus> {
        orders::track(&self.db, order_id).await
    }

    /// True while a submission is in flight; the rendering layer must disable
    /// the place-order control when this holds.
    #[must_use]
    pub const fn is_processing(&self) -> bool {
        matches!(self.checkout.state(), CheckoutState::Processing)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{sample_config, sample_contact, sample_selection, setup_test_db};

    async fn test_storefront() -> Result<Storefront> {
        let db = setup_test_db().await?;
        let mut storefront = Storefront::from_config(db, sample_config())?;
        // Tests should not sit through the production gateway delay
        storefront.checkout = crate::test_utils::fast_orchestrator();
        Ok(storefront)
    }

    #[tokio::test]
    async fn test_add_to_cart_through_controller() -> Result<()> {
        let mut storefront = test_storefront().await?;

        storefront.add_to_cart("sf-1");
        storefront.add_to_cart("sf-1");
        storefront.add_to_cart("unknown-id");

        assert_eq!(storefront.cart.line_count(), 1);
        assert_eq!(storefront.cart.lines()[0].quantity, 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_place_order_end_to_end() -> Result<()> {
        let mut storefront = test_storefront().await?;
        storefront.add_to_cart("sf-1");

        let order = storefront
            .place_order(
                &sample_selection(),
                PaymentMethod::PayOnDelivery,
                sample_contact(),
            )
            .await?;

        assert!(storefront.cart.is_empty());
        assert_eq!(storefront.navigation.view, PageView::OrderSuccess);
        assert_eq!(storefront.latest_order().await.unwrap().id, order.id);
        assert_eq!(storefront.order_history().await.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_saved_delivery_area_round_trip() -> Result<()> {
        let storefront = test_storefront().await?;

        assert!(storefront.saved_delivery_area().await.is_none());
        storefront.confirm_delivery_area("Abia", "Umuahia North").await?;

        let saved = storefront.saved_delivery_area().await.unwrap();
        assert_eq!(saved.state, "Abia");
        assert_eq!(saved.lga, "Umuahia North");
        Ok(())
    }

    #[tokio::test]
    async fn test_navigation_state() -> Result<()> {
        let mut storefront = test_storefront().await?;

        storefront
            .navigation
            .navigate_to(PageView::Menu, Some(Category::Soups));
        assert_eq!(storefront.navigation.view, PageView::Menu);
        assert_eq!(storefront.navigation.category_filter, Some(Category::Soups));

        storefront.navigation.navigate_to(PageView::Cart, None);
        assert!(storefront.navigation.category_filter.is_none());

        storefront.navigation.navigate_to(PageView::Track, None);
        assert_eq!(storefront.navigation.view, PageView::Track);
        storefront.navigation.navigate_to(PageView::Catering, None);
        assert_eq!(storefront.navigation.view, PageView::Catering);
        Ok(())
    }

    #[tokio::test]
    async fn test_track_order_through_controller() -> Result<()> {
        let mut storefront = test_storefront().await?;

        assert!(storefront.track_order("123456").await.is_none());

        storefront.add_to_cart("sf-1");
        let order = storefront
            .place_order(
                &sample_selection(),
                PaymentMethod::PayOnDelivery,
                sample_contact(),
            )
            .await?;

        assert!(storefront.track_order(&order.id).await.is_some());
        Ok(())
    }
}
