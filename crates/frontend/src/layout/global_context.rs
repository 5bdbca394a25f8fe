use contracts::catalog::{self, Product, ProductId};
use contracts::session::Mode;
use leptos::prelude::*;

/// Session view state for the storefront.
///
/// Owned at the top of the component tree and provided via context.
/// Presentation components only read the signals or invoke the named
/// operations below; none of them mutate the signals directly. State lives
/// for one browser session and resets on full reload.
#[derive(Clone, Copy)]
pub struct StorefrontContext {
    pub mode: RwSignal<Mode>,
    /// One entry per add, in add order. Repeated adds of the same product
    /// are repeated entries, not an incremented quantity.
    pub cart: RwSignal<Vec<ProductId>>,
    pub selected: RwSignal<Option<ProductId>>,
    pub search_open: RwSignal<bool>,
}

impl StorefrontContext {
    pub fn new() -> Self {
        Self {
            mode: RwSignal::new(Mode::default()),
            cart: RwSignal::new(Vec::new()),
            selected: RwSignal::new(None),
            search_open: RwSignal::new(false),
        }
    }

    /// Replace the display mode. Cart contents are untouched: prices are
    /// read from the catalog at render time, never stored in the cart.
    pub fn set_mode(&self, mode: Mode) {
        self.mode.set(mode);
    }

    pub fn toggle_mode(&self) {
        self.mode.update(|m| *m = m.toggled());
    }

    /// Append unconditionally. No inventory check, no deduplication.
    pub fn add_to_cart(&self, product: &Product) {
        self.cart.update(|cart| cart.push(product.id.clone()));
        leptos::logging::log!("Added {} to cart", product.name);
    }

    /// Badge count: the cart sequence length, recomputed on every read.
    pub fn cart_count(&self) -> usize {
        self.cart.with(|cart| cart.len())
    }

    /// Set or clear the detail selection. `None` is the close operation.
    pub fn select_product(&self, product: Option<&Product>) {
        self.selected.set(product.map(|p| p.id.clone()));
    }

    /// Resolve the current selection against the catalog.
    pub fn selected_product(&self) -> Option<&'static Product> {
        self.selected
            .with(|sel| sel.as_ref().and_then(catalog::find))
    }

    pub fn open_search(&self) {
        self.search_open.set(true);
    }

    pub fn close_search(&self) {
        self.search_open.set(false);
    }
}

impl Default for StorefrontContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::projection::display_price;

    #[test]
    fn starts_retail_with_empty_cart_and_nothing_open() {
        let ctx = StorefrontContext::new();
        assert_eq!(ctx.mode.get_untracked(), Mode::Retail);
        assert_eq!(ctx.cart_count(), 0);
        assert!(ctx.selected_product().is_none());
        assert!(!ctx.search_open.get_untracked());
    }

    #[test]
    fn repeated_adds_append() {
        let ctx = StorefrontContext::new();
        let product = &catalog::catalog()[2];
        for _ in 0..5 {
            ctx.add_to_cart(product);
        }
        assert_eq!(ctx.cart_count(), 5);
        ctx.cart.with_untracked(|cart| {
            assert!(cart.iter().all(|id| id == &product.id));
        });
    }

    #[test]
    fn mode_switch_leaves_cart_alone_but_flips_displayed_price() {
        let ctx = StorefrontContext::new();
        let product = &catalog::catalog()[1];
        ctx.add_to_cart(product);
        ctx.add_to_cart(product);

        ctx.set_mode(Mode::Wholesale);

        assert_eq!(ctx.cart_count(), 2);
        ctx.cart.with_untracked(|cart| {
            assert_eq!(cart[0], product.id);
            assert_eq!(cart[1], product.id);
        });
        let shown = display_price(product, ctx.mode.get_untracked());
        assert_eq!(shown, product.price_b2b);
    }

    #[test]
    fn deselecting_is_idempotent() {
        let ctx = StorefrontContext::new();
        let product = &catalog::catalog()[0];

        ctx.select_product(Some(product));
        assert_eq!(ctx.selected_product().map(|p| &p.id), Some(&product.id));

        ctx.select_product(None);
        assert!(ctx.selected_product().is_none());
        ctx.select_product(None);
        assert!(ctx.selected_product().is_none());
    }

    #[test]
    fn overlay_and_modal_are_independent() {
        let ctx = StorefrontContext::new();
        let product = &catalog::catalog()[0];

        ctx.open_search();
        ctx.select_product(Some(product));
        // Both visible at once; no exclusivity rule between them.
        assert!(ctx.search_open.get_untracked());
        assert!(ctx.selected_product().is_some());

        ctx.close_search();
        assert!(!ctx.search_open.get_untracked());
        assert!(ctx.selected_product().is_some());
    }

    #[test]
    fn wholesale_add_scenario() {
        let ctx = StorefrontContext::new();
        let first = &catalog::catalog()[0];

        ctx.set_mode(Mode::Wholesale);
        ctx.add_to_cart(first);

        assert_eq!(ctx.mode.get_untracked(), Mode::Wholesale);
        assert_eq!(ctx.cart_count(), 1);
        ctx.cart
            .with_untracked(|cart| assert_eq!(cart[0], first.id));
        let shown = display_price(first, ctx.mode.get_untracked());
        assert_eq!(shown, first.price_b2b);
        assert_ne!(shown, first.price_b2c);
    }
}
