//! Dashboard state machine
//!
//! [`DashboardState`] is a value; every change goes through
//! [`DashboardState::apply`]. The product list only changes once the server
//! has confirmed a load or an update.

use domain_inventory::{InventoryStats, Product, ProductId};
use std::collections::BTreeSet;
use std::str::FromStr;
use thiserror::Error;

/// Progress of the most recent product load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Something that happened: user-triggered dispatches and server outcomes
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    LoadStarted,
    Loaded(Vec<Product>),
    LoadFailed(String),
    UpdateDispatched(ProductId),
    UpdateSucceeded(Product),
    UpdateFailed { id: ProductId, message: String },
}

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Increment(ProductId),
    Decrement(ProductId),
    Reload,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum IntentParseError {
    #[error("Empty command")]
    Empty,

    #[error("Missing product id after '{0}'")]
    MissingId(char),

    #[error("Unknown command: {0}")]
    Unknown(String),
}

impl FromStr for Intent {
    type Err = IntentParseError;

    /// `+ <id>`, `- <id>`, `r`, `q`. The space after `+`/`-` is optional.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let mut chars = line.chars();
        let Some(first) = chars.next() else {
            return Err(IntentParseError::Empty);
        };
        let rest = chars.as_str().trim();

        match first {
            '+' | '-' => {
                if rest.is_empty() {
                    return Err(IntentParseError::MissingId(first));
                }
                let Ok(id) = rest.parse::<ProductId>();
                Ok(if first == '+' {
                    Intent::Increment(id)
                } else {
                    Intent::Decrement(id)
                })
            }
            'r' | 'R' if rest.is_empty() => Ok(Intent::Reload),
            'q' | 'Q' if rest.is_empty() => Ok(Intent::Quit),
            _ => Err(IntentParseError::Unknown(line.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    products: Vec<Product>,
    phase: LoadPhase,
    error: Option<String>,
    updating: BTreeSet<ProductId>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(mut self, event: Event) -> Self {
        match event {
            Event::LoadStarted => {
                self.phase = LoadPhase::Loading;
            }
            Event::Loaded(products) => {
                self.products = products;
                self.phase = LoadPhase::Loaded;
                self.error = None;
            }
            Event::LoadFailed(message) => {
                // Previously loaded products stay visible under the banner.
                self.phase = LoadPhase::Errored;
                self.error = Some(message);
            }
            Event::UpdateDispatched(id) => {
                self.updating.insert(id);
            }
            Event::UpdateSucceeded(product) => {
                self.updating.remove(&product.id);
                if let Some(slot) = self.products.iter_mut().find(|p| p.id == product.id) {
                    *slot = product;
                }
                self.error = None;
            }
            Event::UpdateFailed { id, message } => {
                self.updating.remove(&id);
                self.error = Some(message);
            }
        }
        self
    }

    /// The `newQuantity` an intent would send, or `None` when its control is
    /// disabled (unknown product, update in flight, decrement at zero).
    pub fn plan(&self, intent: &Intent) -> Option<u64> {
        let (id, increment) = match intent {
            Intent::Increment(id) => (id, true),
            Intent::Decrement(id) => (id, false),
            Intent::Reload | Intent::Quit => return None,
        };

        if self.is_updating(id) {
            return None;
        }
        let product = self.product(id)?;

        if increment {
            product.stock.checked_add(1)
        } else {
            product.stock.checked_sub(1)
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_updating(&self, id: &ProductId) -> bool {
        self.updating.contains(id)
    }

    /// True while a load or any update is still awaiting the server
    pub fn has_pending(&self) -> bool {
        self.is_loading() || !self.updating.is_empty()
    }

    /// Recomputed from the current product list on every call
    pub fn stats(&self) -> InventoryStats {
        InventoryStats::from_products(&self.products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(id: u64, stock: u64, threshold: u64) -> Product {
        serde_json::from_value(json!({
            "id": id,
            "name": format!("Product {}", id),
            "price": 100,
            "stock": stock,
            "lowStockThreshold": threshold
        }))
        .unwrap()
    }

    fn loaded() -> DashboardState {
        DashboardState::new()
            .apply(Event::LoadStarted)
            .apply(Event::Loaded(vec![product(1, 5, 3), product(2, 0, 2)]))
    }

    #[test]
    fn test_load_cycle_phases() {
        let state = DashboardState::new();
        assert_eq!(state.phase(), LoadPhase::Idle);

        let state = state.apply(Event::LoadStarted);
        assert!(state.is_loading());
        assert!(state.has_pending());

        let state = state.apply(Event::Loaded(vec![product(1, 5, 3)]));
        assert_eq!(state.phase(), LoadPhase::Loaded);
        assert_eq!(state.products().len(), 1);
        assert!(!state.has_pending());
    }

    #[test]
    fn test_failed_reload_keeps_previous_products() {
        let state = loaded()
            .apply(Event::LoadStarted)
            .apply(Event::LoadFailed("Failed to load products".into()));

        assert_eq!(state.phase(), LoadPhase::Errored);
        assert_eq!(state.error(), Some("Failed to load products"));
        assert_eq!(state.products().len(), 2);
    }

    #[test]
    fn test_successful_load_clears_error() {
        let state = loaded()
            .apply(Event::LoadFailed("boom".into()))
            .apply(Event::Loaded(vec![]));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_update_replaces_product_only_after_confirmation() {
        let id = ProductId::Number(1);
        let state = loaded().apply(Event::UpdateDispatched(id.clone()));

        assert!(state.is_updating(&id));
        assert_eq!(state.product(&id).unwrap().stock, 5);

        let state = state.apply(Event::UpdateSucceeded(product(1, 6, 3)));
        assert!(!state.is_updating(&id));
        assert_eq!(state.product(&id).unwrap().stock, 6);
        assert_eq!(state.products()[1].stock, 0);
    }

    #[test]
    fn test_failed_update_leaves_product_untouched() {
        let id = ProductId::Number(1);
        let before = loaded();
        let state = before
            .clone()
            .apply(Event::UpdateDispatched(id.clone()))
            .apply(Event::UpdateFailed {
                id: id.clone(),
                message: "Failed to update stock. Please check your connection.".into(),
            });

        assert!(!state.is_updating(&id));
        assert_eq!(state.products(), before.products());
        assert!(state.error().unwrap().starts_with("Failed to update stock"));
    }

    #[test]
    fn test_successful_update_clears_error_banner() {
        let state = loaded()
            .apply(Event::LoadFailed("stale".into()))
            .apply(Event::UpdateSucceeded(product(2, 1, 2)));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_plan_increment_and_decrement() {
        let state = loaded();
        assert_eq!(state.plan(&Intent::Increment(1.into())), Some(6));
        assert_eq!(state.plan(&Intent::Decrement(1.into())), Some(4));
        assert_eq!(state.plan(&Intent::Increment(2.into())), Some(1));
    }

    #[test]
    fn test_plan_disabled_controls() {
        let state = loaded().apply(Event::UpdateDispatched(1.into()));

        // In flight
        assert_eq!(state.plan(&Intent::Increment(1.into())), None);
        assert_eq!(state.plan(&Intent::Decrement(1.into())), None);
        // Zero stock
        assert_eq!(state.plan(&Intent::Decrement(2.into())), None);
        // Unknown product
        assert_eq!(state.plan(&Intent::Increment(42.into())), None);
        assert_eq!(state.plan(&Intent::Reload), None);
    }

    #[test]
    fn test_concurrent_updates_tracked_per_product() {
        let state = loaded()
            .apply(Event::UpdateDispatched(1.into()))
            .apply(Event::UpdateDispatched(2.into()))
            .apply(Event::UpdateSucceeded(product(2, 1, 2)));

        assert!(state.is_updating(&1.into()));
        assert!(!state.is_updating(&2.into()));
        assert!(state.has_pending());
    }

    #[test]
    fn test_stats_follow_product_list() {
        let state = loaded();
        assert_eq!(state.stats().low_stock, 0);
        assert_eq!(state.stats().out_of_stock, 1);

        let state = state.apply(Event::UpdateSucceeded(product(1, 2, 3)));
        assert_eq!(state.stats().low_stock, 1);
    }

    #[test]
    fn test_parse_intents() {
        assert_eq!("+ 1".parse(), Ok(Intent::Increment(1.into())));
        assert_eq!("-3".parse(), Ok(Intent::Decrement(3.into())));
        assert_eq!(
            " + sku-9 ".parse(),
            Ok(Intent::Increment(ProductId::Text("sku-9".into())))
        );
        assert_eq!("r".parse(), Ok(Intent::Reload));
        assert_eq!("q".parse(), Ok(Intent::Quit));
    }

    #[test]
    fn test_parse_intent_errors() {
        assert_eq!("".parse::<Intent>(), Err(IntentParseError::Empty));
        assert_eq!("+".parse::<Intent>(), Err(IntentParseError::MissingId('+')));
        assert_eq!(
            "reload now".parse::<Intent>(),
            Err(IntentParseError::Unknown("reload now".into()))
        );
    }
}
