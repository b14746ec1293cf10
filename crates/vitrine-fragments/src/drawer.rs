//! The cart drawer.

use crate::fragment::{Fragment, Subscriptions};
use std::sync::{Arc, Mutex};
use vitrine_cart::{CartSnapshot, MoneyFormat, ThemeSettings};
use vitrine_events::{EventBus, EventName, StoreEvent};

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerLine {
    pub key: String,
    pub product_title: String,
    pub variant_title: Option<String>,
    pub quantity: u32,
    /// Extended price, formatted.
    pub line_price: String,
    /// Pre-discount price, present only when the line is discounted
    /// (rendered struck through next to the discounted price).
    pub original_line_price: Option<String>,
    /// Shopper-visible properties, private keys filtered out.
    pub properties: Vec<(String, String)>,
    pub image: Option<String>,
    pub url: Option<String>,
}

/// The drawer's render state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerView {
    pub open: bool,
    pub empty: bool,
    pub lines: Vec<DrawerLine>,
    pub subtotal: String,
    pub note: Option<String>,
    /// Latest `cart-error` message; cleared by the next successful
    /// update.
    pub error: Option<String>,
}

/// The cart drawer fragment.
///
/// Consumes `cart-update`, `cart-error`, `product:added`, `cart:open`
/// and `cart:close`; an added product opens the drawer. The view is
/// rebuilt wholesale from each installed snapshot, never patched.
pub struct CartDrawer {
    settings: ThemeSettings,
    bus: EventBus,
    state: Arc<Mutex<DrawerView>>,
    subscriptions: Subscriptions,
}

impl CartDrawer {
    pub fn new(settings: ThemeSettings, bus: EventBus) -> Self {
        let view = DrawerView {
            open: false,
            empty: true,
            lines: Vec::new(),
            subtotal: settings.money_format.format(vitrine_cart::Money::ZERO),
            note: None,
            error: None,
        };
        Self {
            settings,
            bus,
            state: Arc::new(Mutex::new(view)),
            subscriptions: Subscriptions::default(),
        }
    }

    /// The current render state.
    pub fn view(&self) -> DrawerView {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// The empty-cart message to show when the empty flag is set.
    pub fn empty_message(&self) -> &str {
        &self.settings.strings.empty_cart
    }

    /// Ask the drawer to open. Takes effect when the event is
    /// delivered, like any other producer.
    pub fn open(&self) {
        self.bus.publish(StoreEvent::CartOpen);
    }

    /// Ask the drawer to close.
    pub fn close(&self) {
        self.bus.publish(StoreEvent::CartClose);
    }
}

/// Render a snapshot's lines. Pure: the same snapshot always produces
/// the same lines.
fn render_lines(cart: &CartSnapshot, format: &MoneyFormat) -> Vec<DrawerLine> {
    cart.items
        .iter()
        .map(|line| DrawerLine {
            key: line.key.as_str().to_string(),
            product_title: line.product_title.clone(),
            variant_title: line.variant_title.clone(),
            quantity: line.quantity,
            line_price: format.format(line.line_price),
            original_line_price: line
                .is_discounted()
                .then(|| format.format(line.original_line_price)),
            properties: line
                .public_properties()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            image: line.image.clone(),
            url: line.url.clone(),
        })
        .collect()
}

fn apply_snapshot(view: &mut DrawerView, cart: &CartSnapshot, format: &MoneyFormat) {
    view.lines = render_lines(cart, format);
    view.empty = cart.is_empty();
    view.subtotal = format.format(cart.total_price);
    view.note = cart.note.clone();
    view.error = None;
}

impl Fragment for CartDrawer {
    fn on_mount(&mut self, bus: &EventBus) {
        let state = self.state.clone();
        let format = self.settings.money_format.clone();
        self.subscriptions
            .track(bus.subscribe(EventName::CartUpdate, move |event| {
                if let StoreEvent::CartUpdate { cart } = event {
                    let mut view = state.lock().unwrap_or_else(|e| e.into_inner());
                    apply_snapshot(&mut view, cart, &format);
                }
                Ok(())
            }));

        let state = self.state.clone();
        self.subscriptions
            .track(bus.subscribe(EventName::CartError, move |event| {
                if let StoreEvent::CartError { message } = event {
                    state.lock().unwrap_or_else(|e| e.into_inner()).error = Some(message.clone());
                }
                Ok(())
            }));

        let state = self.state.clone();
        self.subscriptions
            .track(bus.subscribe(EventName::ProductAdded, move |_| {
                state.lock().unwrap_or_else(|e| e.into_inner()).open = true;
                Ok(())
            }));

        let state = self.state.clone();
        self.subscriptions
            .track(bus.subscribe(EventName::CartOpen, move |_| {
                state.lock().unwrap_or_else(|e| e.into_inner()).open = true;
                Ok(())
            }));

        let state = self.state.clone();
        self.subscriptions
            .track(bus.subscribe(EventName::CartClose, move |_| {
                state.lock().unwrap_or_else(|e| e.into_inner()).open = false;
                Ok(())
            }));

        tracing::debug!("cart drawer mounted");
    }

    fn on_unmount(&mut self, bus: &EventBus) {
        self.subscriptions.clear(bus);
    }
}
