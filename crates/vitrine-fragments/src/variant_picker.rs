//! Option selection on the product page.

use crate::fragment::Fragment;
use std::sync::Arc;
use vitrine_cart::constants::LOW_STOCK_THRESHOLD;
use vitrine_cart::{Product, ProductVariant, StockStatus, ThemeSettings};
use vitrine_events::{EventBus, StoreEvent};

/// Render state of the product form around the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerView {
    /// Formatted price of the resolved variant; `None` while the
    /// selected combination does not exist.
    pub price: Option<String>,
    pub compare_at: Option<String>,
    /// Availability label from the theme strings.
    pub availability: String,
    pub sku: Option<String>,
    pub barcode: Option<String>,
    pub add_disabled: bool,
}

/// Producer that resolves option selections to a variant and publishes
/// `variant-change` with the result.
///
/// Selection is positional: one value per option axis, matched exactly
/// against each variant's option list. A combination with no variant
/// publishes `variant: None` so consumers can show the unavailable
/// state.
pub struct VariantPicker {
    product: Product,
    settings: ThemeSettings,
    selected: Vec<String>,
    bus: EventBus,
}

impl VariantPicker {
    /// Start on the product's first variant, the storefront default.
    pub fn new(product: Product, settings: ThemeSettings, bus: EventBus) -> Self {
        let selected = product
            .first_variant()
            .map(|variant| variant.options.clone())
            .unwrap_or_default();
        Self {
            product,
            settings,
            selected,
            bus,
        }
    }

    /// The currently selected option values, in option-position order.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// The variant the current selection resolves to.
    pub fn resolved(&self) -> Option<&ProductVariant> {
        self.product.variant_matching(&self.selected)
    }

    /// Change one option axis and publish the re-resolved variant.
    pub fn select_option(&mut self, position: usize, value: impl Into<String>) {
        if position >= self.selected.len() {
            tracing::warn!(position, "option position out of range");
            return;
        }
        self.selected[position] = value.into();
        let resolved = self.resolved().cloned().map(Arc::new);
        self.bus
            .publish(StoreEvent::VariantChange { variant: resolved });
    }

    pub fn view(&self) -> PickerView {
        let strings = &self.settings.strings;
        match self.resolved() {
            Some(variant) => {
                let status = variant.stock_status(LOW_STOCK_THRESHOLD);
                PickerView {
                    price: Some(self.settings.money_format.format(variant.price)),
                    compare_at: variant
                        .is_on_sale()
                        .then(|| variant.compare_at_price)
                        .flatten()
                        .map(|compare| self.settings.money_format.format(compare)),
                    availability: match status {
                        StockStatus::InStock => strings.in_stock.clone(),
                        StockStatus::LowStock => strings.low_stock.clone(),
                        StockStatus::OutOfStock => strings.out_of_stock.clone(),
                    },
                    sku: variant.sku.clone(),
                    barcode: variant.barcode.clone(),
                    add_disabled: status == StockStatus::OutOfStock,
                }
            }
            None => PickerView {
                price: None,
                compare_at: None,
                availability: strings.unavailable.clone(),
                sku: None,
                barcode: None,
                add_disabled: true,
            },
        }
    }
}

impl Fragment for VariantPicker {}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_cart::{Money, ProductId, VariantId};
    use vitrine_events::EventName;

    fn variant(id: u64, options: &[&str]) -> ProductVariant {
        ProductVariant {
            id: VariantId::new(id),
            title: options.join(" / "),
            options: options.iter().map(|s| s.to_string()).collect(),
            price: Money::new(2500),
            compare_at_price: None,
            available: true,
            inventory_quantity: None,
            sku: Some(format!("SKU-{id}")),
            barcode: None,
        }
    }

    fn product() -> Product {
        Product {
            id: ProductId::new(632910392),
            title: "Wool Beanie".to_string(),
            options: vec!["Color".to_string(), "Size".to_string()],
            variants: vec![
                variant(1, &["Blue", "M"]),
                variant(2, &["Blue", "L"]),
                {
                    let mut sold_out = variant(3, &["Green", "M"]);
                    sold_out.available = false;
                    sold_out
                },
            ],
        }
    }

    #[test]
    fn test_starts_on_first_variant() {
        let picker = VariantPicker::new(product(), ThemeSettings::default(), EventBus::new());
        assert_eq!(picker.selected(), ["Blue", "M"]);
        let view = picker.view();
        assert_eq!(view.price.as_deref(), Some("$25.00"));
        assert_eq!(view.availability, "In Stock");
        assert_eq!(view.sku.as_deref(), Some("SKU-1"));
        assert!(!view.add_disabled);
    }

    #[test]
    fn test_select_option_publishes_variant_change() {
        let bus = EventBus::new();
        let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = seen.clone();
        bus.subscribe(EventName::VariantChange, move |event| {
            if let StoreEvent::VariantChange { variant } = event {
                sink.lock()
                    .unwrap()
                    .push(variant.as_ref().map(|v| v.id));
            }
            Ok(())
        });

        let mut picker = VariantPicker::new(product(), ThemeSettings::default(), bus.clone());
        picker.select_option(1, "L");
        bus.drain();

        assert_eq!(seen.lock().unwrap().as_slice(), [Some(VariantId::new(2))]);
    }

    #[test]
    fn test_missing_combination_is_unavailable() {
        let bus = EventBus::new();
        let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = seen.clone();
        bus.subscribe(EventName::VariantChange, move |event| {
            if let StoreEvent::VariantChange { variant } = event {
                sink.lock().unwrap().push(variant.is_some());
            }
            Ok(())
        });

        let mut picker = VariantPicker::new(product(), ThemeSettings::default(), bus.clone());
        picker.select_option(0, "Green");
        picker.select_option(1, "L");
        bus.drain();

        // Green/M exists, Green/L does not.
        assert_eq!(seen.lock().unwrap().as_slice(), [true, false]);
        let view = picker.view();
        assert_eq!(view.price, None);
        assert_eq!(view.availability, "Unavailable");
        assert!(view.add_disabled);
    }

    #[test]
    fn test_sold_out_variant_disables_add() {
        let mut picker =
            VariantPicker::new(product(), ThemeSettings::default(), EventBus::new());
        picker.select_option(0, "Green");
        let view = picker.view();
        assert_eq!(view.availability, "Out of Stock");
        assert!(view.add_disabled);
    }

    #[test]
    fn test_sale_price_shows_compare_at() {
        let mut p = product();
        p.variants[0].compare_at_price = Some(Money::new(3000));
        let picker = VariantPicker::new(p, ThemeSettings::default(), EventBus::new());
        let view = picker.view();
        assert_eq!(view.price.as_deref(), Some("$25.00"));
        assert_eq!(view.compare_at.as_deref(), Some("$30.00"));
    }

    #[test]
    fn test_out_of_range_position_is_ignored() {
        let bus = EventBus::new();
        let mut picker = VariantPicker::new(product(), ThemeSettings::default(), bus.clone());
        picker.select_option(5, "Huge");
        assert_eq!(bus.pending(), 0);
        assert_eq!(picker.selected(), ["Blue", "M"]);
    }
}
