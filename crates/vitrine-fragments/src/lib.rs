//! Display fragments for the Vitrine storefront toolkit.
//!
//! Each fragment is a small, independent component: producers turn user
//! input into published events, consumers subscribe and keep a typed
//! view of the latest state. Views are pure functions of the most
//! recent snapshot or payload, so re-rendering from the same input is
//! idempotent. No fragment knows about any other; the bus is the only
//! connection between them.

pub mod banner;
pub mod drawer;
pub mod fragment;
pub mod note;
pub mod price_per_item;
pub mod stepper;
pub mod totals;
pub mod variant_picker;

pub use banner::ErrorBanner;
pub use drawer::{CartDrawer, DrawerLine, DrawerView};
pub use fragment::Fragment;
pub use note::CartNoteInput;
pub use price_per_item::{PricePerItemPanel, PriceView};
pub use stepper::QuantityStepper;
pub use totals::{CartTotals, TotalsView};
pub use variant_picker::{PickerView, VariantPicker};
