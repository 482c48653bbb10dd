//! Generic table controls: filter + search + sort + paginate over an
//! in-memory collection, with typed field access.

pub mod controller;
pub mod controls;
pub mod presets;
pub mod schema;
pub mod view;

pub use controller::TableController;
pub use controls::{ControlState, SortDirection, SortState};
pub use presets::TablePreset;
pub use schema::{FieldValue, Record, Schema};
pub use view::DerivedView;
