//! Startpage core components.
//!
//! Every page component is a plain state struct that reacts to input and
//! synchronizes named objects in the [`display::DisplayRegistry`]. Rendering
//! is a pure projection of component state; no component reads the display
//! to reconstruct state. This crate has zero platform dependencies.

// Re-exports from startpage-types (foundation types).
pub use startpage_types::color;
pub use startpage_types::config;
pub use startpage_types::error;
pub use startpage_types::input;

pub use startpage_store as store;

pub mod background;
pub mod clock;
pub mod display;
pub mod links;
pub mod modal;
pub mod nav;
pub mod notify;
pub mod platform;
pub mod search;
pub mod theme;
pub mod ui;
pub mod validate;
