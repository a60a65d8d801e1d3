//! Small reusable UI pieces shared by the search bar and the modal.

pub mod input_field;

pub use input_field::InputField;
