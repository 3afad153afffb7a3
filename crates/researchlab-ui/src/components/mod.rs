//! Reusable UI components

pub mod text_input;

pub use text_input::{register_bindings as register_text_input_bindings, TextInput, TextInputEvent};
