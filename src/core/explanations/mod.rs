pub mod errors;
pub mod explanation_config;
pub mod text_panel;
pub mod topics;
pub mod wrap_text;
