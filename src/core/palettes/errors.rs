use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown palette '{name}'")]
pub struct InvalidPaletteError {
    pub name: String,
}
