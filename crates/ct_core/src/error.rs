use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("contact name is required")]
    MissingName,

    #[error("contact email is required")]
    MissingEmail,
}
