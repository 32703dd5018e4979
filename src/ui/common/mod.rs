//! Shared UI building blocks used by pages and the admin console

pub mod form;
pub mod message;
pub mod modal;
pub mod spinner;

pub use form::{FormField, SelectField, TextAreaField};
pub use message::{ErrorMessage, StatusBanner, SuccessMessage};
pub use modal::{BaseModal, ConfirmDialog};
pub use spinner::{Spinner, SpinnerSize};
