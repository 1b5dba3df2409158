//! Product registration domain.
//!
//! Validation of raw form submissions and maintenance of the price-ordered
//! product list, implemented purely as deterministic logic (no IO, no storage).
//! [`FormSession`] composes both into the state a registration screen renders.

pub mod availability;
pub mod catalog;
pub mod price;
pub mod product;
pub mod session;
pub mod submission;
pub mod validation;

pub use availability::Availability;
pub use catalog::{EMPTY_LIST_MESSAGE, ProductList, ProductRow, insert_sorted};
pub use price::Price;
pub use product::Product;
pub use session::{FormSession, Notice, PRODUCT_ADDED_MESSAGE, default_notice_ttl};
pub use submission::ProductSubmission;
pub use validation::{Field, FieldError, ValidationErrors, validate};
