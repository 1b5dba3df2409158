//! Form session state.
//!
//! A [`FormSession`] is an immutable snapshot of everything the registration
//! screen shows: the product list, whether the list is visible, and the
//! success notice. Each user action maps the current snapshot to a new one; the
//! caller stores the result and drops the old value.

use chrono::{DateTime, Duration, Utc};

use crate::catalog::ProductList;
use crate::submission::ProductSubmission;
use crate::validation::{ValidationErrors, validate};

/// Notice shown after a product is registered.
pub const PRODUCT_ADDED_MESSAGE: &str = "Product added successfully!";

/// How long a notice stays visible unless configured otherwise.
pub fn default_notice_ttl() -> Duration {
    Duration::seconds(3)
}

/// Auto-dismissing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    message: String,
    expires_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(message: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            message: message.into(),
            expires_at,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSession {
    products: ProductList,
    products_visible: bool,
    notice: Option<Notice>,
    notice_ttl: Duration,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    /// Empty session: no products, list hidden, no notice.
    pub fn new() -> Self {
        Self::with_notice_ttl(default_notice_ttl())
    }

    pub fn with_notice_ttl(notice_ttl: Duration) -> Self {
        Self {
            products: ProductList::new(),
            products_visible: false,
            notice: None,
            notice_ttl,
        }
    }

    pub fn products(&self) -> &ProductList {
        &self.products
    }

    pub fn products_visible(&self) -> bool {
        self.products_visible
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn notice_ttl(&self) -> Duration {
        self.notice_ttl
    }

    /// The notice, if one exists and has not expired at `now`.
    pub fn active_notice(&self, now: DateTime<Utc>) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| n.is_active_at(now))
    }

    /// Validate and register a submission.
    ///
    /// On success the list includes the new product, becomes visible, and a
    /// notice is raised. On failure the caller keeps its current snapshot.
    pub fn submit(
        &self,
        submission: &ProductSubmission,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationErrors> {
        let product = match validate(submission) {
            Ok(product) => product,
            Err(errors) => {
                tracing::debug!(invalid_fields = errors.len(), %errors, "submission rejected");
                return Err(errors);
            }
        };

        tracing::info!(
            name = product.name(),
            value = %product.value(),
            available = %product.available(),
            "product registered"
        );

        Ok(Self {
            products: self.products.with(product),
            products_visible: true,
            notice: Some(Notice::new(PRODUCT_ADDED_MESSAGE, now + self.notice_ttl)),
            notice_ttl: self.notice_ttl,
        })
    }

    pub fn toggle_products(&self) -> Self {
        Self {
            products_visible: !self.products_visible,
            ..self.clone()
        }
    }

    /// Hide the list to go back to registering a new product.
    pub fn hide_products(&self) -> Self {
        Self {
            products_visible: false,
            ..self.clone()
        }
    }

    pub fn dismiss_notice(&self) -> Self {
        Self {
            notice: None,
            ..self.clone()
        }
    }

    /// Label of the show/hide control for the current visibility.
    pub fn toggle_label(&self) -> &'static str {
        if self.products_visible {
            "Hide products"
        } else {
            "Show products"
        }
    }
}
