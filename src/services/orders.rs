//! Order assembly, submission and the local order history.
//!
//! Submission is delegated to an [`OrderSubmitter`] collaborator and never
//! trusted to have succeeded: the structured outcome is passed back to the
//! caller together with manual fallback guidance (mail compose link, store
//! phone) whenever delivery failed.

use chrono::Utc;

use crate::cart::CartStore;
use crate::domain::order::{
    OrderLine, OrderPayload, OrderRecord, OrderStatus, SubmissionOutcome,
};
use crate::forms::checkout::CheckoutForm;
use crate::models::config::StoreConfig;
use crate::repository::{SlotReader, SlotWriter};

use super::{ServiceError, ServiceResult};

/// Slot key of the append-only order history.
pub const ORDERS_SLOT_KEY: &str = "orders";

/// External collaborator that delivers an order message.
///
/// Implementations must communicate failure through the outcome, never by
/// panicking; the caller decides what to surface to the user.
pub trait OrderSubmitter {
    fn submit(&self, order: &OrderPayload) -> SubmissionOutcome;
}

/// Degraded submitter used when no email relay is configured. It cannot
/// deliver anything itself, so every submission reports failure and the
/// caller surfaces the pre-filled mail compose link instead.
pub struct MailtoSubmitter {
    pub to: String,
}

impl OrderSubmitter for MailtoSubmitter {
    fn submit(&self, order: &OrderPayload) -> SubmissionOutcome {
        SubmissionOutcome::failed(
            order.order_id.clone(),
            "email relay not configured; use the mail link to send the order",
        )
    }
}

/// Manual next steps handed to the user when delivery failed.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackGuidance {
    /// Pre-filled `mailto:` compose link carrying the full order message.
    pub mailto: String,
    /// Store phone number to call, when configured.
    pub phone: Option<String>,
}

/// Result of a checkout: the submission outcome plus fallback guidance when
/// the order did not go through.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    pub outcome: SubmissionOutcome,
    pub fallback: Option<FallbackGuidance>,
}

/// Runs a checkout: validates the form, snapshots the cart into an order
/// payload, submits it, records the attempt in the local history and clears
/// the cart only when delivery succeeded.
pub fn place_order<R, S>(
    form: CheckoutForm,
    repo: &R,
    submitter: &S,
    config: &StoreConfig,
) -> ServiceResult<OrderConfirmation>
where
    R: SlotReader + SlotWriter + Clone,
    S: OrderSubmitter,
{
    let payload = crate::forms::checkout::CheckoutPayload::try_from(form)?;

    let cart = CartStore::new(repo.clone());
    let lines = cart.cart();
    if lines.is_empty() {
        return Err(ServiceError::EmptyCart);
    }

    let now = Utc::now();
    let order = OrderPayload {
        order_id: format!("ORD-{}", now.timestamp_millis()),
        contact: payload.contact,
        lines: lines.iter().map(OrderLine::from).collect(),
        total: cart.total(),
        currency: config.currency.clone(),
        created_at: now.naive_utc(),
    };

    let outcome = submitter.submit(&order);

    let status = if outcome.success {
        OrderStatus::Submitted
    } else {
        OrderStatus::Failed
    };
    append_order_record(repo, &order, status);

    let fallback = if outcome.success {
        cart.clear();
        None
    } else {
        Some(FallbackGuidance {
            mailto: mailto_link(
                &config.store_email,
                &format!("Order {}", order.order_id),
                &format_order_message(&order),
            ),
            phone: config.store_phone.clone(),
        })
    };

    Ok(OrderConfirmation { outcome, fallback })
}

/// Reads back the local order history. Informational only; a malformed
/// history reads as empty.
pub fn order_history<R>(repo: &R) -> ServiceResult<Vec<OrderRecord>>
where
    R: SlotReader,
{
    let raw = match repo.read_slot(ORDERS_SLOT_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Ok(Vec::new()),
        Err(e) => {
            log::error!("Failed to read order history: {e}");
            return Err(ServiceError::Internal);
        }
    };
    match serde_json::from_str(&raw) {
        Ok(records) => Ok(records),
        Err(e) => {
            log::warn!("Discarding malformed order history: {e}");
            Ok(Vec::new())
        }
    }
}

/// Appends one record to the history slot. The history is an audit trail,
/// so persistence errors are logged and swallowed.
fn append_order_record<R>(repo: &R, order: &OrderPayload, status: OrderStatus)
where
    R: SlotReader + SlotWriter,
{
    let mut records: Vec<OrderRecord> = match repo.read_slot(ORDERS_SLOT_KEY) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
        Ok(None) => Vec::new(),
        Err(e) => {
            log::error!("Failed to read order history: {e}");
            Vec::new()
        }
    };

    records.push(OrderRecord {
        id: order.order_id.clone(),
        date: order.created_at,
        status,
        payload: order.clone(),
    });

    match serde_json::to_string(&records) {
        Ok(payload) => {
            if let Err(e) = repo.write_slot(ORDERS_SLOT_KEY, &payload) {
                log::error!("Failed to persist order history: {e}");
            }
        }
        Err(e) => log::error!("Failed to serialize order history: {e}"),
    }
}

/// Formats the plain-text order message used for email delivery and the
/// mailto fallback.
pub fn format_order_message(order: &OrderPayload) -> String {
    let mut out = String::new();
    out.push_str(&format!("Order {}\n\n", order.order_id));
    out.push_str(&format!("Name: {}\n", order.contact.full_name));
    out.push_str(&format!("Phone: {}\n", order.contact.phone));
    out.push_str(&format!("Email: {}\n", order.contact.email));
    out.push_str(&format!("Address: {}\n", order.contact.address));
    out.push_str(&format!("Delivery: {}\n", order.contact.delivery_method));
    out.push_str(&format!("Payment: {}\n", order.contact.payment_method));
    if let Some(notes) = &order.contact.special_instructions {
        out.push_str(&format!("Instructions: {notes}\n"));
    }
    out.push_str("\nItems:\n");
    for line in &order.lines {
        let variant = line
            .variant
            .as_deref()
            .map(|v| format!(" ({v})"))
            .unwrap_or_default();
        out.push_str(&format!(
            "- {} x {}{} @ {} {}\n",
            line.quantity, line.name, variant, line.price, order.currency
        ));
    }
    out.push_str(&format!("\nTotal: {} {}\n", order.total, order.currency));
    out
}

/// Builds a `mailto:` compose link with encoded subject and body.
pub fn mailto_link(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{to}?subject={}&body={}",
        percent_encode(subject),
        percent_encode(body)
    )
}

// Minimal percent-encoder for mailto query values; everything outside the
// RFC 3986 unreserved set is escaped.
fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartStore;
    use crate::domain::item::Item;
    use crate::domain::types::{CategoryId, ItemId, Price};
    use crate::repository::memory::MemoryRepository;

    struct StubSubmitter {
        succeed: bool,
    }

    impl OrderSubmitter for StubSubmitter {
        fn submit(&self, order: &OrderPayload) -> SubmissionOutcome {
            if self.succeed {
                SubmissionOutcome::delivered(order.order_id.clone())
            } else {
                SubmissionOutcome::failed(order.order_id.clone(), "relay unreachable")
            }
        }
    }

    fn config() -> StoreConfig {
        serde_json::from_str(
            r#"{"store_email": "orders@example.com", "store_phone": "+250788000000"}"#,
        )
        .unwrap()
    }

    fn sample_item() -> Item {
        Item {
            id: ItemId::new(101).unwrap(),
            slug: "exercise-book".to_string(),
            category: CategoryId::new("school-supplies").unwrap(),
            subcategory: None,
            kind: Some("product".to_string()),
            name: "Exercise Book".to_string(),
            description: String::new(),
            long_description: None,
            price: Price::new(500.0).unwrap(),
            currency: "RWF".to_string(),
            unit: None,
            variants: Vec::new(),
            featured: false,
            popular: false,
            rating: None,
            reviews: None,
            delivery_time: None,
            related: Vec::new(),
        }
    }

    fn checkout_form() -> CheckoutForm {
        serde_json::from_str(
            r#"{"fullName": "Alice Uwase", "phone": "0788123456",
                "email": "alice@example.com", "address": "KG 11 Ave, Kigali"}"#,
        )
        .unwrap()
    }

    #[test]
    fn successful_checkout_clears_cart_and_records_order() {
        let repo = MemoryRepository::new();
        let cart = CartStore::new(repo.clone());
        cart.add(&sample_item(), 3, None);

        let confirmation =
            place_order(checkout_form(), &repo, &StubSubmitter { succeed: true }, &config())
                .unwrap();

        assert!(confirmation.outcome.success);
        assert!(confirmation.fallback.is_none());
        assert!(cart.cart().is_empty());

        let history = order_history(&repo).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].status, OrderStatus::Submitted);
        assert_eq!(history[0].payload.total, 1500.0);
        assert_eq!(history[0].payload.lines[0].id, 101);
    }

    #[test]
    fn failed_checkout_keeps_cart_and_surfaces_fallback() {
        let repo = MemoryRepository::new();
        let cart = CartStore::new(repo.clone());
        cart.add(&sample_item(), 2, None);

        let confirmation =
            place_order(checkout_form(), &repo, &StubSubmitter { succeed: false }, &config())
                .unwrap();

        assert!(!confirmation.outcome.success);
        let fallback = confirmation.fallback.expect("failure must carry fallback");
        assert!(fallback.mailto.starts_with("mailto:orders@example.com?"));
        assert!(fallback.mailto.contains("Exercise%20Book"));
        assert_eq!(fallback.phone.as_deref(), Some("+250788000000"));

        // cart survives so the user can retry manually
        assert_eq!(cart.cart().len(), 1);
        assert_eq!(order_history(&repo).unwrap()[0].status, OrderStatus::Failed);
    }

    #[test]
    fn checkout_over_empty_cart_is_rejected() {
        let repo = MemoryRepository::new();
        let err = place_order(
            checkout_form(),
            &repo,
            &StubSubmitter { succeed: true },
            &config(),
        )
        .unwrap_err();
        assert_eq!(err, ServiceError::EmptyCart);
    }

    #[test]
    fn mailto_submitter_always_degrades() {
        let repo = MemoryRepository::new();
        CartStore::new(repo.clone()).add(&sample_item(), 1, None);

        let submitter = MailtoSubmitter {
            to: "orders@example.com".to_string(),
        };
        let confirmation = place_order(checkout_form(), &repo, &submitter, &config()).unwrap();
        assert!(!confirmation.outcome.success);
        assert!(confirmation.fallback.is_some());
    }

    #[test]
    fn history_is_append_only_across_attempts() {
        let repo = MemoryRepository::new();
        let cart = CartStore::new(repo.clone());

        cart.add(&sample_item(), 1, None);
        place_order(checkout_form(), &repo, &StubSubmitter { succeed: false }, &config()).unwrap();
        place_order(checkout_form(), &repo, &StubSubmitter { succeed: true }, &config()).unwrap();

        let history = order_history(&repo).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].status, OrderStatus::Failed);
        assert_eq!(history[1].status, OrderStatus::Submitted);
    }

    #[test]
    fn mailto_link_encodes_reserved_characters() {
        let link = mailto_link("a@b.com", "Order #1", "two words & more");
        assert_eq!(
            link,
            "mailto:a@b.com?subject=Order%20%231&body=two%20words%20%26%20more"
        );
    }

    #[test]
    fn order_message_lists_lines_and_total() {
        let repo = MemoryRepository::new();
        let cart = CartStore::new(repo.clone());
        cart.add(&sample_item(), 3, None);

        let order = OrderPayload {
            order_id: "ORD-1".to_string(),
            contact: crate::forms::checkout::CheckoutPayload::try_from(checkout_form())
                .unwrap()
                .contact,
            lines: cart.cart().iter().map(OrderLine::from).collect(),
            total: cart.total(),
            currency: "RWF".to_string(),
            created_at: Utc::now().naive_utc(),
        };

        let message = format_order_message(&order);
        assert!(message.contains("Order ORD-1"));
        assert!(message.contains("- 3 x Exercise Book @ 500 RWF"));
        assert!(message.contains("Total: 1500 RWF"));
    }
}
