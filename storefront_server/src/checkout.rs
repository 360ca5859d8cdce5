//! The checkout pipeline: converting a cart snapshot into a hosted-payment session, and converting a confirmed
//! session back into a fulfillment order.
//!
//! The proxy is stateless, so the entire order snapshot rides through the payment session's opaque metadata under
//! [`ORDER_METADATA_KEY`] and is decoded byte-for-byte after confirmation. The recipient on the fulfillment order is
//! always the shipping and contact data the payment provider captured during the hosted flow — client-supplied
//! address data is never trusted on this path.

use cart_engine::OrderSnapshot;
use printful_tools::{NewOrder, OrderItem, Recipient, RetailCosts};
use stripe_tools::{CheckoutSession, NewSessionParams, SessionLineItem};

use crate::errors::ServerError;

/// The metadata key the serialized order snapshot is stored under on the payment session.
pub const ORDER_METADATA_KEY: &str = "order_data";

/// Builds the session-creation parameters for a cart snapshot: one provider line item per cart line (size folded
/// into the description, unit price already in minor currency units) and the snapshot itself as opaque metadata.
pub fn session_params(snapshot: &OrderSnapshot) -> Result<NewSessionParams, ServerError> {
    if snapshot.items.is_empty() {
        return Err(ServerError::EmptyCart);
    }
    let line_items = snapshot
        .items
        .iter()
        .map(|line| SessionLineItem {
            name: line.name.clone(),
            description: format!("Size: {}", line.size),
            unit_amount: line.price,
            quantity: line.quantity,
            image: (!line.image.is_empty()).then(|| line.image.clone()),
        })
        .collect();
    let order_data = serde_json::to_string(snapshot)
        .map_err(|e| ServerError::InvalidOrderData(format!("Could not serialize order snapshot. {e}")))?;
    Ok(NewSessionParams { line_items, metadata: vec![(ORDER_METADATA_KEY.to_string(), order_data)] })
}

/// Recovers the order snapshot stored on the session at creation time.
pub fn decode_snapshot(session: &CheckoutSession) -> Result<OrderSnapshot, ServerError> {
    let raw = session
        .metadata
        .get(ORDER_METADATA_KEY)
        .ok_or_else(|| ServerError::CorruptSession(format!("Session {} has no order metadata.", session.id)))?;
    serde_json::from_str(raw)
        .map_err(|e| ServerError::CorruptSession(format!("Order metadata on session {} is corrupt. {e}", session.id)))
}

/// Builds the fulfillment order for a paid session: recipient from the provider-captured shipping/contact details,
/// items from the decoded snapshot, shipping and tax passed through as zero.
pub fn fulfillment_order(session: &CheckoutSession, snapshot: &OrderSnapshot) -> Result<NewOrder, ServerError> {
    let shipping = session
        .shipping_details
        .as_ref()
        .ok_or_else(|| ServerError::CorruptSession(format!("Session {} captured no shipping details.", session.id)))?;
    let customer = session.customer_details.clone().unwrap_or_default();
    let recipient = Recipient {
        name: shipping.name.clone(),
        company: String::new(),
        address1: shipping.address.line1.clone(),
        address2: shipping.address.line2.clone().unwrap_or_default(),
        city: shipping.address.city.clone(),
        state_code: shipping.address.state.clone(),
        country_code: shipping.address.country.clone(),
        zip: shipping.address.postal_code.clone(),
        phone: customer.phone.unwrap_or_default(),
        email: customer.email.unwrap_or_default(),
    };
    let items = snapshot
        .items
        .iter()
        .map(|line| {
            let variant_id = line.variant_id.parse::<u64>().map_err(|e| {
                ServerError::InvalidOrderData(format!("Variant id '{}' is not a fulfillment id. {e}", line.variant_id))
            })?;
            Ok(OrderItem { variant_id, quantity: line.quantity, retail_price: line.price.to_decimal_string() })
        })
        .collect::<Result<Vec<_>, ServerError>>()?;
    Ok(NewOrder { recipient, items, retail_costs: RetailCosts::default() })
}
