use thiserror::Error;

/// User-facing validation failures raised at the add-to-cart call sites. These abort the operation with no state
/// change; they are messages to surface, not faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("Sorry, this item is currently out of stock.")]
    OutOfStock,
    #[error("Please select a size.")]
    SelectionRequired,
    #[error("Sorry, not enough stock available. Requested {requested}, but only {available} left.")]
    InsufficientStock { requested: u32, available: u32 },
}

#[derive(Debug, Error)]
pub enum CartStoreError {
    #[error("Could not persist the cart. {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not serialize the cart. {0}")]
    Serialization(String),
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Could not initialize the checkout gateway. {0}")]
    Initialization(String),
    #[error("Could not reach the checkout service. {0}")]
    Network(String),
    #[error("Checkout was rejected ({status}). {message}")]
    Rejected { status: u16, message: String },
    #[error("Unexpected response from the checkout service. {0}")]
    InvalidResponse(String),
}
