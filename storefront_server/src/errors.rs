use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use printful_tools::PrintfulApiError;
use stripe_tools::StripeApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("Product ID required")]
    MissingProductId,
    #[error("No items in cart")]
    EmptyCart,
    #[error("Invalid order data. {0}")]
    InvalidOrderData(String),
    #[error("Payment not completed")]
    PaymentIncomplete,
    #[error("The payment session is unusable. {0}")]
    CorruptSession(String),
    #[error("The payment provider returned an error. {0}")]
    PaymentProviderError(String),
    #[error("The fulfillment provider returned an error. {0}")]
    FulfillmentProviderError(String),
    #[error("Payment succeeded but the order could not be submitted for fulfillment. {0}")]
    FulfillmentFailed(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("Invalid server configuration. {0}")]
    ConfigurationError(String),
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingProductId => StatusCode::BAD_REQUEST,
            Self::EmptyCart => StatusCode::BAD_REQUEST,
            Self::InvalidOrderData(_) => StatusCode::BAD_REQUEST,
            // The original wire contract reports all confirmation failures, including "payment not completed", as
            // 500s with a message, and clients depend on that shape.
            Self::PaymentIncomplete => StatusCode::INTERNAL_SERVER_ERROR,
            Self::CorruptSession(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::PaymentProviderError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::FulfillmentProviderError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::FulfillmentFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self.status_code() {
            StatusCode::BAD_REQUEST => "Bad Request",
            _ => "Internal Server Error",
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .body(serde_json::json!({ "error": error, "message": self.to_string() }).to_string())
    }
}

impl From<PrintfulApiError> for ServerError {
    fn from(e: PrintfulApiError) -> Self {
        Self::FulfillmentProviderError(e.to_string())
    }
}

impl From<StripeApiError> for ServerError {
    fn from(e: StripeApiError) -> Self {
        Self::PaymentProviderError(e.to_string())
    }
}
