mod secret;
mod usd;

pub use secret::Secret;
pub use usd::{UsdAmount, UsdConversionError, USD_CURRENCY_CODE, USD_CURRENCY_CODE_LOWER};
