use crate::{errors::CartError, Product, Variant};

//----------------------------------------   Stock validation policy   ------------------------------------------------
// Stock is validated here, at the call sites, and never inside the cart mutations themselves. Both functions leave
// all state untouched on failure; the returned CartError is the user-facing message.

/// The quick-add path: picks the first variant with non-zero stock, or rejects the action entirely.
pub fn pick_first_available(product: &Product) -> Result<&Variant, CartError> {
    product.variants.iter().find(|v| v.stock > 0).ok_or(CartError::OutOfStock)
}

/// The guided (size-selection) path: requires an explicit size and enough stock on the selected variant for the
/// requested quantity.
pub fn pick_variant<'a>(product: &'a Product, size: Option<&str>, quantity: u32) -> Result<&'a Variant, CartError> {
    let size = size.ok_or(CartError::SelectionRequired)?;
    let variant = product.variants.iter().find(|v| v.size == size).ok_or(CartError::SelectionRequired)?;
    if variant.stock < quantity {
        return Err(CartError::InsufficientStock { requested: quantity, available: variant.stock });
    }
    Ok(variant)
}
