// --- File: crates/storefront_catalog/src/logic.rs ---
use serde::Serialize;
use storefront_config::Product;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// A product as shown to the browser, with its price already formatted.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ProductView {
    #[cfg_attr(feature = "openapi", schema(example = "1"))]
    pub id: String,
    #[cfg_attr(feature = "openapi", schema(example = "Classic T-Shirt"))]
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(example = 1999))]
    pub price_cents: i64,
    #[cfg_attr(feature = "openapi", schema(example = "/images/tshirt.png"))]
    pub image: String,
    #[cfg_attr(feature = "openapi", schema(example = "$19.99"))]
    pub display_price: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price_cents: product.price_cents,
            image: product.image.clone(),
            display_price: format_price(product.price_cents),
        }
    }
}

/// Formats an amount in cents as dollars, e.g. `1999` -> `$19.99`.
pub fn format_price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, abs / 100, abs % 100)
}

/// All products in catalog order.
pub fn list_products(products: &[Product]) -> Vec<ProductView> {
    products.iter().map(ProductView::from).collect()
}

/// Looks a product up by its id.
pub fn find_product<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|p| p.id == id)
}
