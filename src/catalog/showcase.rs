use crate::models::Product;

/// Products flagged for the promotional carousel, in input order.
///
/// Falls back to the whole list when nothing is flagged so the carousel rail
/// never renders empty while products exist.
pub fn showcase_products(products: &[Product]) -> Vec<Product> {
    let flagged: Vec<Product> = products.iter().filter(|p| p.is_showcase).cloned().collect();
    if flagged.is_empty() {
        products.to_vec()
    } else {
        flagged
    }
}
