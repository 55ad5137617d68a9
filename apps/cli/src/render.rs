//! Plain-text rendering of carts, products and orders.

use std::fmt::Write;

use storefront_cart::OrderConfirmation;
use storefront_catalog::{CatalogProduct, Category};
use storefront_core::{Cart, CartLineItem};

const TITLE_WIDTH: usize = 32;

/// Cart with one row per line and the summary block.
pub fn cart(cart: &Cart) -> String {
    let mut out = String::new();

    if cart.is_empty() {
        let _ = writeln!(out, "Cart #{} is empty.", cart.id());
        return out;
    }

    let _ = writeln!(
        out,
        "Cart #{} ({} products, {} items)",
        cart.id(),
        cart.total_products(),
        cart.total_quantity()
    );
    for line in cart.products() {
        out.push_str(&cart_line(line));
        out.push('\n');
    }

    let totals = cart.totals();
    let _ = writeln!(out, "{:>48} {:>10}", "Subtotal:", totals.total.to_string());
    if !totals.savings().is_zero() {
        let _ = writeln!(out, "{:>48} {:>10}", "Savings:", format!("-{}", totals.savings()));
    }
    let _ = writeln!(out, "{:>48} {:>10}", "Total:", totals.discounted_total.to_string());
    out
}

fn cart_line(line: &CartLineItem) -> String {
    let mut row = format!(
        "  {:>5}  {:<width$} {:>4} x {:>9} {:>10}",
        line.id().to_string(),
        truncate(line.title(), TITLE_WIDTH),
        line.quantity(),
        line.price().to_string(),
        line.discounted_total().to_string(),
        width = TITLE_WIDTH,
    );
    if !line.discount_percentage().is_zero() {
        let _ = write!(row, "  (-{})", line.discount_percentage());
    }
    row
}

/// One row per product, with an optional "showing n of total" footer.
pub fn product_list(products: &[&CatalogProduct], total: Option<u64>) -> String {
    let mut out = String::new();

    if products.is_empty() {
        out.push_str("No products found.\n");
        return out;
    }

    for product in products {
        let _ = writeln!(
            out,
            "  {:>5}  {:<width$} {:>9}  {}",
            product.id.to_string(),
            truncate(&product.title, TITLE_WIDTH),
            product.price.to_string(),
            product.category,
            width = TITLE_WIDTH,
        );
    }

    if let Some(total) = total {
        let _ = writeln!(out, "Showing {} of {} products", products.len(), total);
    }
    out
}

/// A filtered category listing: heading, the brands on offer, then the rows.
pub fn category(
    slug: &str,
    brands: &[String],
    listed: &[&CatalogProduct],
    fetched: usize,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", category_title(slug));
    if brands.is_empty() {
        let _ = writeln!(out, "Brands: -");
    } else {
        let _ = writeln!(out, "Brands: {}", brands.join(", "));
    }

    if listed.is_empty() {
        out.push_str("No products found matching your criteria.
");
        return out;
    }
    out.push_str(&product_list(listed, Some(fetched as u64)));
    out
}

/// `home-decoration` → `Home Decoration`.
fn category_title(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Product detail view.
pub fn product(product: &CatalogProduct) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "#{} {}", product.id, product.title);
    if let Some(brand) = &product.brand {
        let _ = writeln!(out, "Brand:    {brand}");
    }
    let _ = writeln!(out, "Category: {}", product.category);
    if product.discount_percentage.is_zero() {
        let _ = writeln!(out, "Price:    {}", product.price);
    } else {
        let _ = writeln!(
            out,
            "Price:    {} (was {}, -{})",
            product.discounted_price(),
            product.price,
            product.discount_percentage
        );
    }
    let _ = writeln!(out, "Rating:   {:.1}", product.rating);
    let _ = writeln!(out, "Stock:    {}", product.stock);
    if !product.tags.is_empty() {
        let _ = writeln!(out, "Tags:     {}", product.tags.join(", "));
    }
    if !product.description.is_empty() {
        let _ = writeln!(out, "\n{}", product.description);
    }
    out
}

/// Category list, slug first.
pub fn categories(categories: &[Category]) -> String {
    let mut out = String::new();

    if categories.is_empty() {
        out.push_str("No categories found.\n");
        return out;
    }

    for category in categories {
        if category.name == category.slug {
            let _ = writeln!(out, "  {}", category.slug);
        } else {
            let _ = writeln!(out, "  {:<24} {}", category.slug, category.name);
        }
    }
    out
}

/// Order confirmation.
pub fn confirmation(order: &OrderConfirmation) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Thank you for your order!");
    let _ = writeln!(out, "Order Number:       #{}", order.order_number);
    let _ = writeln!(
        out,
        "Estimated Delivery: {}",
        order.estimated_delivery.format("%A, %B %-d, %Y")
    );
    let _ = writeln!(
        out,
        "Items:              {}",
        order.cart.total_quantity()
    );
    let _ = writeln!(out, "Total Paid:         {}", order.cart.discounted_total());
    out
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use storefront_core::{DiscountPercentage, Money, ProductDetails, ProductId};

    fn shirt_cart() -> Cart {
        let mut cart = Cart::empty();
        cart.insert_line(
            ProductId::new(42),
            &ProductDetails {
                title: "Shirt".to_string(),
                thumbnail: String::new(),
                price: Money::new(1999, 2),
                discount_percentage: DiscountPercentage::new(10, 0),
            },
            2,
        )
        .unwrap();
        cart
    }

    #[test]
    fn test_empty_cart() {
        assert_eq!(cart(&Cart::empty()), "Cart #1 is empty.\n");
    }

    #[test]
    fn test_cart_summary() {
        let text = cart(&shirt_cart());

        assert!(text.starts_with("Cart #1 (1 products, 2 items)\n"));
        assert!(text.contains("Shirt"));
        assert!(text.contains("(-10%)"));
        assert!(text.contains("$39.98"));
        assert!(text.contains("-$4.00"));
        assert!(text.contains("$35.98"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn test_categories() {
        let text = categories(&[
            Category {
                slug: "beauty".to_string(),
                name: "beauty".to_string(),
                url: None,
            },
            Category {
                slug: "home-decoration".to_string(),
                name: "Home Decoration".to_string(),
                url: None,
            },
        ]);
        assert!(text.contains("  beauty\n"));
        assert!(text.contains("Home Decoration"));
        assert_eq!(categories(&[]), "No categories found.\n");
    }

    fn listed_product(id: u64, title: &str, brand: Option<&str>) -> CatalogProduct {
        CatalogProduct {
            id: ProductId::new(id),
            title: title.to_string(),
            description: String::new(),
            category: "home-decoration".to_string(),
            price: Money::new(1499, 2),
            discount_percentage: DiscountPercentage::zero(),
            rating: 4.0,
            stock: 3,
            tags: Vec::new(),
            brand: brand.map(str::to_string),
            thumbnail: String::new(),
            images: Vec::new(),
        }
    }

    #[test]
    fn test_category_title() {
        assert_eq!(category_title("home-decoration"), "Home Decoration");
        assert_eq!(category_title("beauty"), "Beauty");
    }

    #[test]
    fn test_category_listing() {
        let lamp = listed_product(7, "Table Lamp", Some("Lumen"));
        let vase = listed_product(8, "Vase", None);

        let text = category(
            "home-decoration",
            &["Lumen".to_string()],
            &[&lamp],
            2,
        );
        assert!(text.starts_with("Home Decoration\nBrands: Lumen\n"));
        assert!(text.contains("Table Lamp"));
        assert!(text.ends_with("Showing 1 of 2 products\n"));

        let text = category("home-decoration", &[], &[], 1);
        assert!(text.contains("Brands: -\n"));
        assert!(text.contains("No products found matching your criteria."));
        assert!(!text.contains(&vase.title));
    }

    #[test]
    fn test_confirmation() {
        let placed = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let order = OrderConfirmation {
            order_number: "EC123456007".to_string(),
            placed_at: placed,
            estimated_delivery: Utc.with_ymd_and_hms(2024, 3, 6, 12, 0, 0).unwrap(),
            cart: shirt_cart(),
        };

        let text = confirmation(&order);
        assert!(text.contains("#EC123456007"));
        assert!(text.contains("Wednesday, March 6, 2024"));
        assert!(text.contains("$35.98"));
    }
}
