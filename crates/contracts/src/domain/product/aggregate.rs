use serde::{Deserialize, Serialize};

// ============================================================================
// Entity
// ============================================================================

/// Catalog product as the backend stores it.
///
/// The identifier is assigned by the backend on create and never changes
/// afterwards. All five business fields are mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    /// Image URL
    pub image: String,
}

// ============================================================================
// Draft
// ============================================================================

/// Client-held editable copy of the product fields.
///
/// Carries no identifier: ids come from the backend on create and travel in
/// the URL on update. Serialized as the POST/PUT request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl From<Product> for ProductDraft {
    fn from(product: Product) -> Self {
        Self {
            title: product.title,
            price: product.price,
            description: product.description,
            category: product.category,
            image: product.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_wire_shape() {
        let product: Product = serde_json::from_str(
            r#"{
                "id": 101,
                "title": "Backpack",
                "price": 109.95,
                "description": "Fits 15 inch laptops",
                "category": "men's clothing",
                "image": "https://example.com/backpack.jpg"
            }"#,
        )
        .unwrap();

        assert_eq!(product.id, 101);
        assert_eq!(product.title, "Backpack");
        assert_eq!(product.price, 109.95);
    }

    #[test]
    fn test_draft_body_has_no_id() {
        let draft = ProductDraft {
            title: "Backpack".to_string(),
            price: 109.95,
            description: "Fits 15 inch laptops".to_string(),
            category: "men's clothing".to_string(),
            image: "https://example.com/backpack.jpg".to_string(),
        };

        let body = serde_json::to_value(&draft).unwrap();
        let body = body.as_object().unwrap();
        assert_eq!(body.len(), 5);
        for key in ["title", "price", "description", "category", "image"] {
            assert!(body.contains_key(key), "missing field {key}");
        }
        assert!(!body.contains_key("id"));
    }

    #[test]
    fn test_draft_from_product_keeps_fields() {
        let product = Product {
            id: 7,
            title: "Ring".to_string(),
            price: 19.5,
            description: "Gold plated".to_string(),
            category: "jewelery".to_string(),
            image: "https://example.com/ring.jpg".to_string(),
        };

        let draft = ProductDraft::from(product.clone());
        assert_eq!(draft.title, product.title);
        assert_eq!(draft.price, product.price);
        assert_eq!(draft.image, product.image);
    }

    #[test]
    fn test_default_draft_is_empty() {
        let draft = ProductDraft::default();
        assert!(draft.title.is_empty());
        assert_eq!(draft.price, 0.0);
    }
}
