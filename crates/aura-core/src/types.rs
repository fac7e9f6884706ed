//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      User       │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  price_cents    │   │  role           │   │  items          │       │
//! │  │  sizes, colors  │   │  addresses[]    │   │  status         │       │
//! │  │  flags          │   │  orders[]       │   │  payment        │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Variant      │   │      Role       │   │  OrderStatus    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  size           │   │  Admin          │   │  Pending ...    │       │
//! │  │  color          │   │  Customer       │   │  Cancelled      │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All types serialize in camelCase so the React frontend can consume them
//! directly; `ts-rs` exports matching TypeScript definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartLine;
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// Merchandising flags shown as badges on product cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductFlags {
    /// "New" badge; serialized as `new` to match the frontend.
    #[serde(rename = "new", default)]
    pub is_new: bool,

    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub bestseller: bool,
}

/// A product in the catalog.
///
/// ## Invariants (enforced by [`crate::catalog::Catalog::new`])
/// - `id` is unique across the catalog
/// - `sizes` and `colors` are non-empty
/// - `price_cents` >= 0
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,

    /// Display name.
    pub name: String,

    /// Price in cents.
    pub price_cents: i64,

    pub description: String,

    /// Category slug, e.g. `t-shirts` or `hoodies`.
    pub category: String,

    /// Main image reference.
    pub image: String,

    /// Gallery image references.
    pub images: Vec<String>,

    /// Available colors (hex codes).
    pub colors: Vec<String>,

    /// Available sizes.
    pub sizes: Vec<String>,

    /// Badge flags, flattened so the record carries `new`, `featured` and
    /// `bestseller` at the top level.
    #[serde(flatten)]
    pub flags: ProductFlags,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// The variant pre-selected on product cards and used when moving
    /// wishlist items into the cart: first size, first color.
    ///
    /// `None` only for a product that violates the non-empty options
    /// invariant (which a [`crate::catalog::Catalog`] never holds).
    pub fn default_variant(&self) -> Option<Variant> {
        let size = self.sizes.first()?;
        let color = self.colors.first()?;
        Some(Variant::new(size.clone(), color.clone()))
    }

    /// Whether the product offers the given size/color combination.
    pub fn offers(&self, variant: &Variant) -> bool {
        self.sizes.contains(&variant.size) && self.colors.contains(&variant.color)
    }
}

// =============================================================================
// Variant
// =============================================================================

/// The (size, color) pair selected for a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Variant {
    pub size: String,
    pub color: String,
}

impl Variant {
    pub fn new(size: impl Into<String>, color: impl Into<String>) -> Self {
        Variant {
            size: size.into(),
            color: color.into(),
        }
    }
}

// =============================================================================
// User
// =============================================================================

/// Role of the logged-in user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    #[default]
    Customer,
}

/// The session user record. This is the one record that gets persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl User {
    /// A fresh customer record with no phone, addresses or orders.
    pub fn customer(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        User {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: Role::Customer,
            phone: String::new(),
            addresses: Vec::new(),
            orders: Vec::new(),
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// The address flagged as default, if any.
    pub fn default_address(&self) -> Option<&Address> {
        self.addresses.iter().find(|a| a.is_default)
    }
}

/// Partial user record for profile updates.
///
/// Every `Some` field replaces the user's field wholesale (shallow merge);
/// `None` fields are left alone. The user id is not part of the update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub phone: Option<String>,
    pub addresses: Option<Vec<Address>>,
    pub orders: Option<Vec<Order>>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        *self == UserUpdate::default()
    }
}

// =============================================================================
// Address
// =============================================================================

/// A saved shipping/billing address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: String,
    /// Free-form label, e.g. "home" or "work".
    #[serde(rename = "type")]
    pub kind: String,
    pub is_default: bool,
    pub first_name: String,
    pub last_name: String,
    /// Street address line.
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

// =============================================================================
// Orders
// =============================================================================

/// Lifecycle status of a past order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// How an order was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    Paypal,
}

/// Payment details kept with an order. Card data is display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub method: PaymentMethod,
    #[serde(default)]
    pub card_holder: Option<String>,
    /// Masked, e.g. `**** **** **** 4242`.
    #[serde(default)]
    pub card_number: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
}

/// A past order attached to a user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub items: Vec<CartLine>,
    pub total: Money,
    pub status: OrderStatus,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    pub address: Address,
    pub payment: Payment,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn hoodie() -> Product {
        Product {
            id: "2".to_string(),
            name: "Minimalist Logo Hoodie".to_string(),
            price_cents: 7999,
            description: "Heavyweight cotton hoodie".to_string(),
            category: "hoodies".to_string(),
            image: "hoodie1.jpg".to_string(),
            images: vec!["hoodie1.jpg".to_string()],
            colors: vec!["#000000".to_string(), "#D3D3D3".to_string()],
            sizes: vec!["S".to_string(), "M".to_string()],
            flags: ProductFlags {
                featured: true,
                bestseller: true,
                ..ProductFlags::default()
            },
        }
    }

    #[test]
    fn test_default_variant_is_first_size_and_color() {
        let variant = hoodie().default_variant().unwrap();
        assert_eq!(variant, Variant::new("S", "#000000"));
    }

    #[test]
    fn test_default_variant_none_without_options() {
        let mut product = hoodie();
        product.sizes.clear();
        assert!(product.default_variant().is_none());
    }

    #[test]
    fn test_offers_variant() {
        let product = hoodie();
        assert!(product.offers(&Variant::new("M", "#D3D3D3")));
        assert!(!product.offers(&Variant::new("XXL", "#D3D3D3")));
    }

    #[test]
    fn test_product_json_uses_frontend_field_names() {
        let json = serde_json::to_value(hoodie()).unwrap();
        assert_eq!(json["priceCents"], 7999);
        assert_eq!(json["new"], false);
        assert_eq!(json["featured"], true);
        assert!(json.get("flags").is_none());
    }

    #[test]
    fn test_product_reads_flat_flags() {
        let mut json = serde_json::to_value(hoodie()).unwrap();
        json["new"] = serde_json::Value::Bool(true);
        let product: Product = serde_json::from_value(json).unwrap();
        assert!(product.flags.is_new);
        assert!(product.flags.featured);

        let mut json = serde_json::to_value(hoodie()).unwrap();
        let fields = json.as_object_mut().unwrap();
        fields.remove("new");
        fields.remove("featured");
        fields.remove("bestseller");
        let product: Product = serde_json::from_value(json).unwrap();
        assert_eq!(product.flags, ProductFlags::default());
    }

    #[test]
    fn test_user_round_trips_with_missing_optional_fields() {
        let json = r#"{"id":"2","name":"Customer","email":"a@b.c","role":"customer"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user, User::customer("2", "Customer", "a@b.c"));
        assert!(!user.is_admin());
    }

    #[test]
    fn test_user_update_is_empty() {
        assert!(UserUpdate::default().is_empty());
        let update = UserUpdate {
            phone: Some("555-0100".to_string()),
            ..UserUpdate::default()
        };
        assert!(!update.is_empty());
    }
}
