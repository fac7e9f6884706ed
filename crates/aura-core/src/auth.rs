//! # Mock Authentication
//!
//! The credential rules behind the session store. There is no password
//! storage and no real verification: one hard-coded admin pair, and any other
//! non-empty credentials produce a customer.
//!
//! ## Login Resolution
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  resolve_login(email, password)                                         │
//! │                                                                         │
//! │  email or password blank ────────────► Err(InvalidCredentials)          │
//! │                                                                         │
//! │  admin@aura.com / admin123 ──────────► User { id: "1",                  │
//! │                                               name: "Admin User",       │
//! │                                               role: Admin }             │
//! │                                                                         │
//! │  anything else ──────────────────────► User { id: "2",                  │
//! │                                               name: "Customer",         │
//! │                                               email, role: Customer }   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Timing (the simulated network delay) belongs to the storefront's session
//! state, not to these rules.

use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::types::{Role, User, UserUpdate};

/// Email of the built-in admin account.
pub const ADMIN_EMAIL: &str = "admin@aura.com";

/// Password of the built-in admin account.
pub const ADMIN_PASSWORD: &str = "admin123";

const ADMIN_USER_ID: &str = "1";
const ADMIN_USER_NAME: &str = "Admin User";
const CUSTOMER_USER_ID: &str = "2";
const CUSTOMER_USER_NAME: &str = "Customer";

/// Resolves login credentials to a user record.
///
/// ## Errors
/// [`CoreError::InvalidCredentials`] when either field is empty.
/// Whitespace counts as input.
pub fn resolve_login(email: &str, password: &str) -> CoreResult<User> {
    if email.is_empty() || password.is_empty() {
        return Err(CoreError::InvalidCredentials);
    }

    if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
        return Ok(User {
            role: Role::Admin,
            ..User::customer(ADMIN_USER_ID, ADMIN_USER_NAME, ADMIN_EMAIL)
        });
    }

    Ok(User::customer(CUSTOMER_USER_ID, CUSTOMER_USER_NAME, email))
}

/// Fabricates a freshly registered customer with a random id.
///
/// Registration never fails; the password is accepted and discarded.
pub fn register_customer(name: &str, email: &str) -> User {
    User::customer(Uuid::new_v4().to_string(), name, email)
}

/// Shallow-merges a profile update into a user.
///
/// Each `Some` field replaces the corresponding field wholesale, lists
/// included. The id is never touched.
pub fn apply_update(user: &mut User, update: UserUpdate) {
    let UserUpdate {
        name,
        email,
        role,
        phone,
        addresses,
        orders,
    } = update;

    if let Some(name) = name {
        user.name = name;
    }
    if let Some(email) = email {
        user.email = email;
    }
    if let Some(role) = role {
        user.role = role;
    }
    if let Some(phone) = phone {
        user.phone = phone;
    }
    if let Some(addresses) = addresses {
        user.addresses = addresses;
    }
    if let Some(orders) = orders {
        user.orders = orders;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
