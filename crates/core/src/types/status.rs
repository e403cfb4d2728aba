//! Status and role enums.

use serde::{Deserialize, Serialize};

/// Account role, deciding which profile screens a user can reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Places orders.
    #[default]
    Customer,
    /// Manages incoming orders for the store.
    Admin,
    /// Full access including admin account management.
    #[serde(alias = "superadmin")]
    SuperAdmin,
}

impl Role {
    /// Whether this role may accept, reject and advance orders.
    #[must_use]
    pub const fn can_manage_orders(self) -> bool {
        matches!(self, Self::Admin | Self::SuperAdmin)
    }

    /// Whether this role may create or remove admin accounts.
    #[must_use]
    pub const fn can_manage_admins(self) -> bool {
        matches!(self, Self::SuperAdmin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "customer"),
            Self::Admin => write!(f, "admin"),
            Self::SuperAdmin => write!(f, "super_admin"),
        }
    }
}

/// Error parsing a [`Role`] from a string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid role: {0}")]
pub struct RoleParseError(pub String);

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "admin" => Ok(Self::Admin),
            "super_admin" | "superadmin" => Ok(Self::SuperAdmin),
            _ => Err(RoleParseError(s.to_string())),
        }
    }
}

/// Lifecycle of a placed order as tracked on the device.
///
/// ```text
/// Pending -> Accepted -> Preparing -> Delivered
///    \
///     `-> Rejected
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Accepted,
    Preparing,
    Delivered,
    Rejected,
}

impl OrderStatus {
    /// Whether moving from `self` to `next` is a valid step.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Accepted | Self::Rejected)
                | (Self::Accepted, Self::Preparing)
                | (Self::Preparing, Self::Delivered)
        )
    }

    /// Delivered and rejected orders never change again.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Rejected)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Preparing => "preparing",
            Self::Delivered => "delivered",
            Self::Rejected => "rejected",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // =========================================================================
    // Role
    // =========================================================================

    #[test]
    fn test_role_permissions() {
        assert!(!Role::Customer.can_manage_orders());
        assert!(Role::Admin.can_manage_orders());
        assert!(Role::SuperAdmin.can_manage_orders());

        assert!(!Role::Admin.can_manage_admins());
        assert!(Role::SuperAdmin.can_manage_admins());
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("customer".parse::<Role>().unwrap(), Role::Customer);
        assert_eq!("superadmin".parse::<Role>().unwrap(), Role::SuperAdmin);
        assert_eq!("super_admin".parse::<Role>().unwrap(), Role::SuperAdmin);
        assert!("owner".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serde() {
        assert_eq!(
            serde_json::to_string(&Role::SuperAdmin).unwrap(),
            "\"super_admin\""
        );
        let role: Role = serde_json::from_str("\"superadmin\"").unwrap();
        assert_eq!(role, Role::SuperAdmin);
    }

    // =========================================================================
    // OrderStatus
    // =========================================================================

    #[test]
    fn test_valid_transitions() {
        let valid = [
            (OrderStatus::Pending, OrderStatus::Accepted),
            (OrderStatus::Pending, OrderStatus::Rejected),
            (OrderStatus::Accepted, OrderStatus::Preparing),
            (OrderStatus::Preparing, OrderStatus::Delivered),
        ];
        for (from, to) in valid {
            assert!(from.can_transition_to(to), "{from} -> {to}");
        }
    }

    #[test]
    fn test_invalid_transitions() {
        let invalid = [
            (OrderStatus::Pending, OrderStatus::Delivered),
            (OrderStatus::Accepted, OrderStatus::Rejected),
            (OrderStatus::Delivered, OrderStatus::Pending),
            (OrderStatus::Rejected, OrderStatus::Accepted),
            (OrderStatus::Preparing, OrderStatus::Preparing),
        ];
        for (from, to) in invalid {
            assert!(!from.can_transition_to(to), "{from} -> {to}");
        }
    }

    #[test]
    fn test_terminal() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Rejected.is_terminal());
        assert!(!OrderStatus::Preparing.is_terminal());
    }
}
