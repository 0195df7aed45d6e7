//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use blacklight_core::error::AppError;
use blacklight_entity::user::UserRole;

/// Who is acting on the current request.
///
/// Built from the access token by the API layer and passed into every
/// service method that depends on the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    pub user_id: Uuid,
    pub role: UserRole,
    pub email: String,
    pub name: String,
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    pub fn new(user_id: Uuid, role: UserRole, email: String, name: String) -> Self {
        Self {
            user_id,
            role,
            email,
            name,
            request_time: Utc::now(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Customers are confined to their own records; admins see everything.
    pub fn owner_filter(&self) -> Option<Uuid> {
        if self.is_admin() {
            None
        } else {
            Some(self.user_id)
        }
    }

    /// Fail with `Forbidden` unless the caller is an admin or owns the record.
    pub fn ensure_can_access(&self, owner_id: Uuid, what: &str) -> Result<(), AppError> {
        if self.is_admin() || self.user_id == owner_id {
            Ok(())
        } else {
            Err(AppError::forbidden(format!(
                "You do not have access to this {what}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership_rules() {
        let owner = Uuid::new_v4();
        let customer = RequestContext::new(owner, UserRole::Customer, "c@x.io".into(), "C".into());
        let other = RequestContext::new(Uuid::new_v4(), UserRole::Customer, "o@x.io".into(), "O".into());
        let admin = RequestContext::new(Uuid::new_v4(), UserRole::Admin, "a@x.io".into(), "A".into());

        assert!(customer.ensure_can_access(owner, "order").is_ok());
        assert!(admin.ensure_can_access(owner, "order").is_ok());
        assert!(other.ensure_can_access(owner, "order").is_err());
        assert_eq!(customer.owner_filter(), Some(owner));
        assert_eq!(admin.owner_filter(), None);
    }
}
