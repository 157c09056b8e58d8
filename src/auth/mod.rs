//! Caller identity and role checks.
//!
//! The settlement engine does not own authentication; it receives a resolved
//! caller identity from the outer tier and only enforces role gates on the
//! orchestrator operations.

use serde::{Deserialize, Serialize};

use crate::contracts::contracts_errors::ContractError;
use crate::errors::Result;

/// Role of the caller, resolved by the outer tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
            Role::Viewer => "viewer",
        }
    }

    /// Admins and editors may create, update and activate contracts.
    pub fn can_edit(&self) -> bool {
        matches!(self, Role::Admin | Role::Editor)
    }

    /// Only admins may delete contracts and unwind their financial footprint.
    pub fn can_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Resolved caller identity passed into every orchestrator operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthContext {
    pub user_id: String,
    pub role: Role,
}

impl AuthContext {
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }

    pub fn require_editor(&self) -> Result<()> {
        if self.role.can_edit() {
            Ok(())
        } else {
            Err(ContractError::Unauthorized(format!(
                "Role '{}' may not modify contracts",
                self.role.as_str()
            ))
            .into())
        }
    }

    pub fn require_admin(&self) -> Result<()> {
        if self.role.can_admin() {
            Ok(())
        } else {
            Err(ContractError::Unauthorized(format!(
                "Role '{}' may not delete contracts",
                self.role.as_str()
            ))
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_can_edit_but_not_admin() {
        let ctx = AuthContext::new("u1", Role::Editor);
        assert!(ctx.require_editor().is_ok());
        assert!(ctx.require_admin().is_err());
    }

    #[test]
    fn viewer_is_rejected_everywhere() {
        let ctx = AuthContext::new("u2", Role::Viewer);
        assert!(ctx.require_editor().is_err());
        assert!(ctx.require_admin().is_err());
    }

    #[test]
    fn admin_passes_both_gates() {
        let ctx = AuthContext::new("u3", Role::Admin);
        assert!(ctx.require_editor().is_ok());
        assert!(ctx.require_admin().is_ok());
    }
}
