//! # User models
//!
//! Two projections of a portal account cross the wire:
//!
//! ## [`SessionUser`]
//!
//! Returned by `GET /auth/me`: the identity the session context holds and the
//! route guard inspects. `module` is only meaningful for `USER` accounts and an
//! unknown module key is read as "no module" so the guard falls back to the
//! default route instead of failing the whole identity fetch.
//!
//! ## [`AdminUser`]
//!
//! Rows of `GET /admin/users` (`{ "items": [...] }`) and the body of
//! `GET /admin/users/:id`, with camelCase fields (`isActive`). Created with a
//! [`NewUser`] and edited with a [`UserPatch`], whose `password` is omitted
//! from the JSON when the admin leaves the reset field empty.

use serde::{Deserialize, Deserializer, Serialize};

use crate::modules::ModuleKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

/// The authenticated identity of the current session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub nickname: String,
    pub role: Role,
    #[serde(default, deserialize_with = "lenient_module")]
    pub module: Option<ModuleKey>,
}

/// A user account as listed in the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub nickname: String,
    pub role: Role,
    #[serde(default, deserialize_with = "lenient_module")]
    pub module: Option<ModuleKey>,
    pub is_active: bool,
}

impl AdminUser {
    /// Module label for the listing, `Chat geral` when unset.
    pub fn module_label(&self) -> &'static str {
        self.module.unwrap_or(ModuleKey::Chat).label()
    }
}

/// Body of `POST /admin/users`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub nickname: String,
    pub password: String,
    pub module: ModuleKey,
}

/// Why a create-user form cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NewUserError {
    #[error("Nickname e senha são obrigatórios")]
    MissingCredentials,
}

impl NewUser {
    /// Validate the form fields. The nickname is trimmed; a nickname of only
    /// whitespace or an empty password is rejected.
    pub fn new(nickname: &str, password: &str, module: ModuleKey) -> Result<Self, NewUserError> {
        let nickname = nickname.trim();
        if nickname.is_empty() || password.is_empty() {
            return Err(NewUserError::MissingCredentials);
        }
        Ok(Self {
            nickname: nickname.to_string(),
            password: password.to_string(),
            module,
        })
    }
}

/// Body of `PATCH /admin/users/:id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub nickname: String,
    pub module: ModuleKey,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserPatch {
    /// An empty reset field means "keep the current password".
    pub fn new(nickname: String, module: ModuleKey, is_active: bool, password: &str) -> Self {
        Self {
            nickname,
            module,
            is_active,
            password: (!password.is_empty()).then(|| password.to_string()),
        }
    }
}

/// Ids arrive as strings or integers depending on the backend's key type.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(id) => Ok(id),
        serde_json::Value::Number(id) => Ok(id.to_string()),
        other => Err(serde::de::Error::custom(format!("invalid id: {other}"))),
    }
}

fn lenient_module<'de, D>(deserializer: D) -> Result<Option<ModuleKey>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|key| key.parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_user_from_me_payload() {
        let user: SessionUser = serde_json::from_str(
            r#"{"id":"u1","nickname":"ana","role":"USER","module":"FINANCEIRO"}"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::User);
        assert_eq!(user.module, Some(ModuleKey::Financeiro));
    }

    #[test]
    fn test_unknown_or_missing_module_is_none() {
        let unknown: SessionUser = serde_json::from_str(
            r#"{"id":"u1","nickname":"ana","role":"USER","module":"BOARD"}"#,
        )
        .unwrap();
        assert_eq!(unknown.module, None);

        let admin: SessionUser =
            serde_json::from_str(r#"{"id":"a","nickname":"root","role":"ADMIN"}"#).unwrap();
        assert_eq!(admin.module, None);
        assert_eq!(admin.role, Role::Admin);
    }

    #[test]
    fn test_admin_user_camel_case() {
        let user: AdminUser = serde_json::from_str(
            r#"{"id":"u2","nickname":"bia","role":"USER","module":"DASHBOARD","isActive":false}"#,
        )
        .unwrap();
        assert!(!user.is_active);
        assert_eq!(user.module_label(), "Campo RPG");
    }

    #[test]
    fn test_numeric_ids_are_read_as_strings() {
        let user: AdminUser = serde_json::from_str(
            r#"{"id":42,"nickname":"bia","role":"USER","module":null,"isActive":true}"#,
        )
        .unwrap();
        assert_eq!(user.id, "42");
        assert_eq!(user.module_label(), "Chat geral");

        assert!(serde_json::from_str::<SessionUser>(
            r#"{"id":true,"nickname":"x","role":"USER"}"#
        )
        .is_err());
    }

    #[test]
    fn test_new_user_requires_credentials() {
        assert_eq!(
            NewUser::new("", "s3cret", ModuleKey::Chat),
            Err(NewUserError::MissingCredentials)
        );
        assert_eq!(
            NewUser::new("   ", "s3cret", ModuleKey::Chat),
            Err(NewUserError::MissingCredentials)
        );
        assert_eq!(
            NewUser::new("bia", "", ModuleKey::Chat),
            Err(NewUserError::MissingCredentials)
        );
        assert_eq!(
            NewUserError::MissingCredentials.to_string(),
            "Nickname e senha são obrigatórios"
        );
    }

    #[test]
    fn test_new_user_trims_nickname() {
        let user = NewUser::new("  bia ", " s3cret", ModuleKey::Pdv).unwrap();
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            serde_json::json!({"nickname":"bia","password":" s3cret","module":"PDV"})
        );
    }

    #[test]
    fn test_patch_omits_empty_password() {
        let patch = UserPatch::new("bia".to_string(), ModuleKey::Pdv, true, "");
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"nickname":"bia","module":"PDV","isActive":true})
        );

        let patch = UserPatch::new("bia".to_string(), ModuleKey::Pdv, true, "s3cret");
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json["password"], "s3cret");
    }
}
