use serde::{Deserialize, Serialize};

use crate::shared::form::{non_blank, require, FormModel};
use crate::shared::{EntityId, Record, Resource};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::User, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Admin => "Admin",
        }
    }

    /// Unknown roles are treated as plain users.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "admin" => Role::Admin,
            _ => Role::User,
        }
    }

    pub fn is_superuser(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub is_superuser: bool,
}

impl User {
    pub fn role(&self) -> Role {
        match self.role.as_deref() {
            Some(role) => Role::parse(role),
            None if self.is_superuser => Role::Admin,
            None => Role::User,
        }
    }
}

impl Record for User {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// Create/update body. On update `username` is only sent when it changed and
/// `password` only when a new one was typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: Role,
    pub is_superuser: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub username: String,
    /// Write-only; always blank when the form opens.
    pub password: String,
    pub role: Role,
}

impl FormModel for UserForm {
    type Record = User;
    type Draft = UserDto;

    fn from_record(record: &User) -> Self {
        Self {
            username: record.username.clone(),
            password: String::new(),
            role: record.role(),
        }
    }

    fn to_draft(&self, editing: Option<&User>) -> Result<UserDto, String> {
        require(&self.username, "Username is required")?;
        if editing.is_none() {
            require(&self.password, "Password is required")?;
        }

        let username = self.username.trim().to_string();
        let username = match editing {
            Some(user) if user.username == username => None,
            _ => Some(username),
        };
        // Blank or whitespace-only means "no password" in both modes.
        let password = non_blank(&self.password).map(|_| self.password.clone());

        Ok(UserDto {
            username,
            password,
            role: self.role,
            is_superuser: self.role.is_superuser(),
        })
    }
}

pub struct UserResource;

impl Resource for UserResource {
    const PATH: &'static str = "user";
    type Record = User;
    type Draft = UserDto;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn admin() -> User {
        User {
            id: 2,
            username: "boss".into(),
            role: Some("admin".into()),
            is_superuser: true,
        }
    }

    #[test]
    fn test_role_is_derived_from_wire() {
        let plain: User = serde_json::from_value(json!({"id": 1, "username": "u"})).unwrap();
        let flagged: User =
            serde_json::from_value(json!({"id": 1, "username": "u", "is_superuser": true})).unwrap();
        assert_eq!(plain.role(), Role::User);
        assert_eq!(flagged.role(), Role::Admin);
        assert_eq!(admin().role(), Role::Admin);
    }

    #[test]
    fn test_edit_form_never_shows_password() {
        let form = UserForm::from_record(&admin());
        assert_eq!(form.username, "boss");
        assert_eq!(form.password, "");
        assert_eq!(form.role, Role::Admin);
    }

    #[test]
    fn test_create_requires_password() {
        let form = UserForm {
            username: "new".into(),
            ..Default::default()
        };
        assert_eq!(form.to_draft(None).unwrap_err(), "Password is required");
    }

    #[test]
    fn test_create_payload() {
        let form = UserForm {
            username: "new".into(),
            password: "secret".into(),
            role: Role::Admin,
        };
        let body = serde_json::to_value(form.to_draft(None).unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"username": "new", "password": "secret", "role": "admin", "is_superuser": true})
        );
    }

    #[test]
    fn test_update_payload_skips_unchanged_fields() {
        let user = admin();
        let mut form = UserForm::from_record(&user);
        form.role = Role::User;

        let body = serde_json::to_value(form.to_draft(Some(&user)).unwrap()).unwrap();
        assert_eq!(body, json!({"role": "user", "is_superuser": false}));
    }

    #[test]
    fn test_update_payload_with_rename_and_password() {
        let user = admin();
        let form = UserForm {
            username: "chief".into(),
            password: "n3w".into(),
            role: Role::Admin,
        };
        let draft = form.to_draft(Some(&user)).unwrap();
        assert_eq!(draft.username.as_deref(), Some("chief"));
        assert_eq!(draft.password.as_deref(), Some("n3w"));
    }

    #[test]
    fn test_username_is_required() {
        let form = UserForm {
            password: "x".into(),
            ..Default::default()
        };
        assert_eq!(form.to_draft(None).unwrap_err(), "Username is required");
    }

    #[test]
    fn test_whitespace_password_is_blank_in_both_modes() {
        let form = UserForm {
            username: "new".into(),
            password: "   ".into(),
            role: Role::User,
        };
        assert_eq!(form.to_draft(None).unwrap_err(), "Password is required");

        let user = admin();
        let draft = form.to_draft(Some(&user)).unwrap();
        assert_eq!(draft.password, None);
    }

    #[test]
    fn test_password_is_sent_verbatim() {
        let user = admin();
        let form = UserForm {
            username: "boss".into(),
            password: " pa ss ".into(),
            role: Role::Admin,
        };
        assert_eq!(
            form.to_draft(Some(&user)).unwrap().password.as_deref(),
            Some(" pa ss ")
        );
    }
}
