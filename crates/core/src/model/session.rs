use serde::{Deserialize, Serialize};

/// The signed-in user's profile as the backend reports it.
///
/// Field renames match the backend's wire names so the same shape serves
/// both the `/auth/me` response and the locally persisted session blob.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "nomeCompleto")]
    pub full_name: String,
    pub email: String,
    #[serde(rename = "idade")]
    pub age: u32,
}

impl UserProfile {
    /// First whitespace-separated word of the full name, for greetings.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.full_name
            .split_whitespace()
            .next()
            .unwrap_or(self.full_name.as_str())
    }

    /// Uppercased first letter of the name, used for the avatar placeholder.
    #[must_use]
    pub fn avatar_initial(&self) -> String {
        self.full_name
            .chars()
            .next()
            .map_or_else(|| "?".to_string(), |ch| ch.to_uppercase().to_string())
    }
}

/// Authentication state as the client caches it between runs.
///
/// The HTTP client's cookie jar holds the actual credential; this value is
/// only the locally stored view of who is signed in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: Option<UserProfile>,
}

impl AuthSession {
    #[must_use]
    pub fn signed_in(user: UserProfile) -> Self {
        Self { user: Some(user) }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str) -> UserProfile {
        UserProfile {
            full_name: name.to_string(),
            email: "ana@example.com".to_string(),
            age: 21,
        }
    }

    #[test]
    fn first_name_is_first_word() {
        assert_eq!(profile("Ana Clara Souza").first_name(), "Ana");
        assert_eq!(profile("Ana").first_name(), "Ana");
    }

    #[test]
    fn avatar_initial_is_uppercased() {
        assert_eq!(profile("ana souza").avatar_initial(), "A");
        assert_eq!(profile("").avatar_initial(), "?");
    }

    #[test]
    fn default_session_is_signed_out() {
        assert!(!AuthSession::default().is_authenticated());
        assert!(AuthSession::signed_in(profile("Ana")).is_authenticated());
    }

    #[test]
    fn profile_uses_backend_wire_names() {
        let json = r#"{"nomeCompleto":"Ana Souza","email":"ana@example.com","idade":21}"#;
        let parsed: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, profile("Ana Souza"));
    }
}
