use shared::Credential;

// Built-in demo account (admin, bcrypt hash of "1234"). Known weakness:
// anything beyond a demo has to inject real records via CredentialStore::new.
const DEFAULT_USERS: &[(&str, &str)] = &[(
    "admin",
    "$2b$10$u4kGGG57tlelNxQvKMxFuOI38sEiGwm2CIyWhKTQpiVLSXoPsDnse",
)];

// Read-only username to password-hash lookup, fixed at construction.
#[derive(Clone)]
pub struct CredentialStore {
    users: Vec<Credential>,
}

impl CredentialStore {

    pub fn new(users: Vec<Credential>) -> Self {
        Self { users }
    }

    pub fn with_defaults() -> Self {
        Self::new(
            DEFAULT_USERS
                .iter()
                .map(|(username, hash)| Credential {
                    username: (*username).to_string(),
                    password_hash: (*hash).to_string(),
                })
                .collect(),
        )
    }

    pub fn find(&self, username: &str) -> Option<&Credential> {
        self.users.iter().find(|c| c.username == username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_store_knows_admin() {
        let store = CredentialStore::with_defaults();

        let credential = store.find("admin").unwrap();
        assert!(credential.password_hash.starts_with("$2b$"));
    }

    #[test]
    fn test_unknown_user_is_none() {
        let store = CredentialStore::with_defaults();

        assert!(store.find("nobody").is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let store = CredentialStore::with_defaults();

        assert!(store.find("Admin").is_none());
    }

    #[test]
    fn test_injected_users_are_found() {
        let store = CredentialStore::new(vec![Credential {
            username: "carol".to_string(),
            password_hash: "$2b$04$fakefakefakefakefakefake".to_string(),
        }]);

        assert!(store.find("carol").is_some());
        assert!(store.find("admin").is_none());
    }
}
