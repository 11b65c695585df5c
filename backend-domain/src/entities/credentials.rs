// Credential entity
// Username -> password mapping checked at login

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    users: HashMap<String, String>,
}

impl CredentialStore {
    pub fn new(users: HashMap<String, String>) -> Self {
        Self { users }
    }

    /// True when `username` is known and its stored password equals `password`.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|stored| stored == password)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl FromIterator<(String, String)> for CredentialStore {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            users: iter.into_iter().collect(),
        }
    }
}
