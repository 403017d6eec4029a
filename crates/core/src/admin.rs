//! The administrator account.
//!
//! One static credential record is the whole authentication story: shells
//! collect a username and password and ask [`AdminAccount::verify`]. No
//! hashing and no persistence; credentials live for the session.

/// The administrator's credentials and contact address.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    username: String,
    password: String,
    address: String,
}

impl AdminAccount {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            address: address.into(),
        }
    }

    /// Exact-match credential check used by the shells' login screens.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }
}

impl Default for AdminAccount {
    /// The out-of-the-box login: `admin` / `123`.
    fn default() -> Self {
        Self::new("admin", "123", "B1 1AB")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_requires_both_credentials() {
        let admin = AdminAccount::default();
        assert!(admin.verify("admin", "123"));
        assert!(!admin.verify("admin", "wrong"));
        assert!(!admin.verify("Admin", "123"));
    }

    #[test]
    fn test_updated_credentials_take_effect() {
        let mut admin = AdminAccount::default();
        admin.set_username("root");
        admin.set_password("secret");
        assert!(!admin.verify("admin", "123"));
        assert!(admin.verify("root", "secret"));
    }
}
