use shared::{Result, ServiceError};

use crate::domain::TokenSigner;
use crate::repository::CredentialStore;

pub struct AuthService {
    credentials: CredentialStore,
    signer: TokenSigner,
}

impl AuthService {

    pub fn new(credentials: CredentialStore, signer: TokenSigner) -> Self {
        Self {
            credentials,
            signer,
        }
    }

    pub fn login(&self, username: &str, password: &str) -> Result<String> {
        shared::record_counter("api_service.login.requests", 1);

        let Some(credential) = self.credentials.find(username) else {
            shared::record_counter("api_service.login.unknown_user", 1);
            tracing::warn!(username = username, "Login attempt for unknown user");
            return Err(ServiceError::UserNotFound);
        };

        if !bcrypt::verify(password, &credential.password_hash)? {
            shared::record_counter("api_service.login.bad_password", 1);
            tracing::warn!(username = username, "Login attempt with wrong password");
            return Err(ServiceError::InvalidPassword);
        }

        let token = self.signer.issue(username)?;

        shared::record_counter("api_service.login.success", 1);
        tracing::info!(username = username, "Login successful");

        Ok(token)
    }
}
