use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use shared::{Claims, Result};

// HS256 session tokens handed out at login.
pub struct TokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl TokenSigner {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    pub fn issue(&self, username: &str) -> Result<String> {
        let claims = Claims::new(username, self.ttl_secs);
        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    pub fn verify(&self, token: &str) -> Result<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let signer = TokenSigner::new("test-secret", 3600);
        let issued_at = chrono::Utc::now().timestamp() as usize;

        let token = signer.issue("admin").unwrap();
        let claims = signer.verify(&token).unwrap();

        assert_eq!(claims.username, "admin");
        let expires_in = claims.exp - issued_at;
        assert!((3595..=3605).contains(&expires_in));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let signer = TokenSigner::new("test-secret", 3600);

        let mut token = signer.issue("admin").unwrap();
        token.push('x');

        assert!(signer.verify(&token).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let signer = TokenSigner::new("test-secret", 3600);
        let other = TokenSigner::new("other-secret", 3600);

        let token = signer.issue("admin").unwrap();

        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // Past the default validation leeway of 60 seconds.
        let signer = TokenSigner::new("test-secret", -120);

        let token = signer.issue("admin").unwrap();

        assert!(signer.verify(&token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let signer = TokenSigner::new("test-secret", 3600);

        assert!(signer.verify("not.a.token").is_err());
    }
}
