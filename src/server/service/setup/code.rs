use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Time-to-live for setup codes in seconds
const SETUP_CODE_TTL_SECONDS: u64 = 600;

/// Stored setup code with expiration timestamp
#[derive(Clone)]
struct SetupCode {
    code: String,
    expires_at: Instant,
}

impl SetupCode {
    fn new(code: String, ttl: Duration) -> Self {
        Self {
            code,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn matches(&self, input: &str) -> bool {
        self.code == input
    }
}

/// Setup code held by the one setup request allowed to use it.
pub struct ClaimedSetupCode(SetupCode);

/// Service holding the one-time code that authorizes creating the first admin.
///
/// The code is generated on startup when no admin exists and kept in memory only.
/// It stays valid for ten minutes or until a setup succeeds with it.
#[derive(Clone)]
pub struct SetupCodeService {
    code: Arc<RwLock<Option<SetupCode>>>,
    ttl: Duration,
}

impl SetupCodeService {
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(SETUP_CODE_TTL_SECONDS))
    }

    /// Creates a service whose codes expire after `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    /// Generates a new random setup code, replacing any previous one.
    ///
    /// # Returns
    /// The generated 32 character alphanumeric code.
    pub async fn generate(&self) -> String {
        let code_string = Self::generate_random_code();
        *self.code.write().await = Some(SetupCode::new(code_string.clone(), self.ttl));
        code_string
    }

    /// Takes the stored code out of the service if it matches `input_code`.
    ///
    /// Only one caller can hold the claimed code, so concurrent setups presented
    /// with the same code cannot both proceed. Expired codes are dropped.
    ///
    /// # Returns
    /// - `Some(ClaimedSetupCode)` - The code matched and is now removed
    /// - `None` - No code stored, expired, or `input_code` is wrong
    pub async fn claim(&self, input_code: &str) -> Option<ClaimedSetupCode> {
        let mut code = self.code.write().await;

        match code.take() {
            Some(stored_code) if stored_code.is_expired() => None,
            Some(stored_code) if stored_code.matches(input_code) => {
                Some(ClaimedSetupCode(stored_code))
            }
            other => {
                *code = other;
                None
            }
        }
    }

    /// Puts a claimed code back after the setup it authorized failed.
    ///
    /// Nothing is restored when the code expired meanwhile or a new code has been
    /// generated since.
    pub async fn release(&self, claimed: ClaimedSetupCode) {
        let mut code = self.code.write().await;

        if code.is_none() && !claimed.0.is_expired() {
            *code = Some(claimed.0);
        }
    }

    fn generate_random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";
        const CODE_LENGTH: usize = 32;

        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }

    /// Checks if a setup code currently exists and is not expired.
    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored_code) = code.as_ref() {
            if stored_code.is_expired() {
                *code = None;
                return false;
            }
            return true;
        }

        false
    }
}

impl Default for SetupCodeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that generated codes are 32 alphanumeric characters.
    #[tokio::test]
    async fn generates_alphanumeric_code() {
        let service = SetupCodeService::new();

        let code = service.generate().await;

        assert_eq!(code.len(), 32);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(service.has_valid_code().await);
    }

    /// Tests that a code can be claimed only once.
    #[tokio::test]
    async fn claims_code_once() {
        let service = SetupCodeService::new();
        let code = service.generate().await;

        assert!(service.claim(&code).await.is_some());

        assert!(service.claim(&code).await.is_none());
        assert!(!service.has_valid_code().await);
    }

    /// Tests that a wrong code leaves the stored one in place.
    #[tokio::test]
    async fn rejects_wrong_code() {
        let service = SetupCodeService::new();
        let code = service.generate().await;

        assert!(service.claim("wrong").await.is_none());
        assert!(service.has_valid_code().await);
        assert!(service.claim(&code).await.is_some());
    }

    /// Tests that a released code can be claimed again.
    #[tokio::test]
    async fn released_code_is_claimable() {
        let service = SetupCodeService::new();
        let code = service.generate().await;

        let claimed = service.claim(&code).await.unwrap();
        service.release(claimed).await;

        assert!(service.claim(&code).await.is_some());
    }

    /// Tests that releasing does not overwrite a newer code.
    #[tokio::test]
    async fn release_keeps_newer_code() {
        let service = SetupCodeService::new();
        let first = service.generate().await;
        let claimed = service.claim(&first).await.unwrap();

        let second = service.generate().await;
        service.release(claimed).await;

        assert!(service.claim(&first).await.is_none() || first == second);
        assert!(service.claim(&second).await.is_some());
    }

    /// Tests that codes stop validating once expired.
    #[tokio::test]
    async fn expired_code_fails() {
        let service = SetupCodeService::with_ttl(Duration::from_millis(10));
        let code = service.generate().await;

        tokio::time::sleep(Duration::from_millis(30)).await;

        assert!(service.claim(&code).await.is_none());
        assert!(!service.has_valid_code().await);
    }

    /// Tests that generating replaces the previous code.
    #[tokio::test]
    async fn new_code_replaces_old() {
        let service = SetupCodeService::new();
        let first = service.generate().await;
        let second = service.generate().await;

        if first != second {
            assert!(service.claim(&first).await.is_none());
        }
        assert!(service.claim(&second).await.is_some());
    }
}
