// Source of the "current user" when a request does not name one itself.
// Wiring one in is optional; the leaderboard works without it.
pub trait IdentityProvider: Send + Sync {
    fn current_username(&self) -> Option<String>;
}
