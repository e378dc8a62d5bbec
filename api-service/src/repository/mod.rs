pub mod board_repo;
pub mod credential_repo;

pub use board_repo::BoardRepository;
pub use credential_repo::CredentialStore;
