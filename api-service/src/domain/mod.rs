pub mod identity;
pub mod ranking;
pub mod token;

pub use identity::IdentityProvider;
pub use ranking::ranking_order;
pub use token::TokenSigner;
