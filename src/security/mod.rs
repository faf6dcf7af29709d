pub mod escape;
pub mod password;
pub mod token;

pub use escape::escape;
pub use password::PasswordHasher;
pub use token::{Claims, TokenIssuer};
