pub mod claims;
pub mod clock;
pub mod errors;
pub mod handler;

pub use claims::Claims;
pub use claims::ISSUER;
pub use clock::Clock;
pub use clock::SystemClock;
pub use errors::TokenError;
pub use handler::TokenHandler;
