//! HTTP handlers for the demo endpoints.

pub mod docs;
pub mod echo;
pub mod fallback;
pub mod greeting;
pub mod health;
pub mod home;
pub mod methods;
pub mod posts;

// Re-export handlers for easier access
pub use docs::{openapi, redoc, swagger_ui};
pub use echo::echo;
pub use fallback::not_found;
pub use greeting::greeting;
pub use health::ping;
pub use home::home;
pub use methods::{hello_get, hello_post};
pub use posts::posts;
