pub mod current_user;
pub mod error;
pub mod session;

pub use current_user::CurrentUserResponse;
pub use error::SessionError;
pub use session::{SessionContext, SessionData};
