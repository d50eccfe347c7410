pub mod session_viewmodel;
pub mod identity_viewmodel;
pub mod clip_viewmodel;

pub use session_viewmodel::{FetchTicket, SessionViewModel};
pub use identity_viewmodel::{AuthLinks, IdentityView, SocialLinkState, WelcomeState};
pub use clip_viewmodel::ClipEmbedConfig;
