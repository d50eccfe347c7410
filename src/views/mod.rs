pub mod app;
pub mod nav_bar;
pub mod identity;
pub mod clip;

pub use app::render_app;
pub use nav_bar::render_nav_bar;
pub use identity::render_identity_section;
pub use clip::render_clip_section;
