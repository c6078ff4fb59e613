pub mod animation;
pub mod theme_toggle;
