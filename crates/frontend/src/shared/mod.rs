pub mod config;
pub mod icon_view;
pub mod icons;
pub mod sanitize;
