pub mod menu;
pub mod messages;
pub mod status_bar;
