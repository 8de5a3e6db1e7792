pub mod controls;
pub mod dialogs;
pub mod helpers;
pub mod menu_bar;
pub mod preferences;
pub mod status;
pub mod viewport;
