pub mod controls;
pub mod listing;
pub mod preview;
