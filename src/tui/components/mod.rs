// Reusable dashboard widgets

pub mod stat_cards;
pub mod status_bar;
pub mod stopwatch;
pub mod toast;
