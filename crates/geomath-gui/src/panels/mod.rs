pub mod canvas;
pub mod controls;
pub mod exit_dialog;
pub mod helpers;
