//! GUI module
//!
//! Provides the Slint-based heart column window and its synchronization with
//! the controller thread.

pub mod gui_controller;

pub use gui_controller::GuiController;
