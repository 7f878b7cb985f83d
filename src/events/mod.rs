mod controls;
mod modal;
mod pointer;

pub use controls::{wire_resize, wire_ui_buttons, wire_video_ended};
pub use modal::wire_modal_exit_buttons;
pub use pointer::wire_pointer_handlers;
