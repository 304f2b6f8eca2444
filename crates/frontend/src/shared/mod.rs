pub mod components;
pub mod confirm_modal;
pub mod icons;
pub mod modal;
pub mod modal_frame;
