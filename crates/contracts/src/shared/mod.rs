pub mod form_field;
pub mod navigation;
pub mod overlay;
pub mod site;
pub mod stats;
