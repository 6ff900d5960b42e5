pub mod controls;
pub mod document;
pub mod html;
pub mod popup;

pub use controls::{Control, ControlManager, ControlPosition};

pub use document::render_document;

pub use popup::Popup;
