mod ui;
mod viewport;

pub use ui::{DialogKind, UIState};
pub use viewport::ViewportState;
