mod central_panel;
mod properties_panel;
mod tools_panel;

pub use central_panel::central_panel;
pub use properties_panel::{PropertiesPanel, properties_panel};
pub use tools_panel::tools_panel;
