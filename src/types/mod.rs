mod dispatch;
mod page_mode;
mod selection;
mod variant;

pub use dispatch::*;
pub use page_mode::*;
pub use selection::*;
pub use variant::*;
