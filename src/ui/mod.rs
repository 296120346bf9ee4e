mod layout;
mod theme;
pub mod widgets;

pub use layout::Layout;
pub use theme::Theme;
