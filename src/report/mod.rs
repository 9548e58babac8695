mod html;
mod text;

// Re-export from submodules
pub use html::{escape, render_html};
pub use text::render_text;
