/// Session-wide defaults for new render specs.
///
/// An explicit value handed to the builder and the settings menu rather than
/// process-global state; lives only as long as the session and is never
/// persisted on its own.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub font_file: String,
    pub font_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Lowering the font size raises the visual resolution of the
            // output at the cost of per-job render time.
            font_file: "arial.ttf".to_string(),
            font_size: 16,
        }
    }
}

impl Settings {
    /// Accepts any non-empty string; existence of the file is the converter's
    /// lazy concern when it actually opens the font.
    pub fn set_font_file(&mut self, path: impl Into<String>) {
        self.font_file = path.into();
    }

    pub fn set_font_size(&mut self, size: u32) {
        self.font_size = size;
    }
}
