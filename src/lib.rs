#![forbid(unsafe_code)]

pub mod builder;
pub mod convert;
pub mod error;
pub mod model;
pub mod prompt;
pub mod runner;
pub mod settings;
pub mod store;
pub mod wizard;

pub use convert::{AsciiConverter, Converter, WEB_PALETTE};
pub use error::{AscseeError, AscseeResult};
pub use model::{Order, RenderSpec, TargetType};
pub use prompt::{ConsolePrompt, FONT_SIZE_MAX, FONT_SIZE_MIN, Prompt};
pub use runner::{JobOutcome, JobReport, RunReport};
pub use settings::Settings;
