pub mod classifier;
pub mod config;
pub mod error;
pub mod ops;

pub use classifier::{
    AnthropicClient, Classification, Classifier, ClassifierError, CompletionClient,
    HighlightJudgment, SceneJudgment,
};
pub use config::{ClassifierSettings, SETTINGS_FILE, Settings};
pub use error::{Error, Result};
