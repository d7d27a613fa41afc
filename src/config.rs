pub mod settings;
pub mod user;

pub use settings::{CodeUnit, DegeneratePolicy, DigestOptions, OptionsLayer, merge_layers};
pub use user::{load_options_file, load_user_options, user_config_path};
