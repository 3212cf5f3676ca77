mod global;
mod path;
mod properties;
mod scope;
mod stage;

pub use global::{
    GlobalConfig, GlobalSettings, KEY_OUTPUT_FILE, KEY_REPO_ROOT, KEY_RUN_ID,
    KEY_STRUCTURED_OUTPUT, KEY_TEMP_DIR,
};
pub use path::{PathConfig, assign_files};
pub use properties::{Properties, load_properties, parse_properties};
pub use scope::PropertyScope;
pub use stage::Stage;
