pub mod settings;

pub use settings::{
    app_data_dir, default_config_path, load_config, load_or_default, TrackerConfig, DATA_DIR_ENV,
};
