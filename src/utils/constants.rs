use dotenvy::dotenv;
use lazy_static::lazy_static;
use std::env as std_env;
use std::path::PathBuf;

lazy_static! {
    pub static ref ROSTER_DATA_DIR: PathBuf =
        PathBuf::from(load_or_default(env::ROSTER_DATA_DIR_ENV_VAR, "./data"));
    pub static ref STRICT_VALIDATION: bool = set_strict_validation();
}

fn load_env() {
    dotenv().ok();
}

fn load_or_default(variable_name: &str, default_value: &str) -> String {
    load_env();

    match std_env::var(variable_name) {
        Ok(value) => {
            if value.is_empty() {
                String::from(default_value)
            } else {
                value
            }
        }
        Err(_) => String::from(default_value),
    }
}

fn set_strict_validation() -> bool {
    load_or_default(env::STRICT_VALIDATION_ENV_VAR, "false") == "true"
}

pub mod env {
    pub const ROSTER_DATA_DIR_ENV_VAR: &str = "ROSTER_DATA_DIR";
    pub const STRICT_VALIDATION_ENV_VAR: &str = "STRICT_VALIDATION";
}

/// localStorage key the original UI mirrors the roster under.
pub const SESSION_STORE_KEY: &str = "scheduleGroups";
/// File name of the downloadable roster export.
pub const EXPORT_FILE_NAME: &str = "schedule-groups.json";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
