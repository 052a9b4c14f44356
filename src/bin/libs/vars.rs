use std::sync::Arc;

use lazy_static::lazy_static;
use mealbase::meal::DAILY_CALORIE_LIMIT;
use tracing::{event, instrument};

pub struct EnvVar {
    pub calorie_limit: u32,
    pub log_dir: String,
    pub log_file: String,
}

lazy_static! {
    pub static ref ENV: Arc<EnvVar> = Arc::new(EnvVar::initialize());
}

impl EnvVar {
    #[instrument(name = "EnvVar", skip_all)]
    fn initialize() -> Self {
        let calorie_limit = match std::env::var("MEALOG_CALORIE_LIMIT") {
            Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
                event!(tracing::Level::WARN, value = %raw, "MEALOG_CALORIE_LIMIT is not a number, using default");
                DAILY_CALORIE_LIMIT
            }),
            Err(_) => {
                event!(tracing::Level::WARN, "MEALOG_CALORIE_LIMIT not set, using default");
                DAILY_CALORIE_LIMIT
            }
        };
        let log_dir = std::env::var("MEALOG_LOG_DIR").unwrap_or_else(|_| {
            event!(tracing::Level::WARN, "MEALOG_LOG_DIR not set, using default");
            "logs".to_string()
        });
        let log_file = std::env::var("MEALOG_LOG_FILE").unwrap_or_else(|_| {
            event!(tracing::Level::WARN, "MEALOG_LOG_FILE not set, using default");
            "mealog.log".to_string()
        });

        EnvVar {
            calorie_limit,
            log_dir,
            log_file,
        }
    }

    pub fn get_instance() -> Arc<EnvVar> {
        ENV.clone()
    }
}
