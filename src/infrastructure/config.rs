use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub loan_period_days: i64,
    pub seed_demo: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://circulib.db?mode=rwc".to_string()),
            loan_period_days: env::var("LOAN_PERIOD_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(15),
            seed_demo: env::var("SEED_DEMO").is_ok(),
        }
    }
}
