#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
    pub pool_size: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "nba_project.db".to_string()),
            pool_size: 8,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginationSettings {
    pub default_page: usize,
    pub default_per_page: usize,
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            default_page: 1,
            default_per_page: 50,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub pagination: PaginationSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            database: DatabaseSettings::default(),
            pagination: PaginationSettings::default(),
        }
    }

    pub fn with_database_path(mut self, path: impl Into<String>) -> Self {
        self.database.path = path.into();
        self
    }
}
