use serde::{Deserialize, Serialize};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 近期窗口上限：一年
pub const MAX_RECENT_WINDOW_SECS: u64 = 365 * 24 * 3600;

/// 静态配置（从 TOML 加载，启动时使用）
///
/// 包含：
/// - database: 数据库连接配置
/// - logging: 日志配置
/// - ranking: 徽章排名规则
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config.toml > 默认值
    /// ENV 前缀：CR，分隔符：__
    /// 示例：CR__RANKING__RECENT_WINDOW_SECS=1800
    pub fn load(path: &str) -> Self {
        match Self::try_load(path) {
            Ok(config) => {
                if std::path::Path::new(path).exists() {
                    eprintln!("[INFO] Configuration loaded from: {}", path);
                }
                config
            }
            Err(e) => {
                eprintln!("[ERROR] {}", e.format_simple());
                Self::default()
            }
        }
    }

    /// 与 `load` 相同，但把解析错误返回给调用方
    pub fn try_load(path: &str) -> crate::errors::Result<Self> {
        use config::{Config, Environment, File};

        let settings = Config::builder()
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::with_name(path).required(false))
            // 2. 从环境变量覆盖，前缀 CR，分隔符 __
            .add_source(
                Environment::with_prefix("CR")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config = settings.try_deserialize::<StaticConfig>()?;
        config.validate()?;
        Ok(config)
    }

    /// 校验排名参数
    pub fn validate(&self) -> crate::errors::Result<()> {
        use crate::errors::ClickrankError;

        let window = self.ranking.recent_window_secs;
        if window == 0 || window > MAX_RECENT_WINDOW_SECS {
            return Err(ClickrankError::validation(format!(
                "ranking.recent_window_secs must be within 1..={}, got {}",
                MAX_RECENT_WINDOW_SECS, window
            )));
        }
        if self.ranking.notable_percent > 100 {
            return Err(ClickrankError::validation(format!(
                "ranking.notable_percent must be within 0..=100, got {}",
                self.ranking.notable_percent
            )));
        }
        if self.ranking.utc_offset_minutes.abs() >= 24 * 60 {
            return Err(ClickrankError::validation(format!(
                "ranking.utc_offset_minutes out of range: {}",
                self.ranking.utc_offset_minutes
            )));
        }
        Ok(())
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> crate::errors::Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 数据库连接配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_database_pool_size")]
    pub pool_size: u32,
    #[serde(default = "default_database_timeout")]
    pub timeout: u64,
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,
    #[serde(default = "default_retry_base_delay_ms")]
    pub retry_base_delay_ms: u64,
    #[serde(default = "default_retry_max_delay_ms")]
    pub retry_max_delay_ms: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

/// 徽章排名配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Rising 使用的近期窗口（秒）
    #[serde(default = "default_recent_window_secs")]
    pub recent_window_secs: u64,
    /// 有效列表数达到该值才评 Notable
    #[serde(default = "default_notable_min_listings")]
    pub notable_min_listings: usize,
    /// Notable 名额占有效列表数的百分比（向上取整，至少 1）
    #[serde(default = "default_notable_percent")]
    pub notable_percent: u32,
    /// 判断截止日期所用的时区偏移（分钟），如 UTC+9 为 540
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

// ============================================================
// Default value functions
// ============================================================

fn default_database_url() -> String {
    "clickrank.db".to_string()
}

fn default_database_pool_size() -> u32 {
    10
}

fn default_database_timeout() -> u64 {
    30
}

fn default_retry_count() -> u32 {
    3
}

fn default_retry_base_delay_ms() -> u64 {
    100
}

fn default_retry_max_delay_ms() -> u64 {
    2000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

fn default_recent_window_secs() -> u64 {
    3600
}

fn default_notable_min_listings() -> usize {
    5
}

fn default_notable_percent() -> u32 {
    20
}

// ============================================================
// Default implementations
// ============================================================

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            pool_size: default_database_pool_size(),
            timeout: default_database_timeout(),
            retry_count: default_retry_count(),
            retry_base_delay_ms: default_retry_base_delay_ms(),
            retry_max_delay_ms: default_retry_max_delay_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            recent_window_secs: default_recent_window_secs(),
            notable_min_listings: default_notable_min_listings(),
            notable_percent: default_notable_percent(),
            utc_offset_minutes: 0,
        }
    }
}
