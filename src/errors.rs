use std::fmt;

#[derive(Debug, Clone)]
pub enum ClickrankError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    Validation(String),
    NotFound(String),
    Serialization(String),
    FileOperation(String),
    Config(String),
}

impl ClickrankError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ClickrankError::DatabaseConfig(_) => "E001",
            ClickrankError::DatabaseConnection(_) => "E002",
            ClickrankError::DatabaseOperation(_) => "E003",
            ClickrankError::Validation(_) => "E004",
            ClickrankError::NotFound(_) => "E005",
            ClickrankError::Serialization(_) => "E006",
            ClickrankError::FileOperation(_) => "E007",
            ClickrankError::Config(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ClickrankError::DatabaseConfig(_) => "Database Configuration Error",
            ClickrankError::DatabaseConnection(_) => "Database Connection Error",
            ClickrankError::DatabaseOperation(_) => "Database Operation Error",
            ClickrankError::Validation(_) => "Validation Error",
            ClickrankError::NotFound(_) => "Resource Not Found",
            ClickrankError::Serialization(_) => "Serialization Error",
            ClickrankError::FileOperation(_) => "File Operation Error",
            ClickrankError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ClickrankError::DatabaseConfig(msg)
            | ClickrankError::DatabaseConnection(msg)
            | ClickrankError::DatabaseOperation(msg)
            | ClickrankError::Validation(msg)
            | ClickrankError::NotFound(msg)
            | ClickrankError::Serialization(msg)
            | ClickrankError::FileOperation(msg)
            | ClickrankError::Config(msg) => msg,
        }
    }

    /// 上游数据源（数据库）读写失败，调用方可降级为无徽章展示
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            ClickrankError::DatabaseConnection(_) | ClickrankError::DatabaseOperation(_)
        )
    }

    /// 格式化为彩色输出（用于终端）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ClickrankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ClickrankError {}

// 便捷的构造函数
impl ClickrankError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        ClickrankError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        ClickrankError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        ClickrankError::DatabaseOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ClickrankError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        ClickrankError::NotFound(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ClickrankError::Serialization(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ClickrankError::FileOperation(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        ClickrankError::Config(msg.into())
    }
}

impl From<sea_orm::DbErr> for ClickrankError {
    fn from(err: sea_orm::DbErr) -> Self {
        ClickrankError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for ClickrankError {
    fn from(err: std::io::Error) -> Self {
        ClickrankError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ClickrankError {
    fn from(err: serde_json::Error) -> Self {
        ClickrankError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ClickrankError {
    fn from(err: toml::ser::Error) -> Self {
        ClickrankError::Serialization(err.to_string())
    }
}

impl From<::config::ConfigError> for ClickrankError {
    fn from(err: ::config::ConfigError) -> Self {
        ClickrankError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClickrankError>;
