/// 服务器配置 - 报修台的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | GEMINI_API_KEY | (空) | 分类服务 API 密钥，留空则禁用智能分类 |
/// | CLASSIFIER_BASE_URL | https://generativelanguage.googleapis.com | 分类服务地址 |
/// | CLASSIFIER_MODEL | gemini-3-flash-preview | 分类模型名称 |
/// | CLASSIFIER_TIMEOUT_MS | 15000 | 分类请求超时(毫秒) |
/// | SEED_DEMO_DATA | true | 启动时载入演示报修数据 |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 GEMINI_API_KEY=xxx cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 分类服务 API 密钥 (空字符串表示未配置)
    pub gemini_api_key: String,
    /// 分类服务基础地址
    pub classifier_base_url: String,
    /// 分类模型名称
    pub classifier_model: String,
    /// 分类请求超时时间 (毫秒)
    pub classifier_timeout_ms: u64,
    /// 是否载入演示数据
    pub seed_demo_data: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            gemini_api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            classifier_base_url: std::env::var("CLASSIFIER_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".into()),
            classifier_model: std::env::var("CLASSIFIER_MODEL")
                .unwrap_or_else(|_| "gemini-3-flash-preview".into()),
            classifier_timeout_ms: std::env::var("CLASSIFIER_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(15000),
            seed_demo_data: std::env::var("SEED_DEMO_DATA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(http_port: u16, seed_demo_data: bool) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.seed_demo_data = seed_demo_data;
        config
    }

    /// 是否已配置分类服务
    pub fn classifier_configured(&self) -> bool {
        !self.gemini_api_key.is_empty()
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
