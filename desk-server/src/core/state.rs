use std::sync::Arc;

use crate::classifier::{ComplaintClassifier, GeminiClassifier};
use crate::complaints::{ComplaintStore, SubmissionService};
use crate::core::Config;
use crate::directory::UserDirectory;

/// 服务器状态 - 持有所有服务的单例引用
///
/// ServerState 是后台服务的核心数据结构，持有所有服务的共享引用。
/// 使用 Arc 实现浅拷贝，克隆成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | directory | Arc<UserDirectory> | 用户名册 (只读) |
/// | store | Arc<ComplaintStore> | 报修记录存储 |
/// | submission | Arc<SubmissionService> | 提交流程 (含分类网关) |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 用户名册
    pub directory: Arc<UserDirectory>,
    /// 报修记录存储
    pub store: Arc<ComplaintStore>,
    /// 提交服务
    pub submission: Arc<SubmissionService>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 分类网关 (GEMINI_API_KEY 未配置时降级为人工选择)
    /// 2. 用户名册 (固定花名册)
    /// 3. 报修存储 (按配置加载演示数据)
    pub fn initialize(config: &Config) -> Self {
        if config.classifier_configured() {
            tracing::info!(model = %config.classifier_model, "Classifier gateway enabled");
        } else {
            tracing::warn!(
                "GEMINI_API_KEY not set, submissions will keep manual category/priority"
            );
        }

        let classifier = Arc::new(GeminiClassifier::from_config(config));
        Self::with_classifier(config, classifier)
    }

    /// 使用指定分类器构造状态 (测试注入点)
    pub fn with_classifier(config: &Config, classifier: Arc<dyn ComplaintClassifier>) -> Self {
        let directory = Arc::new(UserDirectory::seeded());
        let store = Arc::new(ComplaintStore::new());
        if config.seed_demo_data {
            store.seed_demo();
            tracing::info!(complaints = store.len(), "Demo data loaded");
        }

        let submission = Arc::new(SubmissionService::new(store.clone(), classifier));

        Self {
            config: config.clone(),
            directory,
            store,
            submission,
        }
    }
}
