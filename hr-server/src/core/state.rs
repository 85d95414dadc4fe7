use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppResult;

/// 服务器状态 - 持有配置与共享数据库连接池
///
/// 使用 Clone 浅拷贝在处理器之间共享；连接池本身就是进程级单例，
/// 除它之外不存在进程内共享可变状态。
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 数据库服务 (SQLite 连接池)
    pub db: DbService,
}

impl ServerState {
    /// 初始化状态：打开数据库、应用迁移
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db = DbService::new(&config.database_path, config.db_max_connections).await?;
        Ok(Self {
            config: config.clone(),
            db,
        })
    }

    /// 获取数据库连接池
    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }
}
