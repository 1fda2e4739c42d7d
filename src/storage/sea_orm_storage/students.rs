//! 学生表初始化与读取

use super::SeaOrmStorage;
use crate::entity::student::{ActiveModel, Column, Entity as Students};
use crate::errors::{Nl2SqlError, Result};
use crate::models::students::entities::Student;
use migration::{Migrator, MigratorTrait, SchemaManager};
use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder, Set, TransactionTrait};
use tracing::{debug, info, warn};

const STUDENT_TABLE: &str = "STUDENT";

/// 首次初始化时写入的固定数据：(姓名, 课程, 分组, 分数)
pub(crate) const SEED_STUDENTS: [(&str, &str, &str, i32); 5] = [
    ("Krish", "Data Science", "A", 90),
    ("Sudhanshu", "Data Science", "B", 100),
    ("Darius", "Data Science", "A", 86),
    ("Vikash", "DEVOPS", "A", 50),
    ("Dipesh", "DEVOPS", "A", 35),
];

impl SeaOrmStorage {
    /// 建表并写入种子数据
    pub async fn bootstrap_impl(&self) -> Result<()> {
        Migrator::up(&self.db, None)
            .await
            .map_err(|e| Nl2SqlError::database_operation(format!("Migration failed: {e}")))?;

        // 迁移记录还在但表已被删掉时（例如执行过生成的 DROP 语句），直接重放建表
        let manager = SchemaManager::new(&self.db);
        if !manager.has_table(STUDENT_TABLE).await? {
            warn!("Table {} is missing, recreating it", STUDENT_TABLE);
            for migration in Migrator::migrations() {
                migration.up(&manager).await?;
            }
        }

        self.seed_students_if_empty().await?;
        Ok(())
    }

    /// 表为空时写入五条种子数据，返回是否写入
    async fn seed_students_if_empty(&self) -> Result<bool> {
        let txn = self.db.begin().await?;

        let count = Students::find().count(&txn).await?;
        if count > 0 {
            debug!("Table {} already has {} row(s), skipping seed", STUDENT_TABLE, count);
            txn.rollback().await?;
            return Ok(false);
        }

        let models = SEED_STUDENTS
            .iter()
            .map(|(name, class, section, marks)| ActiveModel {
                name: Set(Some(name.to_string())),
                class: Set(Some(class.to_string())),
                section: Set(Some(section.to_string())),
                marks: Set(Some(*marks)),
                ..Default::default()
            });

        Students::insert_many(models)
            .exec_without_returning(&txn)
            .await
            .map_err(|e| Nl2SqlError::database_operation(format!("Failed to seed students: {e}")))?;

        txn.commit().await?;
        info!("Seeded {} rows into {}", SEED_STUDENTS.len(), STUDENT_TABLE);
        Ok(true)
    }

    /// 统计行数
    pub async fn count_students_impl(&self) -> Result<u64> {
        let count = Students::find()
            .count(&self.db)
            .await
            .map_err(|e| Nl2SqlError::database_operation(format!("Failed to count students: {e}")))?;
        Ok(count)
    }

    /// 按插入顺序列出全部学生
    pub async fn list_students_impl(&self) -> Result<Vec<Student>> {
        let models = Students::find()
            .order_by_asc(Column::Rowid)
            .all(&self.db)
            .await
            .map_err(|e| Nl2SqlError::database_operation(format!("Failed to list students: {e}")))?;

        Ok(models.into_iter().map(|m| m.into_student()).collect())
    }
}
