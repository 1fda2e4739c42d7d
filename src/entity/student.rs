//! 学生实体

use sea_orm::entity::prelude::*;

/// `STUDENT` 表没有声明主键，这里用 SQLite 的隐式 `rowid` 充当
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "STUDENT")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "rowid")]
    pub rowid: i64,
    #[sea_orm(column_name = "NAME")]
    pub name: Option<String>,
    #[sea_orm(column_name = "CLASS")]
    pub class: Option<String>,
    #[sea_orm(column_name = "SECTION")]
    pub section: Option<String>,
    #[sea_orm(column_name = "MARKS")]
    pub marks: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use crate::models::students::entities::Student;

        Student {
            name: self.name.unwrap_or_default(),
            class: self.class.unwrap_or_default(),
            section: self.section.unwrap_or_default(),
            marks: self.marks.map(i64::from).unwrap_or_default(),
        }
    }
}
