use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    // 姓名
    pub name: String,
    // 课程
    pub class: String,
    // 分组
    pub section: String,
    // 分数
    pub marks: i64,
}
