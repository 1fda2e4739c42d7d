use serde::Serialize;

use super::entities::Student;

#[derive(Debug, Serialize)]
pub struct StudentListResponse {
    pub items: Vec<Student>,
    pub total: usize,
}
