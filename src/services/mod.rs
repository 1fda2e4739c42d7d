pub mod queries;
pub mod students;
pub mod system;

pub use queries::QueryService;
pub use students::StudentService;
pub use system::SystemService;
