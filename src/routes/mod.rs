pub mod queries;

pub mod students;

pub mod system;

pub mod frontend;

pub use frontend::configure_frontend_routes;
pub use queries::configure_query_routes;
pub use students::configure_student_routes;
pub use system::configure_system_routes;
