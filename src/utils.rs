pub mod helpers;
pub mod logger;

pub use helpers::get_content_type;
pub use logger::init_tracing;
