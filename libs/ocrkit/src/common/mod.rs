mod utils;

pub use utils::init_logger;
pub use utils::init_logger_exe;
