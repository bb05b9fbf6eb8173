// Make common test utilities available
pub mod common;
