use std::io::Write;
use tempfile::NamedTempFile;

pub fn setup() {
    let _ = env_logger::builder().is_test(true).filter_level(log::LevelFilter::Debug).try_init();
}

/// Writes `contents` to a temporary token file kept alive by the returned handle.
pub fn token_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp token file");
    file.write_all(contents.as_bytes()).expect("write temp token file");
    file
}
