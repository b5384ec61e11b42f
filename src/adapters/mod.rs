pub mod unix_fs;

#[cfg(test)]
pub mod test_helpers;

pub use unix_fs::UnixFs;
