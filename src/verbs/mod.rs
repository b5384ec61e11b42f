pub mod check;
pub mod dsn;
