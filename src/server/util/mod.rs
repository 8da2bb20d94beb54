pub mod parse;
pub mod password;
pub mod text;
