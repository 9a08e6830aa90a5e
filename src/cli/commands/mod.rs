pub mod db;
pub mod folders;
