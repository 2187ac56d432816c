pub mod column;
pub mod delimiter;
pub mod header;
