pub mod fs;
pub mod shortest_path;
