pub mod dijkstra;
pub mod structs;
