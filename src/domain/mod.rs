pub mod edge;
pub mod error;
pub mod graph;
pub mod marker;
pub mod measure;
pub mod node;
pub mod path;
pub mod ports;
pub mod resolver;
pub mod selection;
