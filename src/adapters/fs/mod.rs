pub mod graph_file;
