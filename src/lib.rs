//! multipath library: shortest-path resolution between selected edges of a
//! trail network, plus the selection and measuring tools built on it.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
pub mod server;
