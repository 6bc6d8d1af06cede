//! Mock implementations for integration tests.
#![allow(dead_code)]

use multipath::domain::graph::NetworkGraph;
use multipath::domain::node::NodeId;
use multipath::domain::path::ShortestPath;
use multipath::domain::ports::ShortestPathFinder;
use std::sync::Mutex;

/// Finder that records every call and returns a canned answer.
#[derive(Default)]
pub struct RecordingFinder {
    pub answer: Option<ShortestPath>,
    pub calls: Mutex<Vec<(Vec<NodeId>, Vec<NodeId>)>>,
}

impl RecordingFinder {
    pub fn returning(answer: Option<ShortestPath>) -> Self {
        Self {
            answer,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl ShortestPathFinder for RecordingFinder {
    fn shortest_path(
        &self,
        _graph: &NetworkGraph,
        from_nodes: &[NodeId],
        to_nodes: &[NodeId],
    ) -> Option<ShortestPath> {
        self.calls
            .lock()
            .unwrap()
            .push((from_nodes.to_vec(), to_nodes.to_vec()));
        self.answer.clone()
    }
}
