use crate::app::dto::{LatLngDto, MeasureRequest, ResolveRequest, ResolveStatus};
use crate::app::engine::RouteEngine;
use crate::domain::edge::EdgeId;
use anyhow::{Context as _, Result, anyhow};

pub fn display_graph_info(engine: &RouteEngine) -> Result<()> {
    let health = engine.health()?;
    println!("Graph: {}", health.graph_path);
    println!("  Nodes: {}", health.node_count);
    println!("  Edges: {}", health.edge_count);
    Ok(())
}

pub fn resolve_path(engine: &RouteEngine, from: EdgeId, to: EdgeId, json: bool) -> Result<()> {
    let result = engine.resolve(ResolveRequest {
        steps: vec![from, to],
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Resolving path from edge {} to edge {}", from, to);
    if result.status == ResolveStatus::NoPath {
        println!("  No path: edge {} is unreachable from edge {}", to, from);
        return Ok(());
    }

    println!("{}", "=".repeat(60));
    for (i, cpath) in result.paths.iter().enumerate() {
        println!("Leg {}: {} -> {}", i + 1, cpath.from_edge.id, cpath.to_edge.id);
        if cpath.path.is_empty() {
            println!("   (edges touch, nothing in between)");
        } else {
            println!("   Nodes: {:?}", cpath.nodes);
        }
        for step in &cpath.path {
            println!(
                "   {:>8} -> {:<8} via edge {:<8} {:>10.2}",
                step.start, step.end, step.edge.id, step.weight
            );
        }
    }
    println!("{}", "=".repeat(60));
    println!("  Edges: {:?}", result.all_edges);
    if let Some(weight) = result.total_weight {
        println!("  Total weight: {:.2}", weight);
    }
    Ok(())
}

pub fn display_edge(engine: &RouteEngine, id: EdgeId) -> Result<()> {
    let info = engine.edge(id)?;
    println!("Edge {}", info.edge.id);
    println!("  Nodes: {} - {}", info.edge.nodes_id[0], info.edge.nodes_id[1]);
    println!("  Length: {:.2}", info.edge.length);
    println!("  Adjacent edges: {:?}", info.adjacent_edges);
    Ok(())
}

pub fn measure_distance(engine: &RouteEngine, points: &[String]) -> Result<()> {
    let points = points
        .iter()
        .map(|p| parse_latlng(p))
        .collect::<Result<Vec<_>>>()?;
    let result = engine.measure(MeasureRequest { points });

    println!("Measured {} point(s)", result.point_count);
    for (i, seg) in result.segments_m.iter().enumerate() {
        println!("  Segment {}: {:>12.2} m", i + 1, seg);
    }
    println!("  Total:      {:>12.2} m", result.distance_m);
    Ok(())
}

/// Parse `LAT,LNG` in degrees.
pub fn parse_latlng(s: &str) -> Result<LatLngDto> {
    let (lat, lng) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("Expected LAT,LNG but got: {}", s))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .with_context(|| format!("Invalid latitude in: {}", s))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .with_context(|| format!("Invalid longitude in: {}", s))?;
    Ok(LatLngDto { lat, lng })
}
