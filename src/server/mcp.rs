use crate::app::dto::*;
use crate::app::engine::RouteEngine;
use crate::domain::edge::EdgeId;
use rmcp::{
    Json, ServerHandler, ServiceExt, handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters, model::*, tool, tool_handler, tool_router,
    transport::stdio,
};
use tokio::task::spawn_blocking;

#[derive(Clone)]
pub struct MultipathMcpServer {
    engine: RouteEngine,
    tool_router: ToolRouter<Self>,
}

impl MultipathMcpServer {
    pub fn new(engine: RouteEngine) -> Self {
        Self {
            engine,
            tool_router: Self::tool_router(),
        }
    }

    pub async fn serve_stdio(self) -> anyhow::Result<()> {
        let service = self.serve(stdio()).await?;
        service.waiting().await?;
        Ok(())
    }
}

#[tool_router]
impl MultipathMcpServer {
    #[tool(
        description = "Resolve the shortest path between two selected edges (steps = [from_edge, to_edge])."
    )]
    async fn resolve_path(
        &self,
        params: Parameters<ResolveRequest>,
    ) -> Result<Json<ResolveResponse>, String> {
        let engine = self.engine.clone();
        let req = params.0;
        spawn_blocking(move || engine.resolve(req))
            .await
            .map_err(|e| format!("task join error: {e}"))?
            .map(Json)
            .map_err(|e| format!("{e:#}"))
    }

    #[tool(description = "Describe an edge: length, endpoints and adjacent edges.")]
    async fn edge_info(
        &self,
        params: Parameters<EdgeParams>,
    ) -> Result<Json<EdgeInfoResponse>, String> {
        self.engine
            .edge(params.0.id)
            .map(Json)
            .map_err(|e| format!("{e:#}"))
    }

    #[tool(description = "Measure the length in metres of a polyline given as lat/lng points.")]
    async fn measure_distance(
        &self,
        params: Parameters<MeasureRequest>,
    ) -> Result<Json<MeasureResponse>, String> {
        Ok(Json(self.engine.measure(params.0)))
    }

    #[tool(description = "Report the loaded graph file and its size.")]
    async fn health(&self) -> Result<Json<HealthResponse>, String> {
        self.engine
            .health()
            .map(Json)
            .map_err(|e| format!("{e:#}"))
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, rmcp::schemars::JsonSchema)]
pub struct EdgeParams {
    pub id: EdgeId,
}

#[tool_handler]
impl ServerHandler for MultipathMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Resolve shortest paths between selected edges of a trail network and measure distances."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
