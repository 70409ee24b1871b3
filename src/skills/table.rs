use super::graph::GraphNode;

pub fn default_skill_nodes() -> Vec<GraphNode> {
    vec![
        GraphNode::new(".NET", 20.0, 20.0, &["C#", "Blazor", "Web API", "SQL"]),
        GraphNode::new("C#", 15.0, 40.0, &[".NET", "SQL"]),
        GraphNode::new("Blazor", 30.0, 35.0, &[".NET"]),
        GraphNode::new("Web API", 35.0, 15.0, &[".NET", "DevOps"]),
        GraphNode::new("SQL", 10.0, 65.0, &["C#", "Data Warehousing", "ETL"]),
        GraphNode::new("Python", 70.0, 75.0, &["ML", "Computer Vision", "PyTorch"]),
        GraphNode::new(
            "Computer Vision",
            85.0,
            65.0,
            &["Python", "ML", "LBP Analysis"],
        ),
        GraphNode::new("ML", 80.0, 85.0, &["Python", "Computer Vision"]),
        GraphNode::new("PyTorch", 90.0, 80.0, &["Python", "ML"]),
        GraphNode::new("LBP Analysis", 92.0, 55.0, &["Computer Vision"]),
        GraphNode::new("DevOps", 55.0, 20.0, &["Web API", "Agile"]),
        GraphNode::new("Agile", 65.0, 10.0, &["DevOps"]),
        GraphNode::new("ETL", 25.0, 80.0, &["SQL", "Data Warehousing"]),
        GraphNode::new("Data Warehousing", 40.0, 85.0, &["SQL", "ETL"]),
        GraphNode::new("LLM Integration", 75.0, 30.0, &["Python", "Web API"]),
    ]
}
