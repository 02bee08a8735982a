use comfy_table::{ContentArrangement, Table};

use bw_core::LocationGraph;

pub fn run(json: bool) -> Result<(), String> {
    let graph = LocationGraph::london();

    if json {
        let out = serde_json::to_string_pretty(&graph.view())
            .map_err(|e| format!("failed to serialize map: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Map", "Connections"]);

    for location in graph.locations() {
        let connections = graph
            .neighbors(location.id)
            .iter()
            .map(|n| n.code())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            location.id.code().to_string(),
            location.name.to_string(),
            format!("({}, {})", location.x, location.y),
            connections,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} locations", graph.locations().len());

    Ok(())
}
