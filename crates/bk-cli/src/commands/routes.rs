use bk_core::LoadingRegistry;
use serde_json::{json, Value};

/// One JSON object per registered route.
pub fn entries(registry: &LoadingRegistry) -> anyhow::Result<Vec<Value>> {
    registry
        .routes()
        .into_iter()
        .map(|kind| -> anyhow::Result<Value> {
            let tree = registry.render(kind)?;
            Ok(json!({
                "route": kind,
                "pattern": kind.pattern(),
                "family": kind.family(),
                "has_id": kind.has_id(),
                "nodes": tree.node_count(),
                "primitives": tree.primitives(),
            }))
        })
        .collect()
}

pub fn run(json_output: bool) -> anyhow::Result<()> {
    let registry = LoadingRegistry::builtin();

    if json_output {
        let payload = entries(&registry)?;
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let width = registry
        .routes()
        .iter()
        .map(|k| k.pattern().len())
        .max()
        .unwrap_or(0);

    for kind in registry.routes() {
        let tree = registry.render(kind)?;
        println!(
            "{:<width$}  {:<8}  {}",
            kind.pattern(),
            kind.family().to_string(),
            tree.summary(),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bk_core::RouteKind;

    fn entry<'a>(entries: &'a [Value], route: &str) -> &'a Value {
        entries
            .iter()
            .find(|e| e["route"] == route)
            .unwrap_or_else(|| panic!("no entry for {route}"))
    }

    #[test]
    fn json_entries_cover_every_route() {
        let entries = entries(&LoadingRegistry::builtin()).unwrap();
        assert_eq!(entries.len(), RouteKind::all().len());
    }

    #[test]
    fn json_entries_flag_routes_with_an_id() {
        let entries = entries(&LoadingRegistry::builtin()).unwrap();
        assert_eq!(entry(&entries, "series_ranking")["has_id"], true);
        assert_eq!(entry(&entries, "team_detail")["has_id"], true);
        assert_eq!(entry(&entries, "team_new")["has_id"], false);
        assert_eq!(entry(&entries, "profile_edit")["has_id"], false);
    }

    #[test]
    fn json_entries_count_layout_nodes() {
        let entries = entries(&LoadingRegistry::builtin()).unwrap();
        // container + form
        assert_eq!(entry(&entries, "profile_edit")["nodes"], 2);
        // container + heading + table
        assert_eq!(entry(&entries, "series_ranking")["nodes"], 3);
        assert_eq!(entry(&entries, "series_ranking")["primitives"][1]["rows"], 10);
    }
}
