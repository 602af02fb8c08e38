use anyhow::Context;
use bk_core::config::Config;
use bk_core::render::render_html;
use bk_core::{LoadingRegistry, RouteKind};
use serde_json::json;

use crate::OutputFormat;

pub fn run(config: &Config, target: &str, format: OutputFormat) -> anyhow::Result<()> {
    let registry = LoadingRegistry::builtin();

    // A leading slash means a URL path; anything else is a route id.
    let (kind, locale, id, tree) = if target.starts_with('/') {
        let (matched, tree) = registry
            .resolve_path(target, &config.locales)
            .with_context(|| format!("cannot resolve {target}"))?;
        (matched.kind, Some(matched.locale), matched.id, tree)
    } else {
        let kind: RouteKind = target.parse()?;
        (kind, None, None, registry.render(kind)?)
    };
    tracing::debug!(route = %kind, ?locale, ?id, "showing loading view");

    match format {
        OutputFormat::Tree => {
            println!("{} ({})", kind.pattern(), kind);
            print!("{tree}");
        }
        OutputFormat::Json => {
            let payload = json!({
                "route": kind,
                "locale": locale,
                "id": id,
                "nodes": tree.node_count(),
                "layout": tree,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Html => println!("{}", render_html(&tree, &config.skeleton)),
    }
    Ok(())
}
