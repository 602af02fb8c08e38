use bk_core::{LoadingRegistry, RouteKind};

pub fn run() -> anyhow::Result<()> {
    let registry = LoadingRegistry::builtin();
    let issues = registry.verify();

    if issues.is_empty() {
        println!(
            "ok: {} of {} routes have a loading view",
            registry.len(),
            RouteKind::all().len()
        );
        return Ok(());
    }

    for issue in &issues {
        println!("FAIL {issue}");
    }
    anyhow::bail!("{} loading view issue(s)", issues.len())
}
