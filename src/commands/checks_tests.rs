use super::*;

#[test]
fn lists_every_builtin_with_prerequisites() {
    let registry = CheckRegistry::builtin().unwrap();
    let rendered = render_checks(&registry);
    let lines: Vec<_> = rendered.lines().collect();

    assert_eq!(lines.len(), registry.len());
    assert!(lines[0].starts_with("compile         "));
    assert_eq!(
        lines[1],
        "style           Check code style [pre-commit: after compile]"
    );
    assert!(lines.iter().any(|line| line.starts_with("always-fail")));
}

#[test]
fn empty_registry_renders_nothing() {
    assert_eq!(render_checks(&CheckRegistry::new()), "");
}
