use kogen_core::{emit, plan, GenError, GeneratorConfig, RouteTable, TestFramework, ViewSpec};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ROUTES: &str = "'use strict'\n\nmodule.exports = {\n  '/': 'home'\n}\n";

fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("routes.js"), ROUTES).unwrap();
    tmp
}

fn config(use_require_syntax: bool, test_framework: TestFramework) -> GeneratorConfig {
    GeneratorConfig {
        use_require_syntax,
        test_framework,
    }
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

// ── Full view ───────────────────────────────────────────────────────

#[test]
fn profile_view_with_mocha_and_require_syntax() {
    let tmp = project();
    let spec = ViewSpec::new("profile", "/profile", false);

    let report = emit(tmp.path(), &spec, &config(true, TestFramework::Mocha), false).unwrap();

    assert_eq!(report.files.len(), 4);
    let dir = "web_modules/views/profile";
    for file in ["index.js", "profile.html", "profile.js", "profile.test.js"] {
        assert!(tmp.path().join(dir).join(file).is_file(), "missing {file}");
    }

    let view = read(tmp.path(), "web_modules/views/profile/profile.js");
    assert!(view.contains("class Profile {"));
    assert!(view.contains("module.exports = Profile"));

    let test = read(tmp.path(), "web_modules/views/profile/profile.test.js");
    assert!(test.contains("const { expect } = require('chai')"));

    let routes = read(tmp.path(), "routes.js");
    assert_eq!(
        routes,
        "'use strict'\n\nmodule.exports = {\n  '/': 'home',\n  '/profile': 'profile'\n}\n"
    );
}

#[test]
fn module_dialect_is_not_mixed() {
    let tmp = project();
    let spec = ViewSpec::new("profile", "/profile", false);

    let report = emit(tmp.path(), &spec, &config(false, TestFramework::Tape), false).unwrap();

    for file in &report.files {
        let contents = fs::read_to_string(tmp.path().join(file)).unwrap();
        if file.extension().is_some_and(|ext| ext == "js") {
            assert!(!contents.contains("require("), "{} uses require", file.display());
            assert!(!contents.contains("module.exports"), "{} uses module.exports", file.display());
        }
    }
}

#[test]
fn require_dialect_is_not_mixed() {
    let tmp = project();
    let spec = ViewSpec::new("profile", "/profile", false);

    let report = emit(tmp.path(), &spec, &config(true, TestFramework::Tape), false).unwrap();

    for file in &report.files {
        let contents = fs::read_to_string(tmp.path().join(file)).unwrap();
        if file.extension().is_some_and(|ext| ext == "js") {
            assert!(!contents.contains("import "), "{} uses import", file.display());
            assert!(!contents.contains("export default"), "{} uses export", file.display());
        }
    }
}

// ── File counts ─────────────────────────────────────────────────────

#[test]
fn template_only_writes_two_files() {
    let tmp = project();
    let spec = ViewSpec::new("about", "/about", true);

    let report = emit(tmp.path(), &spec, &config(false, TestFramework::Mocha), false).unwrap();

    assert_eq!(report.files.len(), 2);
    assert!(tmp.path().join("web_modules/views/about/index.js").is_file());
    assert!(tmp.path().join("web_modules/views/about/about.html").is_file());
    assert!(!tmp.path().join("web_modules/views/about/about.js").exists());
}

#[test]
fn no_test_framework_writes_three_files() {
    let tmp = project();
    let spec = ViewSpec::new("about", "/about", false);

    let report = emit(tmp.path(), &spec, &config(false, TestFramework::None), false).unwrap();

    assert_eq!(report.files.len(), 3);
    assert!(!tmp.path().join("web_modules/views/about/about.test.js").exists());
}

#[test]
fn unknown_test_framework_still_writes_test() {
    let tmp = project();
    let spec = ViewSpec::new("about", "/about", false);

    let report = emit(
        tmp.path(),
        &spec,
        &config(false, TestFramework::Other("jest".into())),
        false,
    )
    .unwrap();

    assert_eq!(report.files.len(), 4);
}

// ── Route table ─────────────────────────────────────────────────────

#[test]
fn repeated_route_is_duplicated() {
    let tmp = project();
    let cfg = config(false, TestFramework::None);

    emit(tmp.path(), &ViewSpec::new("a", "/same", true), &cfg, false).unwrap();
    emit(tmp.path(), &ViewSpec::new("b", "/same", true), &cfg, false).unwrap();

    let table = RouteTable::parse(read(tmp.path(), "routes.js")).unwrap();
    assert_eq!(table.len(), 3);
    let same: Vec<_> = table
        .entries()
        .iter()
        .filter(|e| e.route == "/same")
        .map(|e| e.view.as_str())
        .collect();
    assert_eq!(same, vec!["a", "b"]);
}

#[test]
fn missing_routes_file_errors() {
    let tmp = TempDir::new().unwrap();
    let spec = ViewSpec::new("profile", "/profile", false);

    let err = emit(tmp.path(), &spec, &GeneratorConfig::default(), false).unwrap_err();
    assert!(matches!(err, GenError::RoutesNotFound(_)));
    assert!(!tmp.path().join("web_modules").exists());
}

#[test]
fn malformed_routes_file_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("routes.js"), "export default {}\n").unwrap();
    let spec = ViewSpec::new("profile", "/profile", false);

    let err = emit(tmp.path(), &spec, &GeneratorConfig::default(), false).unwrap_err();
    assert!(matches!(err, GenError::Patch(_)));
    assert_eq!(read(tmp.path(), "routes.js"), "export default {}\n");
    assert!(!tmp.path().join("web_modules").exists());
}

#[test]
fn empty_name_rejected() {
    let tmp = project();
    let spec = ViewSpec::new("", "/x", false);

    let err = emit(tmp.path(), &spec, &GeneratorConfig::default(), false).unwrap_err();
    assert!(matches!(err, GenError::MissingName));
    assert_eq!(read(tmp.path(), "routes.js"), ROUTES);
}

#[test]
fn empty_route_accepted() {
    let tmp = project();
    let spec = ViewSpec::new("blank", "", true);

    emit(tmp.path(), &spec, &GeneratorConfig::default(), false).unwrap();

    assert!(read(tmp.path(), "routes.js").contains("  '': 'blank'\n"));
}

// ── Conflicts ───────────────────────────────────────────────────────

#[test]
fn existing_view_file_is_conflict() {
    let tmp = project();
    let spec = ViewSpec::new("profile", "/profile", true);
    let dir = tmp.path().join("web_modules/views/profile");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("profile.html"), "<p>mine</p>\n").unwrap();

    let err = emit(tmp.path(), &spec, &GeneratorConfig::default(), false).unwrap_err();
    assert!(matches!(err, GenError::Conflict(_)));
    assert_eq!(fs::read_to_string(dir.join("profile.html")).unwrap(), "<p>mine</p>\n");
    assert_eq!(read(tmp.path(), "routes.js"), ROUTES);
}

#[test]
fn force_overwrites_existing_files() {
    let tmp = project();
    let spec = ViewSpec::new("profile", "/profile", true);
    let dir = tmp.path().join("web_modules/views/profile");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("profile.html"), "<p>mine</p>\n").unwrap();

    emit(tmp.path(), &spec, &GeneratorConfig::default(), true).unwrap();

    let html = fs::read_to_string(dir.join("profile.html")).unwrap();
    assert!(html.contains(r#"data-route="/profile""#));
}

#[test]
fn plan_does_not_touch_disk() {
    let tmp = project();
    let spec = ViewSpec::new("profile", "/profile", false);

    let plan = plan(tmp.path(), &spec, &config(true, TestFramework::Mocha)).unwrap();

    assert_eq!(plan.files.len(), 4);
    assert!(plan.routes.contents.contains("'/profile': 'profile'"));
    assert_eq!(read(tmp.path(), "routes.js"), ROUTES);
    assert!(!tmp.path().join("web_modules").exists());
}
