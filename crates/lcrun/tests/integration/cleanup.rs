//! Runs leave the solution directory exactly as they found it

use lcrun::{RunError, Runner, TestInput};
use tokio::task::JoinSet;

use crate::fake_toolchain::FakeToolchains;
use crate::{fixture_source, install_fixture, listing};

const ALL_FIXTURES: [(&str, &str); 7] = [
    ("1.two-sum.py", "python3"),
    ("1.two-sum.js", "javascript"),
    ("1.two-sum.ts", "typescript"),
    ("1.two-sum.java", "java"),
    ("1.two-sum.cpp", "cpp"),
    ("1.two-sum.go", "golang"),
    ("1.two-sum.cs", "csharp"),
];

#[tokio::test]
async fn test_success_leaves_directory_unchanged() {
    let fakes = FakeToolchains::new();
    let runner = Runner::new(fakes.config());

    for (fixture, lang) in ALL_FIXTURES {
        let dir = tempfile::tempdir().unwrap();
        let path = install_fixture(dir.path(), fixture);
        let before = listing(dir.path());

        runner
            .execute(&path, lang, &TestInput::new("[1,2]"), &fixture_source(fixture))
            .await
            .unwrap_or_else(|e| panic!("{lang} run failed: {e}"));

        assert_eq!(listing(dir.path()), before, "{lang} left artifacts behind");
    }
}

#[tokio::test]
async fn test_toolchain_failure_leaves_directory_unchanged() {
    let fakes = FakeToolchains::new();
    let failing = fakes.script("failing", "echo 'syntax error' >&2; exit 2");
    let mut toolchains = fakes.working();
    toolchains.python = failing.clone();
    toolchains.javascript = failing.clone();
    toolchains.java = failing.clone();
    toolchains.cpp = failing.clone();
    toolchains.go = failing;
    let runner = Runner::new(fakes.config_with(toolchains));

    for (fixture, lang) in ALL_FIXTURES
        .into_iter()
        .filter(|(_, lang)| *lang != "csharp")
    {
        let dir = tempfile::tempdir().unwrap();
        let path = install_fixture(dir.path(), fixture);
        let before = listing(dir.path());

        let err = runner
            .execute(&path, lang, &TestInput::new("[1,2]"), &fixture_source(fixture))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Command failed with exit code 2: syntax error\n",
            "{lang}"
        );
        assert_eq!(listing(dir.path()), before, "{lang} left artifacts behind");
    }
}

#[tokio::test]
async fn test_start_failure_leaves_directory_unchanged() {
    let fakes = FakeToolchains::new();
    let mut toolchains = fakes.working();
    toolchains.go = fakes.missing();
    let runner = Runner::new(fakes.config_with(toolchains));

    let dir = tempfile::tempdir().unwrap();
    let path = install_fixture(dir.path(), "1.two-sum.go");
    let before = listing(dir.path());

    let err = runner
        .execute(&path, "golang", &TestInput::new("[1]"), &fixture_source("1.two-sum.go"))
        .await
        .unwrap_err();

    match &err {
        RunError::Toolchain(process) => assert!(process.is_start_failure()),
        other => panic!("expected a toolchain error, got {other}"),
    }
    assert!(err.to_string().contains("PATH"));
    assert_eq!(listing(dir.path()), before);
}

#[tokio::test]
async fn test_binary_removed_after_run() {
    let fakes = FakeToolchains::new();
    let runner = Runner::new(fakes.config());

    let dir = tempfile::tempdir().unwrap();
    let path = install_fixture(dir.path(), "1.two-sum.cpp");

    runner
        .execute(&path, "cpp", &TestInput::new("[1]"), &fixture_source("1.two-sum.cpp"))
        .await
        .unwrap();

    // The compiler's `-o` target existed during the run and is gone now
    let call = &fakes.invocations()[0];
    let binary = call.rsplit(' ').next().unwrap();
    assert!(binary.contains("1.two-sum.lcrun-"));
    assert!(!std::path::Path::new(binary).exists());
}

#[tokio::test]
async fn test_concurrent_runs_do_not_collide() {
    let fakes = FakeToolchains::new();
    let runner = Runner::new(fakes.config());

    let dir = tempfile::tempdir().unwrap();
    let path = install_fixture(dir.path(), "1.two-sum.py");
    let source = fixture_source("1.two-sum.py");
    let before = listing(dir.path());

    let mut runs = JoinSet::new();
    for i in 0..8 {
        let runner = runner.clone();
        let path = path.clone();
        let source = source.clone();
        runs.spawn(async move {
            let input = TestInput::new(format!("[{i}]"));
            let output = runner.execute(&path, "python3", &input, &source).await;
            (i, output)
        });
    }

    while let Some(joined) = runs.join_next().await {
        let (i, output) = joined.unwrap();
        assert_eq!(output.unwrap(), format!("python ran\n[{i}]"));
    }
    assert_eq!(fakes.invocations().len(), 8);
    assert_eq!(listing(dir.path()), before);
}
