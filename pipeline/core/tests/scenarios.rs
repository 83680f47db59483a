//! End-to-end collection runs against an in-memory metadata source.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use chrono::NaiveDate;
use pipeline::{run_collection, PipelineError, ReportPaths, SkipReason};
use serde_json::json;
use source::{Metadata, MetadataSource, SourceError};
use types::{AnonymizedEntry, Category};

/// Serves canned responses; unknown names are `NotFound`.
#[derive(Default)]
struct FixtureSource {
    responses: HashMap<String, Result<Metadata, SourceError>>,
}

impl FixtureSource {
    fn with(mut self, project: &str, response: Result<serde_json::Value, SourceError>) -> Self {
        let response = response.map(|value| match value {
            serde_json::Value::Object(map) => map,
            other => panic!("fixture metadata must be an object, got {}", other),
        });
        self.responses.insert(project.to_string(), response);
        self
    }

    fn describing(categories: &[Category]) -> Self {
        categories.iter().flat_map(|c| c.projects.iter()).fold(Self::default(), |source, p| {
            source.with(p, Ok(json!({"description": format!("About {}.", p), "total_supply": 100})))
        })
    }
}

#[async_trait::async_trait]
impl MetadataSource for FixtureSource {
    async fn fetch(&self, project: &str) -> Result<Metadata, SourceError> {
        self.responses
            .get(project)
            .cloned()
            .unwrap_or_else(|| Err(SourceError::NotFound(project.to_string())))
    }

    async fn list_projects(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.responses.keys().cloned().collect())
    }

    fn describe(&self) -> &str { "fixture://nft1000" }
}

fn categories(a: usize, b: usize) -> Vec<Category> {
    vec![
        Category::new("CATEGORY_A", (1..=a).map(|i| format!("Animal {}", i))),
        Category::new("CATEGORY_B", (1..=b).map(|i| format!("Art {}", i))),
    ]
}

fn paths(dir: &Path) -> ReportPaths {
    ReportPaths {
        student: dir.join("student_descriptions.txt"),
        key: dir.join("instructor_key.json"),
        log: dir.join("collection_metadata.txt"),
    }
}

fn at() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 15).and_then(|d| d.and_hms_opt(9, 30, 0)).expect("timestamp")
}

fn read_key(path: &Path) -> Vec<AnonymizedEntry> {
    let text = std::fs::read_to_string(path).expect("key file");
    serde_json::from_str(&text).expect("key parses")
}

#[tokio::test]
async fn full_run_writes_all_three_reports() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cats = categories(20, 19);
    let source = FixtureSource::describing(&cats);
    let paths = paths(dir.path());
    let mut console = Vec::new();

    let summary =
        run_collection(&source, &cats, &paths, at(), &mut console).await.expect("run succeeds");
    assert!(summary.is_complete());
    assert_eq!(summary.written, vec![paths.student.clone(), paths.key.clone(), paths.log.clone()]);

    // Key: one entry per project, fetch order, no duplicate codes
    let key = read_key(&paths.key);
    assert_eq!(key.len(), 39);
    assert_eq!(key[0].record.project_name, "Animal 1");
    assert_eq!(key[19].record.project_name, "Animal 20");
    assert_eq!(key[20].record.project_name, "Art 1");
    assert_eq!(key[38].record.project_name, "Art 19");
    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&paths.key).expect("key")).expect("json");
    assert!(raw[0].get("opensea_url").is_none(), "absent OpenSea link is omitted");
    assert_eq!(raw[0]["contract_address"], "");
    let codes: HashSet<&str> = key.iter().map(|e| e.code.as_str()).collect();
    assert_eq!(codes.len(), 39);
    assert_eq!(key[0].code, pipeline::generate_code("Animal 1", 1));
    assert_eq!(key[20].code, pipeline::generate_code("Art 1", 1));

    // Student file: every code exactly once, in key order
    let student = std::fs::read_to_string(&paths.student).expect("student file");
    assert_eq!(student.matches("CODE: ").count(), 39);
    let mut last = 0;
    for entry in &key {
        assert_eq!(student.matches(&entry.code).count(), 1, "code {} once", entry.code);
        let at = student.find(&format!("CODE: {}", entry.code)).expect("code block");
        assert!(at >= last, "student file out of order at {}", entry.code);
        last = at;
    }

    // Log counts agree with the key
    let log = std::fs::read_to_string(&paths.log).expect("log file");
    assert!(log.contains("Collection Date: 2025-01-15 09:30:00"));
    assert!(log.contains("Dataset Source: fixture://nft1000"));
    assert!(log.contains("Total Descriptions Collected: 39"));
    for name in ["CATEGORY_A", "CATEGORY_B"] {
        let count = key.iter().filter(|e| e.record.category == name).count();
        assert!(log.contains(&format!("{}: {} descriptions", name, count)));
    }
    assert!(log.contains("CATEGORY_A: 20 descriptions"));
    assert!(log.contains("CATEGORY_B: 19 descriptions"));

    // Aggregate statistics match a direct computation
    let lengths: Vec<usize> = key.iter().map(|e| e.record.description.chars().count()).collect();
    let total: usize = lengths.iter().sum();
    assert!(log.contains(&format!("Total characters: {}\n", total)));
    assert!(log.contains(&format!("Average length: {} characters", total / lengths.len())));
    let shortest = lengths.iter().min().expect("min");
    let longest = lengths.iter().max().expect("max");
    assert!(log.contains(&format!("Shortest: {} characters", shortest)));
    assert!(log.contains(&format!("Longest: {} characters", longest)));

    let console = String::from_utf8(console).expect("utf8");
    assert!(console.contains("Fetching CATEGORY_A projects..."));
    assert_eq!(console.matches("✓ ").count(), 39 + 3);
}

#[tokio::test]
async fn access_denied_project_only_reaches_console() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cats = vec![Category::new("CATEGORY_A", ["Open Apes", "Gated Apes", "More Apes"])];
    let source = FixtureSource::describing(&cats)
        .with("Gated Apes", Err(SourceError::AccessDenied("401 Unauthorized".to_string())));
    let paths = paths(dir.path());
    let mut console = Vec::new();

    let summary = run_collection(&source, &cats, &paths, at(), &mut console).await.expect("run");
    assert_eq!(summary.collection.entries.len(), 2);
    assert_eq!(summary.collection.skipped.len(), 1);
    assert_eq!(summary.collection.skipped[0].index, 2);
    assert!(matches!(
        summary.collection.skipped[0].reason,
        SkipReason::Failed(SourceError::AccessDenied(_))
    ));

    // Remaining projects keep their original positions in code generation
    assert_eq!(summary.collection.entries[1].code, pipeline::generate_code("More Apes", 3));

    for path in [&paths.student, &paths.key, &paths.log] {
        let text = std::fs::read_to_string(path).expect("report");
        assert!(!text.contains("Gated Apes"), "{} leaks the skipped project", path.display());
    }
    let console = String::from_utf8(console).expect("utf8");
    assert!(console.contains("Gated Apes"));
    assert!(console.contains("[ERROR: Access denied: 401 Unauthorized]"));
}

#[tokio::test]
async fn empty_description_is_skipped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cats = vec![Category::new("CATEGORY_B", ["Blank Art", "Real Art", "Spaces Art"])];
    let source = FixtureSource::describing(&cats)
        .with("Blank Art", Ok(json!({"description": "", "total_supply": 1})))
        .with("Spaces Art", Ok(json!({"description": "   "})));
    let paths = paths(dir.path());
    let mut console = Vec::new();

    let summary = run_collection(&source, &cats, &paths, at(), &mut console).await.expect("run");
    let key = read_key(&paths.key);
    assert_eq!(key.len(), 1);
    assert_eq!(key[0].record.project_name, "Real Art");
    assert_eq!(
        summary.collection.skipped.iter().map(|s| &s.reason).collect::<Vec<_>>(),
        vec![&SkipReason::NoDescription, &SkipReason::NoDescription]
    );
    let console = String::from_utf8(console).expect("utf8");
    assert!(console.contains("[NO DESCRIPTION]"));
}

#[tokio::test]
async fn suggestions_are_surfaced_verbatim() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cats = vec![Category::new("CATEGORY_A", ["Coll Cats", "Lazy Lions"])];
    let source = FixtureSource::describing(&cats).with(
        "Coll Cats",
        Err(SourceError::Ambiguous {
            query: "Coll Cats".to_string(),
            suggestions: vec!["Cool Cats".to_string(), "Cool Cats Pets".to_string()],
        }),
    );
    let mut console = Vec::new();

    let summary =
        run_collection(&source, &cats, &paths(dir.path()), at(), &mut console).await.expect("run");
    assert_eq!(summary.collection.entries.len(), 1);
    let console = String::from_utf8(console).expect("utf8");
    assert!(console.contains("?  1. Coll Cats"));
    assert!(console.contains("[SUGGESTIONS: Cool Cats, Cool Cats Pets]"));
}

#[tokio::test]
async fn nothing_collected_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cats = categories(2, 2);
    let source = FixtureSource::default();
    let paths = paths(dir.path());
    let mut console = Vec::new();

    let err = run_collection(&source, &cats, &paths, at(), &mut console)
        .await
        .expect_err("zero records aborts");
    assert!(matches!(err, PipelineError::NothingCollected));
    assert!(!paths.student.exists());
    assert!(!paths.key.exists());
    assert!(!paths.log.exists());

    let console = String::from_utf8(console).expect("utf8");
    assert!(console.contains("Possible issues:"));
    assert!(console.contains("authentication"));
}

#[tokio::test]
async fn one_failed_report_does_not_stop_the_others() {
    let dir = tempfile::tempdir().expect("tempdir");
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").expect("write");

    let cats = categories(1, 1);
    let source = FixtureSource::describing(&cats);
    let paths = ReportPaths {
        student: dir.path().join("student.txt"),
        key: blocker.join("key.json"),
        log: dir.path().join("log.txt"),
    };
    let mut console = Vec::new();

    let summary = run_collection(&source, &cats, &paths, at(), &mut console).await.expect("run");
    assert!(!summary.is_complete());
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].path(), paths.key.as_path());
    assert_eq!(summary.written, vec![paths.student.clone(), paths.log.clone()]);
    assert!(paths.student.exists());
    assert!(paths.log.exists());
}
