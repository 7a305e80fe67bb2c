mod common;

use common::fixtures;
use common::{Project, TestResult, in_memory_pipeline, index_links, init_logger};
use serde_json::json;
use shelfplot::{InMemoryArtifactStore, PipelineBuilder, PipelineError};
use std::collections::HashSet;
use std::fs;
use std::sync::Arc;

#[test]
fn test_partial_record_exports_only_present_dimensions() -> TestResult {
    init_logger();
    let project = Project::new(
        &json!([fixtures::movies_record("watched")]),
        &json!([]),
        &json!([]),
        &json!({}),
    )?;

    let report = project.pipeline()?.run()?;

    assert_eq!(report.successes().count(), 2);
    assert!(report.failures().next().is_none());
    // The missing actor list and the three missing advanced sections.
    assert_eq!(report.skipped.len(), 4);

    assert_eq!(
        project.output_files()?,
        vec![
            "index.html",
            "movies_watched_create_time.html",
            "movies_watched_director_top5.html",
        ]
    );

    let index = report.index.as_ref().map_err(|e| e.clone())?;
    let hrefs: Vec<&str> = index.entries.iter().map(|e| e.href.as_str()).collect();
    assert_eq!(
        hrefs,
        vec!["movies_watched_create_time.html", "movies_watched_director_top5.html"]
    );

    let page = project.read_output("index.html")?;
    assert_eq!(index_links(&page), hrefs);
    assert!(page.contains("watched - Creation time"));
    assert!(page.contains("watched - Director Top 5"));
    Ok(())
}

#[test]
fn test_broken_dimension_keeps_sibling_charts() -> TestResult {
    init_logger();
    let project = Project::new(
        &json!([fixtures::movies_record_with_broken_actor("watched")]),
        &json!([]),
        &json!([]),
        &fixtures::advanced_document(),
    )?;

    let report = project.pipeline()?.run()?;

    assert_eq!(report.skipped.len(), 1);
    let failure = report.skipped[0].to_string();
    assert!(
        failure.starts_with("movies/watched/actor: Field 'actor.top_5' could not be read"),
        "{failure}"
    );
    assert!(report.failures().next().is_none());
    assert_eq!(
        project.output_files()?,
        vec![
            "advanced_consumption_speed.html",
            "advanced_interest_cycle.html",
            "advanced_rating_trends.html",
            "index.html",
            "movies_watched_create_time.html",
            "movies_watched_director_top5.html",
        ]
    );
    Ok(())
}

#[test]
fn test_chart_page_embeds_figure() -> TestResult {
    init_logger();
    let project = Project::new(
        &json!([fixtures::movies_record("watched")]),
        &json!([]),
        &json!([]),
        &json!({}),
    )?;
    project.pipeline()?.run()?;

    let page = project.read_output("movies_watched_create_time.html")?;
    assert!(page.contains("<title>watched - Creation time</title>"));
    assert!(page.contains("Plotly.newPlot(\"movies-watched-create-time\""));
    assert!(page.contains("\"barmode\":\"group\""));
    assert!(page.contains("\"Q1\""));
    Ok(())
}

#[test]
fn test_missing_section_does_not_block_other_sections() -> TestResult {
    init_logger();
    let project = Project::new(
        &json!([]),
        &json!([]),
        &json!([]),
        &fixtures::advanced_without_consumption_speed(),
    )?;

    let report = project.pipeline()?.run()?;

    assert_eq!(report.skipped.len(), 1);
    assert_eq!(
        report.skipped[0].to_string(),
        "advanced/consumption_speed: Section 'consumption_speed' is missing from the advanced analysis document"
    );
    assert_eq!(
        project.output_files()?,
        vec![
            "advanced_interest_cycle.html",
            "advanced_rating_trends.html",
            "index.html",
        ]
    );
    Ok(())
}

#[test]
fn test_failed_export_is_left_out_of_index() -> TestResult {
    init_logger();
    let store = Arc::new(InMemoryArtifactStore::new());
    store.reject("movies_watched_director_top5.html");
    let pipeline = in_memory_pipeline(
        json!([fixtures::full_movies_record("watched")]),
        fixtures::advanced_document(),
        store.clone(),
    )?;

    let report = pipeline.run()?;

    let failed: Vec<&str> = report.failures().map(|r| r.output_id.as_str()).collect();
    assert_eq!(failed, vec!["movies_watched_director_top5"]);
    assert_eq!(
        store.write_order(),
        vec![
            "movies_watched_create_time.html",
            "movies_watched_actor_top5.html",
            "advanced_rating_trends.html",
            "advanced_interest_cycle.html",
            "advanced_consumption_speed.html",
            "index.html",
        ]
    );

    let page = store.get("index.html").ok_or("index was not written")?;
    let page = String::from_utf8(page.to_vec())?;
    assert_eq!(
        index_links(&page),
        vec![
            "movies_watched_create_time.html",
            "movies_watched_actor_top5.html",
            "advanced_rating_trends.html",
            "advanced_interest_cycle.html",
            "advanced_consumption_speed.html",
        ]
    );
    Ok(())
}

#[test]
fn test_rerun_is_byte_identical() -> TestResult {
    init_logger();
    let project = Project::new(
        &json!([fixtures::full_movies_record("watched")]),
        &json!([fixtures::books_record("read")]),
        &json!([fixtures::games_record("played")]),
        &fixtures::advanced_document(),
    )?;

    project.pipeline()?.run()?;
    let first = project.snapshot()?;

    project.pipeline()?.run()?;
    let second = project.snapshot()?;

    assert_eq!(first.len(), 12);
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_index_replaces_previous_page() -> TestResult {
    init_logger();
    let project = Project::new(
        &json!([fixtures::movies_record("watched")]),
        &json!([]),
        &json!([]),
        &json!({}),
    )?;
    fs::create_dir_all(project.output_dir())?;
    fs::write(
        project.output_dir().join("index.html"),
        "<a href=\"stale.html\">stale</a>",
    )?;

    project.pipeline()?.run()?;

    let page = project.read_output("index.html")?;
    assert!(!page.contains("stale"));
    assert_eq!(index_links(&page).len(), 2);
    Ok(())
}

#[test]
fn test_unreadable_input_is_fatal() -> TestResult {
    init_logger();
    let project = Project::new(&json!([]), &json!([]), &json!([]), &json!({}))?;
    fs::remove_file(
        project
            .root()
            .join("data/eda_results/summary_books_results.json"),
    )?;

    let result = project.pipeline()?.run();

    assert!(matches!(result, Err(PipelineError::Source(_))));
    assert!(!project.output_dir().exists());
    Ok(())
}

#[test]
fn test_output_ids_are_unique() -> TestResult {
    init_logger();
    // Two sheets with the same name collide on every chart they produce.
    let project = Project::new(
        &json!([
            fixtures::movies_record("watched"),
            fixtures::movies_record("watched")
        ]),
        &json!([fixtures::books_record("read")]),
        &json!([fixtures::games_record("played")]),
        &fixtures::advanced_document(),
    )?;

    let report = project.pipeline()?.run()?;

    let ids: Vec<&str> = report.exports.iter().map(|r| r.output_id.as_str()).collect();
    let unique: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(ids.len(), unique.len());

    let duplicates = report
        .skipped
        .iter()
        .filter(|f| f.error.to_string().contains("already used"))
        .count();
    assert_eq!(duplicates, 2);
    Ok(())
}

#[test]
fn test_unavailable_output_location_fails_every_chart() -> TestResult {
    init_logger();
    let project = Project::new(
        &json!([fixtures::movies_record("watched")]),
        &json!([]),
        &json!([]),
        &json!({}),
    )?;
    fs::write(project.root().join("blocker"), "not a directory")?;

    let report = PipelineBuilder::new()
        .with_project_root(project.root())
        .with_output_dir("blocker/output_html")
        .build()?
        .run()?;

    assert_eq!(report.successes().count(), 0);
    assert_eq!(report.failures().count(), 2);
    for record in report.failures() {
        let error = record.error().ok_or("failure without error")?;
        assert!(error.starts_with("Output location unavailable"), "{error}");
    }
    assert!(report.index.is_err());
    Ok(())
}

#[test]
fn test_unsafe_sheet_name_fails_only_its_charts() -> TestResult {
    init_logger();
    let project = Project::new(
        &json!([
            fixtures::movies_record("../escape"),
            fixtures::movies_record("watched")
        ]),
        &json!([]),
        &json!([]),
        &json!({}),
    )?;

    let report = project.pipeline()?.run()?;

    let failed: Vec<&str> = report.failures().map(|r| r.output_id.as_str()).collect();
    assert_eq!(
        failed,
        vec![
            "movies_../escape_create_time",
            "movies_../escape_director_top5"
        ]
    );
    assert_eq!(report.successes().count(), 2);
    assert!(!project.root().join("escape_create_time.html").exists());
    Ok(())
}
