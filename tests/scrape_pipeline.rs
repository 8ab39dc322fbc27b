// tests/scrape_pipeline.rs
//
// Drives the whole pipeline against canned pages and a throwaway SQLite file.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use pl_scrape::config::options::ScrapeOptions;
use pl_scrape::data::Library;
use pl_scrape::progress::LogProgress;
use pl_scrape::scrape::{ self, ScrapeOutcome, MSG_DONE, MSG_SKIPPING, MSG_STARTING };
use pl_scrape::source::FixturePages;
use pl_scrape::store::{ self, Store, StoreStatus };
use pl_scrape::Error;

const INDEX: &str = "https://publiclibraries.com/state/";
const ILLINOIS: &str = "https://publiclibraries.com/state/illinois/";
const OHIO: &str = "https://publiclibraries.com/state/ohio/";

fn tmp_db(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("pl_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p.push("libraries_data.db");
    p
}

fn opts(db: &PathBuf) -> ScrapeOptions {
    ScrapeOptions::default().with_db_path(db).with_pause(Duration::ZERO)
}

fn index_page(hrefs: &[&str]) -> String {
    let links: String = hrefs.iter().map(|h| format!(r#"<li><a href="{h}">x</a></li>"#)).collect();
    format!("<html><body><ul>{links}</ul><a href=\"/about/\">About</a></body></html>")
}

fn state_page(name: &str, rows: &[[&str; 5]]) -> String {
    let body: String = rows
        .iter()
        .map(|r| {
            let tds: String = r.iter().map(|c| format!("<td>{c}</td>")).collect();
            format!("<tr>{tds}</tr>")
        })
        .collect();
    format!(
        "<html><body><h1>{name} Public Libraries</h1>\
         <table id=\"libraries\"><thead><tr><th>City</th></tr></thead>\
         <tbody>{body}</tbody></table></body></html>"
    )
}

const SPRINGFIELD: [&str; 5] =
    ["Springfield", "Springfield Public Library", "123 Main St", "62701", "217-555-0100"];

fn springfield_site() -> FixturePages {
    FixturePages::new()
        .with_page(INDEX, index_page(&["/state/illinois/"]))
        .with_page(ILLINOIS, state_page("Illinois", &[SPRINGFIELD]))
}

#[test]
fn single_row_yields_one_state_and_one_library() {
    let db = tmp_db("springfield");
    let mut site = springfield_site();
    let mut prog = LogProgress::default();

    let out = scrape::run(&opts(&db), |_| Ok(&mut site), Some(&mut prog));
    let ScrapeOutcome::Completed(summary) = out else { panic!("expected Completed, got {out:?}") };
    assert_eq!(summary.states, 1);
    assert_eq!(summary.libraries, 1);
    assert!(!summary.resumed);
    assert_eq!(site.fetched(), &[INDEX, ILLINOIS]);

    let store = Store::open(&db).unwrap();
    assert_eq!(store.state_names().unwrap(), vec!["Illinois"]);
    assert_eq!(store.counts().unwrap(), (1, 1));
    assert_eq!(
        store.libraries_for("Illinois").unwrap(),
        vec![Library::from_cells(SPRINGFIELD.map(String::from))]
    );
    assert_eq!(store::status(&db).unwrap(), StoreStatus::Complete);

    assert_eq!(prog.lines.first().map(String::as_str), Some(MSG_STARTING));
    assert!(prog.lines.iter().any(|l| l == "Scraping data for Illinois..."));
    assert_eq!(prog.lines.last().map(String::as_str), Some(MSG_DONE));
    assert_eq!((prog.done, prog.total), (1, 1));
}

#[test]
fn empty_phone_cell_becomes_placeholder() {
    let db = tmp_db("empty_phone");
    let mut site = FixturePages::new()
        .with_page(INDEX, index_page(&["/state/ohio/"]))
        .with_page(OHIO, state_page("Ohio", &[["Akron", "Akron Main", "60 S High St", "44326", ""]]));

    assert!(matches!(scrape::run(&opts(&db), |_| Ok(&mut site), None), ScrapeOutcome::Completed(_)));

    let libs = Store::open(&db).unwrap().libraries_for("Ohio").unwrap();
    assert_eq!(libs.len(), 1);
    assert_eq!(libs[0].phone, "Not Available");
    assert_eq!(libs[0].city, "Akron");
}

#[test]
fn rows_without_five_cells_are_dropped() {
    let db = tmp_db("ragged");
    let page = "<html><body><h1>Ohio Public Libraries</h1><table id=\"libraries\"><tbody>\
        <tr><td>Akron</td><td>Akron Main</td><td>60 S High St</td><td>44326</td><td>330-643-9000</td></tr>\
        <tr><td colspan=\"5\">Advertisement</td></tr>\
        <tr><td>a</td><td>b</td><td>c</td><td>d</td><td>e</td><td>f</td></tr>\
        </tbody></table></body></html>";
    let mut site = FixturePages::new()
        .with_page(INDEX, index_page(&["/state/ohio/"]))
        .with_page(OHIO, page);

    scrape::run(&opts(&db), |_| Ok(&mut site), None);
    let libs = Store::open(&db).unwrap().libraries_for("Ohio").unwrap();
    assert_eq!(libs.len(), 1);
    assert_eq!(libs[0].phone, "330-643-9000");
}

#[test]
fn complete_store_skips_without_launching_or_fetching() {
    let db = tmp_db("complete");
    let mut site = springfield_site();
    scrape::run(&opts(&db), |_| Ok(&mut site), None);
    let before = Store::open(&db).unwrap().counts().unwrap();

    let mut launched = false;
    let mut again = springfield_site();
    let mut prog = LogProgress::default();
    let out = scrape::run(
        &opts(&db),
        |_| {
            launched = true;
            Ok(&mut again)
        },
        Some(&mut prog),
    );

    assert!(matches!(out, ScrapeOutcome::Skipped));
    assert!(!launched);
    assert_eq!(again.fetches(), 0);
    assert_eq!(Store::open(&db).unwrap().counts().unwrap(), before);
    assert_eq!(prog.lines, vec![MSG_SKIPPING]);
}

#[test]
fn launch_error_is_reported_as_failed() {
    let db = tmp_db("no_browser");
    let mut prog = LogProgress::default();
    let out = scrape::run::<FixturePages, _>(
        &opts(&db),
        |_| Err(Error::browser("no chrome binary")),
        Some(&mut prog),
    );

    assert!(out.is_failed());
    assert!(prog.lines.last().unwrap().starts_with("❌ Scraping failed:"));
    // The file exists but never completed, so the next run starts over.
    assert_eq!(store::status(&db).unwrap(), StoreStatus::Incomplete);
}

#[test]
fn failure_keeps_committed_states_and_resume_adds_no_duplicates() {
    let db = tmp_db("resume");
    let index = index_page(&["/state/illinois/", "/state/ohio/"]);

    // Ohio is unreachable on the first run.
    let mut first = FixturePages::new()
        .with_page(INDEX, index.clone())
        .with_page(ILLINOIS, state_page("Illinois", &[SPRINGFIELD]));
    let out = scrape::run(&opts(&db), |_| Ok(&mut first), None);
    assert!(matches!(out, ScrapeOutcome::Failed(Error::MissingPage(ref u)) if u == OHIO));
    assert_eq!(store::status(&db).unwrap(), StoreStatus::Incomplete);
    assert_eq!(Store::open(&db).unwrap().counts().unwrap(), (1, 1));

    let mut second = FixturePages::new()
        .with_page(INDEX, index)
        .with_page(ILLINOIS, state_page("Illinois", &[SPRINGFIELD]))
        .with_page(OHIO, state_page("Ohio", &[["Akron", "Akron Main", "60 S High St", "44326", "330-643-9000"]]));
    let mut prog = LogProgress::default();
    let out = scrape::run(&opts(&db), |_| Ok(&mut second), Some(&mut prog));
    assert_eq!((prog.skipped, prog.done), (1, 1));
    let ScrapeOutcome::Completed(summary) = out else { panic!("expected Completed, got {out:?}") };
    assert!(summary.resumed);
    assert_eq!(summary.already_saved, 1);
    assert_eq!(summary.libraries, 1);

    let store = Store::open(&db).unwrap();
    assert_eq!(store.counts().unwrap(), (2, 2));
    assert_eq!(store.libraries_for("Illinois").unwrap().len(), 1);
    assert_eq!(store::status(&db).unwrap(), StoreStatus::Complete);
}

#[test]
fn state_without_libraries_has_empty_result() {
    let db = tmp_db("empty_state");
    let mut site = FixturePages::new()
        .with_page(INDEX, index_page(&["/state/ohio/", "/state/illinois/"]))
        .with_page(OHIO, state_page("Ohio", &[]))
        .with_page(ILLINOIS, state_page("Illinois", &[SPRINGFIELD]));

    scrape::run(&opts(&db), |_| Ok(&mut site), None);

    let store = Store::open(&db).unwrap();
    // Index order is kept.
    assert_eq!(store.state_names().unwrap(), vec!["Ohio", "Illinois"]);
    assert!(store.libraries_for("Ohio").unwrap().is_empty());
    assert!(store.libraries_for("Nowhere").unwrap().is_empty());
}

#[test]
fn every_library_points_at_its_heading_state() {
    let db = tmp_db("fk");
    let mut site = FixturePages::new()
        .with_page(INDEX, index_page(&["/state/illinois/", "/state/ohio/", "/state/illinois/"]))
        .with_page(ILLINOIS, state_page("Illinois", &[SPRINGFIELD, SPRINGFIELD]))
        .with_page(OHIO, state_page("Ohio", &[["Akron", "Akron Main", "60 S High St", "44326", ""]]));

    scrape::run(&opts(&db), |_| Ok(&mut site), None);
    // Duplicate index links are visited once.
    assert_eq!(site.fetches(), 3);

    let conn = rusqlite::Connection::open(&db).unwrap();
    let orphans: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM libraries l LEFT JOIN states s ON s.id = l.state_id WHERE s.id IS NULL",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(orphans, 0);

    let illinois: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM libraries l JOIN states s ON s.id = l.state_id WHERE s.state_name = 'Illinois'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    // No uniqueness on libraries: identical rows are both kept.
    assert_eq!(illinois, 2);
}

#[test]
fn index_without_state_links_fails_and_stays_retryable() {
    let db = tmp_db("outage");
    let mut down = FixturePages::new()
        .with_page(INDEX, "<html><body><p>Service unavailable</p></body></html>");

    let out = scrape::run(&opts(&db), |_| Ok(&mut down), None);
    assert!(matches!(out, ScrapeOutcome::Failed(Error::MissingElement { ref url, .. }) if url == INDEX));
    assert_eq!(store::status(&db).unwrap(), StoreStatus::Incomplete);

    // Site is back: the next run scrapes instead of skipping.
    let mut up = springfield_site();
    let out = scrape::run(&opts(&db), |_| Ok(&mut up), None);
    assert!(matches!(out, ScrapeOutcome::Completed(_)));
    assert_eq!(Store::open(&db).unwrap().counts().unwrap(), (1, 1));
}
