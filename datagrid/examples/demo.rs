//! End-to-end walkthrough: build a table, filter it, click an action,
//! export the visible rows.

use std::fs::File;
use std::sync::Arc;

use chrono::TimeZone;
use chrono::Utc;
use datagrid::{
    ActionCell, DataGrid, ExportOptions, FileSink, HandlerRegistry, LinkCell, RuleSet,
    TableConfig, Value,
};
use griddom::{Document, Element, Event};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() {
    let log_file = File::create("datagrid-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let registry = HandlerRegistry::new();
    registry.register("approve", |row, index| {
        println!("approve({:?}, {index})", row.first());
    });
    registry.register_checkbox("approve", |row, index, checked| {
        println!("approveCheckbox({:?}, {index}, {checked})", row.first());
    });

    let signup = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let last_seen = Utc.with_ymd_and_hms(2024, 6, 3, 14, 45, 0).unwrap();

    let config = TableConfig::new()
        .container("app")
        .headings(["Name", "Internal Id", "Active", "Signed Up", "Last Seen", "Profile", ""])
        .data(vec![
            vec![
                Value::from("Alice"),
                Value::from(101i64),
                Value::from(true),
                Value::from(signup),
                Value::from(last_seen),
                Value::from(LinkCell::new("https://example.com/alice")),
                Value::from(ActionCell::new("approve").label("Approve").checkbox(false, "done")),
            ],
            vec![
                Value::from("Bob"),
                Value::from(102i64),
                Value::from(false),
                Value::from(signup),
                Value::Null,
                Value::from(LinkCell::new("https://example.com/bob")),
                Value::from(ActionCell::new("approve").label("Approve").checkbox(false, "done")),
            ],
        ])
        .hide("Internal Id")
        .rules(RuleSet::new().heading("Name", |value, _, _, _| match value {
            Value::String(s) => Ok(Value::String(s.to_uppercase())),
            other => Ok(other.clone()),
        }))
        .export(ExportOptions::enabled().filename("users.csv"));

    let mut doc = Document::with_root(Element::box_().id("root").child(Element::box_().id("app")));
    let mut grid = DataGrid::new(config, registry)
        .with_sink(Arc::new(FileSink::new(std::env::temp_dir())));
    grid.mount(&mut doc).expect("mount failed");

    println!("processed headings: {:?}", grid.headings());

    // Filter the Active column down to the inactive users
    let filter_active = format!("{}-filter-1", grid.id());
    grid.handle_event(
        &Event::Input {
            target: filter_active,
            text: "no".into(),
        },
        &mut doc,
    );
    grid.flush_filters(&mut doc);
    println!("visible after filter: {} row(s)", grid.visible_data().len());

    // Click Bob's approve button; its linked checkbox force-checks
    let approve_bob = format!("{}-action-1-5", grid.id());
    grid.handle_event(&Event::Click { target: approve_bob }, &mut doc);
    println!("checked rows: {:?}", grid.checked_rows().len());

    // The export button routes the artifact through the configured sink
    let export = format!("{}-export", grid.id());
    grid.handle_event(&Event::Click { target: export }, &mut doc);

    let artifact = grid.export_csv();
    println!(
        "{} (also written to {}):\n{}",
        artifact.filename,
        std::env::temp_dir().display(),
        artifact.content
    );
}
