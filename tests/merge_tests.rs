use questlog::core::merge::{KpiEntry, QuestForm, parse_kpi_spec, sanitize};
use questlog::models::category::Category;
use questlog::models::kpi::Kpi;
use questlog::models::quest::Quest;

fn entry(title: &str, target: Option<i64>, unit: &str) -> KpiEntry {
    KpiEntry {
        title: title.to_string(),
        target,
        unit: unit.to_string(),
    }
}

fn form(kpis: Vec<KpiEntry>, tasks: Vec<&str>) -> QuestForm {
    QuestForm {
        title: "Quest".to_string(),
        category: Category::Organization,
        notes: String::new(),
        kpis,
        daily_tasks: tasks.into_iter().map(String::from).collect(),
    }
}

fn existing_with_runs() -> Quest {
    Quest::new(
        "Quest".to_string(),
        Category::Organization,
        vec![Kpi {
            title: "Runs".to_string(),
            target: 10,
            unit: "km".to_string(),
            current: 7,
        }],
        Vec::new(),
        String::new(),
        "tester".to_string(),
    )
}

#[test]
fn edit_preserves_current_for_matching_title() {
    let existing = existing_with_runs();
    let submitted = form(vec![entry("Runs", Some(20), "km")], vec![]);

    let clean = sanitize(&submitted, Some(&existing));

    assert_eq!(clean.kpis.len(), 1);
    assert_eq!(clean.kpis[0].title, "Runs");
    assert_eq!(clean.kpis[0].target, 20);
    assert_eq!(clean.kpis[0].current, 7);
}

#[test]
fn renamed_kpi_starts_at_zero() {
    let existing = existing_with_runs();
    let submitted = form(vec![entry("Long runs", Some(10), "km")], vec![]);

    let clean = sanitize(&submitted, Some(&existing));

    assert_eq!(clean.kpis.len(), 1);
    assert_eq!(clean.kpis[0].current, 0);
}

#[test]
fn blank_title_is_dropped_regardless_of_other_fields() {
    let submitted = form(vec![entry("   ", Some(5), "km")], vec![]);

    let clean = sanitize(&submitted, None);

    assert!(clean.kpis.is_empty());
    assert_eq!(clean.dropped_kpis.len(), 1);
}

#[test]
fn missing_or_nonpositive_target_is_dropped() {
    let submitted = form(
        vec![
            entry("NoTarget", None, ""),
            entry("Zero", Some(0), ""),
            entry("Negative", Some(-3), ""),
            entry("Kept", Some(1), ""),
        ],
        vec![],
    );

    let clean = sanitize(&submitted, None);

    assert_eq!(clean.kpis.len(), 1);
    assert_eq!(clean.kpis[0].title, "Kept");
    assert_eq!(clean.dropped_kpis.len(), 3);
}

#[test]
fn unit_update_survives_the_merge() {
    let existing = existing_with_runs();
    let submitted = form(vec![entry("Runs", Some(10), "miles")], vec![]);

    let clean = sanitize(&submitted, Some(&existing));

    assert_eq!(clean.kpis[0].unit, "miles");
    assert_eq!(clean.kpis[0].current, 7);
}

#[test]
fn tasks_are_trimmed_and_blanks_dropped() {
    let submitted = form(vec![], vec!["  Stretch  ", "", "   ", "Read"]);

    let clean = sanitize(&submitted, None);

    assert_eq!(clean.daily_tasks, vec!["Stretch", "Read"]);
}

#[test]
fn kpi_spec_parsing() {
    let e = parse_kpi_spec("Runs:10:km");
    assert_eq!(e.title, "Runs");
    assert_eq!(e.target, Some(10));
    assert_eq!(e.unit, "km");

    let e = parse_kpi_spec("Pages:30");
    assert_eq!(e.target, Some(30));
    assert_eq!(e.unit, "");

    // malformed target becomes a droppable entry, not an error
    let e = parse_kpi_spec("Oops:lots");
    assert_eq!(e.target, None);

    let e = parse_kpi_spec("JustATitle");
    assert_eq!(e.target, None);
}
