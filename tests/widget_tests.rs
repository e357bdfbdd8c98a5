mod common;

use common::TestResult;
use harbor_layout::{Cell, LayoutConfig, LayoutEngine, Node, TableRule};
use harbor_template_dsl::prelude::*;
use safe_harbor::documents::evidence_ledger::{self, HEADER_ROW, SUPPLY_CHAIN};

fn cell_markup(cell: &Cell) -> Option<&str> {
    match cell {
        Cell::Paragraph(p) => Some(p.markup.as_str()),
        _ => None,
    }
}

#[test]
fn checklist_rows_follow_their_items() {
    let styles = StyleRegistry::standard();
    let items = [
        ("Sign the policy", "Practice Owner", "Signed PDF"),
        ("Inventory vendors", "Office Manager", "Ledger Tab 1"),
        ("Post the notice", "Front Desk", "Photo"),
    ];
    let Node::Table(table) = checklist_table(&styles, &items, BLUE_600) else {
        panic!("checklist is a table");
    };

    assert_eq!(table.row_count(), items.len() + 1);
    assert_eq!(table.column_count(), 4);
    assert_eq!(table.col_widths, CHECKLIST_WIDTHS.to_vec());
    for (row, (task, owner, deliverable)) in table.rows[1..].iter().zip(items) {
        assert_eq!(cell_markup(&row[0]), Some("[  ]"));
        assert_eq!(cell_markup(&row[1]), Some(task));
        assert_eq!(cell_markup(&row[2]), Some(owner));
        assert_eq!(cell_markup(&row[3]), Some(deliverable));
    }
    assert!(table
        .style
        .rules()
        .iter()
        .any(|rule| matches!(rule, TableRule::Background(range, color) if *range == CellRange::row(0) && *color == BLUE_600)));
}

#[test]
fn an_empty_checklist_is_just_its_header() {
    let styles = StyleRegistry::standard();
    let Node::Table(table) = checklist_table(&styles, &[], NAVY) else {
        panic!("checklist is a table");
    };
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.column_count(), 4);
}

#[test]
fn long_checklists_split_across_pages() -> TestResult {
    let styles = StyleRegistry::standard();
    let items: Vec<(String, &str, &str)> = (1..=80)
        .map(|n| (format!("Task number {n} with enough words to wrap onto a second line in the cell"), "Owner", "Proof"))
        .collect();
    let borrowed: Vec<(&str, &str, &str)> = items.iter().map(|(t, o, d)| (t.as_str(), *o, *d)).collect();
    let document = harbor_layout::Document::new(
        harbor_types::DocumentMetadata::new("Checklist", "Tests", "Pagination"),
        vec![checklist_table(&styles, &borrowed, NAVY)],
    );
    let pages = LayoutEngine::new(LayoutConfig::default()).paginate(&document)?;
    assert!(pages.len() > 1, "80 rows fit on {} page(s)", pages.len());
    Ok(())
}

#[test]
fn total_vendors_formula_tracks_the_register() -> TestResult {
    let book = evidence_ledger::workbook()?;
    let sheet = book.sheet(SUPPLY_CHAIN).expect("supply chain tab");

    let last_row = (HEADER_ROW + 1..)
        .take_while(|row| sheet.text(*row, 1).is_some())
        .last()
        .expect("data rows");
    let formula = sheet
        .cells()
        .find_map(|(_, cell)| match &cell.value {
            harbor_ledger::CellValue::Formula(f) if f.starts_with("=COUNTA") => Some(f.clone()),
            _ => None,
        })
        .expect("total vendors formula");
    let range = format!("B{}:B{}", HEADER_ROW + 1, last_row);
    assert_eq!(formula, format!("=COUNTA({range})-COUNTBLANK({range})"));
    Ok(())
}
