//! Reading worksheet rows into typed objects.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use sheetkit::prelude::*;
use sheetkit::{cell_enum, column, read_list};
use tempfile::TempDir;

#[derive(Debug, Default, Clone, PartialEq)]
struct Stock {
    barcode: String,
    quantity: i32,
    note: Option<String>,
}

impl SheetRow for Stock {
    fn columns(cols: &mut ColumnSet<Self>) {
        cols.push(column!(Stock, barcode).named("Barcode"))
            .push(column!(Stock, quantity).named("Quantity"))
            .push(column!(Stock, note).named("Note").optional());
    }
}

#[derive(Debug, Default, PartialEq)]
struct Order {
    code: String,
    amount: i32,
}

impl SheetRow for Order {
    fn columns(cols: &mut ColumnSet<Self>) {
        cols.push(column!(Order, code).named("Code").rule(Rule::required()))
            .push(
                column!(Order, amount)
                    .named("Amount")
                    .rule(Rule::range(10.0, f64::MAX).with_message("{0} must be at least {1}")),
            );
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
enum Status {
    #[default]
    Active = 1,
    Passive = 2,
}

cell_enum!(Status { Active, Passive });

#[derive(Debug, Default, PartialEq)]
struct Shipment {
    code: String,
    status: Status,
    shipped: Option<NaiveDate>,
    weight: f64,
}

impl SheetRow for Shipment {
    fn columns(cols: &mut ColumnSet<Self>) {
        cols.push(column!(Shipment, code).indexed(1))
            .push(column!(Shipment, status).indexed(2))
            .push(column!(Shipment, shipped).indexed(3))
            .push(column!(Shipment, weight).indexed(5).optional());
    }
}

#[derive(Debug, Default, PartialEq)]
struct Far {
    code: String,
    far: String,
}

impl SheetRow for Far {
    fn columns(cols: &mut ColumnSet<Self>) {
        cols.push(column!(Far, code).indexed(1))
            .push(column!(Far, far).indexed(9));
    }
}

#[derive(Debug, Default, PartialEq)]
struct Beyond {
    code: String,
}

impl SheetRow for Beyond {
    fn columns(cols: &mut ColumnSet<Self>) {
        cols.push(column!(Beyond, code).indexed(u32::MAX));
    }
}

#[derive(Debug, Default, PartialEq)]
struct ZeroIndexed {
    code: String,
}

impl SheetRow for ZeroIndexed {
    fn columns(cols: &mut ColumnSet<Self>) {
        cols.push(column!(ZeroIndexed, code).indexed(0));
    }
}

fn book_with(rows: &[Vec<CellValue>]) -> Workbook {
    let mut book = sheetkit::new_workbook();
    let sheet = book.add_worksheet("Data").unwrap();
    for (row, values) in (1..).zip(rows) {
        sheet.add_line(row, 1, values.clone(), None).unwrap();
    }
    book
}

fn stock(barcode: &str, quantity: i32) -> Stock {
    Stock {
        barcode: barcode.to_string(),
        quantity,
        note: None,
    }
}

#[test]
fn test_headers_match_ignoring_case_and_order() {
    let book = book_with(&[
        vec!["quantity".into(), "BARCODE".into()],
        vec![10.into(), "123".into()],
        vec![20.into(), "456".into()],
    ]);

    let stocks: Vec<Stock> = book.worksheet("Data").unwrap().to_list().unwrap();
    assert_eq!(stocks, vec![stock("123", 10), stock("456", 20)]);
}

#[test]
fn test_missing_required_column() {
    let book = book_with(&[
        vec!["Barcode".into(), "Note".into()],
        vec!["123".into(), "x".into()],
    ]);
    let sheet = book.worksheet("Data").unwrap();

    let err = sheet.rows::<Stock>(ReadConfiguration::default()).unwrap_err();
    assert!(matches!(err, Error::ColumnNotFound { ref column } if column == "Quantity"));
    assert_eq!(err.column(), Some("Quantity"));
}

#[test]
fn test_absent_optional_column_keeps_default() {
    let book = book_with(&[
        vec!["Barcode".into(), "Quantity".into()],
        vec!["123".into(), 10.into()],
    ]);

    let stocks: Vec<Stock> = book.worksheet("Data").unwrap().to_list().unwrap();
    assert_eq!(stocks[0].note, None);
}

#[test]
fn test_blank_cells_read_as_default() {
    let book = book_with(&[
        vec!["Barcode".into(), "Quantity".into(), "Note".into()],
        vec!["123".into(), CellValue::Empty, "fragile".into()],
        vec![CellValue::Empty, 5.into(), CellValue::Empty],
    ]);

    let stocks: Vec<Stock> = book.worksheet("Data").unwrap().to_list().unwrap();
    assert_eq!(
        stocks,
        vec![
            Stock {
                barcode: "123".into(),
                quantity: 0,
                note: Some("fragile".into()),
            },
            stock("", 5),
        ]
    );
}

#[test]
fn test_casting_error_aborts() {
    let book = book_with(&[
        vec!["Barcode".into(), "Quantity".into()],
        vec!["123".into(), 10.into()],
        vec!["456".into(), "ten".into()],
    ]);
    let sheet = book.worksheet("Data").unwrap();

    let err = sheet.to_list::<Stock>().unwrap_err();
    assert!(err.is_casting());
    assert_eq!(err.column(), Some("Quantity"));
    assert_eq!(err.row(), Some(3));

    // The lazy form yields the good row, then the error, then stops
    let mut rows = sheet.rows::<Stock>(ReadConfiguration::default()).unwrap();
    assert_eq!(rows.next().unwrap().unwrap(), stock("123", 10));
    assert!(rows.next().unwrap().is_err());
    assert!(rows.next().is_none());
}

#[test]
fn test_skip_casting_errors_drops_bad_rows() {
    let book = book_with(&[
        vec!["Barcode".into(), "Quantity".into()],
        vec!["1".into(), 1.into()],
        vec!["2".into(), "two".into()],
        vec!["3".into(), 3.into()],
        vec!["4".into(), "4.5".into()],
        vec!["5".into(), 5.into()],
    ]);

    let stocks: Vec<Stock> = book
        .worksheet("Data")
        .unwrap()
        .to_list_with(|c| {
            c.skip_casting_errors();
        })
        .unwrap();

    let barcodes: Vec<_> = stocks.iter().map(|s| s.barcode.as_str()).collect();
    assert_eq!(barcodes, vec!["1", "3", "5"]);
}

#[test]
fn test_validation_error_cites_column() {
    let book = book_with(&[
        vec!["Code".into(), "Amount".into()],
        vec!["A".into(), 12.into()],
        vec!["B".into(), 3.into()],
    ]);
    let sheet = book.worksheet("Data").unwrap();

    let err = sheet.to_list::<Order>().unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.column(), Some("Amount"));
    assert_eq!(err.row(), Some(3));
    assert_eq!(err.to_string(), "Amount must be at least 10");

    let orders: Vec<Order> = sheet
        .to_list_with(|c| {
            c.skip_validation_errors();
        })
        .unwrap();
    assert_eq!(
        orders,
        vec![Order {
            code: "A".into(),
            amount: 12,
        }]
    );
}

#[test]
fn test_required_rule_on_blank_text() {
    let book = book_with(&[
        vec!["Code".into(), "Amount".into()],
        vec!["  ".into(), 12.into()],
    ]);

    let err = book.worksheet("Data").unwrap().to_list::<Order>().unwrap_err();
    assert_eq!(err.to_string(), "The Code field is required.");
}

#[test]
fn test_interceptor_sees_data_offset() {
    let book = book_with(&[
        vec!["Barcode".into(), "Quantity".into()],
        vec!["1".into(), 1.into()],
        vec!["2".into(), "bad".into()],
        vec!["3".into(), 3.into()],
    ]);

    let stocks: Vec<Stock> = book
        .worksheet("Data")
        .unwrap()
        .to_list_with(|c| {
            c.skip_casting_errors()
                .intercept(|s: &mut Stock, offset| s.note = Some(format!("offset {}", offset)));
        })
        .unwrap();

    let notes: Vec<_> = stocks.iter().map(|s| s.note.clone().unwrap()).collect();
    assert_eq!(notes, vec!["offset 0", "offset 2"]);
}

#[test]
fn test_without_header_row_binds_by_position() {
    let book = book_with(&[
        vec!["123".into(), 10.into(), "a".into()],
        vec!["456".into(), 20.into(), "b".into()],
    ]);

    let stocks: Vec<Stock> = book
        .worksheet("Data")
        .unwrap()
        .to_list_with(|c| {
            c.without_header_row();
        })
        .unwrap();

    assert_eq!(stocks.len(), 2);
    assert_eq!(stocks[1].barcode, "456");
    assert_eq!(stocks[1].note.as_deref(), Some("b"));
}

#[test]
fn test_indexed_columns_enums_and_dates() {
    let book = book_with(&[
        vec!["Code".into(), "Status".into(), "Shipped".into(), "Ignored".into()],
        vec!["S1".into(), "Passive".into(), "2019-03-01".into(), "x".into()],
        vec!["S2".into(), 1.into(), CellValue::Empty, "y".into()],
    ]);

    let shipments: Vec<Shipment> = book.worksheet("Data").unwrap().to_list().unwrap();
    assert_eq!(
        shipments,
        vec![
            Shipment {
                code: "S1".into(),
                status: Status::Passive,
                shipped: NaiveDate::from_ymd_opt(2019, 3, 1),
                weight: 0.0,
            },
            Shipment {
                code: "S2".into(),
                status: Status::Active,
                shipped: None,
                weight: 0.0,
            },
        ]
    );
}

#[test]
fn test_required_index_outside_bounds_is_casting_error() {
    let book = book_with(&[
        vec!["Code".into(), "Other".into()],
        vec!["A".into(), "B".into()],
        vec!["C".into(), "D".into()],
    ]);
    let sheet = book.worksheet("Data").unwrap();

    let err = sheet.to_list::<Far>().unwrap_err();
    assert!(err.is_casting());
    assert_eq!(err.column(), Some("far"));
    assert_eq!(err.row(), Some(2));

    let skipped: Vec<Far> = sheet
        .to_list_with(|c| {
            c.skip_casting_errors();
        })
        .unwrap();
    assert!(skipped.is_empty());

    let err = sheet.to_list::<Beyond>().unwrap_err();
    assert!(err.is_casting());
    assert_eq!(err.row(), Some(2));
}

#[test]
fn test_zero_index_is_a_configuration_error() {
    let book = book_with(&[
        vec!["Code".into(), "Other".into()],
        vec!["A".into(), "B".into()],
    ]);

    let err = book.worksheet("Data").unwrap().to_list::<ZeroIndexed>().unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

#[test]
fn test_unknown_enum_member_is_casting_error() {
    let book = book_with(&[
        vec!["Code".into(), "Status".into(), "Shipped".into()],
        vec!["S1".into(), "passive".into(), CellValue::Empty],
    ]);

    let err = book.worksheet("Data").unwrap().to_list::<Shipment>().unwrap_err();
    assert!(err.is_casting());
    assert_eq!(err.column(), Some("status"));
}

#[test]
fn test_empty_sheets_yield_nothing() {
    let book = book_with(&[]);
    let sheet = book.worksheet("Data").unwrap();
    assert!(sheet.to_list::<Stock>().unwrap().is_empty());

    let header_only = book_with(&[vec!["Barcode".into(), "Quantity".into()]]);
    assert!(header_only
        .worksheet("Data")
        .unwrap()
        .to_list::<Stock>()
        .unwrap()
        .is_empty());
}

#[test]
fn test_read_list_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stocks.xlsx");

    let book = book_with(&[
        vec!["Barcode".into(), "Quantity".into()],
        vec!["123".into(), 10.into()],
    ]);
    sheetkit::save(&book, &path).unwrap();

    let stocks: Vec<Stock> = read_list(&path, "Data", |_| {}).unwrap();
    assert_eq!(stocks, vec![stock("123", 10)]);

    let missing = read_list::<Stock, _, _>(&path, "Other", |_| {}).unwrap_err();
    assert!(matches!(missing, Error::SheetNotFound(_)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_skip_casting_keeps_good_rows_in_order(quantities in prop::collection::vec(prop::option::of(0i32..1000), 1..20)) {
        let mut rows = vec![vec![CellValue::from("Barcode"), CellValue::from("Quantity")]];
        for (i, quantity) in quantities.iter().enumerate() {
            let cell = match quantity {
                Some(q) => CellValue::from(*q),
                None => CellValue::from("bad"),
            };
            rows.push(vec![CellValue::from(format!("B{}", i)), cell]);
        }
        let book = book_with(&rows);

        let stocks: Vec<Stock> = book
            .worksheet("Data")
            .unwrap()
            .to_list_with(|c| {
                c.skip_casting_errors();
            })
            .unwrap();

        let expected: Vec<Stock> = quantities
            .iter()
            .enumerate()
            .filter_map(|(i, q)| q.map(|q| stock(&format!("B{}", i), q)))
            .collect();
        prop_assert_eq!(stocks, expected);
    }
}
