//! Building worksheets from objects, templates and write helpers.

use pretty_assertions::assert_eq;
use sheetkit::prelude::*;
use sheetkit::{column, generate_worksheet, WorksheetBuilder};

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

#[derive(Debug, Default, Clone, PartialEq)]
struct Order {
    code: String,
}

impl SheetRow for Order {
    fn columns(cols: &mut ColumnSet<Self>) {
        cols.push(column!(Order, code).named("Code"));
    }

    fn worksheet_name() -> Option<&'static str> {
        Some("Orders")
    }
}

fn stocks() -> Vec<Stock> {
    vec![
        Stock {
            barcode: "123".into(),
            quantity: 10,
            note: None,
        },
        Stock {
            barcode: "456".into(),
            quantity: -2,
            note: Some("returned".into()),
        },
    ]
}

fn headers(sheet: &Worksheet, row: u32) -> Vec<String> {
    sheet.columns(row).into_iter().map(|(_, text)| text).collect()
}

#[test]
fn test_build_with_generated_columns_round_trips() {
    let book = to_worksheet(stocks(), "Stocks").build().unwrap();
    let sheet = book.worksheet("Stocks").unwrap();

    assert_eq!(headers(sheet, 1), vec!["Barcode", "Quantity", "Note"]);
    assert_eq!(sheet.to_list::<Stock>().unwrap(), stocks());
    assert_eq!(
        sheet.tables(),
        vec![("tblStocks".to_string(), CellRange::parse("A1:C3").unwrap())]
    );
}

#[test]
fn test_titles_and_explicit_columns() {
    let rows = vec![(1, "a"), (2, "b")];
    let book = WorksheetBuilder::new(rows, "Pairs")
        .with_title("Report")
        .with_title_styled("Subtitle", Style::new().italic(true))
        .with_column("Id", |p: &(i32, &str)| p.0)
        .with_column_styled("Name", |p: &(i32, &str)| p.1.to_string(), Style::new().bold(true))
        .with_configuration(|c| {
            c.with_title_style(Style::new().font_size(14.0))
                .with_header_row_style(Style::new().fill_color(Color::LIGHT_GRAY))
                .with_column_style(Style::new().horizontal_alignment(HorizontalAlignment::Left));
        })
        .build()
        .unwrap();
    let sheet = book.worksheet("Pairs").unwrap();

    assert_eq!(sheet.text_at(1, 1), "Report");
    assert_eq!(sheet.text_at(2, 1), "Subtitle");
    assert_eq!(headers(sheet, 3), vec!["Id", "Name"]);
    assert_eq!(sheet.value_at(4, 1), CellValue::Number(1.0));
    assert_eq!(sheet.text_at(5, 2), "b");
    assert_eq!(
        sheet.tables(),
        vec![("tblPairs".to_string(), CellRange::parse("A3:B5").unwrap())]
    );
}

#[test]
fn test_without_header_skips_the_table() {
    let book = to_worksheet(stocks(), "Stocks")
        .without_header()
        .build()
        .unwrap();
    let sheet = book.worksheet("Stocks").unwrap();

    assert_eq!(sheet.text_at(1, 1), "123");
    assert!(sheet.tables().is_empty());
}

#[test]
fn test_cell_style_callback() {
    let book = to_worksheet(stocks(), "Stocks")
        .with_configuration(|c| {
            c.with_header_style(Style::new().bold(true))
                .with_cell_style(|s: &Stock| (s.quantity < 0).then(|| Style::new().font_color(Color::RED)));
        })
        .build()
        .unwrap();

    assert_eq!(book.worksheet("Stocks").unwrap().text_at(3, 2), "-2");
}

#[test]
fn test_next_worksheet_keeps_order() {
    let orders = vec![Order { code: "O-1".into() }];
    let mut book = sheetkit::new_workbook();
    to_worksheet(stocks(), "Stocks")
        .next_worksheet(orders.clone(), "Orders")
        .build_into(&mut book)
        .unwrap();

    let names: Vec<_> = book.sheets().iter().map(|s| s.name().to_string()).collect();
    assert_eq!(names, vec!["Stocks", "Orders"]);
    assert_eq!(book.worksheet("Orders").unwrap().to_list::<Order>().unwrap(), orders);
}

#[test]
fn test_builder_without_columns_fails() {
    let err = WorksheetBuilder::new(vec![1, 2, 3], "Numbers").build().unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

#[test]
fn test_to_bytes_is_a_zip_package() {
    let bytes = to_worksheet(stocks(), "Stocks").to_bytes().unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_generate_template() {
    let mut book = sheetkit::new_workbook();
    generate_worksheet::<Stock, _>(&mut book, Some(&Style::new().bold(true))).unwrap();
    generate_worksheet::<Order, _>(&mut book, None).unwrap();

    assert_eq!(headers(book.worksheet("Stock").unwrap(), 1), vec!["Barcode", "Quantity", "Note"]);
    assert_eq!(headers(book.worksheet("Orders").unwrap(), 1), vec!["Code"]);
}

#[test]
fn test_template_registry() {
    let mut registry = TemplateRegistry::new();
    registry.register::<Stock>().register::<Order>();
    assert!(registry.contains("Order"));

    let mut book = sheetkit::new_workbook();
    let sheet = registry.generate(&mut book, "Order", None).unwrap();
    assert_eq!(sheet.name(), "Orders");

    let err = registry.generate(&mut book, "Invoice", None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "The 'Invoice' type could not be found in the registry."
    );
}

fn data_book() -> Workbook {
    let mut book = sheetkit::new_workbook();
    let sheet = book.add_worksheet("Data").unwrap();
    sheet.add_line(1, 1, ["123"], None).unwrap();
    sheet.change_cell_value(1, 2, 10, Some(&Style::new().bold(true))).unwrap();
    sheet.add_line(2, 1, vec![CellValue::from("456"), CellValue::from(20)], None).unwrap();
    book
}

#[test]
fn test_add_header_shifts_rows_down() {
    let mut book = data_book();
    let sheet = book.sheet_by_name_mut("Data").unwrap();

    sheet.add_header(&[], None).unwrap();
    assert_eq!(sheet.text_at(1, 1), "123");

    sheet.add_header(&["Barcode", "Quantity"], None).unwrap();
    assert_eq!(headers(sheet, 1), vec!["Barcode", "Quantity"]);
    assert_eq!(sheet.text_at(2, 1), "123");

    let stocks: Vec<Stock> = sheet.to_list().unwrap();
    assert_eq!(stocks.len(), 2);
    assert_eq!(stocks[1].quantity, 20);
}

#[test]
fn test_add_objects() {
    let mut book = sheetkit::new_workbook();
    let sheet = book.add_worksheet("Data").unwrap();
    sheet.add_objects(&stocks(), 1, 1, None).unwrap();
    sheet.add_header(&["Barcode", "Quantity", "Note"], None).unwrap();

    assert_eq!(sheet.to_list::<Stock>().unwrap(), stocks());
}

#[test]
fn test_add_objects_with_selectors() {
    let mut book = sheetkit::new_workbook();
    let sheet = book.add_worksheet("Data").unwrap();

    let none: [&dyn Fn(&Stock) -> CellValue; 0] = [];
    let err = sheet.add_objects_with(&stocks(), 1, 1, &none, None).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { name: "selectors", .. }));

    let quantity = |s: &Stock| CellValue::from(s.quantity);
    let barcode = |s: &Stock| CellValue::from(s.barcode.clone());
    let selectors: [&dyn Fn(&Stock) -> CellValue; 2] = [&quantity, &barcode];
    sheet.add_objects_with(&stocks(), 2, 3, &selectors, None).unwrap();

    assert_eq!(sheet.value_at(2, 3), CellValue::Number(10.0));
    assert_eq!(sheet.text_at(3, 4), "456");
}

#[test]
fn test_delete_columns_by_header() {
    let mut book = sheetkit::new_workbook();
    let sheet = book.add_worksheet("Data").unwrap();
    sheet.add_line(1, 1, ["Barcode", "Quantity", "barcode"], None).unwrap();
    sheet.add_line(2, 1, ["1", "2", "3"], None).unwrap();

    sheet.delete_column("BARCODE").unwrap();
    assert_eq!(headers(sheet, 1), vec!["Quantity", "barcode"]);
    assert_eq!(sheet.text_at(2, 2), "3");

    sheet.add_line(1, 3, ["Barcode"], None).unwrap();
    sheet.delete_columns_named("barcode").unwrap();
    assert_eq!(headers(sheet, 1), vec!["Quantity"]);

    // Unknown headers are ignored
    sheet.delete_column("Missing").unwrap();
    assert_eq!(headers(sheet, 1), vec!["Quantity"]);
}

#[test]
fn test_as_table_reuses_matching_table() {
    let mut book = sheetkit::new_workbook();
    let sheet = book.add_worksheet("Data").unwrap();
    sheet.add_line(1, 1, ["Barcode", "Quantity"], None).unwrap();
    sheet.add_line(2, 1, vec![CellValue::from("123"), CellValue::from(10)], None).unwrap();

    assert_eq!(sheet.as_table().unwrap(), "Table1");
    assert_eq!(sheet.as_table().unwrap(), "Table1");
    assert_eq!(sheet.tables().len(), 1);

    sheet.add_line(3, 1, vec![CellValue::from("456"), CellValue::from(20)], None).unwrap();
    assert_eq!(sheet.as_table_named("Stocks").unwrap(), "Stocks");
    assert_eq!(sheet.tables().len(), 2);
}

#[test]
fn test_styling_helpers() {
    let mut book = data_book();
    let sheet = book.sheet_by_name_mut("Data").unwrap();
    let header = CellRange::parse("A1:B1").unwrap();

    sheet
        .set_font_color(Color::RED, None)
        .unwrap()
        .set_background_color(Color::YELLOW, Some(&header))
        .unwrap()
        .set_horizontal_alignment(HorizontalAlignment::Center, Some(&header))
        .unwrap()
        .set_vertical_alignment(VerticalAlignment::Top, None)
        .unwrap();

    // Styling leaves values alone
    assert_eq!(sheet.text_at(2, 2), "20");

    let mut empty = sheetkit::new_workbook();
    let sheet = empty.add_worksheet("Empty").unwrap();
    sheet.set_font_color(Color::BLUE, None).unwrap();
    assert_eq!(sheet.dimension(), None);
}
