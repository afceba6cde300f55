use ratatui::style::Color;
use ratatui::style::Style;
use ratatui_tabular::primitives::align::HorizontalAlignment;
use ratatui_tabular::primitives::align::VerticalAlignment;
use ratatui_tabular::primitives::wrapping::WrapMode;
use ratatui_tabular::table::Cell;
use ratatui_tabular::table::CellOption;
use ratatui_tabular::table::Content;
use ratatui_tabular::table::Data;
use ratatui_tabular::table::HierarchicalOptions;
use ratatui_tabular::table::Row;

fn align_h(a: HorizontalAlignment) -> HierarchicalOptions {
    HierarchicalOptions {
        align_horizontal: Some(a),
        ..Default::default()
    }
}

#[test]
fn data_level_overrides_row_level() {
    let cell = Cell::with_opts(
        vec![
            Data::with_opts("right", align_h(HorizontalAlignment::Right)).unwrap(),
            Data::new("inherits").unwrap(),
        ],
        [],
    )
    .unwrap();
    let row = Row::with_opts(vec![cell], align_h(HorizontalAlignment::Left));
    let content = Content::new(1, vec![row]).unwrap();

    assert_eq!(
        content.resolve_data(0, 0, 0).unwrap().align_horizontal,
        HorizontalAlignment::Right
    );
    assert_eq!(
        content.resolve_data(0, 0, 1).unwrap().align_horizontal,
        HorizontalAlignment::Left
    );
}

#[test]
fn each_field_comes_from_its_most_specific_level() {
    let table = HierarchicalOptions {
        style: Some(Style::default().fg(Color::Gray)),
        horizontal_padding: Some(1),
        vertical_padding: Some(1),
        align_vertical: Some(VerticalAlignment::Bottom),
        ..Default::default()
    };
    let row = HierarchicalOptions {
        horizontal_padding: Some(2),
        height: Some(3),
        ..Default::default()
    };
    let cell = Cell::builder(vec![Data::new("x").unwrap()])
        .align_vertical(VerticalAlignment::Middle)
        .wrap_at_words()
        .build()
        .unwrap();
    let plain = Cell::new("y").unwrap();
    let content =
        Content::with_opts(2, vec![Row::with_opts(vec![cell, plain], row)], table).unwrap();

    let x = content.resolve_cell(0, 0).unwrap();
    assert_eq!(x.style, Style::default().fg(Color::Gray));
    assert_eq!(x.height, Some(3));
    assert_eq!(x.horizontal_padding, 2);
    assert_eq!(x.vertical_padding, 1);
    assert_eq!(x.align_horizontal, HorizontalAlignment::Left);
    assert_eq!(x.align_vertical, VerticalAlignment::Middle);
    assert_eq!(x.wrap_mode, WrapMode::Word);

    let y = content.resolve_cell(0, 1).unwrap();
    assert_eq!(y.align_vertical, VerticalAlignment::Bottom);
    assert_eq!(y.wrap_mode, WrapMode::None);
}

#[test]
fn later_cell_options_overwrite_earlier_ones() {
    let cell = Cell::with_opts(
        vec![Data::new("x").unwrap()],
        [
            CellOption::ColSpan(2),
            CellOption::ColSpan(3),
            CellOption::HorizontalPadding(4),
            CellOption::HorizontalPadding(1),
        ],
    )
    .unwrap();
    assert_eq!(cell.col_span(), 3);
    assert_eq!(cell.hierarchical().horizontal_padding, Some(1));
}

#[test]
fn spanning_cells_form_a_valid_table() {
    let header = Cell::builder(vec![Data::new("Report").unwrap()])
        .col_span(3)
        .align_horizontal(HorizontalAlignment::Center)
        .build()
        .unwrap();
    let side = Cell::builder(vec![Data::new("Q1").unwrap()])
        .row_span(2)
        .build()
        .unwrap();
    let content = Content::new(
        3,
        vec![
            Row::new(vec![header]),
            Row::new(vec![side, Cell::new("a").unwrap(), Cell::new("b").unwrap()]),
            Row::new(vec![Cell::new("c").unwrap(), Cell::new("d").unwrap()]),
        ],
    )
    .unwrap();

    assert_eq!(content.placements().len(), 6);
    assert_eq!(content.rows()[0].cells()[0].to_string(), "| Report ");
    assert_eq!(
        content.resolve_cell(0, 0).unwrap().align_horizontal,
        HorizontalAlignment::Center
    );
}

#[cfg(feature = "serde")]
#[test]
fn table_options_load_from_json() {
    let opts: HierarchicalOptions = serde_json::from_str(
        r#"{ "horizontal_padding": 2, "align_horizontal": "right", "wrap_mode": "word" }"#,
    )
    .unwrap();
    assert_eq!(opts.horizontal_padding, Some(2));
    assert_eq!(opts.align_horizontal, Some(HorizontalAlignment::Right));
    assert_eq!(opts.wrap_mode, Some(WrapMode::Word));
    assert_eq!(opts.height, None);
    assert_eq!(opts.style, None);
}
