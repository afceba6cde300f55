use ratatui_tabular::primitives::Result;
use ratatui_tabular::primitives::align::HorizontalAlignment;
use ratatui_tabular::primitives::area;
use ratatui_tabular::primitives::area::Area;
use ratatui_tabular::primitives::area::Point;
use ratatui_tabular::table::Cell;
use ratatui_tabular::table::Content;
use ratatui_tabular::table::Data;
use ratatui_tabular::table::HierarchicalOptions;
use ratatui_tabular::table::Row;
use std::env;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = env::args().skip(1).collect::<Vec<_>>();
    let width = args.first().and_then(|v| v.parse().ok()).unwrap_or(80);
    let height = args.get(1).and_then(|v| v.parse().ok()).unwrap_or(24);

    let content = sample_content()?;
    let Some(screen) = area::from_size(Point::new(width, height))? else {
        println!("empty screen");
        return Ok(());
    };
    let Some(inner) = area::exclude_border(screen) else {
        println!("no room inside the border");
        return Ok(());
    };

    let xs = boundaries(inner, i32::from(content.columns()), Axis::X)?;
    let rows = i32::try_from(content.rows().len()).unwrap_or(i32::MAX);
    let ys = boundaries(inner, rows, Axis::Y)?;

    for p in content.placements() {
        let cell = &content.rows()[p.row].cells()[p.cell];
        let resolved = content
            .resolve_cell(p.row, p.cell)
            .unwrap_or_default();
        let col_end = usize::from(p.column + p.col_span);
        let row_end = p.row + usize::from(p.row_span);
        let cell_area = Area::new(
            Point::new(xs[usize::from(p.column)], ys[p.row]),
            Point::new(xs[col_end], ys[row_end]),
        );
        let text_area = match cell_area {
            Some(a) => area::shrink(
                a,
                i32::from(resolved.vertical_padding),
                i32::from(resolved.horizontal_padding),
                i32::from(resolved.vertical_padding),
                i32::from(resolved.horizontal_padding),
            )?,
            None => None,
        };
        let offset = text_area.map(|a| {
            resolved.align_horizontal.offset(
                u16::try_from(a.width()).unwrap_or(u16::MAX),
                u16::try_from(cell.width()).unwrap_or(u16::MAX),
            )
        });
        println!(
            "{cell}-> cell {:?} text {:?} offset {:?} align {:?}/{:?} wrap {:?}",
            cell_area.and_then(|a| a.to_rect()),
            text_area.and_then(|a| a.to_rect()),
            offset,
            resolved.align_horizontal,
            resolved.align_vertical,
            resolved.wrap_mode,
        );
    }
    Ok(())
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

// Grid line positions dividing `area` into `parts` near-equal slices along `axis`.
fn boundaries(area: Area, parts: i32, axis: Axis) -> Result<Vec<i32>> {
    let start = match axis {
        Axis::X => area.min().x,
        Axis::Y => area.min().y,
    };
    let end = match axis {
        Axis::X => area.max().x,
        Axis::Y => area.max().y,
    };
    let mut out = vec![start];
    let mut rest = Some(area);
    for i in 0..parts {
        let Some(r) = rest else {
            out.push(end);
            continue;
        };
        let perc = 100 / (parts - i);
        let (head, tail) = match axis {
            Axis::X => area::vsplit(r, perc)?,
            Axis::Y => area::hsplit(r, perc)?,
        };
        let edge = match (head, axis) {
            (Some(h), Axis::X) => h.max().x,
            (Some(h), Axis::Y) => h.max().y,
            (None, Axis::X) => r.min().x,
            (None, Axis::Y) => r.min().y,
        };
        out.push(if i == parts - 1 { end } else { edge });
        rest = tail;
    }
    Ok(out)
}

fn sample_content() -> Result<Content> {
    let header = Cell::builder(vec![Data::new("Quarterly report")?])
        .col_span(3)
        .align_horizontal(HorizontalAlignment::Center)
        .build()?;
    let region = Cell::builder(vec![Data::new("EMEA")?]).row_span(2).build()?;
    let numbers = HierarchicalOptions {
        align_horizontal: Some(HorizontalAlignment::Right),
        horizontal_padding: Some(1),
        ..Default::default()
    };

    Content::new(
        3,
        vec![
            Row::new(vec![header]),
            Row::with_opts(
                vec![region, Cell::new("Q1")?, Cell::new("1 204")?],
                numbers,
            ),
            Row::with_opts(vec![Cell::new("Q2")?, Cell::new("1 377")?], numbers),
        ],
    )
}
