use crate::explorer::{ExplorerState, LoadState};
use crate::model::{Country, DerivedView};
use crate::source::DataOrigin;

const HEADERS: [&str; 5] = ["Code", "Name", "Region", "Population", "Dial"];

/// Render a page as a plain-text table with a pagination footer.
pub fn render_view(view: &DerivedView<Country>, origin: DataOrigin) -> String {
    let mut out = String::new();

    if view.total_count == 0 {
        out.push_str("No matching countries.\n");
    } else {
        let rows: Vec<[String; 5]> = view.items.iter().map(row).collect();
        out.push_str(&table(&rows));
        out.push_str(&format!(
            "Page {} of {} ({} match{}){}\n",
            view.page_index.saturating_add(1),
            view.total_pages,
            view.total_count,
            if view.total_count == 1 { "" } else { "es" },
            navigation_hint(view)
        ));
        if view.is_out_of_range() {
            out.push_str("Page is past the end of the results.\n");
        }
    }

    if origin == DataOrigin::Fallback {
        out.push_str("(showing offline sample data)\n");
    }
    out
}

/// Render whatever the explorer currently has to show.
pub fn render_state(state: &ExplorerState) -> String {
    match &state.load {
        LoadState::Idle => String::new(),
        LoadState::Loading { .. } => "Loading countries...\n".to_string(),
        LoadState::Failed { message } => format!("Failed to load countries: {message}\n"),
        LoadState::Ready { origin } => match state.view() {
            Ok(view) => render_view(&view, *origin),
            Err(err) => format!("{err}\n"),
        },
    }
}

fn navigation_hint<T>(view: &DerivedView<T>) -> &'static str {
    match (view.has_previous(), view.has_next()) {
        (true, true) => " [prev | next]",
        (true, false) => " [prev]",
        (false, true) => " [next]",
        (false, false) => "",
    }
}

fn row(country: &Country) -> [String; 5] {
    [
        country.code.clone(),
        country.name.clone(),
        country.region.clone().unwrap_or_default(),
        country
            .population
            .map(group_thousands)
            .unwrap_or_default(),
        country.calling_code.clone().unwrap_or_default(),
    ]
}

fn table(rows: &[[String; 5]]) -> String {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for r in rows {
        for (width, cell) in widths.iter_mut().zip(r) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header = HEADERS.map(str::to_string);
    push_line(&mut out, &header, &widths);
    let rule = widths.map(|w| "-".repeat(w));
    push_line(&mut out, &rule, &widths);
    for r in rows {
        push_line(&mut out, r, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| {
            let pad = width - cell.chars().count();
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
