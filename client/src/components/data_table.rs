//! Sortable, filterable table over display strings.
//!
//! DESIGN
//! ======
//! Rows arrive pre-formatted from the page; ordering and filtering live in
//! `util::table` so they can be tested without rendering.

use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::util::table::{Row, SortState, filter_rows, sort_rows};

/// How a column's cells render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColumnKind {
    #[default]
    Text,
    /// Cell text is a status word shown as a [`Badge`].
    Status,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub label: &'static str,
    pub kind: ColumnKind,
}

impl Column {
    pub const fn text(label: &'static str) -> Self {
        Self { label, kind: ColumnKind::Text }
    }

    pub const fn status(label: &'static str) -> Self {
        Self { label, kind: ColumnKind::Status }
    }
}

#[component]
pub fn DataTable(
    columns: Vec<Column>,
    rows: Vec<Row>,
    #[prop(optional)] searchable: bool,
    #[prop(default = "No matching rows.")] empty_text: &'static str,
) -> impl IntoView {
    let rows = StoredValue::new(rows);
    let query = RwSignal::new(String::new());
    let sort = RwSignal::new(SortState::default());

    let visible = Memo::new(move |_| {
        let needle = query.get();
        let mut filtered = rows.with_value(|all| filter_rows(all, &needle));
        sort_rows(&mut filtered, sort.get());
        filtered
    });

    let kinds: Vec<ColumnKind> = columns.iter().map(|c| c.kind).collect();

    let headers = columns
        .into_iter()
        .enumerate()
        .map(|(i, column)| {
            let arrow = move || {
                let state = sort.get();
                if state.column == Some(i) { state.direction.arrow() } else { "" }
            };
            view! {
                <th class="data-table__header" on:click=move |_| sort.update(|s| *s = s.toggle(i))>
                    {column.label}
                    <span class="data-table__arrow">{arrow}</span>
                </th>
            }
        })
        .collect_view();

    view! {
        <div class="data-table">
            {searchable.then(|| view! {
                <input
                    class="data-table__search"
                    type="search"
                    placeholder="Filter rows"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            })}
            <table class="data-table__table">
                <thead>
                    <tr>{headers}</tr>
                </thead>
                <tbody>
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .map(|row| {
                                let cells = row
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, text)| render_cell(kinds.get(i).copied().unwrap_or_default(), text))
                                    .collect_view();
                                view! { <tr>{cells}</tr> }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            <Show when=move || visible.with(Vec::is_empty)>
                <p class="data-table__empty">{empty_text}</p>
            </Show>
        </div>
    }
}

fn render_cell(kind: ColumnKind, text: String) -> AnyView {
    match kind {
        ColumnKind::Text => view! { <td>{text}</td> }.into_any(),
        ColumnKind::Status => view! { <td><Badge label=text/></td> }.into_any(),
    }
}
