use dioxus::prelude::*;
use store::Voyage;

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::Icon;

/// One row per voyage on the current page, in the order given.
#[component]
pub fn VoyageList(
    voyages: Vec<Voyage>,
    #[props(default)] loading: bool,
    on_select: EventHandler<Voyage>,
) -> Element {
    if voyages.is_empty() {
        let hint = if loading { "Loading voyages..." } else { "No voyages yet." };
        return rsx! {
            p { class: "voyage-list-empty", "{hint}" }
        };
    }

    let rows: Vec<(String, Voyage)> = voyages
        .into_iter()
        .enumerate()
        .map(|(i, v)| (v.id.clone().unwrap_or_else(|| format!("row-{i}")), v))
        .collect();

    rsx! {
        ul {
            class: "voyage-list",
            for (key, voyage) in rows {
                VoyageRow { key: "{key}", voyage, on_select }
            }
        }
    }
}

#[component]
fn VoyageRow(voyage: Voyage, on_select: EventHandler<Voyage>) -> Element {
    let title = voyage.title();
    let route = voyage.route_summary();

    rsx! {
        li {
            class: "voyage-row",
            onclick: move |_| on_select.call(voyage.clone()),
            span { class: "voyage-row-title", "{title}" }
            if let Some(route) = route {
                span { class: "voyage-row-route", "{route}" }
            }
        }
    }
}

/// Previous / page indicator / next. Hidden when everything fits on one page.
#[component]
pub fn PaginationControls(
    page: usize,
    total_pages: usize,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }

    rsx! {
        nav {
            class: "pagination",
            Button {
                variant: ButtonVariant::Outline,
                disabled: page <= 1,
                onclick: move |_| on_prev.call(()),
                Icon { icon: FaChevronLeft, width: 12, height: 12 }
                "Previous"
            }
            span { class: "pagination-status", "Page {page} of {total_pages}" }
            Button {
                variant: ButtonVariant::Outline,
                disabled: page >= total_pages,
                onclick: move |_| on_next.call(()),
                "Next"
                Icon { icon: FaChevronRight, width: 12, height: 12 }
            }
        }
    }
}
