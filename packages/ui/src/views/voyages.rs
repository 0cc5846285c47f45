use api::ApiClient;
use dioxus::prelude::*;

use crate::auth::{use_api, use_config};
use crate::board::Board;
use crate::components::{Button, ButtonVariant};
use crate::draft::Field;
use crate::header::{Footer, Header};
use crate::icons::FaPlus;
use crate::voyage_form::VoyageForm;
use crate::voyage_list::{PaginationControls, VoyageList};
use crate::Icon;

/// Fetch the full list and install it unless a newer load has started.
async fn load_voyages(mut board: Signal<Board>, client: ApiClient) {
    let generation = board.write().begin_load();
    match client.list_voyages().await {
        Ok(voyages) => {
            let count = voyages.len();
            let installed = board.write().finish_load(generation, voyages);
            if installed {
                tracing::debug!("Loaded {} voyages", count);
            } else {
                tracing::debug!("Dropped stale voyage list (load {})", generation);
            }
        }
        Err(e) => {
            tracing::error!("Failed to load voyages: {}", e);
            board.write().fail_load(generation);
        }
    }
}

/// The signed-in screen: voyage list, pagination and the detail modal.
#[component]
pub fn VoyagesView() -> Element {
    let config = use_config();
    let page_size = config.read().page_size();
    let mut board = use_signal(move || Board::new(page_size));
    let client = use_api();

    // Fetch on mount
    use_hook({
        let client = client.clone();
        move || {
            spawn(load_voyages(board, client));
        }
    });

    let save = move |_: ()| {
        let submitted = board.write().begin_submit();
        let request = match submitted {
            Ok(request) => request,
            Err(blocked) => {
                tracing::debug!("Save not started: {}", blocked);
                return;
            }
        };
        let client = client.clone();
        spawn(async move {
            match request.send(&client).await {
                Ok(saved) => {
                    tracing::info!("Saved voyage {}", saved.title());
                    board.write().submit_succeeded();
                    load_voyages(board, client).await;
                }
                Err(e) => {
                    tracing::error!("Failed to save voyage: {}", e);
                    board.write().submit_failed(e.to_string());
                }
            }
        });
    };

    let on_field = move |(field, raw): (Field, String)| {
        let applied = board.write().update_field(field, &raw);
        if let Err(e) = applied {
            tracing::warn!("Rejected input: {}", e);
        }
    };

    let page_items = board.read().page_items().to_vec();
    let loading = board.read().loading;
    let page = board.read().paginator.page();
    let total_pages = board.read().total_pages();
    let editor = board.read().editor().cloned();

    rsx! {
        div {
            class: "app",
            Header { on_logout: move |_| board.write().reset() }
            main {
                class: "voyages",
                div {
                    class: "voyages-toolbar",
                    h2 { "Voyages" }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| board.write().open_new(),
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        "Add Voyage"
                    }
                }
                VoyageList {
                    voyages: page_items,
                    loading,
                    on_select: move |voyage| board.write().open_existing(voyage),
                }
                PaginationControls {
                    page,
                    total_pages,
                    on_prev: move |_| board.write().prev_page(),
                    on_next: move |_| board.write().next_page(),
                }
            }
            Footer {}
            if let Some(editor) = editor {
                VoyageForm {
                    editor,
                    on_field,
                    on_edit: move |_| board.write().begin_edit(),
                    on_cancel: move |_| board.write().cancel_edit(),
                    on_close: move |_| board.write().close(),
                    on_save: save,
                }
            }
        }
    }
}
