use dioxus::prelude::*;
use store::QuantityUnit;

use crate::board::{Editor, FormMode};
use crate::components::{Banner, Button, ButtonVariant, Input, Label, Textarea};
use crate::draft::{CargoField, Field, VoyageDraft};
use crate::icons::FaXmark;
use crate::views::ModalOverlay;
use crate::Icon;

const SECTIONS: [(&str, &[Field]); 6] = [
    ("Vessel & Voyage Number", &[Field::VesselName, Field::VoyageNumber]),
    (
        "Departure Info",
        &[Field::DepartureDate, Field::DeparturePort, Field::DepartureCountry],
    ),
    (
        "Arrival Info",
        &[Field::ArrivalDate, Field::ArrivalPort, Field::ArrivalCountry],
    ),
    (
        "Cargo Info",
        &[
            Field::Cargo(CargoField::Type),
            Field::Cargo(CargoField::QuantityUnit),
            Field::Cargo(CargoField::Total),
            Field::Cargo(CargoField::RateUsd),
        ],
    ),
    ("Agent & Consignee", &[Field::Agent, Field::Consignee]),
    ("Remarks", &[Field::Remarks]),
];

/// Modal showing one voyage, read-only in view mode and editable in edit
/// mode.
#[component]
pub fn VoyageForm(
    editor: Editor,
    on_field: EventHandler<(Field, String)>,
    on_edit: EventHandler<()>,
    on_cancel: EventHandler<()>,
    on_close: EventHandler<()>,
    on_save: EventHandler<()>,
) -> Element {
    let title = editor.title();
    let editing = editor.mode == FormMode::Edit;
    let saving = editor.saving;
    let locked = !editing || saving;
    let save_label = if saving { "Saving..." } else { "Save" };

    rsx! {
        ModalOverlay {
            on_close: move |_| {
                if !saving {
                    on_close.call(());
                }
            },
            form {
                class: "voyage-form",
                novalidate: true,
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_save.call(());
                },
                div {
                    class: "voyage-form-header",
                    h2 { "{title}" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        title: "Close",
                        disabled: saving,
                        onclick: move |_| on_close.call(()),
                        Icon { icon: FaXmark, width: 14, height: 14 }
                    }
                }
                if let Some(error) = editor.error.clone() {
                    Banner { message: error }
                }
                div {
                    class: "voyage-form-body",
                    for (heading, fields) in SECTIONS {
                        fieldset {
                            key: "{heading}",
                            class: "voyage-form-section",
                            legend { "{heading}" }
                            for (key, field) in fields.iter().map(|&f| (f.input_name(), f)) {
                                DraftField {
                                    key: "{key}",
                                    field,
                                    draft: editor.draft.clone(),
                                    disabled: locked,
                                    on_input: on_field,
                                }
                            }
                        }
                    }
                }
                div {
                    class: "voyage-form-actions",
                    if editing {
                        Button {
                            variant: ButtonVariant::Secondary,
                            disabled: saving,
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                        Button {
                            r#type: "submit",
                            disabled: saving,
                            "{save_label}"
                        }
                    } else {
                        Button {
                            onclick: move |_| on_edit.call(()),
                            "Edit"
                        }
                    }
                }
            }
        }
    }
}

/// Label plus the input control matching the field's kind.
#[component]
fn DraftField(
    field: Field,
    draft: VoyageDraft,
    disabled: bool,
    on_input: EventHandler<(Field, String)>,
) -> Element {
    let name = field.input_name().to_string();
    let label = field.label();
    let required = field.is_required();
    let value = draft.value(field);
    let oninput = move |raw: String| on_input.call((field, raw));

    let control = match field {
        Field::Cargo(CargoField::QuantityUnit) => rsx! {
            select {
                id: "{name}",
                name: "{name}",
                class: "field-input",
                disabled: disabled,
                value: "{value}",
                onchange: move |evt: FormEvent| oninput(evt.value()),
                for unit in QuantityUnit::ALL {
                    option {
                        value: unit.as_str(),
                        selected: unit.as_str() == value,
                        "{unit}"
                    }
                }
            }
        },
        Field::Remarks => rsx! {
            Textarea {
                id: name.clone(),
                name: name.clone(),
                value,
                disabled,
                oninput,
            }
        },
        _ => {
            let input_type = String::from(if field.is_date() { "date" } else { "text" });
            rsx! {
                Input {
                    id: name.clone(),
                    name: name.clone(),
                    r#type: input_type,
                    value,
                    disabled,
                    required,
                    oninput,
                }
            }
        }
    };

    rsx! {
        div {
            class: "voyage-form-field",
            Label { html_for: name.clone(), required, "{label}" }
            {control}
        }
    }
}
