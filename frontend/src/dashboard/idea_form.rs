use ideas::{Category, IdeaDraft, Priority, Status};
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::{Event, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

const FIELD_CLASS: &str = "w-full px-4 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-indigo-500 focus:border-transparent";

// Helper to read "value" from any event target without HtmlSelectElement.
fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    let js_value = Reflect::get(target.as_ref(), &JsValue::from_str("value")).ok()?;
    js_value.as_string()
}

#[derive(Properties, PartialEq)]
pub struct IdeaFormPanelProps {
    pub draft: IdeaDraft,
    pub editing: bool,
    pub on_change: Callback<IdeaDraft>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(IdeaFormPanel)]
pub fn idea_form_panel(props: &IdeaFormPanelProps) -> Html {
    // Every field edit emits a full copy of the draft with one field replaced.
    let edit = |apply: fn(&mut IdeaDraft, String)| {
        let draft = props.draft.clone();
        let on_change = props.on_change.clone();
        move |value: String| {
            let mut draft = draft.clone();
            apply(&mut draft, value);
            on_change.emit(draft);
        }
    };

    let on_title_input = {
        let set = edit(|draft, value| draft.title = value);
        Callback::from(move |e: InputEvent| {
            set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_description_input = {
        let set = edit(|draft, value| draft.description = value);
        Callback::from(move |e: InputEvent| {
            set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    let on_category_change = {
        let set = edit(|draft, value| draft.category = Category::from(value));
        Callback::from(move |e: Event| {
            if let Some(value) = event_value(&e) {
                set(value);
            }
        })
    };

    let on_priority_change = {
        let set = edit(|draft, value| {
            if let Some(priority) = Priority::from_key(&value) {
                draft.priority = priority;
            }
        });
        Callback::from(move |e: Event| {
            if let Some(value) = event_value(&e) {
                set(value);
            }
        })
    };

    let on_status_change = {
        let set = edit(|draft, value| {
            if let Some(status) = Status::from_key(&value) {
                draft.status = status;
            }
        });
        Callback::from(move |e: Event| {
            if let Some(value) = event_value(&e) {
                set(value);
            }
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| on_submit.emit(()))
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let draft = &props.draft;
    let mut categories = Category::all_variants();
    // Keep a stored label that is no longer offered selectable.
    if !draft.category.is_known() {
        categories.push(draft.category.clone());
    }

    html! {
        <div class="bg-white rounded-lg shadow-lg p-6 mb-6 border-2 border-indigo-200">
            <h3 class="text-xl font-semibold mb-4 text-gray-800">
                { if props.editing { "Edit Video Idea" } else { "New Video Idea" } }
            </h3>
            <div class="space-y-4">
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Title"}</label>
                    <input
                        type="text"
                        class={FIELD_CLASS}
                        placeholder="Enter video title..."
                        value={draft.title.clone()}
                        oninput={on_title_input}
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Description"}</label>
                    <textarea
                        class={FIELD_CLASS}
                        rows="3"
                        placeholder="Describe your video idea..."
                        value={draft.description.clone()}
                        oninput={on_description_input}
                    />
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <label class="block text-sm font-medium text-gray-700">
                        {"Category"}
                        <select class={FIELD_CLASS} onchange={on_category_change}>
                            {
                                for categories.into_iter().map(|category| html! {
                                    <option value={category.label().to_string()} selected={category == draft.category}>
                                        { category.label().to_string() }
                                    </option>
                                })
                            }
                        </select>
                    </label>
                    <label class="block text-sm font-medium text-gray-700">
                        {"Priority"}
                        <select class={FIELD_CLASS} onchange={on_priority_change}>
                            {
                                for Priority::all_variants().into_iter().map(|priority| html! {
                                    <option value={priority.key()} selected={priority == draft.priority}>
                                        { priority.display_name() }
                                    </option>
                                })
                            }
                        </select>
                    </label>
                    <label class="block text-sm font-medium text-gray-700">
                        {"Status"}
                        <select class={FIELD_CLASS} onchange={on_status_change}>
                            {
                                for Status::all_variants().into_iter().map(|status| html! {
                                    <option value={status.key()} selected={status == draft.status}>
                                        { status.display_name() }
                                    </option>
                                })
                            }
                        </select>
                    </label>
                </div>
                <div class="flex gap-2 pt-2">
                    <button
                        onclick={on_submit}
                        class="bg-green-600 text-white px-6 py-2 rounded-lg hover:bg-green-700 transition-colors"
                    >
                        { if props.editing { "Update Idea" } else { "Add Idea" } }
                    </button>
                    <button
                        onclick={on_cancel}
                        class="bg-gray-500 text-white px-6 py-2 rounded-lg hover:bg-gray-600 transition-colors"
                    >
                        {"Cancel"}
                    </button>
                </div>
            </div>
        </div>
    }
}
