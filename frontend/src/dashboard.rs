mod components;
mod idea_form;

use crate::env_variable_utils::ENV_CONFIG;
use crate::local_storage::LocalStorage;
use components::{ErrorMessage, IdeaList, StatsPanel};
use idea_form::IdeaFormPanel;
use ideas::{
    ChannelStats, FormMode, IdeaDraft, IdeaForm, IdeaId, IdeaStore, JsonPersistence, VideoIdea,
};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

pub type BrowserStore = IdeaStore<JsonPersistence<LocalStorage>>;

pub fn open_browser_store() -> BrowserStore {
    let persistence = JsonPersistence::new(LocalStorage, ENV_CONFIG.storage_key.clone());
    IdeaStore::initialize(persistence, ENV_CONFIG.init_strategy())
}

fn snapshot(store: &Rc<RefCell<BrowserStore>>) -> Vec<VideoIdea> {
    store.borrow().ideas().to_vec()
}

/// Key for the form panel. A new key remounts it, so the selects never keep
/// a choice made for a different record.
fn form_panel_key(mode: &FormMode) -> String {
    match mode {
        FormMode::Idle => "idle".to_string(),
        FormMode::Adding => "adding".to_string(),
        FormMode::Editing(id) => format!("editing-{id}"),
    }
}

#[function_component(ChannelManagerPage)]
pub fn channel_manager_page() -> Html {
    let store = use_mut_ref(open_browser_store);
    let ideas = {
        let store = store.clone();
        use_state(move || snapshot(&store))
    };
    let form = use_state(IdeaForm::default);
    let error_message = {
        let store = store.clone();
        use_state(move || store.borrow().origin().diagnostic())
    };
    let stats = ChannelStats::default();

    let on_start_add = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.start_add();
            form.set(next);
        })
    };

    let on_start_edit = {
        let store = store.clone();
        let form = form.clone();
        Callback::from(move |id: IdeaId| {
            let mut next = (*form).clone();
            if next.start_edit(&*store.borrow(), &id) {
                form.set(next);
            }
        })
    };

    let on_draft_change = {
        let form = form.clone();
        Callback::from(move |draft: IdeaDraft| {
            let mut next = (*form).clone();
            *next.draft_mut() = draft;
            form.set(next);
        })
    };

    let on_cancel = {
        let form = form.clone();
        Callback::from(move |_: ()| form.set(IdeaForm::default()))
    };

    let on_submit = {
        let store = store.clone();
        let ideas = ideas.clone();
        let form = form.clone();
        let error_message = error_message.clone();
        Callback::from(move |_: ()| {
            let mut next = (*form).clone();
            let result = next.submit(&mut *store.borrow_mut());
            if let Err(e) = result {
                error_message.set(Some(format!("Failed to save idea: {}", e)));
            }
            form.set(next);
            ideas.set(snapshot(&store));
        })
    };

    let on_delete = {
        let store = store.clone();
        let ideas = ideas.clone();
        let error_message = error_message.clone();
        Callback::from(move |id: IdeaId| {
            let result = store.borrow_mut().remove(&id);
            if let Err(e) = result {
                error_message.set(Some(format!("Failed to delete idea: {}", e)));
            }
            ideas.set(snapshot(&store));
        })
    };

    let on_dismiss_error = {
        let error_message = error_message.clone();
        Callback::from(move |_: MouseEvent| error_message.set(None))
    };

    html! {
        <main class="min-h-screen bg-gradient-to-br from-blue-50 to-indigo-100 p-4 md:p-8">
            <div class="max-w-7xl mx-auto">
                <div class="mb-8 text-center">
                    <h1 class="text-4xl font-bold text-gray-800 mb-2">{&ENV_CONFIG.app_name}</h1>
                    <p class="text-gray-600">{"Manage your running YouTube channel and video ideas"}</p>
                </div>

                <ErrorMessage error_message={(*error_message).clone()} on_dismiss={on_dismiss_error} />

                <StatsPanel stats={stats} />

                <div class="mb-6">
                    <button
                        onclick={on_start_add}
                        class="bg-indigo-600 text-white px-6 py-3 rounded-lg hover:bg-indigo-700 transition-colors shadow-md"
                    >
                        {"+ Add New Video Idea"}
                    </button>
                </div>

                {
                    if form.is_open() {
                        html! {
                            <IdeaFormPanel
                                key={form_panel_key(form.mode())}
                                draft={form.draft().clone()}
                                editing={form.is_editing()}
                                on_change={on_draft_change}
                                on_submit={on_submit}
                                on_cancel={on_cancel}
                            />
                        }
                    } else {
                        html! {}
                    }
                }

                <IdeaList
                    ideas={(*ideas).clone()}
                    on_edit={on_start_edit}
                    on_delete={on_delete}
                />
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_form_target_gets_its_own_panel_key() {
        let keys = [
            form_panel_key(&FormMode::Adding),
            form_panel_key(&FormMode::Editing("1".to_string())),
            form_panel_key(&FormMode::Editing("2".to_string())),
        ];

        assert_ne!(keys[0], keys[1]);
        assert_ne!(keys[1], keys[2]);
        assert_eq!(keys[1], form_panel_key(&FormMode::Editing("1".to_string())));
    }
}
