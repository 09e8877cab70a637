use crate::error::StoreResult;
use crate::models::{IdeaDraft, IdeaId};
use crate::storage::IdeaPersistence;
use crate::store::IdeaStore;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Idle,
    Adding,
    Editing(IdeaId),
}

/// The add/edit form: its mode plus the draft being edited.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdeaForm {
    mode: FormMode,
    draft: IdeaDraft,
}

impl IdeaForm {
    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn draft(&self) -> &IdeaDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut IdeaDraft {
        &mut self.draft
    }

    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Idle
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }

    /// Opens a blank form. Any draft in progress is discarded.
    pub fn start_add(&mut self) {
        self.mode = FormMode::Adding;
        self.draft = IdeaDraft::default();
    }

    /// Opens the form bound to `id`, prefilled from the stored record.
    /// Returns `false` and leaves the form untouched if `id` is unknown.
    pub fn start_edit<P: IdeaPersistence>(&mut self, store: &IdeaStore<P>, id: &str) -> bool {
        match store.get(id) {
            Some(idea) => {
                self.draft = idea.to_draft();
                self.mode = FormMode::Editing(idea.id.clone());
                true
            }
            None => false,
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Hands the draft to the store and closes the form.
    ///
    /// The form is reset even when persisting fails, since the store has
    /// already applied the change in memory. Returns the affected id, or
    /// `None` when idle or when the edited record no longer exists.
    pub fn submit<P: IdeaPersistence>(
        &mut self,
        store: &mut IdeaStore<P>,
    ) -> StoreResult<Option<IdeaId>> {
        let IdeaForm { mode, draft } = std::mem::take(self);
        match mode {
            FormMode::Idle => Ok(None),
            FormMode::Adding => store.add(draft).map(Some),
            FormMode::Editing(id) => {
                let updated = store.update(&id, draft)?;
                Ok(updated.then_some(id))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Priority, Status};
    use crate::storage::{JsonPersistence, MemoryStorage};
    use crate::store::InitStrategy;

    fn store() -> IdeaStore<JsonPersistence<MemoryStorage>> {
        IdeaStore::initialize(
            JsonPersistence::with_default_key(MemoryStorage::new()),
            InitStrategy::LoadOrSeed,
        )
    }

    #[test]
    fn starts_idle() {
        let form = IdeaForm::default();
        assert_eq!(form.mode(), &FormMode::Idle);
        assert!(!form.is_open());
    }

    #[test]
    fn add_flow_prepends_and_closes() {
        let mut store = store();
        let mut form = IdeaForm::default();

        form.start_add();
        assert_eq!(form.mode(), &FormMode::Adding);
        form.draft_mut().title = "Cadence drills".into();
        form.draft_mut().priority = Priority::Low;

        let id = form.submit(&mut store).unwrap().unwrap();

        assert_eq!(form, IdeaForm::default());
        assert_eq!(store.len(), 4);
        assert_eq!(store.ideas()[0].id, id);
        assert_eq!(store.ideas()[0].title, "Cadence drills");
    }

    #[test]
    fn edit_prefills_from_record() {
        let store = store();
        let mut form = IdeaForm::default();

        assert!(form.start_edit(&store, "2"));

        assert_eq!(form.mode(), &FormMode::Editing("2".into()));
        assert_eq!(form.draft().category, Category::GearReviews);
        assert_eq!(form.draft(), &store.get("2").unwrap().to_draft());
    }

    #[test]
    fn edit_of_unknown_id_is_ignored() {
        let store = store();
        let mut form = IdeaForm::default();
        form.start_add();
        form.draft_mut().title = "keep me".into();

        assert!(!form.start_edit(&store, "404"));
        assert_eq!(form.mode(), &FormMode::Adding);
        assert_eq!(form.draft().title, "keep me");
    }

    #[test]
    fn edit_flow_updates_record() {
        let mut store = store();
        let mut form = IdeaForm::default();
        let created_at = store.get("3").unwrap().created_at;

        form.start_edit(&store, "3");
        form.draft_mut().status = Status::Published;
        let id = form.submit(&mut store).unwrap();

        assert_eq!(id.as_deref(), Some("3"));
        assert!(!form.is_open());
        let idea = store.get("3").unwrap();
        assert_eq!(idea.status, Status::Published);
        assert_eq!(idea.created_at, created_at);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn cancel_discards_draft() {
        let mut store = store();
        let before = store.ideas().to_vec();
        let mut form = IdeaForm::default();

        form.start_edit(&store, "1");
        form.draft_mut().title = "scrapped".into();
        form.cancel();

        assert_eq!(form, IdeaForm::default());
        assert_eq!(form.submit(&mut store).unwrap(), None);
        assert_eq!(store.ideas(), before.as_slice());
    }

    #[test]
    fn switching_modes_replaces_draft() {
        let store = store();
        let mut form = IdeaForm::default();

        form.start_edit(&store, "1");
        form.start_add();
        assert_eq!(form.mode(), &FormMode::Adding);
        assert_eq!(form.draft(), &IdeaDraft::default());

        form.start_edit(&store, "3");
        assert!(form.is_editing());
    }

    #[test]
    fn editing_a_removed_record_is_a_no_op() {
        let mut store = store();
        let mut form = IdeaForm::default();

        form.start_edit(&store, "1");
        store.remove("1").unwrap();

        assert_eq!(form.submit(&mut store).unwrap(), None);
        assert_eq!(store.len(), 2);
        assert!(!form.is_open());
    }
}
