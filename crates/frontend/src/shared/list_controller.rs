//! Fetch, paging, submit and delete wiring behind every list screen.
//!
//! A screen builds one [`ListController`] around its [`ListStore`] and hands
//! the controller's methods to its buttons. The controller is `Copy`, so it
//! can be moved into any number of event handlers.

use contracts::shared::{EntityId, FormModel, Resource};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::{use_gateway, Attachment, Gateway};
use super::browser::confirm;
use super::list_store::{ListStore, NoFilter, PageOwner, RowFilter};
use super::modal_form::ModalForm;
use super::notify::{use_notifier, Notifier};

/// Notification texts of one resource.
#[derive(Debug, Clone, Copy)]
pub struct CrudText {
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub fetch_failed: &'static str,
    pub create_failed: &'static str,
    pub update_failed: &'static str,
    pub delete_failed: &'static str,
}

pub struct ListController<R: Resource, F: 'static = NoFilter> {
    gateway: StoredValue<Gateway<R>>,
    pub store: RwSignal<ListStore<R::Record, F>>,
    pub loading: ReadSignal<bool>,
    set_loading: WriteSignal<bool>,
    pub saving: ReadSignal<bool>,
    set_saving: WriteSignal<bool>,
    notifier: Notifier,
    text: CrudText,
    refetch_after_delete: bool,
}

impl<R: Resource, F: 'static> Clone for ListController<R, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource, F: 'static> Copy for ListController<R, F> {}

impl<R, F> ListController<R, F>
where
    R: Resource,
    R::Record: Send + Sync,
    F: RowFilter<R::Record> + Send + Sync + 'static,
{
    pub fn new(store: ListStore<R::Record, F>, text: CrudText) -> Self {
        let (loading, set_loading) = signal(false);
        let (saving, set_saving) = signal(false);
        Self {
            gateway: StoredValue::new(use_gateway::<R>()),
            store: RwSignal::new(store),
            loading,
            set_loading,
            saving,
            set_saving,
            notifier: use_notifier(),
            text,
            refetch_after_delete: false,
        }
    }

    /// Reload the whole list after a successful delete instead of only
    /// dropping the row.
    pub fn refetch_after_delete(mut self) -> Self {
        self.refetch_after_delete = true;
        self
    }

    pub fn fetch(self) {
        let gateway = self.gateway.get_value();
        let query = self.store.with_untracked(|s| s.query());
        self.set_loading.set(true);
        spawn_local(async move {
            match gateway.list(query).await {
                Ok(page) => self.store.update(|s| s.replace(page)),
                Err(e) => self.notifier.report(&e, self.text.fetch_failed),
            }
            self.set_loading.set(false);
        });
    }

    /// Move to `page`; a server-owned list is refetched for it.
    pub fn go_to(self, page: usize) {
        let moved = self.store.try_update(|s| s.go_to(page)).unwrap_or(false);
        if moved && self.store.with_untracked(|s| s.owner()) == PageOwner::Server {
            self.fetch();
        }
    }

    pub fn set_filter(self, filter: F) {
        self.store.update(|s| s.set_filter(filter));
    }

    /// Validate `form` and send it. `cleanup` runs once the request settles,
    /// right before the dialog closes.
    pub fn submit<M>(
        self,
        form: RwSignal<ModalForm<M>>,
        attachment: Option<Attachment>,
        cleanup: impl FnOnce() + 'static,
    ) where
        M: FormModel<Record = R::Record, Draft = R::Draft> + Send + Sync + 'static,
    {
        if self.saving.get_untracked() {
            return;
        }
        let Some(submission) = form.try_update(|f| f.submit()).flatten() else {
            return;
        };
        let is_create = submission.is_create();
        let gateway = self.gateway.get_value();
        let text = self.text;
        self.set_saving.set(true);
        spawn_local(async move {
            match gateway.submit(submission, attachment).await {
                Ok(()) => {
                    self.notifier
                        .success(if is_create { text.created } else { text.updated });
                    self.fetch();
                }
                Err(e) if is_create => self.notifier.report(&e, text.create_failed),
                Err(e) => self.notifier.report(&e, text.update_failed),
            }
            cleanup();
            form.update(|f| f.close());
            self.set_saving.set(false);
        });
    }

    /// Ask `prompt`, then delete row `id`. The row leaves the list only once
    /// the backend has accepted the delete.
    pub fn delete(self, id: EntityId, prompt: &str) {
        if !confirm(prompt) {
            return;
        }
        let gateway = self.gateway.get_value();
        spawn_local(async move {
            match gateway.delete(id).await {
                Ok(()) => {
                    self.store.update(|s| {
                        s.remove(id);
                    });
                    self.notifier.success(self.text.deleted);
                    if self.refetch_after_delete {
                        self.fetch();
                    }
                }
                Err(e) => self.notifier.report(&e, self.text.delete_failed),
            }
        });
    }
}
