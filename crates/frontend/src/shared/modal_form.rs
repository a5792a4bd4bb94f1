//! State machine behind every create/edit dialog.
//!
//! `Closed -> Create | Edit(record) -> Closed`. A failed validation keeps the
//! dialog open with the message set; the caller only talks to the backend
//! when [`ModalForm::submit`] hands back a [`Submission`].

use contracts::shared::{FormModel, Record};

use super::api::Submission;

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode<R> {
    Closed,
    Create,
    Edit(R),
}

pub struct ModalForm<F: FormModel> {
    mode: FormMode<F::Record>,
    pub fields: F,
    error: Option<String>,
}

impl<F: FormModel> Clone for ModalForm<F> {
    fn clone(&self) -> Self {
        Self {
            mode: self.mode.clone(),
            fields: self.fields.clone(),
            error: self.error.clone(),
        }
    }
}

impl<F: FormModel> Default for ModalForm<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FormModel> ModalForm<F> {
    pub fn new() -> Self {
        Self {
            mode: FormMode::Closed,
            fields: F::default(),
            error: None,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.mode, FormMode::Closed)
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn editing(&self) -> Option<&F::Record> {
        match &self.mode {
            FormMode::Edit(record) => Some(record),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn open_create(&mut self) {
        self.mode = FormMode::Create;
        self.fields = F::default();
        self.error = None;
    }

    pub fn open_edit(&mut self, record: F::Record) {
        self.fields = F::from_record(&record);
        self.mode = FormMode::Edit(record);
        self.error = None;
    }

    /// Discard the dialog and whatever was typed into it.
    pub fn close(&mut self) {
        self.mode = FormMode::Closed;
        self.fields = F::default();
        self.error = None;
    }

    /// Validate the fields. `None` means there is nothing to send: the dialog
    /// is closed or validation failed (see [`ModalForm::error`]).
    pub fn submit(&mut self) -> Option<Submission<F::Draft>> {
        let result = match &self.mode {
            FormMode::Closed => return None,
            FormMode::Create => self.fields.to_draft(None).map(Submission::Create),
            FormMode::Edit(record) => {
                self.fields
                    .to_draft(Some(record))
                    .map(|draft| Submission::Update {
                        id: record.id(),
                        draft,
                    })
            }
        };

        match result {
            Ok(submission) => {
                self.error = None;
                Some(submission)
            }
            Err(message) => {
                self.error = Some(message);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_object::{Object, ObjectForm};
    use contracts::domain::common::NameDto;
    use contracts::system::users::{User, UserForm};

    fn object(id: i64, name: &str) -> Object {
        Object {
            id,
            name: name.into(),
        }
    }

    #[test]
    fn test_closed_form_submits_nothing() {
        let mut form = ModalForm::<ObjectForm>::new();
        assert!(!form.is_open());
        assert_eq!(form.submit(), None);
    }

    #[test]
    fn test_blank_name_keeps_dialog_open() {
        let mut form = ModalForm::<ObjectForm>::new();
        form.open_create();
        form.fields.name = "   ".into();

        assert_eq!(form.submit(), None);
        assert!(form.is_open());
        assert_eq!(form.error(), Some("Name is required"));
    }

    #[test]
    fn test_create_submission() {
        let mut form = ModalForm::<ObjectForm>::new();
        form.open_create();
        form.fields.name = " Ombor ".into();

        assert_eq!(
            form.submit(),
            Some(Submission::Create(NameDto {
                name: "Ombor".into()
            }))
        );
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_edit_prefills_and_targets_record() {
        let mut form = ModalForm::<ObjectForm>::new();
        form.open_edit(object(7, "Dala"));
        assert!(form.is_edit());
        assert_eq!(form.fields.name, "Dala");

        form.fields.name = "Dala 2".into();
        assert_eq!(
            form.submit(),
            Some(Submission::Update {
                id: 7,
                draft: NameDto {
                    name: "Dala 2".into()
                }
            })
        );
    }

    #[test]
    fn test_close_then_create_starts_empty() {
        let mut form = ModalForm::<ObjectForm>::new();
        form.open_edit(object(1, "Dala"));
        form.close();
        assert!(!form.is_open());

        form.open_create();
        assert_eq!(form.fields, ObjectForm::default());
        assert_eq!(form.editing(), None);
    }

    #[test]
    fn test_error_cleared_on_reopen() {
        let mut form = ModalForm::<ObjectForm>::new();
        form.open_create();
        assert_eq!(form.submit(), None);
        assert!(form.error().is_some());

        form.close();
        form.open_create();
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_user_password_only_required_on_create() {
        let user = User {
            id: 3,
            username: "ali".into(),
            role: Some("user".into()),
            is_superuser: false,
        };

        let mut form = ModalForm::<UserForm>::new();
        form.open_create();
        form.fields.username = "vali".into();
        assert_eq!(form.submit(), None);
        assert_eq!(form.error(), Some("Password is required"));

        form.open_edit(user);
        assert!(form.submit().is_some());
    }
}
