//! Generic update/create form view-model: one draft entity, its validation
//! state, and the create-or-update submission.

use std::rc::Rc;

use contracts::domain::common::EntityRecord;
use leptos::prelude::*;

use super::alert::{AlertSink, ToastVariant};
use super::api::entity_service::EntityService;
use super::context::AppContext;
use super::i18n::APP_KEY;
use super::validation::{validate, FieldRules, ValidationState};

/// Owns exactly one draft being created or edited. Relationship option sets
/// live on the per-entity view-model that wraps this controller, filled by
/// [`load_options`] tasks running concurrently with `initialize`.
pub struct UpdateController<T, S>
where
    T: EntityRecord + Default + Send + Sync + 'static,
    S: EntityService<T> + Clone + 'static,
{
    service: S,
    ctx: AppContext,
    schema: &'static [FieldRules<T>],
    pub entity: RwSignal<T>,
    pub is_saving: RwSignal<bool>,
    pub validation: RwSignal<ValidationState>,
}

impl<T, S> Clone for UpdateController<T, S>
where
    T: EntityRecord + Default + Send + Sync + 'static,
    S: EntityService<T> + Clone + 'static,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            ctx: self.ctx.clone(),
            schema: self.schema,
            entity: self.entity,
            is_saving: self.is_saving,
            validation: self.validation,
        }
    }
}

impl<T, S> UpdateController<T, S>
where
    T: EntityRecord + Default + Send + Sync + 'static,
    S: EntityService<T> + Clone + 'static,
{
    pub fn new(service: S, ctx: AppContext, schema: &'static [FieldRules<T>]) -> Self {
        Self {
            service,
            ctx,
            schema,
            entity: RwSignal::new(T::default()),
            is_saving: RwSignal::new(false),
            validation: RwSignal::new(ValidationState::default()),
        }
    }

    /// Edit mode when an identifier is given: fetch the record (timestamp
    /// fields are converted from their wire text while decoding). Create
    /// mode otherwise: the draft keeps its type-declared defaults.
    /// Validation runs once either way.
    pub async fn initialize(&self, id: Option<i64>) {
        if let Some(existing) = id {
            match self.service.find(existing).await {
                Ok(found) => self.entity.set(found),
                Err(error) => self.ctx.alerts.http_error(&error),
            }
        }
        self.validate();
    }

    /// Advisory only: fills the per-field hint state and never blocks
    /// `save` — the backend is the authoritative gate.
    pub fn validate(&self) {
        let state = validate(
            &self.entity.get_untracked(),
            self.schema,
            self.ctx.i18n.as_ref(),
        );
        self.validation.set(state);
    }

    /// Create or update based solely on the presence of the identifier.
    /// On success navigate back and notify with the returned id; on
    /// failure keep the draft untouched so the user can retry.
    pub async fn save(&self) {
        self.is_saving.set(true);
        let current = self.entity.get_untracked();
        if current.id().is_some() {
            match self.service.update(&current).await {
                Ok(saved) => {
                    self.is_saving.set(false);
                    self.ctx.navigator.back();
                    let message = self.notification("updated", &saved);
                    self.ctx.alerts.info(&message, ToastVariant::Info);
                }
                Err(error) => {
                    self.is_saving.set(false);
                    self.ctx.alerts.http_error(&error);
                }
            }
        } else {
            match self.service.create(&current).await {
                Ok(saved) => {
                    self.is_saving.set(false);
                    self.ctx.navigator.back();
                    let message = self.notification("created", &saved);
                    self.ctx.alerts.success(&message);
                }
                Err(error) => {
                    self.is_saving.set(false);
                    self.ctx.alerts.http_error(&error);
                }
            }
        }
    }

    fn notification(&self, op: &str, saved: &T) -> String {
        let key = format!("{APP_KEY}.{}.{op}", T::message_key());
        let id = saved.id().map(|id| id.to_string()).unwrap_or_default();
        self.ctx.i18n.translate(&key, &[("param", &id)])
    }

    pub fn initialize_command(&self, id: Option<i64>) {
        let this = self.clone();
        leptos::task::spawn_local(async move { this.initialize(id).await });
    }

    pub fn save_command(&self) {
        let this = self.clone();
        leptos::task::spawn_local(async move { this.save().await });
    }
}

/// Fill one relationship option set from the foreign collection (first
/// page). Each relationship loads as its own task; one failing does not
/// block the others, it only reports through the alert collaborator.
pub async fn load_options<F, SF>(service: SF, options: RwSignal<Vec<F>>, alerts: Rc<dyn AlertSink>)
where
    F: EntityRecord + Send + Sync + 'static,
    SF: EntityService<F>,
{
    match service.retrieve(None).await {
        Ok(page) => options.set(page.data),
        Err(error) => alerts.http_error(&error),
    }
}

/// Keep the instance already held in a multi-select when the backing
/// option list is refetched, so widget identity is preserved; fall back
/// to the candidate itself.
pub fn get_selected_by<F, K>(selected: &[F], option: &F, key: impl Fn(&F) -> K) -> F
where
    F: Clone,
    K: PartialEq,
{
    selected
        .iter()
        .find(|value| key(value) == key(option))
        .cloned()
        .unwrap_or_else(|| option.clone())
}

/// [`get_selected_by`] keyed on the record identifier.
pub fn get_selected<F: EntityRecord>(selected: &[F], option: &F) -> F {
    get_selected_by(selected, option, EntityRecord::id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::{ApiError, PageResponse};
    use crate::shared::i18n::MessageCatalog;
    use crate::shared::navigation::Navigator;
    use crate::shared::validation::{text, Rule};
    use contracts::domain::common::PageQuery;
    use contracts::domain::country::Country;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    #[derive(Clone, Debug, PartialEq)]
    enum Call {
        Find(i64),
        Retrieve,
        Create,
        Update,
    }

    #[derive(Clone, Default)]
    struct FakeService {
        calls: Rc<RefCell<Vec<Call>>>,
        stored: Option<Country>,
        assign_id: Option<i64>,
        fail_save: bool,
        fail_retrieve: bool,
    }

    impl EntityService<Country> for FakeService {
        async fn find(&self, id: i64) -> Result<Country, ApiError> {
            self.calls.borrow_mut().push(Call::Find(id));
            self.stored.clone().ok_or(ApiError::Status {
                status: 404,
                body: String::new(),
            })
        }

        async fn retrieve(
            &self,
            _query: Option<&PageQuery>,
        ) -> Result<PageResponse<Country>, ApiError> {
            self.calls.borrow_mut().push(Call::Retrieve);
            if self.fail_retrieve {
                return Err(ApiError::Network("connection refused".to_string()));
            }
            Ok(PageResponse {
                data: self.stored.clone().into_iter().collect(),
                total_count: None,
            })
        }

        async fn search(
            &self,
            _term: &str,
            _query: Option<&PageQuery>,
        ) -> Result<PageResponse<Country>, ApiError> {
            Ok(PageResponse {
                data: Vec::new(),
                total_count: None,
            })
        }

        async fn create(&self, entity: &Country) -> Result<Country, ApiError> {
            self.calls.borrow_mut().push(Call::Create);
            if self.fail_save {
                return Err(ApiError::Status {
                    status: 400,
                    body: "invalid".to_string(),
                });
            }
            let mut saved = entity.clone();
            saved.id = self.assign_id;
            Ok(saved)
        }

        async fn update(&self, entity: &Country) -> Result<Country, ApiError> {
            self.calls.borrow_mut().push(Call::Update);
            if self.fail_save {
                return Err(ApiError::Status {
                    status: 400,
                    body: "invalid".to_string(),
                });
            }
            Ok(entity.clone())
        }

        async fn partial_update(&self, entity: &Country) -> Result<Country, ApiError> {
            Ok(entity.clone())
        }

        async fn delete(&self, _id: i64) -> Result<(), ApiError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingAlerts {
        errors: RefCell<Vec<String>>,
        toasts: RefCell<Vec<(String, ToastVariant)>>,
    }

    impl AlertSink for RecordingAlerts {
        fn http_error(&self, error: &ApiError) {
            self.errors.borrow_mut().push(error.to_string());
        }

        fn info(&self, message: &str, variant: ToastVariant) {
            self.toasts.borrow_mut().push((message.to_string(), variant));
        }

        fn success(&self, message: &str) {
            self.toasts
                .borrow_mut()
                .push((message.to_string(), ToastVariant::Success));
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        backs: Cell<usize>,
    }

    impl Navigator for RecordingNavigator {
        fn back(&self) {
            self.backs.set(self.backs.get() + 1);
        }
    }

    const SCHEMA: &[FieldRules<Country>] = &[
        FieldRules {
            field: "name",
            read: |c: &Country| text(&c.name),
            rules: &[Rule::Required],
        },
        FieldRules {
            field: "code",
            read: |c: &Country| text(&c.code),
            rules: &[Rule::Required],
        },
    ];

    struct Harness {
        form: UpdateController<Country, FakeService>,
        alerts: Rc<RecordingAlerts>,
        navigator: Rc<RecordingNavigator>,
    }

    fn harness(service: FakeService) -> Harness {
        let alerts = Rc::new(RecordingAlerts::default());
        let navigator = Rc::new(RecordingNavigator::default());
        let ctx = AppContext::new(
            alerts.clone(),
            navigator.clone(),
            Rc::new(MessageCatalog::new()),
        );
        Harness {
            form: UpdateController::new(service, ctx, SCHEMA),
            alerts,
            navigator,
        }
    }

    fn country(id: i64) -> Country {
        Country {
            id: Some(id),
            name: Some(format!("country-{id}")),
            code: Some("XX".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_initialize_create_mode_keeps_defaults_and_validates() {
        let service = FakeService::default();
        let h = harness(service.clone());
        block_on(h.form.initialize(None));

        assert!(service.calls.borrow().is_empty());
        assert_eq!(h.form.entity.get_untracked().id, None);
        // required hints are present for the empty draft
        let validation = h.form.validation.get_untracked();
        assert!(!validation.is_valid());
        assert!(!validation.field_errors("name").is_empty());
    }

    #[test]
    fn test_initialize_edit_mode_loads_the_record() {
        let service = FakeService {
            stored: Some(country(5)),
            ..Default::default()
        };
        let h = harness(service.clone());
        block_on(h.form.initialize(Some(5)));

        assert_eq!(service.calls.borrow().as_slice(), &[Call::Find(5)]);
        assert_eq!(h.form.entity.get_untracked(), country(5));
        assert!(h.form.validation.get_untracked().is_valid());
    }

    #[test]
    fn test_initialize_edit_mode_failure_goes_to_alerts() {
        let service = FakeService::default();
        let h = harness(service.clone());
        block_on(h.form.initialize(Some(5)));

        assert_eq!(h.alerts.errors.borrow().len(), 1);
        assert_eq!(h.form.entity.get_untracked(), Country::default());
    }

    #[test]
    fn test_save_without_id_creates_even_when_invalid() {
        let service = FakeService {
            assign_id: Some(9),
            ..Default::default()
        };
        let h = harness(service.clone());
        block_on(h.form.initialize(None));
        assert!(!h.form.validation.get_untracked().is_valid());

        block_on(h.form.save());

        // client-side validation is advisory: the empty draft is submitted
        assert_eq!(service.calls.borrow().as_slice(), &[Call::Create]);
        assert_eq!(h.navigator.backs.get(), 1);
        assert!(!h.form.is_saving.get_untracked());
        let toasts = h.alerts.toasts.borrow();
        assert_eq!(
            toasts.as_slice(),
            &[(
                "A new country is created with identifier 9".to_string(),
                ToastVariant::Success
            )]
        );
    }

    #[test]
    fn test_save_with_id_updates() {
        let service = FakeService::default();
        let h = harness(service.clone());
        h.form.entity.set(country(5));

        block_on(h.form.save());

        assert_eq!(service.calls.borrow().as_slice(), &[Call::Update]);
        let toasts = h.alerts.toasts.borrow();
        assert_eq!(
            toasts.as_slice(),
            &[(
                "A country is updated with identifier 5".to_string(),
                ToastVariant::Info
            )]
        );
    }

    #[test]
    fn test_create_then_edit_switches_operation_on_id_presence() {
        let service = FakeService {
            assign_id: Some(9),
            ..Default::default()
        };
        let h = harness(service.clone());
        h.form.entity.update(|c| c.name = Some("new".to_string()));
        block_on(h.form.save());
        assert_eq!(service.calls.borrow().as_slice(), &[Call::Create]);

        // an edit session on the saved record carries the assigned id
        h.form.entity.update(|c| c.id = Some(9));
        block_on(h.form.save());
        assert_eq!(
            service.calls.borrow().as_slice(),
            &[Call::Create, Call::Update]
        );
    }

    #[test]
    fn test_save_failure_keeps_draft_for_retry() {
        let service = FakeService {
            fail_save: true,
            ..Default::default()
        };
        let h = harness(service.clone());
        let draft = Country {
            name: Some("draft".to_string()),
            ..Default::default()
        };
        h.form.entity.set(draft.clone());

        block_on(h.form.save());

        assert!(!h.form.is_saving.get_untracked());
        assert_eq!(h.form.entity.get_untracked(), draft);
        assert_eq!(h.navigator.backs.get(), 0);
        assert_eq!(h.alerts.errors.borrow().len(), 1);
        assert!(h.alerts.toasts.borrow().is_empty());
    }

    #[test]
    fn test_load_options_failure_does_not_block_the_others() {
        let ok = FakeService {
            stored: Some(country(1)),
            ..Default::default()
        };
        let failing = FakeService {
            fail_retrieve: true,
            ..Default::default()
        };
        let alerts = Rc::new(RecordingAlerts::default());
        let sink: Rc<dyn AlertSink> = alerts.clone();
        let countries = RwSignal::new(Vec::<Country>::new());
        let more = RwSignal::new(Vec::<Country>::new());

        block_on(futures::future::join(
            load_options(failing, countries, sink.clone()),
            load_options(ok, more, sink.clone()),
        ));

        assert!(countries.get_untracked().is_empty());
        assert_eq!(more.get_untracked().len(), 1);
        assert_eq!(alerts.errors.borrow().len(), 1);
    }

    #[test]
    fn test_get_selected_preserves_identity() {
        let held = Country {
            id: Some(1),
            name: Some("held".to_string()),
            ..Default::default()
        };
        let refetched = Country {
            id: Some(1),
            name: Some("refetched".to_string()),
            ..Default::default()
        };
        let other = country(2);

        let selected = vec![held.clone()];
        assert_eq!(get_selected(&selected, &refetched), held);
        assert_eq!(get_selected(&selected, &other), other);
        assert_eq!(get_selected(&[], &other), other);
    }
}
