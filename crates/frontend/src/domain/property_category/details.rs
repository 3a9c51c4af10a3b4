use contracts::domain::property::Property;
use contracts::domain::property_category::PropertyCategory;
use leptos::prelude::*;

use super::service::{property_category_service, PropertyCategoryService};
use crate::domain::property::service::property_service;
use crate::shared::context::AppContext;
use crate::shared::update_controller::{load_options, UpdateController};
use crate::shared::validation::{text, FieldRules, Rule};

const RULES: &[FieldRules<PropertyCategory>] = &[FieldRules {
    field: "name",
    read: |c: &PropertyCategory| text(&c.name),
    rules: &[Rule::Required],
}];

/// Form view-model for one property category.
#[derive(Clone)]
pub struct PropertyCategoryDetailsViewModel {
    pub form: UpdateController<PropertyCategory, PropertyCategoryService>,
    pub properties: RwSignal<Vec<Property>>,
    ctx: AppContext,
}

impl PropertyCategoryDetailsViewModel {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            form: UpdateController::new(property_category_service(), ctx.clone(), RULES),
            properties: RwSignal::new(Vec::new()),
            ctx,
        }
    }

    pub fn load(&self, id: Option<i64>) {
        self.form.initialize_command(id);
        leptos::task::spawn_local(load_options(
            property_service(),
            self.properties,
            self.ctx.alerts.clone(),
        ));
    }
}
