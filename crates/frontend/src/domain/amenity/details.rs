use contracts::domain::amenity::Amenity;
use contracts::domain::property::Property;
use leptos::prelude::*;

use super::service::{amenity_service, AmenityService};
use crate::domain::property::service::property_service;
use crate::shared::context::AppContext;
use crate::shared::update_controller::{load_options, UpdateController};
use crate::shared::validation::{text, FieldRules, Rule};

const RULES: &[FieldRules<Amenity>] = &[
    FieldRules {
        field: "name",
        read: |a: &Amenity| text(&a.name),
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "iconClass",
        read: |a: &Amenity| text(&a.icon_class),
        rules: &[Rule::MaxLength(50)],
    },
];

/// Form view-model for one amenity. The properties option set backs the
/// inverse-side multi-select.
#[derive(Clone)]
pub struct AmenityDetailsViewModel {
    pub form: UpdateController<Amenity, AmenityService>,
    pub properties: RwSignal<Vec<Property>>,
    ctx: AppContext,
}

impl AmenityDetailsViewModel {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            form: UpdateController::new(amenity_service(), ctx.clone(), RULES),
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
