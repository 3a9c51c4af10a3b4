use contracts::domain::city::City;
use contracts::domain::country::Country;
use leptos::prelude::*;

use super::service::{city_service, CityService};
use crate::domain::country::service::country_service;
use crate::shared::context::AppContext;
use crate::shared::update_controller::{load_options, UpdateController};
use crate::shared::validation::{number, text, FieldRules, Rule};

const RULES: &[FieldRules<City>] = &[
    FieldRules {
        field: "name",
        read: |c: &City| text(&c.name),
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "latitude",
        read: |c: &City| number(&c.latitude),
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "longitude",
        read: |c: &City| number(&c.longitude),
        rules: &[Rule::Required],
    },
];

/// Form view-model for one city and its selectable countries.
#[derive(Clone)]
pub struct CityDetailsViewModel {
    pub form: UpdateController<City, CityService>,
    pub countries: RwSignal<Vec<Country>>,
    ctx: AppContext,
}

impl CityDetailsViewModel {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            form: UpdateController::new(city_service(), ctx.clone(), RULES),
            countries: RwSignal::new(Vec::new()),
            ctx,
        }
    }

    pub fn load(&self, id: Option<i64>) {
        self.form.initialize_command(id);
        leptos::task::spawn_local(load_options(
            country_service(),
            self.countries,
            self.ctx.alerts.clone(),
        ));
    }
}
