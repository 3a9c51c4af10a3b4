use contracts::domain::country::Country;

use super::service::{country_service, CountryService};
use crate::shared::context::AppContext;
use crate::shared::update_controller::UpdateController;
use crate::shared::validation::{text, FieldRules, Rule};

const RULES: &[FieldRules<Country>] = &[
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
    FieldRules {
        field: "phoneCode",
        read: |c: &Country| text(&c.phone_code),
        rules: &[Rule::Required],
    },
];

/// Form view-model for one country. No relationships to resolve.
#[derive(Clone)]
pub struct CountryDetailsViewModel {
    pub form: UpdateController<Country, CountryService>,
}

impl CountryDetailsViewModel {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            form: UpdateController::new(country_service(), ctx, RULES),
        }
    }

    pub fn load(&self, id: Option<i64>) {
        self.form.initialize_command(id);
    }
}
