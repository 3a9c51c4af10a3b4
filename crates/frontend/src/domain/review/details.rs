use contracts::domain::property::Property;
use contracts::domain::review::Review;
use contracts::system::users::User;
use leptos::prelude::*;

use super::service::{review_service, ReviewService};
use crate::domain::property::service::property_service;
use crate::domain::user::service::user_service;
use crate::shared::context::AppContext;
use crate::shared::update_controller::{load_options, UpdateController};
use crate::shared::validation::{int, present, FieldRules, Rule};

const RULES: &[FieldRules<Review>] = &[
    FieldRules {
        field: "rating",
        read: |r: &Review| int(&r.rating),
        rules: &[
            Rule::Required,
            Rule::Integer,
            Rule::MinValue(1.0),
            Rule::MaxValue(5.0),
        ],
    },
    FieldRules {
        field: "reviewDate",
        read: |r: &Review| present(&r.review_date),
        rules: &[Rule::Required],
    },
];

/// Form view-model for one review and its author/property selects.
#[derive(Clone)]
pub struct ReviewDetailsViewModel {
    pub form: UpdateController<Review, ReviewService>,
    pub users: RwSignal<Vec<User>>,
    pub properties: RwSignal<Vec<Property>>,
    ctx: AppContext,
}

impl ReviewDetailsViewModel {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            form: UpdateController::new(review_service(), ctx.clone(), RULES),
            users: RwSignal::new(Vec::new()),
            properties: RwSignal::new(Vec::new()),
            ctx,
        }
    }

    pub fn load(&self, id: Option<i64>) {
        self.form.initialize_command(id);
        leptos::task::spawn_local(load_options(
            user_service(),
            self.users,
            self.ctx.alerts.clone(),
        ));
        leptos::task::spawn_local(load_options(
            property_service(),
            self.properties,
            self.ctx.alerts.clone(),
        ));
    }
}
