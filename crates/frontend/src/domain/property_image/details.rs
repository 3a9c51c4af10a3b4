use contracts::domain::property::Property;
use contracts::domain::property_image::PropertyImage;
use leptos::prelude::*;

use super::service::{property_image_service, PropertyImageService};
use crate::domain::property::service::property_service;
use crate::shared::context::AppContext;
use crate::shared::update_controller::{load_options, UpdateController};
use crate::shared::validation::{flag, text, FieldRules, Rule};

const RULES: &[FieldRules<PropertyImage>] = &[
    FieldRules {
        field: "imageUrl",
        read: |i: &PropertyImage| text(&i.image_url),
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "isMain",
        read: |i: &PropertyImage| flag(i.is_main),
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "caption",
        read: |i: &PropertyImage| text(&i.caption),
        rules: &[Rule::MaxLength(100)],
    },
];

/// Form view-model for one property image.
#[derive(Clone)]
pub struct PropertyImageDetailsViewModel {
    pub form: UpdateController<PropertyImage, PropertyImageService>,
    pub properties: RwSignal<Vec<Property>>,
    ctx: AppContext,
}

impl PropertyImageDetailsViewModel {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            form: UpdateController::new(property_image_service(), ctx.clone(), RULES),
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
