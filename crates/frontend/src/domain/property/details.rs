use contracts::domain::amenity::Amenity;
use contracts::domain::city::City;
use contracts::domain::property::Property;
use contracts::domain::property_category::PropertyCategory;
use contracts::system::users::User;
use leptos::prelude::*;

use super::service::{property_service, PropertyService};
use crate::domain::amenity::service::amenity_service;
use crate::domain::city::service::city_service;
use crate::domain::property_category::service::property_category_service;
use crate::domain::user::service::user_service;
use crate::shared::context::AppContext;
use crate::shared::update_controller::{get_selected, load_options, UpdateController};
use crate::shared::validation::{flag, int, number, text, FieldRules, Rule};

const RULES: &[FieldRules<Property>] = &[
    FieldRules {
        field: "title",
        read: |p: &Property| text(&p.title),
        rules: &[Rule::Required, Rule::MaxLength(100)],
    },
    FieldRules {
        field: "description",
        read: |p: &Property| text(&p.description),
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "pricePerNight",
        read: |p: &Property| number(&p.price_per_night),
        rules: &[Rule::Required, Rule::MinValue(0.0)],
    },
    FieldRules {
        field: "address",
        read: |p: &Property| text(&p.address),
        rules: &[Rule::Required, Rule::MaxLength(255)],
    },
    FieldRules {
        field: "numberOfRooms",
        read: |p: &Property| int(&p.number_of_rooms),
        rules: &[Rule::Required, Rule::Integer, Rule::MinValue(1.0)],
    },
    FieldRules {
        field: "numberOfBathrooms",
        read: |p: &Property| int(&p.number_of_bathrooms),
        rules: &[Rule::Integer, Rule::MinValue(1.0)],
    },
    FieldRules {
        field: "maxGuests",
        read: |p: &Property| int(&p.max_guests),
        rules: &[Rule::Integer, Rule::MinValue(1.0)],
    },
    FieldRules {
        field: "propertySize",
        read: |p: &Property| int(&p.property_size),
        rules: &[Rule::Integer, Rule::MinValue(0.0)],
    },
    FieldRules {
        field: "instantBook",
        read: |p: &Property| flag(p.instant_book),
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "minimumStay",
        read: |p: &Property| int(&p.minimum_stay),
        rules: &[Rule::Integer, Rule::MinValue(1.0)],
    },
    FieldRules {
        field: "cancellationPolicy",
        read: |p: &Property| text(&p.cancellation_policy),
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "isActive",
        read: |p: &Property| flag(p.is_active),
        rules: &[Rule::Required],
    },
];

/// Form view-model for one property: the largest form, with host, city,
/// amenity and category selects.
#[derive(Clone)]
pub struct PropertyDetailsViewModel {
    pub form: UpdateController<Property, PropertyService>,
    pub users: RwSignal<Vec<User>>,
    pub cities: RwSignal<Vec<City>>,
    pub amenities: RwSignal<Vec<Amenity>>,
    pub property_categories: RwSignal<Vec<PropertyCategory>>,
    ctx: AppContext,
}

impl PropertyDetailsViewModel {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            form: UpdateController::new(property_service(), ctx.clone(), RULES),
            users: RwSignal::new(Vec::new()),
            cities: RwSignal::new(Vec::new()),
            amenities: RwSignal::new(Vec::new()),
            property_categories: RwSignal::new(Vec::new()),
            ctx,
        }
    }

    /// Start the entity fetch and every relationship fetch as independent
    /// tasks; the form may render before any of them land.
    pub fn load(&self, id: Option<i64>) {
        self.form.initialize_command(id);
        leptos::task::spawn_local(load_options(
            user_service(),
            self.users,
            self.ctx.alerts.clone(),
        ));
        leptos::task::spawn_local(load_options(
            city_service(),
            self.cities,
            self.ctx.alerts.clone(),
        ));
        leptos::task::spawn_local(load_options(
            amenity_service(),
            self.amenities,
            self.ctx.alerts.clone(),
        ));
        leptos::task::spawn_local(load_options(
            property_category_service(),
            self.property_categories,
            self.ctx.alerts.clone(),
        ));
    }

    /// Keep the draft's own instance when the amenity options refresh, so
    /// the multi-select does not lose its selection.
    pub fn selected_amenity(&self, option: &Amenity) -> Amenity {
        get_selected(&self.form.entity.get_untracked().amenities, option)
    }

    pub fn selected_category(&self, option: &PropertyCategory) -> PropertyCategory {
        get_selected(&self.form.entity.get_untracked().categories, option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::i18n::MessageCatalog;
    use crate::shared::validation::validate;

    #[test]
    fn test_schema_flags_the_generated_constraints() {
        let catalog = MessageCatalog::new();
        let draft = Property {
            title: Some("a".repeat(101)),
            number_of_rooms: Some(0),
            price_per_night: Some(-5.0),
            ..Default::default()
        };
        let state = validate(&draft, RULES, &catalog);
        assert!(!state.field_errors("title").is_empty());
        assert!(!state.field_errors("description").is_empty());
        assert!(!state.field_errors("numberOfRooms").is_empty());
        assert!(!state.field_errors("pricePerNight").is_empty());
        // optional numeric fields stay quiet while unset
        assert!(state.field_errors("maxGuests").is_empty());
    }

    #[test]
    fn test_selected_entries_keep_identity() {
        let held = Amenity {
            id: Some(3),
            name: Some("wifi".to_string()),
            ..Default::default()
        };
        let refetched = Amenity {
            id: Some(3),
            name: Some("wi-fi".to_string()),
            ..Default::default()
        };
        let selected = vec![held.clone()];
        assert_eq!(get_selected(&selected, &refetched), held);
    }
}
