use contracts::domain::booking::Booking;
use contracts::domain::property::Property;
use contracts::enums::BookingStatus;
use contracts::system::users::User;
use leptos::prelude::*;

use super::service::{booking_service, BookingService};
use crate::domain::property::service::property_service;
use crate::domain::user::service::user_service;
use crate::shared::context::AppContext;
use crate::shared::update_controller::{load_options, UpdateController};
use crate::shared::validation::{number, present, FieldRules, Rule};

const RULES: &[FieldRules<Booking>] = &[
    FieldRules {
        field: "checkInDate",
        read: |b: &Booking| present(&b.check_in_date),
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "checkOutDate",
        read: |b: &Booking| present(&b.check_out_date),
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "totalPrice",
        read: |b: &Booking| number(&b.total_price),
        rules: &[Rule::Required, Rule::MinValue(0.0)],
    },
    FieldRules {
        field: "bookingDate",
        read: |b: &Booking| present(&b.booking_date),
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "status",
        read: |b: &Booking| present(&b.status),
        rules: &[Rule::Required],
    },
];

/// Form view-model for one booking and its guest/property selects.
#[derive(Clone)]
pub struct BookingDetailsViewModel {
    pub form: UpdateController<Booking, BookingService>,
    pub users: RwSignal<Vec<User>>,
    pub properties: RwSignal<Vec<Property>>,
    ctx: AppContext,
}

impl BookingDetailsViewModel {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            form: UpdateController::new(booking_service(), ctx.clone(), RULES),
            users: RwSignal::new(Vec::new()),
            properties: RwSignal::new(Vec::new()),
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
            property_service(),
            self.properties,
            self.ctx.alerts.clone(),
        ));
    }

    /// Options for the status select.
    pub fn status_values() -> &'static [BookingStatus] {
        BookingStatus::values()
    }
}
