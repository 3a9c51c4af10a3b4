use contracts::domain::promotion::Promotion;
use contracts::enums::DiscountType;

use super::service::{promotion_service, PromotionService};
use crate::shared::context::AppContext;
use crate::shared::update_controller::UpdateController;
use crate::shared::validation::{flag, number, present, text, FieldRules, Rule};

const RULES: &[FieldRules<Promotion>] = &[
    FieldRules {
        field: "code",
        read: |p: &Promotion| text(&p.code),
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "discountType",
        read: |p: &Promotion| present(&p.discount_type),
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "discountValue",
        read: |p: &Promotion| number(&p.discount_value),
        rules: &[Rule::Required, Rule::MinValue(0.0)],
    },
    FieldRules {
        field: "validFrom",
        read: |p: &Promotion| present(&p.valid_from),
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "validUntil",
        read: |p: &Promotion| present(&p.valid_until),
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "isActive",
        read: |p: &Promotion| flag(p.is_active),
        rules: &[Rule::Required],
    },
];

/// Form view-model for one promotion. No relationships to resolve.
#[derive(Clone)]
pub struct PromotionDetailsViewModel {
    pub form: UpdateController<Promotion, PromotionService>,
}

impl PromotionDetailsViewModel {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            form: UpdateController::new(promotion_service(), ctx, RULES),
        }
    }

    pub fn load(&self, id: Option<i64>) {
        self.form.initialize_command(id);
    }

    /// Options for the discount type select.
    pub fn discount_type_values() -> &'static [DiscountType] {
        DiscountType::values()
    }
}
