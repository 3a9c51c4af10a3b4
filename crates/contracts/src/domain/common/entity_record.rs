/// Trait implemented by every record the generated screens manage.
///
/// Couples a record instance to the static metadata the generic list and
/// update view-models need: the REST collection it lives in and the segment
/// used when building notification message keys.
pub trait EntityRecord: Clone {
    /// Backend-assigned identifier. `None` until the first successful create;
    /// immutable once assigned.
    fn id(&self) -> Option<i64>;

    /// REST collection segment under `/api`, e.g. `"property-categories"`.
    fn api_resource() -> &'static str;

    /// Segment used in notification message keys, e.g. `"propertyCategory"`.
    fn message_key() -> &'static str;
}
