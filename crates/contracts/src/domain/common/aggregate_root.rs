/// Root of an aggregate exchanged with the API.
///
/// Carries the record identity plus the static names used to build
/// resource paths and UI captions.
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id;

    /// Id of this record
    fn id(&self) -> Self::Id;

    /// Aggregate index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Resource name used in API paths (e.g. "category")
    fn collection_name() -> &'static str;

    /// UI caption for the list
    fn list_name() -> &'static str;

    /// Full system name (e.g. "a001_category")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
