///
/// ScalarType
///
/// Identity of a synthesized scalar wrapper: the name it registers under and
/// the storage type it delegates to. Implemented by every generated wrapper
/// unit.
///

pub trait ScalarType {
    /// Registration key; globally unique by contract of the configuration.
    const NAME: &'static str;

    /// Storage type the wrapper delegates representation to.
    const BASE_TYPE: &'static str;
}
