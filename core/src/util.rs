use lazy_static::lazy_static;
use ron::{Options, extensions::Extensions};

pub use ron::ser::PrettyConfig;

lazy_static! {
    /// Shared RON options for config files and serialized views. Implicit
    /// `Some` keeps optional fields free of `Some(..)` wrappers.
    pub static ref RON: Options = Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
}
