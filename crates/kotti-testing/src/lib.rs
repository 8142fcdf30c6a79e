//! Testing utilities and harness for Kotti

pub mod robot;

pub use robot::*;

pub mod prelude {
    pub use crate::robot::*;
    pub use kotti_foundation::prelude::*;
}
