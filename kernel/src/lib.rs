pub use crate::error::*;
pub use crate::renewal::*;

mod counter;
mod database;
mod entity;
mod error;
mod modify;
mod query;
mod renewal;

#[cfg(feature = "prelude")]
pub mod prelude {
    pub mod entity {
        pub use crate::entity::*;
    }
}

#[cfg(feature = "interface")]
pub mod interface {
    pub mod counter {
        pub use crate::counter::*;
    }
    pub mod database {
        pub use crate::database::*;
    }
    pub mod query {
        pub use crate::query::*;
    }
    pub mod update {
        pub use crate::modify::*;
    }
}
