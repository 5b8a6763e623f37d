mod activity;
mod app;
mod command;
mod note;
mod reminder;
mod shared;
mod status;

pub mod dtos {
    pub use crate::activity::dtos::*;
    pub use crate::note::dtos::*;
    pub use crate::reminder::dtos::*;
}

pub use crate::activity::api::*;
pub use crate::app::api::*;
pub use crate::command::api::*;
pub use crate::note::api::*;
pub use crate::reminder::api::*;
pub use crate::shared::api::*;
pub use crate::status::api::*;
