mod event;
mod helpers;
mod msg;
mod policy;

pub use crate::event::*;
pub use crate::helpers::GuardianContract;
pub use crate::msg::*;
pub use crate::policy::*;
