// One module per page section, in page order.

pub mod about;
pub mod contact;
pub mod hero;
pub mod projects;
pub mod skills;
