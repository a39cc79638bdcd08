pub mod config;
pub mod html;
pub mod logging;
pub mod mapping;
pub mod navigate;
pub mod redirect;

pub use mapping::{MappingTable, PrefixMapping};
pub use navigate::Navigator;
pub use redirect::{redirect_to, resolve_target, Redirector};
