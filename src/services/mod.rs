//! Entity services
//!
//! Each service calls exactly one repository operation and attaches a
//! domain prefix on failure, so the API layer can surface a contextualized
//! message without knowing which repository failed.

pub mod countries;
pub mod departments;
pub mod municipalities;
pub mod users;

pub use countries::CountryService;
pub use departments::DepartmentService;
pub use municipalities::MunicipalityService;
pub use users::UserService;
