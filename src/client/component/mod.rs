pub mod attachments;
pub mod field;
pub mod header;
pub mod layout;
pub mod modal;
pub mod page;
pub mod pagination;
pub mod protected_layout;
pub mod toolbar;

pub use attachments::Attachments;
pub use field::{
    cents_input, id_options, optional, parse_date, selected_id, NumberField, SelectField,
    TextAreaField, TextField,
};
pub use header::Header;
pub use layout::Layout;
pub use modal::{ConfirmationModal, Modal};
pub use page::Page;
pub use pagination::{Pagination, PaginationData};
pub use protected_layout::{ProtectedLayout, RequiresAdmin, RequiresLoggedIn, RequiresStaff};
pub use toolbar::ListToolbar;
