pub mod error;
pub mod hash;
pub mod history;
pub mod model;
pub mod search;
pub mod seed;
pub mod shared;
pub mod stack;
pub mod store;

pub use error::ContactError;
pub use history::{DeleteOutcome, HistoryController, OperationKind, OperationRecord};
pub use model::Contact;
pub use search::{search_contacts, SearchOutcome};
pub use shared::SharedContactBook;
pub use stack::OperationStack;
pub use store::ContactStore;
