#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # bibup: bibliographic update action engine
//!
//! A library for composing and executing update operations (store, delete,
//! relink) against a shared repository of bibliographic catalog records,
//! preserving the referential integrity between common records and the
//! authority records they reference.
//!
//! ## Quick Start
//!
//! ```
//! use bibup::actions::UpdateRecordAction;
//! use bibup::{Engine, Field, MemoryRepository, MimeType, Record, UpdateState};
//!
//! let record = Record::builder()
//!     .field(
//!         Field::builder("001")
//!             .subfield_str('a', "20611529")
//!             .subfield_str('b', "870970")
//!             .build(),
//!     )
//!     .field(
//!         Field::builder("600")
//!             .subfield_str('a', "Andersen, H. C.")
//!             .subfield_str('5', "870979")
//!             .subfield_str('6', "11111111")
//!             .build(),
//!     )
//!     .build();
//!
//! let mut repo = MemoryRepository::new();
//! let mut state = UpdateState::new(&mut repo, MimeType::MarcXchange);
//! let mut action = UpdateRecordAction::new(record);
//!
//! let result = Engine::new().execute(&mut action, &mut state).unwrap();
//! assert!(result.is_ok());
//! ```
//!
//! ## Modules
//!
//! - [`record`] — Core record structures (`Record`, `Field`, `Subfield`)
//! - [`identifier`] — Record identifiers (`RecordId`)
//! - [`repository`] — The repository port consumed by the engine
//! - [`memory`] — In-memory repository implementation
//! - [`result`] — Service results and diagnostics
//! - [`engine`] — The action contract and the tree executor
//! - [`actions`] — Concrete update actions
//! - [`state`] — Caller-owned processing state
//! - [`error`] — Error types and result type

pub mod actions;
pub mod engine;
pub mod error;
pub mod identifier;
pub mod memory;
/// Core record structures (`Record`, `Field`, `Subfield`)
pub mod record;
pub mod repository;
pub mod result;
pub mod state;

pub use engine::{Engine, UpdateAction};
pub use error::{Result, UpdateError};
pub use identifier::RecordId;
pub use memory::MemoryRepository;
pub use record::{Field, FieldBuilder, Record, RecordBuilder, Subfield};
pub use repository::{MimeType, Repository, RepositoryError, RepositoryResult};
pub use result::{Diagnostic, Severity, ServiceResult, Status};
pub use state::UpdateState;
