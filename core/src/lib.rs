//! Client core for the todo service.
//!
//! # Overview
//! Two layers:
//! - `TodoClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network (host-does-IO pattern).
//! - `TodoController` drives the user operations (list, add, toggle,
//!   delete) over a host-supplied `Transport`, keeps the `View` in sync
//!   with the outcome, and reports failures through a `Notifier`.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - The controller owns the only mutable state, the `View`.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod ports;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use controller::TodoController;
pub use error::{ApiError, TransportError};
pub use crate::http::{HttpMethod, HttpRequest, HttpResponse};
pub use ports::{Confirm, Notifier, Severity, Transport};
pub use types::{CreateTodo, Todo, TodoId, UpdateTodo};
pub use view::{Form, ListState, TodoRow, View};
