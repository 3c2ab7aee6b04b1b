//! User-facing operations over the todo endpoint.
//!
//! # Design
//! `TodoController` owns the `View` and is the only thing that mutates it.
//! Each operation issues at most one request of its own (create and delete
//! may follow up with a list). The view lock is taken to read inputs before
//! a request and to apply the outcome after it, never across the network
//! await, so several operations can be in flight at once. Nothing is retried
//! or cancelled.
//!
//! Every failure is logged and handed to the `Notifier`; none escapes to the
//! caller.

use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::ports::{Confirm, Notifier, Severity, Transport};
use crate::types::{CreateTodo, Todo, TodoId, UpdateTodo};
use crate::view::{ListState, View};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this todo?";
pub const ADDED_MESSAGE: &str = "Todo added successfully!";
pub const DELETED_MESSAGE: &str = "Todo deleted successfully!";

pub struct TodoController<T, N, C> {
    client: TodoClient,
    transport: T,
    notifier: N,
    confirm: C,
    view: RwLock<View>,
}

impl<T, N, C> TodoController<T, N, C>
where
    T: Transport,
    N: Notifier,
    C: Confirm,
{
    pub fn new(client: TodoClient, transport: T, notifier: N, confirm: C) -> Self {
        Self {
            client,
            transport,
            notifier,
            confirm,
            view: RwLock::new(View::default()),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn confirmer(&self) -> &C {
        &self.confirm
    }

    /// Snapshot of the current view.
    pub async fn view(&self) -> View {
        self.view.read().await.clone()
    }

    pub async fn set_title(&self, title: impl Into<String>) {
        self.view.write().await.form.title = title.into();
    }

    pub async fn set_description(&self, description: impl Into<String>) {
        self.view.write().await.form.description = description.into();
    }

    /// Fetch the whole collection and redraw the list.
    ///
    /// The list shows the loading placeholder while the request is in
    /// flight and keeps showing it if the request fails.
    pub async fn refresh(&self) {
        self.view.write().await.list = ListState::Loading;
        match self.fetch_todos().await {
            Ok(todos) => {
                debug!(count = todos.len(), "todos loaded");
                self.view.write().await.show(todos);
            }
            Err(err) => self.report(
                &format!("Error loading todos: {err}. Please ensure your backend is running."),
                &err,
            ),
        }
    }

    /// Submit the form as a new todo, then re-list.
    pub async fn add(&self) {
        let input = {
            let view = self.view.read().await;
            CreateTodo {
                title: view.form.title.trim().to_string(),
                description: view.form.description.trim().to_string(),
            }
        };
        if input.title.is_empty() {
            let err = ApiError::EmptyTitle;
            self.report(&err.to_string(), &err);
            return;
        }

        match self.create_todo(&input).await {
            Ok(todo) => {
                info!(id = %todo.id, title = %todo.title, "todo added");
                self.notifier.notify(Severity::Success, ADDED_MESSAGE);
                self.view.write().await.form.clear();
                self.refresh().await;
            }
            Err(err) => self.report(&format!("Failed to add todo: {err}"), &err),
        }
    }

    /// Flip the displayed completion state of `id`.
    pub async fn toggle(&self, id: &TodoId) {
        let current = self.view.read().await.row(id).map(|r| r.completed);
        let Some(current) = current else {
            warn!(id = %id, "toggle requested for a todo that is not displayed");
            return;
        };
        let completed = !current;

        match self.update_completed(id, completed).await {
            Ok(()) => {
                if !self.view.write().await.set_completed(id, completed) {
                    debug!(id = %id, "updated todo is no longer displayed");
                }
                info!(id = %id, completed, "todo updated");
            }
            Err(err) => self.report(&format!("Failed to update todo: {err}"), &err),
        }
    }

    /// Delete `id` after the user confirms. Re-lists once the last row is
    /// gone so the empty placeholder shows.
    pub async fn delete(&self, id: &TodoId) {
        if !self.confirm.confirm(DELETE_PROMPT).await {
            debug!(id = %id, "delete cancelled");
            return;
        }

        match self.delete_todo(id).await {
            Ok(()) => {
                info!(id = %id, "todo deleted");
                self.notifier.notify(Severity::Success, DELETED_MESSAGE);
                let now_empty = {
                    let mut view = self.view.write().await;
                    view.remove(id);
                    view.rows().is_empty()
                };
                if now_empty {
                    self.refresh().await;
                }
            }
            Err(err) => self.report(&format!("Failed to delete todo: {err}"), &err),
        }
    }

    async fn fetch_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let response = self.send(self.client.build_list_todos()).await?;
        self.client.parse_list_todos(response)
    }

    async fn create_todo(&self, input: &CreateTodo) -> Result<Todo, ApiError> {
        let request = self.client.build_create_todo(input)?;
        let response = self.send(request).await?;
        self.client.parse_create_todo(response)
    }

    async fn update_completed(&self, id: &TodoId, completed: bool) -> Result<(), ApiError> {
        let request = self
            .client
            .build_update_todo(id, &UpdateTodo::completed(completed))?;
        let response = self.send(request).await?;
        self.client.parse_update_ack(response)
    }

    async fn delete_todo(&self, id: &TodoId) -> Result<(), ApiError> {
        let response = self.send(self.client.build_delete_todo(id)).await?;
        self.client.parse_delete_todo(response)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let response = self.transport.execute(request).await?;
        debug!(status = response.status, "response received");
        Ok(response)
    }

    fn report(&self, message: &str, err: &ApiError) {
        if err.is_validation() {
            warn!(error = %err, "{message}");
            self.notifier.notify(Severity::Warning, message);
        } else {
            error!(error = %err, "{message}");
            self.notifier.notify(Severity::Error, message);
        }
    }
}
