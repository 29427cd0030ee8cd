//! Task list screen

use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use cleanslate_core::task::Task;
use cleanslate_core::usecase::TaskUseCases;
use cleanslate_core::Error;

use crate::effects::EffectQueue;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskListState {
    pub tasks: Vec<Task>,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskListEvent {
    LoadTasks,
    CreateTask { title: String, description: String },
    UpdateTask(Task),
    ToggleTaskCompletion(String),
    DeleteTask(String),
    OpenTask(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskListEffect {
    ShowError(String),
    NavigateToTaskDetail(String),
    TaskCreated,
    TaskUpdated,
    TaskDeleted,
}

/// State holder for the task list
#[derive(Clone)]
pub struct TaskListViewModel {
    inner: Arc<TaskListInner>,
}

struct TaskListInner {
    use_cases: TaskUseCases,
    state: watch::Sender<TaskListState>,
    effects: EffectQueue<TaskListEffect>,
}

impl TaskListViewModel {
    pub fn new(use_cases: TaskUseCases) -> Self {
        let (state, _) = watch::channel(TaskListState::default());
        Self {
            inner: Arc::new(TaskListInner {
                use_cases,
                state,
                effects: EffectQueue::new(),
            }),
        }
    }

    /// Current state
    pub fn state(&self) -> TaskListState {
        self.inner.state.borrow().clone()
    }

    /// Receiver notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<TaskListState> {
        self.inner.state.subscribe()
    }

    /// Take the effect receiver (can only be called once)
    pub fn take_effects(&self) -> Option<mpsc::UnboundedReceiver<TaskListEffect>> {
        self.inner.effects.take_receiver()
    }

    /// Initial load when the screen opens
    pub async fn start(&self) {
        self.handle(TaskListEvent::LoadTasks).await;
    }

    /// Handle `event` on a spawned task
    pub fn dispatch(&self, event: TaskListEvent) -> JoinHandle<()> {
        let view_model = self.clone();
        tokio::spawn(async move { view_model.handle(event).await })
    }

    /// Handle `event` to completion
    pub async fn handle(&self, event: TaskListEvent) {
        debug!("Task list event: {:?}", event);
        match event {
            TaskListEvent::LoadTasks => self.load_tasks().await,
            TaskListEvent::CreateTask { title, description } => {
                self.create_task(&title, &description).await
            }
            TaskListEvent::UpdateTask(task) => self.update_task(task).await,
            TaskListEvent::ToggleTaskCompletion(id) => self.toggle_task_completion(&id).await,
            TaskListEvent::DeleteTask(id) => self.delete_task(id).await,
            TaskListEvent::OpenTask(id) => self.emit(TaskListEffect::NavigateToTaskDetail(id)),
        }
    }

    async fn load_tasks(&self) {
        self.inner.state.send_modify(|state| state.is_loading = true);

        let mut results = self.inner.use_cases.get_tasks.invoke();
        while let Some(result) = results.next().await {
            match result {
                Ok(tasks) => {
                    debug!("Loaded {} tasks", tasks.len());
                    self.inner.state.send_modify(|state| {
                        state.tasks = tasks;
                        state.is_loading = false;
                        state.error = None;
                    });
                }
                Err(e) => {
                    // Previously loaded tasks stay visible.
                    let message = e.to_string();
                    self.inner.state.send_modify(|state| {
                        state.is_loading = false;
                        state.error = Some(message.clone());
                    });
                    warn!("Failed to load tasks: {}", message);
                    self.emit(TaskListEffect::ShowError(message));
                }
            }
        }
    }

    async fn create_task(&self, title: &str, description: &str) {
        match self.inner.use_cases.create_task.invoke(title, description).await {
            Ok(task) => {
                self.inner.state.send_modify(|state| state.tasks.push(task));
                self.emit(TaskListEffect::TaskCreated);
            }
            Err(e) => self.show_error(e),
        }
    }

    async fn toggle_task_completion(&self, id: &str) {
        let cached = self.state().tasks.into_iter().find(|t| t.id == id);
        match cached {
            Some(task) => self.update_task(task.toggled()).await,
            None => debug!("Toggle ignored, task {} is not listed", id),
        }
    }

    async fn update_task(&self, task: Task) {
        match self.inner.use_cases.update_task.invoke(task).await {
            Ok(updated) => {
                self.inner.state.send_modify(|state| {
                    if let Some(slot) = state.tasks.iter_mut().find(|t| t.id == updated.id) {
                        *slot = updated;
                    }
                });
                self.emit(TaskListEffect::TaskUpdated);
            }
            Err(e) => self.show_error(e),
        }
    }

    async fn delete_task(&self, id: String) {
        match self.inner.use_cases.delete_task.invoke(&id).await {
            Ok(()) => {
                self.inner
                    .state
                    .send_modify(|state| state.tasks.retain(|t| t.id != id));
                self.emit(TaskListEffect::TaskDeleted);
            }
            Err(e) => self.show_error(e),
        }
    }

    fn show_error(&self, error: Error) {
        warn!("Task list operation failed: {}", error);
        self.emit(TaskListEffect::ShowError(error.to_string()));
    }

    fn emit(&self, effect: TaskListEffect) {
        self.inner.effects.emit(effect);
    }
}
