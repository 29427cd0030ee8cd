//! Task detail screen

use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use cleanslate_core::task::Task;
use cleanslate_core::usecase::TaskUseCases;
use cleanslate_core::Error;

use crate::effects::EffectQueue;

/// Viewing and editing are exclusive; `is_editing` selects between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDetailState {
    pub task: Option<Task>,
    pub is_loading: bool,
    pub is_editing: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskDetailEvent {
    LoadTask(String),
    EditTask,
    CancelEdit,
    UpdateTask { title: String, description: String },
    ToggleTaskCompletion(String),
    DeleteTask(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskDetailEffect {
    ShowError(String),
    NavigateBack,
    TaskUpdated,
    TaskDeleted,
}

/// State holder for a single task
#[derive(Clone)]
pub struct TaskDetailViewModel {
    inner: Arc<TaskDetailInner>,
}

struct TaskDetailInner {
    use_cases: TaskUseCases,
    task_id: Option<String>,
    state: watch::Sender<TaskDetailState>,
    effects: EffectQueue<TaskDetailEffect>,
}

impl TaskDetailViewModel {
    /// `task_id` is the task the screen was opened for, if any
    pub fn new(use_cases: TaskUseCases, task_id: Option<String>) -> Self {
        let (state, _) = watch::channel(TaskDetailState::default());
        Self {
            inner: Arc::new(TaskDetailInner {
                use_cases,
                task_id,
                state,
                effects: EffectQueue::new(),
            }),
        }
    }

    pub fn state(&self) -> TaskDetailState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<TaskDetailState> {
        self.inner.state.subscribe()
    }

    /// Take the effect receiver (can only be called once)
    pub fn take_effects(&self) -> Option<mpsc::UnboundedReceiver<TaskDetailEffect>> {
        self.inner.effects.take_receiver()
    }

    /// Load the task the screen was opened for
    pub async fn start(&self) {
        if let Some(id) = self.inner.task_id.clone() {
            self.handle(TaskDetailEvent::LoadTask(id)).await;
        }
    }

    pub fn dispatch(&self, event: TaskDetailEvent) -> JoinHandle<()> {
        let view_model = self.clone();
        tokio::spawn(async move { view_model.handle(event).await })
    }

    pub async fn handle(&self, event: TaskDetailEvent) {
        debug!("Task detail event: {:?}", event);
        match event {
            TaskDetailEvent::LoadTask(id) => self.load_task(id).await,
            TaskDetailEvent::EditTask => {
                self.inner.state.send_if_modified(|state| {
                    let changed = !state.is_editing;
                    state.is_editing = true;
                    changed
                });
            }
            TaskDetailEvent::CancelEdit => {
                self.inner.state.send_modify(|state| state.is_editing = false);
            }
            TaskDetailEvent::UpdateTask { title, description } => {
                self.update_details(&title, &description).await
            }
            TaskDetailEvent::ToggleTaskCompletion(id) => self.toggle_task_completion(&id).await,
            TaskDetailEvent::DeleteTask(id) => self.delete_task(&id).await,
        }
    }

    async fn load_task(&self, id: String) {
        self.inner.state.send_modify(|state| state.is_loading = true);

        let mut results = self.inner.use_cases.get_task_by_id.invoke(id);
        while let Some(result) = results.next().await {
            match result {
                Ok(task) => self.inner.state.send_modify(|state| {
                    state.task = Some(task);
                    state.is_loading = false;
                    state.error = None;
                }),
                Err(e) => {
                    let message = e.to_string();
                    self.inner.state.send_modify(|state| {
                        state.is_loading = false;
                        state.error = Some(message.clone());
                    });
                    warn!("Failed to load task: {}", message);
                    self.emit(TaskDetailEffect::ShowError(message));
                }
            }
        }
    }

    /// Only acts on a loaded task; otherwise there is nothing to edit.
    async fn update_details(&self, title: &str, description: &str) {
        let Some(current) = self.state().task else {
            debug!("Update ignored, no task loaded");
            return;
        };

        match self
            .inner
            .use_cases
            .update_task
            .invoke(current.edited(title, description))
            .await
        {
            Ok(updated) => {
                self.inner.state.send_modify(|state| {
                    state.task = Some(updated);
                    state.is_editing = false;
                });
                self.emit(TaskDetailEffect::TaskUpdated);
            }
            // Stay in editing mode so the user can retry.
            Err(e) => self.show_error(e),
        }
    }

    async fn toggle_task_completion(&self, id: &str) {
        let current = match self.state().task {
            Some(task) if task.id == id => task,
            _ => {
                debug!("Toggle ignored, task {} is not loaded", id);
                return;
            }
        };

        match self.inner.use_cases.update_task.invoke(current.toggled()).await {
            Ok(updated) => {
                self.inner
                    .state
                    .send_modify(|state| state.task = Some(updated));
                self.emit(TaskDetailEffect::TaskUpdated);
            }
            Err(e) => self.show_error(e),
        }
    }

    async fn delete_task(&self, id: &str) {
        match self.inner.use_cases.delete_task.invoke(id).await {
            Ok(()) => {
                self.emit(TaskDetailEffect::TaskDeleted);
                self.emit(TaskDetailEffect::NavigateBack);
            }
            Err(e) => self.show_error(e),
        }
    }

    fn show_error(&self, error: Error) {
        warn!("Task detail operation failed: {}", error);
        self.emit(TaskDetailEffect::ShowError(error.to_string()));
    }

    fn emit(&self, effect: TaskDetailEffect) {
        self.inner.effects.emit(effect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cleanslate_core::system_clock;
    use cleanslate_core::task::{MockTaskRepository, TaskRepository};
    use cleanslate_data::{InMemoryTaskRepository, MockTaskStore};

    use crate::testing::GatedRepository;

    fn task(id: &str) -> Task {
        Task::draft(format!("Task {id}"), format!("Description {id}"), 1_234_567_890).with_id(id)
    }

    fn view_model(repository: impl TaskRepository + 'static, id: &str) -> TaskDetailViewModel {
        TaskDetailViewModel::new(
            TaskUseCases::new(Arc::new(repository), system_clock()),
            Some(id.to_string()),
        )
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<TaskDetailEffect>) -> Vec<TaskDetailEffect> {
        let mut effects = Vec::new();
        while let Ok(effect) = rx.try_recv() {
            effects.push(effect);
        }
        effects
    }

    fn repository_with(loaded: Task) -> MockTaskRepository {
        let mut repository = MockTaskRepository::new();
        repository
            .expect_get_task()
            .returning(move |_| Ok(loaded.clone()));
        repository
    }

    #[tokio::test]
    async fn test_start_loads_task() {
        let vm = view_model(repository_with(task("1")), "1");
        vm.start().await;

        let state = vm.state();
        assert_eq!(state.task, Some(task("1")));
        assert!(!state.is_loading);
        assert!(!state.is_editing);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_loading_flag_is_published_while_task_is_in_flight() {
        let (repository, mut gate) = GatedRepository::new(vec![task("1")]);
        let vm = view_model(repository, "1");
        let mut rx = vm.subscribe();

        let load = vm.dispatch(TaskDetailEvent::LoadTask("1".to_string()));
        assert_eq!(gate.entered.recv().await, Some("get"));
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_loading);
        assert_eq!(vm.state().task, None);

        gate.release();
        load.await.unwrap();

        let state = vm.state();
        assert!(!state.is_loading);
        assert_eq!(state.task, Some(task("1")));
    }

    #[tokio::test]
    async fn test_mutations_do_not_toggle_loading() {
        let (repository, mut gate) = GatedRepository::new(vec![task("1")]);
        let vm = view_model(repository, "1");
        gate.release();
        vm.start().await;
        assert_eq!(gate.entered.recv().await, Some("get"));
        vm.handle(TaskDetailEvent::EditTask).await;

        let events = [
            (
                TaskDetailEvent::UpdateTask {
                    title: "Renamed".to_string(),
                    description: String::new(),
                },
                "update",
            ),
            (TaskDetailEvent::ToggleTaskCompletion("1".to_string()), "update"),
            (TaskDetailEvent::DeleteTask("1".to_string()), "delete"),
        ];
        for (event, call) in events {
            let handle = vm.dispatch(event);
            assert_eq!(gate.entered.recv().await, Some(call));
            assert!(!vm.state().is_loading);

            gate.release();
            handle.await.unwrap();
            assert!(!vm.state().is_loading);
        }
    }

    #[tokio::test]
    async fn test_start_without_id_does_nothing() {
        let vm = TaskDetailViewModel::new(
            TaskUseCases::new(Arc::new(MockTaskRepository::new()), system_clock()),
            None,
        );
        vm.start().await;
        assert_eq!(vm.state(), TaskDetailState::default());
    }

    #[tokio::test]
    async fn test_load_failure_sets_error_and_emits() {
        let mut repository = MockTaskRepository::new();
        repository
            .expect_get_task()
            .returning(|id| Err(Error::not_found(id)));
        let vm = view_model(repository, "404");
        let mut effects = vm.take_effects().unwrap();

        vm.start().await;

        let state = vm.state();
        assert_eq!(state.task, None);
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("Task not found with id: 404"));
        assert_eq!(
            drain(&mut effects),
            vec![TaskDetailEffect::ShowError(
                "Task not found with id: 404".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_edit_and_cancel() {
        let vm = view_model(repository_with(task("1")), "1");
        vm.start().await;
        let mut rx = vm.subscribe();

        vm.handle(TaskDetailEvent::EditTask).await;
        assert!(vm.state().is_editing);
        assert!(rx.has_changed().unwrap());
        rx.mark_unchanged();

        // Already editing: no new notification.
        vm.handle(TaskDetailEvent::EditTask).await;
        assert!(!rx.has_changed().unwrap());

        vm.handle(TaskDetailEvent::CancelEdit).await;
        assert!(!vm.state().is_editing);
        assert_eq!(vm.state().task, Some(task("1")));
    }

    #[tokio::test]
    async fn test_update_details_leaves_editing() {
        let mut repository = repository_with(task("1"));
        repository
            .expect_update_task()
            .withf(|t| t.id == "1" && t.title == "New title" && t.description == "New body")
            .times(1)
            .returning(Ok);
        let vm = view_model(repository, "1");
        let mut effects = vm.take_effects().unwrap();
        vm.start().await;
        vm.handle(TaskDetailEvent::EditTask).await;

        vm.handle(TaskDetailEvent::UpdateTask {
            title: "New title".to_string(),
            description: "New body".to_string(),
        })
        .await;

        let state = vm.state();
        assert!(!state.is_editing);
        assert_eq!(state.task.as_ref().map(|t| t.title.as_str()), Some("New title"));
        assert_eq!(drain(&mut effects), vec![TaskDetailEffect::TaskUpdated]);
    }

    #[tokio::test]
    async fn test_update_failure_stays_editing() {
        let mut repository = repository_with(task("1"));
        repository.expect_update_task().never();
        let vm = view_model(repository, "1");
        let mut effects = vm.take_effects().unwrap();
        vm.start().await;
        vm.handle(TaskDetailEvent::EditTask).await;

        vm.handle(TaskDetailEvent::UpdateTask {
            title: " ".to_string(),
            description: String::new(),
        })
        .await;

        let state = vm.state();
        assert!(state.is_editing);
        assert_eq!(state.task, Some(task("1")));
        assert_eq!(
            drain(&mut effects),
            vec![TaskDetailEffect::ShowError("Title cannot be empty".to_string())]
        );
    }

    #[tokio::test]
    async fn test_toggle_task_completion() {
        let mut repository = repository_with(task("1"));
        repository
            .expect_update_task()
            .withf(|t| t.is_completed)
            .returning(Ok);
        let vm = view_model(repository, "1");
        let mut effects = vm.take_effects().unwrap();
        vm.start().await;

        vm.handle(TaskDetailEvent::ToggleTaskCompletion("1".to_string()))
            .await;

        assert!(vm.state().task.unwrap().is_completed);
        assert_eq!(drain(&mut effects), vec![TaskDetailEffect::TaskUpdated]);
    }

    #[tokio::test]
    async fn test_toggle_failure_keeps_cached_task() {
        let mut repository = repository_with(task("1"));
        repository
            .expect_update_task()
            .returning(|_| Err(Error::transport("Network error")));
        let vm = view_model(repository, "1");
        let mut effects = vm.take_effects().unwrap();
        vm.start().await;

        vm.handle(TaskDetailEvent::ToggleTaskCompletion("1".to_string()))
            .await;

        assert!(!vm.state().task.unwrap().is_completed);
        assert_eq!(
            drain(&mut effects),
            vec![TaskDetailEffect::ShowError("Network error".to_string())]
        );
    }

    #[tokio::test]
    async fn test_delete_emits_deleted_then_back() {
        let mut repository = repository_with(task("1"));
        repository.expect_delete_task().returning(|_| Ok(()));
        let vm = view_model(repository, "1");
        let mut effects = vm.take_effects().unwrap();
        vm.start().await;

        vm.handle(TaskDetailEvent::DeleteTask("1".to_string())).await;

        assert_eq!(
            drain(&mut effects),
            vec![TaskDetailEffect::TaskDeleted, TaskDetailEffect::NavigateBack]
        );
    }

    #[tokio::test]
    async fn test_delete_failure_does_not_navigate() {
        let mut repository = repository_with(task("1"));
        repository
            .expect_delete_task()
            .returning(|id| Err(Error::not_found(id)));
        let vm = view_model(repository, "1");
        let mut effects = vm.take_effects().unwrap();
        vm.start().await;

        vm.handle(TaskDetailEvent::DeleteTask("1".to_string())).await;

        assert_eq!(
            drain(&mut effects),
            vec![TaskDetailEffect::ShowError(
                "Task not found with id: 1".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_round_trip_against_in_memory_store() {
        let store = MockTaskStore::with_tasks(vec![task("1")]);
        let repository = InMemoryTaskRepository::new(store.clone(), system_clock());
        let vm = view_model(repository, "1");
        vm.start().await;

        vm.handle(TaskDetailEvent::EditTask).await;
        vm.handle(TaskDetailEvent::UpdateTask {
            title: "Stored".to_string(),
            description: "via detail".to_string(),
        })
        .await;
        vm.dispatch(TaskDetailEvent::ToggleTaskCompletion("1".to_string()))
            .await
            .unwrap();

        let stored = store.snapshot().await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].title, "Stored");
        assert!(stored[0].is_completed);
        assert!(stored[0].updated_at >= stored[0].created_at);
        assert_eq!(vm.state().task.as_ref(), Some(&stored[0]));
    }
}
