//! Drives one screen per command and prints what it produced

use std::io::Write;

use tokio::sync::mpsc::UnboundedReceiver;

use cleanslate_core::usecase::TaskUseCases;
use cleanslate_presentation::{
    TaskDetailEffect, TaskDetailEvent, TaskDetailViewModel, TaskListEffect, TaskListEvent,
    TaskListViewModel,
};

use crate::cli::Command;
use crate::render;

/// Run `command` and write its output to `out`.
///
/// Returns `false` when the screen reported an error.
pub async fn run(
    command: Command,
    use_cases: TaskUseCases,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    match command {
        Command::List => {
            let view_model = TaskListViewModel::new(use_cases);
            let mut effects = take(view_model.take_effects())?;
            view_model.start().await;

            let ok = write_list_effects(&mut effects, out)?;
            let tasks = view_model.state().tasks;
            if ok && tasks.is_empty() {
                writeln!(out, "No tasks")?;
            }
            for task in &tasks {
                writeln!(out, "{}", render::task_line(task))?;
            }
            Ok(ok)
        }
        Command::Add { title, description } => {
            let view_model = TaskListViewModel::new(use_cases);
            let mut effects = take(view_model.take_effects())?;
            view_model
                .handle(TaskListEvent::CreateTask { title, description })
                .await;

            let ok = write_list_effects(&mut effects, out)?;
            if let Some(task) = view_model.state().tasks.last() {
                write_lines(out, render::task_details(task))?;
            }
            Ok(ok)
        }
        Command::Show { id } => {
            let view_model = TaskDetailViewModel::new(use_cases, Some(id));
            let mut effects = take(view_model.take_effects())?;
            view_model.start().await;
            finish_detail(&view_model, &mut effects, out)
        }
        Command::Edit {
            id,
            title,
            description,
        } => {
            let view_model = TaskDetailViewModel::new(use_cases, Some(id));
            let mut effects = take(view_model.take_effects())?;
            view_model.start().await;
            if view_model.state().task.is_some() {
                view_model.handle(TaskDetailEvent::EditTask).await;
                view_model
                    .handle(TaskDetailEvent::UpdateTask { title, description })
                    .await;
            }
            finish_detail(&view_model, &mut effects, out)
        }
        Command::Toggle { id } => {
            let view_model = TaskDetailViewModel::new(use_cases, Some(id.clone()));
            let mut effects = take(view_model.take_effects())?;
            view_model.start().await;
            view_model
                .handle(TaskDetailEvent::ToggleTaskCompletion(id))
                .await;
            finish_detail(&view_model, &mut effects, out)
        }
        Command::Delete { id } => {
            let view_model = TaskDetailViewModel::new(use_cases, None);
            let mut effects = take(view_model.take_effects())?;
            view_model.handle(TaskDetailEvent::DeleteTask(id)).await;
            write_detail_effects(&mut effects, out)
        }
    }
}

fn take<E>(receiver: Option<UnboundedReceiver<E>>) -> anyhow::Result<UnboundedReceiver<E>> {
    receiver.ok_or_else(|| anyhow::anyhow!("Effect receiver already taken"))
}

fn finish_detail(
    view_model: &TaskDetailViewModel,
    effects: &mut UnboundedReceiver<TaskDetailEffect>,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let ok = write_detail_effects(effects, out)?;
    if let Some(task) = view_model.state().task {
        write_lines(out, render::task_details(&task))?;
    }
    Ok(ok)
}

fn write_list_effects(
    effects: &mut UnboundedReceiver<TaskListEffect>,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let mut ok = true;
    while let Ok(effect) = effects.try_recv() {
        ok &= !matches!(effect, TaskListEffect::ShowError(_));
        if let Some(line) = render::list_effect(&effect) {
            writeln!(out, "{line}")?;
        }
    }
    Ok(ok)
}

fn write_detail_effects(
    effects: &mut UnboundedReceiver<TaskDetailEffect>,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let mut ok = true;
    while let Ok(effect) = effects.try_recv() {
        ok &= !matches!(effect, TaskDetailEffect::ShowError(_));
        if let Some(line) = render::detail_effect(&effect) {
            writeln!(out, "{line}")?;
        }
    }
    Ok(ok)
}

fn write_lines(out: &mut impl Write, lines: Vec<String>) -> std::io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
