//! 视图任务
//!
//! 将核心库的 `TaskScope` 接到 Leptos 组件生命周期上：组件清理时中止其未完成的请求。

use crossborder::TaskScope;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// 创建与当前组件生命周期绑定的任务作用域
pub fn use_task_scope() -> TaskScope {
    let scope = TaskScope::new();
    on_cleanup({
        let scope = scope.clone();
        move || scope.cancel_all()
    });
    scope
}

/// 在作用域内启动任务；作用域取消后任务不再推进
pub fn spawn_bound<F>(scope: &TaskScope, fut: F)
where
    F: Future<Output = ()> + 'static,
{
    let task = scope.bind(fut);
    spawn_local(async move {
        let _ = task.await;
    });
}
