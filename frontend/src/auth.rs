//! 认证模块
//!
//! 管理会话状态，与路由系统解耦。
//! 路由服务通过注入的会话信号来执行守卫。

use crate::api::{Auth, Services};
use crossborder::SessionState;
use crossborder_shared::User;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 会话状态（只读）
    pub state: ReadSignal<SessionState>,
    /// 设置会话状态（写入）
    pub set_state: WriteSignal<SessionState>,
}

impl AuthContext {
    /// 创建新的认证上下文
    pub fn new(initial: SessionState) -> Self {
        let (state, set_state) = signal(initial);
        Self { state, set_state }
    }

    /// 获取会话状态信号（用于路由服务注入）
    pub fn session_signal(&self) -> Signal<SessionState> {
        let state = self.state;
        Signal::derive(move || state.get())
    }

    /// 当前已解析的用户（响应式）
    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user().cloned())
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 令牌每次变化（包括启动时从 LocalStorage 恢复的令牌）都会重新获取用户资料；
/// 获取失败视为令牌失效，会话回到未登录状态。
pub fn init_auth(ctx: &AuthContext, services: &Services) {
    let state = ctx.state;
    let set_state = ctx.set_state;
    let auth = services.auth.clone();

    let token = Memo::new(move |_| state.with(|s| s.token().map(str::to_string)));

    Effect::new(move |_| {
        let Some(token) = token.get() else {
            return;
        };
        if !state.with_untracked(SessionState::is_pending) {
            return;
        }

        let auth = auth.clone();
        spawn_local(async move {
            let user = auth.resolve_profile(&token).await;
            set_state.update(|s| *s = s.resolve(&token, user));
        });
    });
}

/// 注销并清除状态
///
/// 受保护页面的重定向由路由服务监听会话状态自动处理。
pub fn logout(ctx: &AuthContext, auth: &Auth) {
    ctx.set_state.set(auth.logout());
}
