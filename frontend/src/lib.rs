//! CrossBorder 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `crossborder::route`: 路由定义与守卫（领域模型，位于核心库）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 会话状态管理
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod dashboard;
    pub mod landing;
    pub mod login;
    pub mod navbar;
    pub mod signup;
    pub mod trip_detail;
    pub mod trips;
}
pub mod logger;

use crate::api::Services;
use crate::auth::{AuthContext, init_auth};
use crate::components::dashboard::DashboardPage;
use crate::components::landing::LandingPage;
use crate::components::login::LoginPage;
use crate::components::navbar::Navbar;
use crate::components::signup::SignupPage;
use crate::components::trip_detail::TripDetailPage;
use crate::components::trips::TripsPage;

use crossborder::{AppRoute, ClientConfig};
use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，并实现核心库定义的端口
// (`HttpClient`, `TokenStore`)。
pub(crate) mod web {
    pub mod dialog;
    mod http;
    pub mod router;
    mod storage;
    pub mod task;

    pub use http::FetchHttpClient;
    pub use storage::BrowserTokenStore;
}

use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Landing => view! { <LandingPage /> }.into_any(),
        AppRoute::Signup => view! { <SignupPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Trips => view! { <TripsPage /> }.into_any(),
        AppRoute::TripDetail(id) => view! { <TripDetailPage id=id /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center py-24">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 读取配置并创建服务
    let config = ClientConfig::from_env();
    log::info!("using API at {}", config.api_base_url);
    let services = Services::new(&config);

    // 2. 创建认证上下文（从 LocalStorage 恢复令牌）
    let auth_ctx = AuthContext::new(services.auth.restore());
    provide_context(services.clone());
    provide_context(auth_ctx);

    // 3. 令牌变化时解析用户资料
    init_auth(&auth_ctx, &services);

    // 4. 获取会话信号，用于注入路由服务（解耦！）
    let session = auth_ctx.session_signal();

    view! {
        // 5. 路由器组件：注入会话信号实现守卫
        <Router session=session>
            <div class="min-h-screen bg-base-200">
                <Navbar />
                <main class="py-6">
                    <RouterOutlet matcher=route_matcher />
                </main>
            </div>
        </Router>
    }
}
