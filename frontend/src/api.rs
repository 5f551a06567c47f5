//! 前端服务上下文
//!
//! 把核心库的服务实例化为浏览器实现（fetch + localStorage），通过 Context 共享。

use crate::web::{BrowserTokenStore, FetchHttpClient};
use crossborder::{ApiClient, AuthService, ClientConfig, TripService};
use leptos::prelude::*;
use std::sync::Arc;

pub type Auth = AuthService<FetchHttpClient, BrowserTokenStore>;
pub type Trips = TripService<FetchHttpClient, BrowserTokenStore>;

#[derive(Clone)]
pub struct Services {
    pub auth: Auth,
    pub trips: Trips,
}

impl Services {
    pub fn new(config: &ClientConfig) -> Self {
        let api = ApiClient::new(config, FetchHttpClient, Arc::new(BrowserTokenStore));
        Self {
            auth: AuthService::new(api.clone()),
            trips: TripService::new(api),
        }
    }
}

/// 从 Context 获取服务
pub fn use_services() -> Services {
    use_context::<Services>().expect("Services should be provided")
}
