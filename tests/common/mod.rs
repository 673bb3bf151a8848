#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;

/// 单条路由：路径、状态码、响应体
#[derive(Clone)]
pub struct Route {
    pub path: &'static str,
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn ok(path: &'static str, body: impl Into<String>) -> Self {
        Self {
            path,
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(path: &'static str, status: u16) -> Self {
        Self {
            path,
            status,
            body: String::from("{}"),
        }
    }
}

/// 启动测试用后端，返回 base url 和命中路由的请求数
///
/// 未注册的路径由 axum 返回 404
pub async fn serve(routes: Vec<Route>) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));

    let mut app = Router::new();
    for route in routes {
        let counter = hits.clone();
        let status = StatusCode::from_u16(route.status).unwrap();
        let body = route.body;
        app = app.route(
            route.path,
            any(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                let body = body.clone();
                async move { (status, [(header::CONTENT_TYPE, "application/json")], body) }
            }),
        );
    }

    (spawn(app).await, hits)
}

/// 接受请求但永远不响应
pub async fn serve_hung() -> String {
    let app = Router::new().fallback(|| async {
        std::future::pending::<()>().await;
        StatusCode::OK
    });
    spawn(app).await
}

async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// 三道题，正确答案依次为 0、1、2
pub fn three_questions_json() -> String {
    r#"[
        {"question": "¿Artículo 1 de la Constitución?", "options": ["A", "B", "C", "D"], "correctAnswer": 0, "explanation": "España se constituye en un Estado social."},
        {"question": "¿Cuántos artículos tiene?", "options": ["169", "169 + disposiciones", "150", "200"], "correctAnswer": 1},
        {"question": "¿Año de aprobación?", "options": ["1975", "1977", "1978", "1982"], "correctAnswer": 2}
    ]"#
    .to_string()
}

/// 写入临时题库文件
pub fn write_temp_json(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "aula_test_player_{}_{}.json",
        std::process::id(),
        name
    ));
    std::fs::write(&path, body).unwrap();
    path
}
