// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::start_test_server;
use async_trait::async_trait;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use scanrs::domain::models::ScanResult;
use scanrs::engines::traits::{ProbeEngine, ProbeError, ProbeRequest, ProbeResponse};
use scanrs::scanner::Scanner;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

async fn drain(scanner: &mut Scanner) -> Vec<ScanResult> {
    let mut results = Vec::new();
    while let Some(result) = scanner.next_result().await {
        results.push(result);
    }
    results
}

#[tokio::test]
async fn test_primary_sweep_without_robots() {
    let app = Router::new()
        .route("/x", get(|| async { Html("<html><title>X</title></html>") }))
        .route("/y", get(|| async { StatusCode::NOT_FOUND }));
    let base = start_test_server(app).await;

    let mut scanner = Scanner::new(
        vec![format!("{}/", base)],
        vec!["x".to_string(), "y".to_string()],
        4,
        Duration::from_secs(5),
        Vec::new(),
    )
    .unwrap();
    scanner.start();

    let results = drain(&mut scanner).await;
    assert_eq!(results.len(), 2);

    let urls: HashSet<String> = results.iter().map(|r| r.full_url.clone()).collect();
    assert!(urls.contains(&format!("{}/x", base)));
    assert!(urls.contains(&format!("{}/y", base)));

    for result in &results {
        assert_ne!(result.status_code, 0);
        assert!(result.error.is_none());
    }

    let x = results
        .iter()
        .find(|r| r.full_url.ends_with("/x"))
        .unwrap();
    assert_eq!(x.status_code, 200);
    assert_eq!(x.title, "X");
    assert!(x.content_length > 0);
}

#[tokio::test]
async fn test_robots_disallow_adds_tasks() {
    let app = Router::new()
        .route("/x", get(|| async { Html("<html></html>") }))
        .route(
            "/robots.txt",
            get(|| async { "User-agent: *\nDisallow: /secret\nDisallow: /\nDisallow:\n" }),
        )
        .route(
            "/secret",
            get(|| async { Html("<html><TITLE>Top\nSecret</TITLE></html>") }),
        );
    let base = start_test_server(app).await;

    let mut scanner = Scanner::new(
        vec![base.clone()],
        vec!["x".to_string()],
        2,
        Duration::from_secs(5),
        Vec::new(),
    )
    .unwrap();
    scanner.start();

    let results = drain(&mut scanner).await;
    assert_eq!(results.len(), 2);

    let secret = results
        .iter()
        .find(|r| r.full_url == format!("{}/secret", base))
        .expect("robots-derived path was not scanned");
    assert_eq!(secret.status_code, 200);
    assert_eq!(secret.title, "Top Secret");
}

#[tokio::test]
async fn test_transport_failure_yields_status_zero_with_error() {
    // 端口1上没有监听者，连接被拒绝
    let mut scanner = Scanner::new(
        vec!["http://127.0.0.1:1/".to_string()],
        vec!["x".to_string()],
        1,
        Duration::from_secs(2),
        Vec::new(),
    )
    .unwrap();
    scanner.start();

    let results = drain(&mut scanner).await;
    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.status_code, 0);
    assert!(result.error.as_deref().is_some_and(|e| !e.is_empty()));
    assert_eq!(result.content_length, 0);
    assert!(result.title.is_empty());
}

#[tokio::test]
async fn test_default_user_agent_injection() {
    async fn echo_user_agent(headers: HeaderMap) -> Html<String> {
        let ua = headers
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        Html(format!("<title>{}</title>", ua))
    }

    let app = Router::new().route("/ua", get(echo_user_agent));
    let base = start_test_server(app).await;

    // 未提供User-Agent时注入默认值
    let mut scanner = Scanner::new(
        vec![base.clone()],
        vec!["ua".to_string()],
        1,
        Duration::from_secs(5),
        Vec::new(),
    )
    .unwrap();
    scanner.start();
    let results = drain(&mut scanner).await;
    assert_eq!(
        results[0].title,
        scanrs::scanner::scan_worker::DEFAULT_USER_AGENT
    );

    // 大小写变体的User-Agent阻止注入
    let mut scanner = Scanner::new(
        vec![base.clone()],
        vec!["ua".to_string()],
        1,
        Duration::from_secs(5),
        vec![("USER-AGENT".to_string(), "custom-agent/1.0".to_string())],
    )
    .unwrap();
    scanner.start();
    let results = drain(&mut scanner).await;
    assert_eq!(results[0].title, "custom-agent/1.0");
}

#[tokio::test]
async fn test_stop_is_idempotent() {
    let app = Router::new().route("/x", get(|| async { "ok" }));
    let base = start_test_server(app).await;

    let mut scanner = Scanner::new(
        vec![base],
        vec!["x".to_string()],
        2,
        Duration::from_secs(5),
        Vec::new(),
    )
    .unwrap();
    scanner.start();

    let results = drain(&mut scanner).await;
    assert!(results.len() <= 1);

    // 结果流结束后重复停止不得报错或死锁
    scanner.stop();
    scanner.stop();
}

#[tokio::test]
async fn test_stop_before_drain_terminates_stream() {
    let app = Router::new().route("/x", get(|| async { "ok" }));
    let base = start_test_server(app).await;

    let dict: Vec<String> = (0..50).map(|i| format!("x?i={}", i)).collect();
    let mut scanner = Scanner::new(
        vec![base],
        dict,
        2,
        Duration::from_secs(5),
        Vec::new(),
    )
    .unwrap();
    scanner.start();
    scanner.stop();
    scanner.stop();

    // 流必须结束，且不多于任务总数
    let results = drain(&mut scanner).await;
    assert!(results.len() <= 50);
}

/// 统计并发探测数量的假引擎，robots.txt探测不计入
struct CountingProbe {
    current: AtomicUsize,
    max: AtomicUsize,
}

#[async_trait]
impl ProbeEngine for CountingProbe {
    async fn probe(&self, request: &ProbeRequest) -> Result<ProbeResponse, ProbeError> {
        if request.url.ends_with("robots.txt") {
            return Ok(ProbeResponse {
                status_code: 404,
                body: Vec::new(),
            });
        }

        let in_flight = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        self.max.fetch_max(in_flight, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        self.current.fetch_sub(1, Ordering::SeqCst);

        Ok(ProbeResponse {
            status_code: 200,
            body: b"<title>ok</title>".to_vec(),
        })
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}

#[tokio::test]
async fn test_in_flight_probes_never_exceed_thread_count() {
    let engine = Arc::new(CountingProbe {
        current: AtomicUsize::new(0),
        max: AtomicUsize::new(0),
    });
    let counter = Arc::clone(&engine);

    let dict: Vec<String> = (0..12).map(|i| format!("p{}", i)).collect();
    let mut scanner = Scanner::with_engine(
        vec!["http://target/".to_string()],
        dict,
        3,
        Duration::from_secs(5),
        Vec::new(),
        engine,
    )
    .unwrap();
    scanner.start();

    let results = drain(&mut scanner).await;
    assert_eq!(results.len(), 12);
    assert!(counter.max.load(Ordering::SeqCst) <= 3);
}

#[tokio::test]
async fn test_result_count_matches_targets_times_dict() {
    let app = Router::new()
        .route("/a", get(|| async { "a" }))
        .route("/b", get(|| async { "b" }))
        .route("/c", get(|| async { "c" }));
    let base = start_test_server(app).await;
    let app2 = Router::new().route("/a", get(|| async { "a" }));
    let base2 = start_test_server(app2).await;

    let mut scanner = Scanner::new(
        vec![base, base2],
        vec!["a".to_string(), "b".to_string(), "c".to_string()],
        4,
        Duration::from_secs(5),
        Vec::new(),
    )
    .unwrap();
    scanner.start();

    let results = drain(&mut scanner).await;
    assert_eq!(results.len(), 2 * 3);
}
